//! Drawable state handed to the renderer collaborator once per tick.
//!
//! The core never draws; a renderer consumes this snapshot and owns fonts,
//! sprites and the window. Every rectangle is already in screen space.

use crate::field::Aabb;
use crate::fsm::Phase;

/// Screen-space rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl From<Aabb> for Rect {
    fn from(aabb: Aabb) -> Self {
        Self {
            x: aabb.min.x,
            y: aabb.min.y,
            w: aabb.max.x - aabb.min.x,
            h: aabb.max.y - aabb.min.y,
        }
    }
}

/// Per-tick game state snapshot
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub phase: Phase,
    pub player: Rect,
    /// Bottom-to-top generation order
    pub platforms: Vec<Rect>,
    pub coins: Vec<Rect>,
    pub obstacles: Vec<Rect>,
    pub score: u32,
    pub level: u32,
    pub coins_collected: u32,
    /// True while the transient pickup indicator should show
    pub coin_flash: bool,
    pub latest_achievement: Option<String>,
}
