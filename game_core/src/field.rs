use std::collections::VecDeque;

use glam::Vec2;

use crate::config::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from a top-left corner and a size (world y grows downward)
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap test: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// The same box shifted vertically
    pub fn offset_y(&self, dy: f32) -> Aabb {
        Self {
            min: Vec2::new(self.min.x, self.min.y + dy),
            max: Vec2::new(self.max.x, self.max.y + dy),
        }
    }
}

/// A single landing platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    /// Top-left corner, world space
    pub pos: Vec2,
}

impl Platform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(
            self.pos,
            Vec2::new(Params::PLATFORM_WIDTH, Params::PLATFORM_HEIGHT),
        )
    }
}

/// The generated platform sequence, oldest (lowest) first.
///
/// Insertion order is generation order; the generator appends above and the
/// pruner pops from the front, so the deque never empties.
#[derive(Debug, Clone)]
pub struct Terrain {
    platforms: VecDeque<Platform>,
}

impl Terrain {
    pub fn new(first: Platform) -> Self {
        let mut platforms = VecDeque::new();
        platforms.push_back(first);
        Self { platforms }
    }

    /// The most recently generated (highest) platform
    pub fn newest(&self) -> &Platform {
        self.platforms.back().expect("platform sequence is never empty")
    }

    /// The oldest (lowest) surviving platform
    pub fn oldest(&self) -> &Platform {
        self.platforms.front().expect("platform sequence is never empty")
    }

    pub fn push(&mut self, platform: Platform) {
        self.platforms.push_back(platform);
    }

    pub fn pop_oldest(&mut self) -> Option<Platform> {
        self.platforms.pop_front()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }
}
