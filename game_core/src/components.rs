use glam::Vec2;

use crate::config::Params;
use crate::field::Aabb;

/// Player component - the bouncing character
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Top-left corner, world space
    pub pos: Vec2,
    /// Horizontal velocity applied this tick
    pub xmove: f32,
    /// Remaining upward impulse units; decays by 1 per tick
    pub jump: i32,
    /// Downward accumulator; grows by 1 per falling tick
    pub gravity: i32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            xmove: 0.0,
            jump: 0,
            gravity: 0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(Params::PLAYER_SIZE))
    }

    pub fn is_falling(&self) -> bool {
        self.gravity > 0
    }
}

/// Horizontal movement intent for the player
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveIntent {
    pub dir: i8, // -1 = left, 0 = stop, 1 = right
}

impl MoveIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A collectible coin
#[derive(Debug, Clone, Copy)]
pub struct Coin {
    pub pos: Vec2,
}

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(Params::COIN_SIZE))
    }
}

/// A lethal obstacle
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub pos: Vec2,
}

impl Obstacle {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(Params::OBSTACLE_SIZE))
    }
}
