use rand::Rng;

use crate::field::Aabb;

/// Vertical scroll offset; screen y = world y - camera y
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    pub y: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen_y(&self, world_y: f32) -> f32 {
        world_y - self.y
    }

    pub fn to_screen(&self, world: Aabb) -> Aabb {
        world.offset_y(-self.y)
    }
}

/// Score, level and pickup counters for one session
#[derive(Debug, Clone, Default)]
pub struct Progress {
    pub score: u32,
    pub level: u32,
    pub coins: u32,
    /// Ticks survived in the current session
    pub time_survived: u32,
    /// Completed survival intervals; every 2nd one pays the bonus
    pub bonus_intervals: u32,
    /// Remaining ticks for the transient pickup indicator
    pub coin_flash: u32,
    /// Level-up announcements, oldest first
    pub achievements: Vec<String>,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            level: 1,
            ..Self::default()
        }
    }

    /// Age the pickup indicator by one tick
    pub fn decay_flash(&mut self) {
        if self.coin_flash > 0 {
            self.coin_flash -= 1;
        }
    }

    pub fn flash_visible(&self) -> bool {
        self.coin_flash > 0
    }

    pub fn latest_achievement(&self) -> Option<&str> {
        self.achievements.last().map(String::as_str)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform integer in [lo, hi], both ends inclusive
    pub fn roll(&mut self, lo: i32, hi: i32) -> i32 {
        self.0.gen_range(lo..=hi)
    }

    /// True with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub landed: bool,
    pub coin_taken: bool,
    pub level_up: bool,
    pub died: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.landed = false;
        self.coin_taken = false;
        self.level_up = false;
        self.died = false;
    }
}

/// Queued horizontal move states from the input collaborator.
///
/// The client reports the held direction once per tick; if several arrive in
/// one tick the latest wins, and an empty queue reads as no key held.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub moves: Vec<i8>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_move(&mut self, dir: i8) {
        self.moves.push(dir);
    }

    /// The direction for this tick; drains the queue
    pub fn take_dir(&mut self) -> i8 {
        let dir = self.moves.last().copied().unwrap_or(0);
        self.moves.clear();
        dir
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
