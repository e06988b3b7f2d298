/// Fixed tuning parameters for the jumper
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (visible world area, pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Horizontal wrap teleports across this margin beyond the field edges
    pub const WRAP_MARGIN: f32 = 50.0;

    // Player
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_SPAWN_X: f32 = 400.0;
    pub const PLAYER_SPAWN_Y: f32 = 400.0;
    pub const RUN_SPEED: f32 = 7.0;
    /// Upward impulse units granted on landing
    pub const LANDING_IMPULSE: i32 = 20;

    // Camera
    pub const CAMERA_MARGIN: f32 = 200.0;
    pub const CAMERA_STEP: f32 = 10.0;

    // Platforms
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 10.0;
    pub const FIRST_PLATFORM_X: f32 = 400.0;
    pub const FIRST_PLATFORM_Y: f32 = 500.0;
    pub const PLATFORM_X_MIN: i32 = 50;
    pub const PLATFORM_X_MAX: i32 = 750;
    pub const PLATFORM_GAP_MIN: i32 = 50;
    pub const PLATFORM_GAP_MAX: i32 = 100;

    // Coins and obstacles
    pub const COIN_SIZE: f32 = 20.0;
    pub const OBSTACLE_SIZE: f32 = 30.0;
    /// Horizontal span above a platform in which spawns are placed
    pub const SPAWN_SPAN: i32 = 80;
    /// Vertical clearance between a platform top and a spawn
    pub const SPAWN_CLEARANCE: f32 = 30.0;
    /// Single-retry upward nudge for a coin placed on another coin
    pub const COIN_NUDGE: f32 = 10.0;
    pub const COIN_CHANCE: f64 = 0.5;
    pub const OBSTACLE_CHANCE: f64 = 0.3;

    // Scoring
    pub const COIN_SCORE: u32 = 10;
    pub const SURVIVAL_BONUS: u32 = 5;
    /// Ticks per survival interval; the bonus lands every 2nd interval
    pub const BONUS_PERIOD: u32 = 30;
    pub const COIN_FLASH_TICKS: u32 = 30;
    pub const LEVEL_STEP: u32 = 100;

    // Pacing (the client drives the simulation at this rate)
    pub const TICKS_PER_SECOND: u32 = 30;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub wrap_margin: f32,
    pub run_speed: f32,
    pub landing_impulse: i32,
    pub camera_margin: f32,
    pub camera_step: f32,
    pub platform_x_min: i32,
    pub platform_x_max: i32,
    pub gap_min: i32,
    pub gap_max: i32,
    pub spawn_span: i32,
    pub spawn_clearance: f32,
    pub coin_chance: f64,
    pub obstacle_chance: f64,
    pub coin_score: u32,
    pub survival_bonus: u32,
    pub bonus_period: u32,
    pub coin_flash_ticks: u32,
    pub level_step: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            wrap_margin: Params::WRAP_MARGIN,
            run_speed: Params::RUN_SPEED,
            landing_impulse: Params::LANDING_IMPULSE,
            camera_margin: Params::CAMERA_MARGIN,
            camera_step: Params::CAMERA_STEP,
            platform_x_min: Params::PLATFORM_X_MIN,
            platform_x_max: Params::PLATFORM_X_MAX,
            gap_min: Params::PLATFORM_GAP_MIN,
            gap_max: Params::PLATFORM_GAP_MAX,
            spawn_span: Params::SPAWN_SPAN,
            spawn_clearance: Params::SPAWN_CLEARANCE,
            coin_chance: Params::COIN_CHANCE,
            obstacle_chance: Params::OBSTACLE_CHANCE,
            coin_score: Params::COIN_SCORE,
            survival_bonus: Params::SURVIVAL_BONUS,
            bonus_period: Params::BONUS_PERIOD,
            coin_flash_ticks: Params::COIN_FLASH_TICKS,
            level_step: Params::LEVEL_STEP,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a horizontal position across the field edges (torus on x only)
    pub fn wrap_x(&self, x: f32) -> f32 {
        if x > self.field_width {
            -self.wrap_margin
        } else if x < -self.wrap_margin {
            self.field_width
        } else {
            x
        }
    }
}
