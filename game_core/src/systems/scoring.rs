use crate::config::Config;
use crate::resources::{Events, Progress};

/// Count the surviving tick and pay the periodic survival bonus.
///
/// A survival interval completes every 30 ticks; every second completed
/// interval pays the bonus, so the score grows by 5 per two seconds alive.
pub fn survival_tick(progress: &mut Progress, config: &Config) {
    progress.time_survived += 1;
    if progress.time_survived % config.bonus_period == 0 {
        progress.bonus_intervals += 1;
        if progress.bonus_intervals % 2 == 0 {
            progress.score += config.survival_bonus;
        }
    }
}

/// Raise the level once the score passes the next threshold.
///
/// The level only ever steps by one per tick; a score that jumps past
/// several thresholds at once catches up over the following ticks.
pub fn update_level(progress: &mut Progress, events: &mut Events, config: &Config) {
    if progress.score >= config.level_step * progress.level {
        progress.level += 1;
        progress
            .achievements
            .push(format!("Level {} Reached!", progress.level));
        events.level_up = true;
    }
}
