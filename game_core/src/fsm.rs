//! Game State Machine
//!
//! Menus and the game-over screen are explicit states driven from a single
//! dispatch point; nothing in the core blocks on input.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    MainMenu,
    Instructions,
    Playing,
    GameOver,
    /// Terminal state; the client observes it and exits
    Quitting,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Advance past the menu or instructions screen
    Advance,
    /// The player hit an obstacle or fell off-world
    PlayerDied,
    /// Start a fresh session from the game-over screen
    Restart,
    Quit,
}

/// Game Finite State Machine
pub struct GameFsm {
    state: Phase,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: Phase::MainMenu,
        }
    }

    /// Get current state
    pub fn state(&self) -> Phase {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition; returns false and stays put if invalid
    pub fn transition(&mut self, action: GameAction) -> bool {
        match self.next_state(action) {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        }
    }

    /// Get next state for a given action (if valid)
    fn next_state(&self, action: GameAction) -> Option<Phase> {
        match (self.state, action) {
            (Phase::MainMenu, GameAction::Advance) => Some(Phase::Instructions),
            (Phase::Instructions, GameAction::Advance) => Some(Phase::Playing),
            (Phase::Playing, GameAction::PlayerDied) => Some(Phase::GameOver),
            (Phase::GameOver, GameAction::Restart) => Some(Phase::Playing),

            // Quit is accepted from every live state (window close included)
            (Phase::Quitting, GameAction::Quit) => None,
            (_, GameAction::Quit) => Some(Phase::Quitting),

            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == Phase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == Phase::GameOver
    }

    pub fn should_quit(&self) -> bool {
        self.state == Phase::Quitting
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
