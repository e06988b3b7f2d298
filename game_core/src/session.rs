use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Coin, Obstacle, Player};
use crate::config::{Config, Params};
use crate::field::{Platform, Terrain};
use crate::fsm::{GameAction, GameFsm, Phase};
use crate::resources::{Camera, Events, GameRng, InputQueue, Progress};
use crate::snapshot::{Rect, Snapshot};
use crate::{create_player, step};

/// One owned game session: the entity world, every simulation resource and
/// the state machine. Nothing else holds game state.
pub struct Session {
    pub world: World,
    pub fsm: GameFsm,
    pub terrain: Terrain,
    pub camera: Camera,
    pub progress: Progress,
    pub events: Events,
    pub input: InputQueue,
    pub rng: GameRng,
    pub config: Config,
    player: Entity,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        let mut world = World::new();
        let player = create_player(
            &mut world,
            Vec2::new(Params::PLAYER_SPAWN_X, Params::PLAYER_SPAWN_Y),
        );

        Self {
            world,
            fsm: GameFsm::new(),
            terrain: Terrain::new(Platform::new(
                Params::FIRST_PLATFORM_X,
                Params::FIRST_PLATFORM_Y,
            )),
            camera: Camera::new(),
            progress: Progress::new(),
            events: Events::new(),
            input: InputQueue::new(),
            rng: GameRng::new(seed),
            config: Config::new(),
            player,
        }
    }

    /// Restore every gameplay field to its initial value: player centered,
    /// a single starting platform, no coins or obstacles, zeroed counters.
    /// The RNG keeps rolling so restarted runs differ.
    pub fn reset(&mut self) {
        self.world.clear();
        self.player = create_player(
            &mut self.world,
            Vec2::new(Params::PLAYER_SPAWN_X, Params::PLAYER_SPAWN_Y),
        );
        self.terrain = Terrain::new(Platform::new(
            Params::FIRST_PLATFORM_X,
            Params::FIRST_PLATFORM_Y,
        ));
        self.camera = Camera::new();
        self.progress = Progress::new();
        self.events = Events::new();
        self.input.clear();
    }

    /// Dispatch a state-machine action. A restart accepted from the
    /// game-over screen also resets the session.
    pub fn handle(&mut self, action: GameAction) -> bool {
        let accepted = self.fsm.transition(action);
        if accepted && action == GameAction::Restart {
            self.reset();
        }
        accepted
    }

    /// Advance the simulation by one tick. Outside of Playing this only
    /// drains stale input; menu screens do not simulate.
    pub fn step(&mut self) {
        if !self.fsm.is_playing() {
            self.input.clear();
            return;
        }

        step(
            &mut self.world,
            &mut self.terrain,
            &mut self.camera,
            &mut self.progress,
            &mut self.events,
            &mut self.input,
            &mut self.rng,
            &self.config,
        );

        if self.events.died {
            self.fsm.transition(GameAction::PlayerDied);
        }
    }

    /// The player's physics state (a copy)
    pub fn player(&self) -> Player {
        *self
            .world
            .get::<&Player>(self.player)
            .expect("player entity is always alive")
    }

    pub fn phase(&self) -> Phase {
        self.fsm.state()
    }

    pub fn should_quit(&self) -> bool {
        self.fsm.should_quit()
    }

    /// Drawable state for the renderer collaborator
    pub fn snapshot(&self) -> Snapshot {
        let player = Rect::from(self.camera.to_screen(self.player().aabb()));
        let platforms = self
            .terrain
            .iter()
            .map(|p| Rect::from(self.camera.to_screen(p.aabb())))
            .collect();
        let coins = self
            .world
            .query::<&Coin>()
            .iter()
            .map(|(_e, c)| Rect::from(self.camera.to_screen(c.aabb())))
            .collect();
        let obstacles = self
            .world
            .query::<&Obstacle>()
            .iter()
            .map(|(_e, o)| Rect::from(self.camera.to_screen(o.aabb())))
            .collect();

        Snapshot {
            phase: self.fsm.state(),
            player,
            platforms,
            coins,
            obstacles,
            score: self.progress.score,
            level: self.progress.level,
            coins_collected: self.progress.coins,
            coin_flash: self.progress.flash_visible(),
            latest_achievement: self.progress.latest_achievement().map(str::to_owned),
        }
    }
}
