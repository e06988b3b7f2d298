pub mod collision;
pub mod gc;
pub mod hazards;
pub mod input;
pub mod movement;
pub mod pickups;
pub mod scoring;
pub mod scroll;
pub mod worldgen;

pub use collision::*;
pub use gc::*;
pub use hazards::*;
pub use input::*;
pub use movement::*;
pub use pickups::*;
pub use scoring::*;
pub use scroll::*;
pub use worldgen::*;
