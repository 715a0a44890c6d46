//! Two-player (human vs. computer) naval combat on a 10x10 grid.
//!
//! The crate covers the game core: fleets and ship damage tracking, turn
//! sequencing with the extra-turn-on-hit rule, the computer's random
//! placement/targeting policies, win and turn-cap adjudication, and
//! versioned session snapshots for stateless hosting layers. Rendering and
//! request parsing stay outside; [`service`] is the boundary they call.

mod common;
mod config;
mod fleet;
mod game;
mod grid;
mod logging;
mod policy;
mod service;
mod ship;
mod shot;

pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use policy::*;
pub use service::*;
pub use ship::*;
pub use shot::*;
