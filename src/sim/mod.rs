//! Deterministic game core
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Per-tick `dt` supplied by the caller, no wall-clock access
//! - Seeded RNG only (one `Pcg32` owned by the session)
//! - No rendering or platform dependencies
//!
//! The session is the single owner of all mutable game state; there are no
//! process-wide globals.

pub mod collision;
pub mod entity;
pub mod grid;
pub mod state;
pub mod tick;
pub mod view;

pub use collision::{Footprint, Insets};
pub use entity::{Direction, Gate, Gem, GemColor, Hazard, Key, Player, SpriteId};
pub use grid::{Occupancy, TilePos, random_in_range};
pub use state::{GamePhase, GameSession, ResetReason, Scoreboard};
pub use view::{DrawSprite, Hud};
