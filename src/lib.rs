//! Lanecross - a tile-grid lane-crossing arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic game logic (grid, collisions, entities, state machine)
//!
//! Rendering, asset loading, key decoding and the timing source are external
//! collaborators: the core exposes sprite ids, pixel positions and HUD
//! snapshots, and consumes already-decoded directions plus a per-tick `dt`.

pub mod sim;

pub use sim::{Direction, GamePhase, GameSession, ResetReason};

/// Game configuration constants
pub mod consts {
    /// Tile width in pixels
    pub const X_DIVISION: f32 = 101.0;
    /// Tile height in pixels
    pub const Y_DIVISION: f32 = 83.0;

    /// Nominal sprite bounds shared by every entity type
    pub const SPRITE_WIDTH: f32 = 101.0;
    pub const SPRITE_HEIGHT: f32 = 171.0;

    /// Playfield bounds as tile ratios (pixel position / division).
    /// A row ratio below zero is the goal lane.
    pub const COL_RATIO_MIN: f32 = 0.0;
    pub const COL_RATIO_MAX: f32 = 5.0;
    pub const ROW_RATIO_MIN: f32 = -1.0;
    pub const ROW_RATIO_MAX: f32 = 5.0;

    /// Hazard lanes and speed range (inclusive draws)
    pub const HAZARD_ROW_MIN: i32 = 1;
    pub const HAZARD_ROW_MAX: i32 = 3;
    pub const HAZARD_SPEED_MIN: i32 = 80;
    pub const HAZARD_SPEED_MAX: i32 = 150;
    /// Hazards at or past this x wrap back off-screen left
    pub const HAZARD_EXIT_X: f32 = 605.0;
    pub const HAZARD_WRAP_X: f32 = -100.0;
    pub const HAZARD_SPAWN_X: f32 = 0.0;

    /// Collectible (gem/key) placement ranges
    pub const COLLECTIBLE_COL_MIN: i32 = 1;
    pub const COLLECTIBLE_COL_MAX: i32 = 5;
    pub const COLLECTIBLE_ROW_MIN: i32 = 1;
    pub const COLLECTIBLE_ROW_MAX: i32 = 3;

    /// Gate column range (its row is always the goal lane)
    pub const GATE_COL_MIN: i32 = 1;
    pub const GATE_COL_MAX: i32 = 5;

    /// Per-type sprite alignment offsets
    pub const PLAYER_Y_OFFSET: f32 = 10.0;
    pub const HAZARD_Y_OFFSET: f32 = 20.0;
    pub const GEM_Y_OFFSET: f32 = 12.0;
    pub const KEY_Y_OFFSET: f32 = 10.0;
    pub const GATE_Y_OFFSET: f32 = 25.0;

    /// Fixed player spawn position
    pub const PLAYER_SPAWN_X: f32 = 100.0 + 2.0 * X_DIVISION;
    pub const PLAYER_SPAWN_Y: f32 = 5.0 * Y_DIVISION - PLAYER_Y_OFFSET;

    /// How long the level-up banner stays up before play resumes
    pub const LEVEL_UP_SECS: f32 = 1.0;
    /// Cadence on which the external scheduler offers a collectible spawn
    pub const COLLECTIBLE_SPAWN_SECS: f32 = 5.0;

    /// Score weights: [blue, green, orange] gem values, plus one per level
    pub const GEM_VALUES: [u32; 3] = [10, 15, 20];
    pub const LEVEL_VALUE: u32 = 50;
}
