//! Concrete entity types
//!
//! Plain structs sharing the footprint/placement vocabulary from `grid` and
//! `collision`; there is no entity base type. Collision outcomes are decided
//! by the session's tick code, not by callbacks stored on the entities.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Footprint, Insets};
use super::grid::{Occupancy, TilePos, random_in_range};
use crate::consts::*;

/// Opaque asset identifier handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteId {
    HazardBug,
    PlayerBoy,
    GemBlue,
    GemGreen,
    GemOrange,
    Key,
    GateClosed,
    GateOpen,
}

impl SpriteId {
    pub fn asset_path(self) -> &'static str {
        match self {
            SpriteId::HazardBug => "images/enemy-bug.png",
            SpriteId::PlayerBoy => "images/char-boy.png",
            SpriteId::GemBlue => "images/gem-blue-medium.png",
            SpriteId::GemGreen => "images/gem-green-medium.png",
            SpriteId::GemOrange => "images/gem-orange-medium.png",
            SpriteId::Key => "images/key.png",
            SpriteId::GateClosed => "images/gate-closed.png",
            SpriteId::GateOpen => "images/gate-open.png",
        }
    }
}

/// Logical movement direction, already decoded from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// One-tile pixel step in this direction.
    pub fn step(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-X_DIVISION, 0.0),
            Direction::Up => Vec2::new(0.0, -Y_DIVISION),
            Direction::Right => Vec2::new(X_DIVISION, 0.0),
            Direction::Down => Vec2::new(0.0, Y_DIVISION),
        }
    }
}

pub const HAZARD_INSETS: Insets = Insets::new(0.0, 70.0, 0.0, 20.0);
pub const PLAYER_INSETS: Insets = Insets::new(15.0, 64.0, 15.0, 30.0);
pub const GEM_INSETS: Insets = Insets::new(0.0, 63.0, 0.0, 30.0);
pub const KEY_INSETS: Insets = Insets::new(0.0, 63.0, 0.0, 30.0);
pub const GATE_INSETS: Insets = Insets::new(0.0, 63.0, 0.0, 15.0);

/// A lane hazard moving rightward at constant speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub pos: Vec2,
    /// Pixels per second, redrawn on every (re)spawn
    pub speed: f32,
    pub footprint: Footprint,
}

impl Hazard {
    /// Fresh hazard at the spawn origin with a random lane and speed.
    pub fn spawn(rng: &mut Pcg32) -> Self {
        let mut hazard = Self {
            pos: Vec2::new(HAZARD_SPAWN_X, 0.0),
            speed: 0.0,
            footprint: Footprint::for_sprite(Vec2::ZERO, HAZARD_INSETS),
        };
        hazard.roll_stats(rng);
        hazard
    }

    /// Back to the spawn origin with a freshly drawn lane and speed.
    pub fn reset(&mut self, rng: &mut Pcg32) {
        self.pos.x = HAZARD_SPAWN_X;
        self.roll_stats(rng);
    }

    /// Redraw lane and speed without touching the column.
    fn roll_stats(&mut self, rng: &mut Pcg32) {
        let row = random_in_range(rng, HAZARD_ROW_MIN, HAZARD_ROW_MAX);
        self.pos.y = row as f32 * Y_DIVISION - HAZARD_Y_OFFSET;
        self.speed = random_in_range(rng, HAZARD_SPEED_MIN, HAZARD_SPEED_MAX) as f32;
        self.refresh_footprint();
    }

    /// Advance one tick. Past the right-exit threshold the hazard wraps to
    /// the off-screen left position and re-rolls its lane and speed.
    pub fn advance(&mut self, dt: f32, rng: &mut Pcg32) {
        if self.pos.x < HAZARD_EXIT_X {
            self.pos.x += self.speed * dt;
        } else {
            self.pos.x = HAZARD_WRAP_X;
            self.roll_stats(rng);
        }
        self.refresh_footprint();
    }

    fn refresh_footprint(&mut self) {
        self.footprint = Footprint::for_sprite(self.pos, HAZARD_INSETS);
    }

    pub fn sprite(&self) -> SpriteId {
        SpriteId::HazardBug
    }
}

/// The player-controlled character. Position changes only through directional
/// input; the per-tick update just refreshes the footprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub footprint: Footprint,
}

impl Player {
    pub fn spawn() -> Self {
        let pos = Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
        Self {
            pos,
            footprint: Footprint::for_sprite(pos, PLAYER_INSETS),
        }
    }

    /// Back to the fixed spawn tile (never randomized).
    pub fn reset(&mut self) {
        *self = Self::spawn();
    }

    pub fn refresh_footprint(&mut self) {
        self.footprint = Footprint::for_sprite(self.pos, PLAYER_INSETS);
    }

    /// Column position as a tile ratio.
    pub fn col_ratio(&self) -> f32 {
        self.pos.x / X_DIVISION
    }

    /// Row position as a tile ratio.
    pub fn row_ratio(&self) -> f32 {
        self.pos.y / Y_DIVISION
    }

    /// The goal lane is everything above row zero.
    pub fn on_goal_row(&self) -> bool {
        self.row_ratio() < 0.0
    }

    pub fn sprite(&self) -> SpriteId {
        SpriteId::PlayerBoy
    }
}

/// Gem color, drawn at placement time. Indexes the scoreboard buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GemColor {
    Blue,
    Green,
    Orange,
}

impl GemColor {
    pub fn draw(rng: &mut Pcg32) -> Self {
        match random_in_range(rng, 0, 2) {
            0 => GemColor::Blue,
            1 => GemColor::Green,
            _ => GemColor::Orange,
        }
    }

    pub fn index(self) -> usize {
        match self {
            GemColor::Blue => 0,
            GemColor::Green => 1,
            GemColor::Orange => 2,
        }
    }

    pub fn value(self) -> u32 {
        GEM_VALUES[self.index()]
    }

    pub fn sprite(self) -> SpriteId {
        match self {
            GemColor::Blue => SpriteId::GemBlue,
            GemColor::Green => SpriteId::GemGreen,
            GemColor::Orange => SpriteId::GemOrange,
        }
    }
}

/// A score pickup. At most one is live at a time; pickup removes it from the
/// session and releases its tile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gem {
    pub tile: TilePos,
    pub pos: Vec2,
    pub color: GemColor,
    pub footprint: Footprint,
    /// Latch making overlap edge-triggered rather than level-triggered
    triggered: bool,
}

impl Gem {
    /// Place a new gem on a free tile, reserving it in `occupancy`.
    pub fn place(rng: &mut Pcg32, occupancy: &mut Occupancy) -> Self {
        let color = GemColor::draw(rng);
        let tile = occupancy.place(
            rng,
            (COLLECTIBLE_COL_MIN, COLLECTIBLE_COL_MAX),
            (COLLECTIBLE_ROW_MIN, COLLECTIBLE_ROW_MAX),
        );
        let pos = tile.to_pixels(0.0, GEM_Y_OFFSET);
        Self {
            tile,
            pos,
            color,
            footprint: Footprint::for_sprite(pos, GEM_INSETS),
            triggered: false,
        }
    }

    /// Edge-triggered pickup test: returns the color exactly once per overlap
    /// episode. No-overlap ticks clear the latch.
    pub fn check_pickup(&mut self, player: &Footprint) -> Option<GemColor> {
        if self.footprint.overlaps(player) {
            if !self.triggered {
                self.triggered = true;
                return Some(self.color);
            }
        } else {
            self.triggered = false;
        }
        None
    }

    pub fn sprite(&self) -> SpriteId {
        self.color.sprite()
    }
}

/// The gate key. Collecting it flips `visible` off and opens the gate; an
/// invisible key skips collision testing entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Key {
    pub tile: TilePos,
    pub pos: Vec2,
    pub visible: bool,
    pub footprint: Footprint,
}

impl Key {
    /// Place the key on a free tile, reserving it in `occupancy`.
    pub fn place(rng: &mut Pcg32, occupancy: &mut Occupancy) -> Self {
        let tile = occupancy.place(
            rng,
            (COLLECTIBLE_COL_MIN, COLLECTIBLE_COL_MAX),
            (COLLECTIBLE_ROW_MIN, COLLECTIBLE_ROW_MAX),
        );
        let pos = tile.to_pixels(0.0, KEY_Y_OFFSET);
        Self {
            tile,
            pos,
            visible: true,
            footprint: Footprint::for_sprite(pos, KEY_INSETS),
        }
    }

    /// Re-place for a new level. The old reservation is released first so the
    /// occupancy set never accumulates stale tiles.
    pub fn reset(&mut self, rng: &mut Pcg32, occupancy: &mut Occupancy) {
        occupancy.release(self.tile);
        *self = Self::place(rng, occupancy);
    }

    /// Pickup test; returns true on the collecting tick. Skipped once the key
    /// is no longer visible.
    pub fn check_pickup(&mut self, player: &Footprint, occupancy: &mut Occupancy) -> bool {
        if !self.visible {
            return false;
        }
        if self.footprint.overlaps(player) {
            self.visible = false;
            occupancy.release(self.tile);
            return true;
        }
        false
    }

    pub fn sprite(&self) -> SpriteId {
        SpriteId::Key
    }
}

/// Level exit on the goal lane. Openness is derived each tick from key
/// visibility; the collision test only tracks whether the player stands in
/// the gate. Transitions are decided by the player's input handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gate {
    pub pos: Vec2,
    pub open: bool,
    pub player_inside: bool,
    pub footprint: Footprint,
}

impl Gate {
    /// Gate at a specific column of the goal lane.
    pub fn at_column(col: i32) -> Self {
        let pos = Vec2::new(col as f32 * X_DIVISION, -GATE_Y_OFFSET);
        Self {
            pos,
            open: false,
            player_inside: false,
            footprint: Footprint::for_sprite(pos, GATE_INSETS),
        }
    }

    /// Gate at a random column of the goal lane, closed.
    pub fn place(rng: &mut Pcg32) -> Self {
        Self::at_column(random_in_range(rng, GATE_COL_MIN, GATE_COL_MAX))
    }

    /// New column, closed again.
    pub fn reset(&mut self, rng: &mut Pcg32) {
        *self = Self::place(rng);
    }

    /// Derive openness from key pickup state.
    pub fn update(&mut self, key_visible: bool) {
        self.open = !key_visible;
    }

    /// Track player overlap. Never mutates game state beyond the flag.
    pub fn check_collision(&mut self, player: &Footprint) {
        self.player_inside = self.footprint.overlaps(player);
    }

    pub fn sprite(&self) -> SpriteId {
        if self.open {
            SpriteId::GateOpen
        } else {
            SpriteId::GateClosed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_hazard_spawn_within_ranges() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..50 {
            let hazard = Hazard::spawn(&mut rng);
            assert_eq!(hazard.pos.x, HAZARD_SPAWN_X);
            let row = (hazard.pos.y + HAZARD_Y_OFFSET) / Y_DIVISION;
            assert!((1.0..=3.0).contains(&row));
            assert!((80.0..=150.0).contains(&hazard.speed));
        }
    }

    #[test]
    fn test_hazard_wraps_past_exit() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut hazard = Hazard::spawn(&mut rng);
        hazard.pos.x = HAZARD_EXIT_X + 1.0;
        hazard.advance(1.0 / 60.0, &mut rng);
        assert_eq!(hazard.pos.x, HAZARD_WRAP_X);
        assert!((80.0..=150.0).contains(&hazard.speed));
        // Footprint followed the wrap
        assert_eq!(hazard.footprint.x, HAZARD_WRAP_X);
    }

    #[test]
    fn test_hazard_advances_by_speed_dt() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut hazard = Hazard::spawn(&mut rng);
        let speed = hazard.speed;
        hazard.advance(0.5, &mut rng);
        assert!((hazard.pos.x - speed * 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_player_fixed_spawn() {
        let player = Player::spawn();
        assert_eq!(player.pos, Vec2::new(302.0, 405.0));
        assert!(!player.on_goal_row());

        let mut moved = player.clone();
        moved.pos.y = -10.0;
        assert!(moved.on_goal_row());
    }

    #[test]
    fn test_gem_pickup_is_edge_triggered() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut occupancy = Occupancy::default();
        let mut gem = Gem::place(&mut rng, &mut occupancy);

        let on_gem = Footprint::for_sprite(gem.pos, PLAYER_INSETS);
        assert_eq!(gem.check_pickup(&on_gem), Some(gem.color));
        // Sustained overlap does not fire again
        assert_eq!(gem.check_pickup(&on_gem), None);

        // Leaving and returning re-arms the latch
        let away = Footprint::for_sprite(gem.pos + Vec2::new(1000.0, 0.0), PLAYER_INSETS);
        assert_eq!(gem.check_pickup(&away), None);
        assert!(gem.check_pickup(&on_gem).is_some());
    }

    #[test]
    fn test_key_pickup_releases_tile_and_hides() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut occupancy = Occupancy::default();
        let mut key = Key::place(&mut rng, &mut occupancy);
        assert!(occupancy.contains(key.tile));

        let on_key = Footprint::for_sprite(key.pos, PLAYER_INSETS);
        assert!(key.check_pickup(&on_key, &mut occupancy));
        assert!(!key.visible);
        assert!(!occupancy.contains(key.tile));

        // Invisible key ignores further overlap
        assert!(!key.check_pickup(&on_key, &mut occupancy));
    }

    #[test]
    fn test_key_reset_frees_old_tile() {
        let mut rng = Pcg32::seed_from_u64(6);
        let mut occupancy = Occupancy::default();
        let mut key = Key::place(&mut rng, &mut occupancy);
        let old = key.tile;
        key.reset(&mut rng, &mut occupancy);
        assert!(key.visible);
        assert!(occupancy.contains(key.tile));
        if key.tile != old {
            assert!(!occupancy.contains(old));
        }
        assert_eq!(occupancy.len(), 1);
    }

    #[test]
    fn test_gate_openness_follows_key() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut gate = Gate::place(&mut rng);
        let col = gate.pos.x / X_DIVISION;
        assert!((1.0..=5.0).contains(&col));
        assert_eq!(gate.pos.y, -GATE_Y_OFFSET);
        assert!(!gate.open);
        assert_eq!(gate.sprite(), SpriteId::GateClosed);

        gate.update(false);
        assert!(gate.open);
        assert_eq!(gate.sprite(), SpriteId::GateOpen);

        gate.update(true);
        assert!(!gate.open);
    }
}
