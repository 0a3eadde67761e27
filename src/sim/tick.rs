//! Per-tick drive and input handling
//!
//! The external tick driver calls `update_all(dt)` once per frame; the input
//! source calls `handle_input` on discrete key events and
//! `maybe_spawn_collectible` on its fixed cadence. One logical thread of
//! control: each tick runs to completion before the next request.

use super::entity::{Direction, GemColor};
use super::grid::TilePos;
use super::state::{GamePhase, GameSession, ResetReason};
use crate::consts::{
    COL_RATIO_MAX, COL_RATIO_MIN, ROW_RATIO_MAX, ROW_RATIO_MIN, X_DIVISION, Y_DIVISION,
};

impl GameSession {
    /// Advance one tick. `dt` is elapsed seconds since the previous tick and
    /// must be >= 0. Entity movement and collision testing only happen while
    /// Running; LevelUp ticks the banner timer down.
    pub fn update_all(&mut self, dt: f32) {
        match self.phase {
            GamePhase::Paused | GamePhase::GameOver => return,
            GamePhase::LevelUp => {
                self.tick_level_up_timer(dt);
                return;
            }
            GamePhase::Running => {}
        }

        // Hazards move, then each tests against the player's footprint.
        let mut fatal = false;
        for i in 0..self.hazards.len() {
            self.hazards[i].advance(dt, &mut self.rng);
            if self.hazards[i].footprint.overlaps(&self.player.footprint) {
                fatal = true;
            }
        }
        if fatal {
            self.request_reset(ResetReason::Fatal);
            return;
        }

        self.player.refresh_footprint();

        // Gem pickup is edge-triggered; removal releases the tile.
        let mut picked: Option<(GemColor, TilePos)> = None;
        if let Some(gem) = self.gem.as_mut() {
            if let Some(color) = gem.check_pickup(&self.player.footprint) {
                picked = Some((color, gem.tile));
            }
        }
        if let Some((color, tile)) = picked {
            self.scoreboard.record(color);
            self.occupancy.release(tile);
            self.gem = None;
            log::debug!("picked up {color:?} gem");
        }

        if self
            .key
            .check_pickup(&self.player.footprint, &mut self.occupancy)
        {
            log::debug!("key collected, gate opens");
        }

        self.gate.update(self.key.visible);
        self.gate.check_collision(&self.player.footprint);
    }

    /// Apply one decoded directional input. Ignored unless Running; moves by
    /// one tile, rejecting steps that leave the playfield. Stepping onto the
    /// goal lane resolves against the gate: open gate levels up, closed gate
    /// leaves the player standing there, anything else is the water.
    pub fn handle_input(&mut self, dir: Option<Direction>) {
        if self.phase != GamePhase::Running {
            return;
        }
        let Some(dir) = dir else { return };

        let candidate = self.player.pos + dir.step();
        let col = candidate.x / X_DIVISION;
        let row = candidate.y / Y_DIVISION;
        if !(COL_RATIO_MIN..=COL_RATIO_MAX).contains(&col)
            || !(ROW_RATIO_MIN..=ROW_RATIO_MAX).contains(&row)
        {
            return;
        }

        self.player.pos = candidate;
        self.player.refresh_footprint();

        if row < 0.0 {
            self.gate.check_collision(&self.player.footprint);
            if self.gate.player_inside {
                if self.gate.open {
                    self.request_reset(ResetReason::LevelUp);
                }
                // Closed gate: idle there until the key turns up.
            } else {
                // Missed the gate on the goal lane: that's the water.
                self.request_reset(ResetReason::Fatal);
            }
        }
    }

    /// External 5-second cadence hook: place a gem if none is live and the
    /// game is running.
    pub fn maybe_spawn_collectible(&mut self) {
        if self.phase != GamePhase::Running || self.gem.is_some() {
            return;
        }
        let gem = super::entity::Gem::place(&mut self.rng, &mut self.occupancy);
        log::debug!("spawned {:?} gem at {:?}", gem.color, gem.tile);
        self.gem = Some(gem);
    }

    /// Count the banner timer down; expiry resumes play only if the session
    /// is still showing the banner (a restart in between cancels it).
    fn tick_level_up_timer(&mut self, dt: f32) {
        let Some(remaining) = self.level_up_timer else {
            return;
        };
        let remaining = remaining - dt;
        if remaining > 0.0 {
            self.level_up_timer = Some(remaining);
            return;
        }
        self.level_up_timer = None;
        if self.phase == GamePhase::LevelUp {
            self.phase = GamePhase::Running;
        }
    }
}
