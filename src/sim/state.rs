//! Session state and the game state machine
//!
//! `GameSession` is the single context object owning pause state, level,
//! score, occupancy and the active entity collections, plus the seeded RNG
//! every random draw goes through. No process-wide globals.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Gate, Gem, GemColor, Hazard, Key, Player};
use super::grid::Occupancy;
use crate::consts::{GEM_VALUES, LEVEL_UP_SECS, LEVEL_VALUE};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay (initial, and after preset)
    Running,
    /// User-requested pause
    Paused,
    /// Level-up banner; auto-returns to Running after a fixed duration
    LevelUp,
    /// Run ended; only an explicit restart leaves this
    GameOver,
}

/// Why a reset was requested. `Fatal` covers hazard hits and falling in the
/// water; it ends the run without touching score or level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetReason {
    Restart,
    LevelUp,
    Fatal,
}

/// Per-color gem counts: [blue, green, orange].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub gems: [u32; 3],
}

impl Scoreboard {
    pub fn record(&mut self, color: GemColor) {
        self.gems[color.index()] += 1;
    }

    /// Display score: 10*blue + 15*green + 20*orange + 50*level.
    pub fn total(&self, level: u32) -> u32 {
        self.gems
            .iter()
            .zip(GEM_VALUES)
            .map(|(count, value)| count * value)
            .sum::<u32>()
            + LEVEL_VALUE * level
    }
}

/// Complete session state: entities, occupancy, scoreboard and phase.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Starts at 1, increments only on level-up
    pub level: u32,
    pub scoreboard: Scoreboard,
    pub player: Player,
    /// One hazard per level, appended on each level-up
    pub hazards: Vec<Hazard>,
    /// At most one gem is live at a time
    pub gem: Option<Gem>,
    pub key: Key,
    pub gate: Gate,
    pub occupancy: Occupancy,
    /// Seconds left on the level-up banner; `None` outside LevelUp.
    /// Dropping it on restart is what cancels a pending auto-resume.
    pub(crate) level_up_timer: Option<f32>,
}

impl GameSession {
    /// Fresh session: level 1, one hazard, a gem, the key and the gate.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut occupancy = Occupancy::default();
        let hazards = vec![Hazard::spawn(&mut rng)];
        let gem = Gem::place(&mut rng, &mut occupancy);
        let key = Key::place(&mut rng, &mut occupancy);
        let gate = Gate::place(&mut rng);
        Self {
            seed,
            rng,
            phase: GamePhase::Running,
            level: 1,
            scoreboard: Scoreboard::default(),
            player: Player::spawn(),
            hazards,
            gem: Some(gem),
            key,
            gate,
            occupancy,
            level_up_timer: None,
        }
    }

    /// Route a reset request from input handling or collision resolution.
    pub fn request_reset(&mut self, reason: ResetReason) {
        match reason {
            ResetReason::Restart => self.restart(),
            ResetReason::LevelUp => self.level_up(),
            ResetReason::Fatal => self.game_over(),
        }
    }

    /// Toggle Running <-> Paused; ignored during LevelUp and GameOver.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => other,
        };
    }

    /// Score shown on the game-over overlay.
    pub fn total_score(&self) -> u32 {
        self.scoreboard.total(self.level)
    }

    /// Full preset: score and level cleared, every entity recreated, any
    /// pending level-up auto-resume dropped. Allowed from any phase.
    fn restart(&mut self) {
        log::info!("restart: back to level 1");
        self.level = 1;
        self.scoreboard = Scoreboard::default();
        self.occupancy.clear();
        self.player = Player::spawn();
        self.hazards.clear();
        self.hazards.push(Hazard::spawn(&mut self.rng));
        self.gem = Some(Gem::place(&mut self.rng, &mut self.occupancy));
        self.key = Key::place(&mut self.rng, &mut self.occupancy);
        self.gate = Gate::place(&mut self.rng);
        self.level_up_timer = None;
        self.phase = GamePhase::Running;
    }

    /// Advance to the next level: one more hazard, all hazards re-rolled,
    /// player back at spawn, fresh key and closed gate. A surviving gem keeps
    /// its tile. Play resumes after the banner timer runs out.
    fn level_up(&mut self) {
        self.level += 1;
        log::info!("level up -> {}", self.level);
        self.hazards.push(Hazard::spawn(&mut self.rng));
        for hazard in &mut self.hazards {
            hazard.reset(&mut self.rng);
        }
        self.player.reset();
        self.key.reset(&mut self.rng, &mut self.occupancy);
        self.gate.reset(&mut self.rng);
        self.level_up_timer = Some(LEVEL_UP_SECS);
        self.phase = GamePhase::LevelUp;
    }

    /// End the run, keeping score and level for the overlay.
    fn game_over(&mut self) {
        log::info!(
            "game over at level {} with score {}",
            self.level,
            self.total_score()
        );
        self.phase = GamePhase::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_shape() {
        let session = GameSession::new(123);
        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.level, 1);
        assert_eq!(session.hazards.len(), 1);
        assert!(session.gem.is_some());
        assert!(session.key.visible);
        assert!(!session.gate.open);
        // Gem and key tiles are both reserved
        assert_eq!(session.occupancy.len(), 2);
    }

    #[test]
    fn test_gem_and_key_never_share_a_tile() {
        for seed in 0..100 {
            let session = GameSession::new(seed);
            let gem = session.gem.as_ref().unwrap();
            assert_ne!(gem.tile, session.key.tile, "seed {seed}");
        }
    }

    #[test]
    fn test_score_formula() {
        let mut scoreboard = Scoreboard::default();
        scoreboard.gems = [2, 3, 1];
        assert_eq!(scoreboard.total(4), 2 * 10 + 3 * 15 + 20 + 4 * 50);
    }

    #[test]
    fn test_level_up_appends_hazard_and_resets() {
        let mut session = GameSession::new(9);
        session.key.visible = false;
        session.gate.update(false);
        session.player.pos.y = -10.0;

        session.request_reset(ResetReason::LevelUp);
        assert_eq!(session.phase, GamePhase::LevelUp);
        assert_eq!(session.level, 2);
        assert_eq!(session.hazards.len(), 2);
        // Player is back at spawn, key is visible again, gate closed
        assert_eq!(session.player.pos, Player::spawn().pos);
        assert!(session.key.visible);
        assert!(!session.gate.open);
        for hazard in &session.hazards {
            assert_eq!(hazard.pos.x, 0.0);
        }
    }

    #[test]
    fn test_fatal_preserves_score_and_level() {
        let mut session = GameSession::new(10);
        session.level = 3;
        session.scoreboard.gems = [1, 1, 1];

        session.request_reset(ResetReason::Fatal);
        assert_eq!(session.phase, GamePhase::GameOver);
        assert_eq!(session.level, 3);
        assert_eq!(session.scoreboard.gems, [1, 1, 1]);
        assert_eq!(session.total_score(), 10 + 15 + 20 + 3 * 50);
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut session = GameSession::new(11);
        session.level = 5;
        session.scoreboard.gems = [4, 0, 2];
        let mut extra_rng = Pcg32::seed_from_u64(0);
        session.hazards.push(Hazard::spawn(&mut extra_rng));
        session.request_reset(ResetReason::Fatal);

        session.request_reset(ResetReason::Restart);
        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.level, 1);
        assert_eq!(session.scoreboard, Scoreboard::default());
        assert_eq!(session.hazards.len(), 1);
        assert!(session.gem.is_some());
        assert!(session.key.visible);
        assert_eq!(session.occupancy.len(), 2);
    }

    #[test]
    fn test_pause_toggle_rules() {
        let mut session = GameSession::new(12);
        session.toggle_pause();
        assert_eq!(session.phase, GamePhase::Paused);
        session.toggle_pause();
        assert_eq!(session.phase, GamePhase::Running);

        session.request_reset(ResetReason::Fatal);
        session.toggle_pause();
        assert_eq!(session.phase, GamePhase::GameOver);

        session.request_reset(ResetReason::Restart);
        session.request_reset(ResetReason::LevelUp);
        session.toggle_pause();
        assert_eq!(session.phase, GamePhase::LevelUp);
    }
}
