//! Renderer and overlay boundary
//!
//! The core never draws. It hands the renderer a list of opaque sprite ids
//! with pixel positions, and the scoreboard/overlay a small serializable
//! snapshot of the session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::SpriteId;
use super::state::{GamePhase, GameSession};

/// One sprite to draw at a pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawSprite {
    pub sprite: SpriteId,
    pub pos: Vec2,
}

/// Scoreboard/overlay snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub level: u32,
    /// Per-color gem counts: [blue, green, orange]
    pub gems: [u32; 3],
    pub phase: GamePhase,
    pub total_score: u32,
}

impl GameSession {
    /// Draw list in painter order: gate, collectibles, hazards, player.
    /// A collected gem or key simply stops appearing.
    pub fn draw_list(&self) -> Vec<DrawSprite> {
        let mut out = Vec::with_capacity(self.hazards.len() + 4);
        out.push(DrawSprite {
            sprite: self.gate.sprite(),
            pos: self.gate.pos,
        });
        if let Some(gem) = &self.gem {
            out.push(DrawSprite {
                sprite: gem.sprite(),
                pos: gem.pos,
            });
        }
        if self.key.visible {
            out.push(DrawSprite {
                sprite: self.key.sprite(),
                pos: self.key.pos,
            });
        }
        for hazard in &self.hazards {
            out.push(DrawSprite {
                sprite: hazard.sprite(),
                pos: hazard.pos,
            });
        }
        out.push(DrawSprite {
            sprite: self.player.sprite(),
            pos: self.player.pos,
        });
        out
    }

    /// Snapshot for scoreboard and overlay rendering.
    pub fn hud(&self) -> Hud {
        Hud {
            level: self.level,
            gems: self.scoreboard.gems,
            phase: self.phase,
            total_score: self.total_score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_contents() {
        let mut session = GameSession::new(21);
        let list = session.draw_list();
        // Gate + gem + key + one hazard + player
        assert_eq!(list.len(), 5);
        assert_eq!(list[0].sprite, SpriteId::GateClosed);
        assert_eq!(list.last().unwrap().sprite, SpriteId::PlayerBoy);

        // Collected key disappears and the gate sprite flips
        session.key.visible = false;
        session.gate.update(false);
        let list = session.draw_list();
        assert_eq!(list.len(), 4);
        assert_eq!(list[0].sprite, SpriteId::GateOpen);
        assert!(list.iter().all(|d| d.sprite != SpriteId::Key));

        // Picked-up gem disappears too
        session.gem = None;
        assert_eq!(session.draw_list().len(), 3);
    }

    #[test]
    fn test_hud_snapshot() {
        let mut session = GameSession::new(22);
        session.level = 3;
        session.scoreboard.gems = [1, 2, 0];
        let hud = session.hud();
        assert_eq!(hud.level, 3);
        assert_eq!(hud.gems, [1, 2, 0]);
        assert_eq!(hud.phase, GamePhase::Running);
        assert_eq!(hud.total_score, 10 + 2 * 15 + 3 * 50);
    }
}
