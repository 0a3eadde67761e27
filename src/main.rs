//! Lanecross headless demo driver
//!
//! Stands in for the excluded collaborators: a fixed-timestep tick loop, a
//! scripted input source, and the 5-second collectible spawn cadence. Renders
//! nothing; state transitions go to the log and the final HUD to stdout.

use lanecross::consts::COLLECTIBLE_SPAWN_SECS;
use lanecross::sim::{Direction, GamePhase, GameSession, ResetReason};

/// Simulation timestep (60 Hz)
const DT: f32 = 1.0 / 60.0;
/// Demo length in simulated seconds
const DEMO_SECS: u32 = 60;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xBADC0DE);
    let mut session = GameSession::new(seed);
    log::info!("lanecross demo starting, seed {seed}");

    let mut spawn_clock = 0.0f32;
    let mut last_phase = session.phase;

    for tick in 0..DEMO_SECS * 60 {
        session.update_all(DT);

        // External spawn scheduler: offer a collectible every 5 seconds
        spawn_clock += DT;
        if spawn_clock >= COLLECTIBLE_SPAWN_SECS {
            spawn_clock = 0.0;
            session.maybe_spawn_collectible();
        }

        // Scripted pilot: mostly push up, sidestep now and then
        if tick % 30 == 0 {
            let dir = match (tick / 30) % 5 {
                0 | 1 | 3 => Direction::Up,
                2 => Direction::Left,
                _ => Direction::Right,
            };
            session.handle_input(Some(dir));
        }

        if session.phase != last_phase {
            log::info!("phase {last_phase:?} -> {:?}", session.phase);
            if session.phase == GamePhase::GameOver {
                session.request_reset(ResetReason::Restart);
            }
            last_phase = session.phase;
        }
    }

    let hud = session.hud();
    println!(
        "demo finished: level {}, gems {:?}, score {}",
        hud.level, hud.gems, hud.total_score
    );
}
