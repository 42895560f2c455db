//! Tile Chase entry point
//!
//! Headless runner: plays one seeded session with a random-walk player,
//! prints the final board and a JSON summary. Usage:
//!
//! ```text
//! tile-chase [config.json] [max_ticks]
//! ```

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use tile_chase::sim::{Direction, Frame, GameState};
use tile_chase::{FixedStepDriver, GameConfig};

const DEFAULT_MAX_TICKS: u64 = 5_000;

/// Host frame rate used to feed the driver
const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Serialize)]
struct Summary<'a> {
    seed: u64,
    ticks: u64,
    score: u64,
    lives: u8,
    level: u32,
    game_over: bool,
    hud: &'a str,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let max_ticks = match args.next() {
        Some(n) => n.parse()?,
        None => DEFAULT_MAX_TICKS,
    };

    let seed = config.seed.unwrap_or_else(clock_seed);
    log::info!("Tile Chase (headless) starting with seed {}", seed);

    let mut driver = FixedStepDriver::from_config(&config);
    let mut state = GameState::new(config, seed)?;
    // Separate stream so the player's walk does not perturb the adversaries
    let mut walker = Pcg32::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15);

    while !state.is_game_over() && state.time_ticks < max_ticks {
        if walker.random_bool(0.1) {
            let dir = Direction::ALL[walker.random_range(0..Direction::ALL.len())];
            state.request_direction(dir);
        }

        driver.update(&mut state, FRAME_DT);

        for event in state.drain_events() {
            log::debug!("tick {}: {:?}", state.time_ticks, event);
        }
    }

    let frame = state.frame();
    let cols = state.grid().cols();
    let rows = state.grid().rows();
    println!("{}", render_ascii(&frame, cols, rows, state.config.tile_size));

    let hud = frame.hud_text();
    let summary = Summary {
        seed,
        ticks: state.time_ticks,
        score: frame.score,
        lives: frame.lives,
        level: frame.level,
        game_over: frame.game_over,
        hud: &hud,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Draw a frame as text, one character per tile
fn render_ascii(frame: &Frame<'_>, cols: usize, rows: usize, tile: i32) -> String {
    let mut cells = vec![vec![' '; cols]; rows];

    let mut put = |rect: &tile_chase::sim::Rect, ch: char| {
        let center = rect.pos + rect.size / 2;
        if center.x < 0 || center.y < 0 {
            return;
        }
        let (col, row) = ((center.x / tile) as usize, (center.y / tile) as usize);
        if let Some(cell) = cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = ch;
        }
    };

    for wall in frame.walls {
        put(wall, '#');
    }
    for pellet in frame.collectibles {
        put(pellet, '.');
    }
    if let Some(bonus) = &frame.bonus {
        put(bonus, '%');
    }
    for adversary in &frame.adversaries {
        put(&adversary.rect, adversary.id.as_char().to_ascii_uppercase());
    }
    put(&frame.player, '@');

    let mut out: String = cells
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out.push_str(&frame.hud_text());
    out
}
