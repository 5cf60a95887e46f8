//! Pocket Arcade native runner
//!
//! The browser build is driven from JS through `pocket_arcade::web`. Natively
//! this runs each game headless under the autopilot and logs the results.
//!
//! Usage: `pocket-arcade [seed] [frames]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pocket_arcade::arcade::{ActiveGame, Arcade, GameId};
    use pocket_arcade::autoplay::{self, AutoInput};
    use pocket_arcade::consts::REFERENCE_FRAME_MS;
    use pocket_arcade::platform::MemoryStore;
    use pocket_arcade::sim::{BrickPhase, SnakeStatus};

    env_logger::init();
    log::info!("Pocket Arcade (native) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42u64);
    let frames = args.next().and_then(|s| s.parse().ok()).unwrap_or(20_000u32);

    let mut arcade = Arcade::new(Box::new(MemoryStore::new()), seed);
    arcade.finish_loading();

    for game in GameId::ALL {
        arcade.select(game);
        arcade.start();

        let mut played = 0;
        for _ in 0..frames {
            let input = arcade.active().and_then(autoplay::pick_input);
            match input {
                Some(AutoInput::Paddle(x)) => arcade.move_paddle(x),
                Some(AutoInput::Press(direction)) => {
                    arcade.press(direction);
                }
                None => {}
            }
            arcade.update(REFERENCE_FRAME_MS);
            played += 1;

            let finished = match arcade.active() {
                Some(ActiveGame::BrickRush(s)) => s.phase == BrickPhase::GameOver,
                Some(ActiveGame::Merge1024(s)) => !s.accepts_moves(),
                Some(ActiveGame::Snake(s)) => s.status == SnakeStatus::GameOver,
                None => true,
            };
            if finished {
                break;
            }
        }

        let score = arcade.active().map(ActiveGame::score).unwrap_or(0);
        println!(
            "{:<10} score {:>6}  best {:>6}  ({} frames)",
            game.title(),
            score,
            arcade.scores().best(game),
            played
        );
        arcade.back_to_menu();
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}
