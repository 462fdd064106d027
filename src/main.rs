//! Fruit Rush entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively there is no window: the runner plays one headless run at a
//! simulated 60 Hz with a scripted walk and prints the final snapshot.
//!
//! Usage: `fruit-rush [easy|medium|hard] [seed]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use fruit_rush::consts::FRAME_TIME_MS;
    use fruit_rush::platform::{Key, KeyState};
    use fruit_rush::sim::{Difficulty, GameState, Snapshot};
    use fruit_rush::{Game, Renderer, Tuning};

    /// Env var pointing at a JSON tuning file
    const TUNING_ENV_VAR: &str = "FRUIT_RUSH_TUNING";
    /// Give up after ten minutes of simulated play
    const MAX_FRAMES: u64 = 60 * 600;
    /// Frames spent walking in each direction of the script
    const LEG_FRAMES: u64 = 90;
    const WALK_SCRIPT: [Key; 4] = [Key::Right, Key::Down, Key::Left, Key::Up];

    /// Traces the HUD once per simulated second
    #[derive(Default)]
    struct HudLog {
        frames: u64,
    }

    impl Renderer for HudLog {
        fn render(&mut self, snapshot: &Snapshot<'_>) {
            self.frames += 1;
            if self.frames % 60 != 0 {
                return;
            }
            log::debug!(
                "{:?} health={}% time={}{} fruits={}",
                snapshot.phase,
                snapshot.health,
                snapshot.time_label(),
                if snapshot.timer_warning() { "!" } else { "" },
                snapshot.fruits_collected
            );
        }
    }

    fn load_tuning() -> Tuning {
        let Ok(path) = std::env::var(TUNING_ENV_VAR) else {
            return Tuning::default();
        };
        let loaded = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
        match loaded {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({}: {})", path, e);
                Tuning::default()
            }
        }
    }

    pub fn run() -> Result<(), String> {
        let mut args = std::env::args().skip(1);
        let difficulty: Difficulty = match args.next() {
            Some(name) => name.parse::<Difficulty>().map_err(|e| e.to_string())?,
            None => Difficulty::Easy,
        };
        let seed: u64 = match args.next() {
            Some(s) => s
                .parse::<u64>()
                .map_err(|e| format!("invalid seed {s:?}: {e}"))?,
            None => rand::random(),
        };

        let state = GameState::with_tuning(seed, load_tuning()).map_err(|e| e.to_string())?;
        let mut game = Game::new(state);
        log::info!("Game initialized with seed: {}", seed);
        game.select_difficulty(difficulty);

        let mut keys = KeyState::new();
        let mut hud = HudLog::default();
        let mut now = 0.0;
        let mut frame = 0;
        while !game.state.phase.is_over() && frame < MAX_FRAMES {
            keys.clear();
            keys.set(WALK_SCRIPT[((frame / LEG_FRAMES) % 4) as usize], true);

            now += FRAME_TIME_MS;
            game.frame(now, &keys, &mut hud);
            frame += 1;
        }

        let snapshot = game.state.snapshot();
        match snapshot.completion_time() {
            Some(taken) => log::info!(
                "Won on {} in {}",
                difficulty.name(),
                fruit_rush::sim::format_time(taken)
            ),
            None => log::info!(
                "{:?} on {} at {}% health after {} frames",
                snapshot.phase,
                difficulty.name(),
                snapshot.health,
                game.frames()
            ),
        }

        let json = serde_json::to_string_pretty(&snapshot).map_err(|e| e.to_string())?;
        println!("{json}");
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Fruit Rush (native) starting...");

    if let Err(e) = native::run() {
        log::error!("{}", e);
        eprintln!("error: {e}");
        std::process::exit(2);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
