use std::fs::File;

use macroquad::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

use snake_powerups::audio::Sounds;
use snake_powerups::config::{CONFIG_PATH, GameConfig};
use snake_powerups::game::{GameEvent, Session};
use snake_powerups::input::{self, KeyAction};
use snake_powerups::render::{ScoreBoard, ScreenCanvas};

const LOG_PATH: &str = "snake.log";

fn init_logging() {
    let logger = File::create(LOG_PATH)
        .map_err(|err| err.to_string())
        .and_then(|file| {
            WriteLogger::init(LevelFilter::Info, Config::default(), file)
                .map_err(|err| err.to_string())
        });

    if let Err(err) = logger {
        eprintln!("logging disabled: {err}");
    }
}

fn window_conf() -> Conf {
    // Logging is not up yet; `main` reloads and reports problems
    let config = GameConfig::load(CONFIG_PATH).unwrap_or_default();
    Conf {
        window_title: "Snake".to_owned(),
        window_width: config.canvas_width as i32,
        window_height: config.canvas_height as i32,
        high_dpi: true,
        ..Default::default()
    }
}

async fn start_game(config: GameConfig) {
    let sounds = Sounds::load(config.volume).await;
    let mut score_board = ScoreBoard::new();

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(err) => {
            log::error!("cannot start: {err}");
            return;
        }
    };
    session.start();
    log::info!("play surface shown, entering loop");

    loop {
        for action in input::poll_actions() {
            match action {
                KeyAction::Turn(direction) => {
                    session.set_direction(direction);
                }
                KeyAction::Quit => {
                    log::info!("quit with score {}", session.score());
                    return;
                }
            }
        }

        session.update(get_frame_time());

        let mut canvas = ScreenCanvas::for_frame(session.arena());
        session.draw(&mut canvas);

        for event in session.drain_events() {
            score_board.apply(&event);
            if let GameEvent::Sound(cue) = event {
                sounds.play(cue);
            }
        }
        score_board.draw();

        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    log::info!("starting snake");

    let config = GameConfig::load_or_default(CONFIG_PATH);
    start_game(config).await;
}
