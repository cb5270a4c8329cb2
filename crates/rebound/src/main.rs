//! Three rectangles bouncing around an 800×450 window. Close the window or
//! press Escape to quit.

use std::process::ExitCode;

use rebound::prelude::*;
use rebound::{logging, scene};

fn main() -> ExitCode {
    logging::init();

    let game = Game::new(WindowConfig::default()).setup(scene::populate);
    match game.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("rebound stopped: {err}");
            ExitCode::FAILURE
        }
    }
}
