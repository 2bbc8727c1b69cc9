//! Nonet desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Nonet application.

use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::Parser;
use eframe::{
    NativeOptions,
    egui::{self, Vec2},
};
use nonet_game::Game;

use crate::{app::NonetApp, board_source::BoardName};

mod app;
mod board_source;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Desired board name
    #[arg(long, value_enum)]
    board: BoardName,
    /// Directory containing the `.sudoku` board files
    #[arg(long, default_value = "boards")]
    boards_dir: PathBuf,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    // A board that fails to load prevents the session from starting at
    // all; there is no degraded UI.
    let board = board_source::load_board(&args.boards_dir, args.board)?;
    let game = Game::new(&board);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size(Vec2::new(800.0, 600.0))
            .with_min_inner_size(Vec2::new(400.0, 300.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Nonet",
        options,
        Box::new(move |cc| Ok(Box::new(NonetApp::new(cc, game)))),
    )?;
    Ok(())
}
