use std::{
    io::{self, Write as _},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};
use mazing::{
    logging,
    maze::{render, render_solution},
    model::BoardModel,
    new_board, solve, Generator, MazeError,
    settings::{Settings, SettingsError},
};
use thiserror::Error;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Cannot write output: {0}")]
    Io(#[from] io::Error),
    #[error("Cannot serialize model: {0}")]
    Ron(#[from] ron::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Walls only
    Text,
    /// Walls with the solution path drawn as `*`
    Solution,
    /// Presentation model as RON
    Model,
}

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazing")]
struct Args {
    #[clap(short, long, help = "Settings file in RON format")]
    config: Option<PathBuf>,
    #[clap(short = 'W', long, help = "Number of columns")]
    width: Option<u16>,
    #[clap(short = 'H', long, help = "Number of rows")]
    height: Option<u16>,
    #[clap(short, long, help = "Seed for reproducible mazes")]
    seed: Option<u64>,
    #[clap(long, action, help = "Don't fill dead ends")]
    no_solve: bool,
    #[clap(short, long, value_enum, default_value_t = Format::Solution)]
    format: Format,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeatable")]
    verbose: u8,
}

impl Args {
    fn settings(&self) -> Result<Settings, SettingsError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::new(),
        };

        if let Some(width) = self.width {
            settings = settings.set_width(width);
        }
        if let Some(height) = self.height {
            settings = settings.set_height(height);
        }
        if let Some(seed) = self.seed {
            settings = settings.set_seed(seed);
        }
        if self.no_solve {
            settings = settings.set_solve(false);
        }
        settings = match self.verbose {
            0 => settings,
            1 => settings.set_log_level(log::Level::Info),
            2 => settings.set_log_level(log::Level::Debug),
            _ => settings.set_log_level(log::Level::Trace),
        };

        Ok(settings)
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let settings = args.settings()?;
    logging::init(settings.get_log_level()?);

    let mut board = new_board(settings.get_width(), settings.get_height())?;
    let mut generator = Generator::new(settings.get_seed());
    log::info!("Seed: {}", generator.seed());

    generator.generate(&mut board)?;
    board.open_default_ends()?;

    if settings.get_solve() {
        solve(&mut board)?;
    } else if args.format == Format::Solution {
        log::warn!("Dead ends were not filled, every cell is drawn as path");
    }

    let mut out = io::stdout().lock();
    match args.format {
        Format::Text => render(&board, &mut out)?,
        Format::Solution => render_solution(&board, &mut out)?,
        Format::Model => {
            let model = BoardModel::from_board(&board);
            let text = ron::ser::to_string_pretty(&model, ron::ser::PrettyConfig::default())?;
            writeln!(out, "{}", text)?;
        }
    }
    out.flush()?;

    Ok(())
}
