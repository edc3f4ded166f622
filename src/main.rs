//! Halma GUI
//!
//! Play Halma against the computer (or another player) in a native window.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use halma::ui::HalmaApp;
use halma::{GameConfig, GameMode, PieceColor};

#[derive(Parser, Debug)]
#[command(
    name = "halma",
    version,
    about = "Halma with a minimax computer opponent",
    allow_negative_numbers = true
)]
struct Cli {
    /// Board size: 8, 10 or 16
    board_size: usize,
    /// Seconds allowed per turn before forfeiting
    timeout: u64,
    /// Colour of your pieces
    #[arg(value_enum)]
    player_color: PieceColor,
    /// Search depth of the computer opponent, in plies
    #[arg(long, default_value_t = halma::search::DEFAULT_DEPTH)]
    depth: u8,
    /// Two human players instead of playing the computer
    #[arg(long)]
    hotseat: bool,
}

/// Exit code for arguments the parser rejected before a `GameConfig` could
/// be built. Matches `ConfigError::exit_code`: 1 board size, 2 timeout,
/// 3 player colour and anything else, 4 search depth. `None` for help and
/// version output.
fn usage_exit_code(err: &clap::Error) -> Option<i32> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => return None,
        _ => {}
    }

    let arg = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.as_str(),
        // Missing positionals: the first one named decides
        Some(ContextValue::Strings(args)) => args.first().map_or("", String::as_str),
        _ => "",
    };

    let code = if arg.contains("BOARD_SIZE") {
        1
    } else if arg.contains("TIMEOUT") {
        2
    } else if arg.contains("DEPTH") {
        4
    } else {
        3
    };
    Some(code)
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match usage_exit_code(&err) {
            Some(code) => {
                let _ = err.print();
                eprintln!("exiting Halma");
                std::process::exit(code);
            }
            None => err.exit(),
        },
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = parse_cli();
    let mode = if cli.hotseat { GameMode::Hotseat } else { GameMode::VsComputer };
    let config = match GameConfig::new(cli.board_size, cli.timeout, cli.player_color, cli.depth, mode) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("exiting Halma");
            std::process::exit(err.exit_code());
        }
    };
    log::info!("starting {0}x{0} game ({1:?})", config.board_size(), config.mode());

    let side = 160.0 + 56.0 * config.board_size() as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side + 280.0, side.max(600.0)])
            .with_min_inner_size([640.0, 520.0])
            .with_title("Halma"),
        ..Default::default()
    };

    eframe::run_native(
        "Halma",
        options,
        Box::new(move |cc| Ok(Box::new(HalmaApp::new(cc, config)))),
    )
}
