mod plan;
mod report;

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::Path;

use clap::{CommandFactory, FromArgMatches};

use crate::args::DeckArgs;
use crate::error::{AppError, AppResult, ValidationError};
use plan::{RunPlan, build_plan, execute_plan};

/// Default config filenames checked when no CLI args are provided.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["prewarm-deck.toml", "prewarm-deck.json"];

/// Parses the command line, sets up logging and the runtime, and runs the
/// selected command.
///
/// # Errors
///
/// Returns an error when arguments, config, or catalogs are invalid, or when
/// the command itself fails.
pub fn run() -> AppResult<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    let plan = build_plan(&args)?;
    let interactive = matches!(&plan, RunPlan::Present { settings, .. } if !settings.no_ui)
        && std::io::stdout().is_terminal();
    crate::logger::init_logging(args.verbose, args.no_color, interactive);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(ValidationError::RuntimeBuildFailed { source: err }))?;

    runtime.block_on(execute_plan(plan, args.no_color))
}

fn parse_args() -> AppResult<Option<DeckArgs>> {
    let mut cmd = DeckArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = DeckArgs::from_arg_matches(&matches)?;

    Ok(Some(args))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}
