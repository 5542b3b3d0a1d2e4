use std::path::PathBuf;

use crate::args::{Command, DeckArgs};
use crate::catalog::CatalogSet;
use crate::config::types::ConfigFile;
use crate::config::{PresentSettings, load_config, resolve_present, resolve_serve};
use crate::deck::Deck;
use crate::error::AppResult;
use crate::presenter::{PlaybackSettings, PresentOptions, run_presenter};
use crate::serve::{ServeOptions, run_server};
use crate::shutdown::{setup_signal_shutdown_handler, shutdown_channel};

use super::report::{print_catalog, print_check};

pub(super) enum RunPlan {
    Present {
        settings: PresentSettings,
        deck: Deck,
    },
    Serve(ServeOptions),
    Check {
        catalogs: CatalogSet,
        deck: Deck,
    },
    Catalog {
        id: String,
        catalogs: CatalogSet,
    },
}

/// Resolves config and catalogs up front so every validation error surfaces
/// before the runtime or the terminal UI starts.
pub(super) fn build_plan(args: &DeckArgs) -> AppResult<RunPlan> {
    let config = load_config(args.config.as_deref())?;

    match &args.command {
        Command::Present(present) => {
            let section = config.as_ref().and_then(|file| file.present.as_ref());
            let settings = resolve_present(present, section)?;
            let catalogs = CatalogSet::load(settings.catalog_dir.as_deref())?;
            let deck = Deck::build(&catalogs)?;
            Ok(RunPlan::Present { settings, deck })
        }
        Command::Serve(serve) => Ok(RunPlan::Serve(resolve_serve(
            serve,
            config.as_ref().and_then(|file| file.serve.as_ref()),
        ))),
        Command::Check(check) => {
            let catalog_dir = catalog_dir_or_config(check.catalog_dir.clone(), config.as_ref());
            let catalogs = CatalogSet::load(catalog_dir.as_deref())?;
            let deck = Deck::build(&catalogs)?;
            Ok(RunPlan::Check { catalogs, deck })
        }
        Command::Catalog(catalog) => {
            let catalog_dir = catalog_dir_or_config(catalog.catalog_dir.clone(), config.as_ref());
            let catalogs = CatalogSet::load(catalog_dir.as_deref())?;
            Ok(RunPlan::Catalog {
                id: catalog.id.clone(),
                catalogs,
            })
        }
    }
}

/// `check` and `catalog` share the `[present]` catalog directory.
fn catalog_dir_or_config(cli: Option<PathBuf>, config: Option<&ConfigFile>) -> Option<PathBuf> {
    cli.or_else(|| {
        config
            .and_then(|file| file.present.as_ref())
            .and_then(|present| present.catalog_dir.clone())
    })
}

pub(super) async fn execute_plan(plan: RunPlan, no_color: bool) -> AppResult<()> {
    match plan {
        RunPlan::Present { settings, deck } => {
            let (shutdown_tx, _) = shutdown_channel();
            let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);
            tracing::info!(
                "Presenting {} slides at {} ({:?} base interval)",
                deck.count(),
                settings.speed,
                settings.base_interval
            );
            let options = PresentOptions {
                passcode: settings.passcode,
                settings: PlaybackSettings {
                    base_interval: settings.base_interval,
                    speed: settings.speed,
                },
                start_slide: settings.start_slide,
                no_ui: settings.no_ui,
                no_color,
            };
            let result = run_presenter(deck, options, &shutdown_tx).await;
            drop(shutdown_tx.send(()));
            signal_handle.await?;
            result
        }
        RunPlan::Serve(options) => {
            let (shutdown_tx, _) = shutdown_channel();
            let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);
            let result = run_server(&options, shutdown_tx.subscribe()).await;
            drop(shutdown_tx.send(()));
            signal_handle.await?;
            result
        }
        RunPlan::Check { catalogs, deck } => {
            let mut stdout = std::io::stdout().lock();
            print_check(&mut stdout, &catalogs, &deck)?;
            Ok(())
        }
        RunPlan::Catalog { id, catalogs } => {
            let catalog = catalogs.require(&id)?;
            let mut stdout = std::io::stdout().lock();
            print_catalog(&mut stdout, &catalog)?;
            Ok(())
        }
    }
}
