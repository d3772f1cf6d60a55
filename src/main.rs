mod action;
mod app;
mod cli;
mod commands;
mod config;
mod dispatch;
mod error;
mod host;
mod logging;
mod theme;
mod widget;

use color_eyre::eyre::{eyre, Result};

use app::{App, PreviewOptions};
use cli::{Cli, Command};
use config::ConfigManager;
use host::element_attributes;
use logging::LogTarget;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_args();
    let config = ConfigManager::new(cli.config_dir.clone())?;

    // The preview owns the terminal, so its logs go to a file
    let target = match (&cli.command, &config.general().log_file) {
        (_, Some(file)) => LogTarget::File(file.clone()),
        (Command::Preview { .. }, None) => LogTarget::Directory(config.log_dir()),
        _ => LogTarget::Stderr,
    };
    let filter = logging::build_filter(cli.log_level.as_deref(), &config.general().log_level);
    let _log_guard = logging::init(filter, &target)?;
    tracing::debug!("Using config directory {}", config.config_dir().display());

    match cli.command {
        Command::Themes { json, category } => {
            print!("{}", commands::themes(&config.catalog(), json, category.as_deref())?);
        }
        Command::Resolve { element, format } => {
            let attributes = element_attributes(element.document.as_deref(), element.element, &element.attrs)?;
            println!("{}", commands::resolve(config.catalog(), &attributes, format)?);
        }
        Command::Check => {
            let (report, ok) = commands::check(&config.catalog());
            print!("{}", report);
            if !ok {
                return Err(eyre!("theme catalog has invalid themes"));
            }
        }
        Command::Init { force } => {
            print!("{}", commands::init(&config, force)?);
        }
        Command::Preview { element, no_watch } => {
            // Dispatch tasks run on the runtime's workers while the UI loop
            // stays on this thread
            let runtime = tokio::runtime::Runtime::new()?;
            let _enter = runtime.enter();

            let options = PreviewOptions {
                document: element.document,
                element: element.element,
                overrides: element.attrs,
                watch: !no_watch,
            };
            let mut app = App::new(options, &config)?;
            app.run()?;
        }
    }

    Ok(())
}
