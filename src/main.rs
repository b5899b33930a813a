//! Tipster CLI application entry point
//!
//! Serves short tips in the terminal: an interactive session that never
//! repeats a tip until all have been shown, plus one-shot commands for
//! scripting.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session (default command)
//! tipster
//! tipster interactive
//!
//! # One-shot commands
//! tipster show 3
//! tipster search prompt --category "Chat Features"
//! tipster random -c Security
//! tipster add -t "Title" -b "Body" -c "Testing"
//! tipster export tips.csv --format csv
//!
//! # Install the starter tips
//! tipster init
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/tipster/config.toml` on Linux) and written with defaults on
//! first run. Command-line flags override it.

use std::path::PathBuf;
use std::process::ExitCode;
use tipster::{
    TipsterError,
    app::{self, TipsApp},
    cli::{Cli, Commands},
    commands,
    config::TipsterConfig,
    logging,
    session::random,
    store::{NewTip, TipStore},
    supervisor,
    ui::{DialoguerInput, OutputWriter, StdoutWriter, loading},
};

type Result<T> = std::result::Result<T, TipsterError>;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    supervisor::install_panic_hook();
    supervisor::run(|| run(&cli))
}

/// Load the config file and apply command-line overrides
fn load_config(cli: &Cli) -> Result<TipsterConfig> {
    let mut config = match &cli.config {
        Some(path) => TipsterConfig::load_from(path)?,
        None => TipsterConfig::load()?,
    };

    if let Some(store) = &cli.store {
        config.store_path = Some(store.clone());
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if cli.no_animation {
        config.animation = false;
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    if let Ok(data_dir) = TipsterConfig::data_dir() {
        let (logs_path, filter) = logging::resolve_path_and_filter(&data_dir, &config.logs);
        logging::init(&logs_path, filter)?;
    }
    tracing::debug!(?config, "Configuration loaded");

    let store_path = config.resolved_store_path()?;
    let quiet = cli.quiet;
    let writer = StdoutWriter::without_clearing();

    match cli.get_command() {
        Commands::Interactive => run_interactive(&config, store_path, quiet),
        Commands::Init { force } => commands::init(&mut TipStore::new(store_path), force, &writer, quiet),
        command => {
            let (mut store, warning) = TipStore::open(&store_path);
            if let Some(err) = &warning
                && !quiet
            {
                writer.warning(&err.to_string());
            }

            match command {
                Commands::Show { id } => commands::show(&store, id, &writer),
                Commands::Search { keyword, category } => {
                    commands::search(&store, &keyword, category.as_deref(), &writer, quiet)
                }
                Commands::Categories => commands::categories(&store, &writer, quiet),
                Commands::Stats => commands::stats(&store, &writer),
                Commands::Random { category } => {
                    let mut rng = random::from_seed(config.seed);
                    commands::random(&store, category.as_deref(), &mut rng, &writer, quiet)
                }
                Commands::Add { title, content, category } => {
                    // Never overwrite a tips file that exists but could not be read
                    if let Some(err) = warning
                        && !err.is_absent()
                    {
                        return Err(err.into());
                    }
                    commands::add(&mut store, NewTip::new(title, content, category), &writer, quiet)
                }
                Commands::Export { path, format } => commands::export(&store, &path, format, &writer, quiet),
                Commands::Interactive | Commands::Init { .. } => unreachable!(),
            }
        }
    }
}

/// Run the prompt loop with terminal input and output
fn run_interactive(config: &TipsterConfig, store_path: PathBuf, quiet: bool) -> Result<()> {
    let output = if config.clear_screen {
        StdoutWriter::new()
    } else {
        StdoutWriter::without_clearing()
    };

    let mut app = TipsApp::new(
        TipStore::new(store_path),
        DialoguerInput::new(),
        output,
        random::from_seed(config.seed),
    )
    .with_loading(loading::hook(config.animation))
    .quiet(quiet);

    let goodbye_writer = StdoutWriter::without_clearing();
    supervisor::install_signal_handler(app.store().write_guard(), move || {
        goodbye_writer.write(&app::goodbye());
    })?;

    app.start();
    app.run()?;
    Ok(())
}
