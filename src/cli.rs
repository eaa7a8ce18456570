use std::{fs, path::PathBuf};

mod resolve;
mod roots;
mod terminal;

use clap::ArgAction;
use relroot::{DirStore, RootRegistry, RootsConfig};
use resolve::Resolve;
use roots::Roots;

/// Default name of the sub-root list file, relative to the store root.
const DEFAULT_CONFIG_FILE: &str = ".subroots";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the root of the document store
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    /// The sub-root list file (default: <root>/.subroots)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let workspace = Workspace::open(self.root, self.config)?;

        self.command
            .unwrap_or_else(|| Command::Roots(Roots::default()))
            .run(&workspace)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List the registered sub-roots and their index sizes (default)
    Roots(Roots),

    /// Resolve a single link target as written in a document
    Resolve(Resolve),
}

impl Command {
    fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        match self {
            Self::Roots(command) => command.run(workspace),
            Self::Resolve(command) => command.run(workspace),
        }
    }
}

/// The store, parsed configuration, and registry a command operates on.
///
/// This is the "explicit instance owned by the application context": the
/// registry is built once from the configuration and handed by reference to
/// each command.
pub struct Workspace {
    store: DirStore,
    config: RootsConfig,
    registry: RootRegistry,
}

impl Workspace {
    /// Opens the store and builds the registry from the sub-root list file.
    ///
    /// A missing configuration file is tolerated: it behaves as an empty
    /// configuration, so every resolution falls back.
    fn open(root: PathBuf, config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = config_path.unwrap_or_else(|| root.join(DEFAULT_CONFIG_FILE));

        let store = DirStore::open(root)?;

        let text = match fs::read_to_string(&config_path) {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(
                    "could not read sub-root list {}: {error}",
                    config_path.display()
                );
                String::new()
            }
        };

        let config = RootsConfig::parse(&text);
        let registry = RootRegistry::build(config.prefixes(), &store);

        Ok(Self {
            store,
            config,
            registry,
        })
    }
}
