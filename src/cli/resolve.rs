use std::process;

use relroot::{Resolution, Resolver};
use tracing::instrument;

use super::Workspace;

/// Command arguments for `relroot resolve`.
#[derive(Debug, clap::Parser)]
#[command(about = "Resolve a single link target as written in a document")]
pub struct Resolve {
    /// The raw link target, exactly as written in the link
    target: String,

    /// The store path of the document containing the link
    #[arg(long, value_name = "PATH", default_value = "")]
    from: String,

    /// Output format (plain, json)
    #[arg(long, value_name = "FORMAT", default_value = "plain")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl Resolve {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let resolver = Resolver::new(&workspace.registry, &workspace.store);

        // The CLI has no native resolver to fall back to.
        let resolution = resolver.resolve(&self.target, &self.from, || ());

        let resolved = match resolution {
            Resolution::Resolved(path) => Some(path),
            Resolution::Fallback(()) => None,
        };

        match self.output {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "target": self.target,
                    "source": self.from,
                    "resolved": resolved.as_deref(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Plain => match &resolved {
                Some(path) => println!("{path}"),
                None => println!("not found"),
            },
        }

        // Exit non-zero when resolution fell back, for scripting.
        if resolved.is_none() {
            process::exit(1);
        }

        Ok(())
    }
}
