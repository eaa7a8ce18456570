use anyhow::Context;
use relroot::DocumentStore;
use serde::Serialize;
use tracing::instrument;

use super::{Workspace, terminal::Colorize};

/// Command arguments for `relroot roots`.
#[derive(Debug, Default, clap::Parser)]
#[command(about = "List the registered sub-roots and their index sizes")]
pub struct Roots {
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

impl Roots {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        if workspace.config.is_empty() {
            println!("No sub-roots configured. Add one per line to the sub-root list file.");
            return Ok(());
        }

        let rows: Vec<RootRow<'_>> = workspace
            .registry
            .roots()
            .iter()
            .map(|root| RootRow {
                prefix: root.prefix(),
                indexed: root.index().len(),
                missing: workspace.store.files_under(root.prefix()).is_none(),
            })
            .collect();

        match self.output {
            OutputFormat::Json => Self::output_json(&rows)?,
            OutputFormat::Plain => Self::output_plain(&rows),
        }

        Ok(())
    }

    fn output_plain(rows: &[RootRow<'_>]) {
        for row in rows {
            if row.missing {
                println!("{}  {}", row.prefix, "missing from store".warning());
            } else {
                let count = format!("{} indexed", row.indexed);
                println!("{}  {}", row.prefix, count.dim());
            }
        }
    }

    fn output_json(rows: &[RootRow<'_>]) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(std::io::stdout(), rows)
            .context("failed to render json output")?;
        println!();
        Ok(())
    }
}

#[derive(Serialize)]
struct RootRow<'a> {
    prefix: &'a str,
    indexed: usize,
    missing: bool,
}
