//! `lakeshore check` command implementation.

use clap::Args;
use lakeshore_content::{Collection, ContentError};
use lakeshore_store::Record;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Treat unconfigured collections as failures.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let ctx = global.context()?;
        let output = Output::new();

        let mut failed = 0;
        for collection in Collection::ALL {
            match ctx.client.try_query(collection, |_: &Record| (), None) {
                Ok(records) => {
                    output.success(&format!("{collection}: {} published records", records.len()));
                }
                Err(ContentError::Unconfigured(_)) => {
                    output.warning(&format!("{collection}: not configured"));
                    if self.strict {
                        failed += 1;
                    }
                }
                Err(e) => {
                    output.error(&format!("{collection}: {e}"));
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(CliError::Check {
                failed,
                total: Collection::ALL.len(),
            });
        }
        Ok(())
    }
}
