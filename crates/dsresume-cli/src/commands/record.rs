//! `dsresume record`: dump the built-in record.

use tracing::instrument;

use dsresume_adapters::builtin_record;

use crate::{
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(output: OutputManager) -> CliResult<()> {
    let record = builtin_record::record()?;
    let json =
        serde_json::to_string_pretty(&record).with_cli_context(|| "Failed to serialise record")?;
    output.emit(&json)?;
    Ok(())
}
