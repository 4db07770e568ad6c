//! `dsresume render`: render the built-in record.

use std::path::Path;

use tracing::{debug, info, instrument};

use dsresume_adapters::{LocalFilesystem, builtin_record, writer};
use dsresume_core::{application::RenderService, domain::DocumentFormat};

use crate::{
    cli::RenderArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `render` command.
///
/// Flags win over `render.*` config values. Without `--output` the page goes
/// to stdout and no status lines are printed, so the output can be piped.
#[instrument(skip_all)]
pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let format = args.format.unwrap_or(config.render.format);
    let media = args.media.unwrap_or(config.render.media);
    debug!(%format, %media, output = ?args.output, "Render options resolved");

    let record = builtin_record::record()?;
    let service = RenderService::new(
        record,
        writer::for_format(format, config.render.text_options()),
        Box::new(LocalFilesystem::new()),
    );

    let Some(path) = args.output else {
        let page = service.render(media)?;
        output.emit(&page)?;
        return Ok(());
    };

    let force = args.force || confirm_overwrite(&path, &output)?;
    let report = service.export(media, &path, force)?;
    info!(path = %report.path.display(), bytes = report.bytes, "Page written");

    output.success(&format!(
        "Wrote {} ({}, {}, {} bytes)",
        report.path.display(),
        report.format,
        report.media,
        report.bytes
    ))?;
    if report.media.is_print() && format == DocumentFormat::Html {
        output.info("Open it in a browser and use Print → Save as PDF (Letter)")?;
    }

    Ok(())
}

/// Ask before replacing an existing file. Only prompts on an interactive,
/// non-quiet terminal; otherwise the export refuses on its own.
#[cfg(feature = "interactive")]
fn confirm_overwrite(path: &Path, output: &OutputManager) -> CliResult<bool> {
    use std::io::IsTerminal as _;

    use crate::error::CliError;

    if !path.exists() || output.is_quiet() || !std::io::stdin().is_terminal() {
        return Ok(false);
    }

    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("{} already exists. Overwrite?", path.display()))
        .default(false)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "Could not read confirmation".into(),
            source: Some(Box::new(e)),
        })?;

    if confirmed {
        Ok(true)
    } else {
        Err(CliError::Cancelled)
    }
}

#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(_path: &Path, _output: &OutputManager) -> CliResult<bool> {
    Ok(false)
}
