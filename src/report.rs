use crate::cli::{Cli, OutputFormat};
use crate::reader::read_package;
use crate::training::Training;
use crate::types::Package;
use crate::utils::{format_duration, hours_to_delta};
use anyhow::{Context, Result};
use std::io::Write;

/// Dispatch every package in order and write one summary line each.
///
/// Stops at the first package that cannot be dispatched; lines already
/// written are kept.
pub fn run(packages: &[Package], cli: &Cli, out: &mut impl Write) -> Result<()> {
    for (i, Package { code, data }) in packages.iter().enumerate() {
        let training = read_package(code, data)
            .with_context(|| format!("package #{} ({code})", i + 1))?;
        report(i + 1, code, training.as_ref(), cli, out)?;
    }

    tracing::info!(workouts = packages.len(), "done");
    Ok(())
}

fn report(
    index: usize,
    code: &str,
    training: &dyn Training,
    cli: &Cli,
    out: &mut impl Write,
) -> Result<()> {
    let message = training.show_training_info();

    match cli.format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(&message)?)?;
        }
        OutputFormat::Text if cli.details => {
            let dur_str = hours_to_delta(message.duration)
                .map_or_else(|| "unknown".to_string(), format_duration);
            writeln!(out, "{index}\t{code}\t{dur_str}\t{message}")?;
        }
        OutputFormat::Text => writeln!(out, "{message}")?,
    }

    Ok(())
}
