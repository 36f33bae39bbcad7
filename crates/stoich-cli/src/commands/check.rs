use super::CommandContext;
use crate::cli::{CheckArgs, OutputFormat};
use crate::error::{CliError, Result};
use crate::ui::{self, CheckOutput};
use crate::utils::progress::CliProgressHandler;
use stoich::engine::progress::ProgressReporter;
use stoich::workflows::check;
use stoich::workflows::library::ReactionLibrary;
use tracing::info;

pub fn run(args: CheckArgs, ctx: &CommandContext) -> Result<()> {
    info!("Loading reaction library from {:?}", &args.input);
    let library = ReactionLibrary::load(&args.input)?;

    if library.is_empty() {
        return Err(CliError::Argument(format!(
            "No reaction records found in '{}'.",
            args.input.display()
        )));
    }

    let progress_handler = if ctx.quiet || ctx.format == OutputFormat::Json {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let summary = check::run(&library, &ctx.config, &reporter);

    let output = CheckOutput::new(&summary, args.show_valid);
    ctx.emit(&output, || ui::render_check(&summary, args.show_valid))?;

    if summary.invalid_count() > 0 {
        return Err(CliError::Validation(format!(
            "{} of {} reaction record(s) failed validation.",
            summary.invalid_count(),
            summary.reports.len()
        )));
    }
    Ok(())
}
