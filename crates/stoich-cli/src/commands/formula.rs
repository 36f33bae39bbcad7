use super::CommandContext;
use crate::cli::FormulaArgs;
use crate::error::{CliError, Result};
use crate::ui::{self, FormulaOutput};
use stoich::core::atoms::count_atoms;
use stoich::engine::formula::{FormulaReport, FormulaValidationResult, validate_chemical_formula_with};
use stoich::engine::mass::molar_mass_of;
use tracing::{debug, info};

pub fn run(args: FormulaArgs, ctx: &CommandContext) -> Result<()> {
    info!("Validating {} formula(s).", args.formulas.len());

    let results: Vec<FormulaValidationResult> = args
        .formulas
        .iter()
        .map(|formula| validate_chemical_formula_with(formula, &ctx.config))
        .collect();

    let outputs: Vec<FormulaOutput<'_>> = args
        .formulas
        .iter()
        .zip(&results)
        .map(|(formula, result)| build_output(formula, result))
        .collect();

    ctx.emit(&outputs, || {
        outputs
            .iter()
            .zip(&results)
            .map(|(output, result)| ui::render_formula(output, result))
            .collect::<Vec<_>>()
            .join("\n")
    })?;

    let invalid = results.iter().filter(|r| r.is_err()).count();
    if invalid > 0 {
        return Err(CliError::Validation(format!(
            "{} of {} formula(s) are invalid.",
            invalid,
            results.len()
        )));
    }
    Ok(())
}

fn build_output<'a>(formula: &'a str, result: &FormulaValidationResult) -> FormulaOutput<'a> {
    let atoms = result.as_ref().ok().map(|_| count_atoms(&[formula]));
    let molar_mass = atoms.as_ref().map(molar_mass_of);
    debug!(formula, valid = result.is_ok(), ?molar_mass, "Formula processed.");

    FormulaOutput {
        formula,
        report: FormulaReport::from(result),
        atoms,
        molar_mass,
    }
}
