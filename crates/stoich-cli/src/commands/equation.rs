use super::CommandContext;
use crate::cli::EquationArgs;
use crate::error::{CliError, Result};
use crate::ui::{self, EquationOutput};
use stoich::engine::equation::validate_reaction_equation_with;
use tracing::{debug, info};

pub fn run(args: EquationArgs, ctx: &CommandContext) -> Result<()> {
    info!("Validating equation: {}", args.equation);
    let result = validate_reaction_equation_with(&args.equation, &ctx.config);
    debug!(valid = result.is_ok(), "Equation processed.");

    let output = EquationOutput::new(&args.equation, &result);
    ctx.emit(&output, || ui::render_equation(&output, &result))?;

    result
        .map(|_| ())
        .map_err(|e| CliError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use stoich::engine::config::ValidationConfig;

    fn run_text(equation: &str, config: ValidationConfig) -> Result<()> {
        let ctx = CommandContext {
            config,
            format: OutputFormat::Text,
            quiet: true,
        };
        run(
            EquationArgs {
                equation: equation.to_string(),
            },
            &ctx,
        )
    }

    #[test]
    fn balanced_equation_succeeds() {
        assert!(run_text("CH4 + 2O2 -> CO2 + 2H2O", ValidationConfig::default()).is_ok());
    }

    #[test]
    fn unbalanced_equation_returns_the_validator_message() {
        let err = run_text("H2 + O2 = H2O", ValidationConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Equation is unbalanced: O: 2 → 1");
    }

    #[test]
    fn coefficient_ceiling_comes_from_the_context() {
        let config = ValidationConfig::builder()
            .max_coefficient(3)
            .build()
            .unwrap();
        let err = run_text("4Fe + 3O2 → 2Fe2O3", config).unwrap_err();
        assert_eq!(err.to_string(), "Invalid coefficient for Fe: 4");
    }
}
