use super::library::ReactionLibrary;
use super::reaction::{ReactionData, ReactionDataValidation, validate_reaction_fields};
use crate::engine::config::ValidationConfig;
use crate::engine::equation::validate_reaction_equation_with;
use crate::engine::mass::side_masses;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of checking one record of a reaction library.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordReport {
    /// Position of the record in the library.
    pub index: usize,
    pub name: String,
    pub validation: ReactionDataValidation,
    /// Total reactant mass in g/mol, present when the equation is valid.
    pub reactant_mass: Option<f64>,
    /// Total product mass in g/mol, present when the equation is valid.
    pub product_mass: Option<f64>,
}

impl RecordReport {
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckSummary {
    pub reports: Vec<RecordReport>,
}

impl CheckSummary {
    pub fn valid_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.reports.len() - self.valid_count()
    }

    pub fn invalid(&self) -> impl Iterator<Item = &RecordReport> {
        self.reports.iter().filter(|r| !r.is_valid())
    }
}

#[instrument(skip_all, name = "check_workflow", fields(records = library.len()))]
pub fn run(
    library: &ReactionLibrary,
    config: &ValidationConfig,
    reporter: &ProgressReporter,
) -> CheckSummary {
    reporter.report(Progress::PhaseStart {
        name: "Validating reactions",
    });
    info!("Checking {} reaction record(s).", library.len());

    reporter.report(Progress::TaskStart {
        total_steps: library.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = library.records().iter().enumerate();

    #[cfg(feature = "parallel")]
    let iterator = library.records().par_iter().enumerate();

    let reports: Vec<RecordReport> = iterator
        .map(|(index, record)| {
            let report = check_record(index, record, config);
            reporter.report(Progress::TaskIncrement);
            report
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let summary = CheckSummary { reports };
    info!(
        valid = summary.valid_count(),
        invalid = summary.invalid_count(),
        "Reaction check finished."
    );
    reporter.report(Progress::PhaseFinish);
    summary
}

// The equation is validated once and shared by the field checks and the mass totals.
fn check_record(index: usize, record: &ReactionData, config: &ValidationConfig) -> RecordReport {
    let equation = validate_reaction_equation_with(&record.equation, config);
    let validation = validate_reaction_fields(record, &equation, &config.reaction);
    let (reactant_mass, product_mass) = match &equation {
        Ok(eq) => {
            let (r, p) = side_masses(eq);
            (Some(r), Some(p))
        }
        Err(_) => (None, None),
    };

    RecordReport {
        index,
        name: record.name.clone(),
        validation,
        reactant_mass,
        product_mass,
    }
}
