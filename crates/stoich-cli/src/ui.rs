use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use stoich::core::atoms::AtomCountMap;
use stoich::core::elements::ElementInfo;
use stoich::core::tokenizer::ElementToken;
use stoich::engine::equation::{EquationReport, EquationValidationResult};
use stoich::engine::error::{EquationError, Imbalance};
use stoich::engine::formula::{FormulaReport, FormulaValidationResult};
use stoich::workflows::check::{CheckSummary, RecordReport};
use stoich::workflows::reaction::ReactionField;

/// Everything the `formula` command knows about one input.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaOutput<'a> {
    pub formula: &'a str,
    #[serde(flatten)]
    pub report: FormulaReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atoms: Option<AtomCountMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molar_mass: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquationOutput<'a> {
    pub equation: &'a str,
    #[serde(flatten)]
    pub report: EquationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactant_atoms: Option<AtomCountMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_atoms: Option<AtomCountMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactant_mass: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_mass: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub imbalances: Vec<Imbalance>,
}

impl<'a> EquationOutput<'a> {
    pub fn new(equation: &'a str, result: &EquationValidationResult) -> Self {
        let imbalances = match result {
            Err(EquationError::Unbalanced(imbalances)) => imbalances.clone(),
            _ => Vec::new(),
        };
        let (reactant_atoms, product_atoms, masses) = match result {
            Ok(eq) => {
                let (r, p) = stoich::engine::mass::side_masses(eq);
                (
                    Some(eq.reactant_atoms()),
                    Some(eq.product_atoms()),
                    Some((r, p)),
                )
            }
            Err(_) => (None, None, None),
        };
        Self {
            equation,
            report: EquationReport::from(result),
            reactant_atoms,
            product_atoms,
            reactant_mass: masses.map(|(r, _)| r),
            product_mass: masses.map(|(_, p)| p),
            imbalances,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordOutput<'a> {
    pub index: usize,
    pub name: &'a str,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<ReactionField, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactant_mass: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_mass: Option<f64>,
}

impl<'a> From<&'a RecordReport> for RecordOutput<'a> {
    fn from(report: &'a RecordReport) -> Self {
        Self {
            index: report.index,
            name: &report.name,
            is_valid: report.is_valid(),
            errors: report.validation.errors.clone(),
            reactant_mass: report.reactant_mass,
            product_mass: report.product_mass,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutput<'a> {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub records: Vec<RecordOutput<'a>>,
}

impl<'a> CheckOutput<'a> {
    pub fn new(summary: &'a CheckSummary, show_valid: bool) -> Self {
        Self {
            total: summary.reports.len(),
            valid: summary.valid_count(),
            invalid: summary.invalid_count(),
            records: summary
                .reports
                .iter()
                .filter(|r| show_valid || !r.is_valid())
                .map(RecordOutput::from)
                .collect(),
        }
    }
}

pub fn render_tokens(tokens: &[ElementToken]) -> String {
    tokens
        .iter()
        .map(|t| format!("{}×{}", t.symbol, t.count))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One `symbol count` line per element, aligned, in alphabetical order.
pub fn render_atom_table(atoms: &AtomCountMap, indent: &str) -> String {
    let mut out = String::new();
    for (symbol, count) in atoms.iter() {
        let _ = writeln!(out, "{indent}{symbol:<3} {count:>6}");
    }
    out
}

pub fn render_formula(output: &FormulaOutput<'_>, result: &FormulaValidationResult) -> String {
    let mut out = String::new();
    match result {
        Ok(tokens) => {
            let _ = writeln!(out, "✓ {}", output.formula);
            let _ = writeln!(out, "  Elements: {}", render_tokens(tokens));
            if let Some(atoms) = &output.atoms {
                let _ = writeln!(out, "  Atoms ({} total):", atoms.total_atoms());
                out.push_str(&render_atom_table(atoms, "    "));
            }
            if let Some(mass) = output.molar_mass {
                let _ = writeln!(out, "  Molar mass: {:.3} g/mol", mass);
            }
        }
        Err(e) => {
            let _ = writeln!(out, "✗ {}", output.formula);
            let _ = writeln!(out, "  {}", e);
        }
    }
    out
}

pub fn render_equation(output: &EquationOutput<'_>, result: &EquationValidationResult) -> String {
    let mut out = String::new();
    match result {
        Ok(eq) => {
            let _ = writeln!(out, "✓ Balanced: {}", output.equation);
            let _ = writeln!(out, "  Reactants: {}", eq.reactants.join(" + "));
            let _ = writeln!(out, "  Products:  {}", eq.products.join(" + "));
            if let (Some(r), Some(p)) = (&output.reactant_atoms, &output.product_atoms) {
                out.push_str(&render_side_by_side(r, p));
            }
            if let (Some(r), Some(p)) = (output.reactant_mass, output.product_mass) {
                let _ = writeln!(out, "  Mass: {:.3} g/mol {} {:.3} g/mol", r, eq.arrow, p);
            }
        }
        Err(EquationError::Unbalanced(imbalances)) => {
            let _ = writeln!(out, "✗ Unbalanced: {}", output.equation);
            let _ = writeln!(out, "  {:<8} {:>9} {:>9}", "Element", "Reactants", "Products");
            for imbalance in imbalances {
                let _ = writeln!(
                    out,
                    "  {:<8} {:>9} {:>9}",
                    imbalance.symbol, imbalance.reactants, imbalance.products
                );
            }
        }
        Err(e) => {
            let _ = writeln!(out, "✗ Invalid: {}", output.equation);
            let _ = writeln!(out, "  {}", e);
        }
    }
    out
}

fn render_side_by_side(reactants: &AtomCountMap, products: &AtomCountMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {:<8} {:>9} {:>9}", "Element", "Reactants", "Products");
    for (symbol, count) in reactants.iter() {
        let _ = writeln!(out, "  {:<8} {:>9} {:>9}", symbol, count, products.get(symbol));
    }
    out
}

pub fn render_element(info: &ElementInfo) -> String {
    format!(
        "{:>3}  {:<3} {:<14} {:>10.4} g/mol",
        info.atomic_number, info.symbol, info.name, info.atomic_mass
    )
}

pub fn render_check(summary: &CheckSummary, show_valid: bool) -> String {
    let mut out = String::new();
    for report in &summary.reports {
        let label = display_name(report);
        if report.is_valid() {
            if show_valid {
                let _ = writeln!(out, "✓ #{} {}", report.index + 1, label);
            }
            continue;
        }
        let _ = writeln!(out, "✗ #{} {}", report.index + 1, label);
        for (field, message) in &report.validation.errors {
            let _ = writeln!(out, "    {:<12} {}", format!("{}:", field), message);
        }
    }
    let _ = writeln!(
        out,
        "\n{} record(s) checked: {} valid, {} invalid.",
        summary.reports.len(),
        summary.valid_count(),
        summary.invalid_count()
    );
    out
}

fn display_name(report: &RecordReport) -> &str {
    if report.name.trim().is_empty() {
        "(unnamed)"
    } else {
        &report.name
    }
}
