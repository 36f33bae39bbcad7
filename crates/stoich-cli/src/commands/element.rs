use super::CommandContext;
use crate::cli::ElementArgs;
use crate::error::{CliError, Result};
use crate::ui;
use crate::utils::parser::parse_element_query;
use stoich::core::elements::{self, ElementInfo};
use tracing::debug;

pub fn run(args: ElementArgs, ctx: &CommandContext) -> Result<()> {
    let selected: Vec<&'static ElementInfo> = match args.query.as_deref() {
        Some(query) if !args.all => {
            vec![parse_element_query(query).map_err(|e| CliError::Argument(e.to_string()))?]
        }
        _ => elements::iter_by_atomic_number().collect(),
    };
    debug!("Element lookup matched {} element(s).", selected.len());

    if let [single] = selected.as_slice() {
        ctx.emit(single, || ui::render_element(single))
    } else {
        ctx.emit(&selected, || {
            selected
                .iter()
                .map(|info| ui::render_element(info))
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}
