use std::collections::BTreeMap;

use serde::Serialize;

use super::weights::section_weights;
use super::{Catalog, Program};
use crate::error::Result;
use crate::report_helpers::{self, truncate};
use crate::score::analyzer::{AttributeGroup, IndicatorId};

fn format_overrides(overrides: &[(IndicatorId, f64)]) -> String {
    if overrides.is_empty() {
        return "-".to_string();
    }
    overrides
        .iter()
        .map(|(id, w)| format!("{id} {w}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print every program with its normalized section weights and its
/// indicator overrides.
pub fn print_programs(catalog: &Catalog) {
    let separator = report_helpers::separator(110);

    println!("Programs");
    println!("{separator}");
    print!(" {:<13} {:<30}", "Program", "Label");
    for group in AttributeGroup::ALL {
        print!(" {:>5}", group.id());
    }
    println!("   Overrides");
    println!("{separator}");

    for program in Program::ALL {
        let config = catalog.config(program);
        let weights = section_weights(config);
        let overrides: Vec<(IndicatorId, f64)> = config.overrides().collect();
        print!(" {:<13} {:<30}", program.id(), truncate(program.label(), 30));
        for group in AttributeGroup::ALL {
            print!(" {:>4.0}%", weights.get(&group).copied().unwrap_or(0.0) * 100.0);
        }
        println!("   {}", format_overrides(&overrides));
    }
    println!("{separator}");
}

#[derive(Serialize)]
struct JsonProgram {
    id: Program,
    label: &'static str,
    section_weights: BTreeMap<AttributeGroup, f64>,
    overrides: BTreeMap<String, f64>,
}

fn json_programs(catalog: &Catalog) -> Vec<JsonProgram> {
    Program::ALL
        .into_iter()
        .map(|program| {
            let config = catalog.config(program);
            JsonProgram {
                id: program,
                label: program.label(),
                section_weights: section_weights(config),
                overrides: config.overrides().map(|(id, w)| (id.to_string(), w)).collect(),
            }
        })
        .collect()
}

pub fn print_json(catalog: &Catalog) -> Result<()> {
    report_helpers::print_json_stdout(&json_programs(catalog))
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
