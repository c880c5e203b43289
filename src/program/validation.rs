use super::{CatalogFile, Program};
use crate::score::analyzer::{AttributeGroup, IndicatorId};

fn check_weight(errors: &mut Vec<String>, path: &str, weight: f64) {
    if !weight.is_finite() {
        errors.push(format!("{path}: weight must be a finite number"));
    } else if weight < 0.0 {
        errors.push(format!("{path}: weight must be non-negative, got {weight}"));
    }
}

fn check_sections(
    errors: &mut Vec<String>,
    prefix: &str,
    sections: &std::collections::BTreeMap<String, f64>,
) {
    for (name, weight) in sections {
        let path = format!("{prefix}.{name}");
        if AttributeGroup::from_section(name).is_none() {
            errors.push(format!(
                "{path}: unknown section (expected Encuentro, Conexiones, Comodidad or Usos)"
            ));
            continue;
        }
        check_weight(errors, &path, *weight);
    }
}

/// Validate a catalog file.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(file: &CatalogFile) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref common) = file.common_section_weights {
        check_sections(&mut errors, "common_section_weights", common);
    }

    for (id, program) in &file.programs {
        let prefix = format!("programs.{id}");
        if id.parse::<Program>().is_err() {
            errors.push(format!("{prefix}: unknown program"));
            continue;
        }
        if file
            .programs
            .keys()
            .filter(|other| other.eq_ignore_ascii_case(id))
            .count()
            > 1
        {
            errors.push(format!("{prefix}: program configured more than once"));
        }

        if let Some(ref groups) = program.indicator_weights {
            for (group_id, weights) in groups {
                let group_path = format!("{prefix}.indicator_weights.{group_id}");
                let Some(group) = AttributeGroup::from_id(group_id) else {
                    errors.push(format!("{group_path}: unknown attribute"));
                    continue;
                };
                for (indicator, weight) in weights {
                    let path = format!("{group_path}.{indicator}");
                    match indicator.parse::<IndicatorId>() {
                        Ok(parsed) if parsed.group == group => check_weight(&mut errors, &path, *weight),
                        Ok(_) => errors.push(format!("{path}: indicator belongs to another attribute")),
                        Err(_) => errors.push(format!("{path}: unknown indicator")),
                    }
                }
            }
        }

        if let Some(ref sections) = program.section_weights {
            check_sections(&mut errors, &format!("{prefix}.section_weights"), sections);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;
