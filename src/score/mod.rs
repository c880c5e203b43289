pub mod aggregate;
pub mod analyzer;
pub mod indicators;
pub mod intangibles;
pub mod mapping;
mod report;

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::answers::AnswerRecord;
use crate::error::{Error, Result};
use crate::program::weights::{attribute_total, global_score, section_weights};
use crate::program::{Catalog, Program};

use analyzer::{
    AttributeGroup, AttributeScore, IndicatorScore, IntangibleScore, ScoreReport, score_to_level,
};
use indicators::comodidad::{ComodidadInputs, ComodidadScores};
use indicators::conexiones::{ConexionesInputs, ConexionesScores};
use indicators::encuentro::{EncuentroInputs, EncuentroScores};
use indicators::usos::{UsosInputs, UsosScores};
use report::{print_json, print_report};

/// Program an answer record is scored under: the explicit choice if any,
/// else its `program_id` answer.
pub fn program_for(answers: &AnswerRecord, explicit: Option<Program>) -> Program {
    explicit.unwrap_or_else(|| Program::resolve(answers.text("program_id")))
}

/// Score one answer record.
///
/// Groups are computed A1, A3, A2, A4: A2's intangibles borrow A3.4 and
/// A4 reads A1.1 and the A1 night-use answer. The record is only read.
pub fn evaluate(program: Program, answers: &AnswerRecord, catalog: &Catalog) -> ScoreReport {
    let config = catalog.config(program);
    debug!(program = program.id(), answers = answers.len(), "evaluating record");

    let encuentro = EncuentroScores::compute(&EncuentroInputs::from_answers(answers));
    let comodidad = ComodidadScores::compute(&ComodidadInputs::from_answers(answers));
    let conexiones = ConexionesScores::compute(&ConexionesInputs::from_answers(answers));
    let usos = UsosScores::compute(&UsosInputs::from_answers(answers), encuentro.diversity);

    let groups: [(AttributeGroup, Vec<IndicatorScore>, Vec<IntangibleScore>); 4] = [
        (
            AttributeGroup::Encuentro,
            encuentro.scores(),
            intangibles::encuentro(&encuentro),
        ),
        (
            AttributeGroup::Conexiones,
            conexiones.scores(),
            intangibles::conexiones(&conexiones, comodidad.walkability),
        ),
        (
            AttributeGroup::Comodidad,
            comodidad.scores(),
            intangibles::comodidad(&comodidad),
        ),
        (AttributeGroup::Usos, usos.scores(), intangibles::usos(&usos)),
    ];

    let attributes: Vec<AttributeScore> = groups
        .into_iter()
        .map(|(group, indicators, intangibles)| {
            let total = attribute_total(config, group, &indicators);
            AttributeScore {
                group,
                indicators,
                intangibles,
                total,
                level: score_to_level(total),
            }
        })
        .collect();

    let sections: BTreeMap<AttributeGroup, Option<f64>> = attributes
        .iter()
        .map(|a| (a.group, Some(a.total)))
        .collect();
    let global = global_score(config, &sections);

    ScoreReport {
        program,
        attributes,
        global_score: global,
        level: score_to_level(global),
    }
}

/// Read one or more answer records from a JSON file.
pub fn read_answers(path: &Path) -> Result<Vec<AnswerRecord>> {
    let input = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let records = AnswerRecord::from_json_str(&input)?;
    if records.is_empty() {
        return Err(Error::InvalidAnswers(format!(
            "{}: no answer records",
            path.display()
        )));
    }
    for (index, record) in records.iter().enumerate() {
        if record.is_empty() {
            warn!(path = %path.display(), index, "answer record has no answers");
        }
    }
    Ok(records)
}

/// Score every record in `path` and print the reports.
pub fn run(
    path: &Path,
    program: Option<Program>,
    catalog_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let catalog = Catalog::load_or_builtin(catalog_path)?;
    let records = read_answers(path)?;

    let reports: Vec<(ScoreReport, &AnswerRecord)> = records
        .iter()
        .map(|answers| {
            let program = program_for(answers, program);
            (evaluate(program, answers, &catalog), answers)
        })
        .collect();

    if json {
        return print_json(&reports, &catalog);
    }
    for (i, (report, answers)) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let weights = section_weights(catalog.config(report.program));
        print_report(report, answers, &weights);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
