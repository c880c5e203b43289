use std::collections::BTreeMap;

use serde::Serialize;

use super::analyzer::{AttributeGroup, IndicatorId, PerformanceLevel, ScoreReport};
use crate::answers::AnswerRecord;
use crate::error::Result;
use crate::program::Catalog;
use crate::program::weights::section_weights;
use crate::report_helpers::{self, truncate};

/// `-` for an absent score.
fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_string(), |s| format!("{s:.1}"))
}

/// Print one evaluation as a table: attribute totals with their section
/// weight, then every indicator and intangible per attribute.
pub fn print_report(
    report: &ScoreReport,
    answers: &AnswerRecord,
    weights: &BTreeMap<AttributeGroup, f64>,
) {
    let separator = report_helpers::separator(66);

    match answers.place_name() {
        Some(place) => println!("Place Score: {place}"),
        None => println!("Place Score"),
    }
    println!("{separator}");
    println!(
        " Program:       {} ({})",
        report.program,
        report.program.label()
    );
    if let Some(evaluator) = answers.text("nombre_evaluador") {
        println!(" Evaluator:     {evaluator}");
    }
    println!(
        " Global Score:  {:.1} ({})",
        report.global_score, report.level
    );
    println!("{separator}");
    println!(
        " {:<25} {:>6}   {:>5}   {:<13}",
        "Attribute", "Weight", "Score", "Level"
    );
    println!("{separator}");

    for a in &report.attributes {
        println!(
            " {:<25} {:>5.0}%   {:>5.1}   {:<13}",
            a.group.label(),
            weights.get(&a.group).copied().unwrap_or(0.0) * 100.0,
            a.total,
            a.level.as_str(),
        );
    }
    println!("{separator}");

    for a in &report.attributes {
        println!();
        println!(" {} {}", a.group.id(), a.group.label());
        println!("{separator}");
        for i in &a.indicators {
            println!(
                "   {:<6} {:<48} {:>6}",
                i.id.to_string(),
                truncate(i.id.label(), 48),
                format_score(i.score)
            );
        }
        let intangibles: Vec<String> = a
            .intangibles
            .iter()
            .map(|i| format!("{} {:.0}", i.name, i.score))
            .collect();
        println!("   Intangibles: {}", intangibles.join(", "));
    }
    println!("{separator}");
}

#[derive(Serialize)]
struct JsonIndicator {
    id: IndicatorId,
    label: &'static str,
    score: Option<f64>,
}

#[derive(Serialize)]
struct JsonIntangible {
    name: &'static str,
    score: f64,
}

#[derive(Serialize)]
struct JsonAttribute {
    id: AttributeGroup,
    name: &'static str,
    weight: f64,
    total: f64,
    level: PerformanceLevel,
    indicators: Vec<JsonIndicator>,
    intangibles: Vec<JsonIntangible>,
}

#[derive(Serialize)]
struct JsonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluator: Option<String>,
    program: String,
    program_label: &'static str,
    global_score: f64,
    level: PerformanceLevel,
    attributes: Vec<JsonAttribute>,
}

fn json_report(report: &ScoreReport, answers: &AnswerRecord, catalog: &Catalog) -> JsonReport {
    let weights = section_weights(catalog.config(report.program));
    JsonReport {
        place: answers.place_name().map(String::from),
        evaluator: answers.text("nombre_evaluador").map(String::from),
        program: report.program.to_string(),
        program_label: report.program.label(),
        global_score: report.global_score,
        level: report.level,
        attributes: report
            .attributes
            .iter()
            .map(|a| JsonAttribute {
                id: a.group,
                name: a.group.label(),
                weight: weights.get(&a.group).copied().unwrap_or(0.0),
                total: a.total,
                level: a.level,
                indicators: a
                    .indicators
                    .iter()
                    .map(|i| JsonIndicator {
                        id: i.id,
                        label: i.id.label(),
                        score: i.score,
                    })
                    .collect(),
                intangibles: a
                    .intangibles
                    .iter()
                    .map(|i| JsonIntangible {
                        name: i.name,
                        score: i.score,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Print the reports as pretty JSON: one object for a single record, an
/// array otherwise.
pub fn print_json(reports: &[(ScoreReport, &AnswerRecord)], catalog: &Catalog) -> Result<()> {
    let json: Vec<JsonReport> = reports
        .iter()
        .map(|(report, answers)| json_report(report, answers, catalog))
        .collect();
    match json.as_slice() {
        [single] => report_helpers::print_json_stdout(single),
        _ => report_helpers::print_json_stdout(&json),
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
