//! Flat export of score reports, one CSV row per evaluation.
//!
//! Columns follow [`CANONICAL_COLUMNS`]. Absent values are empty cells.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::answers::AnswerRecord;
use crate::answers::gates::Respondent;
use crate::error::{Error, Result};
use crate::program::{Catalog, Program};
use crate::score::analyzer::{AttributeGroup, IndicatorId, ScoreReport};
use crate::score::{evaluate, program_for, read_answers};

pub const CANONICAL_COLUMNS: [&str; 34] = [
    "nombre_lugar",
    "nombre_evaluador",
    "programa",
    "genero_id",
    "equipo_responsable_id",
    "A1.1",
    "A1.2",
    "A1.3",
    "A1.4",
    "A1.5",
    "A1_total",
    "A2.1",
    "A2.2",
    "A2.3",
    "A2.4",
    "A2.5",
    "A2.6",
    "A2_total",
    "A3.1",
    "A3.2",
    "A3.3",
    "A3.4",
    "A3.5",
    "A3.6",
    "A3.7",
    "A3_total",
    "A4.1",
    "A4.2",
    "A4.3",
    "A4.4",
    "A4.5",
    "A4.6",
    "A4_total",
    "global_score",
];

const METADATA_COLUMNS: usize = 5;

/// One exported evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportRow {
    pub place: Option<String>,
    pub evaluator: Option<String>,
    pub program: Option<String>,
    pub gender: Option<i64>,
    pub responsible_team: Option<i64>,
    pub indicators: BTreeMap<IndicatorId, Option<f64>>,
    pub totals: BTreeMap<AttributeGroup, Option<f64>>,
    pub global_score: Option<f64>,
}

impl ExportRow {
    pub fn from_report(report: &ScoreReport, answers: &AnswerRecord) -> Self {
        let mut indicators = BTreeMap::new();
        let mut totals = BTreeMap::new();
        for group in AttributeGroup::ALL {
            indicators.extend(group.indicators().map(|id| (id, report.indicator(id))));
            totals.insert(group, report.total(group));
        }
        Self {
            place: answers.place_name().map(String::from),
            evaluator: answers.text("nombre_evaluador").map(String::from),
            program: Some(report.program.id().to_string()),
            gender: answers.code("A0_1"),
            responsible_team: Some(Respondent::from_answers(answers).code()),
            indicators,
            totals,
            global_score: Some(report.global_score),
        }
    }

    pub fn indicator(&self, id: IndicatorId) -> Option<f64> {
        self.indicators.get(&id).copied().flatten()
    }

    pub fn total(&self, group: AttributeGroup) -> Option<f64> {
        self.totals.get(&group).copied().flatten()
    }

    fn cells(&self) -> Vec<String> {
        let number = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
        let mut cells = vec![
            self.place.clone().unwrap_or_default(),
            self.evaluator.clone().unwrap_or_default(),
            self.program.clone().unwrap_or_default(),
            self.gender.map(|v| v.to_string()).unwrap_or_default(),
            self.responsible_team.map(|v| v.to_string()).unwrap_or_default(),
        ];
        for group in AttributeGroup::ALL {
            cells.extend(group.indicators().map(|id| number(self.indicator(id))));
            cells.push(number(self.total(group)));
        }
        cells.push(number(self.global_score));
        cells
    }
}

pub fn write_rows<W: Write>(writer: W, rows: &[ExportRow]) -> Result<()> {
    write_records(writer, rows, true)
}

fn write_records<W: Write>(writer: W, rows: &[ExportRow], header: bool) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if header {
        csv_writer.write_record(CANONICAL_COLUMNS)?;
    }
    for row in rows {
        csv_writer.write_record(row.cells())?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

fn optional(cell: &str) -> Option<String> {
    (!cell.is_empty()).then(|| cell.to_string())
}

fn parse_cell<T: std::str::FromStr>(cell: &str, line: usize, column: &str) -> Result<Option<T>> {
    if cell.is_empty() {
        return Ok(None);
    }
    cell.parse().map(Some).map_err(|_| {
        Error::InvalidExport(format!("line {line}, column {column}: '{cell}' is not a number"))
    })
}

/// Parse rows written by [`write_rows`].
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<ExportRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if !headers.iter().eq(CANONICAL_COLUMNS) {
        return Err(Error::InvalidExport(
            "header does not match the canonical column list".to_string(),
        ));
    }

    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = index + 2;
        let cell = |i: usize| record.get(i).unwrap_or("");

        let mut row = ExportRow {
            place: optional(cell(0)),
            evaluator: optional(cell(1)),
            program: optional(cell(2)),
            gender: parse_cell(cell(3), line, CANONICAL_COLUMNS[3])?,
            responsible_team: parse_cell(cell(4), line, CANONICAL_COLUMNS[4])?,
            ..ExportRow::default()
        };

        let mut column = METADATA_COLUMNS;
        for group in AttributeGroup::ALL {
            for id in group.indicators() {
                let value = parse_cell(cell(column), line, CANONICAL_COLUMNS[column])?;
                row.indicators.insert(id, value);
                column += 1;
            }
            let total = parse_cell(cell(column), line, CANONICAL_COLUMNS[column])?;
            row.totals.insert(group, total);
            column += 1;
        }
        row.global_score = parse_cell(cell(column), line, CANONICAL_COLUMNS[column])?;
        rows.push(row);
    }
    Ok(rows)
}

/// Append rows to the export at `path`, creating it when missing.
///
/// An existing non-empty file must be a readable export; it is never
/// rewritten, new rows go after the last one. Returns how many rows the
/// file held before.
pub fn append_rows(path: &Path, rows: &[ExportRow]) -> Result<usize> {
    let existing = match File::open(path) {
        Ok(file) => {
            let len = file.metadata().map_err(|e| Error::io(path, e))?.len();
            if len == 0 {
                None
            } else {
                Some(read_rows(file)?.len())
            }
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(Error::io(path, e)),
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    write_records(file, rows, existing.is_none())?;
    Ok(existing.unwrap_or(0))
}

/// Score every record of every file and write one CSV row each, to
/// `output` or stdout. With `append`, rows are added to `output` instead
/// of replacing it.
pub fn run(
    paths: &[PathBuf],
    program: Option<Program>,
    catalog_path: Option<&Path>,
    output: Option<&Path>,
    append: bool,
) -> Result<()> {
    let catalog = Catalog::load_or_builtin(catalog_path)?;

    let mut rows = Vec::new();
    for path in paths {
        for answers in read_answers(path)? {
            let program = program_for(&answers, program);
            let report = evaluate(program, &answers, &catalog);
            rows.push(ExportRow::from_report(&report, &answers));
        }
    }

    match output {
        Some(path) if append => {
            let before = append_rows(path, &rows)?;
            debug!(before, rows = rows.len(), path = %path.display(), "appended to export");
        }
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::io(path, e))?;
            write_rows(file, &rows)?;
            debug!(rows = rows.len(), path = %path.display(), "wrote export");
        }
        None => write_rows(io::stdout().lock(), &rows)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
