//! Long help text constants for CLI subcommands.
//!
//! Kept out of `cli.rs` so the argument definitions stay readable.

/// Evaluate answer records and print the score report.
pub const SCORE: &str = "\
Evaluate one or more survey answer records and print the place score.

The answers file holds a JSON object (one evaluation) or an array of them.
Each record maps question keys (a11_1, a21_1_walk, ...) to numbers, numeric
strings or text. Unanswered questions may be omitted.

Every record is scored on 24 indicators grouped in four attributes:
  A1 Encuentro    social encounter and community life
  A2 Conexiones   access and connections
  A3 Comodidad    comfort and image
  A4 Usos         uses and activities

Indicators without enough answers are shown as `-` and skipped in the
attribute total. Attribute totals are weighted by the record's program
(program_id, or --program) and combined into a 0-100 global score.

Performance levels:
  85-100  excelente
  65-84   bueno
  40-64   en desarrollo
  0-39    crítico

Examples:
  placescore score answers.json
  placescore score answers.json --program SHE
  placescore score answers.json --catalog catalog.toml --json";

/// Export rows, one per answer record.
pub const EXPORT: &str = "\
Score answer records and write one CSV row per evaluation.

Columns, in order:
  nombre_lugar, nombre_evaluador, programa, genero_id, equipo_responsable_id,
  A1.1..A1.5, A1_total, A2.1..A2.6, A2_total, A3.1..A3.7, A3_total,
  A4.1..A4.6, A4_total, global_score

Indicators that could not be computed are written as empty cells.

With --append the rows are added after those already in the output file.
An existing file must have the header above; a file that does not parse
as an export is left untouched and reported as an error.

Examples:
  placescore export plaza.json parque.json -o results.csv
  placescore export batch.json --program FIESTA
  placescore export today.json -o results.csv --append";

/// Program catalog listing and overrides.
pub const PROGRAMS: &str = "\
List the intervention programs and the weights each one applies.

Section weights are shown normalized to sum to 100%. Overrides are the
indicator weights that differ from the default of 1.0.

A catalog file (TOML) can change the built-in weights:

  [common_section_weights]
  Encuentro = 0.25

  [programs.FIESTA.indicator_weights.A2]
  \"A2.1\" = 0.7

  [programs.FIESTA.section_weights]
  Usos = 0.5

Programs not mentioned keep their built-in configuration.";
