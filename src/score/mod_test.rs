use super::*;
use crate::program::{ProgramConfig, common_section_weights};
use analyzer::{IndicatorId, PerformanceLevel};

fn full_answers() -> AnswerRecord {
    AnswerRecord::new()
        .with("program_id", "fiesta")
        .with("A0_3", 2)
        .with("a11_1", 80)
        .with("a11_2", 6)
        .with("a12_1", 3)
        .with("a12_2_1", 1)
        .with("a13_1", 1)
        .with("a12_3", 1)
        .with("a14_1", 1)
        .with("a15_1", 1)
        .with("a21_use_percent", 1)
        .with("a21_1_walk", 60)
        .with("a21_1_car", 40)
        .with("a22_1", 1)
        .with("a22_2", 3)
        .with("a22_3", 1)
        .with("a23_1", 1)
        .with("a24_1", 100)
        .with("a24_2", 10)
        .with("a25_1", 1)
        .with("a25_2", 10)
        .with("a25_3", 1)
        .with("a26_1_p", 1)
        .with("a31_1", 100)
        .with("a33_1", 1)
        .with("a33_2", 1)
        .with("a34_1", 1)
        .with("a35_1", 1)
        .with("a37_1", 1)
        .with("a41_1", 2)
        .with("a41_2", 1)
        .with("a42_1", 1)
        .with("a43_1", 1)
        .with("a43_2", 1)
        .with("a45_1", 10)
        .with("a46_1", 1)
}

fn id(s: &str) -> IndicatorId {
    s.parse().unwrap()
}

#[test]
fn program_for_prefers_explicit() {
    let answers = full_answers();
    assert_eq!(program_for(&answers, None), Program::Fiesta);
    assert_eq!(program_for(&answers, Some(Program::She)), Program::She);
    assert_eq!(program_for(&AnswerRecord::new(), None), Program::Otro);
}

#[test]
fn evaluate_best_answers() {
    let answers = full_answers();
    let report = evaluate(Program::Fiesta, &answers, &Catalog::builtin());

    let a1_1 = report.indicator(id("A1.1")).unwrap();
    assert!((a1_1 - 68.9).abs() < 1e-9, "A1.1 {a1_1}");
    // A1.2 = 0.75*100 + 0.10*100 + 0.15*100
    let a1_2 = report.indicator(id("A1.2")).unwrap();
    assert!((a1_2 - 100.0).abs() < 1e-9, "A1.2 {a1_2}");
    assert_eq!(report.indicator(id("A2.1")), Some(100.0));
    // A3.6 is team only
    assert_eq!(report.indicator(id("A3.6")), None);
    // A4.4 falls back to the mean of the other A4 indicators
    let a4_6 = report.indicator(id("A4.6")).unwrap();
    let expected_a4_4 = (100.0 + 100.0 + 100.0 + 100.0 + a4_6) / 5.0;
    let a4_4 = report.indicator(id("A4.4")).unwrap();
    assert!((a4_4 - expected_a4_4).abs() < 1e-9, "A4.4 {a4_4}");

    assert!(report.global_score > 85.0, "global {}", report.global_score);
    assert_eq!(report.level, PerformanceLevel::Excellent);
    for a in &report.attributes {
        assert!((0.0..=100.0).contains(&a.total), "{} {}", a.group, a.total);
    }
}

#[test]
fn evaluate_empty_record_degrades_to_zero() {
    let report = evaluate(Program::Otro, &AnswerRecord::new(), &Catalog::builtin());
    assert_eq!(report.attributes.len(), 4);
    for a in &report.attributes {
        assert_eq!(a.total, 0.0, "{}", a.group);
        assert!(a.intangibles.iter().all(|i| i.score == 0.0));
    }
    // A2.6 without an answer is absent, A4.1 unanswered is absent
    assert_eq!(report.indicator(id("A2.6")), None);
    assert_eq!(report.indicator(id("A4.1")), None);
    assert_eq!(report.global_score, 0.0);
    assert_eq!(report.level, PerformanceLevel::Critical);
}

#[test]
fn evaluate_out_of_domain_values_read_absent() {
    let answers = AnswerRecord::new()
        .with("a12_1", 9)
        .with("a23_1", "often")
        .with("a31_1", 250)
        .with("a14_1", 1)
        .with("a42_1", 2.5);
    let report = evaluate(Program::Otro, &answers, &Catalog::builtin());
    assert_eq!(report.indicator(id("A1.2")), None);
    assert_eq!(report.indicator(id("A2.3")), None);
    assert_eq!(report.indicator(id("A3.1")), None);
    assert_eq!(report.indicator(id("A4.2")), None);
}

#[test]
fn evaluate_does_not_mutate_input() {
    let answers = full_answers();
    let before = answers.clone();
    let _ = evaluate(Program::She, &answers, &Catalog::builtin());
    assert_eq!(answers, before);
}

#[test]
fn program_weights_change_totals() {
    let answers = AnswerRecord::new()
        .with("a11_1", 100)
        .with("a12_1", 1)
        .with("a12_2_2", 4)
        .with("a12_3", 2);
    let catalog = Catalog::builtin();
    let otro = evaluate(Program::Otro, &answers, &catalog);
    let she = evaluate(Program::She, &answers, &catalog);
    // OTRO: mean of A1.1=100, A1.2, A1.3, A1.4 (A1.5 absent); SHE zeroes A1.1 and A1.2
    assert!(otro.total(AttributeGroup::Encuentro) > she.total(AttributeGroup::Encuentro));
    let a1_3 = she.indicator(id("A1.3")).unwrap();
    let a1_4 = she.indicator(id("A1.4")).unwrap();
    let she_total = she.total(AttributeGroup::Encuentro).unwrap();
    assert!((she_total - (a1_3 + a1_4) / 2.0).abs() < 1e-9, "SHE A1 total {she_total}");
}

#[test]
fn override_isolation() {
    let answers = full_answers();
    let builtin = Catalog::builtin();
    let changed = Catalog::builtin().with_override(
        Program::Fiesta,
        ProgramConfig::new(&[(id("A1.1"), 0.0), (id("A3.3"), 7.0)], common_section_weights()),
    );
    let before = evaluate(Program::Otro, &answers, &builtin);
    let after = evaluate(Program::Otro, &answers, &changed);
    assert_eq!(before, after);
}

#[test]
fn read_answers_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.json");
    std::fs::write(&path, r#"[{"a12_1": 2}, {"a12_1": 1}]"#).unwrap();
    let records = read_answers(&path).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn read_answers_rejects_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.json");
    std::fs::write(&path, "[]").unwrap();
    let err = read_answers(&path).unwrap_err();
    assert!(err.to_string().contains("no answer records"), "{err}");
}

#[test]
fn run_table_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.json");
    std::fs::write(&path, r#"{"program_id": "SHE", "a34_1": 1}"#).unwrap();
    assert!(run(&path, None, None, false).is_ok());
    assert!(run(&path, Some(Program::Otro), None, true).is_ok());
}

#[test]
fn run_missing_file_errors() {
    let err = run(Path::new("/nonexistent/answers.json"), None, None, false).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "{err}");
}
