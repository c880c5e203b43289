use super::*;

#[test]
fn blend_all_present() {
    let v = blend(&[(Some(100.0), 0.5), (Some(50.0), 0.5)]).unwrap();
    assert!((v - 75.0).abs() < 1e-9, "expected 75.0, got {v}");
}

#[test]
fn blend_any_absent_is_absent() {
    assert_eq!(blend(&[(Some(100.0), 0.5), (None, 0.5)]), None);
}

#[test]
fn indicator_scores_in_id_order() {
    let scores = indicator_scores(AttributeGroup::Conexiones, &[Some(1.0), None, Some(3.0), None, None, Some(6.0)]);
    assert_eq!(scores.len(), 6);
    assert_eq!(scores[2].id.to_string(), "A2.3");
    assert_eq!(scores[2].score, Some(3.0));
    assert_eq!(scores[1].score, None);
}
