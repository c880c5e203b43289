use super::*;

fn assert_close(actual: Option<f64>, expected: f64, what: &str) {
    let v = actual.unwrap_or_else(|| panic!("{what}: expected {expected}, got None"));
    assert!((v - expected).abs() < 1e-9, "{what}: expected {expected}, got {v}");
}

#[test]
fn diversity_blend_favors_larger_observed() {
    assert_close(diversity(Some(80.0), Some(60.0)), 77.0, "a=80 b=60");
}

#[test]
fn diversity_blend_when_reported_is_larger() {
    assert_close(diversity(Some(40.0), Some(90.0)), 60.0, "a=40 b=90");
}

#[test]
fn diversity_fallbacks() {
    assert_eq!(diversity(None, Some(5.0)), None);
    assert_close(diversity(Some(35.0), None), 35.0, "b absent");
    assert_close(diversity(Some(5.0), Some(5.0)), 5.0, "a == b uses 0.85/0.15");
}

#[test]
fn citizen_networks_with_groups() {
    let groups = OrganizedGroups::Present {
        groups: 3,
        care: Some(2),
        physical_condition: Some(1),
    };
    // 0.75*100 + 0.10*50 + 0.15*100
    assert_close(citizen_networks(&groups, Some(1)), 95.0, "three+ groups");
}

#[test]
fn citizen_networks_without_groups_uses_condition() {
    let groups = OrganizedGroups::Absent {
        physical_condition: Some(2),
    };
    // 0.75*10 + 0.10*75 + 0.15*5
    assert_close(citizen_networks(&groups, Some(3)), 15.75, "no groups");
}

#[test]
fn citizen_networks_absent_when_any_part_missing() {
    let groups = OrganizedGroups::Present {
        groups: 2,
        care: None,
        physical_condition: Some(1),
    };
    assert_eq!(citizen_networks(&groups, Some(1)), None);
    assert_eq!(citizen_networks(&OrganizedGroups::Unanswered, Some(1)), None);
}

#[test]
fn volunteering_branches() {
    let present = OrganizedGroups::Present {
        groups: 2,
        care: Some(1),
        physical_condition: Some(2),
    };
    let absent = OrganizedGroups::Absent {
        physical_condition: Some(1),
    };
    assert_close(volunteering(&present), 75.0, "groups present");
    assert_close(volunteering(&absent), 70.0, "penalized proxy");
    assert_eq!(volunteering(&OrganizedGroups::Unanswered), None);
}

#[test]
fn place_upkeep_blend() {
    assert_close(place_upkeep(Some(70.0), Some(3)), 60.0, "0.5*70 + 0.5*50");
    assert_eq!(place_upkeep(None, Some(1)), None);
    assert_eq!(place_upkeep(Some(70.0), Some(9)), None);
}

#[test]
fn night_use_regular_ignores_followups() {
    assert_close(night_use(&NightUse::Regular, None), 100.0, "regular");
}

#[test]
fn night_use_not_regular_is_clamped() {
    let night = NightUse::NotRegular {
        code: 2,
        perceived: Some(1),
    };
    assert_close(night_use(&night, Some(1)), 100.0, "0.5*100 + 100 clamped");
    assert_close(night_use(&night, Some(2)), 51.0, "0.5*100 + 1");
}

#[test]
fn night_use_absent_cases() {
    let night = NightUse::NotRegular {
        code: 3,
        perceived: None,
    };
    assert_eq!(night_use(&night, Some(1)), None);
    assert_eq!(night_use(&NightUse::Unanswered, Some(1)), None);
}

#[test]
fn compute_from_answers() {
    let answers = AnswerRecord::new()
        .with("a11_1", 80)
        .with("a11_2", 6)
        .with("a12_1", 1)
        .with("a12_2_2", 2)
        .with("a12_3", 3)
        .with("a14_1", 2)
        .with("a15_1", 1);
    let scores = EncuentroScores::compute(&EncuentroInputs::from_answers(&answers));
    assert_close(scores.diversity, 68.9, "A1.1");
    assert_close(scores.citizen_networks, 15.75, "A1.2");
    assert_close(scores.volunteering, 52.5, "A1.3");
    assert_close(scores.place_upkeep, 63.75, "A1.4");
    assert_close(scores.night_use, 100.0, "A1.5");
    assert_eq!(scores.scores().len(), 5);
}

#[test]
fn not_applicable_diversity_reads_absent() {
    let answers = AnswerRecord::new().with("a11_1", 80).with("a11_1_na", true);
    let inputs = EncuentroInputs::from_answers(&answers);
    assert_eq!(EncuentroScores::compute(&inputs).diversity, None);
}
