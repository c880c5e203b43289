use super::*;

fn assert_close(actual: Option<f64>, expected: f64, what: &str) {
    let v = actual.unwrap_or_else(|| panic!("{what}: expected {expected}, got None"));
    assert!((v - expected).abs() < 1e-9, "{what}: expected {expected}, got {v}");
}

#[test]
fn growth_rule() {
    let cases = [
        (Some(0.0), Some(0.0), 0.0),
        (Some(0.0), Some(50.0), 100.0),
        (Some(100.0), Some(150.0), 50.0),
        (Some(100.0), Some(50.0), 0.0),
        (Some(10.0), Some(40.0), 100.0),
        (None, Some(5.0), 100.0),
        (None, None, 0.0),
        (Some(20.0), None, 0.0),
    ];
    for (before, after, expected) in cases {
        let got = growth_score(before, after);
        assert!(
            (got - expected).abs() < 1e-9,
            "before={before:?} after={after:?}: expected {expected}, got {got}"
        );
    }
}

#[test]
fn dynamism_branches() {
    let counted = Dynamism::Counted {
        before: Some(100.0),
        after: Some(150.0),
    };
    assert_close(dynamism(&counted), 50.0, "counted");
    assert_close(dynamism(&Dynamism::Perceived(Some(2))), 50.0, "perceived");
    assert_eq!(dynamism(&Dynamism::Perceived(None)), None);
    assert_eq!(dynamism(&Dynamism::Unanswered), None);
}

#[test]
fn usefulness_blend() {
    // 0.6*75 + 0.4*1
    assert_close(usefulness(Some(2), Some(4)), 45.4, "usefulness");
    assert_eq!(usefulness(Some(2), None), None);
}

#[test]
fn activity_diversity_clamps() {
    assert_close(activity_diversity(Some(4.0)), 40.0, "four");
    assert_close(activity_diversity(Some(25.0)), 100.0, "above range");
    assert_close(activity_diversity(Some(-3.0)), 0.0, "below range");
    assert_eq!(activity_diversity(None), None);
}

#[test]
fn locality_borrows_night_use_and_diversity() {
    // 0.34*100 + 0.33*10 + 0.33*60
    let night = NightUse::NotRegular {
        code: 2,
        perceived: Some(1),
    };
    assert_close(locality(Some(1), &night, Some(60.0)), 57.1, "locality");
    assert_eq!(locality(Some(1), &NightUse::Unanswered, Some(60.0)), None);
    assert_eq!(locality(Some(1), &NightUse::Regular, None), None);
}

#[test]
fn economic_activity_team() {
    let team = TeamEconomy {
        new_businesses: Some(2),
        higher_income: Some(1),
    };
    let peers = UsosPeers {
        dynamism: None,
        landmark: None,
        usefulness: None,
        activity_diversity: None,
        locality: None,
    };
    // 0.4*50 + 0.6*100
    assert_close(economic_activity(Some(&team), &peers), 80.0, "team");
}

#[test]
fn economic_activity_user_mean_of_present_peers() {
    let peers = UsosPeers {
        dynamism: Some(100.0),
        landmark: None,
        usefulness: Some(40.0),
        activity_diversity: None,
        locality: Some(10.0),
    };
    assert_close(economic_activity(None, &peers), 50.0, "mean of three");
    let empty = UsosPeers {
        dynamism: None,
        landmark: None,
        usefulness: None,
        activity_diversity: None,
        locality: None,
    };
    assert_eq!(economic_activity(None, &empty), None);
}

#[test]
fn compute_from_answers() {
    let answers = AnswerRecord::new()
        .with("a41_1", 1)
        .with("a41_before", 0)
        .with("a41_after", 50)
        .with("a42_1", 3)
        .with("a45_1", 5)
        .with("a46_1", 1)
        .with("a15_1", 1)
        .with("a44_1", 1)
        .with("a44_2", 1);
    let scores = UsosScores::compute(&UsosInputs::from_answers(&answers), Some(70.0));
    assert_close(scores.dynamism, 100.0, "A4.1");
    assert_close(scores.landmark, 10.0, "A4.2");
    assert_eq!(scores.usefulness, None);
    assert_close(scores.activity_diversity, 50.0, "A4.5");
    // 0.34*100 + 0.33*100 + 0.33*70
    assert_close(scores.locality, 90.1, "A4.6");
    // user respondent: team answers ignored, mean of 100, 10, 50, 90.1
    assert_close(scores.economic_activity, 62.525, "A4.4");
}
