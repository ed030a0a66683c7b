use ai_audit::audit::catalog::CATEGORIES;
use ai_audit::audit::{build_payload, evaluate, CategoryScore, MaturityLevel, RawAuditInput};
use std::collections::HashMap;

fn category_scores(values: [u32; 6]) -> Vec<CategoryScore> {
    CATEGORIES
        .iter()
        .zip(values)
        .map(|(category, score)| CategoryScore {
            key: category.key.to_string(),
            label: category.label.to_string(),
            score,
        })
        .collect()
}

fn expected_level(values: [u32; 6]) -> MaturityLevel {
    let average = f64::from(values.iter().sum::<u32>()) / 6.0;
    if average < 3.0 {
        MaturityLevel::Emerging
    } else if average < 4.2 {
        MaturityLevel::Developing
    } else {
        MaturityLevel::Advanced
    }
}

#[test]
fn every_answered_score_combination_lands_in_its_band() {
    let mut seen = HashMap::new();

    for index in 0..5u32.pow(6) {
        let mut values = [0u32; 6];
        let mut rest = index;
        for slot in values.iter_mut() {
            *slot = rest % 5 + 1;
            rest /= 5;
        }

        let result = evaluate(&category_scores(values));
        assert_eq!(result.level, expected_level(values), "scores {values:?}");
        assert_eq!(result.total, u64::from(values.iter().sum::<u32>()));
        assert_eq!(result.guidance.len(), 3);
        *seen.entry(result.level).or_insert(0) += 1;
    }

    assert_eq!(seen.len(), 3, "all three levels are reachable");
}

#[test]
fn boundary_scores_classify_upward() {
    let developing = evaluate(&category_scores([3, 3, 3, 3, 3, 3]));
    assert_eq!(developing.average, 3.0);
    assert_eq!(developing.level, MaturityLevel::Developing);

    let just_below = evaluate(&category_scores([5, 5, 5, 4, 4, 2]));
    assert_eq!(just_below.level, MaturityLevel::Developing);

    let advanced = evaluate(&category_scores([5, 5, 5, 4, 4, 3]));
    assert_eq!(advanced.level, MaturityLevel::Advanced);

    assert_eq!(MaturityLevel::classify(4.2), MaturityLevel::Advanced);
}

#[test]
fn unvalidated_json_scores_are_summed_without_wrapping() {
    let raw: RawAuditInput =
        serde_json::from_str(r#"{ "scores": { "strategy": 4294967295, "governance": 1 } }"#)
            .expect("input parses");

    let result = evaluate(&build_payload(&raw).scores);

    assert_eq!(result.total, 4_294_967_296);
    assert_eq!(result.level, MaturityLevel::Advanced);
}

#[test]
fn unanswered_categories_pull_the_average_down() {
    let raw = RawAuditInput {
        scores: HashMap::from([
            ("strategy".to_string(), 5),
            ("governance".to_string(), 5),
            ("data".to_string(), 5),
            ("technology".to_string(), 5),
            ("skills".to_string(), 5),
        ]),
        ..RawAuditInput::default()
    };

    let payload = build_payload(&raw);
    let result = evaluate(&payload.scores);

    assert_eq!(payload.scores.len(), 6);
    assert_eq!(result.total, 25);
    assert_eq!(result.average, 4.17);
    assert_eq!(result.level, MaturityLevel::Developing);
}
