use style_assessment::assessment::{
    compute_summary, describe, standard_questions, AnswerKey, DescriptionCatalog, ResponseSet,
    StyleCategory,
};

/// Q1-Q5 Driver, Q6-Q10 Analytical, Q11-Q14 Amiable, Q15-Q18 Expressive.
const TIED_LETTERS: &str = "A,B,D,D,A,B,A,B,B,D,A,B,D,C,A,D,D,D";

fn deterministic_response_sets(count: usize) -> Vec<ResponseSet> {
    let mut state: u64 = 0x5eed_1234;
    (0..count)
        .map(|_| {
            ResponseSet::from_choices(
                (0..18)
                    .map(|_| {
                        state = state
                            .wrapping_mul(6364136223846793005)
                            .wrapping_add(1442695040888963407);
                        Some(((state >> 33) % 4) as u8)
                    })
                    .collect(),
            )
        })
        .collect()
}

#[test]
fn tied_leaders_are_both_dominant() {
    let key = AnswerKey::standard();
    let responses = ResponseSet::from_letters(TIED_LETTERS).expect("valid letters");

    let summary = compute_summary(&responses, &key).expect("summary computes");

    assert_eq!(
        summary.dominant(),
        &[StyleCategory::Driver, StyleCategory::Analytical]
    );
    let labels: Vec<String> = StyleCategory::ordered()
        .into_iter()
        .map(|category| summary.percentage_label(category))
        .collect();
    assert_eq!(labels, vec!["27.8%", "27.8%", "22.2%", "22.2%"]);
}

#[test]
fn fully_answered_sets_account_for_every_question() {
    let key = AnswerKey::standard();
    for responses in deterministic_response_sets(64) {
        let summary = compute_summary(&responses, &key).expect("summary computes");
        assert_eq!(summary.tally().total(), standard_questions().len());

        let max = summary.tally().max();
        for category in summary.dominant() {
            assert_eq!(summary.tally().count(*category), max);
        }
        assert!(!summary.dominant().is_empty());
    }
}

#[test]
fn scoring_is_repeatable() {
    let key = AnswerKey::standard();
    for responses in deterministic_response_sets(16) {
        let first = compute_summary(&responses, &key).expect("summary computes");
        let second = compute_summary(&responses, &key).expect("summary computes");
        assert_eq!(first, second);
    }
}

#[test]
fn chart_rows_cover_every_style_in_order() {
    let key = AnswerKey::standard();
    let responses = ResponseSet::from_letters(TIED_LETTERS).expect("valid letters");
    let summary = compute_summary(&responses, &key).expect("summary computes");

    let rows = summary.chart_rows();
    let categories: Vec<StyleCategory> = rows.iter().map(|row| row.category).collect();
    assert_eq!(categories, StyleCategory::ordered().to_vec());
    assert_eq!(rows[2].count, 4);
    assert_eq!(rows[2].percentage_label, "22.2%");
}

#[test]
fn every_dominant_style_has_a_description() {
    let key = AnswerKey::standard();
    let catalog = DescriptionCatalog::standard();
    let summary = compute_summary(&ResponseSet::unanswered(18), &key).expect("summary computes");

    let titles: Vec<&str> = summary
        .dominant()
        .iter()
        .map(|category| describe(*category, &catalog).expect("described").title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "Driver Style",
            "Analytical Style",
            "Amiable Style",
            "Expressive Style"
        ]
    );
}
