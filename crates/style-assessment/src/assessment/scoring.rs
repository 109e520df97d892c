use super::answer_key::{AnswerKey, AnswerKeyError};
use super::domain::{ChoiceIndex, ResponseSet, StyleCategory, CHOICES_PER_QUESTION};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Separator used whenever several dominant styles are shown or persisted.
pub const DOMINANT_DELIMITER: &str = " & ";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("expected {expected} responses, received {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("question {question} has choice {choice}, valid choices are 0-3")]
    ChoiceOutOfRange { question: usize, choice: ChoiceIndex },
    #[error(transparent)]
    AnswerKey(#[from] AnswerKeyError),
}

/// Per-style answer counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    counts: [usize; 4],
}

impl ScoreTally {
    pub fn count(&self, category: StyleCategory) -> usize {
        self.counts[category.index()]
    }

    pub(crate) fn increment(&mut self, category: StyleCategory) {
        self.counts[category.index()] += 1;
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or_default()
    }

    /// Counts in canonical style order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleCategory, usize)> + '_ {
        StyleCategory::ordered()
            .into_iter()
            .map(|category| (category, self.count(category)))
    }
}

impl Serialize for ScoreTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (category, count) in self.iter() {
            map.serialize_entry(category.label(), &count)?;
        }
        map.end()
    }
}

/// One bar of the results chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub category: StyleCategory,
    pub count: usize,
    pub percentage: f64,
    pub percentage_label: String,
}

/// Scored outcome of a response set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    tally: ScoreTally,
    dominant: Vec<StyleCategory>,
    total_questions: usize,
}

impl ResultSummary {
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// Every style sharing the highest count, in canonical order.
    pub fn dominant(&self) -> &[StyleCategory] {
        &self.dominant
    }

    pub fn dominant_label(&self) -> String {
        self.dominant
            .iter()
            .map(|category| category.label())
            .collect::<Vec<_>>()
            .join(DOMINANT_DELIMITER)
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    /// Share of all questions (answered or not) that selected `category`.
    pub fn percentage(&self, category: StyleCategory) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.tally.count(category) as f64 / self.total_questions as f64 * 100.0
    }

    pub fn percentage_label(&self, category: StyleCategory) -> String {
        format!("{:.1}%", self.percentage(category))
    }

    pub fn chart_rows(&self) -> Vec<ChartRow> {
        self.tally
            .iter()
            .map(|(category, count)| ChartRow {
                category,
                count,
                percentage: self.percentage(category),
                percentage_label: self.percentage_label(category),
            })
            .collect()
    }
}

/// Tallies `responses` against `key` and derives the dominant style set.
///
/// Unanswered questions contribute to no style but still count toward the
/// percentage denominator. Ties are never broken: all styles at the maximum
/// are dominant, including the all-zero case.
pub fn compute_summary(
    responses: &ResponseSet,
    key: &AnswerKey,
) -> Result<ResultSummary, ScoringError> {
    let expected = key.question_count();
    if responses.len() != expected {
        return Err(ScoringError::LengthMismatch {
            expected,
            actual: responses.len(),
        });
    }

    let mut tally = ScoreTally::default();
    for (idx, response) in responses.iter().enumerate() {
        let question = idx + 1;
        let Some(choice) = response else {
            continue;
        };
        if usize::from(choice) >= CHOICES_PER_QUESTION {
            return Err(ScoringError::ChoiceOutOfRange { question, choice });
        }
        tally.increment(key.lookup(question, choice)?);
    }

    let max_count = tally.max();
    let dominant = tally
        .iter()
        .filter(|(_, count)| *count == max_count)
        .map(|(category, _)| category)
        .collect();

    Ok(ResultSummary {
        tally,
        dominant,
        total_questions: expected,
    })
}
