use super::domain::{ChoiceIndex, StyleCategory, CHOICES_PER_QUESTION};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerKeyError {
    #[error("answer key has no entry for question {question}, choice {choice}")]
    MissingEntry { question: usize, choice: ChoiceIndex },
}

/// Static table mapping each (question, choice) pair to the style it signals.
///
/// Rows are fixed-width arrays, so every question the key covers has exactly
/// one category per choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKey {
    rows: Vec<[StyleCategory; CHOICES_PER_QUESTION]>,
}

impl AnswerKey {
    pub fn from_rows(rows: Vec<[StyleCategory; CHOICES_PER_QUESTION]>) -> Self {
        Self { rows }
    }

    /// Key for the standard 18 question instrument.
    pub fn standard() -> Self {
        use StyleCategory::{Amiable, Analytical, Driver, Expressive};

        Self::from_rows(vec![
            [Driver, Amiable, Analytical, Expressive],
            [Analytical, Driver, Amiable, Expressive],
            [Amiable, Expressive, Analytical, Driver],
            [Expressive, Amiable, Analytical, Driver],
            [Driver, Expressive, Amiable, Analytical],
            [Amiable, Analytical, Expressive, Driver],
            [Analytical, Driver, Expressive, Amiable],
            [Expressive, Analytical, Amiable, Driver],
            [Amiable, Analytical, Driver, Expressive],
            [Driver, Amiable, Expressive, Analytical],
            [Amiable, Driver, Expressive, Analytical],
            [Analytical, Amiable, Driver, Expressive],
            [Analytical, Expressive, Driver, Amiable],
            [Analytical, Expressive, Amiable, Driver],
            [Expressive, Amiable, Analytical, Driver],
            [Analytical, Driver, Amiable, Expressive],
            [Driver, Amiable, Analytical, Expressive],
            [Amiable, Analytical, Driver, Expressive],
        ])
    }

    pub fn question_count(&self) -> usize {
        self.rows.len()
    }

    /// Looks up the style for a 1-based question ordinal and zero-based choice.
    pub fn lookup(
        &self,
        question: usize,
        choice: ChoiceIndex,
    ) -> Result<StyleCategory, AnswerKeyError> {
        question
            .checked_sub(1)
            .and_then(|row| self.rows.get(row))
            .and_then(|row| row.get(usize::from(choice)))
            .copied()
            .ok_or(AnswerKeyError::MissingEntry { question, choice })
    }

    /// True when every question in `questions` has a row in the key.
    #[cfg(test)]
    pub(crate) fn covers(&self, questions: &[super::domain::Question]) -> bool {
        questions
            .iter()
            .all(|question| question.ordinal >= 1 && question.ordinal <= self.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::questions::standard_questions;

    #[test]
    fn standard_key_covers_standard_questions() {
        let key = AnswerKey::standard();
        assert_eq!(key.question_count(), standard_questions().len());
        assert!(key.covers(standard_questions()));
    }

    #[test]
    fn every_row_uses_each_style_once() {
        let key = AnswerKey::standard();
        for question in 1..=key.question_count() {
            let mut styles: Vec<StyleCategory> = (0..CHOICES_PER_QUESTION as ChoiceIndex)
                .map(|choice| key.lookup(question, choice).expect("entry present"))
                .collect();
            styles.sort();
            assert_eq!(styles, StyleCategory::ordered().to_vec(), "question {question}");
        }
    }

    #[test]
    fn lookup_reports_missing_entries() {
        let key = AnswerKey::standard();
        assert_eq!(key.lookup(1, 0), Ok(StyleCategory::Driver));
        assert_eq!(key.lookup(18, 3), Ok(StyleCategory::Expressive));
        assert_eq!(
            key.lookup(0, 0),
            Err(AnswerKeyError::MissingEntry {
                question: 0,
                choice: 0
            })
        );
        assert_eq!(
            key.lookup(19, 1),
            Err(AnswerKeyError::MissingEntry {
                question: 19,
                choice: 1
            })
        );
        assert!(key.lookup(4, 4).is_err());
    }
}
