use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of selectable choices on every question.
pub const CHOICES_PER_QUESTION: usize = 4;

/// Zero-based index of a selected choice (`0..CHOICES_PER_QUESTION`).
pub type ChoiceIndex = u8;

/// Behavioral style a single answer choice contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StyleCategory {
    Driver,
    Analytical,
    Amiable,
    Expressive,
}

impl StyleCategory {
    /// Canonical ordering used for tallies, percentages, and persisted columns.
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Driver,
            Self::Analytical,
            Self::Amiable,
            Self::Expressive,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Driver => "Driver",
            Self::Analytical => "Analytical",
            Self::Amiable => "Amiable",
            Self::Expressive => "Expressive",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Driver => 0,
            Self::Analytical => 1,
            Self::Amiable => 2,
            Self::Expressive => 3,
        }
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style category '{0}'")]
pub struct StyleParseError(pub String);

impl FromStr for StyleCategory {
    type Err = StyleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| StyleParseError(trimmed.to_string()))
    }
}

/// One prompt of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// 1-based position within the questionnaire.
    pub ordinal: usize,
    pub text: &'static str,
    pub choices: [&'static str; CHOICES_PER_QUESTION],
}

/// Respondent identity captured on the welcome screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub company: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
        }
    }

    /// Both fields must carry something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.company.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseParseError {
    #[error("answer {position} ('{value}') must be one of A, B, C, D or left blank")]
    InvalidLetter { position: usize, value: String },
}

/// Ordered per-question selections; `None` marks an unanswered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(Vec<Option<ChoiceIndex>>);

impl ResponseSet {
    /// All questions start out unanswered.
    pub fn unanswered(question_count: usize) -> Self {
        Self(vec![None; question_count])
    }

    pub fn from_choices(choices: Vec<Option<ChoiceIndex>>) -> Self {
        Self(choices)
    }

    /// Parses a comma separated letter string such as `"A,B,,D"`.
    pub fn from_letters(raw: &str) -> Result<Self, ResponseParseError> {
        raw.split(',')
            .enumerate()
            .map(|(idx, value)| match value.trim().to_ascii_uppercase().as_str() {
                "" => Ok(None),
                "A" => Ok(Some(0)),
                "B" => Ok(Some(1)),
                "C" => Ok(Some(2)),
                "D" => Ok(Some(3)),
                _ => Err(ResponseParseError::InvalidLetter {
                    position: idx + 1,
                    value: value.trim().to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ChoiceIndex> {
        self.0.get(index).copied().flatten()
    }

    /// Records a selection; returns `false` when `index` is past the end.
    pub fn set(&mut self, index: usize, choice: Option<ChoiceIndex>) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = choice;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<ChoiceIndex>> + '_ {
        self.0.iter().copied()
    }

    pub fn answered_count(&self) -> usize {
        self.0.iter().filter(|choice| choice.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// 1-based ordinals of questions still lacking a selection.
    pub fn missing_ordinals(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, choice)| choice.is_none())
            .map(|(idx, _)| idx + 1)
            .collect()
    }

    /// Letter encoding used in persisted records: `A`..`D`, empty when unanswered.
    pub fn letters(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|choice| {
                choice
                    .and_then(|index| b'A'.checked_add(index))
                    .map(|code| char::from(code).to_string())
                    .unwrap_or_default()
            })
            .collect()
    }
}
