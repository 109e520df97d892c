use super::domain::{Identity, ResponseSet, StyleCategory};
use super::scoring::ResultSummary;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// en-US style wall clock rendering, e.g. `10/19/2026, 3:04:05 PM`.
pub const RECORD_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Current instant expressed in the offset records are stamped with.
pub fn record_time(offset: &FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(offset)
}

/// Column headings matching [`SubmissionPayload::to_row`].
pub fn record_header(question_count: usize) -> Vec<String> {
    let mut header: Vec<String> = ["Timestamp", "Name", "Company", "Dominant Style"]
        .into_iter()
        .map(str::to_string)
        .collect();
    header.extend(
        StyleCategory::ordered()
            .into_iter()
            .map(|category| category.label().to_string()),
    );
    header.extend((1..=question_count).map(|ordinal| format!("Q{ordinal}")));
    header
}

/// Finalized record forwarded to the persistence sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    timestamp: String,
    name: String,
    company: String,
    dominant_style: String,
    percentages: [String; 4],
    answers: Vec<String>,
}

impl SubmissionPayload {
    pub fn build(
        identity: &Identity,
        responses: &ResponseSet,
        summary: &ResultSummary,
        submitted_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            timestamp: submitted_at.format(RECORD_TIMESTAMP_FORMAT).to_string(),
            name: identity.name.clone(),
            company: identity.company.clone(),
            dominant_style: summary.dominant_label(),
            percentages: StyleCategory::ordered()
                .map(|category| summary.percentage_label(category)),
            answers: responses.letters(),
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn dominant_style(&self) -> &str {
        &self.dominant_style
    }

    pub fn percentage(&self, category: StyleCategory) -> &str {
        &self.percentages[category.index()]
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Persisted column order: timestamp, identity, dominant style(s), the four
    /// percentages, then one letter per question.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(8 + self.answers.len());
        row.push(self.timestamp.clone());
        row.push(self.name.clone());
        row.push(self.company.clone());
        row.push(self.dominant_style.clone());
        row.extend(self.percentages.iter().cloned());
        row.extend(self.answers.iter().cloned());
        row
    }
}
