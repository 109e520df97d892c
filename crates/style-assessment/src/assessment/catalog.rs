use super::domain::StyleCategory;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no description registered for the {0} style")]
    NotFound(StyleCategory),
}

/// Static narrative shown for a style on the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDescription {
    pub title: &'static str,
    pub keywords: &'static [&'static str],
    pub behaviors: &'static [&'static str],
    pub interaction_tips: &'static [&'static str],
}

#[derive(Debug, Clone, Default)]
pub struct DescriptionCatalog {
    entries: BTreeMap<StyleCategory, CategoryDescription>,
}

impl DescriptionCatalog {
    pub fn from_entries(
        entries: impl IntoIterator<Item = (StyleCategory, CategoryDescription)>,
    ) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn standard() -> Self {
        Self::from_entries([
            (StyleCategory::Analytical, ANALYTICAL),
            (StyleCategory::Driver, DRIVER),
            (StyleCategory::Amiable, AMIABLE),
            (StyleCategory::Expressive, EXPRESSIVE),
        ])
    }

    pub fn describe(&self, category: StyleCategory) -> Result<&CategoryDescription, CatalogError> {
        self.entries
            .get(&category)
            .ok_or(CatalogError::NotFound(category))
    }
}

/// Looks up the narrative for `category`; a miss means the catalog is incomplete.
pub fn describe(
    category: StyleCategory,
    catalog: &DescriptionCatalog,
) -> Result<&CategoryDescription, CatalogError> {
    catalog.describe(category)
}

const ANALYTICAL: CategoryDescription = CategoryDescription {
    title: "Analytical Style",
    keywords: &[
        "Serious",
        "Well-organized",
        "Systematic",
        "Logical",
        "Factual",
        "Reserved",
    ],
    behaviors: &[
        "Show little facial expression",
        "Have controlled body movement with slow gestures",
        "Have little inflection in their voice and may tend toward monotone",
        "Use language that is precise and focuses on specific details",
        "Often have charts, graphs and statistics displayed in their office",
    ],
    interaction_tips: &[
        "Do not speak in a loud or fast-paced voice",
        "Be more formal in your speech and manners",
        "Present the pros and cons of an idea, as well as options",
        "Do not overstate the benefits of something",
        "Follow up in writing",
        "Be on time and keep it brief",
        "Show how your tool has minimum risk",
    ],
};

const DRIVER: CategoryDescription = CategoryDescription {
    title: "Driver Style",
    keywords: &[
        "Decisive",
        "Independent",
        "Efficient",
        "Intense",
        "Deliberate",
        "Achieving",
    ],
    behaviors: &[
        "Make direct eye contact",
        "Move quickly and briskly with purpose",
        "Speak forcefully and fast-paced",
        "Use direct, bottom-line language",
        "Have planning calendars and project outlines displayed in their office",
    ],
    interaction_tips: &[
        "Make direct eye contact",
        "Speak at a fast pace",
        "Get down to business quickly",
        "Arrive on time",
        "Do not linger",
        "Use ABC",
        "Avoid over explanation",
        "Be organized and well prepared",
        "Focus on the results to be produced",
    ],
};

const AMIABLE: CategoryDescription = CategoryDescription {
    title: "Amiable Style",
    keywords: &[
        "Cooperative",
        "Friendly",
        "Supportive",
        "Patient",
        "Relaxed",
    ],
    behaviors: &[
        "Have a friendly facial expression",
        "Make frequent eye contact",
        "Use non-aggressive, non-dramatic gestures",
        "Speak slowly and in soft tones with moderate inflection",
        "Use language that is supportive and encouraging",
        "Display lots of family pictures in their office",
    ],
    interaction_tips: &[
        "Make eye contact but look away once in a while",
        "Speak at a moderate pace and with a softer voice",
        "Do not use harsh tone of voice or language",
        "Ask them for their opinions and ideas",
        "Do not try to counter their ideas with logic alone",
        "Encourage them to express any doubts or concerns they may have",
        "Avoid pressurizing them to make a decision",
        "Mutually agree on all goals, action plans and completion dates",
    ],
};

const EXPRESSIVE: CategoryDescription = CategoryDescription {
    title: "Expressive Style",
    keywords: &[
        "Outgoing",
        "Enthusiastic",
        "Persuasive",
        "Humorous",
        "Gregarious",
        "Lively",
    ],
    behaviors: &[
        "Use rapid hand and arm gestures",
        "Speak quickly with lots of animation and inflection",
        "Have a wide range of facial expressions",
        "Use language that is persuasive",
        "Have a workspace cluttered with inspirational items",
    ],
    interaction_tips: &[
        "Make direct eye contact",
        "Have energetic and fast-paced speech",
        "Allow time in a meeting for socializing",
        "Talk about experiences, people, and opinions as well as the facts",
        "Ask about their intuitive sense of things",
        "Support your ideas with testimonials from people whom they know and like",
        "Paraphrase any agreements made",
        "Maintain a balance between fun and reaching objectives",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_describes_every_style() {
        let catalog = DescriptionCatalog::standard();
        for category in StyleCategory::ordered() {
            let description = describe(category, &catalog).expect("style described");
            assert!(description.title.starts_with(category.label()));
            assert!(!description.keywords.is_empty());
            assert!(!description.interaction_tips.is_empty());
        }
    }

    #[test]
    fn incomplete_catalog_reports_not_found() {
        let catalog = DescriptionCatalog::from_entries([(StyleCategory::Driver, DRIVER)]);
        assert_eq!(
            describe(StyleCategory::Amiable, &catalog),
            Err(CatalogError::NotFound(StyleCategory::Amiable))
        );
    }
}
