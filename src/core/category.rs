use crate::errors::InvalidCategory;
use std::fmt;

/// The two fixed columns categories are grouped into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryGroup {
    Ontopic,
    OffTopic,
}

impl CategoryGroup {
    pub const ALL: [CategoryGroup; 2] = [CategoryGroup::Ontopic, CategoryGroup::OffTopic];

    /// Column heading shown above the group's buttons
    pub fn title(&self) -> &'static str {
        match self {
            CategoryGroup::Ontopic => "Ontopic",
            CategoryGroup::OffTopic => "Off Topic",
        }
    }

    /// Categories in this group, in display order
    pub fn categories(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| c.group() == self)
    }
}

/// One of the ten labels a response can be tallied under.
///
/// The set is closed: every operation on the tally takes a `Category`, so an
/// unknown label can only appear when decoding text (see [`Category::from_label`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    OntopicGeneral,
    OntopicCultural,
    OntopicProfane,
    OntopicHateSpeech,
    OntopicOmcaFeedback,
    OffTopicGeneral,
    OffTopicCultural,
    OffTopicProfane,
    OffTopicHateSpeech,
    OffTopicOmcaFeedback,
}

impl Category {
    pub const COUNT: usize = 10;

    /// Every category in display order
    pub const ALL: [Category; Category::COUNT] = [
        Category::OntopicGeneral,
        Category::OntopicCultural,
        Category::OntopicProfane,
        Category::OntopicHateSpeech,
        Category::OntopicOmcaFeedback,
        Category::OffTopicGeneral,
        Category::OffTopicCultural,
        Category::OffTopicProfane,
        Category::OffTopicHateSpeech,
        Category::OffTopicOmcaFeedback,
    ];

    /// The label used on buttons and as the key in the snapshot file
    pub fn label(&self) -> &'static str {
        match self {
            Category::OntopicGeneral => "Ontopic General",
            Category::OntopicCultural => "Ontopic Cultural",
            Category::OntopicProfane => "Ontopic Profane",
            Category::OntopicHateSpeech => "Ontopic Hate Speech",
            Category::OntopicOmcaFeedback => "Ontopic OMCA Feedback",
            Category::OffTopicGeneral => "Off Topic General",
            Category::OffTopicCultural => "Off Topic Cultural",
            Category::OffTopicProfane => "Off Topic Profane",
            Category::OffTopicHateSpeech => "Off Topic Hate Speech",
            Category::OffTopicOmcaFeedback => "Off Topic OMCA Feedback",
        }
    }

    /// Position in [`Category::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn group(&self) -> CategoryGroup {
        if self.label().starts_with("Ontopic") {
            CategoryGroup::Ontopic
        } else {
            CategoryGroup::OffTopic
        }
    }

    /// Label without the group prefix, e.g. "Hate Speech"
    pub fn short_label(&self) -> &'static str {
        let label = self.label();
        label
            .strip_prefix("Ontopic ")
            .or_else(|| label.strip_prefix("Off Topic "))
            .unwrap_or(label)
    }

    pub fn from_label(label: &str) -> Result<Category, InvalidCategory> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .ok_or_else(|| InvalidCategory(label.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_display_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_groups_split_five_and_five() {
        assert_eq!(CategoryGroup::Ontopic.categories().count(), 5);
        assert_eq!(CategoryGroup::OffTopic.categories().count(), 5);
        assert_eq!(Category::OffTopicProfane.group(), CategoryGroup::OffTopic);
        assert_eq!(Category::OntopicHateSpeech.group(), CategoryGroup::Ontopic);
    }

    #[test]
    fn test_from_label_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Ok(category));
        }
    }

    #[test]
    fn test_from_label_rejects_unknown() {
        assert!(Category::from_label("Ontopic Sports").is_err());
        assert!(Category::from_label("ontopic general").is_err());
    }

    #[test]
    fn test_short_label() {
        assert_eq!(Category::OntopicOmcaFeedback.short_label(), "OMCA Feedback");
        assert_eq!(Category::OffTopicGeneral.short_label(), "General");
    }
}
