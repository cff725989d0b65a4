use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;
use crate::controls::NamedControl;
use crate::error::ViewError;
use crate::filter::ListFilter;
use crate::record::Record;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Essay,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 4] = [
        Self::MultipleChoice,
        Self::TrueFalse,
        Self::ShortAnswer,
        Self::Essay,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multipleChoice",
            Self::TrueFalse => "trueFalse",
            Self::ShortAnswer => "shortAnswer",
            Self::Essay => "essay",
        }
    }

    /// Kinds answered by picking from a list of options.
    pub fn has_options(&self) -> bool {
        matches!(self, Self::MultipleChoice | Self::TrueFalse)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl QuestionStatus {
    pub const ALL: [QuestionStatus; 3] = [Self::Draft, Self::Published, Self::Archived];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// A question in the quiz bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub kind: QuestionKind,
    #[serde(default)]
    pub status: QuestionStatus,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    #[serde(default)]
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
}

impl Question {
    pub fn toggle_pin(&mut self) {
        self.pinned = !self.pinned;
    }

    /// Move the answer option at `from` so it ends up at `to`.
    ///
    /// Out-of-range indices leave the options untouched and return false.
    pub fn move_option(&mut self, from: usize, to: usize) -> bool {
        let len = self.options.len();
        if from >= len || to >= len {
            return false;
        }
        let option = self.options.remove(from);
        self.options.insert(to, option);
        true
    }

    pub fn correct_options(&self) -> usize {
        self.options.iter().filter(|o| o.is_correct).count()
    }

    /// Check the answer options fit the question kind.
    pub fn validate(&self) -> Result<(), ViewError> {
        let invalid = |reason: &str| {
            Err(ViewError::InvalidQuestion {
                id: self.id.clone(),
                reason: reason.to_string(),
            })
        };

        if self.prompt.trim().is_empty() {
            return invalid("prompt is empty");
        }
        match self.kind {
            QuestionKind::MultipleChoice if self.options.len() < 2 => {
                invalid("multiple choice needs at least two options")
            }
            QuestionKind::TrueFalse if self.options.len() != 2 => {
                invalid("true/false needs exactly two options")
            }
            kind if kind.has_options() && self.correct_options() != 1 => {
                invalid("exactly one option must be correct")
            }
            kind if kind.has_options() && self.options.iter().any(|o| o.text.trim().is_empty()) => {
                invalid("option text is empty")
            }
            _ => Ok(()),
        }
    }
}

impl Record for Question {
    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }

    fn title(&self) -> &str {
        &self.prompt
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.prompt.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields.extend(self.options.iter().map(|o| o.text.as_str()));
        fields
    }

    fn is_pinned(&self) -> bool {
        self.pinned
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum QuestionFilter {
    #[default]
    All,
    Pinned,
    Status(QuestionStatus),
    Kind(QuestionKind),
}

impl NamedControl for QuestionFilter {
    const KIND: &'static str = "question filter";

    fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pinned => "pinned",
            Self::Status(status) => status.name(),
            Self::Kind(kind) => kind.name(),
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" => Some(Self::All),
            "pinned" => Some(Self::Pinned),
            _ => QuestionStatus::ALL
                .into_iter()
                .find(|s| s.name() == name)
                .map(Self::Status)
                .or_else(|| {
                    QuestionKind::ALL
                        .into_iter()
                        .find(|k| k.name() == name)
                        .map(Self::Kind)
                }),
        }
    }
}

impl ListFilter<Question> for QuestionFilter {
    fn matches(&self, record: &Question, _config: &ViewConfig) -> bool {
        match self {
            Self::All => true,
            Self::Pinned => record.pinned,
            Self::Status(status) => record.status == *status,
            Self::Kind(kind) => record.kind == *kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn option(id: &str, text: &str, is_correct: bool) -> AnswerOption {
        AnswerOption {
            id: id.to_string(),
            text: text.to_string(),
            is_correct,
        }
    }

    fn capital_question() -> Question {
        Question {
            id: "q-1".to_string(),
            prompt: "What is the capital of France?".to_string(),
            kind: QuestionKind::MultipleChoice,
            status: QuestionStatus::Published,
            difficulty: Difficulty::Easy,
            tags: vec!["geography".to_string()],
            options: vec![
                option("a", "Paris", true),
                option("b", "Lyon", false),
                option("c", "Marseille", false),
            ],
            pinned: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_move_option() {
        let mut q = capital_question();
        assert!(q.move_option(0, 2));
        let order: Vec<&str> = q.options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);

        assert!(!q.move_option(0, 3));
        assert!(!q.move_option(5, 0));
    }

    #[test]
    fn test_validate() {
        let q = capital_question();
        assert!(q.validate().is_ok());

        let mut two_correct = capital_question();
        two_correct.options[1].is_correct = true;
        assert!(two_correct.validate().is_err());

        let mut lonely = capital_question();
        lonely.options.truncate(1);
        assert!(lonely.validate().is_err());

        let mut tf = capital_question();
        tf.kind = QuestionKind::TrueFalse;
        assert!(tf.validate().is_err());
        tf.options.pop();
        assert!(tf.validate().is_ok());

        let mut essay = capital_question();
        essay.kind = QuestionKind::Essay;
        essay.options.clear();
        assert!(essay.validate().is_ok());

        let mut blank = capital_question();
        blank.prompt = "  ".to_string();
        assert!(matches!(
            blank.validate(),
            Err(ViewError::InvalidQuestion { reason, .. }) if reason == "prompt is empty"
        ));
    }

    #[test]
    fn test_search_includes_options() {
        let text = capital_question().searchable_text();
        assert!(text.contains("marseille"));
        assert!(text.contains("geography"));
    }

    #[test]
    fn test_filter_names() {
        assert_eq!(QuestionFilter::from_name("all"), Some(QuestionFilter::All));
        assert_eq!(
            QuestionFilter::from_name("draft"),
            Some(QuestionFilter::Status(QuestionStatus::Draft))
        );
        assert_eq!(
            QuestionFilter::from_name("trueFalse"),
            Some(QuestionFilter::Kind(QuestionKind::TrueFalse))
        );
        assert_eq!(QuestionFilter::from_name("unread"), None);
        for kind in QuestionKind::ALL {
            let filter = QuestionFilter::Kind(kind);
            assert_eq!(QuestionFilter::from_name(filter.name()), Some(filter));
        }
    }

    #[test]
    fn test_filter_matches() {
        let config = ViewConfig::default();
        let q = capital_question();
        assert!(QuestionFilter::Status(QuestionStatus::Published).matches(&q, &config));
        assert!(!QuestionFilter::Status(QuestionStatus::Draft).matches(&q, &config));
        assert!(QuestionFilter::Kind(QuestionKind::MultipleChoice).matches(&q, &config));
        assert!(!QuestionFilter::Pinned.matches(&q, &config));
    }
}
