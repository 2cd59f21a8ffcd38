use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Scale,
    Single,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub topic: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Question {
    pub fn scale(id: &str, topic: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            topic: topic.to_string(),
            text: text.to_string(),
            kind: QuestionKind::Scale,
            options: None,
        }
    }

    pub fn single(id: &str, topic: &str, text: &str, options: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            topic: topic.to_string(),
            text: text.to_string(),
            kind: QuestionKind::Single,
            options: Some(options.iter().map(|option| (*option).to_string()).collect()),
        }
    }

    pub fn free_text(id: &str, topic: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            topic: topic.to_string(),
            text: text.to_string(),
            kind: QuestionKind::Text,
            options: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    pub survey_id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Survey {
    /// Single-choice questions must carry a non-empty option list.
    pub fn validate(&self) -> Result<(), AppError> {
        for question in &self.questions {
            if question.kind == QuestionKind::Single
                && !question.options.as_ref().is_some_and(|options| !options.is_empty())
            {
                return Err(AppError::Validation(format!(
                    "question {} is single-choice but has no options",
                    question.id
                )));
            }
        }

        Ok(())
    }
}

/// Declared answer shape. The submission path accepts arbitrary objects and
/// stores them untouched; this is the shape well-behaved clients send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub answer: String,
}

// Questions could live in the store; for now this is a curated set of
// "major topics" that users typically expect from a survey site.
static PRESET_SURVEY: LazyLock<Survey> = LazyLock::new(|| Survey {
    survey_id: "major-topics-001".to_string(),
    title: "General Interests & Lifestyle Survey".to_string(),
    description:
        "A quick survey covering technology, health, finance, education, travel and entertainment."
            .to_string(),
    questions: vec![
        Question::scale(
            "q1",
            "technology",
            "How comfortable are you with new technology?",
        ),
        Question::single(
            "q2",
            "technology",
            "Which platform do you use the most?",
            &["iOS", "Android", "Windows", "macOS", "Linux"],
        ),
        Question::single(
            "q3",
            "health",
            "How many days a week do you exercise?",
            &["0", "1-2", "3-4", "5+"],
        ),
        Question::single(
            "q4",
            "finance",
            "How do you primarily budget your expenses?",
            &["App", "Spreadsheet", "Pen & Paper", "I don't budget"],
        ),
        Question::single(
            "q5",
            "education",
            "Highest level of education completed?",
            &["High School", "Associate", "Bachelor's", "Master's", "Doctorate"],
        ),
        Question::single(
            "q6",
            "travel",
            "How often do you travel for leisure?",
            &["Rarely", "1-2x/yr", "3-4x/yr", "5+ / yr"],
        ),
        Question::single(
            "q7",
            "entertainment",
            "Favorite entertainment format?",
            &["Movies", "Series", "Books", "Gaming", "Music Concerts"],
        ),
        Question::free_text(
            "q8",
            "technology",
            "What tech topic are you most curious about right now?",
        ),
    ],
});

/// The one survey this service knows about. Built on first access, read-only
/// afterwards; safe for unlimited concurrent readers.
pub fn preset_survey() -> &'static Survey {
    &PRESET_SURVEY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_survey_shape() {
        let survey = preset_survey();

        assert_eq!(survey.survey_id, "major-topics-001");
        assert_eq!(survey.questions.len(), 8);
        assert_eq!(survey.questions[0].id, "q1");
        assert_eq!(survey.questions[7].id, "q8");
        assert_eq!(survey.questions[0].kind, QuestionKind::Scale);
        assert_eq!(survey.questions[7].kind, QuestionKind::Text);

        let platforms = survey.questions[1]
            .options
            .as_ref()
            .expect("q2 is single-choice");
        assert_eq!(platforms.len(), 5);
        assert_eq!(platforms[0], "iOS");
    }

    #[test]
    fn test_preset_survey_is_valid() {
        preset_survey().validate().expect("preset survey is valid");
    }

    #[test]
    fn test_preset_survey_is_idempotent() {
        // Same static instance on every access, structurally identical.
        assert!(std::ptr::eq(preset_survey(), preset_survey()));
        assert_eq!(preset_survey(), preset_survey());
    }

    #[test]
    fn test_validate_rejects_single_choice_without_options() {
        let survey = Survey {
            survey_id: "s".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            questions: vec![Question {
                id: "q1".to_string(),
                topic: "misc".to_string(),
                text: "pick one".to_string(),
                kind: QuestionKind::Single,
                options: Some(vec![]),
            }],
        };

        assert!(survey.validate().is_err());
    }

    #[test]
    fn test_question_kind_serializes_as_type_tag() {
        let value = serde_json::to_value(Question::scale("q1", "technology", "prompt"))
            .expect("question serializes");

        assert_eq!(value["type"], "scale");
        assert_eq!(value["id"], "q1");
        // scale and text questions carry no options key at all
        assert!(value.get("options").is_none());
    }

    #[test]
    fn test_survey_serde_round_trip() {
        let serialized = serde_json::to_string(preset_survey()).expect("survey serializes");
        let parsed: Survey = serde_json::from_str(&serialized).expect("survey parses");

        assert_eq!(&parsed, preset_survey());
        // Re-serialization is byte-identical: ordering and option lists survive.
        assert_eq!(
            serde_json::to_string(&parsed).expect("survey serializes"),
            serialized
        );
    }
}
