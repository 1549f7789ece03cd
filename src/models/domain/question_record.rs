use serde::{Deserialize, Serialize};

pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    #[serde(rename = "question")]
    pub question_text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

impl QuestionRecord {
    pub fn new(question_text: String, options: Vec<String>, correct_answer: String) -> Self {
        QuestionRecord {
            question_text,
            options,
            correct_answer,
        }
    }

    /// True when the record carries exactly four options, one of which is the answer.
    pub fn is_well_formed(&self) -> bool {
        self.options.len() == OPTION_COUNT && self.options.contains(&self.correct_answer)
    }
}

/// Template category for a question, cycled by question index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Definition,
    Comparison,
    Historical,
    Application,
    Importance,
}

impl QuestionType {
    pub const CYCLE: [QuestionType; 5] = [
        QuestionType::Definition,
        QuestionType::Comparison,
        QuestionType::Historical,
        QuestionType::Application,
        QuestionType::Importance,
    ];

    pub fn for_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "definition" => Some(QuestionType::Definition),
            "comparison" => Some(QuestionType::Comparison),
            "historical" => Some(QuestionType::Historical),
            "application" => Some(QuestionType::Application),
            "importance" => Some(QuestionType::Importance),
            _ => None,
        }
    }
}
