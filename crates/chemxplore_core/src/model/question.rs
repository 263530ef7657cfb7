use serde::{Deserialize, Serialize};

use super::QuestionId;

/// Every question offers exactly this many choices
pub const OPTION_COUNT: usize = 4;

/// A multiple-choice quiz question. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub correct_index: usize,
    pub explanation: String,
}

impl Question {
    pub fn new(
        id: u16,
        text: impl Into<String>,
        options: [&str; OPTION_COUNT],
        correct_index: usize,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: QuestionId(id),
            text: text.into(),
            options: options.map(str::to_string),
            correct_index,
            explanation: explanation.into(),
        }
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}
