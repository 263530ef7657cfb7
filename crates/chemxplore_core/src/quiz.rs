//! Multiple-choice quiz sessions
//!
//! A session walks an ordered list of questions:
//! `AwaitingAnswer → Revealed → (AwaitingAnswer | Finished)`.
//! The first answer to a question is final.

use serde::Serialize;

use crate::error::QuizError;
use crate::model::Question;

/// Share of correct answers (in tenths) needed for the encouraging verdict
const PASS_TENTHS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    AwaitingAnswer,
    Revealed,
    Finished,
}

/// Final result of a quiz session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
}

impl QuizSummary {
    pub fn passed(&self) -> bool {
        self.score * 10 >= self.total * PASS_TENTHS
    }

    pub fn verdict(&self) -> &'static str {
        if self.passed() {
            "Great job! You really know your stuff."
        } else {
            "Review the lessons and try again to improve."
        }
    }
}

/// What the learner sees right after answering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_index: usize,
    pub explanation: String,
}

/// Result of moving past a revealed question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    Next { index: usize },
    Finished(QuizSummary),
}

/// Read-only view of the question in front of the learner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizView {
    pub index: usize,
    pub total: usize,
    pub score: usize,
    pub phase: QuizPhase,
    pub text: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
    /// Only filled in once the answer is revealed
    pub correct_index: Option<usize>,
    pub explanation: Option<String>,
    pub is_last: bool,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    index: usize,
    score: usize,
    selected: Option<usize>,
    phase: QuizPhase,
}

impl QuizSession {
    /// A session over `questions` in the order given. An empty list starts
    /// out finished.
    pub fn new(questions: Vec<Question>) -> Self {
        let phase = if questions.is_empty() {
            QuizPhase::Finished
        } else {
            QuizPhase::AwaitingAnswer
        };
        Self {
            questions,
            index: 0,
            score: 0,
            selected: None,
            phase,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn current(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::Finished => None,
            _ => self.questions.get(self.index),
        }
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            score: self.score,
            total: self.questions.len(),
        }
    }

    /// Lock in an answer for the current question
    pub fn answer(&mut self, option: usize) -> Result<AnswerFeedback, QuizError> {
        match self.phase {
            QuizPhase::Revealed => return Err(QuizError::AlreadyAnswered),
            QuizPhase::Finished => return Err(QuizError::Finished),
            QuizPhase::AwaitingAnswer => {}
        }
        let question = self
            .questions
            .get(self.index)
            .ok_or(QuizError::Finished)?;
        if option >= question.options.len() {
            return Err(QuizError::InvalidOption(option));
        }

        let correct = question.is_correct(option);
        let feedback = AnswerFeedback {
            correct,
            correct_index: question.correct_index,
            explanation: question.explanation.clone(),
        };

        self.selected = Some(option);
        self.phase = QuizPhase::Revealed;
        if correct {
            self.score += 1;
        }
        Ok(feedback)
    }

    /// Move on from a revealed question. Calling this once finished reports
    /// the same summary again without changing anything.
    pub fn advance(&mut self) -> Result<QuizStep, QuizError> {
        match self.phase {
            QuizPhase::AwaitingAnswer => Err(QuizError::NotAnswered),
            QuizPhase::Finished => Ok(QuizStep::Finished(self.summary())),
            QuizPhase::Revealed => {
                self.selected = None;
                if self.index + 1 >= self.questions.len() {
                    self.phase = QuizPhase::Finished;
                    Ok(QuizStep::Finished(self.summary()))
                } else {
                    self.index += 1;
                    self.phase = QuizPhase::AwaitingAnswer;
                    Ok(QuizStep::Next { index: self.index })
                }
            }
        }
    }

    pub fn view(&self) -> Option<QuizView> {
        let question = self.current()?;
        let revealed = self.phase == QuizPhase::Revealed;
        Some(QuizView {
            index: self.index,
            total: self.questions.len(),
            score: self.score,
            phase: self.phase,
            text: question.text.clone(),
            options: question.options.to_vec(),
            selected: self.selected,
            correct_index: revealed.then_some(question.correct_index),
            explanation: revealed.then(|| question.explanation.clone()),
            is_last: self.index + 1 == self.questions.len(),
        })
    }
}
