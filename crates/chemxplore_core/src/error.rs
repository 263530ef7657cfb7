use std::fmt;

use crate::flow::FlowStage;
use crate::model::{ModuleId, QuestionId};
use crate::simulation::Slot;

/// Errors found while validating a course definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    EmptyCourse,
    DuplicateModule(ModuleId),
    BlankTitle(ModuleId),
    /// Progress above 100, or 100 on a module that is not completed
    InvalidProgress {
        module: ModuleId,
        progress: u8,
    },
    MissingQuiz(ModuleId),
    EmptyQuiz(ModuleId),
    /// A question bank entry for a module the course does not define
    UnknownQuizModule(ModuleId),
    CorrectIndexOutOfRange {
        module: ModuleId,
        question: QuestionId,
        index: usize,
    },
    InvalidLab {
        module: ModuleId,
        reason: &'static str,
    },
}

impl fmt::Display for CourseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseError::EmptyCourse => write!(f, "course defines no modules"),
            CourseError::DuplicateModule(id) => write!(f, "module {id} is defined twice"),
            CourseError::BlankTitle(id) => write!(f, "module {id} has a blank title"),
            CourseError::InvalidProgress { module, progress } => {
                write!(f, "module {module} has invalid progress {progress}")
            }
            CourseError::MissingQuiz(id) => write!(f, "module {id} has no quiz"),
            CourseError::EmptyQuiz(id) => write!(f, "quiz for module {id} has no questions"),
            CourseError::UnknownQuizModule(id) => {
                write!(f, "quiz defined for unknown module {id}")
            }
            CourseError::CorrectIndexOutOfRange {
                module,
                question,
                index,
            } => write!(
                f,
                "question {} in module {module} marks option {index} correct, which does not exist",
                question.0
            ),
            CourseError::InvalidLab { module, reason } => {
                write!(f, "lab for module {module} is invalid: {reason}")
            }
        }
    }
}

impl std::error::Error for CourseError {}

/// A lab action that was rejected. The lab state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabError {
    /// The experiment already succeeded
    Complete,
    /// The action belongs to a different kind of experiment
    Unsupported,
    /// An outcome is still being revealed
    Pending,
    NoAtomSelected,
    InvalidAtom(usize),
    SlotUnavailable(Slot),
    NoSolute,
    AlreadyMixed,
}

impl fmt::Display for LabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabError::Complete => write!(f, "experiment already complete"),
            LabError::Unsupported => write!(f, "action not available in this lab"),
            LabError::Pending => write!(f, "waiting for the reaction to finish"),
            LabError::NoAtomSelected => write!(f, "select an atom first"),
            LabError::InvalidAtom(index) => write!(f, "no atom at inventory position {index}"),
            LabError::SlotUnavailable(slot) => {
                write!(f, "slot {} is not part of this level", slot.label())
            }
            LabError::NoSolute => write!(f, "choose a solute before mixing"),
            LabError::AlreadyMixed => write!(f, "solution already mixed"),
        }
    }
}

impl std::error::Error for LabError {}

/// A quiz action that was rejected. The session is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizError {
    AlreadyAnswered,
    NotAnswered,
    InvalidOption(usize),
    Finished,
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::AlreadyAnswered => write!(f, "question already answered"),
            QuizError::NotAnswered => write!(f, "answer the question first"),
            QuizError::InvalidOption(index) => write!(f, "option {index} does not exist"),
            QuizError::Finished => write!(f, "quiz already finished"),
        }
    }
}

impl std::error::Error for QuizError {}

/// A lesson flow action that was rejected. Flow and progress are unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    ModuleNotFound(ModuleId),
    ModuleLocked(ModuleId),
    WrongStage {
        expected: FlowStage,
        actual: FlowStage,
    },
    /// Leaving the lab before the experiment succeeded
    LabIncomplete,
    Lab(LabError),
    Quiz(QuizError),
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::ModuleNotFound(id) => write!(f, "module {id} not found"),
            FlowError::ModuleLocked(id) => write!(f, "module {id} is locked"),
            FlowError::WrongStage { expected, actual } => {
                write!(
                    f,
                    "action needs the {} view but the {} view is active",
                    expected.name(),
                    actual.name()
                )
            }
            FlowError::LabIncomplete => write!(f, "finish the experiment first"),
            FlowError::Lab(e) => write!(f, "{e}"),
            FlowError::Quiz(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FlowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlowError::Lab(e) => Some(e),
            FlowError::Quiz(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LabError> for FlowError {
    fn from(err: LabError) -> Self {
        FlowError::Lab(err)
    }
}

impl From<QuizError> for FlowError {
    fn from(err: QuizError) -> Self {
        FlowError::Quiz(err)
    }
}
