mod ids;
mod module;
mod progress;
mod question;

pub use ids::{ModuleId, QuestionId};
pub use module::{Module, ModuleStatus};
pub use progress::{CompletionRecord, Experience, ProgressModel, QUIZ_POINTS_PER_CORRECT};
pub use question::{OPTION_COUNT, Question};
