/// Error types for loading and saving course files.
use chemxplore_core::CourseError;

#[derive(Debug)]
pub enum LoadError {
    Io(String),
    Parse(String),
    /// The file parsed but describes an unusable course
    Invalid(CourseError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "IO error: {msg}"),
            LoadError::Parse(msg) => write!(f, "Parse error: {msg}"),
            LoadError::Invalid(err) => write!(f, "Invalid course: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CourseError> for LoadError {
    fn from(err: CourseError) -> Self {
        LoadError::Invalid(err)
    }
}

#[derive(Debug)]
pub enum SaveError {
    Io(String),
    Serialize(String),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(msg) => write!(f, "IO error: {msg}"),
            SaveError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for SaveError {}
