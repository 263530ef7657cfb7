//! Course files on disk.
//!
//! A course file is the YAML form of [`Course`]: modules with their lab
//! parameters plus the question bank keyed by module id.

use std::path::Path;

use chemxplore_core::Course;

use crate::state::{LoadError, SaveError};

/// Read and validate a course file
pub fn load_course(path: &Path) -> Result<Course, LoadError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("Failed to read {}: {e}", path.display())))?;
    let course = parse_course(&content)?;
    tracing::info!(
        path = %path.display(),
        modules = course.modules.len(),
        "Loaded course"
    );
    Ok(course)
}

pub fn parse_course(content: &str) -> Result<Course, LoadError> {
    let course: Course =
        serde_saphyr::from_str(content).map_err(|e| LoadError::Parse(e.to_string()))?;
    course.validate()?;
    Ok(course)
}

pub fn save_course(path: &Path, course: &Course) -> Result<(), SaveError> {
    let yaml = serde_saphyr::to_string(course)
        .map_err(|e| SaveError::Serialize(format!("Failed to serialize course: {e}")))?;
    std::fs::write(path, yaml)
        .map_err(|e| SaveError::Io(format!("Failed to write {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemxplore_core::{CourseError, LabKind, ModuleId, ModuleStatus};

    const SMALL_COURSE: &str = r#"
starting_experience: 10
modules:
  - id: acids
    title: Acids
    description: Sour things.
    intro:
      - Acids are sour.
    lab:
      kind: titration
      target_ph: 3
      tolerance: 0.5
  - id: salts
    title: Salts
    status: LOCKED
    lab:
      kind: conductivity
quizzes:
  acids:
    - id: 1
      text: Which is sour?
      options: [Lemon, Soap, Milk, Water]
      correct_index: 0
      explanation: Citric acid.
  salts:
    - id: 1
      text: Does salt water conduct?
      options: ["Yes", "No", Sometimes, Never]
      correct_index: 0
      explanation: Ions carry charge.
"#;

    #[test]
    fn test_parse_small_course() {
        let course = parse_course(SMALL_COURSE).unwrap();
        assert_eq!(course.starting_experience, 10);
        assert_eq!(course.modules.len(), 2);

        let acids = course.module(&ModuleId::new("acids")).unwrap();
        let LabKind::Titration(lab) = &acids.lab else {
            panic!("expected titration lab");
        };
        assert_eq!(lab.target_ph, 3.0);
        assert_eq!(lab.tolerance, 0.5);
        // Unset fields keep their defaults
        assert_eq!(lab.start_ph, 7.0);
        assert_eq!(lab.reward, 50);

        let salts = course.module(&ModuleId::new("salts")).unwrap();
        assert_eq!(salts.status, ModuleStatus::Locked);
        assert!(matches!(salts.lab, LabKind::Conductivity(_)));
    }

    #[test]
    fn test_load_course_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("course.yaml");
        std::fs::write(&path, SMALL_COURSE).unwrap();

        let course = load_course(&path).unwrap();
        assert_eq!(
            course.questions(&ModuleId::new("salts")).unwrap()[0].text,
            "Does salt water conduct?"
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_course(&dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let result = parse_course("modules: [");
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_course_without_quiz_is_invalid() {
        let yaml = r#"
modules:
  - id: lonely
    title: Lonely
    lab:
      kind: reaction
quizzes: {}
"#;
        let result = parse_course(yaml);
        assert!(matches!(
            result,
            Err(LoadError::Invalid(CourseError::MissingQuiz(_)))
        ));
    }

    #[test]
    fn test_exported_builtin_course_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("builtin.yaml");
        save_course(&path, &Course::builtin()).unwrap();

        let loaded = load_course(&path).unwrap();
        assert_eq!(loaded, Course::builtin());
    }
}
