//! Tests for course definitions, the builder DSL and validation

use crate::config::{Course, CourseBuilder, LabKind, ModuleBuilder};
use crate::error::CourseError;
use crate::model::{ModuleId, ModuleStatus, QuestionId};
use crate::simulation::{ConductivityConfig, ReactionConfig, TitrationConfig};

fn one_question(builder: ModuleBuilder) -> ModuleBuilder {
    builder.question("q", ["a", "b", "c", "d"], 0, "e")
}

#[test]
fn test_builtin_course_is_valid() {
    let course = Course::builtin();
    course.validate().unwrap();

    assert_eq!(course.starting_experience, 1250);
    let ids: Vec<&str> = course.modules.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["acids-bases", "reaction-types", "solution-properties"]);
    for module in &course.modules {
        assert_eq!(course.questions(&module.id).unwrap().len(), 10);
        assert!(!module.intro.is_empty());
    }
}

#[test]
fn test_builtin_labs_match_modules() {
    let course = Course::builtin();
    let lab = |id: &str| course.module(&ModuleId::new(id)).unwrap().lab.clone();
    assert_eq!(lab("acids-bases"), LabKind::Titration(TitrationConfig::default()));
    assert_eq!(lab("reaction-types"), LabKind::Reaction(ReactionConfig::default()));
    assert_eq!(
        lab("solution-properties"),
        LabKind::Conductivity(ConductivityConfig::default())
    );
}

#[test]
fn test_initial_progress_copies_status() {
    let progress = Course::builtin().initial_progress();
    assert_eq!(progress.experience().points(), 1250);
    let first = progress.module(&ModuleId::new("acids-bases")).unwrap();
    assert_eq!(first.status, ModuleStatus::InProgress);
    assert_eq!(first.progress, 35);
    assert_eq!(progress.completed_count(), 0);
}

#[test]
fn test_builder_assigns_question_ids() {
    let course = CourseBuilder::new()
        .module(
            ModuleBuilder::conductivity("sol", "Solutions", ConductivityConfig::default())
                .question("first", ["a", "b", "c", "d"], 0, "x")
                .question("second", ["a", "b", "c", "d"], 3, "y"),
        )
        .build()
        .unwrap();
    let ids: Vec<QuestionId> = course
        .questions(&ModuleId::new("sol"))
        .unwrap()
        .iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(ids, [QuestionId(1), QuestionId(2)]);
}

#[test]
fn test_empty_course_rejected() {
    assert_eq!(CourseBuilder::new().build(), Err(CourseError::EmptyCourse));
}

#[test]
fn test_duplicate_module_rejected() {
    let result = CourseBuilder::new()
        .module(one_question(ModuleBuilder::titration(
            "dup",
            "A",
            TitrationConfig::default(),
        )))
        .module(one_question(ModuleBuilder::reaction(
            "dup",
            "B",
            ReactionConfig::default(),
        )))
        .build();
    assert_eq!(
        result,
        Err(CourseError::DuplicateModule(ModuleId::new("dup")))
    );
}

#[test]
fn test_blank_title_rejected() {
    let result = CourseBuilder::new()
        .module(one_question(ModuleBuilder::titration(
            "m",
            "   ",
            TitrationConfig::default(),
        )))
        .build();
    assert_eq!(result, Err(CourseError::BlankTitle(ModuleId::new("m"))));
}

#[test]
fn test_empty_quiz_rejected() {
    let result = CourseBuilder::new()
        .module(ModuleBuilder::titration("m", "M", TitrationConfig::default()))
        .build();
    assert_eq!(result, Err(CourseError::EmptyQuiz(ModuleId::new("m"))));
}

#[test]
fn test_missing_quiz_rejected() {
    let mut course = CourseBuilder::new()
        .module(one_question(ModuleBuilder::titration(
            "m",
            "M",
            TitrationConfig::default(),
        )))
        .build_unchecked();
    course.quizzes.clear();
    assert_eq!(
        course.validate(),
        Err(CourseError::MissingQuiz(ModuleId::new("m")))
    );
}

#[test]
fn test_correct_index_out_of_range_rejected() {
    let result = CourseBuilder::new()
        .module(
            ModuleBuilder::titration("m", "M", TitrationConfig::default())
                .question("q", ["a", "b", "c", "d"], 4, "e"),
        )
        .build();
    assert_eq!(
        result,
        Err(CourseError::CorrectIndexOutOfRange {
            module: ModuleId::new("m"),
            question: QuestionId(1),
            index: 4,
        })
    );
}

#[test]
fn test_progress_rules() {
    let result = CourseBuilder::new()
        .module(one_question(
            ModuleBuilder::titration("m", "M", TitrationConfig::default()).progress(100),
        ))
        .build();
    assert_eq!(
        result,
        Err(CourseError::InvalidProgress {
            module: ModuleId::new("m"),
            progress: 100
        })
    );

    let completed = CourseBuilder::new()
        .module(one_question(
            ModuleBuilder::titration("m", "M", TitrationConfig::default())
                .status(ModuleStatus::Completed)
                .progress(100),
        ))
        .build();
    assert!(completed.is_ok());
}

#[test]
fn test_unknown_quiz_module_rejected() {
    let mut course = Course::builtin();
    course
        .quizzes
        .insert(ModuleId::new("alchemy"), vec![]);
    assert_eq!(
        course.validate(),
        Err(CourseError::UnknownQuizModule(ModuleId::new("alchemy")))
    );
}

#[test]
fn test_invalid_titration_target_rejected() {
    let result = CourseBuilder::new()
        .module(one_question(ModuleBuilder::titration(
            "m",
            "M",
            TitrationConfig {
                target_ph: 15.0,
                ..TitrationConfig::default()
            },
        )))
        .build();
    assert!(matches!(result, Err(CourseError::InvalidLab { .. })));
}
