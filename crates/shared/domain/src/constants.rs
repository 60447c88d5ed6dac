//! Domain-level constants.
//!
//! These constants name the conventional values stored in free-text columns.

// =============================================================================
// Roles
// =============================================================================

/// Role held by users who author quizzes
pub const ROLE_INSTRUCTOR: &str = "instructor";

/// Role held by users who enroll in subjects and attempt quizzes
pub const ROLE_STUDENT: &str = "student";

/// Roles inserted by the seed command
pub const DEFAULT_ROLES: &[&str] = &[ROLE_INSTRUCTOR, ROLE_STUDENT];

// =============================================================================
// Question types
// =============================================================================

/// Multiple choice, exactly one correct choice
pub const QUESTION_TYPE_MCQ_SINGLE: &str = "mcq_single";

/// Multiple choice, any number of correct choices
pub const QUESTION_TYPE_MCQ_MULTIPLE: &str = "mcq_multiple";

/// Free-text answer
pub const QUESTION_TYPE_SHORT: &str = "short";

// =============================================================================
// Defaults
// =============================================================================

/// Marks awarded by a question when none are given
pub const DEFAULT_QUESTION_MARKS: i32 = 1;

/// Ordering position of questions and choices when none is given
pub const DEFAULT_POSITION: i32 = 0;
