//! Core domain for `grades_list`.
//!
//! This crate contains the course record model, the letter grade scales, the
//! GPA calculation and the port trait through which records are fetched.
//! Infrastructure crates implement the traits defined here; they never add
//! grading rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; the `portal` crate defines *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`Username`, `RunId`) |
//! | [`types`] | Value types (`CourseRecord`, `LetterGrade`, `Gpa`, `Credentials`, etc.) |
//! | [`gpa`] | Credit-weighted GPA calculation |
//! | [`source`] | The [`GradeSource`] port |
//! | [`report`] | [`GradeReport`] assembly |
//! | [`errors`] | Domain, source and report error types |

pub mod errors;
pub mod gpa;
pub mod identifiers;
pub mod report;
pub mod source;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{GradesError, ReportError, SourceError};
pub use gpa::calculate_gpa;
pub use identifiers::{RunId, Username};
pub use report::{compile_report, GradeReport};
pub use source::GradeSource;
pub use types::{
    CourseCode, CourseRecord, Credentials, Credits, Gpa, GradeScale, LetterGrade, Password,
    Timestamp,
};
