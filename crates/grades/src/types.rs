//! Shared value types for the grades domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! values with invariants (credits are finite and non-negative, letter grades
//! come from a closed set) and participate in the GPA computation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{GradesError, Username};

// ---------------------------------------------------------------------------
// Letter grades and scales
// ---------------------------------------------------------------------------

/// A point scale a [`LetterGrade`] can be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeScale {
    /// The 0.0 – 4.0 scale used by most North American institutions.
    FourPoint,
    /// York's native 0 – 9 scale.
    NinePoint,
}

impl GradeScale {
    /// Highest value a grade can reach on this scale.
    pub fn max(self) -> f64 {
        match self {
            GradeScale::FourPoint => 4.0,
            GradeScale::NinePoint => 9.0,
        }
    }
}

/// A final letter grade that counts towards the GPA.
///
/// Course list entries such as `IP` (in progress), `P` (pass) or `NGR`
/// (no grade reported) are not letter grades and do not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "D+")]
    DPlus,
    D,
    E,
    F,
}

impl LetterGrade {
    /// Every letter grade, best first.
    pub const ALL: [LetterGrade; 10] = [
        LetterGrade::APlus,
        LetterGrade::A,
        LetterGrade::BPlus,
        LetterGrade::B,
        LetterGrade::CPlus,
        LetterGrade::C,
        LetterGrade::DPlus,
        LetterGrade::D,
        LetterGrade::E,
        LetterGrade::F,
    ];

    /// Parses a grade cell. Surrounding whitespace is ignored; the match is
    /// otherwise exact and case-sensitive.
    pub fn parse(grade: &str) -> Option<Self> {
        let grade = grade.trim();
        Self::ALL.into_iter().find(|g| g.as_str() == grade)
    }

    /// The grade as printed on a transcript.
    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::E => "E",
            LetterGrade::F => "F",
        }
    }

    /// Grade points awarded by this letter on `scale`.
    pub fn points(self, scale: GradeScale) -> f64 {
        match scale {
            GradeScale::NinePoint => match self {
                LetterGrade::APlus => 9.0,
                LetterGrade::A => 8.0,
                LetterGrade::BPlus => 7.0,
                LetterGrade::B => 6.0,
                LetterGrade::CPlus => 5.0,
                LetterGrade::C => 4.0,
                LetterGrade::DPlus => 3.0,
                LetterGrade::D => 2.0,
                LetterGrade::E => 1.0,
                LetterGrade::F => 0.0,
            },
            GradeScale::FourPoint => match self {
                LetterGrade::APlus => 4.0,
                LetterGrade::A => 3.8,
                LetterGrade::BPlus => 3.3,
                LetterGrade::B => 3.0,
                LetterGrade::CPlus => 2.3,
                LetterGrade::C => 2.0,
                LetterGrade::DPlus => 1.3,
                LetterGrade::D => 1.0,
                LetterGrade::E => 0.7,
                LetterGrade::F => 0.0,
            },
        }
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

/// Credit weight of a course.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Credits(f64);

impl Credits {
    /// Creates a [`Credits`] value.
    ///
    /// Returns `None` if `value` is negative, infinite, or NaN.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 0.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the underlying `f64` value.
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Credits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// One row of the course list, exactly as the portal shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Academic session, e.g. `"FW 2019"`.
    pub session: String,
    /// Course column, e.g. `"SC MATH 1300 3.00 A"`. See [`CourseCode`].
    pub course: String,
    /// Course title.
    pub title: String,
    /// Grade as printed; not necessarily a [`LetterGrade`].
    pub grade: String,
}

impl CourseRecord {
    /// Creates a record from its four columns.
    pub fn new(
        session: impl Into<String>,
        course: impl Into<String>,
        title: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            session: session.into(),
            course: course.into(),
            title: title.into(),
            grade: grade.into(),
        }
    }

    /// The record's letter grade, if it has one.
    pub fn letter_grade(&self) -> Option<LetterGrade> {
        LetterGrade::parse(&self.grade)
    }

    /// Parses the course column.
    pub fn course_code(&self) -> Result<CourseCode, GradesError> {
        self.course.parse()
    }
}

/// The structured form of a course column.
///
/// The column is whitespace separated: faculty, subject, number, credits and
/// an optional section, e.g. `"SC MATH 1300 3.00 A"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseCode {
    pub faculty: String,
    pub subject: String,
    pub number: String,
    pub credits: Credits,
    pub section: Option<String>,
}

impl std::str::FromStr for CourseCode {
    type Err = GradesError;

    fn from_str(course: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = course.split_whitespace().collect();
        let [faculty, subject, number, credits, rest @ ..] = parts.as_slice() else {
            return Err(GradesError::InvalidCourseCode {
                course: course.to_owned(),
            });
        };

        let credits = credits
            .parse::<f64>()
            .ok()
            .and_then(Credits::new)
            .ok_or_else(|| GradesError::InvalidCredits {
                course: course.to_owned(),
                value: (*credits).to_owned(),
            })?;

        Ok(Self {
            faculty: (*faculty).to_owned(),
            subject: (*subject).to_owned(),
            number: (*number).to_owned(),
            credits,
            section: (!rest.is_empty()).then(|| rest.join(" ")),
        })
    }
}

// ---------------------------------------------------------------------------
// GPA
// ---------------------------------------------------------------------------

/// Credit-weighted grade point averages over every letter-graded course.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gpa {
    /// Average on [`GradeScale::FourPoint`].
    pub four: f64,
    /// Average on [`GradeScale::NinePoint`].
    pub nine: f64,
    /// Total credits the averages were computed over.
    pub credits: f64,
}

impl Gpa {
    /// The average on `scale`.
    pub fn on(&self, scale: GradeScale) -> f64 {
        match scale {
            GradeScale::FourPoint => self.four,
            GradeScale::NinePoint => self.nine,
        }
    }
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// A Passport York password. Never printed by `Debug` or `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a password, returning `None` if it is empty.
    ///
    /// Unlike usernames, passwords are not trimmed.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.is_empty() {
            None
        } else {
            Some(Self(v))
        }
    }

    /// Exposes the secret for submission to the login form.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Login details for the portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: Username,
    pub password: Password,
}

impl Credentials {
    pub fn new(username: Username, password: Password) -> Self {
        Self { username, password }
    }
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a [`Timestamp`] from a [`DateTime<Utc>`].
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
