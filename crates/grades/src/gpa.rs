//! Credit-weighted GPA calculation.

use crate::{CourseRecord, GradeScale, Gpa, GradesError};

/// Calculates both the four-point and the nine-point GPA of `records`.
///
/// Only records whose grade is a [`crate::LetterGrade`] are counted; each one
/// contributes its grade points weighted by the credit field of its course
/// column. Records without a letter grade (in progress, pass/fail, ...) are
/// ignored and their course column is not inspected.
///
/// Returns `Ok(None)` when nothing counts towards the GPA, including the case
/// where every graded course carries zero credits.
///
/// # Errors
///
/// Returns a [`GradesError`] when a letter-graded record's course column
/// cannot be parsed.
pub fn calculate_gpa(records: &[CourseRecord]) -> Result<Option<Gpa>, GradesError> {
    let mut total_credits = 0.0;
    let mut four_point = 0.0;
    let mut nine_point = 0.0;

    for record in records {
        let Some(grade) = record.letter_grade() else {
            tracing::trace!(course = %record.course, grade = %record.grade, "not counted towards GPA");
            continue;
        };
        let credits = record.course_code()?.credits.as_f64();

        four_point += grade.points(GradeScale::FourPoint) * credits;
        nine_point += grade.points(GradeScale::NinePoint) * credits;
        total_credits += credits;
    }

    if total_credits <= 0.0 {
        return Ok(None);
    }

    // Rounding in the weighted sums can push a perfect record past the top
    // of the scale.
    Ok(Some(Gpa {
        four: (four_point / total_credits).min(GradeScale::FourPoint.max()),
        nine: (nine_point / total_credits).min(GradeScale::NinePoint.max()),
        credits: total_credits,
    }))
}
