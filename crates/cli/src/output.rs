//! Rendering a [`GradeReport`] as JSON or as tables.

use std::io::{self, Write};

use grades::{GradeReport, GradeScale};
use prettytable::{Cell, Row, Table};

/// One line of JSON followed by a newline.
pub fn render_json<W: Write>(report: &GradeReport, out: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

fn row(cells: &[&str]) -> Row {
    Row::new(cells.iter().map(|c| Cell::new(c)).collect())
}

/// A GPA table followed by the course table.
pub fn render_tables<W: Write>(report: &GradeReport, out: &mut W) -> io::Result<()> {
    let (four, nine) = match &report.gpa {
        Some(gpa) => (
            format!("{:.2}", gpa.on(GradeScale::FourPoint)),
            format!("{:.2}", gpa.on(GradeScale::NinePoint)),
        ),
        None => ("N/A".to_owned(), "N/A".to_owned()),
    };

    writeln!(out, "GPA:")?;
    let mut gpa_table = Table::new();
    gpa_table.set_titles(row(&["Four Point", "Nine Point"]));
    gpa_table.add_row(row(&[&four, &nine]));
    gpa_table.print(out)?;

    writeln!(out)?;

    writeln!(out, "Grades:")?;
    let mut grades_table = Table::new();
    grades_table.set_titles(row(&["Session", "Course", "Title", "Grade"]));
    for record in &report.grades {
        grades_table.add_row(row(&[
            &record.session,
            &record.course,
            &record.title,
            &record.grade,
        ]));
    }
    grades_table.print(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use grades::{CourseRecord, Timestamp};

    use super::*;

    fn report(grades: Vec<CourseRecord>) -> GradeReport {
        let at = Timestamp::from_utc(Utc.with_ymd_and_hms(2021, 1, 15, 12, 0, 0).unwrap());
        GradeReport::from_records(grades, at).unwrap()
    }

    fn sample() -> GradeReport {
        report(vec![
            CourseRecord::new("FW 2019", "SC MATH 1300 3.00 A", "Calculus I", "A"),
            CourseRecord::new("FW 2019", "LE EECS 1012 3.00 M", "Net-centric Intro", "B"),
        ])
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        render_json(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["grades"].as_array().unwrap().len(), 2);
        assert_eq!(value["grades"][1]["title"], "Net-centric Intro");
        assert_eq!(value["gpa"]["nine"], 7.0);
        assert_eq!(value["retrieved_at"], "2021-01-15T12:00:00Z");
    }

    #[test]
    fn test_json_output_without_gpa() {
        let mut out = Vec::new();
        render_json(&report(Vec::new()), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value["gpa"].is_null());
        assert_eq!(value["grades"], serde_json::json!([]));
    }

    #[test]
    fn test_table_output() {
        let mut out = Vec::new();
        render_tables(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let gpa_at = text.find("GPA:").unwrap();
        let grades_at = text.find("Grades:").unwrap();
        assert!(gpa_at < grades_at);

        assert!(text.contains("Four Point"));
        assert!(text.contains("Nine Point"));
        assert!(text.contains("3.40"));
        assert!(text.contains("7.00"));
        assert!(text.contains("Session"));
        assert!(text.contains("SC MATH 1300 3.00 A"));
        assert!(text.contains("Net-centric Intro"));
    }

    #[test]
    fn test_table_output_without_gpa() {
        let mut out = Vec::new();
        render_tables(&report(Vec::new()), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("N/A"));
    }
}
