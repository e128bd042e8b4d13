//! Assembling the final grade report.

use serde::{Deserialize, Serialize};

use crate::{calculate_gpa, CourseRecord, Credentials, Gpa, GradeSource, ReportError, Timestamp};

/// Everything `grades_list` prints: the GPA and the course list it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    /// `None` when no course counts towards the GPA yet.
    pub gpa: Option<Gpa>,
    /// Course records in portal order.
    pub grades: Vec<CourseRecord>,
    /// When the records were fetched.
    pub retrieved_at: Timestamp,
}

impl GradeReport {
    /// Builds a report from already-fetched records.
    pub fn from_records(
        grades: Vec<CourseRecord>,
        retrieved_at: Timestamp,
    ) -> Result<Self, ReportError> {
        let gpa = calculate_gpa(&grades)?;
        Ok(Self {
            gpa,
            grades,
            retrieved_at,
        })
    }
}

/// Fetches the records of `credentials` from `source` and computes the GPA.
pub async fn compile_report(
    source: &dyn GradeSource,
    credentials: &Credentials,
) -> Result<GradeReport, ReportError> {
    tracing::info!(username = %credentials.username, "fetching course records");
    let records = source.fetch_records(credentials).await?;
    let retrieved_at = Timestamp::now();
    tracing::info!(count = records.len(), "course records fetched");

    let report = GradeReport::from_records(records, retrieved_at)?;
    match &report.gpa {
        Some(gpa) => tracing::debug!(
            four = gpa.four,
            nine = gpa.nine,
            credits = gpa.credits,
            "GPA calculated"
        ),
        None => tracing::warn!("no letter-graded courses; GPA unavailable"),
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::{Password, SourceError, Username};

    struct FixedSource {
        records: Vec<CourseRecord>,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl GradeSource for FixedSource {
        async fn fetch_records(
            &self,
            credentials: &Credentials,
        ) -> Result<Vec<CourseRecord>, SourceError> {
            self.seen
                .lock()
                .unwrap()
                .push(credentials.username.to_string());
            Ok(self.records.clone())
        }
    }

    struct RejectingSource;

    #[async_trait]
    impl GradeSource for RejectingSource {
        async fn fetch_records(
            &self,
            _credentials: &Credentials,
        ) -> Result<Vec<CourseRecord>, SourceError> {
            Err(SourceError::AuthenticationRejected)
        }
    }

    fn credentials() -> Credentials {
        Credentials::new(
            Username::new("jdoe").unwrap(),
            Password::new("secret").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_report_keeps_every_record_in_order() {
        let records = vec![
            CourseRecord::new("FW 2019", "SC MATH 1300 3.00 A", "Calculus I", "B+"),
            CourseRecord::new("FW 2019", "SC MATH 1310 3.00 A", "Calculus II", "IP"),
            CourseRecord::new("SU 2020", "LE EECS 1012 3.00 M", "Net-centric Intro", "A"),
        ];
        let source = FixedSource {
            records: records.clone(),
            seen: Mutex::new(Vec::new()),
        };

        let report = compile_report(&source, &credentials()).await.unwrap();

        assert_eq!(report.grades, records);
        let gpa = report.gpa.unwrap();
        assert!((gpa.nine - 7.5).abs() < 1e-9);
        assert!((gpa.credits - 6.0).abs() < 1e-9);
        assert_eq!(*source.seen.lock().unwrap(), vec!["jdoe".to_owned()]);
    }

    #[tokio::test]
    async fn test_empty_course_list_has_no_gpa() {
        let source = FixedSource {
            records: Vec::new(),
            seen: Mutex::new(Vec::new()),
        };
        let report = compile_report(&source, &credentials()).await.unwrap();
        assert!(report.gpa.is_none());
        assert!(report.grades.is_empty());
    }

    #[tokio::test]
    async fn test_source_errors_propagate() {
        let err = compile_report(&RejectingSource, &credentials())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ReportError::Source(SourceError::AuthenticationRejected)
        ));
    }

    #[tokio::test]
    async fn test_malformed_graded_course_fails_report() {
        let source = FixedSource {
            records: vec![CourseRecord::new("FW 2019", "MATH", "Calculus I", "A")],
            seen: Mutex::new(Vec::new()),
        };
        let err = compile_report(&source, &credentials()).await.unwrap_err();
        assert!(matches!(err, ReportError::Grades(_)));
    }

    #[test]
    fn test_report_json_shape() {
        let report = GradeReport::from_records(
            vec![CourseRecord::new("FW 2019", "SC MATH 1300 3.00 A", "Calculus I", "A+")],
            Timestamp::now(),
        )
        .unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["gpa"]["four"], 4.0);
        assert_eq!(value["gpa"]["nine"], 9.0);
        assert_eq!(value["grades"][0]["session"], "FW 2019");
        assert_eq!(value["grades"][0]["course"], "SC MATH 1300 3.00 A");
        assert_eq!(value["grades"][0]["title"], "Calculus I");
        assert_eq!(value["grades"][0]["grade"], "A+");
        assert!(value["retrieved_at"].is_string());
    }
}
