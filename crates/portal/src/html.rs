//! Parsing of the Passport York login form and the course list page.
//!
//! Kept free of HTTP so the page handling can be tested against fixtures.

use grades::CourseRecord;
use scraper::{ElementRef, Html, Selector};

use crate::PortalError;

/// Form fields the login POST always sets itself.
pub const CREDENTIAL_FIELDS: [&str; 3] = ["mli", "password", "dologin"];

fn selector(css: &str) -> Result<Selector, PortalError> {
    Selector::parse(css).map_err(|e| PortalError::Selector(format!("{css}: {e:?}")))
}

/// Collects the `name`/`value` pairs of every hidden input on the login page.
///
/// Inputs without a `name` are skipped; a missing `value` is sent as empty.
/// Fields that collide with [`CREDENTIAL_FIELDS`] are dropped.
pub fn hidden_login_fields(page: &str) -> Result<Vec<(String, String)>, PortalError> {
    let document = Html::parse_document(page);
    let hidden = selector("input[type='hidden']")?;

    Ok(document
        .select(&hidden)
        .filter_map(|input| {
            let element = input.value();
            let name = element.attr("name")?;
            if CREDENTIAL_FIELDS.contains(&name) {
                return None;
            }
            Some((
                name.to_owned(),
                element.attr("value").unwrap_or_default().to_owned(),
            ))
        })
        .collect())
}

/// Whether a login response page reports success.
pub fn is_authenticated(page: &str, success_marker: &str) -> bool {
    page.contains(success_marker)
}

/// Text content of a cell with entities decoded, non-breaking spaces turned
/// into plain spaces and surrounding whitespace trimmed.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .collect::<String>()
        .replace('\u{a0}', " ")
        .trim()
        .to_owned()
}

/// Reads the course records from the first `table.bodytext` of the course
/// list page.
///
/// Rows without `td` cells (the header row) are skipped, as are rows with
/// fewer than four cells.
pub fn parse_course_table(page: &str) -> Result<Vec<CourseRecord>, PortalError> {
    let document = Html::parse_document(page);
    let table_selector = selector("table.bodytext")?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or(PortalError::CourseTableMissing)?;

    let mut records = Vec::new();
    for row in table.select(&row_selector) {
        let cells: Vec<String> = row.select(&cell_selector).map(cell_text).collect();
        if cells.is_empty() {
            continue;
        }
        let [session, course, title, grade, ..] = cells.as_slice() else {
            tracing::warn!(cells = cells.len(), "skipping course row with too few cells");
            continue;
        };
        records.push(CourseRecord::new(
            session.as_str(),
            course.as_str(),
            title.as_str(),
            grade.as_str(),
        ));
    }

    tracing::debug!(count = records.len(), "parsed course table");
    Ok(records)
}
