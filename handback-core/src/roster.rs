//! Roster loading — one student per row, ordered as in the CSV.
//!
//! The roster is a CSV with a header row; the only column handback cares
//! about is `github_username`. Extra columns (names, ids, section numbers)
//! are tolerated and ignored.

use std::path::Path;

use crate::error::CoreError;
use crate::types::Student;

/// Header column holding the student identifier.
pub const USERNAME_COLUMN: &str = "github_username";

/// Read the roster at `path`, preserving file order.
///
/// Returns `CoreError::RosterNotFound` if the file is absent and
/// `CoreError::RosterColumnMissing` if the header row has no
/// `github_username` column. Blank usernames are skipped.
pub fn read_roster(path: &Path) -> Result<Vec<Student>, CoreError> {
    if !path.exists() {
        return Err(CoreError::RosterNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| CoreError::RosterRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let headers = reader
        .headers()
        .map_err(|e| CoreError::RosterRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();
    let column = headers
        .iter()
        .position(|h| h.trim() == USERNAME_COLUMN)
        .ok_or_else(|| CoreError::RosterColumnMissing {
            path: path.to_path_buf(),
            column: USERNAME_COLUMN.to_string(),
        })?;

    let mut students = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| CoreError::RosterRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let username = record.get(column).unwrap_or("").trim();
        if !username.is_empty() {
            students.push(Student::from(username));
        }
    }
    Ok(students)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_roster(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("classroom_roster.csv");
        std::fs::write(&path, contents).expect("write roster");
        path
    }

    #[test]
    fn reads_students_in_file_order() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_roster(dir.path(), "github_username\nbert\nalana\n");
        let students = read_roster(&path).expect("read");
        assert_eq!(students, vec![Student::from("bert"), Student::from("alana")]);
    }

    #[test]
    fn tolerates_extra_columns() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_roster(
            dir.path(),
            "name,github_username,section\nBert B,bert,1\nAlana A,alana,2\n",
        );
        let students = read_roster(&path).expect("read");
        assert_eq!(students, vec![Student::from("bert"), Student::from("alana")]);
    }

    #[test]
    fn missing_file_returns_not_found() {
        let err = read_roster(Path::new("/nonexistent/roster.csv")).unwrap_err();
        assert!(matches!(err, CoreError::RosterNotFound { .. }));
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_roster(dir.path(), "name,email\nBert,b@example.edu\n");
        let err = read_roster(&path).unwrap_err();
        assert!(matches!(err, CoreError::RosterColumnMissing { .. }));
        assert!(err.to_string().contains("github_username"));
    }

    #[rstest]
    #[case("github_username\n", 0)]
    #[case("github_username\nbert\n", 1)]
    #[case("github_username\nbert\n\nalana\n", 2)]
    #[case("github_username\nbert\n  \nalana\n", 2)]
    fn blank_rows_are_skipped(#[case] contents: &str, #[case] expected: usize) {
        let dir = TempDir::new().expect("tempdir");
        let path = write_roster(dir.path(), contents);
        let students = read_roster(&path).expect("read");
        assert_eq!(students.len(), expected);
    }
}
