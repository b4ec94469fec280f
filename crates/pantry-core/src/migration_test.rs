use super::*;
use crate::error::CoreError;

fn file(content: &str) -> MigrationFile {
    MigrationFile {
        version: "20240101000000_test".to_string(),
        filename: "20240101000000_test.sql".to_string(),
        raw_content: content.to_string(),
    }
}

#[test]
fn test_extract_up_between_markers() {
    let f = file(
        "-- Migration: test\n-- Created: 2024-01-01T00:00:00Z\n\n-- UP\nCREATE TABLE foods (id INT);\n\n-- DOWN\nDROP TABLE foods;\n",
    );
    let up = f.extract_section(Direction::Up).unwrap();
    assert_eq!(up, "CREATE TABLE foods (id INT);\n");
}

#[test]
fn test_extract_down_between_marker_and_eof() {
    let f = file("-- UP\nCREATE TABLE foods (id INT);\n-- DOWN\nDROP TABLE foods;\n");
    let down = f.extract_section(Direction::Down).unwrap();
    assert_eq!(down, "DROP TABLE foods;");
}

#[test]
fn test_whole_file_is_up_when_no_markers() {
    let f = file("CREATE TABLE foods (id INT);\n");
    let up = f.extract_section(Direction::Up).unwrap();
    assert_eq!(up, "CREATE TABLE foods (id INT);\n");
}

#[test]
fn test_missing_down_marker_fails() {
    let f = file("CREATE TABLE foods (id INT);\n");
    let err = f.extract_section(Direction::Down).unwrap_err();
    assert!(matches!(err, CoreError::MissingDownSection { .. }));
    assert!(!f.has_down_section());
}

#[test]
fn test_whitespace_only_up_section_fails() {
    let f = file("-- UP\n   \n\n-- DOWN\nDROP TABLE foods;\n");
    let err = f.extract_section(Direction::Up).unwrap_err();
    assert!(matches!(err, CoreError::EmptySection { .. }));
}

#[test]
fn test_empty_down_section_fails() {
    let f = file("-- UP\nCREATE TABLE foods (id INT);\n-- DOWN\n");
    let err = f.extract_section(Direction::Down).unwrap_err();
    assert!(matches!(err, CoreError::EmptySection { .. }));
}

#[test]
fn test_markers_are_case_insensitive() {
    let f = file("-- up\nCREATE TABLE a (id INT);\n--   Down  \nDROP TABLE a;\n");
    assert_eq!(
        f.extract_section(Direction::Up).unwrap(),
        "CREATE TABLE a (id INT);"
    );
    assert_eq!(
        f.extract_section(Direction::Down).unwrap(),
        "DROP TABLE a;"
    );
    assert!(f.has_down_section());
}

#[test]
fn test_non_marker_comments_are_kept() {
    let f = file("-- UP\n-- create the table\nCREATE TABLE a (id INT);\n-- DOWN\nDROP TABLE a;\n");
    let up = f.extract_section(Direction::Up).unwrap();
    assert_eq!(up, "-- create the table\nCREATE TABLE a (id INT);");
}

#[test]
fn test_down_before_up_in_file() {
    let f = file("-- DOWN\nDROP TABLE a;\n-- UP\nCREATE TABLE a (id INT);\n");
    assert_eq!(
        f.extract_section(Direction::Up).unwrap(),
        "CREATE TABLE a (id INT);"
    );
    assert_eq!(f.extract_section(Direction::Down).unwrap(), "DROP TABLE a;");
}
