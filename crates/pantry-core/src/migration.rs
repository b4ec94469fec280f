//! Migration file model and UP/DOWN section extraction
//!
//! A migration file carries an UP section and an optional DOWN section,
//! delimited by isolated `-- UP` / `-- DOWN` marker lines. A file with no
//! markers at all is treated as UP-only, with the whole content as the UP
//! section (backward-compatible default for hand-written files).

use crate::error::{CoreError, CoreResult};

/// Direction of a migration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Apply the schema change
    Up,
    /// Revert the schema change
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
        }
    }
}

/// One migration unit discovered on disk.
#[derive(Debug, Clone)]
pub struct MigrationFile {
    /// Filename minus extension; unique identifier and sort key
    pub version: String,

    /// Full filename, timestamp-prefixed so lexicographic order equals
    /// chronological order
    pub filename: String,

    /// Full UTF-8 file content
    pub raw_content: String,
}

impl MigrationFile {
    /// Extract the SQL section for `direction` from the raw content.
    ///
    /// UP with no marker returns the whole file. DOWN with no marker fails
    /// with [`CoreError::MissingDownSection`]. A section that is empty or
    /// whitespace-only fails with [`CoreError::EmptySection`] regardless
    /// of direction.
    pub fn extract_section(&self, direction: Direction) -> CoreResult<String> {
        let sql = match direction {
            Direction::Up => match collect_section(&self.raw_content, Direction::Up) {
                Some(section) => section,
                // No UP marker: the whole file is the UP section.
                None => self.raw_content.clone(),
            },
            Direction::Down => collect_section(&self.raw_content, Direction::Down).ok_or_else(
                || CoreError::MissingDownSection {
                    version: self.version.clone(),
                },
            )?,
        };

        if sql.trim().is_empty() {
            return Err(CoreError::EmptySection {
                version: self.version.clone(),
                direction: direction.to_string(),
            });
        }
        Ok(sql)
    }

    /// True if the content carries an isolated `-- DOWN` marker line.
    pub fn has_down_section(&self) -> bool {
        self.raw_content
            .lines()
            .any(|line| marker_direction(line) == Some(Direction::Down))
    }
}

/// Classify a line as a section marker, if it is one.
///
/// A marker is a line that is exactly `--` followed by `UP` or `DOWN`
/// (case-insensitive), with arbitrary surrounding whitespace. Markers
/// embedded in string literals elsewhere in the SQL are indistinguishable
/// from real markers; that limitation is documented and accepted.
fn marker_direction(line: &str) -> Option<Direction> {
    let rest = line.trim().strip_prefix("--")?;
    let word = rest.trim();
    if word.eq_ignore_ascii_case("up") {
        Some(Direction::Up)
    } else if word.eq_ignore_ascii_case("down") {
        Some(Direction::Down)
    } else {
        None
    }
}

/// Collect the lines between the `direction` marker and the next marker
/// (or end of file). Returns None if the marker is absent.
fn collect_section(content: &str, direction: Direction) -> Option<String> {
    let mut section: Option<Vec<&str>> = None;

    for line in content.lines() {
        match marker_direction(line) {
            Some(found) if found == direction && section.is_none() => {
                section = Some(Vec::new());
            }
            Some(_) if section.is_some() => break,
            _ => {
                if let Some(lines) = section.as_mut() {
                    lines.push(line);
                }
            }
        }
    }

    section.map(|lines| lines.join("\n"))
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
