//! Migration file store - discovery and authoring
//!
//! Scans a fixed directory for `.sql` migration files, sorted ascending by
//! filename so the timestamp prefix gives chronological order, and
//! generates new timestamp-prefixed migration files from a template.

use crate::error::{CoreError, CoreResult};
use crate::migration::MigrationFile;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// File store over a migrations directory.
#[derive(Debug, Clone)]
pub struct MigrationStore {
    dir: PathBuf,
}

impl MigrationStore {
    /// Create a store rooted at `dir`. The directory is not touched until
    /// a listing or authoring operation needs it.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this store scans.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Discover all migration files, sorted ascending by filename.
    ///
    /// A missing directory is created and yields an empty list rather
    /// than an error, so a fresh checkout can run `migrate:status`
    /// before authoring anything.
    pub fn list_migration_files(&self) -> CoreResult<Vec<MigrationFile>> {
        self.ensure_dir()?;

        let entries = fs::read_dir(&self.dir).map_err(|e| CoreError::IoWithPath {
            path: self.dir.display().to_string(),
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() || !path.extension().is_some_and(|e| e == "sql") {
                continue;
            }
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(version) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let raw_content = fs::read_to_string(&path).map_err(|e| CoreError::IoWithPath {
                path: path.display().to_string(),
                source: e,
            })?;

            files.push(MigrationFile {
                version: version.to_string(),
                filename: filename.to_string(),
                raw_content,
            });
        }

        files.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(files)
    }

    /// Author a new migration file from the standard template.
    ///
    /// The filename is `<14-digit UTC timestamp>_<slug>.sql`; returns the
    /// path of the created file.
    pub fn create_migration(&self, name: &str) -> CoreResult<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyMigrationName);
        }

        self.ensure_dir()?;

        let now = Utc::now();
        let filename = format!("{}_{}.sql", now.format("%Y%m%d%H%M%S"), slugify(name));
        let path = self.dir.join(&filename);

        let content = format!(
            "-- Migration: {name}\n-- Created: {created}\n\n-- UP\n\n\n-- DOWN\n\n",
            created = now.to_rfc3339(),
        );
        fs::write(&path, content).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(path)
    }

    fn ensure_dir(&self) -> CoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| CoreError::MigrationsDirSetup {
            path: self.dir.display().to_string(),
            source: e,
        })
    }
}

/// Reduce a human name to a filename-safe slug: lowercase alphanumerics
/// with runs of anything else collapsed to single underscores.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_sep = true;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            slug.push('_');
            last_was_sep = true;
        }
    }

    while slug.ends_with('_') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
