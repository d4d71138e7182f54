use crate::domain::Day;
use crate::persistence::files::{atomic_write, read_optional};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// File name of a day's record, e.g. `Monday_tasks.txt`
pub fn record_file_name(day: Day) -> String {
    format!("{}_tasks.txt", day.label())
}

/// Parse a record: one task name per line, trimmed, blank lines skipped
pub fn parse_record(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Serialize task names, each line newline-terminated
pub fn serialize_record(names: &[String]) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    out
}

/// Per-day task name records in a data directory
#[derive(Debug, Clone)]
pub struct TaskRecords {
    dir: PathBuf,
}

impl TaskRecords {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, day: Day) -> PathBuf {
        self.dir.join(record_file_name(day))
    }

    /// Load a day's task names; a missing record means no tasks yet
    pub fn load(&self, day: Day) -> Result<Vec<String>> {
        let content = read_optional(self.path_for(day))?;
        Ok(content.as_deref().map(parse_record).unwrap_or_default())
    }

    /// Overwrite a day's record with `names`
    pub fn save(&self, day: Day, names: &[String]) -> Result<()> {
        let path = self.path_for(day);
        atomic_write(&path, &serialize_record(names))?;
        log::debug!("saved {} task(s) to {}", names.len(), path.display());
        Ok(())
    }
}
