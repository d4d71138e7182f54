use super::table::RowId;
use std::collections::HashMap;

/// In-memory task state of one day.
///
/// Names keep insertion order and may repeat. The timer and row maps are
/// keyed by name, so a repeated name overwrites the earlier entry.
#[derive(Debug, Clone, Default)]
pub struct DayStore {
    tasks: Vec<String>,
    timers: HashMap<String, u64>,
    rows: HashMap<String, RowId>,
}

impl DayStore {
    /// Append a task with an optional timer (in seconds)
    pub fn push(&mut self, name: &str, remaining_secs: Option<u64>, row: RowId) {
        self.tasks.push(name.to_string());
        if let Some(secs) = remaining_secs {
            self.timers.insert(name.to_string(), secs);
        }
        self.rows.insert(name.to_string(), row);
    }

    /// Drop the first occurrence of `name` along with its timer and row mapping
    pub fn remove(&mut self, name: &str) -> Option<RowId> {
        if let Some(pos) = self.tasks.iter().position(|task| task == name) {
            self.tasks.remove(pos);
        }
        self.timers.remove(name);
        self.rows.remove(name)
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
        self.timers.clear();
        self.rows.clear();
    }

    /// Ordered task names (what gets persisted)
    pub fn names(&self) -> &[String] {
        &self.tasks
    }

    pub fn remaining(&self, name: &str) -> Option<u64> {
        self.timers.get(name).copied()
    }

    pub fn set_remaining(&mut self, name: &str, secs: u64) {
        if let Some(slot) = self.timers.get_mut(name) {
            *slot = secs;
        }
    }

    pub fn row_for(&self, name: &str) -> Option<RowId> {
        self.rows.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::{TaskTable, TimeLeft};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_and_remove() {
        let mut table = TaskTable::default();
        let mut store = DayStore::default();
        let row_a = table.insert("Pushups", TimeLeft::Minutes(1));
        let row_b = table.insert("Plank", TimeLeft::NoTimer);

        store.push("Pushups", Some(60), row_a);
        store.push("Plank", None, row_b);

        assert_eq!(store.names(), &["Pushups".to_string(), "Plank".to_string()]);
        assert_eq!(store.remaining("Pushups"), Some(60));
        assert_eq!(store.remaining("Plank"), None);

        assert_eq!(store.remove("Pushups"), Some(row_a));
        assert_eq!(store.names(), &["Plank".to_string()]);
        assert_eq!(store.remaining("Pushups"), None);
        assert_eq!(store.row_for("Pushups"), None);
    }

    #[test]
    fn test_duplicate_names_last_write_wins() {
        let mut table = TaskTable::default();
        let mut store = DayStore::default();
        let first = table.insert("Run", TimeLeft::Minutes(5));
        let second = table.insert("Run", TimeLeft::Minutes(2));

        store.push("Run", Some(300), first);
        store.push("Run", Some(120), second);

        assert_eq!(store.len(), 2);
        assert_eq!(store.remaining("Run"), Some(120));
        assert_eq!(store.row_for("Run"), Some(second));

        store.remove("Run");
        assert_eq!(store.names(), &["Run".to_string()]);
        assert_eq!(store.row_for("Run"), None);
    }

    #[test]
    fn test_set_remaining_ignores_untimed_tasks() {
        let mut table = TaskTable::default();
        let mut store = DayStore::default();
        store.push("Stretch", None, table.insert("Stretch", TimeLeft::NoTimer));

        store.set_remaining("Stretch", 10);
        assert_eq!(store.remaining("Stretch"), None);

        store.clear();
        assert!(store.is_empty());
    }
}
