use super::enums::RowStyle;
use std::fmt;
use uuid::Uuid;

/// Opaque handle of a display row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(Uuid);

impl RowId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Content of the "Time Left" column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLeft {
    /// Loaded from disk, timers are not persisted
    NoTimer,
    /// Just added, countdown not started yet
    Minutes(u64),
    /// Running countdown, remaining seconds
    Clock(u64),
    TimesUp,
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeLeft::NoTimer => f.write_str("No Timer"),
            TimeLeft::Minutes(minutes) => write!(f, "{} min", minutes),
            TimeLeft::Clock(secs) => write!(f, "{:02}:{:02}", secs / 60, secs % 60),
            TimeLeft::TimesUp => f.write_str("Time's up!"),
        }
    }
}

/// A row of a day's task table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub id: RowId,
    pub task: String,
    pub time_left: TimeLeft,
    pub style: RowStyle,
}

/// The rows shown in one day tab, plus the row selection
#[derive(Debug, Clone, Default)]
pub struct TaskTable {
    rows: Vec<DisplayRow>,
    selected: Option<usize>,
}

impl TaskTable {
    /// Append a row and hand back its handle
    pub fn insert(&mut self, task: &str, time_left: TimeLeft) -> RowId {
        let id = RowId::new();
        self.rows.push(DisplayRow {
            id,
            task: task.to_string(),
            time_left,
            style: RowStyle::Normal,
        });
        id
    }

    /// Remove a row by handle, keeping the selection on a neighbouring row
    pub fn remove(&mut self, id: RowId) -> Option<DisplayRow> {
        let pos = self.rows.iter().position(|row| row.id == id)?;
        let row = self.rows.remove(pos);

        self.selected = match self.selected {
            _ if self.rows.is_empty() => None,
            Some(sel) if sel > pos || sel >= self.rows.len() => Some(sel.saturating_sub(1)),
            other => other,
        };

        Some(row)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.selected = None;
    }

    pub fn get(&self, id: RowId) -> Option<&DisplayRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn get_mut(&mut self, id: RowId) -> Option<&mut DisplayRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The currently selected row, if any
    pub fn selected_row(&self) -> Option<&DisplayRow> {
        self.selected.and_then(|idx| self.rows.get(idx))
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|idx| *idx < self.rows.len());
    }

    /// Move selection down (selects the first row when nothing is selected)
    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) if idx + 1 < self.rows.len() => idx + 1,
            Some(idx) => idx,
            None => 0,
        });
    }

    /// Move selection up (selects the last row when nothing is selected)
    pub fn select_prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => idx.saturating_sub(1),
            None => self.rows.len() - 1,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_left_rendering() {
        assert_eq!(TimeLeft::NoTimer.to_string(), "No Timer");
        assert_eq!(TimeLeft::Minutes(5).to_string(), "5 min");
        assert_eq!(TimeLeft::Clock(59).to_string(), "00:59");
        assert_eq!(TimeLeft::Clock(61).to_string(), "01:01");
        assert_eq!(TimeLeft::Clock(6000).to_string(), "100:00");
        assert_eq!(TimeLeft::TimesUp.to_string(), "Time's up!");
    }

    #[test]
    fn test_insert_creates_unique_handles() {
        let mut table = TaskTable::default();
        let a = table.insert("Squats", TimeLeft::NoTimer);
        let b = table.insert("Squats", TimeLeft::NoTimer);

        assert_ne!(a, b);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(a).map(|r| r.style), Some(RowStyle::Normal));
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut table = TaskTable::default();
        table.select_next();
        assert_eq!(table.selected_index(), None);

        table.insert("A", TimeLeft::NoTimer);
        table.insert("B", TimeLeft::NoTimer);

        table.select_next();
        assert_eq!(table.selected_index(), Some(0));
        table.select_next();
        table.select_next();
        assert_eq!(table.selected_index(), Some(1));
        table.select_prev();
        assert_eq!(table.selected_index(), Some(0));

        table.select(Some(7));
        assert_eq!(table.selected_index(), None);
        table.select_prev();
        assert_eq!(table.selected_index(), Some(1));
    }

    #[test]
    fn test_remove_keeps_neighbouring_selection() {
        let mut table = TaskTable::default();
        let a = table.insert("A", TimeLeft::NoTimer);
        let _b = table.insert("B", TimeLeft::NoTimer);
        let c = table.insert("C", TimeLeft::NoTimer);

        table.select(Some(2));
        table.remove(c);
        assert_eq!(table.selected_row().map(|r| r.task.as_str()), Some("B"));

        table.select(Some(1));
        table.remove(a);
        assert_eq!(table.selected_row().map(|r| r.task.as_str()), Some("B"));

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.selected_index(), None);
    }
}
