use super::enums::{Day, RowStyle};
use super::error::InputError;
use super::store::DayStore;
use super::table::{RowId, TaskTable, TimeLeft};

/// Rows turn urgent once fewer than this many seconds remain
pub const URGENT_THRESHOLD_SECS: u64 = 60;

/// Result of one countdown step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Task is gone or never had a timer; the chain ends silently
    Stopped,
    /// Countdown advanced; the chain runs again in one interval
    Ticked { remaining: u64, urgent: bool },
    /// Remaining time was already zero; "Time's up!" is shown
    Finished,
}

/// Everything one day tab owns: the task store, its table and its input field
#[derive(Debug, Clone)]
pub struct DayContext {
    pub day: Day,
    pub store: DayStore,
    pub table: TaskTable,
    pub input: String,
}

impl DayContext {
    pub fn new(day: Day) -> Self {
        Self {
            day,
            store: DayStore::default(),
            table: TaskTable::default(),
            input: String::new(),
        }
    }

    /// Build the context from persisted names; loaded tasks carry no timer
    pub fn load(day: Day, names: Vec<String>) -> Self {
        let mut ctx = Self::new(day);
        for name in names {
            let row = ctx.table.insert(&name, TimeLeft::NoTimer);
            ctx.store.push(&name, None, row);
        }
        ctx
    }

    /// Append a task with a countdown of `minutes` (zero is a real, already expired timer)
    pub fn add(&mut self, name: &str, minutes: u64) -> Result<RowId, InputError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InputError::EmptyTaskName);
        }

        let row = self.table.insert(name, TimeLeft::Minutes(minutes));
        self.store.push(name, Some(minutes.saturating_mul(60)), row);
        Ok(row)
    }

    /// Name of the task on the selected row
    pub fn selected_task(&self) -> Option<&str> {
        self.table.selected_row().map(|row| row.task.as_str())
    }

    /// Delete the selected row and its task, returning the task name
    pub fn delete_selected(&mut self) -> Result<String, InputError> {
        let (row_id, name) = self
            .table
            .selected_row()
            .map(|row| (row.id, row.task.clone()))
            .ok_or(InputError::NoSelectionForDelete)?;

        self.table.remove(row_id);
        self.store.remove(&name);
        Ok(name)
    }

    /// Remove every task of the day
    pub fn clear(&mut self) {
        self.table.clear();
        self.store.clear();
    }

    /// Advance the countdown of `task` by one second
    pub fn countdown_step(&mut self, task: &str) -> StepOutcome {
        let Some(remaining) = self.store.remaining(task) else {
            return StepOutcome::Stopped;
        };
        let row = self
            .store
            .row_for(task)
            .and_then(|id| self.table.get_mut(id));

        if remaining == 0 {
            // Style stays as it was; an urgent row remains highlighted
            if let Some(row) = row {
                row.time_left = TimeLeft::TimesUp;
            }
            return StepOutcome::Finished;
        }

        let urgent = remaining < URGENT_THRESHOLD_SECS;
        if let Some(row) = row {
            row.time_left = TimeLeft::Clock(remaining);
            row.style = if urgent { RowStyle::Urgent } else { RowStyle::Normal };
        }
        self.store.set_remaining(task, remaining - 1);

        StepOutcome::Ticked {
            remaining: remaining - 1,
            urgent,
        }
    }

    /// Current cell content for `task`, if it has a row
    pub fn time_left(&self, task: &str) -> Option<TimeLeft> {
        let id = self.store.row_for(task)?;
        self.table.get(id).map(|row| row.time_left)
    }

    /// Current row style for `task`, if it has a row
    pub fn row_style(&self, task: &str) -> Option<RowStyle> {
        let id = self.store.row_for(task)?;
        self.table.get(id).map(|row| row.style)
    }
}
