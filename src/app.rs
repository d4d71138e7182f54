use crate::domain::{Day, DayContext, InputError, StepOutcome, UiMode};
use crate::input::prompt::PromptOutcome;
use crate::notifications;
use crate::persistence::{meta_file, save_metadata, AppMetadata, TaskRecords};
use crate::timer::{TimerEngine, TimerHandle};
use anyhow::Result;
use std::collections::VecDeque;
use std::time::Instant;

/// What a confirmation dialog does when answered with yes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    ClearAll(Day),
}

/// Modal dialogs, shown one at a time from the front of the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Warning {
        title: &'static str,
        message: String,
    },
    Info {
        title: &'static str,
        message: String,
    },
    Confirm {
        title: &'static str,
        message: String,
        action: ConfirmAction,
    },
    /// Asks for the timer minutes of a task about to be added
    TimePrompt {
        day: Day,
        task: String,
        buffer: String,
    },
}

/// Main application state
pub struct AppState {
    /// One context per day, in `Day::ALL` order
    pub days: Vec<DayContext>,
    pub active_day: Day,
    pub ui_mode: UiMode,
    pub dialogs: VecDeque<Dialog>,
    pub timers: TimerEngine,
    records: TaskRecords,
}

impl AppState {
    /// Load every day's tasks from `records`
    pub fn load(records: TaskRecords, active_day: Day) -> Result<Self> {
        let mut days = Vec::with_capacity(Day::ALL.len());
        for day in Day::ALL {
            let names = records.load(day)?;
            log::info!("loaded {} task(s) for {}", names.len(), day);
            days.push(DayContext::load(day, names));
        }

        Ok(Self {
            days,
            active_day,
            ui_mode: UiMode::Normal,
            dialogs: VecDeque::new(),
            timers: TimerEngine::new(),
            records,
        })
    }

    pub fn day(&self, day: Day) -> &DayContext {
        &self.days[day.index()]
    }

    pub fn day_mut(&mut self, day: Day) -> &mut DayContext {
        &mut self.days[day.index()]
    }

    pub fn active(&self) -> &DayContext {
        self.day(self.active_day)
    }

    pub fn active_mut(&mut self) -> &mut DayContext {
        let day = self.active_day;
        self.day_mut(day)
    }

    /// The dialog currently on screen
    pub fn current_dialog(&self) -> Option<&Dialog> {
        self.dialogs.front()
    }

    pub fn next_day(&mut self) {
        self.active_day = self.active_day.next();
        self.ui_mode = UiMode::Normal;
    }

    pub fn prev_day(&mut self) {
        self.active_day = self.active_day.prev();
        self.ui_mode = UiMode::Normal;
    }

    pub fn select_next(&mut self) {
        self.active_mut().table.select_next();
    }

    pub fn select_prev(&mut self) {
        self.active_mut().table.select_prev();
    }

    pub fn start_editing_input(&mut self) {
        self.ui_mode = UiMode::EditingInput;
    }

    pub fn stop_editing_input(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.active_mut().input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.active_mut().input.pop();
    }

    /// Queue a warning dialog for rejected input
    pub fn warn(&mut self, err: InputError) {
        log::warn!("{}: {}", err.title(), err);
        self.dialogs.push_back(Dialog::Warning {
            title: err.title(),
            message: err.to_string(),
        });
    }

    /// "Add Task": validate the day's input field and ask for the timer minutes
    pub fn request_add_task(&mut self, day: Day) {
        let name = self.day(day).input.trim().to_string();
        if name.is_empty() {
            self.warn(InputError::EmptyTaskName);
            return;
        }

        self.dialogs.push_back(Dialog::TimePrompt {
            day,
            task: name,
            buffer: String::new(),
        });
    }

    /// Type into the open minutes prompt
    pub fn prompt_add_char(&mut self, c: char) {
        if let Some(Dialog::TimePrompt { buffer, .. }) = self.dialogs.front_mut() {
            buffer.push(c);
        }
    }

    pub fn prompt_backspace(&mut self) {
        if let Some(Dialog::TimePrompt { buffer, .. }) = self.dialogs.front_mut() {
            buffer.pop();
        }
    }

    /// Close the minutes prompt, adding the task when `submitted` holds a valid value
    pub fn finish_time_prompt(&mut self, submitted: bool) -> Result<()> {
        let Some(Dialog::TimePrompt { day, task, buffer }) = self.dialogs.front().cloned() else {
            return Ok(());
        };
        self.dialogs.pop_front();

        match PromptOutcome::resolve(submitted.then_some(buffer.as_str())) {
            PromptOutcome::Minutes(minutes) => self.add_task(day, &task, minutes)?,
            PromptOutcome::Invalid => self.warn(InputError::InvalidTime),
            PromptOutcome::Cancelled => log::debug!("add of '{}' cancelled", task),
        }
        Ok(())
    }

    /// Append a task with a `minutes` countdown to `day` and save the day's record
    pub fn add_task(&mut self, day: Day, name: &str, minutes: u64) -> Result<()> {
        let ctx = self.day_mut(day);
        if let Err(err) = ctx.add(name, minutes) {
            self.warn(err);
            return Ok(());
        }
        ctx.input.clear();

        log::info!("added '{}' to {} with {} min", name.trim(), day, minutes);
        self.persist(day)
    }

    /// "Delete Task": remove the selected task of `day` and save
    pub fn delete_task(&mut self, day: Day) -> Result<()> {
        let name = match self.day_mut(day).delete_selected() {
            Ok(name) => name,
            Err(err) => {
                self.warn(err);
                return Ok(());
            }
        };

        let cancelled = self.timers.cancel_task(day, &name);
        log::info!("deleted '{}' from {} ({} timer(s) cancelled)", name, day, cancelled);
        self.persist(day)
    }

    /// "Clear All": ask before wiping the day
    pub fn request_clear_all(&mut self, day: Day) {
        self.dialogs.push_back(Dialog::Confirm {
            title: "Clear All",
            message: format!("Are you sure you want to clear all tasks for {}?", day),
            action: ConfirmAction::ClearAll(day),
        });
    }

    /// Answer the confirmation dialog on screen
    pub fn answer_confirm(&mut self, yes: bool) -> Result<()> {
        let Some(Dialog::Confirm { action, .. }) = self.dialogs.front().cloned() else {
            return Ok(());
        };
        self.dialogs.pop_front();

        match action {
            ConfirmAction::ClearAll(day) if yes => self.clear_all(day),
            ConfirmAction::ClearAll(_) => Ok(()),
        }
    }

    /// Remove every task of `day` and save an empty record
    pub fn clear_all(&mut self, day: Day) -> Result<()> {
        self.day_mut(day).clear();
        let cancelled = self.timers.cancel_day(day);
        log::info!("cleared {} ({} timer(s) cancelled)", day, cancelled);
        self.persist(day)
    }

    /// Close a warning or info dialog
    pub fn dismiss_dialog(&mut self) {
        if matches!(
            self.dialogs.front(),
            Some(Dialog::Warning { .. } | Dialog::Info { .. })
        ) {
            self.dialogs.pop_front();
        }
    }

    /// "Start Timer": start a countdown chain for the selected task and run its first step
    pub fn start_timer(&mut self, day: Day, now: Instant) -> Option<TimerHandle> {
        let Some(task) = self.day(day).selected_task().map(str::to_string) else {
            self.warn(InputError::NoSelectionForTimer);
            return None;
        };

        let handle = self.timers.start(day, &task, now);
        log::info!(
            "timer started for '{}' on {} ({} chain(s))",
            task,
            day,
            self.timers.chains_for(day, &task)
        );
        self.tick(now);
        Some(handle)
    }

    /// Run every countdown step that is due at `now`
    pub fn tick(&mut self, now: Instant) {
        for tick in self.timers.take_due(now) {
            match self.day_mut(tick.day).countdown_step(&tick.task) {
                StepOutcome::Ticked { remaining, urgent } => {
                    log::debug!("tick '{}' remaining={} urgent={}", tick.task, remaining, urgent);
                    self.timers.rearm(tick, now);
                }
                StepOutcome::Finished => {
                    log::info!("timer done for '{}' on {}", tick.task, tick.day);
                    notifications::notify_timer_done(&tick.task);
                    self.dialogs.push_back(Dialog::Info {
                        title: "Timer Done",
                        message: notifications::timer_done_message(&tick.task),
                    });
                }
                StepOutcome::Stopped => {
                    log::debug!("timer chain for '{}' stopped, no timer entry", tick.task);
                }
            }
        }
    }

    /// Write the day's record to disk
    fn persist(&self, day: Day) -> Result<()> {
        self.records.save(day, self.day(day).store.names())
    }

    /// Remember the active tab in meta.json
    pub fn save_metadata(&self) -> Result<()> {
        let metadata = AppMetadata {
            last_active_day: Some(self.active_day),
        };
        save_metadata(meta_file(self.records.dir()), &metadata)
    }
}
