pub mod context;
pub mod enums;
pub mod error;
pub mod store;
pub mod table;

pub use context::{DayContext, StepOutcome};
pub use enums::{Day, RowStyle, UiMode};
pub use error::InputError;
pub use table::{DisplayRow, TimeLeft};
