use crate::domain::InputError;

/// What the minutes prompt resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Cancelled,
    Invalid,
    Minutes(u64),
}

impl PromptOutcome {
    /// Resolve a submitted prompt value (`None` when the prompt was cancelled)
    pub fn resolve(value: Option<&str>) -> Self {
        match value.map(parse_minutes) {
            None => PromptOutcome::Cancelled,
            Some(Ok(minutes)) => PromptOutcome::Minutes(minutes),
            Some(Err(_)) => PromptOutcome::Invalid,
        }
    }
}

/// Parse a timer value in whole minutes; zero is allowed, negatives are not
pub fn parse_minutes(input: &str) -> Result<u64, InputError> {
    let value: i64 = input.trim().parse().map_err(|_| InputError::InvalidTime)?;
    u64::try_from(value).map_err(|_| InputError::InvalidTime)
}
