use crate::error::JournalError;

pub type JournalResult<T> = Result<T, JournalError>;
