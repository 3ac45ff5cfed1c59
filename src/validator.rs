use crate::domain::constants::{MAX_AGE, MIN_AGE};
use crate::domain::models::Record;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AgeError {
    #[error("User {name} is under 18.")]
    UnderAge { name: String },
    #[error("User {name}'s age {age} is not valid.")]
    AgeNotValid { name: String, age: i128 },
}

pub type Outcome<'a> = Result<&'a Record, AgeError>;

/// Checks `record.age` against `MIN_AGE..=MAX_AGE`.
///
/// Low ages are rejected before high ones, so any negative age reports as under 18.
/// On success the input record is handed back untouched.
pub fn validate_age(record: &Record) -> Outcome<'_> {
    if record.age < MIN_AGE {
        Err(AgeError::UnderAge {
            name: record.name.clone(),
        })
    } else if record.age > MAX_AGE {
        Err(AgeError::AgeNotValid {
            name: record.name.clone(),
            age: record.age,
        })
    } else {
        Ok(record)
    }
}
