use crate::domain::constants::DEMO_ROSTER;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One subject to validate. Any age is representable; range checks live in the validator.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub age: i128,
}

impl Record {
    pub fn new(name: impl Into<String>, age: i128) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

pub fn demo_roster() -> Vec<Record> {
    DEMO_ROSTER
        .iter()
        .map(|(name, age)| Record::new(*name, *age))
        .collect()
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct OutcomeReport {
    pub name: String,
    pub age: i128,
    pub valid: bool,
    pub message: String,
}
