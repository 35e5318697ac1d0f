use crate::domain::model::Gender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AllocError {
    #[error("Please fill out the {field} field")]
    IncompleteInput { field: String },

    #[error("Student (Roll: {roll}, Year: {year}, Gender: {gender}) is already allocated")]
    DuplicateAllocation {
        roll: String,
        year: String,
        gender: Gender,
    },

    #[error("{dorm} is a {required}-only dormitory")]
    GenderMismatch { dorm: String, required: Gender },

    #[error("{dorm} is full (capacity: {capacity})")]
    DormitoryFull { dorm: String, capacity: usize },

    #[error("No student with roll {roll} found in {dorm}")]
    NotFound { roll: String, dorm: String },

    #[error("Unknown dormitory: {dorm}")]
    UnknownDormitory { dorm: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, AllocError>;
