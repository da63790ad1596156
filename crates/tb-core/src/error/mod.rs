use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{entity} name already exists: {name} {location}")]
    DuplicateName {
        entity: &'static str,
        name: String,
        location: ErrorLocation,
    },

    #[error("Task title already exists on this board: {title} {location}")]
    DuplicateTitle {
        title: String,
        location: ErrorLocation,
    },

    #[error("User already on this board: {email} {location}")]
    DuplicateUser {
        email: String,
        location: ErrorLocation,
    },

    #[error("{field} cannot be blank {location}")]
    EmptyField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Board {board_id} has no columns {location}")]
    NoColumns {
        board_id: String,
        location: ErrorLocation,
    },

    #[error("Board not found: {id} {location}")]
    BoardNotFound { id: String, location: ErrorLocation },

    #[error("Column not found: {id} {location}")]
    ColumnNotFound { id: String, location: ErrorLocation },

    #[error("Task not found: {id} {location}")]
    TaskNotFound { id: String, location: ErrorLocation },

    #[error("Subtask not found: {id} {location}")]
    SubtaskNotFound { id: String, location: ErrorLocation },

    #[error("User not found: {email} {location}")]
    UserNotFound {
        email: String,
        location: ErrorLocation,
    },

    #[error("Column {column_id} still has tasks; a target column is required {location}")]
    MigrationTargetRequired {
        column_id: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("No active board selected {location}")]
    NoActiveBoard { location: ErrorLocation },

    #[error("A drag gesture is in progress; the board is read-only {location}")]
    GestureInProgress { location: ErrorLocation },
}

impl CoreError {
    #[track_caller]
    pub fn duplicate_name<S: Into<String>>(entity: &'static str, name: S) -> Self {
        Self::DuplicateName {
            entity,
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_field(field: &'static str) -> Self {
        Self::EmptyField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn board_not_found<S: Into<String>>(id: S) -> Self {
        Self::BoardNotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn column_not_found<S: Into<String>>(id: S) -> Self {
        Self::ColumnNotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn task_not_found<S: Into<String>>(id: S) -> Self {
        Self::TaskNotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CoreResult<T> = StdResult<T, CoreError>;
