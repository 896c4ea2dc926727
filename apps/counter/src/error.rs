//! # Counter Error Type
//!
//! Unified error type for the counter front-end.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  operator types "add 9"                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CounterSession::add_selection(9)                                       │
//! │         │                                                               │
//! │         ├── no active order ──► CounterError::NoActiveOrder            │
//! │         │                                                               │
//! │         └── MenuCatalog::get_item(9) ──► CoreError::PositionOutOfRange │
//! │                                                 │                       │
//! │                                                 ▼                       │
//! │                                  CounterError::Core (via From)          │
//! │                                                 │                       │
//! │                                                 ▼                       │
//! │      "[NO_SELECTION] Select a menu item between 1 and 5"               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operator mistakes are printed and the loop carries on. Only I/O failures
//! on the terminal itself end the session.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use cafe_core::CoreError;

/// Errors surfaced by the counter app.
#[derive(Debug, Error)]
pub enum CounterError {
    /// An order command was issued before `start`.
    #[error("No active order")]
    NoActiveOrder,

    /// Remove or finish on an order with nothing in it.
    #[error("Empty order: {0}")]
    EmptyOrder(&'static str),

    /// An order line number outside `1..=len`.
    #[error("Order line {line} does not exist (order has {len} lines)")]
    InvalidLine { line: usize, len: usize },

    /// Input that is not a known command.
    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),

    /// A command that needs a number got something else.
    #[error("'{command}' needs a number, e.g. '{command} 1'")]
    BadArgument { command: String },

    /// Configuration was readable but not usable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file is not valid TOML for `CounterConfig`.
    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to encode receipt: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Error classification shown in brackets before each message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No order has been started.
    NoOrder,
    /// The order has nothing in it.
    EmptyOrder,
    /// A menu position or order line that does not exist.
    NoSelection,
    /// Input the counter could not understand.
    BadInput,
    /// Invalid menu data or settings.
    Validation,
    /// Broken configuration.
    Config,
    /// Terminal or encoding failure.
    Internal,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::NoOrder => "NO_ORDER",
            ErrorCode::EmptyOrder => "EMPTY_ORDER",
            ErrorCode::NoSelection => "NO_SELECTION",
            ErrorCode::BadInput => "BAD_INPUT",
            ErrorCode::Validation => "VALIDATION",
            ErrorCode::Config => "CONFIG",
            ErrorCode::Internal => "INTERNAL",
        };
        f.write_str(code)
    }
}

impl CounterError {
    /// Classifies the error for display.
    pub fn code(&self) -> ErrorCode {
        match self {
            CounterError::NoActiveOrder => ErrorCode::NoOrder,
            CounterError::EmptyOrder(_) => ErrorCode::EmptyOrder,
            CounterError::InvalidLine { .. } => ErrorCode::NoSelection,
            CounterError::UnknownCommand(_) | CounterError::BadArgument { .. } => {
                ErrorCode::BadInput
            }
            CounterError::Config(_) | CounterError::ConfigParse(_) => ErrorCode::Config,
            CounterError::Json(_) | CounterError::Io(_) => ErrorCode::Internal,
            CounterError::Core(core) => match core {
                CoreError::PositionOutOfRange { .. } | CoreError::IndexOutOfRange { .. } => {
                    ErrorCode::NoSelection
                }
                CoreError::InvalidItemType { .. }
                | CoreError::InvalidAmount { .. }
                | CoreError::Validation(_) => ErrorCode::Validation,
            },
        }
    }

    /// The line printed to the operator.
    pub fn user_message(&self) -> String {
        let text = match self {
            CounterError::NoActiveOrder => "Start a new order first!".to_string(),
            CounterError::UnknownCommand(input) => {
                format!("Unknown command '{}'. Type 'help' for a list.", input)
            }
            CounterError::InvalidLine { len, .. } => {
                format!("Select an order line between 1 and {}", len)
            }
            CounterError::Core(CoreError::PositionOutOfRange { size, .. }) => {
                format!("Select a menu item between 1 and {}", size)
            }
            other => other.to_string(),
        };
        format!("[{}] {}", self.code(), text)
    }
}

/// Convenience type alias for counter results.
pub type CounterResult<T> = Result<T, CounterError>;
