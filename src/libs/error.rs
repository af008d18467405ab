//! Error taxonomy for the core library.
//!
//! Every failure surfaced by the db layer is one of three kinds, all of
//! them user-input errors the caller can correct and retry:
//!
//! - [`TrackerError::Conflict`]: the operation contradicts existing state
//!   (duplicate task name, a second timer while one is live, a state
//!   transition from the wrong status).
//! - [`TrackerError::Validation`]: the input itself is invalid (empty
//!   task name, manual entry ending before it starts).
//! - [`TrackerError::NotFound`]: the referenced task or entry id does not
//!   exist.
//!
//! Storage-level failures (I/O, corruption) are not wrapped; they
//! propagate through `anyhow` as-is and abort the current operation only.

use crate::libs::messages::Message;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("{0}")]
    Conflict(Message),
    #[error("{0}")]
    Validation(Message),
    #[error("{0}")]
    NotFound(Message),
}

impl TrackerError {
    /// The message carried by this error, for presentation-layer reuse.
    pub fn message(&self) -> &Message {
        match self {
            TrackerError::Conflict(msg) | TrackerError::Validation(msg) | TrackerError::NotFound(msg) => msg,
        }
    }
}
