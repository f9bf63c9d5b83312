use std::num::ParseIntError;

use thiserror::Error;

/// Failures raised by [`crate::store::KeyedRepository`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError<K> {
    /// Insert targeted a key that is already occupied
    #[error("Item with key {0} already exists.")]
    DuplicateKey(K),
    /// Fetch, replace or remove targeted a missing key
    #[error("Item with key {0} not found.")]
    NotFound(K),
}

/// Failures of a single menu command, rendered back to the console
#[derive(Debug, Error)]
pub enum InputError {
    #[error("'{input}' is not a valid product ID: {source}")]
    InvalidId {
        input: String,
        source: ParseIntError,
    },

    #[error(transparent)]
    Repo(#[from] RepoError<i32>),
}

/// Failures that end a console session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("console input closed")]
    InputClosed,
}

/// Outcome of a failed menu command: either reported and recovered from,
/// or fatal to the session
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<RepoError<i32>> for CommandError {
    fn from(err: RepoError<i32>) -> Self {
        CommandError::Input(InputError::Repo(err))
    }
}
