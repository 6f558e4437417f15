use fixings_ingest::IngestError;
use fixings_output::OutputError;
use thiserror::Error;

/// Coarse classification of pipeline failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The feed has no recognizable data region or an unreadable table.
    MalformedFeed,
    /// The requested series is not in the header.
    UnknownColumn,
    /// The input could not be read or the output could not be written.
    Io,
}

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

impl NormalizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Ingest(IngestError::UnknownColumn { .. }) => ErrorKind::UnknownColumn,
            Self::Ingest(err) if err.is_malformed_feed() => ErrorKind::MalformedFeed,
            Self::Ingest(_) | Self::Output(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
