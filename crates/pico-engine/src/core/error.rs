use std::path::PathBuf;

use pico_hash::HashError;
use thiserror::Error;

use crate::coords::Dim;

/// Errors returned by [`Pico`](super::Pico) operations.
///
/// Backend failures (missing files, window or GPU trouble) arrive as
/// [`PicoError::Resource`] with the backend's diagnostic chain attached.
#[derive(Debug, Error)]
pub enum PicoError {
    #[error("{what}: {source:#}")]
    Resource {
        what: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("invalid size (physical {}x{}, logical {}x{}): {reason}", physical.w, physical.h, logical.w, logical.h)]
    InvalidSize {
        physical: Dim,
        logical: Dim,
        reason: &'static str,
    },

    #[error("no font set")]
    NoFont,

    #[error("{} is cached as a {found}, not a {expected}", path.display())]
    AssetKind {
        path: PathBuf,
        expected: &'static str,
        found: &'static str,
    },

    #[error("asset cache: {0}")]
    Cache(#[from] HashError),

    /// The window was closed outside expert mode.
    #[error("quit requested")]
    Quit,

    #[error("event source closed: {0:#}")]
    EventsClosed(#[source] anyhow::Error),

    #[error("pico is shut down")]
    Inactive,
}

impl PicoError {
    pub(crate) fn resource(what: impl Into<String>) -> impl FnOnce(anyhow::Error) -> PicoError {
        let what = what.into();
        move |source| {
            log::error!("{what}: {source:#}");
            PicoError::Resource { what, source }
        }
    }
}

pub type Result<T, E = PicoError> = std::result::Result<T, E>;
