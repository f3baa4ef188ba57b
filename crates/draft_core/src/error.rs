//! Error types for draft data and session operations.
//!
//! Failures fall into three classes, each with its own type:
//!
//! - [`DataLoadError`]: a data file is missing or malformed. Fatal at startup.
//! - [`NotFoundError`]: a hero id that the catalog does not know.
//! - [`DraftError`]: a rejected draft change. The session is left untouched.
//!
//! Missing strategy data for a known hero is not an error; the store hands out
//! an empty document instead.
//!
//! [`Error`] wraps all three so that callers which don't care about the class
//! can use `?` throughout.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::draft::Side;
use crate::hero::HeroId;

/// Any error produced by this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// A data file could not be turned into catalog or store records.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// A required file does not exist.
    #[error("Required data file not found: {0}")]
    MissingFile(Utf8PathBuf),

    /// A path that must be a directory points at something else.
    #[error("Expected a directory: {0}")]
    NotADirectory(Utf8PathBuf),

    /// Reading a file or directory failed.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON or does not have the expected shape.
    #[error("Malformed data in {path}: {source}")]
    Malformed {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two records in one file normalize to the same hero id.
    #[error("Duplicate hero id '{id}' in {path}")]
    DuplicateHero { id: HeroId, path: Utf8PathBuf },

    /// Two heroes share a display name (compared case-insensitively).
    #[error("Display name '{name}' is used by both '{first}' and '{second}'")]
    DuplicateName {
        name: String,
        first: HeroId,
        second: HeroId,
    },

    /// Neither hero file gives this hero a display name.
    #[error("Hero '{0}' has no display name")]
    MissingDisplayName(HeroId),

    /// A record carries an id that is empty after normalization.
    #[error("Empty hero id in {0}")]
    EmptyId(Utf8PathBuf),

    /// Two strategy documents resolve to the same hero.
    #[error("Duplicate strategy document for '{id}': {path}")]
    DuplicateStrategy { id: HeroId, path: Utf8PathBuf },
}

/// Lookup of a hero id that is not in the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Hero not found: {0}")]
pub struct NotFoundError(pub HeroId);

/// A draft change that would break the session invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("The {side} side already has {limit} heroes")]
    SideFull { side: Side, limit: usize },

    #[error("'{hero}' is already drafted on the {side} side")]
    AlreadyDrafted { hero: HeroId, side: Side },
}

impl DataLoadError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<Utf8PathBuf>, source: serde_json::Error) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }
}
