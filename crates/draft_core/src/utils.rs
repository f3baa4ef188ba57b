//! File helpers shared by the catalog and store loaders.

use camino::Utf8Path;
use serde::de::DeserializeOwned;

use crate::error::DataLoadError;

/// Read a file that must exist.
///
/// A missing file is reported as [`DataLoadError::MissingFile`] rather than a
/// generic IO error so the shell can tell the user which file to provide.
pub(crate) fn read_required(path: &Utf8Path) -> Result<Vec<u8>, DataLoadError> {
    if !path.as_std_path().is_file() {
        return Err(DataLoadError::MissingFile(path.to_path_buf()));
    }
    std::fs::read(path.as_std_path()).map_err(|e| DataLoadError::io(path, e))
}

/// Read and deserialize a JSON file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, DataLoadError> {
    let bytes = std::fs::read(path.as_std_path()).map_err(|e| DataLoadError::io(path, e))?;
    parse_json(path, &bytes)
}

/// Deserialize JSON read from `path`, keeping serde's line and column in the error.
pub(crate) fn parse_json<T: DeserializeOwned>(
    path: &Utf8Path,
    bytes: &[u8],
) -> Result<T, DataLoadError> {
    serde_json::from_slice(bytes).map_err(|e| DataLoadError::malformed(path, e))
}

/// Whether the JSON document in `bytes` is an array at the top level.
pub(crate) fn is_json_array(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == b'[')
}

/// Trim a string and drop it if nothing is left.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
