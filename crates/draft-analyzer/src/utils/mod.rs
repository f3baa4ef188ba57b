use camino::Utf8PathBuf;
use draft_core::{DataLayout, DraftData};
use miette::Result;

use crate::errors::CliError;

pub mod config;

#[macro_export]
macro_rules! println_pad {
    ($($arg:tt)*) => {{
        let __s = format!($($arg)*);
        for __line in __s.lines() {
            println!("    {}", __line);
        }
    }};
}

/// Loads hero data from `data_path`, turning load failures into diagnostics.
pub fn load_data(data_path: Utf8PathBuf) -> Result<DraftData> {
    DraftData::load(DataLayout::from_root(data_path.clone()))
        .map_err(|e| CliError::data_load(data_path, e).into())
}
