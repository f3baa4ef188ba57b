use camino::Utf8PathBuf;
use draft_core::{DataLoadError, DraftError, Side};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("Failed to load game data from {data_path}")]
    #[diagnostic(
        code(data::load_failed),
        help("Check that the data directory contains heroes.json, normalized_heroes.json and a howdoiplay_json/ folder, or point to it with --data-path")
    )]
    DataLoad {
        data_path: Utf8PathBuf,
        #[source]
        source: DataLoadError,
    },

    #[error("Unknown hero: {name}")]
    #[diagnostic(
        code(hero::not_found),
        help("Use 'draft-analyzer heroes {name}' to search for the hero's exact name")
    )]
    UnknownHero { name: String },

    #[error("Cannot add {name} to the {side} side")]
    #[diagnostic(code(draft::rejected))]
    DraftRejected {
        name: String,
        side: Side,
        #[source]
        source: DraftError,
    },

    #[error("No heroes selected")]
    #[diagnostic(
        code(draft::empty),
        help("Pick at least one hero with --ally or --enemy")
    )]
    EmptyDraft,

    #[error("Invalid max bullets: {provided}")]
    #[diagnostic(
        code(config::invalid_max_bullets),
        help("Panels need room for at least one line")
    )]
    InvalidMaxBullets { provided: usize },
}

impl CliError {
    pub fn data_load(data_path: Utf8PathBuf, source: DataLoadError) -> Self {
        Self::DataLoad { data_path, source }
    }

    pub fn unknown_hero(name: impl Into<String>) -> Self {
        Self::UnknownHero { name: name.into() }
    }

    pub fn draft_rejected(name: impl Into<String>, side: Side, source: DraftError) -> Self {
        Self::DraftRejected {
            name: name.into(),
            side,
            source,
        }
    }
}
