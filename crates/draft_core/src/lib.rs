//! Core data and lookup logic for the Dota 2 draft analyzer.
//!
//! This crate loads the static hero data that ships with the analyzer and
//! answers the questions a draft screen asks:
//!
//! - **Hero catalog**: every hero with its display name, search aliases and
//!   image, merged from `heroes.json` and `normalized_heroes.json`
//! - **Strategy store**: authored item suggestions, counter tips and free-text
//!   sections, one JSON document per hero
//! - **Draft session**: up to five heroes per side, each hero on one side only
//! - **Analysis lookup**: the strategy text for every drafted hero, grouped by
//!   side, plus the counter items named in the enemies' counter tips
//!
//! # Example
//!
//! ```no_run
//! use draft_core::{DataLayout, DraftData, DraftSession, HeroId, Side};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = DraftData::load(DataLayout::from_root("data"))?;
//!
//! let mut session = DraftSession::new();
//! session.add(Side::Ally, HeroId::new("axe"))?;
//! session.add(Side::Enemy, data.catalog().resolve("Crystal Maiden")?.id().clone())?;
//!
//! for panel in data.lookup().analyze(&session)?.panels() {
//!     println!("{}\n{}", panel.title, panel.default_body());
//! }
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod counter_items;
pub mod data;
pub mod draft;
pub mod error;
pub mod format;
pub mod hero;
pub mod strategy;
mod utils;

pub use analysis::{
    counter_item_panel, AnalysisEntry, AnalysisLookup, AnalysisResult, CounterItemMention,
};
pub use data::{DataLayout, DraftData};
pub use draft::{DraftSession, ParseSideError, Side, TEAM_SIZE};
pub use error::{DataLoadError, DraftError, Error, NotFoundError};
pub use format::{bullet_list, Panel, PanelKind};
pub use hero::{Hero, HeroCatalog, HeroId, HeroSources, Matches};
pub use strategy::{StrategyDocument, StrategyStore};
