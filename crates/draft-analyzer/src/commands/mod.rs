mod analyze;
mod config;
mod heroes;

pub use analyze::{analyze_draft, AnalyzeDraftArgs};
pub use config::{reset_config, set_data_path, show_config};
pub use heroes::{list_heroes, ListHeroesArgs};
