//! Loading all hero data from a data directory.
//!
//! [`DraftData`] owns the [`HeroCatalog`] and [`StrategyStore`] for the whole
//! application. Both are read-only once loaded; sessions and lookups borrow them.

use camino::{Utf8Path, Utf8PathBuf};

use crate::analysis::AnalysisLookup;
use crate::error::DataLoadError;
use crate::hero::{HeroCatalog, HeroSources};
use crate::strategy::StrategyStore;

/// Default file and directory names inside the data directory.
pub const HEROES_FILE: &str = "heroes.json";
pub const NORMALIZED_HEROES_FILE: &str = "normalized_heroes.json";
pub const STRATEGY_DIR: &str = "howdoiplay_json";

/// Where the data files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    /// Base directory; image paths in hero records are relative to it.
    pub root: Utf8PathBuf,
    pub heroes: HeroSources,
    pub strategy_dir: Utf8PathBuf,
}

impl DataLayout {
    /// The standard layout under `root`.
    pub fn from_root(root: impl Into<Utf8PathBuf>) -> Self {
        let root = root.into();
        Self {
            heroes: HeroSources {
                heroes: root.join(HEROES_FILE),
                normalized: root.join(NORMALIZED_HEROES_FILE),
            },
            strategy_dir: root.join(STRATEGY_DIR),
            root,
        }
    }

    /// Resolve a hero image reference against the data directory.
    pub fn image_path(&self, image_ref: &Utf8Path) -> Utf8PathBuf {
        self.root.join(image_ref)
    }
}

/// The loaded hero catalog and strategy store.
#[derive(Debug, Clone)]
pub struct DraftData {
    layout: DataLayout,
    catalog: HeroCatalog,
    strategies: StrategyStore,
}

impl DraftData {
    /// Load the catalog and the strategy store.
    ///
    /// Strategy documents for heroes the catalog doesn't know are kept but
    /// logged, since nothing will ever look them up.
    pub fn load(layout: DataLayout) -> Result<Self, DataLoadError> {
        tracing::info!("Loading game data from {}", layout.root);

        let catalog = HeroCatalog::load(&layout.heroes)?;
        let strategies = StrategyStore::load(&layout.strategy_dir)?;

        for id in strategies.hero_ids() {
            if !catalog.contains(id) {
                tracing::warn!("Strategy document for unknown hero '{}'", id);
            }
        }

        Ok(Self {
            layout,
            catalog,
            strategies,
        })
    }

    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    pub fn catalog(&self) -> &HeroCatalog {
        &self.catalog
    }

    pub fn strategies(&self) -> &StrategyStore {
        &self.strategies
    }

    pub fn lookup(&self) -> AnalysisLookup<'_> {
        AnalysisLookup::new(&self.catalog, &self.strategies)
    }
}
