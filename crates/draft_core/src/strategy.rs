//! Per-hero strategy documents.
//!
//! Strategy text lives in a directory with one JSON file per hero, named after
//! the hero id (`axe.json`, `crystal_maiden.json`, ...). A document may be flat
//! or wrap its content in a `strategies` object:
//!
//! ```json
//! {
//!   "hero_id": "npc_dota_hero_axe",
//!   "strategies": {
//!     "item_suggestions": ["Blink Dagger", "Blade Mail"],
//!     "counter_tips": ["Keep distance so he can't initiate with Berserker's Call."],
//!     "general_tips": ["Jump in with Blink Dagger and call as many enemies as possible."]
//!   }
//! }
//! ```
//!
//! `item_suggestions` and `counter_tips` are recognized lists. Every other key
//! is kept as a free-text section whose value is a string or a list of strings.
//! `hero_id`, when present, takes precedence over the file name.
//!
//! Heroes without a document are fine: [`StrategyStore::get`] hands out an
//! empty document for them.

use std::collections::{BTreeMap, HashMap};

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::DataLoadError;
use crate::hero::HeroId;
use crate::utils::read_json;

/// Section name of the general advice for playing a hero.
pub const GENERAL_TIPS: &str = "general_tips";

static NO_DATA: StrategyDocument = StrategyDocument {
    item_suggestions: Vec::new(),
    counter_tips: Vec::new(),
    sections: BTreeMap::new(),
};

/// Authored strategy text for one hero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDocument {
    pub item_suggestions: Vec<String>,
    pub counter_tips: Vec<String>,
    /// Free-text sections keyed by section name, each an ordered list of lines.
    pub sections: BTreeMap<String, Vec<String>>,
}

impl StrategyDocument {
    /// The shared "no strategy data" document.
    pub fn no_data() -> &'static StrategyDocument {
        &NO_DATA
    }

    /// Lines of a free-text section, or an empty slice if the section is absent.
    pub fn section(&self, name: &str) -> &[String] {
        self.sections.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn general_tips(&self) -> &[String] {
        self.section(GENERAL_TIPS)
    }

    /// `true` when the document holds no text at all.
    pub fn is_empty(&self) -> bool {
        self.item_suggestions.is_empty()
            && self.counter_tips.is_empty()
            && self.sections.values().all(Vec::is_empty)
    }
}

/// Strategy documents keyed by hero id.
#[derive(Debug, Clone, Default)]
pub struct StrategyStore {
    documents: HashMap<HeroId, StrategyDocument>,
}

impl StrategyStore {
    /// Load every `*.json` document in `directory`.
    ///
    /// Other files are ignored. A missing directory gives an empty store. A
    /// malformed document, two documents for the same hero, or a path that
    /// exists but is not a directory fail the load.
    pub fn load(directory: &Utf8Path) -> Result<Self, DataLoadError> {
        let std_path = directory.as_std_path();
        if std_path.exists() && !std_path.is_dir() {
            return Err(DataLoadError::NotADirectory(directory.to_path_buf()));
        }
        if !std_path.is_dir() {
            tracing::warn!(
                "Strategy directory {} not found, no strategy data available",
                directory
            );
            return Ok(Self::default());
        }

        let mut documents = HashMap::new();
        for path in list_documents(directory)? {
            let raw: RawStrategyFile = read_json(&path)?;

            let id = match raw.hero_id.as_deref() {
                Some(hero_id) => HeroId::new(hero_id),
                None => HeroId::new(path.file_stem().unwrap_or_default()),
            };
            if id.as_str().is_empty() {
                return Err(DataLoadError::EmptyId(path));
            }
            if documents.contains_key(&id) {
                return Err(DataLoadError::DuplicateStrategy { id, path });
            }

            tracing::debug!("Loaded strategy for '{}' from {}", id, path);
            documents.insert(id, raw.into_document());
        }

        tracing::info!("Loaded strategies for {} heroes", documents.len());
        Ok(Self { documents })
    }

    pub(crate) fn from_documents(
        documents: impl IntoIterator<Item = (HeroId, StrategyDocument)>,
    ) -> Self {
        Self {
            documents: documents.into_iter().collect(),
        }
    }

    /// The hero's document, or [`StrategyDocument::no_data`] if there is none.
    pub fn get(&self, hero_id: &HeroId) -> &StrategyDocument {
        self.documents
            .get(hero_id)
            .unwrap_or(StrategyDocument::no_data())
    }

    pub fn contains(&self, hero_id: &HeroId) -> bool {
        self.documents.contains_key(hero_id)
    }

    /// Ids of all heroes with a document, sorted.
    pub fn hero_ids(&self) -> Vec<&HeroId> {
        let mut ids: Vec<_> = self.documents.keys().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// `*.json` files directly inside `directory`, sorted by path.
fn list_documents(directory: &Utf8Path) -> Result<Vec<Utf8PathBuf>, DataLoadError> {
    let entries =
        std::fs::read_dir(directory.as_std_path()).map_err(|e| DataLoadError::io(directory, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DataLoadError::io(directory, e))?;
        let path = match Utf8PathBuf::from_path_buf(entry.path()) {
            Ok(p) => p,
            Err(p) => {
                tracing::warn!("Skipping non-UTF-8 path: {}", p.display());
                continue;
            }
        };

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if !is_json || !path.as_std_path().is_file() {
            continue;
        }
        paths.push(path);
    }

    paths.sort();
    Ok(paths)
}

#[derive(Deserialize)]
struct RawStrategyFile {
    #[serde(default)]
    hero_id: Option<String>,
    #[serde(default)]
    strategies: Option<RawStrategies>,
    #[serde(flatten)]
    inline: RawStrategies,
}

#[derive(Deserialize)]
struct RawStrategies {
    #[serde(default)]
    item_suggestions: Vec<String>,
    #[serde(default)]
    counter_tips: Vec<String>,
    #[serde(flatten)]
    sections: BTreeMap<String, SectionText>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SectionText {
    Text(String),
    Lines(Vec<String>),
}

impl SectionText {
    fn into_lines(self) -> Vec<String> {
        match self {
            SectionText::Text(text) => clean_lines(vec![text]),
            SectionText::Lines(lines) => clean_lines(lines),
        }
    }
}

impl RawStrategyFile {
    fn into_document(self) -> StrategyDocument {
        let mut document = StrategyDocument::default();
        let parts = std::iter::once(self.inline).chain(self.strategies);
        for part in parts {
            document
                .item_suggestions
                .extend(clean_lines(part.item_suggestions));
            document.counter_tips.extend(clean_lines(part.counter_tips));
            for (name, text) in part.sections {
                document
                    .sections
                    .entry(name)
                    .or_default()
                    .extend(text.into_lines());
            }
        }
        document
    }
}

fn clean_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
