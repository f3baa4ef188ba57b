//! Hero records and the hero catalog.
//!
//! The [`HeroCatalog`] is built once at startup from two files:
//!
//! 1. **`heroes.json`**: the basic hero definitions.
//! 2. **`normalized_heroes.json`**: canonical display names, aliases and image
//!    paths. Where both files set the same field, the normalized file wins.
//!    Aliases from both files are kept.
//!
//! Either file may be a JSON object keyed by hero id or an array of records.
//! A listed record is identified by `safe_name`, a textual `id`, an internal
//! `npc_dota_hero_*` `name`, or a numeric `id`, in that order. Its display name
//! comes from `localized_name`, `display_name` or a `name` that is not internal:
//!
//! ```json
//! {
//!   "npc_dota_hero_axe": "Axe",
//!   "crystal_maiden": {
//!     "display_name": "Crystal Maiden",
//!     "aliases": ["CM", "Rylai"],
//!     "image_path": "images/crystal_maiden.png"
//!   }
//! }
//! ```
//!
//! After loading, the catalog answers id lookups ([`get`](HeroCatalog::get)),
//! display-name lookups ([`by_name`](HeroCatalog::by_name)) and picker searches
//! ([`find`](HeroCatalog::find)).

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{DataLoadError, NotFoundError};
use crate::utils::{is_json_array, non_empty, parse_json, read_required};

/// Prefix used by the game's internal hero names.
const INTERNAL_PREFIX: &str = "npc_dota_hero_";

/// Stable hero identifier.
///
/// Ids are normalized on construction: surrounding whitespace is trimmed, ASCII
/// letters are lowercased and the game's internal `npc_dota_hero_` prefix is
/// removed. `"npc_dota_hero_axe"`, `"Axe"` and `"axe"` are all the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct HeroId(String);

impl HeroId {
    pub fn new(raw: &str) -> Self {
        let lowered = raw.trim().to_ascii_lowercase();
        let id = lowered
            .strip_prefix(INTERNAL_PREFIX)
            .map(str::to_string)
            .unwrap_or(lowered);
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HeroId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for HeroId {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<HeroId> for String {
    fn from(id: HeroId) -> Self {
        id.0
    }
}

/// A playable hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    id: HeroId,
    display_name: String,
    aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_ref: Option<Utf8PathBuf>,
}

impl Hero {
    pub fn new(id: impl Into<HeroId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            aliases: Vec::new(),
            image_ref: None,
        }
    }

    /// Add search aliases. Blank aliases and case-insensitive repeats are dropped.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for alias in aliases {
            push_alias(&mut self.aliases, alias.into());
        }
        self
    }

    pub fn with_image(mut self, image_ref: impl Into<Utf8PathBuf>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    pub fn id(&self) -> &HeroId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Image path relative to the data directory, if the data files name one.
    pub fn image_ref(&self) -> Option<&Utf8Path> {
        self.image_ref.as_deref()
    }

    /// Best match of `query` (already lowercased) against the display name and aliases.
    fn match_tier(&self, query: &str) -> Option<MatchTier> {
        std::iter::once(self.display_name.as_str())
            .chain(self.aliases.iter().map(String::as_str))
            .filter_map(|name| MatchTier::of(&name.to_lowercase(), query))
            .min()
    }
}

fn push_alias(aliases: &mut Vec<String>, alias: String) {
    let alias = alias.trim();
    if alias.is_empty() || aliases.iter().any(|a| a.eq_ignore_ascii_case(alias)) {
        return;
    }
    aliases.push(alias.to_string());
}

/// How well a name matches a search query. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchTier {
    Exact,
    Prefix,
    Substring,
}

impl MatchTier {
    const ALL: [MatchTier; 3] = [MatchTier::Exact, MatchTier::Prefix, MatchTier::Substring];

    fn of(name: &str, query: &str) -> Option<Self> {
        if name == query {
            Some(Self::Exact)
        } else if name.starts_with(query) {
            Some(Self::Prefix)
        } else if name.contains(query) {
            Some(Self::Substring)
        } else {
            None
        }
    }
}

/// Paths of the two hero definition files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroSources {
    /// Basic hero definitions (`heroes.json`).
    pub heroes: Utf8PathBuf,
    /// Canonical overrides (`normalized_heroes.json`).
    pub normalized: Utf8PathBuf,
}

/// All known heroes, keyed by id.
///
/// Heroes are stored sorted by display name so that listing and searching are
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct HeroCatalog {
    heroes: Vec<Hero>,
    by_id: HashMap<HeroId, usize>,
    by_name: HashMap<String, usize>,
}

impl HeroCatalog {
    /// Load and merge both hero files.
    ///
    /// Fails if either file is missing or malformed, if one file lists the same
    /// hero twice, if two heroes share a display name, or if a hero ends up with
    /// no display name at all.
    pub fn load(sources: &HeroSources) -> Result<Self, DataLoadError> {
        let basic = read_hero_file(&sources.heroes)?;
        let normalized = read_hero_file(&sources.normalized)?;

        tracing::debug!(
            "Read {} basic and {} normalized hero records",
            basic.len(),
            normalized.len()
        );

        let mut merged: BTreeMap<HeroId, RawHeroFields> = basic.into_iter().collect();
        for (id, fields) in normalized {
            match merged.get_mut(&id) {
                Some(existing) => existing.overlay(fields),
                None => {
                    merged.insert(id, fields);
                }
            }
        }

        let heroes = merged
            .into_iter()
            .map(|(id, fields)| fields.into_hero(id))
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Self::from_heroes(heroes)?;
        tracing::info!("Loaded {} heroes", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from heroes with distinct ids.
    pub(crate) fn from_heroes(mut heroes: Vec<Hero>) -> Result<Self, DataLoadError> {
        heroes.sort_by(|a, b| {
            a.display_name
                .to_lowercase()
                .cmp(&b.display_name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });

        let mut by_id = HashMap::with_capacity(heroes.len());
        let mut by_name: HashMap<String, usize> = HashMap::with_capacity(heroes.len());
        for (index, hero) in heroes.iter().enumerate() {
            by_id.insert(hero.id.clone(), index);

            match by_name.entry(hero.display_name.to_lowercase()) {
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
                Entry::Occupied(slot) => {
                    return Err(DataLoadError::DuplicateName {
                        name: hero.display_name.clone(),
                        first: heroes[*slot.get()].id.clone(),
                        second: hero.id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            heroes,
            by_id,
            by_name,
        })
    }

    /// Look up a hero by id.
    pub fn get(&self, id: &HeroId) -> Result<&Hero, NotFoundError> {
        self.by_id
            .get(id)
            .map(|&index| &self.heroes[index])
            .ok_or_else(|| NotFoundError(id.clone()))
    }

    /// Look up a hero by display name, ignoring case.
    pub fn by_name(&self, display_name: &str) -> Option<&Hero> {
        self.by_name
            .get(&display_name.trim().to_lowercase())
            .map(|&index| &self.heroes[index])
    }

    /// Resolve free text typed into a picker: an id, a display name, or an alias
    /// that belongs to exactly one hero.
    pub fn resolve(&self, text: &str) -> Result<&Hero, NotFoundError> {
        let id = HeroId::new(text);
        if let Ok(hero) = self.get(&id) {
            return Ok(hero);
        }
        if let Some(hero) = self.by_name(text) {
            return Ok(hero);
        }

        let needle = text.trim();
        let mut alias_matches = self
            .heroes
            .iter()
            .filter(|hero| hero.aliases.iter().any(|a| a.eq_ignore_ascii_case(needle)));
        match (alias_matches.next(), alias_matches.next()) {
            (Some(hero), None) => Ok(hero),
            _ => Err(NotFoundError(id)),
        }
    }

    /// Search heroes by display name and alias, ignoring case.
    ///
    /// Exact matches come first, then prefix matches, then substring matches.
    /// Within each group heroes are in alphabetical order. An empty query yields
    /// every hero in alphabetical order.
    pub fn find(&self, query: &str) -> Matches<'_> {
        Matches {
            catalog: self,
            query: query.trim().to_lowercase(),
            tier: 0,
            position: 0,
        }
    }

    /// All heroes in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.iter()
    }

    pub fn contains(&self, id: &HeroId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }
}

/// Lazy search results produced by [`HeroCatalog::find`].
///
/// Walks the alphabetical hero list once per match tier, yielding each hero in
/// the pass for its best tier.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    catalog: &'a HeroCatalog,
    query: String,
    tier: usize,
    position: usize,
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a Hero;

    fn next(&mut self) -> Option<Self::Item> {
        let catalog = self.catalog;
        let heroes = &catalog.heroes;

        if self.query.is_empty() {
            let hero = heroes.get(self.position)?;
            self.position += 1;
            return Some(hero);
        }

        while let Some(&tier) = MatchTier::ALL.get(self.tier) {
            while let Some(hero) = heroes.get(self.position) {
                self.position += 1;
                if hero.match_tier(&self.query) == Some(tier) {
                    return Some(hero);
                }
            }
            self.tier += 1;
            self.position = 0;
        }

        None
    }
}

/// One value of a keyed hero file: a bare display name or a full record.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawHeroEntry {
    Name(String),
    Record(RawHeroRecord),
}

/// Exported hero lists carry a numeric `id` next to the internal name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawHeroKey {
    Text(String),
    Number(u64),
}

/// A hero record as found in either file.
///
/// Name fields are kept apart: real data often has both an internal `name`
/// (`npc_dota_hero_axe`) and a `localized_name` (`Axe`) on the same record.
#[derive(Debug, Default, Deserialize)]
struct RawHeroRecord {
    #[serde(default)]
    id: Option<RawHeroKey>,
    #[serde(default)]
    safe_name: Option<String>,
    #[serde(default)]
    localized_name: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(default)]
    image_path: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

fn is_internal_name(name: &str) -> bool {
    name.trim().to_ascii_lowercase().starts_with(INTERNAL_PREFIX)
}

impl RawHeroRecord {
    /// Id of a listed record: `safe_name`, a textual `id`, an internal `name`,
    /// a numeric `id`, then any `name`.
    fn key(&self) -> Option<String> {
        let safe_name = non_empty(self.safe_name.clone());
        let text_id = match &self.id {
            Some(RawHeroKey::Text(id)) => non_empty(Some(id.clone())),
            _ => None,
        };
        let internal_name = self.name.clone().filter(|name| is_internal_name(name));
        let number_id = match self.id {
            Some(RawHeroKey::Number(id)) => Some(id.to_string()),
            _ => None,
        };

        safe_name
            .or(text_id)
            .or(internal_name)
            .or(number_id)
            .or_else(|| non_empty(self.name.clone()))
    }

    /// Display name from `localized_name`, `display_name` or a non-internal `name`.
    fn into_fields(self) -> RawHeroFields {
        let display_name = non_empty(self.localized_name)
            .or_else(|| non_empty(self.display_name))
            .or_else(|| non_empty(self.name).filter(|name| !is_internal_name(name)));

        RawHeroFields {
            display_name,
            aliases: self.aliases,
            image_path: non_empty(self.image_path).or_else(|| non_empty(self.image)),
        }
    }
}

/// Hero fields after name resolution, ready to be merged.
#[derive(Debug, Default)]
struct RawHeroFields {
    display_name: Option<String>,
    aliases: Vec<String>,
    image_path: Option<String>,
}

impl RawHeroFields {
    /// Apply fields from a higher-precedence record.
    fn overlay(&mut self, other: RawHeroFields) {
        if let Some(name) = non_empty(other.display_name) {
            self.display_name = Some(name);
        }
        if let Some(image) = non_empty(other.image_path) {
            self.image_path = Some(image);
        }
        self.aliases.extend(other.aliases);
    }

    fn into_hero(self, id: HeroId) -> Result<Hero, DataLoadError> {
        let display_name =
            non_empty(self.display_name).ok_or_else(|| DataLoadError::MissingDisplayName(id.clone()))?;

        let mut hero = Hero::new(id, display_name).with_aliases(self.aliases);
        if let Some(image) = non_empty(self.image_path) {
            hero = hero.with_image(image);
        }
        Ok(hero)
    }
}

/// Read one hero file into normalized `(id, fields)` pairs.
///
/// The top-level JSON type picks the shape, so parse errors keep their line and
/// column.
fn read_hero_file(path: &Utf8Path) -> Result<Vec<(HeroId, RawHeroFields)>, DataLoadError> {
    let bytes = read_required(path)?;

    let entries: Vec<(String, RawHeroFields)> = if is_json_array(&bytes) {
        let records: Vec<RawHeroRecord> = parse_json(path, &bytes)?;
        records
            .into_iter()
            .map(|record| (record.key().unwrap_or_default(), record.into_fields()))
            .collect()
    } else {
        let keyed: BTreeMap<String, RawHeroEntry> = parse_json(path, &bytes)?;
        keyed
            .into_iter()
            .map(|(key, entry)| {
                let fields = match entry {
                    RawHeroEntry::Name(name) => RawHeroFields {
                        display_name: Some(name),
                        ..Default::default()
                    },
                    RawHeroEntry::Record(record) => record.into_fields(),
                };
                (key, fields)
            })
            .collect()
    };

    let mut seen = HashSet::with_capacity(entries.len());
    let mut records = Vec::with_capacity(entries.len());
    for (key, fields) in entries {
        let id = HeroId::new(&key);
        if id.as_str().is_empty() {
            return Err(DataLoadError::EmptyId(path.to_path_buf()));
        }
        if !seen.insert(id.clone()) {
            return Err(DataLoadError::DuplicateHero {
                id,
                path: path.to_path_buf(),
            });
        }
        records.push((id, fields));
    }

    Ok(records)
}
