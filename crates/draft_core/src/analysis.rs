//! Assembling display-ready results for a draft.
//!
//! [`AnalysisLookup`] borrows the catalog and the strategy store and turns a
//! [`DraftSession`] into an [`AnalysisResult`]: one entry per drafted hero,
//! allies first, each side in pick order. Everything in the result is text
//! taken from the strategy documents; nothing is scored or generated.

use serde::Serialize;

use crate::counter_items::{mentioned_items, COUNTER_ITEMS};
use crate::draft::{DraftSession, Side};
use crate::error::NotFoundError;
use crate::format::{Panel, PanelKind};
use crate::hero::{Hero, HeroCatalog};
use crate::strategy::{StrategyDocument, StrategyStore};

/// Read-only lookup over the loaded hero data.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisLookup<'a> {
    catalog: &'a HeroCatalog,
    store: &'a StrategyStore,
}

/// Strategy text for one drafted hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisEntry {
    pub hero: Hero,
    pub side: Side,
    pub strategy: StrategyDocument,
}

impl AnalysisEntry {
    /// `false` when the hero has no strategy document.
    pub fn has_data(&self) -> bool {
        !self.strategy.is_empty()
    }

    /// Text panels for this hero.
    ///
    /// Allies get a tips panel and, when the document has any, an items panel.
    /// Enemies get a counter panel.
    pub fn panels(&self) -> Vec<Panel> {
        let name = self.hero.display_name();
        match self.side {
            Side::Ally => {
                let mut panels = vec![Panel::new(
                    PanelKind::Tips,
                    format!("Tips for {name}"),
                    self.strategy.general_tips().to_vec(),
                )];
                if !self.strategy.item_suggestions.is_empty() {
                    panels.push(Panel::new(
                        PanelKind::Items,
                        format!("Items for {name}"),
                        self.strategy.item_suggestions.clone(),
                    ));
                }
                panels
            }
            Side::Enemy => vec![Panel::new(
                PanelKind::CounterTips,
                format!("How to counter {name}"),
                self.strategy.counter_tips.clone(),
            )],
        }
    }
}

/// Per-hero strategy text for a whole draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    entries: Vec<AnalysisEntry>,
}

/// A counter item named in the counter tips of one or more enemies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterItemMention {
    pub item: &'static str,
    /// Display names of the enemies whose tips mention the item, in pick order.
    pub heroes: Vec<String>,
}

impl<'a> AnalysisLookup<'a> {
    pub fn new(catalog: &'a HeroCatalog, store: &'a StrategyStore) -> Self {
        Self { catalog, store }
    }

    /// Collect the strategy documents of every drafted hero.
    ///
    /// Entries are grouped by side (ally, then enemy) and keep pick order
    /// within a side. Heroes without a document get an empty one. Fails only if
    /// the session names a hero the catalog doesn't know.
    pub fn analyze(&self, session: &DraftSession) -> Result<AnalysisResult, NotFoundError> {
        let mut entries = Vec::with_capacity(session.len());
        for side in Side::ALL {
            for hero_id in session.heroes(side) {
                let hero = self.catalog.get(hero_id)?;
                let strategy = self.store.get(hero_id);
                if strategy.is_empty() {
                    tracing::debug!("No strategy data for '{}'", hero_id);
                }
                entries.push(AnalysisEntry {
                    hero: hero.clone(),
                    side,
                    strategy: strategy.clone(),
                });
            }
        }
        Ok(AnalysisResult { entries })
    }

    /// Counter items mentioned in the counter tips of the enemy side.
    ///
    /// Items are listed in [`COUNTER_ITEMS`] order; items nobody mentions are
    /// left out.
    pub fn counter_items(
        &self,
        session: &DraftSession,
    ) -> Result<Vec<CounterItemMention>, NotFoundError> {
        let mut mentions: Vec<CounterItemMention> = Vec::new();

        for hero_id in session.heroes(Side::Enemy) {
            let hero = self.catalog.get(hero_id)?;
            let tips = &self.store.get(hero_id).counter_tips;

            for item in mentioned_items(tips) {
                match mentions.iter_mut().find(|m| m.item == item) {
                    Some(mention) => mention.heroes.push(hero.display_name().to_string()),
                    None => mentions.push(CounterItemMention {
                        item,
                        heroes: vec![hero.display_name().to_string()],
                    }),
                }
            }
        }

        mentions.sort_by_key(|m| counter_item_rank(m.item));
        Ok(mentions)
    }
}

fn counter_item_rank(item: &str) -> usize {
    COUNTER_ITEMS
        .iter()
        .position(|&known| known == item)
        .unwrap_or(usize::MAX)
}

impl AnalysisResult {
    pub fn entries(&self) -> &[AnalysisEntry] {
        &self.entries
    }

    /// Entries for one side, in pick order.
    pub fn side(&self, side: Side) -> impl Iterator<Item = &AnalysisEntry> {
        self.entries.iter().filter(move |entry| entry.side == side)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text panels for display, in entry order.
    pub fn panels(&self) -> Vec<Panel> {
        self.entries.iter().flat_map(AnalysisEntry::panels).collect()
    }
}

/// Panel listing counter items and the enemies they answer.
pub fn counter_item_panel(mentions: &[CounterItemMention]) -> Panel {
    let lines = mentions
        .iter()
        .map(|m| format!("{}: recommended against {}", m.item, m.heroes.join(", ")))
        .collect();
    Panel::new(PanelKind::CounterItems, "Item Suggestions", lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::HeroId;
    use crate::strategy::GENERAL_TIPS;
    use std::collections::BTreeMap;

    fn fixtures() -> (HeroCatalog, StrategyStore) {
        let catalog = HeroCatalog::from_heroes(vec![
            Hero::new("npc_dota_hero_axe", "Axe"),
            Hero::new("npc_dota_hero_crystal_maiden", "Crystal Maiden"),
            Hero::new("npc_dota_hero_phantom_assassin", "Phantom Assassin"),
            Hero::new("npc_dota_hero_lion", "Lion"),
        ])
        .unwrap();

        let axe = StrategyDocument {
            item_suggestions: vec!["Blink Dagger".into(), "Blade Mail".into()],
            counter_tips: vec!["Force Staff allies out of Berserker's Call.".into()],
            sections: BTreeMap::from([(
                GENERAL_TIPS.to_string(),
                vec!["Blink in and Call.".to_string()],
            )]),
        };
        let phantom_assassin = StrategyDocument {
            counter_tips: vec![
                "Monkey King Bar pierces her evasion.".into(),
                "Ghost Scepter stops her burst.".into(),
            ],
            ..Default::default()
        };
        let lion = StrategyDocument {
            counter_tips: vec!["Linken's Sphere or a Force Staff saves you from Finger.".into()],
            ..Default::default()
        };

        let store = StrategyStore::from_documents([
            (HeroId::new("axe"), axe),
            (HeroId::new("phantom_assassin"), phantom_assassin),
            (HeroId::new("lion"), lion),
        ]);
        (catalog, store)
    }

    #[test]
    fn test_single_ally_scenario() {
        let (catalog, store) = fixtures();
        let lookup = AnalysisLookup::new(&catalog, &store);

        let mut session = DraftSession::new();
        session.add(Side::Ally, HeroId::new("axe")).unwrap();

        let result = lookup.analyze(&session).unwrap();
        assert_eq!(result.len(), 1);

        let entry = &result.entries()[0];
        assert_eq!(entry.side, Side::Ally);
        assert_eq!(entry.hero.display_name(), "Axe");
        assert_eq!(entry.strategy.item_suggestions, vec!["Blink Dagger", "Blade Mail"]);
        assert_eq!(
            entry.strategy.counter_tips,
            vec!["Force Staff allies out of Berserker's Call."]
        );
        assert_eq!(result.side(Side::Enemy).count(), 0);
    }

    #[test]
    fn test_grouped_by_side_then_pick_order() {
        let (catalog, store) = fixtures();
        let lookup = AnalysisLookup::new(&catalog, &store);

        let mut session = DraftSession::new();
        session.add(Side::Enemy, HeroId::new("lion")).unwrap();
        session.add(Side::Ally, HeroId::new("crystal_maiden")).unwrap();
        session.add(Side::Enemy, HeroId::new("phantom_assassin")).unwrap();
        session.add(Side::Ally, HeroId::new("axe")).unwrap();

        let result = lookup.analyze(&session).unwrap();
        let order: Vec<_> = result
            .entries()
            .iter()
            .map(|e| (e.side, e.hero.display_name()))
            .collect();
        assert_eq!(
            order,
            vec![
                (Side::Ally, "Crystal Maiden"),
                (Side::Ally, "Axe"),
                (Side::Enemy, "Lion"),
                (Side::Enemy, "Phantom Assassin"),
            ]
        );

        // Crystal Maiden has no document but still gets an entry.
        assert!(!result.entries()[0].has_data());
        assert!(result.entries()[1].has_data());
    }

    #[test]
    fn test_cleared_session_gives_empty_result() {
        let (catalog, store) = fixtures();
        let lookup = AnalysisLookup::new(&catalog, &store);

        let mut session = DraftSession::new();
        session.add(Side::Ally, HeroId::new("axe")).unwrap();
        session.add(Side::Enemy, HeroId::new("lion")).unwrap();
        session.clear();

        let result = lookup.analyze(&session).unwrap();
        assert!(result.is_empty());
        assert!(result.panels().is_empty());
    }

    #[test]
    fn test_unknown_hero_is_not_found() {
        let (catalog, store) = fixtures();
        let lookup = AnalysisLookup::new(&catalog, &store);

        let mut session = DraftSession::new();
        session.add(Side::Enemy, HeroId::new("invoker")).unwrap();

        assert_eq!(
            lookup.analyze(&session),
            Err(NotFoundError(HeroId::new("invoker")))
        );
    }

    #[test]
    fn test_counter_items_for_enemies_only() {
        let (catalog, store) = fixtures();
        let lookup = AnalysisLookup::new(&catalog, &store);

        let mut session = DraftSession::new();
        // Axe's counter tips mention Force Staff, but allies are not scanned.
        session.add(Side::Ally, HeroId::new("axe")).unwrap();
        session.add(Side::Enemy, HeroId::new("lion")).unwrap();
        session.add(Side::Enemy, HeroId::new("phantom_assassin")).unwrap();

        let mentions = lookup.counter_items(&session).unwrap();
        let summary: Vec<_> = mentions
            .iter()
            .map(|m| (m.item, m.heroes.clone()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Linken's Sphere", vec!["Lion".to_string()]),
                ("Monkey King Bar", vec!["Phantom Assassin".to_string()]),
                ("Ghost Scepter", vec!["Phantom Assassin".to_string()]),
                ("Force Staff", vec!["Lion".to_string()]),
            ]
        );

        let panel = counter_item_panel(&mentions);
        assert_eq!(panel.title, "Item Suggestions");
        assert_eq!(panel.lines[0], "Linken's Sphere: recommended against Lion");
    }

    #[test]
    fn test_counter_items_shared_between_enemies() {
        let (catalog, base) = fixtures();
        let store = StrategyStore::from_documents(
            base.hero_ids()
                .into_iter()
                .map(|id| (id.clone(), base.get(id).clone()))
                .chain([(
                    HeroId::new("crystal_maiden"),
                    StrategyDocument {
                        counter_tips: vec!["A force staff gets you out of Freezing Field.".into()],
                        ..Default::default()
                    },
                )])
                .collect::<Vec<_>>(),
        );
        let lookup = AnalysisLookup::new(&catalog, &store);

        let mut session = DraftSession::new();
        session.add(Side::Enemy, HeroId::new("crystal_maiden")).unwrap();
        session.add(Side::Enemy, HeroId::new("lion")).unwrap();

        let mentions = lookup.counter_items(&session).unwrap();
        let force_staff = mentions.iter().find(|m| m.item == "Force Staff").unwrap();
        assert_eq!(force_staff.heroes, vec!["Crystal Maiden", "Lion"]);
    }

    #[test]
    fn test_panels() {
        let (catalog, store) = fixtures();
        let lookup = AnalysisLookup::new(&catalog, &store);

        let mut session = DraftSession::new();
        session.add(Side::Ally, HeroId::new("axe")).unwrap();
        session.add(Side::Enemy, HeroId::new("lion")).unwrap();

        let panels = lookup.analyze(&session).unwrap().panels();
        let titles: Vec<_> = panels.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Tips for Axe", "Items for Axe", "How to counter Lion"]);
        assert_eq!(panels[0].lines, vec!["Blink in and Call."]);
        assert_eq!(panels[2].kind, PanelKind::CounterTips);
    }

    #[test]
    fn test_counter_item_panel_without_matches() {
        let (catalog, store) = fixtures();
        let lookup = AnalysisLookup::new(&catalog, &store);

        let mut session = DraftSession::new();
        session.add(Side::Enemy, HeroId::new("crystal_maiden")).unwrap();

        let panel = counter_item_panel(&lookup.counter_items(&session).unwrap());
        assert!(panel.lines.is_empty());
        assert_eq!(panel.default_body(), "No specific item counters found.\n");
    }
}
