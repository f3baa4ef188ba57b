//! Draft session state.
//!
//! A [`DraftSession`] holds up to [`TEAM_SIZE`] heroes per [`Side`]. A hero can
//! be on one side only, and once only. Every change is all-or-nothing: a
//! rejected [`add`](DraftSession::add) leaves the session exactly as it was.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DraftError;
use crate::hero::HeroId;

/// Heroes per side in a Dota 2 match.
pub const TEAM_SIZE: usize = 5;

/// One side of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Ally,
    Enemy,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Ally, Side::Enemy];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Ally => "ally",
            Side::Enemy => "enemy",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Side`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown draft side '{0}', expected 'ally' or 'enemy'")]
pub struct ParseSideError(String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ally" => Ok(Side::Ally),
            "enemy" => Ok(Side::Enemy),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// Heroes picked for both sides, in pick order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftSession {
    ally: Vec<HeroId>,
    enemy: Vec<HeroId>,
}

impl DraftSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a hero on a side.
    ///
    /// Fails if the side already holds [`TEAM_SIZE`] heroes or if the hero is
    /// already on either side.
    pub fn add(&mut self, side: Side, hero_id: HeroId) -> Result<(), DraftError> {
        if let Some(current) = self.side_of(&hero_id) {
            return Err(DraftError::AlreadyDrafted {
                hero: hero_id,
                side: current,
            });
        }

        let heroes = self.side_mut(side);
        if heroes.len() >= TEAM_SIZE {
            return Err(DraftError::SideFull {
                side,
                limit: TEAM_SIZE,
            });
        }

        tracing::debug!("Drafted '{}' on the {} side", hero_id, side);
        heroes.push(hero_id);
        Ok(())
    }

    /// Take a hero off a side. Does nothing if the hero isn't there.
    ///
    /// Returns whether the hero was removed.
    pub fn remove(&mut self, side: Side, hero_id: &HeroId) -> bool {
        let heroes = self.side_mut(side);
        let Some(index) = heroes.iter().position(|h| h == hero_id) else {
            return false;
        };
        heroes.remove(index);
        tracing::debug!("Removed '{}' from the {} side", hero_id, side);
        true
    }

    /// Empty both sides.
    pub fn clear(&mut self) {
        self.ally.clear();
        self.enemy.clear();
    }

    /// Heroes on a side, in pick order.
    pub fn heroes(&self, side: Side) -> &[HeroId] {
        match side {
            Side::Ally => &self.ally,
            Side::Enemy => &self.enemy,
        }
    }

    /// The side a hero is on, if any.
    pub fn side_of(&self, hero_id: &HeroId) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.heroes(side).contains(hero_id))
    }

    pub fn contains(&self, hero_id: &HeroId) -> bool {
        self.side_of(hero_id).is_some()
    }

    pub fn is_full(&self, side: Side) -> bool {
        self.heroes(side).len() >= TEAM_SIZE
    }

    /// Total number of drafted heroes.
    pub fn len(&self) -> usize {
        self.ally.len() + self.enemy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ally.is_empty() && self.enemy.is_empty()
    }

    fn side_mut(&mut self, side: Side) -> &mut Vec<HeroId> {
        match side {
            Side::Ally => &mut self.ally,
            Side::Enemy => &mut self.enemy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> HeroId {
        HeroId::new(s)
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!("ally".parse::<Side>(), Ok(Side::Ally));
        assert_eq!(" Enemy ".parse::<Side>(), Ok(Side::Enemy));
        assert!("radiant".parse::<Side>().is_err());
        assert_eq!(Side::Enemy.to_string(), "enemy");
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        for side in Side::ALL {
            let mut session = DraftSession::new();
            session.add(Side::Ally, id("lion")).unwrap();
            session.add(Side::Enemy, id("pudge")).unwrap();
            let before = session.clone();

            session.add(side, id("axe")).unwrap();
            assert_eq!(session.side_of(&id("axe")), Some(side));
            assert!(session.remove(side, &id("axe")));

            assert_eq!(session, before);
        }
    }

    #[test]
    fn test_sixth_hero_rejected_and_state_unchanged() {
        let mut session = DraftSession::new();
        for hero in ["axe", "lion", "pudge", "sven", "tiny"] {
            session.add(Side::Enemy, id(hero)).unwrap();
        }
        assert!(session.is_full(Side::Enemy));
        let before = session.clone();

        let result = session.add(Side::Enemy, id("zeus"));
        assert_eq!(
            result,
            Err(DraftError::SideFull {
                side: Side::Enemy,
                limit: TEAM_SIZE
            })
        );
        assert_eq!(session, before);

        // The other side is unaffected by a full enemy side.
        session.add(Side::Ally, id("zeus")).unwrap();
    }

    #[test]
    fn test_same_hero_on_both_sides_rejected() {
        let mut session = DraftSession::new();
        session.add(Side::Ally, id("axe")).unwrap();
        let before = session.clone();

        let result = session.add(Side::Enemy, id("npc_dota_hero_axe"));
        assert_eq!(
            result,
            Err(DraftError::AlreadyDrafted {
                hero: id("axe"),
                side: Side::Ally
            })
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_duplicate_within_side_rejected() {
        let mut session = DraftSession::new();
        session.add(Side::Ally, id("axe")).unwrap();
        assert!(session.add(Side::Ally, id("axe")).is_err());
        assert_eq!(session.heroes(Side::Ally), [id("axe")]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut session = DraftSession::new();
        session.add(Side::Ally, id("axe")).unwrap();
        let before = session.clone();

        assert!(!session.remove(Side::Enemy, &id("axe")));
        assert!(!session.remove(Side::Ally, &id("lion")));
        assert_eq!(session, before);
    }

    #[test]
    fn test_clear() {
        let mut session = DraftSession::new();
        session.add(Side::Ally, id("axe")).unwrap();
        session.add(Side::Enemy, id("lion")).unwrap();
        assert_eq!(session.len(), 2);

        session.clear();
        assert!(session.is_empty());
        assert_eq!(session, DraftSession::new());
    }

    #[test]
    fn test_pick_order_preserved() {
        let mut session = DraftSession::new();
        for hero in ["zeus", "axe", "lion"] {
            session.add(Side::Ally, id(hero)).unwrap();
        }
        assert_eq!(session.heroes(Side::Ally), [id("zeus"), id("axe"), id("lion")]);
    }
}
