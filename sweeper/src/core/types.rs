//! Shared deterministic types for the draw engine.
//!
//! These types define the contract between the engine and its collaborators
//! (input adapters, narration, the result sink). They carry no I/O and must
//! stay stable across runs.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::core::errors::DrawError;

/// Which sequence drives the rounds of a draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawOrder {
    /// Walk entrants in their given order ("entrant 1 gets...").
    #[default]
    Entrants,
    /// Walk picks in their given order ("pick 1 goes to...").
    Picks,
    /// Shuffle entrants first, then walk them ("entrant 3 gets...").
    Shuffle,
}

impl DrawOrder {
    pub const ALL: [DrawOrder; 3] = [DrawOrder::Entrants, DrawOrder::Picks, DrawOrder::Shuffle];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entrants => "entrants",
            Self::Picks => "picks",
            Self::Shuffle => "shuffle",
        }
    }

    /// True when rounds are driven by picks rather than entrants.
    pub fn is_pick_driven(self) -> bool {
        matches!(self, Self::Picks)
    }
}

impl fmt::Display for DrawOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawOrder {
    type Err = DrawError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Self::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DrawError::InvalidOrder(raw.to_string()))
    }
}

/// Knobs for a single draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawOptions {
    pub order: DrawOrder,
    /// Pair by position instead of drawing at random.
    pub deterministic: bool,
}

/// One resolved entrant → pick assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    pub entrant: String,
    pub pick: String,
}

/// Outcome of a draw.
///
/// `pairings` are kept in draw order (the order rounds were processed), which
/// only matches the entrants' input order for [`DrawOrder::Entrants`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    pub order: DrawOrder,
    pub pairings: Vec<Pairing>,
    /// Picks left in the pool, in their original input order.
    pub undrawn: Vec<String>,
}

impl DrawResult {
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pairing> {
        self.pairings.iter()
    }

    /// Entrants in draw order.
    pub fn entrants(&self) -> impl Iterator<Item = &str> {
        self.pairings.iter().map(|pairing| pairing.entrant.as_str())
    }

    pub fn pick_for(&self, entrant: &str) -> Option<&str> {
        self.pairings
            .iter()
            .find(|pairing| pairing.entrant == entrant)
            .map(|pairing| pairing.pick.as_str())
    }

    /// Pairings sorted by entrant name, for human review.
    pub fn sorted_by_entrant(&self) -> Vec<&Pairing> {
        let mut sorted: Vec<&Pairing> = self.pairings.iter().collect();
        sorted.sort_by(|a, b| a.entrant.cmp(&b.entrant));
        sorted
    }
}

/// Serializes as a flat `{ entrant: pick }` object, keys in draw order.
impl Serialize for DrawResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairings.len()))?;
        for pairing in &self.pairings {
            map.serialize_entry(&pairing.entrant, &pairing.pick)?;
        }
        map.end()
    }
}

/// Progress notifications emitted by the engine while it draws.
///
/// For every round the engine emits `RoundStarted`, `Drawing`, `Resolved`,
/// `RoundFinished` in that order; `Undrawn` is emitted once, last. Rounds are
/// numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawEvent {
    RoundStarted {
        round: usize,
        order: DrawOrder,
        /// Entrant (or pick, for [`DrawOrder::Picks`]) driving this round.
        driver: String,
    },
    Drawing {
        round: usize,
    },
    Resolved {
        round: usize,
        order: DrawOrder,
        pairing: Pairing,
    },
    RoundFinished {
        round: usize,
    },
    Undrawn {
        picks: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairing(entrant: &str, pick: &str) -> Pairing {
        Pairing {
            entrant: entrant.to_string(),
            pick: pick.to_string(),
        }
    }

    #[test]
    fn draw_order_parses_case_insensitively() {
        assert_eq!("Picks".parse::<DrawOrder>().expect("parse"), DrawOrder::Picks);
        assert_eq!(
            " SHUFFLE ".parse::<DrawOrder>().expect("parse"),
            DrawOrder::Shuffle
        );
    }

    #[test]
    fn draw_order_rejects_unknown_mode() {
        let err = "alphabetical".parse::<DrawOrder>().expect_err("invalid");
        assert!(matches!(err, DrawError::InvalidOrder(ref raw) if raw == "alphabetical"));
        assert!(err.to_string().contains("'entrants', 'picks', or 'shuffle'"));
    }

    #[test]
    fn result_serializes_as_object_in_draw_order() {
        let result = DrawResult {
            order: DrawOrder::Shuffle,
            pairings: vec![pairing("Margaret", "Bills"), pairing("Harold", "Chiefs")],
            undrawn: Vec::new(),
        };
        let json = serde_json::to_string(&result).expect("serialize");
        assert_eq!(json, r#"{"Margaret":"Bills","Harold":"Chiefs"}"#);
    }

    #[test]
    fn sorted_by_entrant_leaves_draw_order_alone() {
        let result = DrawResult {
            order: DrawOrder::Shuffle,
            pairings: vec![pairing("Jim", "Bills"), pairing("Harold", "Chiefs")],
            undrawn: vec!["Bengals".to_string()],
        };
        let sorted: Vec<&str> = result
            .sorted_by_entrant()
            .iter()
            .map(|pairing| pairing.entrant.as_str())
            .collect();
        assert_eq!(sorted, vec!["Harold", "Jim"]);
        assert_eq!(result.entrants().collect::<Vec<_>>(), vec!["Jim", "Harold"]);
        assert_eq!(result.pick_for("Harold"), Some("Chiefs"));
        assert_eq!(result.pick_for("Nobody"), None);
    }
}
