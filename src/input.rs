//! Data structures for representing one match record.
//!
//! Groups missing from the source document come out zero-valued.
//! Unknown fields at any level are an error.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// A sequence of single-entry mappings, kept as ordered `(label, value)` pairs.
///
/// Innings and deliveries are stored as `- label: value` items. The label
/// carries no meaning for the tables, but the order does.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyed<T>(pub Vec<(String, T)>);

impl<T> Default for Keyed<T> {
    fn default() -> Self {
        Keyed(Vec::new())
    }
}

impl<T> Keyed<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Values in source order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter().map(|(_, v)| v)
    }

    /// Labels in source order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

struct Entries<T>(Vec<(String, T)>);

struct EntriesVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
    type Value = Entries<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a mapping from label to value")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::new();
        while let Some((k, v)) = map.next_entry::<String, T>()? {
            entries.push((k, v));
        }
        Ok(Entries(entries))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Keyed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let groups: Vec<Entries<T>> = Vec::deserialize(deserializer)?;
        Ok(Keyed(groups.into_iter().flat_map(|g| g.0).collect()))
    }
}

pub type StringMap = HashMap<String, String>;

/// One match record.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Document {
    /// File name stem; not part of the document body.
    #[serde(skip)]
    pub id: String,
    pub meta: Meta,
    pub info: Info,
    pub innings: Keyed<Inning>,
}

/// Technical data about the record itself.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Meta {
    pub data_version: f32,
    pub created: String,
    pub revision: i16,
}

/// Match-level facts.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Info {
    pub city: String,
    pub gender: String,
    pub match_type: String,
    pub venue: String,
    pub competition: String,
    pub player_of_match: Vec<String>,
    pub teams: Vec<String>,
    pub umpires: Vec<String>,
    pub dates: Vec<String>,
    pub neutral_venue: i16,
    pub overs: i16,
    pub match_type_number: i32,
    pub supersubs: StringMap,
    pub bowl_out: Vec<StringMap>,
    pub outcome: Outcome,
    pub toss: Toss,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Toss {
    pub decision: String,
    pub winner: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Outcome {
    pub bowl_out: String,
    pub eliminator: String,
    pub result: String,
    pub method: String,
    pub winner: String,
    pub by: Margin,
}

/// Winning margin; at most one of the fields is normally set.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Margin {
    pub innings: String,
    pub runs: i16,
    pub wickets: i16,
}

/// One team's batting innings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Inning {
    pub team: String,
    pub declared: String,
    pub absent_hurt: Vec<String>,
    pub penalty_runs: PenaltyRuns,
    pub deliveries: Keyed<Delivery>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PenaltyRuns {
    pub pre: i16,
    pub post: i16,
}

/// One ball bowled.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Delivery {
    pub batsman: String,
    pub bowler: String,
    pub non_striker: String,
    pub extras: Extras,
    pub runs: Runs,
    pub wicket: Wicket,
    pub replacements: Replacements,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Replacements {
    pub role: Vec<StringMap>,
    #[serde(rename = "match")]
    pub match_: Vec<StringMap>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Runs {
    pub batsman: i16,
    pub extras: i16,
    pub total: i16,
    pub non_boundary: i16,
}

/// Wicket taken on a delivery; `kind` is empty if there was none.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Wicket {
    pub fielders: Vec<String>,
    pub kind: String,
    pub player_out: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Extras {
    pub wides: i32,
    pub byes: i32,
    #[serde(rename = "legbyes")]
    pub leg_byes: i32,
    #[serde(rename = "noballs")]
    pub no_balls: i32,
    pub penalty: i32,
}

impl Document {
    /// All deliveries in innings order, then delivery-group order.
    pub fn deliveries(&self) -> impl Iterator<Item = &Delivery> {
        self.innings.values().flat_map(|i| i.deliveries.values())
    }
}
