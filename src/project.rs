//! Flattening documents into table rows.
//!
//! Both projections are pure: one document in, owned string fields out.

use crate::input::{Delivery, Document};
use itertools::Itertools;

pub type Row = Vec<String>;

pub const GAME_COLUMNS: [&str; 24] = [
    "GameId",
    "City",
    "StartDate",
    "Gender",
    "MatchType",
    "MatchTypeNumber",
    "NeutralVenue",
    "Winner",
    "Result",
    "OutcomeMethod",
    "Eliminator",
    "OutcomeByInnings",
    "OutcomeByRuns",
    "OutcomeByWickets",
    "OutcomeBowlOut",
    "Overs",
    "PlayerOfMatch",
    "TeamOne",
    "TeamTwo",
    "TossDecision",
    "TossWinner",
    "UmpireOne",
    "UmpireTwo",
    "Venue",
];

pub const DELIVERY_COLUMNS: [&str; 16] = [
    "GameId",
    "Batsman",
    "Bowler",
    "NonStriker",
    "RunsBatsman",
    "RunsExtras",
    "RunsNonBoundary",
    "RunsTotal",
    "ExtrasByes",
    "ExtrasLegByes",
    "ExtrasNoBalls",
    "ExtrasPenalty",
    "ExtrasWides",
    "WicketKind",
    "WicketFielders",
    "WicketPlayerOut",
];

fn first(v: &[String]) -> String {
    v.first().cloned().unwrap_or_default()
}

/// First and second element; the second one only if there are exactly two.
fn pair(v: &[String]) -> (String, String) {
    match v {
        [a, b] => (a.clone(), b.clone()),
        _ => (first(v), String::new()),
    }
}

/// Summary row of one game, in [GAME_COLUMNS] order.
pub fn game_row(doc: &Document) -> Row {
    let info = &doc.info;
    let outcome = &info.outcome;
    let (team1, team2) = pair(&info.teams);
    let (umpire1, umpire2) = pair(&info.umpires);
    vec![
        doc.id.clone(),
        info.city.clone(),
        first(&info.dates),
        info.gender.clone(),
        info.match_type.clone(),
        info.match_type_number.to_string(),
        info.neutral_venue.to_string(),
        outcome.winner.clone(),
        outcome.result.clone(),
        outcome.method.clone(),
        outcome.eliminator.clone(),
        outcome.by.innings.clone(),
        outcome.by.runs.to_string(),
        outcome.by.wickets.to_string(),
        outcome.bowl_out.clone(),
        info.overs.to_string(),
        first(&info.player_of_match),
        team1,
        team2,
        info.toss.decision.clone(),
        info.toss.winner.clone(),
        umpire1,
        umpire2,
        info.venue.clone(),
    ]
}

pub fn game_rows(docs: &[Document]) -> Vec<Row> {
    docs.iter().map(game_row).collect_vec()
}

fn delivery_row(id: &str, d: &Delivery) -> Row {
    vec![
        id.to_owned(),
        d.batsman.clone(),
        d.bowler.clone(),
        d.non_striker.clone(),
        d.runs.batsman.to_string(),
        d.runs.extras.to_string(),
        d.runs.non_boundary.to_string(),
        d.runs.total.to_string(),
        d.extras.byes.to_string(),
        d.extras.leg_byes.to_string(),
        d.extras.no_balls.to_string(),
        d.extras.penalty.to_string(),
        d.extras.wides.to_string(),
        d.wicket.kind.clone(),
        first(&d.wicket.fielders),
        d.wicket.player_out.clone(),
    ]
}

/// One row per delivery, in [DELIVERY_COLUMNS] order.
pub fn delivery_rows(doc: &Document) -> Vec<Row> {
    doc.deliveries()
        .map(|d| delivery_row(&doc.id, d))
        .collect_vec()
}

pub fn all_delivery_rows(docs: &[Document]) -> Vec<Row> {
    docs.iter().flat_map(delivery_rows).collect_vec()
}
