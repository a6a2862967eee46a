use crate::corpus::Corpus;
use crate::input::Document;
use itertools::Itertools;
use log::info;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub documents: usize,
    pub innings: usize,
    pub deliveries: usize,
    pub wickets: usize,
    pub teams: usize,
    pub match_types: BTreeMap<String, usize>,
}

impl CorpusStats {
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut teams = HashSet::new();
        let mut stats = CorpusStats {
            documents: documents.len(),
            ..CorpusStats::default()
        };
        for doc in documents {
            *stats
                .match_types
                .entry(doc.info.match_type.clone())
                .or_default() += 1;
            for team in &doc.info.teams {
                teams.insert(team);
            }
            stats.innings += doc.innings.len();
            for d in doc.deliveries() {
                stats.deliveries += 1;
                if !d.wicket.kind.is_empty() {
                    stats.wickets += 1;
                }
            }
        }
        stats.teams = teams.len();
        stats
    }
}

pub fn explain_match_types(match_types: &BTreeMap<String, usize>) -> String {
    match_types
        .iter()
        .map(|(k, n)| {
            if k.is_empty() {
                format!("(none): {n}")
            } else {
                format!("{k}: {n}")
            }
        })
        .join(", ")
}

pub fn statistics(corpus: &Corpus) {
    let stats = CorpusStats::from_documents(&corpus.documents);
    info!(target: "crictab", "documents: {}", stats.documents);
    info!(target: "crictab", "failures: {}", corpus.failures.len());
    info!(target: "crictab", "innings: {}", stats.innings);
    info!(target: "crictab", "deliveries: {}", stats.deliveries);
    info!(target: "crictab", "wickets: {}", stats.wickets);
    info!(target: "crictab", "distinct teams: {}", stats.teams);
    info!(
        target: "crictab",
        "match types: {}",
        explain_match_types(&stats.match_types)
    );
}
