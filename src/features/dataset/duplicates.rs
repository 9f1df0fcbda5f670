use std::collections::{BTreeMap, BTreeSet};

use crate::data::models::{DuplicatePair, DuplicateReport, SharedTerm, TermVariant, VocabEntry};

/// Finds repeated pairs and terms that occur in more than one entry.
pub fn find_duplicates(vocab: &[VocabEntry]) -> DuplicateReport {
    let mut by_pair: BTreeMap<(&str, &str), Vec<u32>> = BTreeMap::new();
    let mut by_source: BTreeMap<&str, Vec<TermVariant>> = BTreeMap::new();
    let mut by_target: BTreeMap<&str, Vec<TermVariant>> = BTreeMap::new();

    for entry in vocab {
        by_pair
            .entry((entry.source.as_str(), entry.target.as_str()))
            .or_default()
            .push(entry.id);
        by_source.entry(entry.source.as_str()).or_default().push(TermVariant {
            counterpart: entry.target.clone(),
            id: entry.id,
        });
        by_target.entry(entry.target.as_str()).or_default().push(TermVariant {
            counterpart: entry.source.clone(),
            id: entry.id,
        });
    }

    let pairs = by_pair
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|((source, target), ids)| DuplicatePair {
            source: source.to_string(),
            target: target.to_string(),
            ids,
        })
        .collect();

    DuplicateReport {
        pairs,
        sources: shared_terms(by_source),
        targets: shared_terms(by_target),
        scanned: vocab.len(),
    }
}

fn shared_terms(groups: BTreeMap<&str, Vec<TermVariant>>) -> Vec<SharedTerm> {
    groups
        .into_iter()
        .filter(|(_, variants)| variants.len() > 1)
        .map(|(term, variants)| {
            let distinct = variants
                .iter()
                .map(|v| v.counterpart.as_str())
                .collect::<BTreeSet<_>>()
                .len();
            SharedTerm {
                term: term.to_string(),
                variants,
                distinct,
            }
        })
        .collect()
}
