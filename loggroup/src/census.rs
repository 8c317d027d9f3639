use crate::cluster::Group;
use crate::tokenizer::Token;
use crate::wildcard;
use ahash::AHashMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CensusEntry {
    pub count: usize,
    pub value: String,
}

/// Distinct values filling the `slot`-th wildcard (1-based) of a group, most
/// frequent first. Values with equal counts keep first-seen order. Empty when
/// the group has fewer than `slot` wildcards.
pub fn wildcard_values(group: &Group, slot: usize) -> Vec<CensusEntry> {
    if slot == 0 {
        return Vec::new();
    }
    let template = wildcard::wildcard_template(group);
    let Some(&token_index) = wildcard::wildcard_positions(&template).get(slot - 1) else {
        return Vec::new();
    };

    // Tallied on the full token text; separators differ => distinct values.
    let mut seen: AHashMap<&Token, usize> = AHashMap::new();
    let mut tally: Vec<(&Token, usize)> = Vec::new();
    for member in group.members() {
        let tok = &member[token_index];
        match seen.get(tok) {
            Some(&i) => tally[i].1 += 1,
            None => {
                seen.insert(tok, tally.len());
                tally.push((tok, 1));
            }
        }
    }
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally
        .into_iter()
        .map(|(tok, count)| CensusEntry { count, value: tok.value().to_string() })
        .collect()
}

pub fn census_total(entries: &[CensusEntry]) -> usize {
    entries.iter().map(|e| e.count).sum()
}
