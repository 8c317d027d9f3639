use crate::cluster::Group;
use itertools::Itertools;
use serde::Serialize;

pub const WILDCARD_MARKER: &str = "*";

/// One position of a group template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Token text shared by every member, separator included.
    Literal(String),
    /// Varying position; carries the anchor's separator for layout.
    Wildcard(String),
}

impl Slot {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Slot::Wildcard(_))
    }

    pub fn display(&self) -> String {
        match self {
            Slot::Literal(text) => text.clone(),
            Slot::Wildcard(sep) => format!("{WILDCARD_MARKER}{sep}"),
        }
    }
}

/// Positions where at least one member's token differs from the anchor's.
pub fn differing_positions(group: &Group) -> Vec<bool> {
    let anchor = group.anchor();
    let mut wild = vec![false; anchor.len()];
    for member in group.members().iter().skip(1) {
        for (i, (a, t)) in anchor.iter().zip(member).enumerate() {
            if a != t {
                wild[i] = true;
            }
        }
    }
    wild
}

pub fn wildcard_template(group: &Group) -> Vec<Slot> {
    group
        .anchor()
        .iter()
        .zip(differing_positions(group))
        .map(|(tok, wild)| {
            if wild {
                Slot::Wildcard(tok.separator().to_string())
            } else {
                Slot::Literal(tok.as_str().to_string())
            }
        })
        .collect()
}

/// Token indices of the wildcard slots, left to right.
pub fn wildcard_positions(template: &[Slot]) -> Vec<usize> {
    template.iter().positions(Slot::is_wildcard).collect()
}

pub fn render_template(template: &[Slot]) -> String {
    template.iter().map(Slot::display).collect()
}
