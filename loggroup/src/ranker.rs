use crate::cluster::Group;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!("unknown sort order '{other}' (expected asc | desc)")),
        }
    }
}

/// Orders groups by member count. Equal sizes keep creation order.
pub fn rank(mut groups: Vec<Group>, order: SortOrder) -> Vec<Group> {
    match order {
        SortOrder::Ascending => groups.sort_by_key(|g| g.len()),
        SortOrder::Descending => groups.sort_by(|a, b| b.len().cmp(&a.len())),
    }
    groups
}

/// Ranks and keeps only the first `top` groups when a limit is given.
pub fn rank_top(groups: Vec<Group>, order: SortOrder, top: Option<usize>) -> Vec<Group> {
    let mut ranked = rank(groups, order);
    if let Some(top) = top {
        ranked.truncate(top);
    }
    ranked
}
