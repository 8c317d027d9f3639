use crate::census;
use crate::cluster::Group;
use crate::render::{self, GroupSummary, Renderer};
use std::io;

/// What the view is currently showing. Group indices refer to positions in
/// the ranked list, not creation ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Details { group: usize },
    Wildcard { group: usize, slot: usize },
}

/// A requested group or wildcard slot that does not exist. Numbers are the
/// 1-based values the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    Group(usize),
    Slot { group: usize, slot: usize },
}

/// Navigation state over a ranked set of groups.
#[derive(Debug, Clone)]
pub struct View {
    groups: Vec<Group>,
    summaries: Vec<GroupSummary>,
    selected: usize,
    mode: Mode,
}

impl View {
    pub fn new(groups: Vec<Group>) -> Self {
        let summaries = render::summarize(&groups);
        Self { groups, summaries, selected: 0, mode: Mode::List }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn summaries(&self) -> &[GroupSummary] {
        &self.summaries
    }

    /// Moves the list selection. Only valid in list mode and for an existing
    /// group; otherwise nothing changes.
    pub fn select(&mut self, index: usize) -> bool {
        if self.mode != Mode::List || index >= self.groups.len() {
            return false;
        }
        self.selected = index;
        true
    }

    pub fn show_details(&mut self) -> bool {
        if self.groups.is_empty() {
            return false;
        }
        self.mode = Mode::Details { group: self.selected };
        true
    }

    /// Switches to the census of a wildcard slot of the selected group. A slot
    /// the group does not have leaves the view as it was.
    pub fn show_wildcard(&mut self, slot: usize) -> bool {
        let Some(summary) = self.summaries.get(self.selected) else {
            return false;
        };
        if slot == 0 || slot > summary.wildcards {
            return false;
        }
        self.mode = Mode::Wildcard { group: self.selected, slot };
        true
    }

    /// Opens the `group`-th group (1-based) and optionally its `slot`-th
    /// wildcard census. A missing group stays on the list; a missing slot
    /// stays on the group's lines.
    pub fn open(&mut self, group: Option<usize>, slot: Option<usize>) -> Result<(), Miss> {
        let Some(n) = group else { return Ok(()) };
        if n == 0 || !self.select(n - 1) {
            return Err(Miss::Group(n));
        }
        self.show_details();
        match slot {
            Some(k) if !self.show_wildcard(k) => Err(Miss::Slot { group: n, slot: k }),
            _ => Ok(()),
        }
    }

    pub fn back(&mut self) {
        self.mode = Mode::List;
    }

    pub fn render(&self, renderer: &mut dyn Renderer) -> io::Result<()> {
        match self.mode {
            Mode::List => renderer.groups(&self.summaries),
            Mode::Details { group } => renderer.details(&self.groups[group]),
            Mode::Wildcard { group, slot } => {
                renderer.census(&census::wildcard_values(&self.groups[group], slot))
            }
        }
    }
}
