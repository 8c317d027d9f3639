use crate::config::Threshold;
use crate::matcher;
use crate::tokenizer::{self, LinePattern, Token};
use std::io::BufRead;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f64),
    #[error("reading input: {0}")]
    Io(#[from] std::io::Error),
}

/// Lines judged similar to the group's anchor, in arrival order.
/// The first member is the anchor and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: usize,
    members: Vec<LinePattern>,
}

impl Group {
    fn new(id: usize, anchor: LinePattern) -> Self {
        Self { id, members: vec![anchor] }
    }

    /// Creation order within the run, starting at 0.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn anchor(&self) -> &[Token] {
        &self.members[0]
    }

    pub fn members(&self) -> &[LinePattern] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.anchor().len()
    }

    /// Member lines reconstructed from their tokens.
    pub fn lines(&self) -> Vec<String> {
        self.members.iter().map(|m| tokenizer::join_tokens(m)).collect()
    }
}

/// Groups built so far in one pass over the input. Owned by the caller for
/// the whole run; nothing here is global.
#[derive(Debug, Clone)]
pub struct ClusterState {
    threshold: Threshold,
    groups: Vec<Group>,
    total_lines: usize,
}

impl ClusterState {
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold, groups: Vec::new(), total_lines: 0 }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Tokenizes `line` and places it. Returns the id of the receiving group.
    pub fn push_line(&mut self, line: &str) -> usize {
        self.push_pattern(tokenizer::tokenize(line))
    }

    pub fn push_pattern(&mut self, candidate: LinePattern) -> usize {
        self.total_lines += 1;
        match self.best_match(&candidate) {
            Some(idx) => {
                trace!(group = idx, "line joined existing group");
                self.groups[idx].members.push(candidate);
                idx
            }
            None => {
                let id = self.groups.len();
                debug!(group = id, tokens = candidate.len(), "new group");
                self.groups.push(Group::new(id, candidate));
                id
            }
        }
    }

    /// Highest scoring group whose anchor clears the threshold. Ties keep
    /// the earliest group.
    pub fn best_match(&self, candidate: &[Token]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, group) in self.groups.iter().enumerate() {
            let Some(score) = matcher::score(group.anchor(), candidate) else { continue };
            if !self.threshold.accepts(&score) {
                continue;
            }
            let ratio = score.ratio();
            if best.map_or(true, |(_, b)| ratio > b) {
                best = Some((idx, ratio));
            }
        }
        best.map(|(idx, _)| idx)
    }
}

/// Clusters an in-memory sequence of lines in order.
pub fn cluster_lines<I, S>(lines: I, threshold: Threshold) -> Vec<Group>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ClusterState::new(threshold);
    for line in lines {
        state.push_line(line.as_ref());
    }
    state.into_groups()
}

/// Reads `reader` to the end one line at a time. Any read failure aborts the
/// whole run and no groups are returned.
pub fn cluster_reader<R: BufRead>(mut reader: R, threshold: Threshold) -> Result<ClusterState, ClusterError> {
    let mut state = ClusterState::new(threshold);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        state.push_line(&String::from_utf8_lossy(&buf));
    }
    debug!(lines = state.total_lines(), groups = state.groups().len(), "clustering finished");
    Ok(state)
}
