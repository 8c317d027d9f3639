use crate::census::CensusEntry;
use crate::cluster::Group;
use crate::wildcard::{self, Slot};
use rayon::prelude::*;
use serde::Serialize;
use std::io::{self, Write};

/// Display data for one group: its size and wildcard template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub id: usize,
    pub count: usize,
    pub template: String,
    pub wildcards: usize,
    pub slots: Vec<Slot>,
}

impl GroupSummary {
    pub fn from_group(group: &Group) -> Self {
        let slots = wildcard::wildcard_template(group);
        Self {
            id: group.id(),
            count: group.len(),
            template: wildcard::render_template(&slots),
            wildcards: slots.iter().filter(|s| s.is_wildcard()).count(),
            slots,
        }
    }
}

/// Summaries for already-frozen groups, in the order given.
pub fn summarize(groups: &[Group]) -> Vec<GroupSummary> {
    groups.par_iter().map(GroupSummary::from_group).collect()
}

pub fn format_row(count: usize, text: &str) -> String {
    format!("{:<5} {}", count, text)
}

/// Output side of the tool: ranked templates, a group's raw lines, or the
/// value census of one wildcard slot.
pub trait Renderer {
    fn groups(&mut self, summaries: &[GroupSummary]) -> io::Result<()>;
    fn details(&mut self, group: &Group) -> io::Result<()>;
    fn census(&mut self, entries: &[CensusEntry]) -> io::Result<()>;
}

pub struct TableRenderer<W: Write> {
    out: W,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TableRenderer<W> {
    fn groups(&mut self, summaries: &[GroupSummary]) -> io::Result<()> {
        for s in summaries {
            writeln!(self.out, "{}", format_row(s.count, &s.template))?;
        }
        Ok(())
    }

    fn details(&mut self, group: &Group) -> io::Result<()> {
        for line in group.lines() {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn census(&mut self, entries: &[CensusEntry]) -> io::Result<()> {
        for e in entries {
            writeln!(self.out, "{}", format_row(e.count, &e.value))?;
        }
        Ok(())
    }
}

pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn groups(&mut self, summaries: &[GroupSummary]) -> io::Result<()> {
        self.emit(summaries)
    }

    fn details(&mut self, group: &Group) -> io::Result<()> {
        self.emit(&serde_json::json!({
            "id": group.id(),
            "count": group.len(),
            "lines": group.lines(),
        }))
    }

    fn census(&mut self, entries: &[CensusEntry]) -> io::Result<()> {
        self.emit(entries)
    }
}
