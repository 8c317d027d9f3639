use crate::config::Threshold;
use crate::tokenizer::Token;

/// Positional agreement between a group anchor and a candidate line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub matched: usize,
    pub total: usize,
}

impl Score {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.matched as f64 / self.total as f64
    }
}

/// Counts positions holding identical token text. `None` when the patterns
/// have different lengths and therefore can never be related.
pub fn match_count(anchor: &[Token], candidate: &[Token]) -> Option<usize> {
    if anchor.len() != candidate.len() {
        return None;
    }
    Some(anchor.iter().zip(candidate).filter(|(a, c)| a == c).count())
}

pub fn score(anchor: &[Token], candidate: &[Token]) -> Option<Score> {
    let matched = match_count(anchor, candidate)?;
    Some(Score { matched, total: candidate.len() })
}

impl Threshold {
    /// Whether a score is good enough for the candidate to join the group.
    /// An empty pattern counts as a single empty unit that always matches.
    pub fn accepts(&self, score: &Score) -> bool {
        if score.total == 0 {
            return 1 > self.cutoff(1);
        }
        score.matched > self.cutoff(score.total)
    }
}
