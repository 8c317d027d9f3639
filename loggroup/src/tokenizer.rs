use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// ASCII punctuation plus space, \t, \n, \v, \f, \r
static RE_SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[[:punct:]\t\n\x0B\x0C\r ]+").unwrap()
});

static RE_TRAILING_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[[:punct:]\t\n\x0B\x0C\r ]+$").unwrap()
});

/// A run of non-separator text together with the separator run that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing separator run, possibly empty.
    pub fn separator(&self) -> &str {
        RE_TRAILING_SEPARATOR
            .find(&self.0)
            .map(|m| m.as_str())
            .unwrap_or("")
    }

    /// The token text with its trailing separator removed.
    pub fn value(&self) -> &str {
        strip_separator(&self.0)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One tokenized input line.
pub type LinePattern = Vec<Token>;

/// Splits a line into tokens, each carrying its own trailing separator.
/// Concatenating the tokens reproduces `line` exactly.
pub fn tokenize(line: &str) -> LinePattern {
    let mut out = Vec::new();
    let mut start = 0;
    for m in RE_SEPARATOR_RUN.find_iter(line) {
        out.push(Token(line[start..m.end()].to_string()));
        start = m.end();
    }
    if start < line.len() {
        out.push(Token(line[start..].to_string()));
    }
    out
}

pub fn strip_separator(s: &str) -> &str {
    match RE_TRAILING_SEPARATOR.find(s) {
        Some(m) => &s[..m.start()],
        None => s,
    }
}

pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(Token::as_str).collect()
}
