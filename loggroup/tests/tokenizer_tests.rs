use loggroup::tokenizer::{join_tokens, strip_separator, tokenize};

fn texts(line: &str) -> Vec<String> {
    tokenize(line).iter().map(|t| t.as_str().to_string()).collect()
}

#[test]
fn splits_on_whitespace_and_keeps_separator_with_token() {
    assert_eq!(texts("user bob logged in"), vec!["user ", "bob ", "logged ", "in"]);
}

#[test]
fn punctuation_runs_are_one_separator() {
    assert_eq!(texts("GET /a 200"), vec!["GET /", "a ", "200"]);
    assert_eq!(texts("a,,b"), vec!["a,,", "b"]);
    assert_eq!(texts("x  "), vec!["x  "]);
}

#[test]
fn every_listed_symbol_separates() {
    let symbols = "!\"#$%&'()*+,-./:;<=>?@[]\\^_`{|}~";
    for c in symbols.chars() {
        let line = format!("a{c}b");
        assert_eq!(tokenize(&line).len(), 2, "symbol {c:?} should split");
    }
    for c in [' ', '\t', '\n', '\u{0B}', '\u{0C}', '\r'] {
        let line = format!("a{c}b");
        assert_eq!(tokenize(&line).len(), 2, "whitespace {c:?} should split");
    }
}

#[test]
fn empty_line_has_no_tokens() {
    assert!(tokenize("").is_empty());
}

#[test]
fn joining_tokens_reconstructs_the_line() {
    let lines = [
        "",
        " ",
        "plain",
        "[2024-01-01 10:00:00] INFO  worker-3: job 42 done (took 17ms)",
        "  leading spaces and trailing  ",
        "key=value;other=\"quoted\"",
        "ünïcode → arrows, ok",
        "tab\tseparated\tfields\t",
    ];
    for line in lines {
        assert_eq!(join_tokens(&tokenize(line)), line);
    }
}

#[test]
fn strips_only_the_trailing_separator() {
    assert_eq!(strip_separator("5, "), "5");
    assert_eq!(strip_separator("a.b"), "a.b");
    assert_eq!(strip_separator(""), "");
    let toks = tokenize("took 17ms.");
    assert_eq!(toks[1].value(), "17ms");
    assert_eq!(toks[1].separator(), ".");
}
