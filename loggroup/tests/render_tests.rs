use loggroup::cluster::cluster_lines;
use loggroup::config::Threshold;
use loggroup::census::wildcard_values;
use loggroup::render::{format_row, summarize, JsonRenderer, Renderer, TableRenderer};
use serde_json::Value;

fn groups() -> Vec<loggroup::cluster::Group> {
    cluster_lines(
        ["Connection from 10.1.1.1 closed after 31 ms", "Connection from 10.1.1.2 closed after 8 ms", "boot ok"],
        Threshold::new(0.5).unwrap(),
    )
}

#[test]
fn summaries_follow_input_order() {
    let s = summarize(&groups());
    assert_eq!(s.len(), 2);
    assert_eq!(s[0].count, 2);
    assert_eq!(s[0].template, "Connection from 10.1.1.* closed after * ms");
    assert_eq!(s[0].wildcards, 2);
    assert_eq!(s[1].template, "boot ok");
    assert_eq!(s[1].wildcards, 0);
}

#[test]
fn rows_pad_count_to_five_columns() {
    assert_eq!(format_row(7, "x"), "7     x");
    assert_eq!(format_row(123456, "x"), "123456 x");
}

#[test]
fn table_renderer_writes_rows() {
    let g = groups();
    let mut r = TableRenderer::new(Vec::new());
    r.groups(&summarize(&g)).unwrap();
    r.census(&wildcard_values(&g[0], 2)).unwrap();
    let out = String::from_utf8(r.into_inner()).unwrap();
    assert_eq!(
        out,
        "2     Connection from 10.1.1.* closed after * ms\n1     boot ok\n1     31\n1     8\n"
    );
}

#[test]
fn json_renderer_emits_parseable_documents() {
    let g = groups();
    let mut r = JsonRenderer::new(Vec::new());
    r.groups(&summarize(&g)).unwrap();
    let out = r.into_inner();
    let v: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v[0]["count"], 2);
    assert_eq!(v[0]["template"], "Connection from 10.1.1.* closed after * ms");
    assert_eq!(v[0]["slots"][5]["wildcard"], " ");
    assert_eq!(v[0]["slots"][3]["literal"], "1.");
    assert_eq!(v[1]["slots"][0]["literal"], "boot ");

    let mut r = JsonRenderer::new(Vec::new());
    r.details(&g[0]).unwrap();
    let v: Value = serde_json::from_slice(&r.into_inner()).unwrap();
    assert_eq!(v["count"], 2);
    assert_eq!(v["lines"][1], "Connection from 10.1.1.2 closed after 8 ms");

    let mut r = JsonRenderer::new(Vec::new());
    r.census(&wildcard_values(&g[0], 1)).unwrap();
    let v: Value = serde_json::from_slice(&r.into_inner()).unwrap();
    assert_eq!(v.as_array().map(|a| a.len()), Some(2));
    assert_eq!(v[0]["value"], "1");
}
