use sqlweave::sqlite::prelude::*;

use crate::common::{self, Post, PostText};

fn render(node: &impl ToSQL) -> String {
    let registry = common::registry();
    let ctx = SerializerContext::new(&registry);
    serialize(node, &ctx).unwrap()
}

/// `USING <module>(<"c1">, .., <"cN">)` built by hand.
fn expected(module: &str, names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("\"{name}\"")).collect();
    format!("USING {module}({})", quoted.join(", "))
}

#[test]
fn title_and_body() {
    let node = using_fts5((
        make_column("title", member!(PostText::title)),
        make_column("body", member!(PostText::body)),
    ));
    assert_eq!(render(&node), r#"USING FTS5("title", "body")"#);
}

#[test]
fn zero_columns() {
    assert_eq!(render(&using_fts5(())), "USING FTS5()");
    assert_eq!(render(&using(Fts5, ())), "USING FTS5()");
}

#[test]
fn single_column() {
    let node = using_fts5((make_column("id", member!(Post::id)),));
    assert_eq!(render(&node), r#"USING FTS5("id")"#);
}

#[test]
fn module_case_is_preserved() {
    let node = using(
        "fts5",
        (
            make_column("title", member!(PostText::title)),
            make_column("body", member!(PostText::body)),
        ),
    );
    assert_eq!(render(&node), r#"USING fts5("title", "body")"#);

    let owned = using(String::from("Fts5"), ());
    assert_eq!(render(&owned), "USING Fts5()");
}

#[test]
fn rendering_uses_names_not_fields() {
    let node = using_fts5((
        make_column("headline", member!(Post::title)),
        make_column("content", member!(Post::body)),
        make_column("writer", member!(Post::author)),
    ));
    assert_eq!(render(&node), expected("FTS5", &["headline", "content", "writer"]));
}

#[test]
fn output_matches_the_quoted_join_for_several_lists() {
    let one = using("trigram", (make_column("a", member!(Post::title)),));
    let two = using(
        "FTS5",
        (
            make_column("b", member!(Post::title)),
            make_column("a", member!(Post::body)),
        ),
    );
    let four = using(
        "fts4",
        (
            make_column("w", member!(Post::id)),
            make_column("x", member!(Post::author)),
            make_column("y", member!(Post::title)),
            make_column("z", member!(Post::body)),
        ),
    );
    let with_space = using_fts5((make_column("first name", member!(Post::title)),));

    assert_eq!(render(&one), expected("trigram", &["a"]));
    assert_eq!(render(&two), expected("FTS5", &["b", "a"]));
    assert_eq!(render(&four), expected("fts4", &["w", "x", "y", "z"]));
    assert_eq!(render(&with_space), expected("FTS5", &["first name"]));
}

#[test]
fn serialize_is_idempotent() {
    let registry = common::registry();
    let ctx = SerializerContext::new(&registry);
    let node = common::post_text();

    let first = serialize(&node, &ctx).unwrap();
    let second = serialize(&node, &ctx).unwrap();
    assert_eq!(first, second);
    assert_eq!(serialize(node.using(), &ctx).unwrap(), serialize(node.using(), &ctx).unwrap());
}

#[test]
fn flags_do_not_change_the_clause() {
    let registry = common::registry();
    let node = common::post_text();
    let plain = SerializerContext::new(&registry);
    let altered = plain
        .skip_table_name(false)
        .replace_bindable_with_question(true)
        .use_parentheses(false)
        .top_level(false);

    assert_eq!(
        serialize(node.using(), &plain).unwrap(),
        serialize(node.using(), &altered).unwrap()
    );
}

#[test]
fn create_virtual_table() {
    assert_eq!(
        render(&common::post_text()),
        r#"CREATE VIRTUAL TABLE "post_text" USING FTS5("title", "body")"#
    );

    let lower = make_virtual_table::<PostText, _>(
        "search",
        using("fts5", (make_column("body", member!(PostText::body)),)),
    );
    assert_eq!(
        render(&lower),
        r#"CREATE VIRTUAL TABLE "search" USING fts5("body")"#
    );

    let empty = make_virtual_table::<PostText, _>("nothing", using_fts5(()));
    assert_eq!(render(&empty), r#"CREATE VIRTUAL TABLE "nothing" USING FTS5()"#);
}

#[test]
fn identifiers_are_checked_on_request() {
    let registry = common::registry();
    let node = using_fts5((make_column("ti\"tle", member!(PostText::title)),));

    let plain = SerializerContext::new(&registry);
    assert_eq!(serialize(&node, &plain).unwrap(), "USING FTS5(\"ti\"tle\")");

    let checked = plain.check_identifiers(true);
    assert!(matches!(
        serialize(&node, &checked),
        Err(Error::UnsupportedIdentifier(name)) if name == "ti\"tle"
    ));
}
