use sqlweave::core::Value;
use sqlweave::sqlite::prelude::*;

use crate::common::{self, Post, User};

fn render(node: &impl ToSQL) -> String {
    let registry = common::registry();
    serialize(node, &SerializerContext::new(&registry)).unwrap()
}

#[test]
fn comparisons_nest_with_parentheses() {
    let node = or(
        and(eq(member!(User::id), 1), ne(member!(User::name), "bob")),
        lt(member!(User::id), 0),
    );
    assert_eq!(
        render(&node),
        r#"((("id" = 1) AND ("name" <> 'bob')) OR ("id" < 0))"#
    );
}

#[test]
fn arithmetic_and_concatenation() {
    assert_eq!(
        render(&ge(add(member!(Post::id), 1), div(member!(Post::author), 2))),
        r#"(("id" + 1) >= ("author_id" / 2))"#
    );
    assert_eq!(
        render(&concat(member!(Post::title), member!(Post::body))),
        r#"("title" || "body")"#
    );
    assert_eq!(render(&sub(mul(member!(Post::id), 3), 1)), r#"(("id" * 3) - 1)"#);
}

#[test]
fn literals() {
    assert_eq!(render(&eq(member!(User::name), "it's")), r#"("name" = 'it''s')"#);
    assert_eq!(render(&eq(member!(User::email), None::<String>)), r#"("email" = NULL)"#);
    assert_eq!(render(&eq(member!(User::id), true)), r#"("id" = 1)"#);
    assert_eq!(render(&Value::from(vec![0xde_u8, 0xad])), "X'DEAD'");
}

#[test]
fn negation_covers_the_whole_operand() {
    assert_eq!(
        render(&eq(not(member!(User::id)), 0)),
        r#"((NOT ("id")) = 0)"#
    );
    assert_eq!(
        render(&not(or(is_null(member!(User::email)), eq(member!(User::id), 1)))),
        r#"(NOT ("email" IS NULL OR ("id" = 1)))"#
    );
}

#[test]
fn predicates() {
    assert_eq!(render(&is_null(member!(User::email))), r#""email" IS NULL"#);
    assert_eq!(
        render(&not(in_(member!(User::id), vec![1, 2]))),
        r#"(NOT ("id" IN (1, 2)))"#
    );
    assert_eq!(
        render(&like(member!(User::name), "a%")),
        r#""name" LIKE 'a%'"#
    );
    assert_eq!(
        render(&between(member!(User::id), add(1, 1), 5)),
        r#""id" BETWEEN (1 + 1) AND 5"#
    );
}

#[test]
fn parameters_are_collected_in_order() {
    let registry = common::registry();
    let ctx = SerializerContext::new(&registry).replace_bindable_with_question(true);
    let node = and(
        eq(member!(User::name), "ada"),
        in_(member!(User::id), (3, 4)),
    );

    let sql = node.to_sql(&ctx).unwrap();
    let (text, params) = sql.build();
    assert_eq!(text, r#"(("name" = ?) AND "id" IN (?, ?))"#);
    assert_eq!(
        params.into_iter().cloned().collect::<Vec<_>>(),
        vec![Value::from("ada"), Value::from(3), Value::from(4)]
    );
}
