use sqlweave::sqlite::prelude::*;

use crate::common::{self, Post, User};

#[test]
fn select_from_users() {
    let registry = common::registry();
    let ctx = SerializerContext::new(&registry);
    let query = select((member!(User::id), member!(User::name)))
        .from::<User>()
        .filter(is_not_null(member!(User::email)))
        .order_by((asc(member!(User::name)), desc(member!(User::id))))
        .limit(20);

    assert_eq!(
        serialize(&query, &ctx).unwrap(),
        r#"SELECT "id", "name" FROM "users" WHERE "email" IS NOT NULL ORDER BY "name" ASC, "id" DESC LIMIT 20"#
    );
}

#[test]
fn select_without_from() {
    let registry = common::registry();
    let ctx = SerializerContext::new(&registry);
    assert_eq!(serialize(&select((1, "a")), &ctx).unwrap(), "SELECT 1, 'a'");
}

#[test]
fn nested_select_in_list() {
    let registry = common::registry();
    let ctx = SerializerContext::new(&registry).skip_table_name(false);
    let authors = select((member!(User::id),))
        .from::<User>()
        .filter(like(member!(User::name), "a%"));
    let query = select((count_all(),))
        .from::<Post>()
        .filter(in_(member!(Post::author), (authors,)));

    assert_eq!(
        serialize(&query, &ctx).unwrap(),
        r#"SELECT COUNT(*) FROM "posts" WHERE "posts"."author_id" IN ((SELECT "users"."id" FROM "users" WHERE "users"."name" LIKE 'a%'))"#
    );
}

#[test]
fn delete_with_bound_filter() {
    let registry = common::registry();
    let ctx = SerializerContext::new(&registry).replace_bindable_with_question(true);
    let statement = delete::<Post>().filter(and(
        eq(member!(Post::author), 2),
        not(like(member!(Post::title), "draft%")),
    ));

    let sql = statement.to_sql(&ctx).unwrap();
    let (text, params) = sql.build();
    assert_eq!(
        text,
        r#"DELETE FROM "posts" WHERE ("author_id" = ?) AND (NOT ("title" LIKE ?))"#
    );
    assert_eq!(params.len(), 2);
}

#[test]
fn select_is_idempotent() {
    let registry = common::registry();
    let ctx = SerializerContext::new(&registry);
    let query = select((member!(Post::title),)).from::<Post>().offset(3);

    let text = serialize(&query, &ctx).unwrap();
    assert_eq!(text, r#"SELECT "title" FROM "posts" LIMIT -1 OFFSET 3"#);
    assert_eq!(serialize(&query, &ctx).unwrap(), text);
}
