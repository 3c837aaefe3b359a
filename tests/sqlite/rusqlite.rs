use sqlweave::core::{Value, execute};
use sqlweave::rusqlite::Connection;
use sqlweave::sqlite::prelude::*;

use crate::common::{self, Post, PostText, User};

fn setup_db(registry: &Registry) -> Connection {
    let mut conn = Connection::open_in_memory().expect("in-memory database");
    let ctx = SerializerContext::new(registry);
    execute(&mut conn, &common::users(), &ctx).expect("create users");
    execute(&mut conn, &common::posts(), &ctx).expect("create posts");
    execute(&mut conn, &common::post_text(), &ctx).expect("create post_text");
    conn
}

fn insert_user(conn: &mut Connection, registry: &Registry, name: &str, email: Option<&str>) {
    let ctx = SerializerContext::new(registry).replace_bindable_with_question(true);
    let statement = insert::<User>()
        .columns((member!(User::name), member!(User::email)))
        .values((name, email));
    execute(conn, &statement, &ctx).expect("insert user");
}

#[test]
fn select_with_bound_parameters() {
    let registry = common::registry();
    let mut conn = setup_db(&registry);
    insert_user(&mut conn, &registry, "ada", Some("ada@example.com"));
    insert_user(&mut conn, &registry, "bob", None);
    insert_user(&mut conn, &registry, "cy", Some("cy@example.com"));

    let ctx = SerializerContext::new(&registry).replace_bindable_with_question(true);
    let query = select((member!(User::id), member!(User::name)))
        .from::<User>()
        .filter(and(is_not_null(member!(User::email)), ne(member!(User::name), "cy")))
        .order_by((asc(member!(User::id)),));

    let rows = execute(&mut conn, &query, &ctx).unwrap();
    assert_eq!(rows, vec![vec![Value::from(1), Value::from("ada")]]);
}

#[test]
fn nocase_unique_names_are_enforced() {
    let registry = common::registry();
    let mut conn = setup_db(&registry);
    insert_user(&mut conn, &registry, "ada", None);

    let ctx = SerializerContext::new(&registry).replace_bindable_with_question(true);
    let statement = insert::<User>()
        .columns((member!(User::name),))
        .values(("ADA",));
    let duplicate = execute(&mut conn, &statement, &ctx);
    assert!(matches!(duplicate, Err(Error::Rusqlite(_))));
}

#[test]
fn delete_then_count() {
    let registry = common::registry();
    let mut conn = setup_db(&registry);
    insert_user(&mut conn, &registry, "ada", None);
    insert_user(&mut conn, &registry, "bob", None);

    let ctx = SerializerContext::new(&registry).replace_bindable_with_question(true);
    let removed = delete::<User>().filter(eq(member!(User::name), "bob"));
    execute(&mut conn, &removed, &ctx).unwrap();

    let count = select((count_all(),)).from::<User>();
    let rows = execute(&mut conn, &count, &ctx).unwrap();
    assert_eq!(rows, vec![vec![Value::from(1)]]);
}

#[test]
fn fts5_virtual_table_accepts_rows() {
    let registry = common::registry();
    let mut conn = setup_db(&registry);
    let ctx = SerializerContext::new(&registry);
    let statement = insert::<PostText>()
        .columns((member!(PostText::title), member!(PostText::body)))
        .values(("hello", "full text search"));
    execute(&mut conn, &statement, &ctx).unwrap();

    let query = select((member!(PostText::title), member!(PostText::body))).from::<PostText>();
    let rows = execute(&mut conn, &query, &ctx).unwrap();
    assert_eq!(
        rows,
        vec![vec![Value::from("hello"), Value::from("full text search")]]
    );
}

#[test]
fn update_then_select() {
    let registry = common::registry();
    let mut conn = setup_db(&registry);
    insert_user(&mut conn, &registry, "ada", None);
    insert_user(&mut conn, &registry, "bob", None);

    let ctx = SerializerContext::new(&registry).replace_bindable_with_question(true);
    let statement = update::<User>()
        .set((assign(member!(User::email), "bob@example.com"),))
        .filter(eq(member!(User::name), "bob"));
    execute(&mut conn, &statement, &ctx).unwrap();

    let query = select((member!(User::name), member!(User::email)))
        .from::<User>()
        .filter(is_not_null(member!(User::email)));
    let rows = execute(&mut conn, &query, &ctx).unwrap();
    assert_eq!(
        rows,
        vec![vec![Value::from("bob"), Value::from("bob@example.com")]]
    );
}

#[test]
fn grouped_counts_per_author() {
    let registry = common::registry();
    let mut conn = setup_db(&registry);
    insert_user(&mut conn, &registry, "ada", None);
    insert_user(&mut conn, &registry, "bob", None);

    let ctx = SerializerContext::new(&registry).replace_bindable_with_question(true);
    for (author, title) in [(1, "a"), (1, "b"), (2, "c")] {
        let statement = insert::<Post>()
            .columns((member!(Post::author), member!(Post::title), member!(Post::body)))
            .values((author, title, ""));
        execute(&mut conn, &statement, &ctx).unwrap();
    }

    let query = select((member!(Post::author), count_all()))
        .from::<Post>()
        .group_by((member!(Post::author),))
        .having(gt(count_all(), 1));
    let rows = execute(&mut conn, &query, &ctx).unwrap();
    assert_eq!(rows, vec![vec![Value::from(1), Value::from(2)]]);
}

#[test]
fn negated_column_compares_as_a_whole() {
    let registry = common::registry();
    let mut conn = setup_db(&registry);
    insert_user(&mut conn, &registry, "ada", None);

    // NOT ("id") is 0 for any non-zero id, so no row matches 5.
    let ctx = SerializerContext::new(&registry);
    let query = select((member!(User::id),))
        .from::<User>()
        .filter(eq(not(member!(User::id)), 5));
    let rows = execute(&mut conn, &query, &ctx).unwrap();
    assert!(rows.is_empty());
}
