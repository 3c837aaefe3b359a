use sqlweave::core::TableKind;
use sqlweave::sqlite::prelude::*;

use crate::common::{self, Post, PostText, User};

#[test]
fn create_table_statements() {
    let registry = common::registry();
    let ctx = SerializerContext::new(&registry);

    assert_eq!(
        serialize(&common::users(), &ctx).unwrap(),
        r#"CREATE TABLE "users" ("id" INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL, "name" TEXT UNIQUE COLLATE NOCASE NOT NULL, "email" TEXT)"#
    );
    assert_eq!(
        serialize(&common::posts(), &ctx).unwrap(),
        r#"CREATE TABLE "posts" ("id" INTEGER PRIMARY KEY NOT NULL, "author_id" INTEGER NOT NULL, "title" TEXT DEFAULT ('') NOT NULL, "body" TEXT NOT NULL)"#
    );
}

#[test]
fn without_rowid_and_check_constraints() {
    struct Setting {
        key: String,
        value: f64,
        blob: Option<Vec<u8>>,
    }
    impl Record for Setting {}

    let settings = make_table(
        "settings",
        (
            make_column("key", member!(Setting::key)).with((primary_key(),)),
            make_column("value", member!(Setting::value))
                .with((check(gt(member!(Setting::value), 0)), default_value(1.5))),
            make_column("blob", member!(Setting::blob)),
        ),
    )
    .without_rowid();
    let registry = Registry::from_schema(&settings);
    let ctx = SerializerContext::new(&registry)
        .skip_table_name(false)
        .replace_bindable_with_question(true);

    assert!(settings.is_without_rowid());
    assert_eq!(
        serialize(&settings, &ctx).unwrap(),
        r#"CREATE TABLE "settings" ("key" TEXT PRIMARY KEY NOT NULL, "value" REAL CHECK ("value" > 0) DEFAULT (1.5) NOT NULL, "blob" BLOB) WITHOUT ROWID"#
    );
}

#[test]
fn registry_describes_every_table() {
    let registry = common::registry();
    assert_eq!(registry.len(), 5);

    let users = registry.table::<User>().unwrap();
    assert_eq!(users.name, "users");
    assert_eq!(users.kind, TableKind::Table);
    assert_eq!(users.columns.len(), 3);
    let email = users.column_by_field("email").unwrap();
    assert!(!email.not_null);
    assert_eq!(email.sql_type, Some("TEXT"));
    assert!(users.column("id").unwrap().primary_key);

    let text = registry.table::<PostText>().unwrap();
    assert_eq!(text.kind, TableKind::Virtual);
    assert_eq!(text.name, "post_text");
    assert!(text.columns.iter().all(|column| column.sql_type.is_none()));

    assert_eq!(registry.table_name::<Post>().unwrap(), "posts");
    assert_eq!(registry.column_name::<Post>("author").unwrap(), "author_id");
}

#[test]
fn lookups_report_what_is_missing() {
    struct Ghost;
    impl Record for Ghost {}

    let registry = common::registry();
    assert!(matches!(
        registry.table_name::<Ghost>(),
        Err(Error::TableNotFound { .. })
    ));
    assert!(matches!(
        registry.column_name::<User>("age"),
        Err(Error::ColumnNotFound { field: "age", .. })
    ));
}

#[test]
fn last_registration_wins() {
    let mut registry = common::registry();
    registry.register(&make_table(
        "people",
        (make_column("user_id", member!(User::id)),),
    ));

    assert_eq!(registry.len(), 5);
    assert_eq!(registry.table_name::<User>().unwrap(), "people");
    assert_eq!(registry.column_name::<User>("id").unwrap(), "user_id");
    assert!(registry.column_name::<User>("name").is_err());
}

#[test]
fn table_accessors() {
    let users = common::users();
    assert_eq!(users.name(), "users");
    assert!(!users.is_without_rowid());

    let name = users.column_by_field("name").unwrap();
    assert_eq!(name.name(), "name");
    assert_eq!(name.sql_type(), "TEXT");
    assert!(name.not_null());
    assert!(users.column_by_field("missing").is_none());
    assert_eq!(users.info().columns.len(), 3);
}
