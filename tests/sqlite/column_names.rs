use sqlweave::sqlite::prelude::*;

use crate::common::{self, Object1, Object2, Post, User};

#[test]
fn bare_column_names_by_default() {
    let registry = common::registry();
    let ctx = SerializerContext::new(&registry);

    assert_eq!(serialize(&member!(User::id), &ctx).unwrap(), r#""id""#);
    assert_eq!(serialize(&member!(Post::author), &ctx).unwrap(), r#""author_id""#);
}

#[test]
fn qualified_column_names() {
    let registry = common::registry();
    let ctx = SerializerContext::new(&registry).skip_table_name(false);

    assert_eq!(serialize(&member!(User::id), &ctx).unwrap(), r#""users"."id""#);
    assert_eq!(
        serialize(&member!(Post::author), &ctx).unwrap(),
        r#""posts"."author_id""#
    );
}

#[test]
fn same_field_name_resolves_per_record() {
    let registry = common::registry();
    let ctx = SerializerContext::new(&registry);

    assert_eq!(serialize(&member!(Object1::id), &ctx).unwrap(), r#""id""#);
    assert_eq!(serialize(&member!(Object2::id), &ctx).unwrap(), r#""id2""#);

    let qualified = ctx.skip_table_name(false);
    assert_eq!(
        serialize(&member!(Object1::id), &qualified).unwrap(),
        r#""object1"."id""#
    );
    assert_eq!(
        serialize(&member!(Object2::id), &qualified).unwrap(),
        r#""object2"."id2""#
    );
}

#[test]
fn members_read_fields() {
    let user = User {
        id: 4,
        name: "ada".into(),
        email: Some("ada@example.com".into()),
    };
    assert_eq!(*member!(User::id).get(&user), 4);
    assert_eq!(member!(User::name).get(&user), "ada");
    assert_eq!(member!(User::email).get(&user).as_deref(), Some("ada@example.com"));
    assert_eq!(member!(User::email).field(), "email");
}

#[test]
fn unmapped_fields_are_errors() {
    let registry = common::registry();
    let ctx = SerializerContext::new(&registry);
    let title = member!(Post::title);

    let empty = Registry::new();
    assert!(matches!(
        serialize(&title, &SerializerContext::new(&empty)),
        Err(Error::TableNotFound { .. })
    ));
    assert_eq!(serialize(&title, &ctx).unwrap(), r#""title""#);
}
