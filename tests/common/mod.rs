//! Shared schema for the integration tests.

use sqlweave::sqlite::prelude::*;

pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}
impl Record for User {}

pub struct Post {
    pub id: i64,
    pub author: i64,
    pub title: String,
    pub body: String,
}
impl Record for Post {}

/// Full-text index over posts.
pub struct PostText {
    pub title: String,
    pub body: String,
}
impl Record for PostText {}

/// `Object1` and `Object2` both have an `id` field, mapped to different
/// column names.
pub struct Object1 {
    pub id: i64,
}
impl Record for Object1 {}

pub struct Object2 {
    pub id: i64,
}
impl Record for Object2 {}

pub fn users() -> Table<User, impl Columns<User>> {
    make_table(
        "users",
        (
            make_column("id", member!(User::id)).with((primary_key().autoincrement(),)),
            make_column("name", member!(User::name)).with((unique(), collate(Collation::Nocase))),
            make_column("email", member!(User::email)),
        ),
    )
}

pub fn posts() -> Table<Post, impl Columns<Post>> {
    make_table(
        "posts",
        (
            make_column("id", member!(Post::id)).with((primary_key(),)),
            make_column("author_id", member!(Post::author)),
            make_column("title", member!(Post::title)).with((default_value(""),)),
            make_column("body", member!(Post::body)),
        ),
    )
}

pub type PostTextColumns = (Column<PostText, String>, Column<PostText, String>);

pub fn post_text() -> VirtualTable<PostText, UsingFts5<PostTextColumns>> {
    make_virtual_table::<PostText, _>(
        "post_text",
        using_fts5((
            make_column("title", member!(PostText::title)),
            make_column("body", member!(PostText::body)),
        )),
    )
}

pub fn objects() -> (Table<Object1, impl Columns<Object1>>, Table<Object2, impl Columns<Object2>>) {
    (
        make_table("object1", (make_column("id", member!(Object1::id)),)),
        make_table("object2", (make_column("id2", member!(Object2::id)),)),
    )
}

/// Registry over every table of the shared schema.
pub fn registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .register(&users())
        .register(&posts())
        .register(&post_text())
        .register(&objects());
    registry
}
