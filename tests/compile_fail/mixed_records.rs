//! Test that a table whose columns belong to different records fails to compile.

use sqlweave::sqlite::prelude::*;

struct User {
    id: i64,
}
impl Record for User {}

struct Post {
    author: i64,
}
impl Record for Post {}

fn main() {
    // ERROR: `Column<Post, i64>` is not a column of `User`
    let _ = make_table::<User, _>(
        "users",
        (
            make_column("id", member!(User::id)),
            make_column("author", member!(Post::author)),
        ),
    );
}
