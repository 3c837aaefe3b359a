//! Test that a column over a field with no SQLite storage class fails to compile.

use sqlweave::sqlite::prelude::*;

struct Tags;

struct Post {
    tags: Tags,
}
impl Record for Post {}

fn main() {
    // ERROR: `Tags` has no SQLite type
    let _ = make_column("tags", member!(Post::tags));
}
