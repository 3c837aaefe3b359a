//! Test that a virtual table over a node without a `USING` base fails to compile.

use sqlweave::sqlite::prelude::*;

struct Post {
    title: String,
}
impl Record for Post {}

fn main() {
    // ERROR: `Column<Post, String>` has no `UsingFamily` base
    let _ = make_virtual_table::<Post, _>(
        "posts",
        make_column("title", member!(Post::title)),
    );
}
