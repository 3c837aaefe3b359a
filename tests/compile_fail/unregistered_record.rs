//! Test that a column over a type that is not a `Record` fails to compile.

use sqlweave::sqlite::prelude::*;

struct Loose {
    id: i64,
}

fn main() {
    // ERROR: `Loose` does not implement `Record`
    let _ = make_column("id", member!(Loose::id));
}
