//! Test that a member access to a field that does not exist fails to compile.

use sqlweave::sqlite::prelude::*;

struct User {
    id: i64,
}
impl Record for User {}

fn main() {
    // ERROR: no field `email` on type `User`
    let _ = make_column("email", member!(User::email));
}
