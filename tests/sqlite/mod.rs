mod column_names;
mod expressions;
mod fts5;
mod schema;
mod select;

#[cfg(feature = "rusqlite")]
mod rusqlite;
