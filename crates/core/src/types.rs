/// All database primary keys are SQLite INTEGER PRIMARY KEY (rowid alias).
pub type DbId = i64;
