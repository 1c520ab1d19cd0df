//! Database schema for the visited-URL store

/// SQL schema for the database
///
/// A single table; the URL string itself is the primary key, so duplicate
/// inserts are constraint no-ops rather than errors.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS links (
    url TEXT PRIMARY KEY
);
"#;

/// Initializes the database schema
///
/// Safe to call on every startup; `CREATE TABLE IF NOT EXISTS` makes it
/// idempotent.
///
/// # Arguments
///
/// * `conn` - The database connection
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
