use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

const CREATE_OPERATION_LOG_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS operation_log (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        operation TEXT NOT NULL,
        operand1 REAL NOT NULL,
        operand2 REAL,
        result REAL,
        timestamp TEXT NOT NULL
    );
"#;

const CREATE_OPERATION_LOG_TIMESTAMP_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_operation_log_timestamp
    ON operation_log (timestamp);
"#;

/// Open the database and make sure the operation log table exists.
pub async fn initialize_database(db_url: &str) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = sqlite_file_path(db_url).and_then(|p| p.parent().map(|d| d.to_path_buf()))
    {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(&parent)?;
        }
    }

    let mut options = ConnectOptions::new(db_url.to_string());
    options.sqlx_logging(false);
    if is_sqlite_memory(db_url) {
        // every pooled connection to :memory: would see its own empty database
        options.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(options).await?;
    ensure_schema(&conn).await?;
    tracing::info!("Database ready: {}", db_url);
    Ok(conn)
}

pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let backend = conn.get_database_backend();
    for sql in [CREATE_OPERATION_LOG_TABLE, CREATE_OPERATION_LOG_TIMESTAMP_INDEX] {
        conn.execute(Statement::from_string(backend, sql.to_string()))
            .await?;
    }
    Ok(())
}

fn is_sqlite_memory(db_url: &str) -> bool {
    db_url.starts_with("sqlite:") && db_url.contains(":memory:")
}

/// File path of a `sqlite://path?params` URL, `None` for in-memory or non-sqlite URLs
fn sqlite_file_path(db_url: &str) -> Option<std::path::PathBuf> {
    if is_sqlite_memory(db_url) {
        return None;
    }
    let rest = db_url
        .strip_prefix("sqlite://")
        .or_else(|| db_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_sqlite_file_path() {
        assert_eq!(
            sqlite_file_path("sqlite://target/db/calculator.db?mode=rwc"),
            Some(PathBuf::from("target/db/calculator.db"))
        );
        assert_eq!(
            sqlite_file_path("sqlite:/tmp/calc.db"),
            Some(PathBuf::from("/tmp/calc.db"))
        );
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/calc"), None);
    }

    #[tokio::test]
    async fn test_initialize_in_memory_database_is_idempotent() {
        let conn = initialize_database("sqlite::memory:").await.unwrap();
        ensure_schema(&conn).await.unwrap();
    }
}
