// askql-core/src/application/engine.rs

use std::time::Instant;
use tracing::{debug, error, instrument};

use crate::domain::outcome::QueryOutcome;
use crate::error::AskqlError;
use crate::ports::connector::Connector;

/// Runs one SQL statement with instrumentation (logs + timing).
/// Failures are logged here with their timing and returned untouched.
#[instrument(skip(connector, query), fields(query.len = query.len()))]
pub async fn execute_query(
    connector: &dyn Connector,
    query: &str,
) -> Result<QueryOutcome, AskqlError> {
    let start = Instant::now();
    debug!("⚡ Executing Query: {}", query);

    let result = connector.run_statement(query).await;
    let duration = start.elapsed();

    match result {
        Ok(outcome) => {
            debug!(rows = ?outcome.row_count(), "✅ Query finished in {:.2?}", duration);
            Ok(outcome)
        }
        Err(e) => {
            error!("❌ Query failed after {:.2?}: {}", duration, e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::bootstrap::init_database;
    use crate::domain::outcome::SUCCESS_MESSAGE;
    use crate::domain::student::COUNT_SQL;
    use crate::domain::DomainError;
    use crate::domain::outcome::CellValue;
    use crate::infrastructure::adapters::SqliteConnector;
    use anyhow::Result;

    async fn seeded() -> Result<(tempfile::TempDir, SqliteConnector)> {
        let dir = tempfile::tempdir()?;
        let connector = SqliteConnector::new(dir.path().join("student.db"))?;
        init_database(&connector).await?;
        Ok((dir, connector))
    }

    #[tokio::test]
    async fn test_select_returns_every_row() -> Result<()> {
        let (_dir, connector) = seeded().await?;
        let count = connector.query_scalar(COUNT_SQL).await?;

        let outcome = execute_query(&connector, "select * from student").await?;
        assert_eq!(outcome.row_count(), Some(count as usize));

        match outcome {
            QueryOutcome::Rows { columns, .. } => {
                let upper: Vec<String> = columns.iter().map(|c| c.to_uppercase()).collect();
                assert_eq!(upper, vec!["NAME", "CLASS", "SECTION", "MARKS"]);
            }
            other => panic!("Expected rows, got {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_insert_returns_success_message() -> Result<()> {
        let (_dir, connector) = seeded().await?;

        let outcome = execute_query(
            &connector,
            "insert into student values ('Zed', 'Rust', 'C', 77)",
        )
        .await?;

        assert_eq!(
            outcome,
            QueryOutcome::Executed {
                message: SUCCESS_MESSAGE.to_string()
            }
        );
        assert_eq!(connector.query_scalar(COUNT_SQL).await?, 6);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_sql_carries_driver_message() -> Result<()> {
        let (_dir, connector) = seeded().await?;

        let err = match execute_query(&connector, "SELEC * FROM student").await {
            Err(e) => e,
            Ok(outcome) => panic!("Expected an error, got {:?}", outcome),
        };

        let message = err.to_string();
        assert!(message.starts_with("SQLite Engine Error"), "{message}");
        assert!(message.to_lowercase().contains("syntax error"), "{message}");
        Ok(())
    }

    fn first_column(outcome: QueryOutcome) -> Vec<CellValue> {
        match outcome {
            QueryOutcome::Rows { rows, .. } => rows.into_iter().map(|mut r| r.remove(0)).collect(),
            other => panic!("Expected rows, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_like_is_case_insensitive() -> Result<()> {
        let (_dir, connector) = seeded().await?;

        let outcome = execute_query(
            &connector,
            "SELECT NAME FROM STUDENT WHERE NAME LIKE 'a%' ORDER BY NAME",
        )
        .await?;
        assert_eq!(
            first_column(outcome),
            vec![
                CellValue::Text("Anupam".into()),
                CellValue::Text("Ashutosh".into())
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_integer_division_and_affinity() -> Result<()> {
        let (_dir, connector) = seeded().await?;

        let outcome = execute_query(&connector, "SELECT SUM(MARKS)/COUNT(*) FROM STUDENT").await?;
        assert_eq!(first_column(outcome), vec![CellValue::Integer(72)]);

        // A column's declared type does not reject other values.
        execute_query(
            &connector,
            "INSERT INTO STUDENT VALUES ('X', 'Y', 'Z', 'absent')",
        )
        .await?;
        assert_eq!(connector.query_scalar(COUNT_SQL).await?, 6);
        Ok(())
    }

    #[tokio::test]
    async fn test_multiple_statements_are_refused() -> Result<()> {
        let (_dir, connector) = seeded().await?;

        let err = match execute_query(&connector, "DELETE FROM STUDENT; SELECT 1").await {
            Err(e) => e,
            Ok(outcome) => panic!("Expected an error, got {:?}", outcome),
        };
        assert!(matches!(
            err,
            AskqlError::Domain(DomainError::MultipleStatements(2))
        ));

        // The DELETE never ran.
        assert_eq!(connector.query_scalar(COUNT_SQL).await?, 5);
        Ok(())
    }
}
