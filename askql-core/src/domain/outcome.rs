// askql-core/src/domain/outcome.rs

use serde::Serialize;
use std::fmt;

pub const SUCCESS_MESSAGE: &str = "Query executed successfully";

/// The only branch the executor takes: does the trimmed statement start
/// with `select` (any case)?
pub fn is_select(sql: &str) -> bool {
    sql.trim()
        .get(..6)
        .is_some_and(|head| head.eq_ignore_ascii_case("select"))
}

/// A single value, already detached from the engine's own type system.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    Other(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Real(r) => write!(f, "{}", r),
            Self::Text(s) | Self::Other(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryOutcome {
    Rows {
        columns: Vec<String>,
        rows: Vec<Vec<CellValue>>,
    },
    Executed {
        message: String,
    },
}

impl QueryOutcome {
    pub fn executed() -> Self {
        Self::Executed {
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Number of fetched rows; `None` for a non-select statement.
    pub fn row_count(&self) -> Option<usize> {
        match self {
            Self::Rows { rows, .. } => Some(rows.len()),
            Self::Executed { .. } => None,
        }
    }

    /// One display line per row: `Ashutosh | Gen AI | A | 90`.
    pub fn row_lines(&self) -> Vec<String> {
        match self {
            Self::Rows { rows, .. } => rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" | ")
                })
                .collect(),
            Self::Executed { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_select() {
        assert!(is_select("select * from student"));
        assert!(is_select("  SELECT count(*) FROM STUDENT"));
        assert!(is_select("\n\tSelect 1"));
        assert!(!is_select("insert into student values ('a', 'b', 'c', 1)"));
        assert!(!is_select("WITH t AS (SELECT 1) SELECT * FROM t"));
        assert!(!is_select("sel"));
        assert!(!is_select(""));
    }

    #[test]
    fn test_row_lines() {
        let outcome = QueryOutcome::Rows {
            columns: vec!["NAME".into(), "MARKS".into()],
            rows: vec![
                vec![CellValue::Text("Nidhi".into()), CellValue::Integer(50)],
                vec![CellValue::Null, CellValue::Real(1.5)],
            ],
        };
        assert_eq!(outcome.row_count(), Some(2));
        assert_eq!(outcome.row_lines(), vec!["Nidhi | 50", "NULL | 1.5"]);
    }

    #[test]
    fn test_executed_outcome() {
        let outcome = QueryOutcome::executed();
        assert_eq!(outcome.row_count(), None);
        assert_eq!(
            outcome,
            QueryOutcome::Executed {
                message: "Query executed successfully".into()
            }
        );
    }

    #[test]
    fn test_outcome_serialization() -> anyhow::Result<()> {
        let outcome = QueryOutcome::Rows {
            columns: vec!["count_star()".into()],
            rows: vec![vec![CellValue::Integer(5)]],
        };
        let json = serde_json::to_value(&outcome)?;
        assert_eq!(json["kind"], "rows");
        assert_eq!(json["rows"][0][0], 5);
        Ok(())
    }
}
