// askql-core/src/domain/guard.rs

// Model output is never trusted as safe. Every generated statement is parsed
// and classified before it reaches the connector; the active mode decides
// which classes may run.

use serde::{Deserialize, Serialize};
use sqlparser::ast::Statement;
use std::fmt;

use crate::domain::dialect::SqlDialect;
use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// SELECT, WITH ... SELECT, VALUES
    Read,
    /// INSERT, UPDATE, DELETE, REPLACE
    Write,
    /// CREATE, DROP, ALTER, ATTACH, PRAGMA...
    Schema,
    Other,
}

impl StatementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Schema => "schema",
            Self::Other => "other",
        }
    }

    pub fn of(statement: &Statement) -> Self {
        if let Statement::Query(_) = statement {
            return Self::Read;
        }

        // The rendered statement always starts with its leading keyword.
        let rendered = statement.to_string();
        let keyword = rendered
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_ascii_uppercase();

        match keyword.as_str() {
            "INSERT" | "UPDATE" | "DELETE" | "REPLACE" => Self::Write,
            "CREATE" | "DROP" | "ALTER" | "TRUNCATE" | "ATTACH" | "DETACH" | "PRAGMA"
            | "VACUUM" | "REINDEX" => Self::Schema,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GuardMode {
    ReadOnly,
    #[default]
    ReadWrite,
    /// No parsing, no classification: the statement runs as generated.
    Unrestricted,
}

impl GuardMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadOnly => "read_only",
            Self::ReadWrite => "read_write",
            Self::Unrestricted => "unrestricted",
        }
    }

    pub fn allows(&self, kind: StatementKind) -> bool {
        match self {
            Self::ReadOnly => kind == StatementKind::Read,
            Self::ReadWrite => matches!(kind, StatementKind::Read | StatementKind::Write),
            Self::Unrestricted => true,
        }
    }
}

impl fmt::Display for GuardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GuardMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "read_only" | "readonly" => Ok(Self::ReadOnly),
            "read_write" | "readwrite" => Ok(Self::ReadWrite),
            "unrestricted" | "off" => Ok(Self::Unrestricted),
            _ => Err(DomainError::UnknownGuardMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatementGuard {
    mode: GuardMode,
}

impl StatementGuard {
    pub fn new(mode: GuardMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> GuardMode {
        self.mode
    }

    /// Returns the statement's class when the mode allows it to run.
    /// In `unrestricted` mode nothing is parsed and `None` is returned.
    pub fn check(
        &self,
        sql: &str,
        dialect: SqlDialect,
    ) -> Result<Option<StatementKind>, DomainError> {
        if self.mode == GuardMode::Unrestricted {
            return Ok(None);
        }

        let statements = dialect
            .parse(sql)
            .map_err(|e| DomainError::UnparsableStatement(e.to_string()))?;

        let statement = match statements.as_slice() {
            [single] => single,
            other => return Err(DomainError::MultipleStatements(other.len())),
        };

        let kind = StatementKind::of(statement);
        if !self.mode.allows(kind) {
            return Err(DomainError::StatementRejected {
                kind,
                mode: self.mode,
            });
        }

        tracing::debug!(%kind, mode = %self.mode, "Statement accepted by guard");
        Ok(Some(kind))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SQLITE: SqlDialect = SqlDialect::Sqlite;

    #[test]
    fn test_read_only_accepts_select() {
        let guard = StatementGuard::new(GuardMode::ReadOnly);
        let kind = guard.check("select count(*) from student", SQLITE).unwrap();
        assert_eq!(kind, Some(StatementKind::Read));

        let kind = guard
            .check(
                "WITH top AS (SELECT * FROM STUDENT WHERE MARKS > 80) SELECT NAME FROM top",
                SQLITE,
            )
            .unwrap();
        assert_eq!(kind, Some(StatementKind::Read));
    }

    #[test]
    fn test_read_only_rejects_insert() {
        let guard = StatementGuard::new(GuardMode::ReadOnly);
        let result = guard.check("INSERT INTO STUDENT VALUES ('Zed', 'Rust', 'C', 77)", SQLITE);
        match result {
            Err(DomainError::StatementRejected { kind, mode }) => {
                assert_eq!(kind, StatementKind::Write);
                assert_eq!(mode, GuardMode::ReadOnly);
            }
            other => panic!("Expected StatementRejected, got {:?}", other),
        }
    }

    #[test]
    fn test_read_write_accepts_dml() {
        let guard = StatementGuard::default();
        for sql in [
            "INSERT INTO STUDENT VALUES ('Zed', 'Rust', 'C', 77)",
            "UPDATE STUDENT SET MARKS = 95 WHERE NAME = 'Nidhi'",
            "DELETE FROM STUDENT WHERE MARKS < 40",
        ] {
            assert_eq!(
                guard.check(sql, SQLITE).unwrap(),
                Some(StatementKind::Write),
                "{sql}"
            );
        }
    }

    #[test]
    fn test_read_write_rejects_ddl() {
        let guard = StatementGuard::new(GuardMode::ReadWrite);
        let err = guard.check("DROP TABLE STUDENT", SQLITE).unwrap_err();
        assert!(matches!(
            err,
            DomainError::StatementRejected {
                kind: StatementKind::Schema,
                ..
            }
        ));
        assert!(err.to_string().contains("schema statements are not allowed"));

        let err = guard
            .check("ALTER TABLE STUDENT ADD COLUMN AGE INTEGER", SQLITE)
            .unwrap_err();
        assert!(matches!(err, DomainError::StatementRejected { .. }));
    }

    #[test]
    fn test_rejects_multiple_statements() {
        let guard = StatementGuard::new(GuardMode::ReadWrite);
        let err = guard
            .check("SELECT * FROM STUDENT; DROP TABLE STUDENT", SQLITE)
            .unwrap_err();
        assert!(matches!(err, DomainError::MultipleStatements(2)));
    }

    #[test]
    fn test_rejects_unparsable() {
        let guard = StatementGuard::new(GuardMode::ReadOnly);
        let err = guard.check("SELEC * FROM STUDENT", SQLITE).unwrap_err();
        assert!(matches!(err, DomainError::UnparsableStatement(_)));
    }

    #[test]
    fn test_unrestricted_skips_parsing() {
        let guard = StatementGuard::new(GuardMode::Unrestricted);
        assert_eq!(guard.check("DROP TABLE STUDENT", SQLITE).unwrap(), None);
        assert_eq!(guard.check("not even sql", SQLITE).unwrap(), None);
    }

    #[test]
    fn test_guard_mode_from_str() {
        assert_eq!("read-only".parse::<GuardMode>().unwrap(), GuardMode::ReadOnly);
        assert_eq!("READ_WRITE".parse::<GuardMode>().unwrap(), GuardMode::ReadWrite);
        assert_eq!("off".parse::<GuardMode>().unwrap(), GuardMode::Unrestricted);
        assert!("yolo".parse::<GuardMode>().is_err());
    }
}
