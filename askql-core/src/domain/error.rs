// askql-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::guard::{GuardMode, StatementKind};

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Question is empty")]
    #[diagnostic(
        code(askql::domain::empty_question),
        help("Type a question about the STUDENT table.")
    )]
    EmptyQuestion,

    #[error("The model returned no SQL")]
    #[diagnostic(code(askql::domain::empty_completion))]
    EmptyCompletion,

    #[error("Statement rejected: {kind} statements are not allowed in {mode} mode")]
    #[diagnostic(
        code(askql::domain::guard),
        help("Rephrase the question, or relax the guard with --guard.")
    )]
    StatementRejected { kind: StatementKind, mode: GuardMode },

    #[error("Statement rejected: expected exactly one statement, got {0}")]
    #[diagnostic(code(askql::domain::guard))]
    MultipleStatements(usize),

    #[error("Statement rejected: could not parse SQL ({0})")]
    #[diagnostic(code(askql::domain::guard))]
    UnparsableStatement(String),

    #[error("Unknown guard mode: {0}")]
    #[diagnostic(
        code(askql::domain::guard_mode),
        help("Expected one of: read_only, read_write, unrestricted.")
    )]
    UnknownGuardMode(String),

    #[error("Unknown SQL dialect: {0}")]
    #[diagnostic(
        code(askql::domain::dialect),
        help("Expected one of: sqlite, duckdb.")
    )]
    UnknownDialect(String),
}
