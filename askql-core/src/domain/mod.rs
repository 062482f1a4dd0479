pub mod dialect;
pub mod error;
pub mod guard;
pub mod outcome;
pub mod student;

pub use dialect::SqlDialect;
pub use error::DomainError;
pub use guard::{GuardMode, StatementGuard, StatementKind};
pub use outcome::{CellValue, QueryOutcome, SUCCESS_MESSAGE, is_select};
pub use student::Student;
