// askql-core/src/infrastructure/prompt.rs

// Wraps the user's question in the fixed instructions sent to the model.

use minijinja::{Environment, context};

use crate::domain::dialect::SqlDialect;
use crate::domain::student::schema_reminder;
use crate::infrastructure::error::InfrastructureError;

pub const PROMPT_TEMPLATE: &str = "You are an expert {{ dialect }} SQL developer.

Convert the user's natural language question into a valid {{ dialect }} SQL query.

Rules:
- Output ONLY SQL
- No explanation
- No markdown
- {{ dialect }} compatible

Existing table:
{{ schema }}

User question:
{{ question }}
";

/// Asks for SQL in the dialect of the engine that will run it.
pub struct PromptRenderer<'a> {
    env: Environment<'a>,
    schema: String,
    dialect: SqlDialect,
}

impl<'a> PromptRenderer<'a> {
    pub fn new(dialect: SqlDialect) -> Self {
        Self {
            env: Environment::new(),
            schema: schema_reminder(),
            dialect,
        }
    }

    pub fn render(&self, question: &str) -> Result<String, InfrastructureError> {
        self.env
            .render_str(
                PROMPT_TEMPLATE,
                context! {
                    dialect => self.dialect.display_name(),
                    schema => &self.schema,
                    question => question.trim(),
                },
            )
            .map_err(InfrastructureError::TemplateError)
    }
}

impl<'a> Default for PromptRenderer<'a> {
    fn default() -> Self {
        Self::new(SqlDialect::default())
    }
}
