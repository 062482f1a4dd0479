// askql-core/src/application/pipeline.rs

// question -> prompt -> model -> SQL -> guard -> execute -> outcome
//
// A failing statement is part of the answer (shown next to the SQL that
// produced it). Only failures before there is any SQL to show are returned
// as errors.

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::application::engine::execute_query;
use crate::domain::error::DomainError;
use crate::domain::guard::StatementGuard;
use crate::domain::outcome::QueryOutcome;
use crate::error::AskqlError;
use crate::infrastructure::prompt::PromptRenderer;
use crate::ports::connector::Connector;
use crate::ports::generator::SqlGenerator;

#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub question: String,
    pub sql: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<QueryOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Answer {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

pub struct AskPipeline {
    generator: Arc<dyn SqlGenerator>,
    connector: Arc<dyn Connector>,
    prompt: PromptRenderer<'static>,
    guard: StatementGuard,
}

impl AskPipeline {
    pub fn new(
        generator: Arc<dyn SqlGenerator>,
        connector: Arc<dyn Connector>,
        guard: StatementGuard,
    ) -> Self {
        let prompt = PromptRenderer::new(connector.dialect());
        Self {
            generator,
            connector,
            prompt,
            guard,
        }
    }

    pub fn connector(&self) -> &dyn Connector {
        self.connector.as_ref()
    }

    #[instrument(skip(self), fields(model = self.generator.model_name(), guard = %self.guard.mode()))]
    pub async fn ask(&self, question: &str) -> Result<Answer, AskqlError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(DomainError::EmptyQuestion.into());
        }

        let prompt = self.prompt.render(question)?;
        let completion = self.generator.generate(&prompt).await?;

        let sql = strip_code_fence(&completion);
        if sql.is_empty() {
            return Err(DomainError::EmptyCompletion.into());
        }
        info!(sql = %sql, "Generated SQL");

        let result = match self.guard.check(&sql, self.connector.dialect()) {
            Ok(_) => execute_query(self.connector.as_ref(), &sql).await,
            Err(rejection) => {
                warn!(%rejection, "Generated statement blocked");
                Err(rejection.into())
            }
        };

        let (outcome, error) = match result {
            Ok(outcome) => (Some(outcome), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Ok(Answer {
            question: question.to_string(),
            sql,
            outcome,
            error,
        })
    }
}

/// Trims the completion and removes a surrounding ``` fence, in case the
/// model ignores the "no markdown" rule.
pub fn strip_code_fence(text: &str) -> String {
    let text = text.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // Drop the info string (```sql) up to the first newline.
        let body = match rest.find('\n') {
            Some(idx) => &rest[idx + 1..],
            None => rest,
        };
        let body = body.strip_suffix("```").unwrap_or(body);
        return body.trim().to_string();
    }

    text.to_string()
}
