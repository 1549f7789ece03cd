use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct QuizQuery {
    #[validate(required, length(min = 1))]
    pub topic: Option<String>,
}

impl QuizQuery {
    /// Validates the query and hands back the trimmed topic.
    pub fn into_topic(self) -> AppResult<String> {
        self.validate()?;

        let topic = self.topic.unwrap_or_default().trim().to_string();
        if topic.is_empty() {
            return Err(AppError::ValidationError("Topic is required".to_string()));
        }
        Ok(topic)
    }
}
