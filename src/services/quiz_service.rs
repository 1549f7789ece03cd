use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    generator::{self, RandomSource, RngSource},
    models::domain::QuestionRecord,
    repositories::ArticleRepository,
    services::html_helpers::extract_paragraphs,
};

pub struct QuizService {
    repository: Arc<dyn ArticleRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    pub async fn generate_quiz(&self, topic: &str) -> AppResult<Vec<QuestionRecord>> {
        let mut source = RngSource::new(rand::thread_rng());
        self.generate_quiz_with(topic, &mut source).await
    }

    /// Same as [`QuizService::generate_quiz`] with the caller's random source.
    pub async fn generate_quiz_with(
        &self,
        topic: &str,
        source: &mut impl RandomSource,
    ) -> AppResult<Vec<QuestionRecord>> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(AppError::ValidationError("Topic is required".to_string()));
        }

        let html = self.repository.fetch_article_html(topic).await?;
        let paragraphs = extract_paragraphs(&html);
        log::info!(
            "Found {} paragraphs for topic '{}'",
            paragraphs.len(),
            topic
        );

        let quiz = generator::generate_quiz(topic, &paragraphs, source)?;
        log::info!("Generated {} questions for topic '{}'", quiz.len(), topic);

        Ok(quiz)
    }
}
