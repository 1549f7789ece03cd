use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::WikipediaArticleRepository,
    services::QuizService,
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let article_repository = Arc::new(WikipediaArticleRepository::new(&config)?);
        let quiz_service = Arc::new(QuizService::new(article_repository));

        Ok(Self::with_service(config, quiz_service))
    }

    pub fn with_service(config: Config, quiz_service: Arc<QuizService>) -> Self {
        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_from_test_config() {
        let state = AppState::new(Config::test_config()).unwrap();
        assert_eq!(state.config.web_server_port, 3000);
    }
}
