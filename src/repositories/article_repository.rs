use std::time::Duration;

use async_trait::async_trait;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Fetches the raw article markup for a topic.
    async fn fetch_article_html(&self, topic: &str) -> AppResult<String>;
}

pub struct WikipediaArticleRepository {
    client: reqwest::Client,
    base_url: String,
}

impl WikipediaArticleRepository {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.wiki_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn article_url(&self, topic: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(topic))
    }
}

#[async_trait]
impl ArticleRepository for WikipediaArticleRepository {
    async fn fetch_article_html(&self, topic: &str) -> AppResult<String> {
        let url = self.article_url(topic);
        log::info!("Fetching article from {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::FetchError(format!(
                "Article request to {} returned {}",
                url, status
            )));
        }

        let body = response.text().await?;
        log::debug!("Fetched {} bytes for topic '{}'", body.len(), topic);
        Ok(body)
    }
}
