#[cfg(test)]
pub mod fixtures {
    /// Distinct sentences that pass the extractor's length filter untouched.
    pub fn sentence_pool(size: usize) -> Vec<String> {
        (0..size)
            .map(|i| format!("Sentence number {} about the topic", i))
            .collect()
    }

    /// Paragraph blocks holding exactly `sentences` extractable sentences, four per block.
    pub fn paragraph_blocks(sentences: usize) -> Vec<String> {
        let all: Vec<String> = (0..sentences)
            .map(|i| format!("Fact number {} explains another detail about the test topic", i))
            .collect();

        all.chunks(4)
            .map(|chunk| format!("{}.", chunk.join(". ")))
            .collect()
    }

    /// Wraps paragraph blocks in a minimal article page.
    pub fn article_html(paragraphs: &[String]) -> String {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<p>{}</p>\n", p))
            .collect();

        format!(
            "<html><head><title>Test</title></head><body><div id=\"content\">{}</div></body></html>",
            body
        )
    }
}

#[cfg(test)]
pub mod fakes {
    use crate::generator::RandomSource;

    /// Always draws the highest index, which also makes shuffles a no-op.
    pub struct LastIndexSource;

    impl RandomSource for LastIndexSource {
        fn pick_index(&mut self, len: usize) -> usize {
            len - 1
        }
    }

    /// Replays a fixed sequence of draws, cycling, clamped to the requested range.
    pub struct FixedSource {
        draws: Vec<usize>,
        position: usize,
    }

    impl FixedSource {
        pub fn new(draws: Vec<usize>) -> Self {
            assert!(!draws.is_empty(), "FixedSource needs at least one draw");
            Self { draws, position: 0 }
        }
    }

    impl RandomSource for FixedSource {
        fn pick_index(&mut self, len: usize) -> usize {
            let draw = self.draws[self.position % self.draws.len()];
            self.position += 1;
            draw.min(len - 1)
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::*;
    use super::fixtures::*;
    use crate::generator::{extract_sentences, RandomSource};

    #[test]
    fn test_sentence_pool_is_distinct() {
        let pool = sentence_pool(20);
        let mut deduped = pool.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 20);
    }

    #[test]
    fn test_paragraph_blocks_extract_exactly() {
        for n in [1, 14, 15, 20, 23] {
            assert_eq!(extract_sentences(paragraph_blocks(n)).len(), n);
        }
    }

    #[test]
    fn test_fixed_source_cycles_and_clamps() {
        let mut source = FixedSource::new(vec![5, 1]);
        assert_eq!(source.pick_index(10), 5);
        assert_eq!(source.pick_index(10), 1);
        assert_eq!(source.pick_index(3), 2);
    }

    #[test]
    fn test_article_html_wraps_each_paragraph() {
        let html = article_html(&["one".to_string(), "two".to_string()]);
        assert_eq!(html.matches("<p>").count(), 2);
    }
}
