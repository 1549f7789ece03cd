use crate::errors::{AppError, AppResult};

use super::normalizer::normalize;

/// Normalized blocks of this length or shorter are skipped entirely.
pub const MIN_BLOCK_LEN: usize = 50;
/// Fragments of this length or shorter are dropped.
pub const MIN_SENTENCE_LEN: usize = 10;
/// Smallest pool that can still feed a five question quiz with four options.
pub const MIN_POOL_SIZE: usize = 15;

const SENTENCE_DELIMITER: &str = ". ";

/// Builds the sentence pool from paragraph blocks, in paragraph then split order.
///
/// Splitting on `". "` is a plain string split, so abbreviations and decimals
/// can produce odd fragments.
pub fn extract_sentences<I, S>(blocks: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sentences = Vec::new();

    for block in blocks {
        let text = normalize(block.as_ref());
        if text.len() <= MIN_BLOCK_LEN {
            continue;
        }

        sentences.extend(
            text.split(SENTENCE_DELIMITER)
                .map(str::trim)
                .filter(|fragment| fragment.len() > MIN_SENTENCE_LEN)
                .map(str::to_string),
        );
    }

    sentences
}

pub fn ensure_sufficient(pool: &[String]) -> AppResult<()> {
    if pool.len() < MIN_POOL_SIZE {
        return Err(AppError::InsufficientContent {
            sentences: pool.len(),
            required: MIN_POOL_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_of_exactly_fifty_chars_is_discarded() {
        let block = "a".repeat(50);
        assert!(extract_sentences([block]).is_empty());
    }

    #[test]
    fn block_of_fifty_one_chars_is_kept_and_split() {
        // 25 + ". " + 24 = 51 characters
        let block = format!("{}. {}", "b".repeat(25), "c".repeat(24));
        assert_eq!(block.len(), 51);

        let sentences = extract_sentences([block]);
        assert_eq!(sentences, vec!["b".repeat(25), "c".repeat(24)]);
    }

    #[test]
    fn length_threshold_applies_after_normalization() {
        // 60 raw characters, but citations bring it down to 50.
        let block = format!("{}[1234567]{}", "d".repeat(25), "e".repeat(25));
        assert!(block.len() > 50);
        assert!(extract_sentences([block]).is_empty());
    }

    #[test]
    fn short_fragments_are_dropped() {
        let block = "Tiny one. Exactly ten. This fragment is comfortably long enough. Ten chars!";
        let sentences = extract_sentences([block]);

        // "Exactly ten" is 11 characters, "Tiny one" and "Ten chars" are too short.
        assert_eq!(
            sentences,
            vec![
                "Exactly ten".to_string(),
                "This fragment is comfortably long enough".to_string(),
            ]
        );
    }

    #[test]
    fn preserves_paragraph_then_split_order() {
        let blocks = [
            "First paragraph sentence one. First paragraph sentence two.",
            "too short",
            "Second paragraph sentence one. Second paragraph sentence two.",
        ];

        let sentences = extract_sentences(blocks);
        assert_eq!(
            sentences,
            vec![
                "First paragraph sentence one",
                "First paragraph sentence two.",
                "Second paragraph sentence one",
                "Second paragraph sentence two.",
            ]
        );
    }

    #[test]
    fn splits_naively_on_abbreviations() {
        let block = "The treaty was signed by Dr. Smith and colleagues in the spring of that year.";
        let sentences = extract_sentences([block]);

        assert_eq!(
            sentences,
            vec!["The treaty was signed by Dr", "Smith and colleagues in the spring of that year."]
        );
    }

    #[test]
    fn pool_of_fourteen_is_insufficient() {
        let pool: Vec<String> = (0..14).map(|i| format!("Sentence number {i}")).collect();
        let err = ensure_sufficient(&pool).unwrap_err();

        assert!(matches!(
            err,
            AppError::InsufficientContent {
                sentences: 14,
                required: 15
            }
        ));
    }

    #[test]
    fn pool_of_fifteen_is_sufficient() {
        let pool: Vec<String> = (0..15).map(|i| format!("Sentence number {i}")).collect();
        assert!(ensure_sufficient(&pool).is_ok());
    }
}
