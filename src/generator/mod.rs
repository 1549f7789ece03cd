//! Turns article paragraphs into a multiple-choice quiz.
//!
//! Paragraphs are normalized and split into a sentence pool, one sentence is
//! drawn as each answer, and the next unused pool sentences become its
//! distractors.

pub mod assembler;
pub mod composer;
pub mod distractors;
pub mod extractor;
pub mod normalizer;
pub mod random;

pub use assembler::{assemble, QuizAssembler, MAX_QUESTIONS};
pub use composer::{compose_generic_question, compose_question, compose_question_for_label};
pub use distractors::{select_distractors, FILLER_DISTRACTOR};
pub use extractor::{ensure_sufficient, extract_sentences, MIN_POOL_SIZE};
pub use normalizer::normalize;
pub use random::{RandomSource, RngSource};

use crate::{errors::AppResult, models::domain::QuestionRecord};

pub fn generate_quiz<I, S>(
    topic: &str,
    paragraphs: I,
    source: &mut impl RandomSource,
) -> AppResult<Vec<QuestionRecord>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pool = extract_sentences(paragraphs);
    log::debug!("Extracted {} sentences for topic '{}'", pool.len(), topic);

    assemble(topic, pool, source)
}
