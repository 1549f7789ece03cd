use std::collections::HashSet;

use crate::{
    errors::AppResult,
    models::domain::{QuestionRecord, QuestionType},
};

use super::{
    composer::compose_question,
    distractors::select_distractors,
    extractor::ensure_sufficient,
    random::{shuffle, RandomSource},
};

pub const MAX_QUESTIONS: usize = 5;

/// Per-request state for one quiz: the shrinking working pool, the sentences
/// already chosen as answers, and every sentence already placed in an option slot.
#[derive(Debug)]
pub struct QuizAssembler {
    pool: Vec<String>,
    used_sentences: HashSet<String>,
    used_answers: HashSet<String>,
}

impl QuizAssembler {
    pub fn new(pool: Vec<String>) -> AppResult<Self> {
        ensure_sufficient(&pool)?;

        Ok(Self {
            pool,
            used_sentences: HashSet::new(),
            used_answers: HashSet::new(),
        })
    }

    /// Runs up to [`MAX_QUESTIONS`] iterations.
    ///
    /// A pick that lands on an already used sentence still spends its
    /// iteration, so the quiz can come back with fewer than five questions.
    pub fn assemble(mut self, topic: &str, source: &mut impl RandomSource) -> Vec<QuestionRecord> {
        let mut records = Vec::with_capacity(MAX_QUESTIONS);

        for index in 0..MAX_QUESTIONS {
            if self.pool.is_empty() {
                break;
            }

            let pick = source.pick_index(self.pool.len());
            let correct = self.pool[pick].clone();

            if self.used_sentences.contains(&correct) || self.used_answers.contains(&correct) {
                log::debug!("Iteration {} drew an already used sentence, skipping", index);
                continue;
            }

            self.used_sentences.insert(correct.clone());
            self.used_answers.insert(correct.clone());

            let distractors = select_distractors(&self.pool, &correct, &mut self.used_answers);
            let question_text = compose_question(topic, QuestionType::for_index(index));

            let mut options = Vec::with_capacity(distractors.len() + 1);
            options.push(correct.clone());
            options.extend(distractors);
            shuffle(&mut options, source);

            records.push(QuestionRecord::new(question_text, options, correct));
            self.pool.remove(pick);
        }

        records
    }
}

pub fn assemble(
    topic: &str,
    pool: Vec<String>,
    source: &mut impl RandomSource,
) -> AppResult<Vec<QuestionRecord>> {
    Ok(QuizAssembler::new(pool)?.assemble(topic, source))
}
