use std::collections::HashSet;

pub const DISTRACTOR_COUNT: usize = 3;
pub const FILLER_DISTRACTOR: &str = "This statement is incorrect.";

/// Takes the first three pool sentences that are neither `correct` nor in `used`,
/// keeping pool order, and pads with [`FILLER_DISTRACTOR`] when the pool runs dry.
///
/// Every returned distractor is recorded in `used`. The filler may repeat,
/// within one call and across calls.
pub fn select_distractors(
    pool: &[String],
    correct: &str,
    used: &mut HashSet<String>,
) -> Vec<String> {
    let mut distractors: Vec<String> = pool
        .iter()
        .filter(|sentence| sentence.as_str() != correct && !used.contains(sentence.as_str()))
        .take(DISTRACTOR_COUNT)
        .cloned()
        .collect();

    while distractors.len() < DISTRACTOR_COUNT {
        distractors.push(FILLER_DISTRACTOR.to_string());
    }

    used.extend(distractors.iter().cloned());
    distractors
}
