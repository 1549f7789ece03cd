use crate::models::domain::QuestionType;

pub fn compose_question(topic: &str, question_type: QuestionType) -> String {
    match question_type {
        QuestionType::Definition => format!("What is the definition of {topic}?"),
        QuestionType::Comparison => {
            format!("How does {topic} compare to other related concepts?")
        }
        QuestionType::Historical => format!("What is a historical fact about {topic}?"),
        QuestionType::Application => format!("In what real-world applications is {topic} used?"),
        QuestionType::Importance => format!("Why is {topic} significant in its field?"),
    }
}

pub fn compose_generic_question(topic: &str) -> String {
    format!("Which of the following is true about {topic}?")
}

/// Like [`compose_question`], but for a textual label. Unknown labels get the generic template.
pub fn compose_question_for_label(topic: &str, label: &str) -> String {
    match QuestionType::from_name(label) {
        Some(question_type) => compose_question(topic, question_type),
        None => compose_generic_question(topic),
    }
}
