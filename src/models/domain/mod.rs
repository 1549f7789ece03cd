pub mod question_record;
pub use question_record::{QuestionRecord, QuestionType};
