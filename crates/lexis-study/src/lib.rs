mod card;
mod session;

pub use card::Card;
pub use session::{AnswerStatus, StudySession};
