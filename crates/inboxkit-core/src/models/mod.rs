pub mod canned_response;
pub mod message;
pub mod question;

pub use canned_response::{CannedResponse, CannedResponseFilter};
pub use message::{Folder, Message, MessageDraft, MessageFilter};
pub use question::{
    AnswerOption, Difficulty, Question, QuestionFilter, QuestionKind, QuestionStatus,
};
