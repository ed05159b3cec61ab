//! Survey data: the answer set, its wire payload, returned suggestions and
//! the static survey catalog.

pub mod answers;
pub mod catalog;
pub mod suggestion;

pub use answers::{AnswerSet, SubmissionPayload, SubmitMode, YesNo};
pub use suggestion::{Score, Suggestion};
