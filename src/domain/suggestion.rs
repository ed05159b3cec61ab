use serde::{Deserialize, Serialize};
use std::fmt;

/// Score attached to a suggestion. The backend formats it as a percentage
/// string ("62.77%"), but plain numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Number(number) => write!(f, "{number}"),
            Score::Text(text) => f.write_str(text),
        }
    }
}

/// One ranked career suggestion, displayed in server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub career: String,
    pub score: Score,
}
