use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading strengths/interests forwarded as the "main" picks.
pub const MAIN_PICK_COUNT: usize = 2;

/// Answer stored behind the yes/no toggle buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Maps a toggle option to its stored answer: only the exact option
    /// `"yes"` counts as yes.
    pub fn from_option(option: &str) -> Self {
        if option == "yes" {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }

    /// Parses a stored hidden-input value; empty or unknown text is absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(YesNo::Yes),
            "no" => Some(YesNo::No),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    pub fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every answer collected by the survey.
///
/// This is also the shape of the persisted snapshot. All fields default, so a
/// snapshot written by an older build with fewer fields still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerSet {
    pub mbti: String,
    pub subjects: Vec<String>,
    pub strengths: Vec<String>,
    pub interests: Vec<String>,
    pub financial_influence: Option<YesNo>,
    #[serde(alias = "family_industry")]
    pub family_has_industry: Option<YesNo>,
    pub family_industry_select: String,
    pub family_advice: String,
}

impl AnswerSet {
    pub fn main_strengths(&self) -> Vec<String> {
        leading(&self.strengths)
    }

    pub fn main_interests(&self) -> Vec<String> {
        leading(&self.interests)
    }

    /// True when the family owns an industry but none was picked.
    pub fn missing_family_industry(&self) -> bool {
        self.family_has_industry.is_some_and(YesNo::is_yes)
            && self.family_industry_select.trim().is_empty()
    }

    pub fn to_payload(&self, mode: SubmitMode) -> SubmissionPayload {
        SubmissionPayload {
            mbti: self.mbti.clone(),
            subjects: self.subjects.clone(),
            strengths: self.strengths.clone(),
            interests: self.interests.clone(),
            mainstrengths: self.main_strengths(),
            maininterests: self.main_interests(),
            financial_influence: self.financial_influence.unwrap_or(YesNo::No),
            family_has_industry: self.family_has_industry.unwrap_or(YesNo::No),
            family_industry_select: self.family_industry_select.clone(),
            family_advice: self.family_advice.clone(),
            save_only: matches!(mode, SubmitMode::SaveOnly),
        }
    }
}

fn leading(values: &[String]) -> Vec<String> {
    values.iter().take(MAIN_PICK_COUNT).cloned().collect()
}

/// What the backend should do with a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitMode {
    /// Store the profile and answer with ranked suggestions.
    #[default]
    Suggest,
    /// Store the profile only; the backend answers with an acknowledgement.
    SaveOnly,
}

/// JSON body sent to the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub mbti: String,
    pub subjects: Vec<String>,
    pub strengths: Vec<String>,
    pub interests: Vec<String>,
    pub mainstrengths: Vec<String>,
    pub maininterests: Vec<String>,
    pub financial_influence: YesNo,
    pub family_has_industry: YesNo,
    pub family_industry_select: String,
    pub family_advice: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub save_only: bool,
}
