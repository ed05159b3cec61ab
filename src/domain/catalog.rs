//! Static layout of the career survey: element identifiers, the five steps,
//! and the options offered for every field.
//!
//! Option values are what the backend matches on, so they are sent verbatim;
//! labels are display-only.

/// Stable identifiers for every element of the survey surface.
pub mod ids {
    pub const MBTI: &str = "mbti";
    pub const SUBJECTS: &str = "subjects";
    pub const STRENGTHS: &str = "strengths";
    pub const INTERESTS: &str = "interests";
    pub const FINANCIAL_INFLUENCE: &str = "financial_influence";
    pub const FAMILY_HAS_INDUSTRY: &str = "family_has_industry";
    pub const FAMILY_INDUSTRY_SELECT: &str = "family_industry_select";
    pub const FAMILY_ADVICE: &str = "family_advice";

    pub const FAMILY_INDUSTRY_CONTAINER: &str = "fields-container_3";

    pub const FORM: &str = "survey-form";
    pub const PREV_BUTTON: &str = "prevBtn";
    pub const NEXT_BUTTON: &str = "nextBtn";
    pub const PROGRESS: &str = "progress";
    pub const LOADING: &str = "loading";
    pub const STATUS: &str = "saveMsg";
    pub const RESULTS: &str = "results";
}

/// Control type backing a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-valued dropdown.
    Select,
    /// Multi-valued checkbox group.
    Checkboxes,
    /// Button group storing its pick in a hidden input.
    Choice,
    /// Yes/no button group that may reveal a dependent container.
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

const fn plain(value: &'static str) -> Choice {
    Choice {
        value,
        label: value,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub options: &'static [Choice],
    /// Container shown only while this toggle is answered "yes".
    pub dependent: Option<&'static str>,
    /// Container this field lives in, when it is not directly on a step panel.
    pub parent: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct StepSpec {
    pub panel: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

pub const MBTI_TYPES: &[Choice] = &[
    plain("INTJ"),
    plain("INTP"),
    plain("ENTJ"),
    plain("ENTP"),
    plain("INFJ"),
    plain("INFP"),
    plain("ENFJ"),
    plain("ENFP"),
    plain("ISTJ"),
    plain("ISFJ"),
    plain("ESTJ"),
    plain("ESFJ"),
    plain("ISTP"),
    plain("ISFP"),
    plain("ESTP"),
    plain("ESFP"),
];

pub const SUBJECTS: &[Choice] = &[
    plain("Math"),
    plain("Physics"),
    plain("Chemistry"),
    plain("Biology"),
    plain("Literature"),
    plain("History"),
    plain("Geography"),
    plain("English"),
    plain("Informatics"),
    plain("Civics"),
];

pub const STRENGTHS: &[Choice] = &[
    plain("Logic"),
    plain("Communication"),
    plain("Creativity"),
    plain("Leadership"),
    plain("Teamwork"),
    plain("Analysis"),
    plain("Empathy"),
    plain("Organization"),
    plain("Problem Solving"),
];

pub const INTERESTS: &[Choice] = &[
    plain("Science"),
    plain("Technology"),
    plain("Art"),
    plain("Business"),
    plain("Healthcare"),
    plain("Education"),
    plain("Sports"),
    plain("Travel"),
    plain("Music"),
];

pub const INDUSTRIES: &[Choice] = &[
    plain("Information Technology"),
    plain("Finance"),
    plain("Healthcare"),
    plain("Education"),
    plain("Construction"),
    plain("Manufacturing"),
    plain("Agriculture"),
    plain("Tourism"),
    plain("Law"),
    plain("Media"),
];

pub const YES_NO: &[Choice] = &[choice("yes", "Yes"), choice("no", "No")];

pub const FAMILY_ADVICE: &[Choice] = &[
    choice("Có", "Yes"),
    choice("Có, nhưng không nhiều", "Yes, but not much"),
    choice("Không", "No"),
];

const MBTI_FIELD: FieldSpec = FieldSpec {
    id: ids::MBTI,
    label: "Your MBTI type",
    kind: FieldKind::Select,
    required: true,
    options: MBTI_TYPES,
    dependent: None,
    parent: None,
};

const SUBJECTS_FIELD: FieldSpec = FieldSpec {
    id: ids::SUBJECTS,
    label: "Subjects you are good at",
    kind: FieldKind::Checkboxes,
    required: true,
    options: SUBJECTS,
    dependent: None,
    parent: None,
};

const STRENGTHS_FIELD: FieldSpec = FieldSpec {
    id: ids::STRENGTHS,
    label: "Your strengths (first two count as main)",
    kind: FieldKind::Checkboxes,
    required: true,
    options: STRENGTHS,
    dependent: None,
    parent: None,
};

const INTERESTS_FIELD: FieldSpec = FieldSpec {
    id: ids::INTERESTS,
    label: "Your interests (first two count as main)",
    kind: FieldKind::Checkboxes,
    required: true,
    options: INTERESTS,
    dependent: None,
    parent: None,
};

const FINANCIAL_FIELD: FieldSpec = FieldSpec {
    id: ids::FINANCIAL_INFLUENCE,
    label: "Does tuition cost influence your choice?",
    kind: FieldKind::Toggle,
    required: false,
    options: YES_NO,
    dependent: None,
    parent: None,
};

const FAMILY_INDUSTRY_FIELD: FieldSpec = FieldSpec {
    id: ids::FAMILY_HAS_INDUSTRY,
    label: "Does your family work in a particular industry?",
    kind: FieldKind::Toggle,
    required: false,
    options: YES_NO,
    dependent: Some(ids::FAMILY_INDUSTRY_CONTAINER),
    parent: None,
};

const FAMILY_INDUSTRY_SELECT_FIELD: FieldSpec = FieldSpec {
    id: ids::FAMILY_INDUSTRY_SELECT,
    label: "Which industry?",
    kind: FieldKind::Select,
    required: false,
    options: INDUSTRIES,
    dependent: None,
    parent: Some(ids::FAMILY_INDUSTRY_CONTAINER),
};

const FAMILY_ADVICE_FIELD: FieldSpec = FieldSpec {
    id: ids::FAMILY_ADVICE,
    label: "Does your family advise you on your career?",
    kind: FieldKind::Choice,
    required: false,
    options: FAMILY_ADVICE,
    dependent: None,
    parent: None,
};

pub const STEPS: &[StepSpec] = &[
    StepSpec {
        panel: "step-0",
        title: "Personality",
        fields: &[MBTI_FIELD],
    },
    StepSpec {
        panel: "step-1",
        title: "Subjects",
        fields: &[SUBJECTS_FIELD],
    },
    StepSpec {
        panel: "step-2",
        title: "Strengths",
        fields: &[STRENGTHS_FIELD],
    },
    StepSpec {
        panel: "step-3",
        title: "Interests",
        fields: &[INTERESTS_FIELD],
    },
    StepSpec {
        panel: "step-4",
        title: "Family",
        fields: &[
            FINANCIAL_FIELD,
            FAMILY_INDUSTRY_FIELD,
            FAMILY_INDUSTRY_SELECT_FIELD,
            FAMILY_ADVICE_FIELD,
        ],
    },
];

pub fn step_count() -> usize {
    STEPS.len()
}

pub fn step(index: usize) -> Option<&'static StepSpec> {
    STEPS.get(index)
}

pub fn panel_ids() -> Vec<&'static str> {
    STEPS.iter().map(|step| step.panel).collect()
}

pub fn fields() -> impl Iterator<Item = &'static FieldSpec> {
    STEPS.iter().flat_map(|step| step.fields.iter())
}

pub fn field(id: &str) -> Option<&'static FieldSpec> {
    fields().find(|field| field.id == id)
}

/// Resolves user input against a field's options, matching either the value
/// or the label case-insensitively.
pub fn resolve_option(field: &FieldSpec, input: &str) -> Option<&'static str> {
    let needle = input.trim();
    field
        .options
        .iter()
        .find(|option| {
            option.value.eq_ignore_ascii_case(needle) || option.label.eq_ignore_ascii_case(needle)
        })
        .map(|option| option.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_are_unique_across_steps() {
        let mut seen: Vec<&str> = fields().map(|field| field.id).collect();
        let total = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn required_fields_are_the_four_personal_answers() {
        let required: Vec<&str> = fields()
            .filter(|field| field.required)
            .map(|field| field.id)
            .collect();
        assert_eq!(
            required,
            vec![ids::MBTI, ids::SUBJECTS, ids::STRENGTHS, ids::INTERESTS]
        );
    }

    #[test]
    fn resolve_option_matches_value_or_label() {
        let advice = field(ids::FAMILY_ADVICE).unwrap();
        assert_eq!(resolve_option(advice, "yes, but not much"), Some("Có, nhưng không nhiều"));
        assert_eq!(resolve_option(advice, "Không"), Some("Không"));
        let mbti = field(ids::MBTI).unwrap();
        assert_eq!(resolve_option(mbti, "intj"), Some("INTJ"));
        assert_eq!(resolve_option(mbti, "XXXX"), None);
    }

    #[test]
    fn only_family_industry_toggle_has_dependent_container() {
        let dependents: Vec<&str> = fields().filter_map(|field| field.dependent).collect();
        assert_eq!(dependents, vec![ids::FAMILY_INDUSTRY_CONTAINER]);
    }
}
