use serde::Serialize;

use super::domain::{
    FamilyComposition, IncomeSource, JobOffer, QuestionKey, Reason, StayDuration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Selecting an option advances the quiz.
    Choice,
    /// Free text confirmed with an explicit continue.
    Nationality,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub key: QuestionKey,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub kind: QuestionKind,
    pub options: Vec<QuestionOption>,
}

pub const QUESTION_COUNT: usize = 6;

macro_rules! options {
    ($ty:ty) => {
        <$ty>::ordered()
            .into_iter()
            .map(|value| QuestionOption {
                value: value.token(),
                label: value.label(),
            })
            .collect()
    };
}

pub fn question(key: QuestionKey) -> QuizQuestion {
    match key {
        QuestionKey::Reason => QuizQuestion {
            key,
            title: "What's your primary reason for coming to Argentina?",
            subtitle: "This helps us match you with the right visa category.",
            kind: QuestionKind::Choice,
            options: options!(Reason),
        },
        QuestionKey::Duration => QuizQuestion {
            key,
            title: "How long do you plan to stay?",
            subtitle: "Your intended stay length affects which visas are available.",
            kind: QuestionKind::Choice,
            options: options!(StayDuration),
        },
        QuestionKey::Income => QuizQuestion {
            key,
            title: "Do you have a monthly income source?",
            subtitle: "Many visa categories require proof of income or financial means.",
            kind: QuestionKind::Choice,
            options: options!(IncomeSource),
        },
        QuestionKey::JobOffer => QuizQuestion {
            key,
            title: "Do you have a job offer from an Argentine company?",
            subtitle: "An Argentine employer can sponsor your work visa.",
            kind: QuestionKind::Choice,
            options: options!(JobOffer),
        },
        QuestionKey::Family => QuizQuestion {
            key,
            title: "Are you bringing family members?",
            subtitle: "Family size can affect visa requirements and documentation.",
            kind: QuestionKind::Choice,
            options: options!(FamilyComposition),
        },
        QuestionKey::Nationality => QuizQuestion {
            key,
            title: "What's your nationality?",
            subtitle: "Visa requirements vary by country. Start typing to find yours.",
            kind: QuestionKind::Nationality,
            options: Vec::new(),
        },
    }
}

/// All questions in the order the quiz asks them.
pub fn questions() -> Vec<QuizQuestion> {
    QuestionKey::ordered().into_iter().map(question).collect()
}
