use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::QuizError;

/// Primary reason for relocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    #[serde(rename = "remote-work")]
    RemoteWork,
    #[serde(rename = "employment")]
    Employment,
    #[serde(rename = "retirement")]
    Retirement,
    #[serde(rename = "study")]
    Study,
    #[serde(rename = "investment")]
    Investment,
    #[serde(rename = "visiting")]
    Visiting,
}

impl Reason {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::RemoteWork,
            Self::Employment,
            Self::Retirement,
            Self::Study,
            Self::Investment,
            Self::Visiting,
        ]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::RemoteWork => "remote-work",
            Self::Employment => "employment",
            Self::Retirement => "retirement",
            Self::Study => "study",
            Self::Investment => "investment",
            Self::Visiting => "visiting",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RemoteWork => "Remote work",
            Self::Employment => "Employment with Argentine company",
            Self::Retirement => "Retirement",
            Self::Study => "Study",
            Self::Investment => "Investment or business",
            Self::Visiting => "Just visiting",
        }
    }
}

/// Intended length of stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StayDuration {
    #[serde(rename = "under-3-months")]
    UnderThreeMonths,
    #[serde(rename = "3-6-months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12-months")]
    SixToTwelveMonths,
    #[serde(rename = "1-plus-years")]
    OnePlusYears,
    #[serde(rename = "permanently")]
    Permanently,
}

impl StayDuration {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::UnderThreeMonths,
            Self::ThreeToSixMonths,
            Self::SixToTwelveMonths,
            Self::OnePlusYears,
            Self::Permanently,
        ]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::UnderThreeMonths => "under-3-months",
            Self::ThreeToSixMonths => "3-6-months",
            Self::SixToTwelveMonths => "6-12-months",
            Self::OnePlusYears => "1-plus-years",
            Self::Permanently => "permanently",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderThreeMonths => "Under 3 months",
            Self::ThreeToSixMonths => "3\u{2013}6 months",
            Self::SixToTwelveMonths => "6\u{2013}12 months",
            Self::OnePlusYears => "1+ years",
            Self::Permanently => "Permanently",
        }
    }

    /// Stays of a year or more unlock the residency-oriented suggestions.
    pub const fn is_long_term(self) -> bool {
        matches!(self, Self::OnePlusYears | Self::Permanently)
    }
}

/// Monthly income situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeSource {
    #[serde(rename = "over-2k")]
    Over2k,
    #[serde(rename = "under-2k")]
    Under2k,
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "none")]
    None,
}

impl IncomeSource {
    pub const fn ordered() -> [Self; 4] {
        [Self::Over2k, Self::Under2k, Self::Local, Self::None]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Over2k => "over-2k",
            Self::Under2k => "under-2k",
            Self::Local => "local",
            Self::None => "none",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Over2k => "Yes, over $2,000/month",
            Self::Under2k => "Yes, under $2,000/month",
            Self::Local => "I'll earn locally",
            Self::None => "No steady income",
        }
    }
}

/// Whether an Argentine employer is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobOffer {
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "no")]
    No,
    #[serde(rename = "self-employed")]
    SelfEmployed,
}

impl JobOffer {
    pub const fn ordered() -> [Self; 3] {
        [Self::Yes, Self::No, Self::SelfEmployed]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::SelfEmployed => "self-employed",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::SelfEmployed => "I'm self-employed",
        }
    }
}

/// Who is relocating. Collected by the quiz but not consulted by any rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FamilyComposition {
    #[serde(rename = "just-me")]
    JustMe,
    #[serde(rename = "spouse")]
    Spouse,
    #[serde(rename = "children")]
    Children,
    #[serde(rename = "extended")]
    Extended,
}

impl FamilyComposition {
    pub const fn ordered() -> [Self; 4] {
        [Self::JustMe, Self::Spouse, Self::Children, Self::Extended]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::JustMe => "just-me",
            Self::Spouse => "spouse",
            Self::Children => "children",
            Self::Extended => "extended",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::JustMe => "Just me",
            Self::Spouse => "With spouse/partner",
            Self::Children => "With children",
            Self::Extended => "Extended family",
        }
    }
}

macro_rules! token_parsing {
    ($ty:ty, $key:expr) => {
        impl FromStr for $ty {
            type Err = QuizError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let trimmed = value.trim();
                <$ty>::ordered()
                    .into_iter()
                    .find(|candidate| candidate.token() == trimmed)
                    .ok_or_else(|| QuizError::InvalidChoice {
                        question: $key,
                        value: trimmed.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

token_parsing!(Reason, QuestionKey::Reason);
token_parsing!(StayDuration, QuestionKey::Duration);
token_parsing!(IncomeSource, QuestionKey::Income);
token_parsing!(JobOffer, QuestionKey::JobOffer);
token_parsing!(FamilyComposition, QuestionKey::Family);

/// Identifies one of the six quiz questions. Also the share-link parameter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKey {
    Reason,
    Duration,
    Income,
    JobOffer,
    Family,
    Nationality,
}

impl QuestionKey {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Reason,
            Self::Duration,
            Self::Income,
            Self::JobOffer,
            Self::Family,
            Self::Nationality,
        ]
    }

    pub const fn param(self) -> &'static str {
        match self {
            Self::Reason => "reason",
            Self::Duration => "duration",
            Self::Income => "income",
            Self::JobOffer => "jobOffer",
            Self::Family => "family",
            Self::Nationality => "nationality",
        }
    }

    pub const fn position(self) -> usize {
        match self {
            Self::Reason => 0,
            Self::Duration => 1,
            Self::Income => 2,
            Self::JobOffer => 3,
            Self::Family => 4,
            Self::Nationality => 5,
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param())
    }
}

/// A completed answer set. Every field is present; only this type reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswers {
    pub reason: Reason,
    pub duration: StayDuration,
    pub income: IncomeSource,
    pub job_offer: JobOffer,
    pub family: FamilyComposition,
    pub nationality: String,
}

impl QuizAnswers {
    /// Token value for a question, as it appears in a share link.
    pub fn token(&self, key: QuestionKey) -> &str {
        match key {
            QuestionKey::Reason => self.reason.token(),
            QuestionKey::Duration => self.duration.token(),
            QuestionKey::Income => self.income.token(),
            QuestionKey::JobOffer => self.job_offer.token(),
            QuestionKey::Family => self.family.token(),
            QuestionKey::Nationality => &self.nationality,
        }
    }

    pub fn is_long_term(&self) -> bool {
        self.duration.is_long_term()
    }
}

/// Answers gathered so far. Partial drafts only live inside the quiz flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDraft {
    pub reason: Option<Reason>,
    pub duration: Option<StayDuration>,
    pub income: Option<IncomeSource>,
    pub job_offer: Option<JobOffer>,
    pub family: Option<FamilyComposition>,
    pub nationality: Option<String>,
}

impl AnswerDraft {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn is_answered(&self, key: QuestionKey) -> bool {
        match key {
            QuestionKey::Reason => self.reason.is_some(),
            QuestionKey::Duration => self.duration.is_some(),
            QuestionKey::Income => self.income.is_some(),
            QuestionKey::JobOffer => self.job_offer.is_some(),
            QuestionKey::Family => self.family.is_some(),
            QuestionKey::Nationality => self.nationality.is_some(),
        }
    }

    /// Stores a choice token against its question.
    pub fn set_choice(&mut self, key: QuestionKey, token: &str) -> Result<(), QuizError> {
        match key {
            QuestionKey::Reason => self.reason = Some(token.parse()?),
            QuestionKey::Duration => self.duration = Some(token.parse()?),
            QuestionKey::Income => self.income = Some(token.parse()?),
            QuestionKey::JobOffer => self.job_offer = Some(token.parse()?),
            QuestionKey::Family => self.family = Some(token.parse()?),
            QuestionKey::Nationality => {
                return Err(QuizError::NotAChoiceQuestion(QuestionKey::Nationality))
            }
        }
        Ok(())
    }

    /// Blank input clears the nationality.
    pub fn set_nationality(&mut self, value: &str) {
        let trimmed = value.trim();
        self.nationality = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Converts into a completed answer set, or `None` while any answer is missing.
    pub fn complete(&self) -> Option<QuizAnswers> {
        Some(QuizAnswers {
            reason: self.reason?,
            duration: self.duration?,
            income: self.income?,
            job_offer: self.job_offer?,
            family: self.family?,
            nationality: self.nationality.clone()?,
        })
    }
}

impl From<QuizAnswers> for AnswerDraft {
    fn from(answers: QuizAnswers) -> Self {
        Self {
            reason: Some(answers.reason),
            duration: Some(answers.duration),
            income: Some(answers.income),
            job_offer: Some(answers.job_offer),
            family: Some(answers.family),
            nationality: Some(answers.nationality),
        }
    }
}
