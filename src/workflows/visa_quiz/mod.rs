//! Visa finder quiz: answer collection, the rule-based recommendation engine, and the
//! nationality lookup that annotates its results.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod nationality;
pub mod questions;
pub mod router;
pub mod service;
pub mod session;
pub mod share;

#[cfg(test)]
mod tests;

pub use catalog::{RecommendationResult, VisaKind, VisaRecommendation};
pub use domain::{
    AnswerDraft, FamilyComposition, IncomeSource, JobOffer, QuestionKey, QuizAnswers, Reason,
    StayDuration,
};
pub use engine::{recommend, RecommendationEngine, VisaRule};
pub use nationality::{
    CountryRecord, CountryTable, CountryTableError, NationalityNote, Region, VisaStatus,
    SUGGESTION_LIMIT,
};
pub use questions::{questions, QuestionKind, QuestionOption, QuizQuestion};
pub use router::visa_quiz_router;
pub use service::{QuizReport, VisaQuizService};
pub use session::{QuizSession, QuizStep};
pub use share::{decode_answers, encode_answers};

/// Error raised while collecting or decoding quiz answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("'{value}' is not a valid answer for {question}")]
    InvalidChoice { question: QuestionKey, value: String },
    #[error("{0} is answered with free text, not a choice")]
    NotAChoiceQuestion(QuestionKey),
    #[error("{0} is a multiple-choice question")]
    NotAFreeTextQuestion(QuestionKey),
    #[error("enter a nationality before continuing")]
    NationalityRequired,
    #[error("the quiz is already complete; retake it to change answers")]
    AlreadyComplete,
    #[error("invalid quiz answers: {0}")]
    MalformedAnswers(String),
    #[error("share link does not contain a complete answer set")]
    IncompleteAnswers,
    #[error("no country with slug '{0}'")]
    UnknownCountry(String),
}
