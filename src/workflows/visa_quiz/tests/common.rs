use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::visa_quiz::domain::{
    FamilyComposition, IncomeSource, JobOffer, QuizAnswers, Reason, StayDuration,
};
use crate::workflows::visa_quiz::{CountryTable, VisaQuizService};

pub(super) fn answers(
    reason: Reason,
    duration: StayDuration,
    income: IncomeSource,
    job_offer: JobOffer,
) -> QuizAnswers {
    QuizAnswers {
        reason,
        duration,
        income,
        job_offer,
        family: FamilyComposition::JustMe,
        nationality: "United States".to_string(),
    }
}

/// Short-stay answers that trip no supplementary rules.
pub(super) fn baseline(reason: Reason) -> QuizAnswers {
    answers(
        reason,
        StayDuration::UnderThreeMonths,
        IncomeSource::Under2k,
        JobOffer::No,
    )
}

/// Every well-formed answer set, varying the nationality between a listed and unlisted country.
pub(super) fn all_answer_sets() -> Vec<QuizAnswers> {
    let mut sets = Vec::new();
    for reason in Reason::ordered() {
        for duration in StayDuration::ordered() {
            for income in IncomeSource::ordered() {
                for job_offer in JobOffer::ordered() {
                    for family in FamilyComposition::ordered() {
                        for nationality in ["Brazil", "Atlantis"] {
                            sets.push(QuizAnswers {
                                reason,
                                duration,
                                income,
                                job_offer,
                                family,
                                nationality: nationality.to_string(),
                            });
                        }
                    }
                }
            }
        }
    }
    sets
}

pub(super) fn country_table() -> Arc<CountryTable> {
    Arc::new(CountryTable::embedded().expect("embedded table parses"))
}

pub(super) fn service() -> Arc<VisaQuizService> {
    Arc::new(VisaQuizService::new(country_table()))
}

pub(super) async fn json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
