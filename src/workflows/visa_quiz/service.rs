use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::catalog::RecommendationResult;
use super::domain::QuizAnswers;
use super::engine::RecommendationEngine;
use super::nationality::{CountryRecord, CountryTable, NationalityNote, SUGGESTION_LIMIT};
use super::share::{decode_answers, encode_answers};
use super::QuizError;

/// Everything the result page needs for one completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizReport {
    pub answers: QuizAnswers,
    pub recommendations: RecommendationResult,
    pub nationality: NationalityNote,
    pub share_query: String,
}

/// Service composing the recommendation engine with the country reference table.
#[derive(Debug, Clone)]
pub struct VisaQuizService {
    engine: Arc<RecommendationEngine>,
    countries: Arc<CountryTable>,
}

impl VisaQuizService {
    pub fn new(countries: Arc<CountryTable>) -> Self {
        Self::with_engine(RecommendationEngine::standard(), countries)
    }

    pub fn with_engine(engine: RecommendationEngine, countries: Arc<CountryTable>) -> Self {
        Self {
            engine: Arc::new(engine),
            countries,
        }
    }

    pub fn countries(&self) -> &CountryTable {
        &self.countries
    }

    /// Recommend visas for a completed quiz and annotate with nationality guidance.
    /// The nationality is trimmed first, so the share link decodes to the report's own answers.
    pub fn advise(&self, answers: &QuizAnswers) -> QuizReport {
        let answers = &QuizAnswers {
            nationality: answers.nationality.trim().to_string(),
            ..answers.clone()
        };
        let recommendations = self.engine.recommend(answers);
        let nationality = self.countries.nationality_note(&answers.nationality);

        info!(
            primary = %recommendations.primary.slug,
            alternatives = recommendations.alternatives.len(),
            nationality_matched = nationality.country.is_some(),
            "visa recommendation produced"
        );

        QuizReport {
            answers: answers.clone(),
            recommendations,
            nationality,
            share_query: encode_answers(answers),
        }
    }

    /// Rebuild a report from a share link.
    pub fn advise_shared(&self, query: &str) -> Result<QuizReport, QuizError> {
        match decode_answers(query) {
            Some(answers) => Ok(self.advise(&answers)),
            None => {
                debug!(query, "share link ignored: incomplete answer set");
                Err(QuizError::IncompleteAnswers)
            }
        }
    }

    pub fn suggest(&self, input: &str) -> Vec<&CountryRecord> {
        self.countries.suggest(input, SUGGESTION_LIMIT)
    }

    pub fn country(&self, slug: &str) -> Result<&CountryRecord, QuizError> {
        self.countries
            .find_by_slug(slug)
            .ok_or_else(|| QuizError::UnknownCountry(slug.to_string()))
    }
}
