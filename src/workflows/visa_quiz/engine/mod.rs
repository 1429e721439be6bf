mod rules;

pub use rules::VisaRule;

use super::catalog::{RecommendationResult, VisaKind, VisaRecommendation};
use super::domain::QuizAnswers;

/// Stateless recommender that walks an ordered rule table over a completed answer set.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    rules: Vec<VisaRule>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl RecommendationEngine {
    pub fn standard() -> Self {
        Self {
            rules: rules::standard_rules(),
        }
    }

    pub fn with_rules(rules: Vec<VisaRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[VisaRule] {
        &self.rules
    }

    pub fn recommend(&self, answers: &QuizAnswers) -> RecommendationResult {
        let mut candidates: Vec<VisaRecommendation> = self
            .rules
            .iter()
            .filter(|rule| (rule.applies)(answers))
            .map(|rule| (rule.build)(answers))
            .collect();

        if candidates.is_empty() {
            candidates.push(rules::fallback());
        }

        let present: Vec<VisaKind> = candidates.iter().map(|c| c.kind).collect();
        candidates.extend(rules::long_term_supplements(answers, &present));

        select(dedupe_by_kind(candidates))
    }
}

/// Recommends with the standard rule table.
pub fn recommend(answers: &QuizAnswers) -> RecommendationResult {
    RecommendationEngine::standard().recommend(answers)
}

fn dedupe_by_kind(candidates: Vec<VisaRecommendation>) -> Vec<VisaRecommendation> {
    let mut seen = Vec::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|candidate| {
            if seen.contains(&candidate.kind) {
                false
            } else {
                seen.push(candidate.kind);
                true
            }
        })
        .collect()
}

// Callers guarantee `candidates` is non-empty: the fallback fills an empty table.
fn select(candidates: Vec<VisaRecommendation>) -> RecommendationResult {
    let mut ranked = candidates.into_iter();
    let primary = ranked.next().unwrap_or_else(rules::fallback);
    let alternatives = ranked
        .take(RecommendationResult::MAX_ALTERNATIVES)
        .collect();

    RecommendationResult {
        primary,
        alternatives,
    }
}
