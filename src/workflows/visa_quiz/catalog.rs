use serde::{Deserialize, Serialize};

/// The fixed set of visa categories the quiz can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisaKind {
    DigitalNomad,
    Work,
    Retirement,
    Student,
    Investment,
    Tourist,
}

impl VisaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::DigitalNomad => "Digital Nomad Visa",
            Self::Work => "Work Visa",
            Self::Retirement => "Retirement Visa (Rentista)",
            Self::Student => "Student Visa",
            Self::Investment => "Investment Visa",
            Self::Tourist => "Tourist Entry (No Visa Required)",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::DigitalNomad => "digital-nomad",
            Self::Work => "work",
            Self::Retirement => "retirement",
            Self::Student => "student",
            Self::Investment => "investment",
            Self::Tourist => "tourist",
        }
    }

    /// Detail page for the visa. Tourist entry has no page of its own and links to the overview.
    pub const fn href(self) -> &'static str {
        match self {
            Self::DigitalNomad => "/visas/digital-nomad",
            Self::Work => "/visas/work",
            Self::Retirement => "/visas/retirement",
            Self::Student => "/visas/student",
            Self::Investment => "/visas/investment",
            Self::Tourist => "/visas",
        }
    }
}

/// One suggested visa together with the reasons it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisaRecommendation {
    pub kind: VisaKind,
    pub name: String,
    pub slug: String,
    pub href: String,
    pub description: String,
    pub match_reasons: Vec<String>,
}

impl VisaRecommendation {
    pub fn new(kind: VisaKind, description: &str, match_reasons: [&str; 3]) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            slug: kind.slug().to_string(),
            href: kind.href().to_string(),
            description: description.to_string(),
            match_reasons: match_reasons.iter().map(|reason| reason.to_string()).collect(),
        }
    }
}

/// Engine output: one primary pick plus at most two alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub primary: VisaRecommendation,
    pub alternatives: Vec<VisaRecommendation>,
}

impl RecommendationResult {
    pub const MAX_ALTERNATIVES: usize = 2;

    pub fn kinds(&self) -> Vec<VisaKind> {
        std::iter::once(&self.primary)
            .chain(self.alternatives.iter())
            .map(|recommendation| recommendation.kind)
            .collect()
    }

    pub fn contains(&self, kind: VisaKind) -> bool {
        self.primary.kind == kind || self.alternatives.iter().any(|alt| alt.kind == kind)
    }
}
