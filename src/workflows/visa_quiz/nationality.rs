use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

const EMBEDDED_COUNTRIES: &str = include_str!("../../../data/countries.csv");

/// Suggestions shown while the nationality is being typed.
pub const SUGGESTION_LIMIT: usize = 8;

const CONSULATE_GUIDANCE: &str =
    "Check with the Argentine consulate in your country for specific visa requirements.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Americas,
    Europe,
    AsiaPacific,
    AfricaMiddleEast,
}

impl Region {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Americas,
            Self::Europe,
            Self::AsiaPacific,
            Self::AfricaMiddleEast,
        ]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Europe => "europe",
            Self::AsiaPacific => "asia-pacific",
            Self::AfricaMiddleEast => "africa-middle-east",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Americas => "Americas",
            Self::Europe => "Europe",
            Self::AsiaPacific => "Asia-Pacific",
            Self::AfricaMiddleEast => "Africa & Middle East",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaStatus {
    Exempt,
    Required,
}

impl VisaStatus {
    pub const fn ordered() -> [Self; 2] {
        [Self::Exempt, Self::Required]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Exempt => "exempt",
            Self::Required => "required",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Exempt => "Visa-free",
            Self::Required => "Visa required",
        }
    }
}

/// Entry requirements for citizens of one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub slug: String,
    pub name: String,
    pub flag: String,
    pub region: Region,
    pub visa_status: VisaStatus,
    pub stay_days: u16,
}

impl CountryRecord {
    pub fn is_exempt(&self) -> bool {
        self.visa_status == VisaStatus::Exempt
    }
}

/// Nationality-specific guidance attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalityNote {
    pub nationality: String,
    pub country: Option<CountryRecord>,
    pub note: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CountryTableError {
    #[error("failed to read country table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid country table data: {0}")]
    Csv(#[from] csv::Error),
    #[error("country '{slug}' lists an unsupported stay of {days} days")]
    UnsupportedStay { slug: String, days: u16 },
    #[error("country slug '{0}' appears more than once")]
    DuplicateSlug(String),
}

/// Read-only country reference data, loaded once and shared.
#[derive(Debug, Clone)]
pub struct CountryTable {
    countries: Vec<CountryRecord>,
}

impl CountryTable {
    pub fn embedded() -> Result<Self, CountryTableError> {
        Self::from_reader(EMBEDDED_COUNTRIES.as_bytes())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CountryTableError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CountryTableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut countries = Vec::new();
        let mut slugs = HashSet::new();

        for record in csv_reader.deserialize::<CountryRecord>() {
            let country = record?;
            if !matches!(country.stay_days, 30 | 60 | 90) {
                return Err(CountryTableError::UnsupportedStay {
                    slug: country.slug,
                    days: country.stay_days,
                });
            }
            if !slugs.insert(country.slug.clone()) {
                return Err(CountryTableError::DuplicateSlug(country.slug));
            }
            countries.push(country);
        }

        Ok(Self { countries })
    }

    pub fn from_records(countries: Vec<CountryRecord>) -> Self {
        Self { countries }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    /// Case-insensitive exact match; surrounding whitespace is ignored.
    pub fn find_by_name(&self, name: &str) -> Option<&CountryRecord> {
        let needle = name.trim().to_lowercase();
        self.countries
            .iter()
            .find(|country| country.name.to_lowercase() == needle)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&CountryRecord> {
        self.countries.iter().find(|country| country.slug == slug)
    }

    pub fn in_region(&self, region: Region) -> Vec<&CountryRecord> {
        self.countries
            .iter()
            .filter(|country| country.region == region)
            .collect()
    }

    pub fn with_status(&self, status: VisaStatus) -> Vec<&CountryRecord> {
        self.countries
            .iter()
            .filter(|country| country.visa_status == status)
            .collect()
    }

    /// Alphabetical names containing `input`, case-insensitively.
    pub fn suggest(&self, input: &str, limit: usize) -> Vec<&CountryRecord> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<&CountryRecord> = self
            .countries
            .iter()
            .filter(|country| country.name.to_lowercase().contains(&needle))
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        matches.truncate(limit);
        matches
    }

    pub fn nationality_note(&self, nationality: &str) -> NationalityNote {
        let country = self.find_by_name(nationality).cloned();
        let note = match &country {
            Some(country) if country.is_exempt() => format!(
                "{} citizens can enter Argentina visa-free for up to {} days. For longer stays, you'll need one of the visa types recommended above.",
                country.name, country.stay_days
            ),
            Some(country) => format!(
                "{} citizens require a visa to enter Argentina. Contact the nearest Argentine consulate to begin your application.",
                country.name
            ),
            None => CONSULATE_GUIDANCE.to_string(),
        };

        NationalityNote {
            nationality: nationality.trim().to_string(),
            country,
            note,
        }
    }
}
