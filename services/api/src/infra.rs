use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use visa_finder::config::QuizConfig;
use visa_finder::workflows::visa_quiz::{CountryTable, CountryTableError, Region, VisaStatus};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the configured country CSV, or the table compiled into the binary.
pub(crate) fn load_country_table(config: &QuizConfig) -> Result<Arc<CountryTable>, CountryTableError> {
    let table = match &config.country_table {
        Some(path) => {
            let table = CountryTable::from_path(path)?;
            info!(path = %path.display(), countries = table.len(), "country table loaded");
            table
        }
        None => {
            let table = CountryTable::embedded()?;
            info!(countries = table.len(), "embedded country table loaded");
            table
        }
    };
    Ok(Arc::new(table))
}

pub(crate) fn parse_region(raw: &str) -> Result<Region, String> {
    let needle = raw.trim();
    Region::ordered()
        .into_iter()
        .find(|region| region.token() == needle)
        .ok_or_else(|| {
            let known: Vec<&str> = Region::ordered().iter().map(|region| region.token()).collect();
            format!("unknown region '{raw}' (expected one of: {})", known.join(", "))
        })
}

pub(crate) fn parse_status(raw: &str) -> Result<VisaStatus, String> {
    let needle = raw.trim();
    VisaStatus::ordered()
        .into_iter()
        .find(|status| status.token() == needle)
        .ok_or_else(|| {
            let known: Vec<&str> = VisaStatus::ordered().iter().map(|status| status.token()).collect();
            format!("unknown visa status '{raw}' (expected one of: {})", known.join(", "))
        })
}
