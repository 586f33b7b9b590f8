use chrono::NaiveDate;
use engagement::forms::{
    FormId, FormRecord, FormRepository, RepositoryError, VerifierConfig, MINIMUM_MONTHLY_INCOME,
    MINIMUM_TOTAL_HOURS,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryFormRepository {
    records: Arc<Mutex<HashMap<FormId, FormRecord>>>,
}

impl FormRepository for InMemoryFormRepository {
    fn insert(&self, record: FormRecord) -> Result<FormRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile.form_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile.form_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: FormRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile.form_id) {
            guard.insert(record.profile.form_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &FormId) -> Result<Option<FormRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(crate) fn default_verifier_config() -> VerifierConfig {
    VerifierConfig {
        minimum_monthly_income: MINIMUM_MONTHLY_INCOME,
        minimum_total_hours: MINIMUM_TOTAL_HOURS,
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
