//! Shortening service
//!
//! Ties the form, validator, registry and telemetry together. Shared by the
//! HTTP handlers and the CLI.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::telemetry::TelemetryReporter;
use super::validator::{SUBMITTED_EVENT, telemetry_message, validate_batch};
use crate::config::{ShortenerConfig, StaticConfig};
use crate::errors::ShortenitError;
use crate::interfaces::form::{ShortenEntry, ShortenForm};
use crate::storage::{
    ClickEvent, DEFAULT_VALIDITY_MINUTES, RandomCodeGenerator, ShortLinkRecord, ShortLinkRequest,
    ShortlinkRegistry,
};

/// Settings the service needs from `[shortener]`
#[derive(Debug, Clone)]
pub struct ShortenerSettings {
    pub public_base_url: String,
    pub default_validity_minutes: i64,
    pub code_length: usize,
    pub max_batch_size: usize,
    pub regenerate_attempts: u32,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::from(&ShortenerConfig::default())
    }
}

/// `code_length` 与 `max_batch_size` 至少为 1，非正的默认有效期回退到 30
impl From<&ShortenerConfig> for ShortenerSettings {
    fn from(config: &ShortenerConfig) -> Self {
        Self {
            public_base_url: config.public_base_url.clone(),
            default_validity_minutes: at_least(
                "default_validity_minutes",
                config.default_validity_minutes,
                1,
                DEFAULT_VALIDITY_MINUTES,
            ),
            code_length: at_least("code_length", config.code_length, 1, 1),
            max_batch_size: at_least("max_batch_size", config.max_batch_size, 1, 1),
            regenerate_attempts: config.regenerate_attempts,
        }
    }
}

fn at_least<T>(name: &str, value: T, min: T, fallback: T) -> T
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min {
        warn!(
            "Config: shortener.{} = {} is below {}, using {}",
            name, value, min, fallback
        );
        fallback
    } else {
        value
    }
}

/// One row of the stats view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    pub short_url: String,
    pub url: String,
    pub shortcode: String,
    pub validity_minutes: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: usize,
    pub clicks: Vec<ClickEvent>,
}

impl LinkStats {
    pub fn from_record(record: &ShortLinkRecord, public_base_url: &str) -> Self {
        Self {
            short_url: record.short_url(public_base_url),
            url: record.url.clone(),
            shortcode: record.shortcode.clone(),
            validity_minutes: record.validity_minutes,
            created_at: record.created_at,
            expires_at: record.expires_at,
            click_count: record.click_count(),
            clicks: record.clicks.clone(),
        }
    }
}

/// Owns the registry; every mutation goes through `submit`.
///
/// The write lock is only held for the synchronous insert and never across
/// an `.await`.
pub struct ShortenerService {
    registry: RwLock<ShortlinkRegistry>,
    telemetry: TelemetryReporter,
    settings: ShortenerSettings,
}

impl ShortenerService {
    pub fn new(settings: ShortenerSettings, telemetry: TelemetryReporter) -> Self {
        let registry = ShortlinkRegistry::new(
            Box::new(RandomCodeGenerator::new(settings.code_length)),
            settings.regenerate_attempts,
        );
        Self::with_registry(settings, registry, telemetry)
    }

    pub fn with_registry(
        settings: ShortenerSettings,
        registry: ShortlinkRegistry,
        telemetry: TelemetryReporter,
    ) -> Self {
        Self {
            registry: RwLock::new(registry),
            telemetry,
            settings,
        }
    }

    pub fn from_config(config: &StaticConfig) -> Self {
        Self::new(
            ShortenerSettings::from(&config.shortener),
            TelemetryReporter::from_config(&config.telemetry),
        )
    }

    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    pub fn telemetry(&self) -> &TelemetryReporter {
        &self.telemetry
    }

    /// A fresh form with this service's defaults
    pub fn new_form(&self) -> ShortenForm {
        ShortenForm::new(
            self.settings.default_validity_minutes,
            self.settings.max_batch_size,
        )
    }

    /// Build a form from raw entries, enforcing the row limit
    pub fn form_from_entries(
        &self,
        entries: Vec<ShortenEntry>,
    ) -> Result<ShortenForm, ShortenitError> {
        ShortenForm::from_entries(
            entries,
            self.settings.default_validity_minutes,
            self.settings.max_batch_size,
        )
    }

    /// Validate and insert a batch
    ///
    /// The whole batch is rejected on the first invalid entry; in that case an
    /// `error` telemetry event is fired and nothing is inserted. On success an
    /// `info` event is fired and the appended records are returned.
    pub fn submit(
        &self,
        batch: Vec<ShortLinkRequest>,
    ) -> Result<Vec<ShortLinkRecord>, ShortenitError> {
        if batch.is_empty() {
            return Err(ShortenitError::empty_batch("No URLs were submitted"));
        }
        if batch.len() > self.settings.max_batch_size {
            return Err(ShortenitError::batch_size_too_large(format!(
                "At most {} URLs can be shortened at once, got {}",
                self.settings.max_batch_size,
                batch.len()
            )));
        }

        if let Err(e) = validate_batch(&batch) {
            warn!("Shortener: batch rejected: {}", e);
            if let Some(event) = telemetry_message(&e) {
                self.telemetry.error(event);
            }
            return Err(e);
        }

        self.telemetry.info(SUBMITTED_EVENT);

        let count = batch.len();
        let created = self.registry.write().insert_batch(batch, Utc::now());
        info!("Shortener: created {} short links", count);
        Ok(created)
    }

    pub fn submit_form(&self, form: &ShortenForm) -> Result<Vec<ShortLinkRecord>, ShortenitError> {
        self.submit(form.to_requests())
    }

    /// Snapshot of all records in append order
    pub fn links(&self) -> Vec<ShortLinkRecord> {
        self.registry.read().records().to_vec()
    }

    pub fn stats(&self) -> Vec<LinkStats> {
        self.to_stats(self.registry.read().records())
    }

    pub fn to_stats(&self, records: &[ShortLinkRecord]) -> Vec<LinkStats> {
        records
            .iter()
            .map(|r| LinkStats::from_record(r, &self.settings.public_base_url))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.registry.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }
}
