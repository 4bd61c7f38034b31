//! The one record-form implementation shared by every entity: a field
//! struct (validation + payload serialization) driven through a
//! create-or-update endpoint pair, with the saving/error state the
//! surrounding page renders.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::services::api_client::ApiError;

/// The create/update half of an entity's endpoints, the only part a form
/// can reach. Create returns the server-assigned identifier.
#[async_trait]
pub trait RecordEndpoint: Send + Sync {
    type Payload: Send + Sync;

    async fn create(&self, payload: &Self::Payload) -> Result<String, ApiError>;
    async fn update(&self, id: &str, payload: &Self::Payload) -> Result<(), ApiError>;
}

/// An entity's editable field set.
pub trait FormFields {
    type Payload: Send + Sync;

    /// Required-field check; the message is shown inline and blocks the
    /// network call entirely.
    fn validate(&self) -> Result<(), String>;

    /// Serialize the current edit state for the API, coercing empty number
    /// fields to zero and date inputs to their wire form.
    fn payload(&self) -> Self::Payload;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

/// A form in flight: fields plus mode, busy flag, and the last error.
#[derive(Debug, Clone)]
pub struct FormState<F> {
    pub fields: F,
    mode: FormMode,
    saving: bool,
    error: Option<String>,
}

impl<F: FormFields> FormState<F> {
    pub fn create(fields: F) -> Self {
        Self {
            fields,
            mode: FormMode::Create,
            saving: false,
            error: None,
        }
    }

    pub fn edit(id: impl Into<String>, fields: F) -> Self {
        Self {
            fields,
            mode: FormMode::Edit(id.into()),
            saving: false,
            error: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// True while a save is in flight; submit controls stay disabled.
    pub fn saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Called on any field edit, mirroring the error banner clearing as the
    /// user types.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Validate, then create or update depending on mode. Returns true on
    /// success; on validation or endpoint failure the message lands in
    /// `error` and the fields stay put for a retry.
    pub async fn submit<E>(&mut self, endpoint: &E) -> bool
    where
        E: RecordEndpoint<Payload = F::Payload>,
    {
        self.error = None;

        if let Err(message) = self.fields.validate() {
            self.error = Some(message);
            return false;
        }

        self.saving = true;
        let payload = self.fields.payload();
        let result = match &self.mode {
            FormMode::Edit(id) => endpoint.update(id, &payload).await,
            FormMode::Create => endpoint.create(&payload).await.map(|_id| ()),
        };
        self.saving = false;

        match result {
            Ok(()) => true,
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }
}

/// A numeric input whose display state can be empty without meaning zero.
/// Only `value()` (used when serializing) coerces empty or garbage to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberField {
    raw: String,
}

impl NumberField {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_value(value: f64) -> Self {
        Self {
            raw: format!("{}", value),
        }
    }

    pub fn set(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    pub fn display(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    pub fn value(&self) -> f64 {
        self.raw.trim().parse().unwrap_or(0.0)
    }
}

/// Date as the form edits it: `YYYY-MM-DD`, empty for unset.
pub fn date_input_value(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// Parse a date input back to the wire representation (midnight UTC), so a
/// stored date round-trips unchanged at day granularity.
pub fn parse_date_input(input: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()?;
    Some(date.and_time(NaiveTime::MIN).and_utc())
}

/// Optional text fields: blank means unset.
pub fn optional_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
