//! Consultation order records collected by the lead dialogue.

use chrono::{DateTime, Utc};
use tracing::info;

/// The name + contact pair gathered at the end of the order flow.
/// Ephemeral: written to the operational log, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderRecord {
    pub name: String,
    pub contact: String,
    pub timestamp: DateTime<Utc>,
}

impl OrderRecord {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            timestamp: Utc::now(),
        }
    }

    /// Emit the structured log line the operator watches for new leads.
    pub fn log(&self) {
        info!(
            name = %self.name,
            contact = %self.contact,
            timestamp = %self.timestamp.to_rfc3339(),
            "New consultation order"
        );
    }
}
