//! Loading appointments exported as JSON.

use anyhow::Context;
use std::fs;
use std::path::Path;

use visitnote_core::models::Appointment;
use visitnote_core::AppointmentStore;

/// Read a JSON array of appointments into a fresh store.
pub fn read_appointments(path: &Path) -> anyhow::Result<AppointmentStore> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let appointments: Vec<Appointment> = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse appointments in {}", path.display()))?;

    tracing::debug!(count = appointments.len(), path = %path.display(), "loaded appointments");
    let store = AppointmentStore::from_appointments(appointments)?;
    Ok(store)
}
