//! Session-local appointment store.
//!
//! Holds the appointments loaded during a session and the recording state
//! (which appointment is being recorded, and which finished last). The store
//! is an ordinary owned value: create one per session and pass it down.

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{Appointment, CreateAppointmentInput, UpdateAppointmentInput};

#[derive(Debug, Clone, Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
    current_recording_id: Option<Uuid>,
    last_completed_id: Option<Uuid>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-fetched appointments, rejecting duplicate ids.
    pub fn from_appointments(appointments: impl IntoIterator<Item = Appointment>) -> Result<Self> {
        let mut store = Self::new();
        for appointment in appointments {
            store.add(appointment)?;
        }
        Ok(store)
    }

    /// All appointments in insertion order.
    pub fn list(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn add(&mut self, appointment: Appointment) -> Result<&Appointment> {
        if self.get(appointment.id).is_some() {
            return Err(Error::DuplicateAppointment(appointment.id));
        }
        tracing::debug!(id = %appointment.id, "adding appointment");
        self.appointments.push(appointment);
        Ok(&self.appointments[self.appointments.len() - 1])
    }

    pub fn create(&mut self, input: CreateAppointmentInput) -> Result<&Appointment> {
        let appointment = Appointment::from_input(Uuid::new_v4(), input);
        self.add(appointment)
    }

    pub fn update(&mut self, id: Uuid, input: UpdateAppointmentInput) -> Result<&Appointment> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(Error::AppointmentNotFound(id))?;
        tracing::debug!(%id, "updating appointment");
        appointment.apply(input);
        Ok(&*appointment)
    }

    /// Mark a recording as in progress and return its appointment id.
    ///
    /// A fresh id is minted when none is given. Starting again replaces the
    /// active id.
    pub fn start_recording(&mut self, appointment_id: Option<Uuid>) -> Uuid {
        let id = appointment_id.unwrap_or_else(Uuid::new_v4);
        if let Some(previous) = self.current_recording_id.replace(id) {
            tracing::warn!(%previous, %id, "recording started while another was active");
        } else {
            tracing::debug!(%id, "recording started");
        }
        id
    }

    pub fn current_recording_id(&self) -> Option<Uuid> {
        self.current_recording_id
    }

    /// Finish the active recording, returning its id if there was one.
    pub fn end_recording(&mut self) -> Option<Uuid> {
        let id = self.current_recording_id.take()?;
        tracing::debug!(%id, "recording ended");
        self.last_completed_id = Some(id);
        Some(id)
    }

    pub fn last_completed_id(&self) -> Option<Uuid> {
        self.last_completed_id
    }
}
