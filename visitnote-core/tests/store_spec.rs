use speculate2::speculate;

speculate! {
    use uuid::Uuid;
    use visitnote_core::models::{Appointment, CreateAppointmentInput, UpdateAppointmentInput};
    use visitnote_core::{AppointmentStore, Error};

    fn input(date: &str, summary: &str) -> CreateAppointmentInput {
        CreateAppointmentInput {
            date: date.to_string(),
            summary: summary.to_string(),
            plan: vec![],
            notes: String::new(),
            documents: vec![],
        }
    }

    describe "appointments" {
        before {
            let mut store = AppointmentStore::new();
        }

        it "starts empty" {
            assert!(store.is_empty());
            assert!(store.list().is_empty());
        }

        it "creates with a fresh id and finds it again" {
            let id = store.create(input("2025-01-05T15:45:00", "Checkup")).unwrap().id;
            let found = store.get(id).expect("created appointment should be found");
            assert_eq!(found.summary, "Checkup");
            assert_eq!(found.details, None);
        }

        it "lists in insertion order" {
            store.create(input("2025-01-01T09:00:00", "first")).unwrap();
            store.create(input("2024-01-01T09:00:00", "second")).unwrap();
            let summaries: Vec<_> = store.list().iter().map(|a| a.summary.as_str()).collect();
            assert_eq!(summaries, vec!["first", "second"]);
        }

        it "rejects a duplicate id" {
            let appointment = Appointment::from_input(Uuid::new_v4(), input("2025-01-01", "x"));
            store.add(appointment.clone()).unwrap();
            let err = store.add(appointment.clone()).unwrap_err();
            assert!(matches!(err, Error::DuplicateAppointment(id) if id == appointment.id));
            assert_eq!(store.len(), 1);
        }

        it "merges partial updates" {
            let id = store.create(input("2025-01-05T15:45:00", "Checkup")).unwrap().id;
            let updated = store
                .update(id, UpdateAppointmentInput {
                    notes: Some("bring results".to_string()),
                    ..Default::default()
                })
                .unwrap();
            assert_eq!(updated.notes, "bring results");
            assert_eq!(updated.summary, "Checkup");
        }

        it "reports updates to unknown ids" {
            let missing = Uuid::new_v4();
            let err = store.update(missing, UpdateAppointmentInput::default()).unwrap_err();
            assert!(matches!(err, Error::AppointmentNotFound(id) if id == missing));
        }

        it "is isolated between instances" {
            store.create(input("2025-01-01", "mine")).unwrap();
            let other = AppointmentStore::new();
            assert!(other.is_empty());
        }
    }

    describe "recording session" {
        before {
            let mut store = AppointmentStore::new();
        }

        it "has no active or completed recording initially" {
            assert_eq!(store.current_recording_id(), None);
            assert_eq!(store.last_completed_id(), None);
            assert_eq!(store.end_recording(), None);
        }

        it "uses the supplied appointment id" {
            let id = Uuid::new_v4();
            assert_eq!(store.start_recording(Some(id)), id);
            assert_eq!(store.current_recording_id(), Some(id));
        }

        it "mints an id when none is supplied" {
            let id = store.start_recording(None);
            assert_eq!(store.current_recording_id(), Some(id));
        }

        it "moves the active id to last completed on end" {
            let id = store.start_recording(None);
            assert_eq!(store.end_recording(), Some(id));
            assert_eq!(store.current_recording_id(), None);
            assert_eq!(store.last_completed_id(), Some(id));
        }

        it "keeps the last completed id when ending twice" {
            let id = store.start_recording(None);
            store.end_recording();
            assert_eq!(store.end_recording(), None);
            assert_eq!(store.last_completed_id(), Some(id));
        }
    }
}
