use speculate2::speculate;

speculate! {
    use uuid::Uuid;
    use visitnote::render;
    use visitnote_core::models::{Appointment, AppointmentSummary};
    use visitnote_core::{SectionLimits, SummaryView};

    fn appointment(details: Option<AppointmentSummary>) -> Appointment {
        Appointment {
            id: Uuid::nil(),
            date: "2025-01-05T15:45:00".to_string(),
            summary: "Annual checkup".to_string(),
            plan: vec![],
            notes: String::new(),
            documents: vec![],
            details,
        }
    }

    fn summary() -> AppointmentSummary {
        serde_json::from_str(r#"{
            "summary": "Routine visit, blood pressure slightly up.",
            "reason_for_visit": [
                {"reason": "Annual physical", "description": "Yearly review"}
            ],
            "diagnosis": {
                "details": [
                    {"title": "A", "description": "first", "severity": "low"},
                    {"title": "B", "description": "second", "severity": "high"},
                    {"title": "C", "description": "third"},
                    {"title": "D", "description": "fourth", "severity": "medium"}
                ]
            },
            "todos": [
                {"type": "Medication", "title": "Ibuprofen", "dosage": "200mg", "frequency": "twice daily", "verified": true}
            ],
            "follow_up": [
                {"description": "See cardiologist", "time_frame": "2 weeks"}
            ],
            "learnings": [
                {"title": "Salt", "description": "Keep under 2g a day"}
            ]
        }"#).unwrap()
    }

    fn plan_summary() -> AppointmentSummary {
        serde_json::from_str(r#"{
            "version": "1.3",
            "tests": [
                {"title": "BMP", "description": "Kidney function", "importance": "low"},
                {"title": "Echo", "description": "Repeat in 3 months", "importance": "high"}
            ],
            "medications": [
                {"title": "Furosemide", "dosage": "40mg", "frequency": "daily", "importance": "low", "change": true}
            ],
            "why_recommended": "Diuretics reduce fluid overload."
        }"#).unwrap()
    }

    fn plan_view(expand: bool) -> SummaryView {
        let mut view = SummaryView::build(&plan_summary(), &SectionLimits::default(), false).unwrap();
        if expand {
            view.expand_all();
        }
        view
    }

    fn view(expand: bool) -> SummaryView {
        let mut view = SummaryView::build(&summary(), &SectionLimits::default(), false).unwrap();
        if expand {
            view.expand_all();
        }
        view
    }

    describe "appointment list line" {
        it "shows the short date and summary" {
            let line = render::appointment_line(&appointment(None));
            assert!(line.starts_with("Jan 5, 2025 at 3:45 PM  Annual checkup"));
        }

        it "shows the raw date when it cannot be parsed" {
            let mut appt = appointment(None);
            appt.date = "sometime".to_string();
            assert!(render::appointment_line(&appt).starts_with("sometime"));
        }
    }

    describe "appointment detail" {
        it "uses the long date as its title" {
            let text = render::appointment_detail(&appointment(Some(summary())), &view(false));
            assert_eq!(text.lines().next(), Some("January 5, 2025 at 3:45 PM"));
        }

        it "shows a read more control for long sections" {
            let text = render::appointment_detail(&appointment(Some(summary())), &view(false));
            assert!(text.contains("▼ Read More (1 more)"));
            assert!(!text.contains("C [") && !text.contains("• C"));
        }

        it "orders diagnoses by severity" {
            let text = render::appointment_detail(&appointment(Some(summary())), &view(true));
            let b = text.find("• B [high]").unwrap();
            let d = text.find("• D [medium]").unwrap();
            let a = text.find("• A [low]").unwrap();
            let c = text.find("• C").unwrap();
            assert!(b < d && d < a && a < c);
            assert!(text.contains("▲ Read Less"));
        }

        it "marks the faded item while collapsed" {
            let text = render::appointment_detail(&appointment(Some(summary())), &view(false));
            assert!(text.contains("• A [low] …"));
        }

        it "shows medication details and tag" {
            let text = render::appointment_detail(&appointment(Some(summary())), &view(false));
            assert!(text.contains("[medication] Ibuprofen (verified)"));
            assert!(text.contains("200mg · twice daily"));
        }

        it "omits the toggle for short sections" {
            let text = render::appointment_detail(&appointment(Some(summary())), &view(false));
            let follow_up = &text[text.find("Follow-up").unwrap()..];
            assert!(follow_up.contains("when: 2 weeks"));
            assert!(!follow_up.contains("Read"));
        }

        it "shows the summary text" {
            let text = render::appointment_detail(&appointment(Some(summary())), &view(false));
            assert!(text.contains("Summary\n  Routine visit, blood pressure slightly up."));
        }

        it "keeps the reason for visit closed until expanded" {
            let text = render::appointment_detail(&appointment(Some(summary())), &view(false));
            assert!(text.contains("▶ Reason for Visit"));
            assert!(!text.contains("Annual physical"));

            let text = render::appointment_detail(&appointment(Some(summary())), &view(true));
            assert!(text.contains("▼ Reason for Visit\n  • Annual physical"));
        }

        it "lists key learnings" {
            let text = render::appointment_detail(&appointment(Some(summary())), &view(false));
            assert!(text.contains("Key Learnings\n  • Salt\n    Keep under 2g a day"));
        }

        it "shows high plan items with low ones behind read more" {
            let text = render::appointment_detail(&appointment(Some(plan_summary())), &plan_view(false));
            let tests = &text[text.find("▼ Tests").unwrap()..];
            assert!(tests.contains("• Echo"));
            assert!(tests.contains("▼ Read More (1 more)"));
        }

        it "collapses an all-low plan card" {
            let text = render::appointment_detail(&appointment(Some(plan_summary())), &plan_view(false));
            assert!(text.contains("▶ Medications"));
            assert!(!text.contains("Furosemide"));

            let text = render::appointment_detail(&appointment(Some(plan_summary())), &plan_view(true));
            assert!(text.contains("• Furosemide (changed)"));
            assert!(text.contains("40mg · daily"));
        }

        it "shows why the plan was recommended" {
            let text = render::appointment_detail(&appointment(Some(plan_summary())), &plan_view(false));
            assert!(text.contains("▼ Why is this the plan?\n  Diuretics reduce fluid overload."));
        }

        it "says when there is no summary" {
            let empty = SummaryView::build(&AppointmentSummary::default(), &SectionLimits::default(), false).unwrap();
            let text = render::appointment_detail(&appointment(None), &empty);
            assert!(text.contains("No summary available yet."));
            assert!(!text.contains("Diagnosis"));
        }
    }
}
