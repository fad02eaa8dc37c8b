//! Core library for visitnote.
//!
//! This crate holds the presentation-independent logic of the appointment
//! companion: the "Read More" disclosure list, severity and category
//! classification, timestamp formatting, the appointment models and the
//! session-local appointment store. Rendering adapters (the CLI text renderer,
//! or any other front end) consume it without re-implementing these rules.
//!
//! # Usage
//!
//! ```
//! use visitnote_core::{DisclosureList, date_format};
//!
//! let mut list = DisclosureList::new(vec!["a", "b", "c", "d"]);
//! assert_eq!(list.visible_items(), &["a", "b", "c"]);
//! assert_eq!(list.toggle_label().as_deref(), Some("Read More (1 more)"));
//!
//! list.toggle();
//! assert_eq!(list.visible_items().len(), 4);
//!
//! assert_eq!(
//!     date_format::format_short("2025-01-05T15:45:00"),
//!     "Jan 5, 2025 at 3:45 PM"
//! );
//! ```

pub mod classify;
pub mod config;
pub mod date_format;
pub mod disclosure;
pub mod error;
pub mod models;
pub mod store;
pub mod view;

// Re-export commonly used types at crate root
pub use classify::{Classifiable, Importance, Severity, Tag};
pub use config::{Config, SectionLimits};
pub use disclosure::{Collapsible, DisclosureList};
pub use error::{Error, Result};
pub use store::AppointmentStore;
pub use view::{Section, SectionKind, SummaryView};
