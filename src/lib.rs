//! Terminal front end for visitnote.
//!
//! Loads appointment exports and renders their summaries as plain text on
//! top of [`visitnote_core`].

pub mod import;
pub mod render;
