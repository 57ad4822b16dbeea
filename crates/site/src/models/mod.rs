//! Presentation-side state for the menu and contact pages.
//!
//! These types hold what a page shows between backend round trips: whether
//! data is still loading, the active filter, and where a form submission
//! stands. Route handlers build them per request; long-lived frontends can
//! keep one around and feed it results as they arrive.

pub mod contact_form;
pub mod load_state;
pub mod menu_browser;

pub use contact_form::{ContactForm, SubmissionState};
pub use load_state::{LOAD_FAILURE_MESSAGE, LoadState};
pub use menu_browser::{LoadTicket, MenuBrowser};
