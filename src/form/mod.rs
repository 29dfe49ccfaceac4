//! Multi-step lead capture form.
//!
//! Everything in here is plain Rust with no DOM access; the Yew view lives in
//! `components::smart_form` and drives a [`FormController`].

pub mod answers;
pub mod controller;
pub mod message;
pub mod phone;
pub mod steps;
pub mod validation;

pub use answers::{Field, PreferredTime, Urgency};
pub use controller::{FormController, SubmitOutcome};
pub use steps::{Step, SYMPTOM_OPTIONS};
