//! Collection point registration workflow.
//!
//! Holds the one mutable draft of the registration form, the map position
//! picker, the validation gate and the multipart submission pipeline. All
//! draft mutation goes through [`services::RegistrationSession`] so the
//! cross-field invariants (a chosen sub-region always belongs to the chosen
//! region, the viewport center never moves after seeding) live in one place.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;

pub use services::{DraftValidator, MapPicker, RegistrationSession, SubmissionAssembler};
