mod draft;

pub use draft::{ContactInfo, RegistrationDraft, SessionPhase};
