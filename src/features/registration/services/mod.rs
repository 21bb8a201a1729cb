mod draft_validator;
mod map_picker;
mod session_service;
mod submission_service;

pub use draft_validator::DraftValidator;
pub use map_picker::MapPicker;
pub use session_service::RegistrationSession;
pub use submission_service::SubmissionAssembler;
