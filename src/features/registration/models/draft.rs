use crate::modules::attachments::ImageAttachment;
use crate::shared::types::Coordinate;

/// Contact fields of the entity being registered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

/// Submission-time aggregate of all form fields.
///
/// Exists only transiently: it is assembled from the session when the user
/// submits and is never persisted client-side.
#[derive(Debug, Clone)]
pub struct RegistrationDraft {
    pub contact: ContactInfo,
    pub region: String,
    pub sub_region: String,
    pub pin: Coordinate,
    /// Category ids in insertion order, duplicate-free
    pub item_ids: Vec<i64>,
    pub image: Option<ImageAttachment>,
}

/// Lifecycle of one form session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    Idle,
    Editing,
    Submitting,
    Done,
    Failed(String),
}
