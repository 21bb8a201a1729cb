use validator::Validate;

use crate::features::registration::models::RegistrationDraft;

/// Validation schema for the submittable scalar fields of a draft.
///
/// The pin coordinate and the category selection are deliberately not
/// validated: an all-zero pin and an empty selection are accepted.
#[derive(Debug, Validate)]
struct DraftFields<'a> {
    #[validate(length(min = 1, message = "Name is required"))]
    name: &'a str,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    email: &'a str,

    // Non-empty is the whole contract; the backend accepts any phone format
    #[validate(length(min = 1, message = "WhatsApp is required"))]
    whatsapp: &'a str,

    #[validate(length(min = 1, message = "Region is required"))]
    region: &'a str,

    #[validate(length(min = 1, message = "Sub-region is required"))]
    sub_region: &'a str,
}

/// Gate that decides whether a draft may be submitted
pub struct DraftValidator;

impl DraftValidator {
    /// Validate a draft, returning the offending fields sorted by name.
    ///
    /// An `Err` blocks submission; the caller reports the field list to the
    /// user and never reaches the assembler.
    pub fn check(draft: &RegistrationDraft) -> Result<(), Vec<String>> {
        let fields = DraftFields {
            name: &draft.contact.name,
            email: &draft.contact.email,
            whatsapp: &draft.contact.whatsapp,
            region: &draft.region,
            sub_region: &draft.sub_region,
        };

        match fields.validate() {
            Ok(()) => Ok(()),
            Err(errors) => {
                let mut failures: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| {
                            let message = e
                                .message
                                .as_deref()
                                .unwrap_or("invalid value");
                            format!("{}: {}", field, message)
                        })
                    })
                    .collect();
                failures.sort();
                failures.dedup();
                Err(failures)
            }
        }
    }
}
