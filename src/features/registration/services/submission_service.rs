use reqwest::multipart::{Form, Part};

use crate::core::config::BackendConfig;
use crate::core::error::{AppError, Result};
use crate::features::registration::dtos::CreatePointFields;
use crate::features::registration::models::RegistrationDraft;
use crate::shared::constants::{IMAGE_FIELD, POINTS_PATH};

/// Serializes a draft into a multipart payload and posts it to the backend
pub struct SubmissionAssembler {
    client: reqwest::Client,
    base_url: String,
}

impl SubmissionAssembler {
    pub fn new(config: &BackendConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Submit the draft to the point-creation endpoint
    pub async fn submit(&self, draft: &RegistrationDraft) -> Result<()> {
        let url = format!("{}/{}", self.base_url, POINTS_PATH);
        let form = Self::build_form(draft)?;

        tracing::info!(
            "Submitting collection point '{}' to {}",
            draft.contact.name,
            url
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Point submission failed: {:?}", e);
                AppError::ExternalServiceError(format!("Point submission failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Backend rejected submission: HTTP {} - {}", status, body);
            return Err(AppError::ExternalServiceError(format!(
                "Backend rejected submission: HTTP {}",
                status
            )));
        }

        tracing::info!("Collection point registered");

        Ok(())
    }

    /// Build the multipart form: flattened scalar fields plus, if present,
    /// the image under its fixed field name
    fn build_form(draft: &RegistrationDraft) -> Result<Form> {
        let mut form = Form::new();

        for (name, value) in CreatePointFields::from_draft(draft).into_pairs() {
            form = form.text(name, value);
        }

        if let Some(image) = &draft.image {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)
                .map_err(|e| {
                    AppError::BadRequest(format!("Invalid image content type: {}", e))
                })?;
            form = form.part(IMAGE_FIELD, part);
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::registration::models::ContactInfo;
    use crate::modules::attachments::ImageAttachment;
    use crate::shared::types::Coordinate;

    fn draft() -> RegistrationDraft {
        RegistrationDraft {
            contact: ContactInfo {
                name: "Ecoponto Centro".to_string(),
                email: "contato@ecoponto.example".to_string(),
                whatsapp: "11987654321".to_string(),
            },
            region: "SP".to_string(),
            sub_region: "Campinas".to_string(),
            pin: Coordinate::new(-22.9, -47.06),
            item_ids: vec![1, 3],
            image: None,
        }
    }

    fn attachment() -> ImageAttachment {
        ImageAttachment {
            file_name: "front.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8, 0xff],
        }
    }

    #[test]
    fn test_form_without_image_builds() {
        assert!(SubmissionAssembler::build_form(&draft()).is_ok());
    }

    #[test]
    fn test_form_with_image_builds() {
        let mut d = draft();
        d.image = Some(attachment());
        assert!(SubmissionAssembler::build_form(&d).is_ok());
    }

    #[test]
    fn test_form_with_bogus_content_type_is_rejected() {
        let mut d = draft();
        d.image = Some(ImageAttachment {
            content_type: "not a mime".to_string(),
            ..attachment()
        });
        let err = SubmissionAssembler::build_form(&d).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_attach_then_clear_omits_the_image_field() {
        // Mirrors the UI round-trip: attaching then clearing before submit
        // must leave the payload identical to never attaching
        let mut d = draft();
        d.image = Some(attachment());
        d.image = None;

        let with_cleared = CreatePointFields::from_draft(&d).into_pairs();
        let never_attached = CreatePointFields::from_draft(&draft()).into_pairs();
        assert_eq!(with_cleared, never_attached);
        assert!(d.image.is_none());
    }
}
