use crate::features::registration::models::RegistrationDraft;
use crate::shared::constants::ITEMS_FIELD;

/// Flattened scalar fields of the point-creation multipart request.
///
/// Latitude and longitude are coerced to their string representation and the
/// selected category ids are joined into one comma-separated field, matching
/// what the backend's multipart parser expects. The optional image travels
/// separately as a file part.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePointFields {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub region: String,
    pub sub_region: String,
    pub latitude: String,
    pub longitude: String,
    pub items: String,
}

impl CreatePointFields {
    pub fn from_draft(draft: &RegistrationDraft) -> Self {
        Self {
            name: draft.contact.name.clone(),
            email: draft.contact.email.clone(),
            whatsapp: draft.contact.whatsapp.clone(),
            region: draft.region.clone(),
            sub_region: draft.sub_region.clone(),
            latitude: draft.pin.lat.to_string(),
            longitude: draft.pin.lng.to_string(),
            items: draft
                .item_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Field name / value pairs in submission order
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name),
            ("email", self.email),
            ("whatsapp", self.whatsapp),
            ("region", self.region),
            ("subregion", self.sub_region),
            ("latitude", self.latitude),
            ("longitude", self.longitude),
            (ITEMS_FIELD, self.items),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::registration::models::ContactInfo;
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

    #[test]
    fn test_items_are_comma_joined() {
        let fields = CreatePointFields::from_draft(&draft());
        assert_eq!(fields.items, "1,3");
    }

    #[test]
    fn test_empty_selection_joins_to_empty_string() {
        let mut d = draft();
        d.item_ids.clear();
        assert_eq!(CreatePointFields::from_draft(&d).items, "");
    }

    #[test]
    fn test_coordinates_are_stringified() {
        let fields = CreatePointFields::from_draft(&draft());
        assert_eq!(fields.latitude, "-22.9");
        assert_eq!(fields.longitude, "-47.06");
    }

    #[test]
    fn test_pair_order_matches_backend_contract() {
        let names: Vec<&str> = CreatePointFields::from_draft(&draft())
            .into_pairs()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec![
                "name",
                "email",
                "whatsapp",
                "region",
                "subregion",
                "latitude",
                "longitude",
                "items"
            ]
        );
    }
}
