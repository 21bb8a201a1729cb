use crate::core::config::MapConfig;
use crate::core::error::{AppError, Result};
use crate::features::catalog::models::CategoryItem;
use crate::features::registration::models::{ContactInfo, RegistrationDraft, SessionPhase};
use crate::features::registration::services::MapPicker;
use crate::modules::attachments::ImageAttachment;
use crate::shared::types::{Coordinate, FetchState};

/// The one consolidated mutable state of a registration form session.
///
/// Each asynchronous effect owns exactly one slice of this state: the
/// geolocation probe seeds the map, the geodata client fills the region and
/// sub-region slots, the catalog client fills the catalog slot. User
/// interaction flows through the named operations below.
pub struct RegistrationSession {
    contact: ContactInfo,
    regions: FetchState<Vec<String>>,
    sub_regions: FetchState<Vec<String>>,
    selected_region: Option<String>,
    selected_sub_region: Option<String>,
    map: MapPicker,
    catalog: FetchState<Vec<CategoryItem>>,
    selected_items: Vec<i64>,
    image: Option<ImageAttachment>,
    phase: SessionPhase,
}

impl RegistrationSession {
    pub fn new(map_config: &MapConfig) -> Self {
        Self {
            contact: ContactInfo::default(),
            regions: FetchState::Pending,
            sub_regions: FetchState::Pending,
            selected_region: None,
            selected_sub_region: None,
            map: MapPicker::new(map_config),
            catalog: FetchState::Pending,
            selected_items: Vec::new(),
            image: None,
            phase: SessionPhase::Idle,
        }
    }

    // ==================== Mount ====================

    /// Apply the results of the mount-time fetches and enter Editing
    pub fn mount(
        &mut self,
        regions: FetchState<Vec<String>>,
        catalog: FetchState<Vec<CategoryItem>>,
        position: FetchState<Coordinate>,
    ) {
        if let Some(reason) = regions.failure() {
            tracing::warn!("Region list unavailable: {}", reason);
        }
        if let Some(reason) = catalog.failure() {
            tracing::warn!("Category catalog unavailable: {}", reason);
        }
        self.regions = regions;
        self.catalog = catalog;
        match position {
            FetchState::Ready(coord) => self.map.seed(coord),
            FetchState::Failed(reason) => {
                // Map stays at the (0,0) default
                tracing::warn!("Geolocation unavailable, map stays at origin: {}", reason);
            }
            FetchState::Pending => {}
        }
        self.phase = SessionPhase::Editing;
    }

    // ==================== Contact fields ====================

    pub fn set_name(&mut self, name: String) {
        self.contact.name = name;
    }

    pub fn set_email(&mut self, email: String) {
        self.contact.email = email;
    }

    pub fn set_whatsapp(&mut self, whatsapp: String) {
        self.contact.whatsapp = whatsapp;
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    // ==================== Region cascade ====================

    pub fn regions(&self) -> &FetchState<Vec<String>> {
        &self.regions
    }

    pub fn sub_regions(&self) -> &FetchState<Vec<String>> {
        &self.sub_regions
    }

    /// Select a region.
    ///
    /// Any previously chosen sub-region belonged to the old region and is no
    /// longer applicable, so the sub-region selection and option list are
    /// reset; the caller is expected to issue a fresh sub-region fetch keyed
    /// by the new region.
    pub fn select_region(&mut self, region: String) {
        self.selected_region = Some(region);
        self.selected_sub_region = None;
        self.sub_regions = FetchState::Pending;
    }

    /// Store the result of the sub-region fetch for the current region
    pub fn set_sub_regions(&mut self, sub_regions: FetchState<Vec<String>>) {
        self.sub_regions = sub_regions;
    }

    pub fn select_sub_region(&mut self, sub_region: String) {
        self.selected_sub_region = Some(sub_region);
    }

    pub fn selected_region(&self) -> Option<&str> {
        self.selected_region.as_deref()
    }

    pub fn selected_sub_region(&self) -> Option<&str> {
        self.selected_sub_region.as_deref()
    }

    // ==================== Map ====================

    pub fn map(&self) -> &MapPicker {
        &self.map
    }

    pub fn place_pin(&mut self, position: Coordinate) {
        self.map.click(position);
    }

    // ==================== Category multi-select ====================

    pub fn catalog(&self) -> &FetchState<Vec<CategoryItem>> {
        &self.catalog
    }

    /// Toggle a category id: remove it if selected, add it otherwise
    pub fn toggle_item(&mut self, id: i64) {
        if let Some(pos) = self.selected_items.iter().position(|&i| i == id) {
            self.selected_items.remove(pos);
        } else {
            self.selected_items.push(id);
        }
    }

    pub fn is_item_selected(&self, id: i64) -> bool {
        self.selected_items.contains(&id)
    }

    pub fn selected_items(&self) -> &[i64] {
        &self.selected_items
    }

    // ==================== Image attachment ====================

    pub fn attach_image(&mut self, image: ImageAttachment) {
        self.image = Some(image);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn image(&self) -> Option<&ImageAttachment> {
        self.image.as_ref()
    }

    // ==================== Draft assembly & phase ====================

    /// Assemble the transient submission-time draft from the current state.
    ///
    /// Unselected region/sub-region become empty strings so the validator
    /// reports them as missing fields rather than the assembly failing.
    pub fn draft(&self) -> RegistrationDraft {
        RegistrationDraft {
            contact: self.contact.clone(),
            region: self.selected_region.clone().unwrap_or_default(),
            sub_region: self.selected_sub_region.clone().unwrap_or_default(),
            pin: self.map.pin(),
            item_ids: self.selected_items.clone(),
            image: self.image.clone(),
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn begin_submit(&mut self) -> Result<()> {
        if self.phase != SessionPhase::Editing {
            return Err(AppError::BadRequest(format!(
                "Cannot submit from phase {:?}",
                self.phase
            )));
        }
        self.phase = SessionPhase::Submitting;
        Ok(())
    }

    pub fn finish(&mut self) {
        self.phase = SessionPhase::Done;
    }

    pub fn fail(&mut self, reason: String) {
        self.phase = SessionPhase::Failed(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> RegistrationSession {
        RegistrationSession::new(&MapConfig {
            tile_url_template: "https://a.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            default_zoom: 15,
        })
    }

    fn mounted_session() -> RegistrationSession {
        let mut s = session();
        s.mount(
            FetchState::Ready(vec!["SP".to_string(), "RJ".to_string()]),
            FetchState::Ready(vec![]),
            FetchState::Ready(Coordinate::new(40.0, -70.0)),
        );
        s
    }

    #[test]
    fn test_mount_seeds_map_and_enters_editing() {
        let s = mounted_session();
        assert_eq!(*s.phase(), SessionPhase::Editing);
        assert_eq!(s.map().center(), Coordinate::new(40.0, -70.0));
        assert_eq!(s.map().pin(), Coordinate::new(40.0, -70.0));
    }

    #[test]
    fn test_mount_with_failed_geolocation_stays_at_origin() {
        let mut s = session();
        s.mount(
            FetchState::Ready(vec![]),
            FetchState::Ready(vec![]),
            FetchState::Failed("timed out".to_string()),
        );
        assert_eq!(*s.phase(), SessionPhase::Editing);
        assert_eq!(s.map().pin(), Coordinate::default());
    }

    #[test]
    fn test_region_change_invalidates_sub_region() {
        let mut s = mounted_session();
        s.select_region("SP".to_string());
        s.set_sub_regions(FetchState::Ready(vec!["Campinas".to_string()]));
        s.select_sub_region("Campinas".to_string());

        s.select_region("RJ".to_string());
        assert_eq!(s.selected_region(), Some("RJ"));
        assert_eq!(s.selected_sub_region(), None);
        assert_eq!(*s.sub_regions(), FetchState::Pending);
    }

    #[test]
    fn test_toggle_item_is_idempotent_under_double_toggle() {
        let mut s = mounted_session();
        s.toggle_item(1);
        s.toggle_item(3);
        s.toggle_item(1);
        s.toggle_item(1);
        assert_eq!(s.selected_items(), &[3, 1]);
        assert!(s.is_item_selected(1));
        assert!(!s.is_item_selected(2));
    }

    #[test]
    fn test_toggle_item_never_duplicates() {
        let mut s = mounted_session();
        s.toggle_item(5);
        s.toggle_item(5);
        s.toggle_item(5);
        assert_eq!(s.selected_items(), &[5]);
    }

    #[test]
    fn test_place_pin_is_last_write_wins() {
        let mut s = mounted_session();
        s.place_pin(Coordinate::new(10.0, 20.0));
        s.place_pin(Coordinate::new(-5.0, 30.0));
        assert_eq!(s.map().pin(), Coordinate::new(-5.0, 30.0));
        // Viewport center untouched
        assert_eq!(s.map().center(), Coordinate::new(40.0, -70.0));
    }

    #[test]
    fn test_draft_uses_empty_strings_for_unselected_regions() {
        let s = mounted_session();
        let draft = s.draft();
        assert_eq!(draft.region, "");
        assert_eq!(draft.sub_region, "");
    }

    #[test]
    fn test_draft_carries_insertion_order_of_items() {
        let mut s = mounted_session();
        s.toggle_item(3);
        s.toggle_item(1);
        assert_eq!(s.draft().item_ids, vec![3, 1]);
    }

    #[test]
    fn test_submit_phase_transitions() {
        let mut s = mounted_session();
        assert!(s.begin_submit().is_ok());
        assert_eq!(*s.phase(), SessionPhase::Submitting);
        // No path back to Editing from Submitting
        assert!(s.begin_submit().is_err());
        s.finish();
        assert_eq!(*s.phase(), SessionPhase::Done);
    }

    #[test]
    fn test_submit_before_mount_is_rejected() {
        let mut s = session();
        assert!(s.begin_submit().is_err());
    }

    #[test]
    fn test_failed_submission_is_terminal() {
        let mut s = mounted_session();
        s.begin_submit().unwrap();
        s.fail("HTTP 500".to_string());
        assert_eq!(*s.phase(), SessionPhase::Failed("HTTP 500".to_string()));
        assert!(s.begin_submit().is_err());
    }
}
