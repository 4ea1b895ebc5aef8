//! medilab-content — Immutable reference data for the MediLab Pro site.
//! Lab profile, diagnostic service catalog, team roster, and the
//! service-category enumeration used by the contact form.

pub mod profile;
pub mod services;
pub mod team;

pub use profile::{BusinessHours, ContactDetails, LabProfile};
pub use services::{ServiceCategory, ServiceOffering};
pub use team::TeamMember;

/// All site reference data, built once at startup and shared read-only with
/// every request handler.
#[derive(Debug, Clone)]
pub struct SiteContent {
    profile: LabProfile,
    services: Vec<ServiceOffering>,
    team: Vec<TeamMember>,
}

impl SiteContent {
    pub fn new() -> Self {
        Self {
            profile: profile::lab_profile(),
            services: services::catalog(),
            team: team::roster(),
        }
    }

    pub fn profile(&self) -> &LabProfile {
        &self.profile
    }

    /// Full service catalog in its fixed display order.
    pub fn services(&self) -> &[ServiceOffering] {
        &self.services
    }

    /// Exact-match lookup by service id. `None` means the caller should
    /// redirect back to the catalog, not fail.
    pub fn service(&self, id: &str) -> Option<&ServiceOffering> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_service_ids_are_unique() {
        let content = SiteContent::new();
        let ids: HashSet<&str> = content.services().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), content.services().len());
    }

    #[test]
    fn test_service_lookup_is_idempotent() {
        let content = SiteContent::new();
        let first = content.service("hematology").expect("known id");
        let second = content.service("hematology").expect("known id");
        assert_eq!(first.id, second.id);
        assert_eq!(first.name, second.name);
        assert_eq!(first.tests, second.tests);
    }

    #[test]
    fn test_unknown_service_id_misses() {
        let content = SiteContent::new();
        assert!(content.service("unknown-id").is_none());
        assert!(content.service("").is_none());
    }

    #[test]
    fn test_every_offering_id_maps_to_a_category() {
        let content = SiteContent::new();
        for offering in content.services() {
            let category = ServiceCategory::from_slug(offering.id);
            assert!(category.is_some(), "no category for id {}", offering.id);
        }
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let content = SiteContent::new();
        let ids: Vec<&str> = content.services().iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                "clinical-chemistry",
                "molecular-diagnostics",
                "microbiology",
                "hematology",
                "immunology",
                "pathology",
            ]
        );
    }

    #[test]
    fn test_team_roster_is_populated() {
        let content = SiteContent::new();
        assert_eq!(content.team().len(), 4);
        assert!(content.team().iter().all(|m| !m.name.is_empty()));
    }
}
