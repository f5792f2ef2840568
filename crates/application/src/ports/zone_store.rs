use dnsforever_domain::{domain_name, DomainError, Zone};
use std::sync::Arc;

/// Owns every zone this server is authoritative for, keyed by apex.
///
/// Readers receive immutable `Arc<Zone>` snapshots and keep them for the
/// whole of one lookup. Lookups never create entries.
pub trait ZoneStore: Send + Sync {
    /// Exact apex lookup. `apex` must be normalized.
    fn get_zone(&self, apex: &str) -> Option<Arc<Zone>>;

    /// Inserts `zone`, failing with `ZoneAlreadyExists` when its apex is
    /// taken.
    fn create_zone(&self, zone: Zone) -> Result<Arc<Zone>, DomainError>;

    /// Inserts `zone`, atomically replacing any zone with the same apex.
    /// Returns the published zone and the one it replaced.
    fn create_or_replace_zone(&self, zone: Zone) -> (Arc<Zone>, Option<Arc<Zone>>);

    /// Applies `update` to a private copy of the zone and publishes the
    /// copy. Writers to one zone are serialized, so `update` may run more
    /// than once if another write lands first; it must not have side
    /// effects. A failed update publishes nothing.
    fn update_zone(
        &self,
        apex: &str,
        update: &mut dyn FnMut(&mut Zone) -> Result<(), DomainError>,
    ) -> Result<Arc<Zone>, DomainError>;

    /// Removes the zone and every name in it, returning it if it existed.
    fn delete_zone(&self, apex: &str) -> Option<Arc<Zone>>;

    fn zone_names(&self) -> Vec<Arc<str>>;

    /// Zone-cut search: strips the leftmost label of `name` until an apex
    /// matches. `None` means no authority for `name`, not NXDOMAIN.
    fn find_zone(&self, name: &str) -> Option<Arc<Zone>> {
        let mut candidate = Some(name);
        while let Some(current) = candidate {
            if let Some(zone) = self.get_zone(current) {
                return Some(zone);
            }
            candidate = domain_name::parent(current);
        }
        None
    }
}
