//! Conflict zone registry and lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::WarroomError;
use crate::model::ConflictZone;

/// Ordered set of conflict zones with an id index.
///
/// Order matters: country lookups return the first zone that lists the
/// key, in registration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ConflictZone>", into = "Vec<ConflictZone>")]
pub struct ZoneRegistry {
    zones: Vec<ConflictZone>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ZoneRegistry {
    /// Build a registry, rejecting duplicate ids.
    pub fn new(zones: Vec<ConflictZone>) -> Result<Self, WarroomError> {
        let mut index = HashMap::with_capacity(zones.len());
        for (i, zone) in zones.iter().enumerate() {
            if index.insert(zone.id.clone(), i).is_some() {
                return Err(WarroomError::Dataset(format!(
                    "duplicate conflict zone id: {}",
                    zone.id
                )));
            }
        }
        Ok(Self { zones, index })
    }

    /// Zone with the given id.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&ConflictZone> {
        self.index.get(id).map(|&i| &self.zones[i])
    }

    /// First zone whose country list contains `key`.
    #[must_use]
    pub fn by_country(&self, key: &str) -> Option<&ConflictZone> {
        self.zones.iter().find(|z| z.involves_country(key))
    }

    /// Like [`Self::by_id`] but reports a miss as an error.
    pub fn require(&self, id: &str) -> Result<&ConflictZone, WarroomError> {
        self.by_id(id)
            .ok_or_else(|| WarroomError::UnknownZone(id.to_string()))
    }

    /// Like [`Self::by_country`] but reports a miss as an error.
    pub fn require_country(&self, key: &str) -> Result<&ConflictZone, WarroomError> {
        self.by_country(key)
            .ok_or_else(|| WarroomError::UnknownCountry(key.to_string()))
    }

    /// Position of a zone in registration order.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Zones in registration order.
    #[must_use]
    pub fn zones(&self) -> &[ConflictZone] {
        &self.zones
    }

    /// Zone ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(|z| z.id.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl TryFrom<Vec<ConflictZone>> for ZoneRegistry {
    type Error = WarroomError;

    fn try_from(zones: Vec<ConflictZone>) -> Result<Self, Self::Error> {
        Self::new(zones)
    }
}

impl From<ZoneRegistry> for Vec<ConflictZone> {
    fn from(registry: ZoneRegistry) -> Self {
        registry.zones
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn registry() -> ZoneRegistry {
        Dataset::builtin().zones
    }

    #[test]
    fn lookup_by_id() {
        let reg = registry();
        let zone = reg.by_id("middle-east").unwrap();
        assert_eq!(zone.name, "MIDDLE EAST TENSIONS");
        assert!(reg.by_id("atlantis").is_none());
    }

    #[test]
    fn lookup_by_country() {
        let reg = registry();
        assert_eq!(reg.by_country("ukraine").unwrap().id, "ukraine-russia");
        assert_eq!(reg.by_country("russia").unwrap().id, "ukraine-russia");
        assert_eq!(reg.by_country("iran").unwrap().id, "middle-east");
        assert!(reg.by_country("brazil").is_none());
    }

    #[test]
    fn country_lookup_first_match_wins() {
        let mut zones = registry().zones().to_vec();
        let mut shadow = zones[0].clone();
        shadow.id = "shadow".into();
        zones.push(shadow);
        let reg = ZoneRegistry::new(zones).unwrap();
        assert_eq!(reg.by_country("ukraine").unwrap().id, "ukraine-russia");
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut zones = registry().zones().to_vec();
        zones.push(zones[1].clone());
        let err = ZoneRegistry::new(zones).unwrap_err();
        assert!(err.to_string().contains("middle-east"));
    }

    #[test]
    fn require_reports_misses() {
        let reg = registry();
        assert!(matches!(
            reg.require("atlantis"),
            Err(WarroomError::UnknownZone(_))
        ));
        assert!(matches!(
            reg.require_country("brazil"),
            Err(WarroomError::UnknownCountry(_))
        ));
    }

    #[test]
    fn ids_keep_registration_order() {
        let reg = registry();
        let ids: Vec<&str> = reg.ids().collect();
        assert_eq!(
            ids,
            ["ukraine-russia", "middle-east", "south-china-sea", "african-conflicts"]
        );
        assert_eq!(reg.position_of("south-china-sea"), Some(2));
    }

    #[test]
    fn serde_rebuilds_index() {
        let reg = registry();
        let json = serde_json::to_string(&reg).unwrap();
        let back: ZoneRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.by_id("middle-east").unwrap().id, "middle-east");
    }
}
