//! Canned intelligence attached to conflict zones.

use crate::model::ConflictZone;

/// Fixed intelligence lines keyed by conflict zone id.
const INTEL_TABLE: &[(&str, &[&str])] = &[
    (
        "ukraine-russia",
        &[
            "SIGINT: Armoured column movement intercepted along the eastern axis.",
            "IMINT: Satellite passes confirm artillery repositioning near the front.",
            "HUMINT: Supply convoys rerouted after rail junction strikes.",
        ],
    ),
    (
        "middle-east",
        &[
            "SIGINT: Elevated militia radio traffic across border sectors.",
            "IMINT: Air defence batteries relocated to coastal sites.",
            "HUMINT: Diplomatic staff drawdown reported in two capitals.",
        ],
    ),
    (
        "south-china-sea",
        &[
            "SIGINT: Coast guard cutters shadowing survey vessels.",
            "IMINT: New runway lighting observed on reclaimed reef.",
            "HUMINT: Fishing fleets ordered to avoid contested shoals.",
        ],
    ),
    (
        "african-conflicts",
        &[
            "SIGINT: Ceasefire monitoring channels report sporadic violations.",
            "IMINT: Humanitarian corridor traffic up fourfold this week.",
            "HUMINT: Militia leadership negotiating disarmament terms.",
        ],
    ),
];

/// Shown when a zone has no dedicated entry.
const NO_INTEL: &[&str] = &["NO ADDITIONAL INTELLIGENCE ON FILE."];

/// Intelligence lines for a zone id, or a generic notice.
#[must_use]
pub fn intel_for(zone_id: &str) -> &'static [&'static str] {
    INTEL_TABLE
        .iter()
        .find(|(id, _)| *id == zone_id)
        .map_or(NO_INTEL, |&(_, lines)| lines)
}

/// One-line assessment derived from a zone's status and severity.
#[must_use]
pub fn assessment(zone: &ConflictZone) -> String {
    format!(
        "ASSESSMENT: {} / {} THREAT / {} PARTIES",
        zone.status.label().to_uppercase(),
        zone.severity.label().to_uppercase(),
        zone.involved_parties.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn every_builtin_zone_has_intel() {
        let data = Dataset::builtin();
        for zone in data.zones.zones() {
            assert_ne!(intel_for(&zone.id), NO_INTEL, "missing intel for {}", zone.id);
        }
    }

    #[test]
    fn unknown_zone_gets_notice() {
        assert_eq!(intel_for("atlantis"), NO_INTEL);
    }

    #[test]
    fn assessment_line() {
        let data = Dataset::builtin();
        let zone = data.zones.by_id("middle-east").unwrap();
        assert_eq!(
            assessment(zone),
            "ASSESSMENT: ESCALATING / HIGH THREAT / 3 PARTIES"
        );
    }
}
