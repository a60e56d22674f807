//! The dashboard dataset: built-in mock data or a JSON file.
//!
//! A dataset is loaded once at startup, validated, and then only read.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::RADAR_RANGE;
use crate::error::WarroomError;
use crate::model::{
    BlipKind, Briefing, BreakingItem, ConflictZone, CountryRegion, Development, HudStatus,
    MapPosition, RadarOffset, Severity, Status, SystemStatus, ThreatBlip, ThreatCard,
};
use crate::poll::{Poll, PollOption};
use crate::registry::ZoneRegistry;
use crate::tone::Tone;

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub hud: HudStatus,
    pub zones: ZoneRegistry,
    #[serde(default)]
    pub regions: Vec<CountryRegion>,
    #[serde(default)]
    pub blips: Vec<ThreatBlip>,
    #[serde(default)]
    pub threat_cards: Vec<ThreatCard>,
    #[serde(default)]
    pub developments: Vec<Development>,
    #[serde(default)]
    pub briefings: Vec<Briefing>,
    #[serde(default)]
    pub breaking: Vec<BreakingItem>,
    #[serde(default)]
    pub polls: Vec<Poll>,
}

impl Dataset {
    /// Parse and validate a JSON dataset.
    pub fn from_json(json: &str) -> Result<Self, WarroomError> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Read, parse and validate a JSON dataset file.
    pub fn load(path: &Path) -> Result<Self, WarroomError> {
        let json = std::fs::read_to_string(path).map_err(WarroomError::DatasetRead)?;
        let data = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            zones = data.zones.len(),
            polls = data.polls.len(),
            "dataset loaded"
        );
        Ok(data)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, WarroomError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// First poll, the one the dashboard shows.
    #[must_use]
    pub fn daily_poll(&self) -> Option<&Poll> {
        self.polls.first()
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), WarroomError> {
        for zone in self.zones.zones() {
            let MapPosition { x, y } = zone.position;
            if !(0.0..=100.0).contains(&x) || !(0.0..=100.0).contains(&y) {
                return Err(WarroomError::Dataset(format!(
                    "zone {} position ({x}, {y}) outside 0..=100",
                    zone.id
                )));
            }
        }

        for region in &self.regions {
            if region.x0 > region.x1 || region.y0 > region.y1 {
                return Err(WarroomError::Dataset(format!(
                    "region {} has inverted bounds",
                    region.key
                )));
            }
        }

        let mut blip_ids = HashSet::new();
        for blip in &self.blips {
            if !blip_ids.insert(blip.id.as_str()) {
                return Err(WarroomError::Dataset(format!(
                    "duplicate blip id: {}",
                    blip.id
                )));
            }
            if blip.offset.dx.abs() > RADAR_RANGE || blip.offset.dy.abs() > RADAR_RANGE {
                return Err(WarroomError::Dataset(format!(
                    "blip {} outside radar range",
                    blip.id
                )));
            }
        }

        for card in &self.threat_cards {
            if card.confidence > 100 {
                return Err(WarroomError::Dataset(format!(
                    "threat card {} confidence {} above 100",
                    card.location, card.confidence
                )));
            }
        }

        for poll in &self.polls {
            if poll.options.is_empty() {
                return Err(WarroomError::Dataset(format!(
                    "poll {} has no options",
                    poll.id
                )));
            }
            let mut option_ids = HashSet::new();
            for option in &poll.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(WarroomError::Dataset(format!(
                        "poll {} repeats option {}",
                        poll.id, option.id
                    )));
                }
            }
        }

        Ok(())
    }

    /// The built-in mock dataset.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn builtin() -> Self {
        let zones = vec![
            zone(
                "ukraine-russia",
                "RUSSIA-UKRAINE CONFLICT",
                "EASTERN EUROPE",
                (55.0, 25.0),
                Status::Active,
                Severity::Critical,
                "2024-06-25 14:30 UTC",
                "500K+ ESTIMATED",
                &[
                    "Continued fighting along eastern front lines",
                    "International aid packages approved",
                    "Diplomatic talks scheduled for next week",
                    "Civilian infrastructure targeted in recent attacks",
                ],
                &["UKRAINE", "RUSSIA", "NATO ALLIES", "UN PEACEKEEPERS"],
                &["ukraine", "russia"],
            ),
            zone(
                "middle-east",
                "MIDDLE EAST TENSIONS",
                "MIDDLE EAST",
                (58.0, 40.0),
                Status::Escalating,
                Severity::High,
                "2024-06-25 12:15 UTC",
                "50K+ ESTIMATED",
                &[
                    "Cross-border incidents reported",
                    "Military exercises in disputed zones",
                    "Evacuation of diplomatic personnel",
                    "Emergency UN Security Council meeting called",
                ],
                &["REGIONAL POWERS", "INTERNATIONAL COALITION", "MILITIA GROUPS"],
                &["syria", "iraq", "iran"],
            ),
            zone(
                "south-china-sea",
                "SOUTH CHINA SEA DISPUTE",
                "SOUTH CHINA SEA",
                (82.0, 45.0),
                Status::Active,
                Severity::Medium,
                "2024-06-25 10:45 UTC",
                "MINIMAL REPORTED",
                &[
                    "Naval patrols increased in disputed waters",
                    "Fishing vessel incidents reported",
                    "Joint military exercises announced",
                    "Diplomatic protests filed with international bodies",
                ],
                &["CHINA", "PHILIPPINES", "VIETNAM", "US NAVY", "ASEAN"],
                &["china", "philippines", "vietnam"],
            ),
            zone(
                "african-conflicts",
                "AFRICAN REGIONAL CONFLICTS",
                "CENTRAL AFRICA",
                (52.0, 60.0),
                Status::DeEscalating,
                Severity::Medium,
                "2024-06-25 08:20 UTC",
                "25K+ ESTIMATED",
                &[
                    "Ceasefire agreement signed",
                    "Humanitarian corridors established",
                    "Peacekeeping forces deployed",
                    "Refugee camps receiving international aid",
                ],
                &["LOCAL MILITIAS", "GOVERNMENT FORCES", "UN PEACEKEEPERS", "AU FORCES"],
                &["sudan", "ethiopia", "somalia"],
            ),
        ];

        // Bounds follow the map's own lon/lat mapping; smaller countries
        // come first so they win over larger neighbours.
        let regions = vec![
            region("ukraine", 56.1, 19.4, 61.1, 24.1),
            region("vietnam", 78.3, 36.5, 80.6, 45.3),
            region("philippines", 82.5, 38.8, 85.3, 47.1),
            region("syria", 60.0, 28.2, 61.7, 31.2),
            region("iraq", 60.8, 28.2, 63.3, 32.9),
            region("iran", 62.2, 26.5, 67.5, 35.3),
            region("somalia", 61.4, 42.9, 64.2, 51.2),
            region("ethiopia", 59.2, 41.2, 63.3, 48.2),
            region("sudan", 56.1, 37.0, 60.6, 44.7),
            region("china", 70.3, 18.8, 87.5, 39.4),
            region("russia", 61.1, 5.9, 100.0, 20.6),
            region("usa", 15.3, 21.2, 31.4, 35.3),
            region("brazil", 29.4, 47.1, 40.3, 70.0),
        ];

        let blips = vec![
            blip("1", (30.0, -20.0), BlipKind::Aircraft, "high"),
            blip("2", (-40.0, 50.0), BlipKind::Naval, "medium"),
            blip("3", (60.0, 30.0), BlipKind::Cyber, "critical"),
            blip("4", (-20.0, -60.0), BlipKind::Ground, "low"),
        ];

        let threat_cards = vec![
            card(Severity::Critical, "EASTERN EUROPE", "CYBER ATTACK", 94),
            card(Severity::High, "SOUTH CHINA SEA", "NAVAL BUILDUP", 87),
            card(Severity::Medium, "MIDDLE EAST", "INSURGENT ACTIVITY", 73),
            card(Severity::Low, "ARCTIC CIRCLE", "SURVEILLANCE", 56),
        ];

        let developments = vec![
            development("14:30", "Eastern Europe: Cyber attack on infrastructure networks detected", Severity::Critical),
            development("12:15", "South China Sea: Increased naval patrols reported", Severity::High),
            development("10:45", "Middle East: Diplomatic talks scheduled for emergency session", Severity::Medium),
            development("08:20", "Africa: Humanitarian aid corridors established", Severity::Low),
            development("06:00", "Arctic: Surveillance activities increased in disputed zones", Severity::Medium),
        ];

        let briefings = vec![
            briefing("PRIORITY ALPHA", Tone::Red, "FLASH: North Korean submarine detected breaching DMZ waters. South Korean naval forces on high alert. Estimated payload: unknown."),
            briefing("PRIORITY ALPHA", Tone::Orange, "URGENT: Massive cyber infiltration detected across NATO infrastructure. Attack vectors suggest state-sponsored origin. Critical systems isolated."),
            briefing("PRIORITY BRAVO", Tone::Yellow, "Iranian Revolutionary Guard conducting \"naval exercises\" 12 nautical miles from Strait of Hormuz. Oil tanker traffic rerouted."),
            briefing("PRIORITY BRAVO", Tone::Yellow, "Unconfirmed reports of mercenary units mobilizing in Central African Republic. Mineral extraction sites under surveillance."),
            briefing("PRIORITY CHARLIE", Tone::Blue, "Military aircraft conducting \"routine patrols\" within Taiwan's ADIZ for 48th consecutive day. Interceptor scrambles increased 300%."),
            briefing("PRIORITY CHARLIE", Tone::Blue, "Troop buildups detected along Finnish border following NATO expansion. Mobile SAM sites repositioned overnight."),
            briefing("PRIORITY DELTA", Tone::Green, "Intelligence sources report unusual communications chatter in southern Lebanon. Rocket stockpile assessments being updated."),
            briefing("PRIORITY DELTA", Tone::Green, "Nuclear facilities experiencing \"maintenance shutdowns.\" IAEA inspectors denied access for 72 hours."),
            briefing("SIGINT FLASH", Tone::Purple, "Intercepted chatter suggests coordinated disinformation campaign targeting EU elections. Social media bot networks activated across 12 countries."),
            briefing("HUMINT REPORT", Tone::Cyan, "Asset reports unusual diplomatic activity in Moscow. Emergency meetings convened at 0300 local time. Subject matter classified."),
        ];

        let breaking = vec![
            breaking_item("LIVE", "14:23 UTC", Tone::Red, "Emergency UN Security Council session called following reports of chemical weapons deployment in contested territory."),
            breaking_item("DEVELOPING", "13:45 UTC", Tone::Orange, "Major telecommunications blackout across Belarus. Internet traffic down 89%. Cause under investigation."),
            breaking_item("CONFIRMED", "12:30 UTC", Tone::Yellow, "Satellite imagery confirms new missile installations in disputed island chain. Range estimates suggest strategic capability."),
            breaking_item("UPDATE", "11:15 UTC", Tone::Blue, "G7 finance ministers convene emergency session following cryptocurrency market manipulation allegations."),
            breaking_item("INTEL", "10:45 UTC", Tone::Purple, "Unusual seismic activity detected near nuclear test sites. Magnitude 4.2 tremor suggests possible underground detonation."),
            breaking_item("RESOLVED", "09:30 UTC", Tone::Green, "Diplomatic crisis averted following successful back-channel negotiations. Troop withdrawals confirmed via satellite."),
        ];

        let polls = vec![Poll {
            id: "ww3-blame".into(),
            question: "If WW3 broke out tomorrow, which situation would be to blame?".into(),
            options: vec![
                poll_option("israel-iran", "Israel–Hamas drama turning into an Iran–U.S. showdown", "🇮🇱", 2847),
                poll_option("ukraine-russia", "Putin pressing 'unpause' on the Ukraine grindset", "🇺🇦", 3156),
                poll_option("china-taiwan", "China finally flipping the Taiwan table", "🇨🇳", 1923),
                poll_option("us-bears", "U.S. poking one too many bears (or dragons)", "🇺🇸", 4201),
            ],
        }];

        Self {
            hud: HudStatus {
                threat_level: 3,
                active_threats: 7,
                system_status: SystemStatus::Operational,
                uplink_percent: 92,
            },
            zones: ZoneRegistry::new(zones).expect("builtin zone ids are unique"),
            regions,
            blips,
            threat_cards,
            developments,
            briefings,
            breaking,
            polls,
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn zone(
    id: &str,
    name: &str,
    location: &str,
    (x, y): (f64, f64),
    status: Status,
    severity: Severity,
    last_update: &str,
    casualties: &str,
    developments: &[&str],
    parties: &[&str],
    countries: &[&str],
) -> ConflictZone {
    ConflictZone {
        id: id.into(),
        name: name.into(),
        location: location.into(),
        position: MapPosition::new(x, y),
        status,
        severity,
        last_update: last_update.into(),
        casualties: casualties.into(),
        key_developments: developments.iter().map(ToString::to_string).collect(),
        involved_parties: parties.iter().map(ToString::to_string).collect(),
        countries: countries.iter().map(ToString::to_string).collect(),
    }
}

fn region(key: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> CountryRegion {
    CountryRegion {
        key: key.into(),
        x0,
        y0,
        x1,
        y1,
    }
}

fn blip(id: &str, (dx, dy): (f64, f64), kind: BlipKind, level: &str) -> ThreatBlip {
    ThreatBlip {
        id: id.into(),
        offset: RadarOffset::new(dx, dy),
        kind,
        threat_level: level.into(),
    }
}

fn card(level: Severity, location: &str, kind: &str, confidence: u8) -> ThreatCard {
    ThreatCard {
        level,
        location: location.into(),
        kind: kind.into(),
        confidence,
    }
}

fn development(time: &str, event: &str, severity: Severity) -> Development {
    Development {
        time: time.into(),
        event: event.into(),
        severity,
    }
}

fn briefing(priority: &str, tone: Tone, text: &str) -> Briefing {
    Briefing {
        priority: priority.into(),
        tone,
        text: text.into(),
    }
}

fn breaking_item(stage: &str, time: &str, tone: Tone, text: &str) -> BreakingItem {
    BreakingItem {
        stage: stage.into(),
        time: time.into(),
        tone,
        text: text.into(),
    }
}

fn poll_option(id: &str, text: &str, flag: &str, votes: u64) -> PollOption {
    PollOption {
        id: id.into(),
        text: text.into(),
        flag: flag.into(),
        votes,
    }
}
