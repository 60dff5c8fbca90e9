#[cfg(feature = "serde")]
use serde::Serialize;

/// A complete parameter snapshot selectable by name.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub carrier_hz: f32,
    pub beat_hz: f32,
    pub volume_percent: f32,
}

/// The fixed catalog. Selecting an unknown name is defined to leave the
/// current parameters unchanged.
pub const PRESETS: [Preset; 4] = [
    Preset {
        name: "meditation",
        carrier_hz: 400.0,
        beat_hz: 6.0,
        volume_percent: 40.0,
    },
    Preset {
        name: "focus",
        carrier_hz: 400.0,
        beat_hz: 15.0,
        volume_percent: 50.0,
    },
    Preset {
        name: "sleep",
        carrier_hz: 250.0,
        beat_hz: 3.0,
        volume_percent: 30.0,
    },
    Preset {
        name: "creativity",
        carrier_hz: 340.0,
        beat_hz: 8.0,
        volume_percent: 45.0,
    },
];

impl Preset {
    pub fn find(name: &str) -> Option<&'static Preset> {
        PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
