#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named brainwave-frequency range with a default beat frequency.
///
/// The ranges follow the conventional EEG bands. They are not disjoint:
/// beta's upper end informally overlaps gamma's lower bound, and nothing
/// here depends on exclusivity.
#[derive(Debug, Clone, Copy)]
pub struct BandDefinition {
    pub name: &'static str,
    pub min_hz: f32,
    pub max_hz: f32,
    pub default_beat_hz: f32,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Delta,
    Theta,
    Alpha,
    Beta,
    Gamma,
}

impl Band {
    pub const ALL: [Band; 5] = [
        Band::Delta,
        Band::Theta,
        Band::Alpha,
        Band::Beta,
        Band::Gamma,
    ];

    pub fn definition(self) -> &'static BandDefinition {
        match self {
            Band::Delta => &BandDefinition {
                name: "delta",
                min_hz: 0.5,
                max_hz: 4.0,
                default_beat_hz: 2.0,
            },
            Band::Theta => &BandDefinition {
                name: "theta",
                min_hz: 4.0,
                max_hz: 8.0,
                default_beat_hz: 6.0,
            },
            Band::Alpha => &BandDefinition {
                name: "alpha",
                min_hz: 8.0,
                max_hz: 12.0,
                default_beat_hz: 10.0,
            },
            Band::Beta => &BandDefinition {
                name: "beta",
                min_hz: 12.0,
                max_hz: 30.0,
                default_beat_hz: 20.0,
            },
            Band::Gamma => &BandDefinition {
                name: "gamma",
                min_hz: 30.0,
                max_hz: 100.0,
                default_beat_hz: 40.0,
            },
        }
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }

    pub fn from_name(name: &str) -> Option<Band> {
        Band::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }

    /// The first band whose range contains `beat_hz`. Used by display code
    /// to highlight where the current beat sits.
    pub fn containing(beat_hz: f32) -> Option<Band> {
        Band::ALL
            .into_iter()
            .find(|b| beat_hz >= b.definition().min_hz && beat_hz <= b.definition().max_hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fall_inside_their_own_range() {
        for band in Band::ALL {
            let def = band.definition();
            assert!(
                def.default_beat_hz >= def.min_hz && def.default_beat_hz <= def.max_hz,
                "{} default {} outside {}..{}",
                def.name,
                def.default_beat_hz,
                def.min_hz,
                def.max_hz
            );
        }
    }

    #[test]
    fn lookup_by_name_is_case_insensitive() {
        assert_eq!(Band::from_name("alpha"), Some(Band::Alpha));
        assert_eq!(Band::from_name("GAMMA"), Some(Band::Gamma));
        assert_eq!(Band::from_name("sigma"), None);
    }

    #[test]
    fn containing_picks_the_lower_band_on_shared_bounds() {
        // 12 Hz sits on the alpha/beta boundary; the catalog order wins.
        assert_eq!(Band::containing(12.0), Some(Band::Alpha));
        assert_eq!(Band::containing(10.0), Some(Band::Alpha));
        assert_eq!(Band::containing(45.0), Some(Band::Gamma));
        assert_eq!(Band::containing(0.1), None);
    }
}
