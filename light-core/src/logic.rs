//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use core::fmt;

use rgb::RGB8;

use crate::signal::Flags;
use crate::types::{AudioCue, ColorTemp, LightState, Tier};

/// Reihenfolge der Stufen-Grafiken (statisch, damit Teil-Slices `'static` sind)
static TIER_ORDER: [Tier; 5] = Tier::ALL;

/// Maximalwert des Blau-Kanals bei warmer Farbtemperatur
pub const WARM_BLUE_MAX: u8 = 0x33;

/// Maximalwert der übrigen Kanäle
pub const CHANNEL_MAX: u8 = 0xFF;

/// Berechnet die RGB-Ausgabe für einen Licht-Zustand
///
/// Kalt: alle Kanäle linear gegen 0xFF skaliert. Warm: Blau wird gegen
/// 0x33 skaliert. Bei Helligkeit 0 ist die LED immer schwarz.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use light_core::{ColorTemp, LightState, Tier, compute_rgb};
/// let warm = LightState::new(Tier::Full, ColorTemp::Warm);
/// assert_eq!(compute_rgb(warm), RGB8 { r: 255, g: 255, b: 0x33 });
/// ```
pub fn compute_rgb(state: LightState) -> RGB8 {
    let level = u16::from(state.brightness.percent());
    let scale = |max: u8| (u16::from(max) * level / 100) as u8;

    match state.color_temp {
        ColorTemp::Cool => RGB8::new(
            scale(CHANNEL_MAX),
            scale(CHANNEL_MAX),
            scale(CHANNEL_MAX),
        ),
        ColorTemp::Warm => RGB8::new(
            scale(CHANNEL_MAX),
            scale(CHANNEL_MAX),
            scale(WARM_BLUE_MAX),
        ),
    }
}

/// Wählt die Sprachansage für eine Menge gleichzeitig gesetzter Flags
///
/// Prüft die Stufen in fester Reihenfolge 0 < 25 < 50 < 75 < 100; nur die
/// niedrigste gesetzte Stufe wird angesagt.
pub fn cue_for(flags: Flags) -> Option<AudioCue> {
    Tier::ALL
        .into_iter()
        .find(|tier| flags & tier.flag() != 0)
        .map(AudioCue::from_tier)
}

/// Hintergrundbild der Seite
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    /// Lampe aus
    Off,
    /// Lampe an, Hintergrund passend zur Farbtemperatur
    Lit(ColorTemp),
}

/// Prozent-Beschriftung der Seite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Percent(u8),
    /// Platzhalter "--" bei Helligkeit 0
    Dash,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Percent(percent) => write!(f, "{percent}%"),
            Label::Dash => f.write_str("--"),
        }
    }
}

/// Was die Seite für einen Licht-Zustand anzeigen soll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageVisual {
    pub backdrop: Backdrop,
    /// Sichtbare Stufen-Grafiken, kumulativ von 25 aufwärts
    pub lit_tiers: &'static [Tier],
    /// Farbvariante der Stufen-Grafiken
    pub color_temp: ColorTemp,
    pub label: Label,
}

impl PageVisual {
    pub fn for_state(state: LightState) -> Self {
        match state.brightness {
            Tier::Off => Self {
                backdrop: Backdrop::Off,
                lit_tiers: &[],
                color_temp: state.color_temp,
                label: Label::Dash,
            },
            tier => Self {
                backdrop: Backdrop::Lit(state.color_temp),
                lit_tiers: &TIER_ORDER[1..=tier.index()],
                color_temp: state.color_temp,
                label: Label::Percent(tier.percent()),
            },
        }
    }

    /// Die "Aus"-Grafik ist nur bei Helligkeit 0 sichtbar
    pub fn off_marker_visible(&self) -> bool {
        self.backdrop == Backdrop::Off
    }

    pub fn is_lit(&self, tier: Tier) -> bool {
        self.lit_tiers.contains(&tier)
    }
}
