//! Core Types für die Zwei-Farben-Lichtsteuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::signal::Flags;
use crate::traits::LedError;

/// Eine der fünf festen Helligkeitsstufen (in Prozent)
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tier {
    Off = 0,
    Quarter = 25,
    Half = 50,
    ThreeQuarters = 75,
    Full = 100,
}

impl Tier {
    /// Alle Stufen in aufsteigender Reihenfolge
    pub const ALL: [Tier; 5] = [
        Tier::Off,
        Tier::Quarter,
        Tier::Half,
        Tier::ThreeQuarters,
        Tier::Full,
    ];

    /// Schrittweite einer manuellen Änderung in Prozent
    pub const STEP: u8 = 25;

    /// Maske über alle fünf Helligkeits-Flags im Licht-Signal-Bus
    pub const ALL_FLAGS: Flags = 0b1_1111;

    pub const fn percent(self) -> u8 {
        self as u8
    }

    /// Position in [`Tier::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Tier::Off => 0,
            Tier::Quarter => 1,
            Tier::Half => 2,
            Tier::ThreeQuarters => 3,
            Tier::Full => 4,
        }
    }

    /// Liefert die Stufe zu einem Prozentwert, `None` für Zwischenwerte
    pub const fn from_percent(percent: u8) -> Option<Self> {
        match percent {
            0 => Some(Tier::Off),
            25 => Some(Tier::Quarter),
            50 => Some(Tier::Half),
            75 => Some(Tier::ThreeQuarters),
            100 => Some(Tier::Full),
            _ => None,
        }
    }

    /// Eine Stufe heller, bleibt bei 100 stehen
    pub const fn brighter(self) -> Self {
        match self {
            Tier::Off => Tier::Quarter,
            Tier::Quarter => Tier::Half,
            Tier::Half => Tier::ThreeQuarters,
            Tier::ThreeQuarters | Tier::Full => Tier::Full,
        }
    }

    /// Eine Stufe dunkler, bleibt bei 0 stehen
    pub const fn dimmer(self) -> Self {
        match self {
            Tier::Off | Tier::Quarter => Tier::Off,
            Tier::Half => Tier::Quarter,
            Tier::ThreeQuarters => Tier::Half,
            Tier::Full => Tier::ThreeQuarters,
        }
    }

    /// Flag dieser Stufe im Licht-Signal-Bus
    pub const fn flag(self) -> Flags {
        1 << self.index()
    }
}

/// Farbtemperatur der Lampe
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTemp {
    Warm,
    Cool,
}

impl ColorTemp {
    /// Warm ↔ Kalt
    pub const fn toggled(self) -> Self {
        match self {
            ColorTemp::Warm => ColorTemp::Cool,
            ColorTemp::Cool => ColorTemp::Warm,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ColorTemp::Warm => "warm",
            ColorTemp::Cool => "cool",
        }
    }
}

/// Unveränderlicher Eintrag der automatischen Zeitplan-Tabelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightSetting {
    pub brightness: Tier,
    pub color_temp: ColorTemp,
}

impl LightSetting {
    pub const fn new(brightness: Tier, color_temp: ColorTemp) -> Self {
        Self {
            brightness,
            color_temp,
        }
    }
}

/// Gewünschter Licht-Zustand der Seite
///
/// Wird von Tasten, Klicks und dem Zeitplan verändert. Der Controller
/// vergleicht ihn bei jedem Tick mit dem zuletzt angewendeten Zustand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightState {
    pub brightness: Tier,
    pub color_temp: ColorTemp,
}

impl LightState {
    /// Startzustand beim Betreten der Seite: 50 %, warm
    pub const INITIAL: Self = Self {
        brightness: Tier::Half,
        color_temp: ColorTemp::Warm,
    };

    pub const fn new(brightness: Tier, color_temp: ColorTemp) -> Self {
        Self {
            brightness,
            color_temp,
        }
    }

    pub const fn with_brightness(self, brightness: Tier) -> Self {
        Self { brightness, ..self }
    }

    pub const fn with_color_temp(self, color_temp: ColorTemp) -> Self {
        Self { color_temp, ..self }
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl From<LightSetting> for LightState {
    fn from(setting: LightSetting) -> Self {
        Self::new(setting.brightness, setting.color_temp)
    }
}

/// Sprachansage je Helligkeitsstufe
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Brightness0,
    Brightness25,
    Brightness50,
    Brightness75,
    Brightness100,
}

impl AudioCue {
    pub const fn from_tier(tier: Tier) -> Self {
        match tier {
            Tier::Off => AudioCue::Brightness0,
            Tier::Quarter => AudioCue::Brightness25,
            Tier::Half => AudioCue::Brightness50,
            Tier::ThreeQuarters => AudioCue::Brightness75,
            Tier::Full => AudioCue::Brightness100,
        }
    }

    pub const fn tier(self) -> Tier {
        match self {
            AudioCue::Brightness0 => Tier::Off,
            AudioCue::Brightness25 => Tier::Quarter,
            AudioCue::Brightness50 => Tier::Half,
            AudioCue::Brightness75 => Tier::ThreeQuarters,
            AudioCue::Brightness100 => Tier::Full,
        }
    }
}

/// Eingabe-Gesten, die an die Seite geliefert werden
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Seite hat den Eingabe-Fokus erhalten
    Focused,
    /// Taste links: dunkler
    KeyLeft,
    /// Taste rechts: heller
    KeyRight,
    /// Klick (losgelassen); Doppelklick wird über Zeitstempel erkannt
    Clicked,
    /// Langer Druck: zurück ins Menü
    LongPressed,
}

/// Ergebnis der Klick-Klassifizierung
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    Single,
    Double,
}

/// Ergebnis einer verarbeiteten Eingabe
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Eingabe wurde angewendet
    Handled,
    /// Eingabe wurde verworfen (Entprellung oder Seite nicht aktiv)
    Ignored,
    /// Seite wurde verlassen
    Exit,
    /// Seite wurde verlassen, die LED konnte aber nicht ausgeschaltet werden
    ExitFailed(LedError),
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LightState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LightState {{ brightness: {}%, color: {} }}",
            self.brightness.percent(),
            self.color_temp.as_str()
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LightSetting {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LightSetting {{ brightness: {}%, color: {} }}",
            self.brightness.percent(),
            self.color_temp.as_str()
        )
    }
}
