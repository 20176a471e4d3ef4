//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die externen Kollaborateure der Lichtseite
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::logic::PageVisual;
use crate::types::AudioCue;

/// Fehler-Typ für LED-Operationen
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Trait für SmartLED Hardware-Zugriff (RGB-Ausgabe)
///
/// Abstrahiert den Zugriff auf RGB LEDs (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter: Send {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Wiedergabe von Sprachansagen
///
/// Fire-and-forget: der Aufrufer wertet kein Ergebnis aus.
#[allow(async_fn_in_trait)]
pub trait AudioPlayer {
    async fn play(&mut self, cue: AudioCue);

    /// Bricht eine laufende Wiedergabe ab und schaltet die Ausgabe stumm
    ///
    /// Wird aufgerufen, nachdem ein `play`-Future mitten in der Ausgabe
    /// verworfen wurde.
    fn silence(&mut self);
}

/// Darstellung der Seite (Bild- und Beschriftungswechsel)
pub trait PageView {
    /// Eingabe-Modus der Seite: Drehgeber/Tasten wirken auf die Seite
    fn set_editing(&mut self, editing: bool);

    fn render(&mut self, visual: &PageVisual);
}

/// Navigation zwischen Seiten
pub trait Navigator {
    fn goto_parent_menu(&mut self);
}
