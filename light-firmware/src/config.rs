// Projekt-Konfiguration: Konstanten
//
// Die Pin-Zuordnung steht in bin/main.rs (esp-hal Peripherals sind Typen,
// keine Nummern). Protokoll-Konstanten der Lichtseite (Zeitplan, Tick,
// Entprellung, Doppelklick-Fenster) liegen in light-core.

// ============================================================================
// LED Konfiguration
// ============================================================================

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Tasten (active-low, interner Pull-Up)
// ============================================================================

/// Hardware-Entprellung der Taster in Millisekunden
pub const BUTTON_DEBOUNCE_MS: u64 = 20;

/// Ab dieser Haltedauer gilt die Auswahl-Taste als lang gedrückt
pub const LONG_PRESS_MS: u64 = 800;

/// Kapazität des Eingabe-Channels (Tasten → Lichtseite)
pub const INPUT_QUEUE_DEPTH: usize = 4;

// ============================================================================
// Buzzer (Ansage der Helligkeitsstufe)
// ============================================================================

/// Dauer eines kurzen Pieptons (eine Viertelstufe)
pub const BEEP_SHORT_MS: u64 = 80;

/// Dauer des langen Pieptons für "aus"
pub const BEEP_LONG_MS: u64 = 400;

/// Pause zwischen zwei Pieptönen
pub const BEEP_GAP_MS: u64 = 120;
