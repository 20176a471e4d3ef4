//! Zeit-Hilfen für die Eingabeverarbeitung
//!
//! Beide Typen bekommen den aktuellen Zeitpunkt übergeben statt
//! `Instant::now()` selbst aufzurufen, damit sie auf dem Host testbar sind.

use embassy_time::{Duration, Instant};

use crate::types::ClickKind;

/// Mindestabstand zwischen zwei angenommenen Tasten-Eingaben
pub const KEY_DEBOUNCE: Duration = Duration::from_millis(200);

/// Maximaler Abstand zweier Klicks für einen Doppelklick
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);

/// Entprell-Primitive: lässt höchstens ein Ereignis pro Intervall durch
#[derive(Debug, Clone, Copy)]
pub struct Timeout {
    interval: Duration,
    base: Instant,
}

impl Timeout {
    /// Startet den Timeout bei `now`; das erste Ereignis wird erst nach
    /// Ablauf des Intervalls angenommen
    pub const fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            base: now,
        }
    }

    /// Prüft ob das Intervall abgelaufen ist und startet es dann neu
    pub fn is_elapsed(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.base) >= self.interval {
            self.base = now;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self, now: Instant) {
        self.base = now;
    }
}

/// Unterscheidet Einzel- und Doppelklick anhand des vorherigen Klicks
///
/// Gemessen wird immer vom letzten Klick aus, kein gleitendes Fenster:
/// drei schnelle Klicks ergeben Einzel, Doppel, Doppel.
#[derive(Debug, Clone, Copy)]
pub struct ClickDetector {
    window: Duration,
    last_click: Option<Instant>,
}

impl ClickDetector {
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_click: None,
        }
    }

    pub fn classify(&mut self, now: Instant) -> ClickKind {
        let kind = match self.last_click {
            Some(last) if now.saturating_duration_since(last) <= self.window => ClickKind::Double,
            _ => ClickKind::Single,
        };
        self.last_click = Some(now);
        kind
    }

    /// Vergisst den letzten Klick (z. B. beim Betreten der Seite)
    pub fn reset(&mut self) {
        self.last_click = None;
    }
}

impl Default for ClickDetector {
    fn default() -> Self {
        Self::new(DOUBLE_CLICK_WINDOW)
    }
}
