//! Sprachansage der Helligkeitsstufe
//!
//! Wartet auf die Helligkeits-Flags im Licht-Signal-Bus und liefert die
//! passende Ansage. Die Wiedergabe selbst übernimmt ein [`AudioPlayer`].
//!
//! [`AudioPlayer`]: crate::traits::AudioPlayer

use core::convert::Infallible;

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::logic::cue_for;
use crate::signal::SignalSet;
use crate::traits::AudioPlayer;
use crate::types::{AudioCue, Tier};

/// Konsument des Licht-Signal-Bus (genau einer pro Seite)
pub struct VoiceResponder<'a, M: RawMutex> {
    flags: &'a SignalSet<M>,
}

impl<'a, M: RawMutex> VoiceResponder<'a, M> {
    pub const fn new(flags: &'a SignalSet<M>) -> Self {
        Self { flags }
    }

    /// Wartet ohne Timeout auf die nächste Helligkeitsänderung
    ///
    /// Sind mehrere Stufen gleichzeitig gesetzt, wird nur die niedrigste
    /// angesagt; die übrigen Flags sind damit verbraucht.
    pub async fn next_cue(&self) -> AudioCue {
        loop {
            let flags = self.flags.wait_any(Tier::ALL_FLAGS).await;
            if let Some(cue) = cue_for(flags) {
                return cue;
            }
        }
    }

    /// Ansage-Schleife: jede neue Stufe abspielen, bis der Future verworfen wird
    pub async fn run<A: AudioPlayer>(&self, audio: &mut A) -> Infallible {
        loop {
            let cue = self.next_cue().await;
            audio.play(cue).await;
        }
    }

    /// Wie [`Self::next_cue`], aber ohne zu blockieren
    pub fn try_next_cue(&self) -> Option<AudioCue> {
        self.flags.try_take(Tier::ALL_FLAGS).and_then(cue_for)
    }
}
