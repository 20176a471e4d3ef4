// Buzzer Audio Player - Ansage der Helligkeitsstufe als Piep-Muster
//
// Das Board hat keinen Lautsprecher für Sprachausgabe. Jede Stufe wird
// stattdessen als Muster auf einem aktiven Buzzer ausgegeben:
//   0%   → ein langer Piepton
//   N×25% → N kurze Pieptöne

use defmt::info;
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Output;
use light_core::{AudioCue, AudioPlayer, Tier};

use crate::config::{BEEP_GAP_MS, BEEP_LONG_MS, BEEP_SHORT_MS};

pub struct BuzzerAudioPlayer<'a> {
    pin: Output<'a>,
}

impl<'a> BuzzerAudioPlayer<'a> {
    pub fn new(mut pin: Output<'a>) -> Self {
        pin.set_low();
        Self { pin }
    }

    async fn beep(&mut self, duration: Duration) {
        self.pin.set_high();
        Timer::after(duration).await;
        self.pin.set_low();
    }
}

/// Anzahl und Länge der Pieptöne für eine Ansage
pub const fn beep_pattern(cue: AudioCue) -> (usize, u64) {
    match cue.tier() {
        Tier::Off => (1, BEEP_LONG_MS),
        tier => (tier.index(), BEEP_SHORT_MS),
    }
}

impl<'a> AudioPlayer for BuzzerAudioPlayer<'a> {
    async fn play(&mut self, cue: AudioCue) {
        let (count, length_ms) = beep_pattern(cue);
        info!("Audio: playing {} ({} beeps)", cue, count);

        for n in 0..count {
            if n > 0 {
                Timer::after(Duration::from_millis(BEEP_GAP_MS)).await;
            }
            self.beep(Duration::from_millis(length_ms)).await;
        }
    }

    fn silence(&mut self) {
        self.pin.set_low();
    }
}
