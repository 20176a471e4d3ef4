// SmartLED Writer - RGB-Ausgabe der Lichtseite über das RMT Peripheral
//
// Der Trait liegt in light-core, damit die Seitenlogik ohne Hardware
// (mit Mock-Implementierungen) getestet werden kann.

use defmt::warn;
use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use light_core::{LedError, SmartLedWriter};
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

// Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
pub const LED_BUFFER_SIZE: usize = 25;

/// Real Hardware LED Writer
///
/// Nutzt ESP32 RMT Peripheral um die WS2812 LED anzusteuern.
///
/// Hinweis: Der Buffer muss länger leben als der Writer, daher wird er im
/// Task erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtLedWriter<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
}

impl<'a> RmtLedWriter<'a> {
    /// Erstellt einen neuen RmtLedWriter
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(1) Macro)
    ///
    /// # Panics
    /// Wenn das RMT Peripheral nicht mit der Frequenz konfiguriert werden kann
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
    ) -> Self {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .expect("RMT peripheral configuration failed");

        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Self { led }
    }
}

impl<'a> SmartLedWriter for RmtLedWriter<'a> {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        self.led.write([color].into_iter()).map_err(|_| {
            warn!("RMT transmit failed for {=u8},{=u8},{=u8}", color.r, color.g, color.b);
            LedError::WriteFailed
        })
    }
}
