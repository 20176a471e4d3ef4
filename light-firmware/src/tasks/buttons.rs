// Button Task - Tasten-Eingaben für die Lichtseite
//
// Drei Taster (active-low, interner Pull-Up):
//   - LEFT   → KeyLeft  (dunkler)
//   - RIGHT  → KeyRight (heller)
//   - SELECT → Clicked beim Loslassen, LongPressed nach LONG_PRESS_MS
//
// Die Entprellung hier filtert nur Kontaktprellen. Das 200 ms Tasten-
// Intervall und die Doppelklick-Erkennung macht der PageController.

use defmt::{Format, info};
use embassy_time::{Duration, Timer, with_timeout};
use esp_hal::gpio::Input;
use light_core::InputEvent;

use crate::InputSender;
use crate::config::{BUTTON_DEBOUNCE_MS, LONG_PRESS_MS};

/// Physische Taste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum ButtonKind {
    Left,
    Right,
    Select,
}

/// Button Logic - wartet auf Tastendruck und schickt das Ereignis
///
/// # Ablauf
/// 1. Fallende Flanke (gedrückt), entprellen, erneut prüfen
/// 2. Links/Rechts: Ereignis senden, auf Loslassen warten
/// 3. Auswahl: bis `LONG_PRESS_MS` auf Loslassen warten → Klick,
///    sonst langer Druck (dann auf Loslassen warten)
pub async fn button_logic(mut pin: Input<'static>, kind: ButtonKind, sender: InputSender) -> ! {
    let debounce = Duration::from_millis(BUTTON_DEBOUNCE_MS);

    loop {
        pin.wait_for_falling_edge().await;
        Timer::after(debounce).await;
        if !pin.is_low() {
            continue;
        }

        let event = match kind {
            ButtonKind::Left => InputEvent::KeyLeft,
            ButtonKind::Right => InputEvent::KeyRight,
            ButtonKind::Select => {
                match with_timeout(Duration::from_millis(LONG_PRESS_MS), pin.wait_for_high()).await
                {
                    Ok(()) => InputEvent::Clicked,
                    Err(_) => InputEvent::LongPressed,
                }
            }
        };

        info!("Button {}: {}", kind, event);
        sender.send(event).await;

        // Auf Loslassen warten, damit ein gehaltener Taster nicht wiederholt
        pin.wait_for_high().await;
        Timer::after(debounce).await;
    }
}

/// Button Task - eine Instanz pro Taste
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(pin: Input<'static>, kind: ButtonKind, sender: InputSender) {
    button_logic(pin, kind, sender).await;
}
