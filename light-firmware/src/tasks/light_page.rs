// Light Page Task - Lichtseite mit Zeitplan und Ansage
//
// Pro geöffneter Seite laufen drei logische Tasks nebeneinander:
//   - UI-Schleife: 20 ms Tick (Zustand anwenden) + Tasten-Ereignisse
//   - Zeitplan:    nächster Eintrag, dann Wartezeit des neuen Index
//   - Ansage:      wartet auf Helligkeits-Flags, spielt die Ansage
//
// Zeitplan und Ansage laufen in PageSession::run. Beim Verlassen (langer
// Druck) endet die UI-Schleife; die beiden anderen Futures werden verworfen,
// der Buzzer wird stumm geschaltet. Danach wird auch die PageSession
// verworfen.

use defmt::{error, info, warn};
use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use embassy_time::{Instant, Ticker};
use esp_hal::gpio::Output;
use esp_hal_smartled::smart_led_buffer;
use light_core::{
    AudioPlayer, InputEvent, InputOutcome, Navigator, PageController, PageSession, ScheduleStep,
    SmartLedWriter, TICK_INTERVAL,
};

use crate::InputReceiver;
use crate::config::RMT_CLOCK_MHZ;
use crate::hal::{BuzzerAudioPlayer, LogPageView, MenuNavigator, RmtLedWriter};

type LightPage<L> = PageController<L, LogPageView, MenuNavigator>;

/// Light Page Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// # Trait-basierte Abstraktion
/// - `L: SmartLedWriter`: RGB-Ausgabe (RmtLedWriter oder Mock)
/// - `A: AudioPlayer`: Ansage (BuzzerAudioPlayer oder Mock)
///
/// # Ablauf
/// 1. Seite betreten (neue PageSession, Zeitplan läuft)
/// 2. UI-, Zeitplan- und Ansage-Schleife bis zum langen Druck
/// 3. Im Menü auf einen Klick warten, dann wieder bei 1.
pub async fn light_page_logic<L, A>(led: L, mut audio: A, inputs: InputReceiver)
where
    L: SmartLedWriter,
    A: AudioPlayer,
{
    let mut page = PageController::new(led, LogPageView::new(), MenuNavigator::new());

    loop {
        let session = PageSession::<CriticalSectionRawMutex>::new();

        match page.enter(&session, Instant::now()) {
            Ok(()) => {
                info!("Light page entered");
                page.handle_input(&session, InputEvent::Focused, Instant::now());

                session
                    .run(&mut audio, log_step, ui_loop(&mut page, &session, inputs))
                    .await;

                info!("Light page left");
            }
            Err(e) => {
                error!("Light page init failed: {}", e);
                page.navigator_mut().goto_parent_menu();
            }
        }
        drop(session);

        wait_in_menu(&mut page, inputs).await;
    }
}

/// Tick und Eingaben; endet, wenn die Seite verlassen wird
async fn ui_loop<L, M>(page: &mut LightPage<L>, session: &PageSession<M>, inputs: InputReceiver)
where
    L: SmartLedWriter,
    M: RawMutex,
{
    let mut ticker = Ticker::every(TICK_INTERVAL);

    loop {
        match select(ticker.next(), inputs.receive()).await {
            Either::First(()) => match page.tick(session) {
                Ok(Some(state)) => info!("Applied {}", state),
                Ok(None) => {}
                Err(e) => error!("Failed to apply light state: {}", e),
            },
            Either::Second(event) => match page.handle_input(session, event, Instant::now()) {
                InputOutcome::Exit => return,
                InputOutcome::ExitFailed(e) => {
                    error!("Failed to turn LED off on exit: {}", e);
                    return;
                }
                InputOutcome::Ignored => info!("Input ignored: {}", event),
                InputOutcome::Handled => {}
            },
        }
    }
}

fn log_step(step: &ScheduleStep) {
    info!(
        "Schedule: entry {} = {}, next {} in {} ms",
        step.applied_index,
        step.setting,
        step.next_index,
        step.delay.as_millis()
    );
}

/// Übergeordnetes Menü: ein Klick öffnet die Lichtseite wieder
async fn wait_in_menu<L: SmartLedWriter>(page: &mut LightPage<L>, inputs: InputReceiver) {
    while page.navigator().in_menu() {
        match inputs.receive().await {
            InputEvent::Clicked => page.navigator_mut().open_page(),
            event => warn!("Menu: input {} has no action", event),
        }
    }
}

/// Light Page Task - Embassy Task für die Lichtseite
///
/// Übernimmt die Hardware-Initialisierung und ruft dann die testbare
/// `light_page_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `buzzer`: Ausgang des Buzzers
/// - `inputs`: Channel Receiver für Tasten-Ereignisse
#[embassy_executor::task]
pub async fn light_page_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    buzzer: Output<'static>,
    inputs: InputReceiver,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    let mut rmt_buffer = smart_led_buffer!(1);

    let led = RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);
    let audio = BuzzerAudioPlayer::new(buzzer);

    light_page_logic(led, audio, inputs).await;
}
