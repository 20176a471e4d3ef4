//! Page Controller - Lebenszyklus, Tick und Eingaben der Lichtseite
//!
//! Aufteilung:
//! - [`PageSession`]: geteilter Zustand einer geöffneten Seite (Licht-Zustand,
//!   Zeitplan, Licht-Signal-Bus). Wird beim Betreten erzeugt und beim
//!   Verlassen verworfen. Zeitplan- und Ansage-Task borgen ihn.
//! - [`PageController`]: besitzt die Kollaborateure und den UI-seitigen
//!   Zustand (zuletzt angewendeter Zustand, Entprellung, Klick-Erkennung).

use embassy_futures::select::{Either3, select3};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Instant};
use rgb::RGB8;

use crate::logic::{PageVisual, compute_rgb};
use crate::sequencer::{Schedule, ScheduleStep};
use crate::signal::SignalSet;
use crate::state::LightCell;
use crate::timeout::{ClickDetector, KEY_DEBOUNCE, Timeout};
use crate::traits::{AudioPlayer, LedError, Navigator, PageView, SmartLedWriter};
use crate::types::{ClickKind, InputEvent, InputOutcome, LightState};
use crate::voice::VoiceResponder;

/// Periode des Tick-Handlers
pub const TICK_INTERVAL: Duration = Duration::from_millis(20);

/// Fehler der Lichtseite
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    /// Seite ist bereits geöffnet; Initialisierung abgebrochen
    AlreadyActive,
    /// Seite ist nicht geöffnet
    NotActive,
    /// RGB-Ausgabe fehlgeschlagen
    Led(LedError),
}

impl From<LedError> for PageError {
    fn from(e: LedError) -> Self {
        PageError::Led(e)
    }
}

/// Geteilter Zustand einer geöffneten Seite
pub struct PageSession<M: RawMutex> {
    light: LightCell<M>,
    schedule: Schedule<M>,
    light_flags: SignalSet<M>,
}

impl<M: RawMutex> PageSession<M> {
    pub const fn new() -> Self {
        Self {
            light: LightCell::new(LightState::INITIAL),
            schedule: Schedule::new(),
            light_flags: SignalSet::new(),
        }
    }

    pub fn light(&self) -> &LightCell<M> {
        &self.light
    }

    pub fn schedule(&self) -> &Schedule<M> {
        &self.schedule
    }

    /// Licht-Signal-Bus: ein Flag pro Helligkeitsstufe
    pub fn light_flags(&self) -> &SignalSet<M> {
        &self.light_flags
    }

    /// Einziger Konsument des Licht-Signal-Bus
    pub fn voice(&self) -> VoiceResponder<'_, M> {
        VoiceResponder::new(&self.light_flags)
    }

    /// Lässt Zeitplan und Ansage neben `ui` laufen, bis `ui` endet
    ///
    /// Danach sind beide Schleifen verworfen und `audio` ist stumm, auch
    /// wenn eine Ansage mitten im Ton abgebrochen wurde.
    pub async fn run<A, F>(
        &self,
        audio: &mut A,
        on_step: impl FnMut(&ScheduleStep),
        ui: F,
    ) -> F::Output
    where
        A: AudioPlayer,
        F: Future,
    {
        let output = match select3(
            ui,
            self.schedule.run(&self.light, on_step),
            self.voice().run(audio),
        )
        .await
        {
            Either3::First(output) => output,
            Either3::Second(never) | Either3::Third(never) => match never {},
        };
        audio.silence();
        output
    }
}

impl<M: RawMutex> Default for PageSession<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Steuert die Lichtseite und wendet Zustandsänderungen an
///
/// # Trait-basierte Abstraktion
/// - `L`: RGB-Ausgabe (Hardware oder Mock)
/// - `V`: Darstellung
/// - `N`: Navigation
pub struct PageController<L, V, N> {
    led: L,
    view: V,
    navigator: N,
    active: bool,
    applied: Option<LightState>,
    key_debounce: Timeout,
    clicks: ClickDetector,
}

impl<L, V, N> PageController<L, V, N>
where
    L: SmartLedWriter,
    V: PageView,
    N: Navigator,
{
    pub fn new(led: L, view: V, navigator: N) -> Self {
        Self {
            led,
            view,
            navigator,
            active: false,
            applied: None,
            key_debounce: Timeout::new(KEY_DEBOUNCE, Instant::from_ticks(0)),
            clicks: ClickDetector::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Zuletzt angewendeter Zustand (`None` bis zum ersten Tick)
    pub fn applied(&self) -> Option<LightState> {
        self.applied
    }

    /// Betritt die Seite
    ///
    /// Setzt den angewendeten Zustand auf "nie angewendet", startet die
    /// Tasten-Entprellung bei `now` und den Zeitplan im Zustand "läuft".
    pub fn enter<M: RawMutex>(
        &mut self,
        session: &PageSession<M>,
        now: Instant,
    ) -> Result<(), PageError> {
        if self.active {
            return Err(PageError::AlreadyActive);
        }

        self.active = true;
        self.applied = None;
        self.key_debounce.reset(now);
        self.clicks.reset();
        session.schedule().start();
        self.view
            .render(&PageVisual::for_state(session.light().get()));
        Ok(())
    }

    /// Verlässt die Seite und schaltet die LED aus
    pub fn exit(&mut self) -> Result<(), PageError> {
        if !self.active {
            return Err(PageError::NotActive);
        }

        self.active = false;
        self.view.set_editing(false);
        self.led.write(RGB8::new(0, 0, 0))?;
        Ok(())
    }

    /// Periodischer Tick: wendet den Zustand nur bei Änderung an
    ///
    /// Reihenfolge bei Änderung: Stufen-Flag signalisieren, RGB schreiben,
    /// angewendeten Zustand merken, Darstellung aktualisieren. Gibt den neu
    /// angewendeten Zustand zurück, `None` wenn nichts zu tun war.
    pub fn tick<M: RawMutex>(
        &mut self,
        session: &PageSession<M>,
    ) -> Result<Option<LightState>, PageError> {
        if !self.active {
            return Ok(None);
        }

        let state = session.light().get();
        if self.applied == Some(state) {
            return Ok(None);
        }

        session.light_flags().signal(state.brightness.flag());
        let written = self.led.write(compute_rgb(state));
        self.applied = Some(state);
        self.view.render(&PageVisual::for_state(state));

        written?;
        Ok(Some(state))
    }

    /// Verarbeitet eine Eingabe-Geste
    pub fn handle_input<M: RawMutex>(
        &mut self,
        session: &PageSession<M>,
        event: InputEvent,
        now: Instant,
    ) -> InputOutcome {
        if !self.active {
            return InputOutcome::Ignored;
        }

        match event {
            InputEvent::Focused => {
                self.view.set_editing(true);
                InputOutcome::Handled
            }
            InputEvent::KeyLeft | InputEvent::KeyRight => {
                if !self.key_debounce.is_elapsed(now) {
                    return InputOutcome::Ignored;
                }
                session.light().update(|state| {
                    let brightness = if event == InputEvent::KeyRight {
                        state.brightness.brighter()
                    } else {
                        state.brightness.dimmer()
                    };
                    state.with_brightness(brightness)
                });
                InputOutcome::Handled
            }
            InputEvent::Clicked => {
                match self.clicks.classify(now) {
                    ClickKind::Double => {
                        session.schedule().toggle();
                    }
                    ClickKind::Single => {
                        session
                            .light()
                            .update(|state| state.with_color_temp(state.color_temp.toggled()));
                    }
                }
                InputOutcome::Handled
            }
            InputEvent::LongPressed => {
                self.navigator.goto_parent_menu();
                match self.exit() {
                    Err(PageError::Led(e)) => InputOutcome::ExitFailed(e),
                    _ => InputOutcome::Exit,
                }
            }
        }
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    pub fn led_mut(&mut self) -> &mut L {
        &mut self.led
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorTemp, Tier};
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[derive(Default)]
    struct Led {
        colors: std::vec::Vec<RGB8>,
        broken: bool,
    }

    impl SmartLedWriter for Led {
        fn write(&mut self, color: RGB8) -> Result<(), LedError> {
            if self.broken {
                return Err(LedError::WriteFailed);
            }
            self.colors.push(color);
            Ok(())
        }
    }

    #[derive(Default)]
    struct View {
        renders: usize,
        editing: bool,
    }

    impl PageView for View {
        fn set_editing(&mut self, editing: bool) {
            self.editing = editing;
        }

        fn render(&mut self, _visual: &PageVisual) {
            self.renders += 1;
        }
    }

    #[derive(Default)]
    struct Nav {
        calls: usize,
    }

    impl Navigator for Nav {
        fn goto_parent_menu(&mut self) {
            self.calls += 1;
        }
    }

    fn controller() -> PageController<Led, View, Nav> {
        PageController::new(Led::default(), View::default(), Nav::default())
    }

    #[test]
    fn test_enter_twice_is_rejected() {
        let session = PageSession::<NoopRawMutex>::new();
        let mut page = controller();
        assert_eq!(page.enter(&session, Instant::from_millis(0)), Ok(()));
        assert_eq!(
            page.enter(&session, Instant::from_millis(10)),
            Err(PageError::AlreadyActive)
        );
    }

    #[test]
    fn test_tick_applies_only_on_change() {
        let session = PageSession::<NoopRawMutex>::new();
        let mut page = controller();
        page.enter(&session, Instant::from_millis(0)).unwrap();

        assert_eq!(page.tick(&session), Ok(Some(LightState::INITIAL)));
        assert_eq!(page.tick(&session), Ok(None));
        assert_eq!(page.led().colors.len(), 1);

        session
            .light()
            .set(LightState::new(Tier::Full, ColorTemp::Cool));
        assert_eq!(
            page.tick(&session),
            Ok(Some(LightState::new(Tier::Full, ColorTemp::Cool)))
        );
        assert_eq!(page.led().colors.last(), Some(&RGB8::new(255, 255, 255)));
    }

    #[test]
    fn test_exit_turns_led_off() {
        let session = PageSession::<NoopRawMutex>::new();
        let mut page = controller();
        assert_eq!(page.exit(), Err(PageError::NotActive));
        page.enter(&session, Instant::from_millis(0)).unwrap();
        page.tick(&session).unwrap();
        assert_eq!(page.exit(), Ok(()));
        assert_eq!(page.led().colors.last(), Some(&RGB8::new(0, 0, 0)));
        assert!(!page.is_active());
    }

    #[test]
    fn test_long_press_navigates_and_exits() {
        let session = PageSession::<NoopRawMutex>::new();
        let mut page = controller();
        page.enter(&session, Instant::from_millis(0)).unwrap();
        let outcome = page.handle_input(&session, InputEvent::LongPressed, Instant::from_millis(5));
        assert_eq!(outcome, InputOutcome::Exit);
        assert_eq!(page.navigator().calls, 1);
        assert!(!page.is_active());
    }

    #[test]
    fn test_long_press_reports_led_error() {
        let session = PageSession::<NoopRawMutex>::new();
        let mut page = controller();
        page.enter(&session, Instant::from_millis(0)).unwrap();
        page.led_mut().broken = true;

        let outcome = page.handle_input(&session, InputEvent::LongPressed, Instant::from_millis(5));
        assert_eq!(outcome, InputOutcome::ExitFailed(LedError::WriteFailed));
        assert_eq!(page.navigator().calls, 1);
        assert!(!page.is_active());
    }

    #[test]
    fn test_input_ignored_when_inactive() {
        let session = PageSession::<NoopRawMutex>::new();
        let mut page = controller();
        let outcome = page.handle_input(&session, InputEvent::KeyRight, Instant::from_secs(5));
        assert_eq!(outcome, InputOutcome::Ignored);
        assert_eq!(session.light().get(), LightState::INITIAL);
    }
}
