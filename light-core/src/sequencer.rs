//! Automatischer Zeitplan (Schedule Sequencer)
//!
//! Läuft zyklisch durch [`SCHEDULE`]. Die Wartezeit nach jedem Schritt hängt
//! vom *neuen* Index ab, nicht vom gerade angewendeten Eintrag:
//!
//! | neuer Index | Wartezeit |
//! |-------------|-----------|
//! | 1           | 10 s      |
//! | 2, 3, 4     | 15 s      |
//! | 0           | 20 s      |
//!
//! Ein Doppelklick pausiert bzw. setzt fort; beim Fortsetzen geht es an der
//! aktuellen Position weiter, nicht bei Index 0.

use core::cell::Cell;
use core::convert::Infallible;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Timer};

use crate::signal::{SCHEDULE_PAUSE, SCHEDULE_RESUME, SignalSet};
use crate::state::LightCell;
use crate::types::{ColorTemp, LightSetting, Tier};

/// Feste Reihenfolge der automatischen Licht-Einstellungen
pub const SCHEDULE: [LightSetting; 5] = [
    LightSetting::new(Tier::Half, ColorTemp::Warm),
    LightSetting::new(Tier::Full, ColorTemp::Cool),
    LightSetting::new(Tier::ThreeQuarters, ColorTemp::Cool),
    LightSetting::new(Tier::Quarter, ColorTemp::Warm),
    LightSetting::new(Tier::Off, ColorTemp::Cool),
];

/// Wartezeit, nachdem der Cursor auf `index` weitergerückt ist
pub const fn step_delay(index: usize) -> Duration {
    match index {
        1 => Duration::from_secs(10),
        2..=4 => Duration::from_secs(15),
        _ => Duration::from_secs(20),
    }
}

/// Position im Zeitplan und ob er gerade läuft
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleCursor {
    pub index: usize,
    pub active: bool,
}

impl ScheduleCursor {
    pub const START: Self = Self {
        index: 0,
        active: true,
    };
}

/// Ein ausgeführter Zeitplan-Schritt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleStep {
    /// Index des angewendeten Eintrags
    pub applied_index: usize,
    pub setting: LightSetting,
    /// Index, auf den der Cursor jetzt zeigt
    pub next_index: usize,
    /// Wartezeit bis zum nächsten Schritt
    pub delay: Duration,
}

/// Zeitplan-Zustand einer Seite: Cursor plus Pause/Fortsetzen-Signale
pub struct Schedule<M: RawMutex> {
    cursor: Mutex<M, Cell<ScheduleCursor>>,
    flags: SignalSet<M>,
}

impl<M: RawMutex> Schedule<M> {
    pub const fn new() -> Self {
        Self {
            cursor: Mutex::new(Cell::new(ScheduleCursor::START)),
            flags: SignalSet::new(),
        }
    }

    pub fn cursor(&self) -> ScheduleCursor {
        self.cursor.lock(Cell::get)
    }

    pub fn is_active(&self) -> bool {
        self.cursor().active
    }

    /// Startet den Zeitplan (Zustand "läuft") und weckt den Zeitplan-Task
    pub fn start(&self) {
        self.cursor.lock(|cell| {
            cell.set(ScheduleCursor {
                active: true,
                ..cell.get()
            })
        });
        self.flags.signal(SCHEDULE_RESUME);
    }

    /// Wechselt zwischen "läuft" und "pausiert"
    ///
    /// Gibt zurück, ob der Zeitplan danach läuft.
    pub fn toggle(&self) -> bool {
        let active = self.cursor.lock(|cell| {
            let mut cursor = cell.get();
            cursor.active = !cursor.active;
            cell.set(cursor);
            cursor.active
        });
        self.flags
            .signal(if active { SCHEDULE_RESUME } else { SCHEDULE_PAUSE });
        active
    }

    /// Wendet den Eintrag am Cursor an und rückt mit Wraparound weiter
    pub fn advance(&self, light: &LightCell<M>) -> ScheduleStep {
        let (applied_index, next_index) = self.cursor.lock(|cell| {
            let mut cursor = cell.get();
            let applied = cursor.index % SCHEDULE.len();
            cursor.index = (applied + 1) % SCHEDULE.len();
            cell.set(cursor);
            (applied, cursor.index)
        });

        let setting = SCHEDULE[applied_index];
        light.set(setting.into());

        ScheduleStep {
            applied_index,
            setting,
            next_index,
            delay: step_delay(next_index),
        }
    }

    /// Blockiert, bis der Zeitplan (wieder) läuft
    ///
    /// Ein veraltetes Fortsetzen-Signal aus einem kurzen Pause/Weiter-Wechsel
    /// wird verbraucht und ignoriert, solange der Cursor pausiert ist.
    pub async fn wait_resume(&self) {
        loop {
            self.flags.wait_any(SCHEDULE_RESUME).await;
            self.flags.clear(SCHEDULE_PAUSE);
            if self.is_active() {
                return;
            }
        }
    }

    /// Nächster Schritt: wartet während einer Pause, dann [`Self::advance`]
    ///
    /// Der Aufrufer schläft anschließend `step.delay` lang.
    pub async fn next_step(&self, light: &LightCell<M>) -> ScheduleStep {
        if !self.is_active() {
            self.wait_resume().await;
        }
        self.advance(light)
    }

    /// Zeitplan-Schleife: anwenden, weiterrücken, Wartezeit des neuen Index
    ///
    /// Läuft bis der Future verworfen wird. Eine Pause greift erst nach
    /// Ablauf der laufenden Wartezeit. `on_step` sieht jeden Schritt vor
    /// dem Schlafen.
    pub async fn run(
        &self,
        light: &LightCell<M>,
        mut on_step: impl FnMut(&ScheduleStep),
    ) -> Infallible {
        loop {
            let step = self.next_step(light).await;
            on_step(&step);
            Timer::after(step.delay).await;
        }
    }

    pub fn flags(&self) -> &SignalSet<M> {
        &self.flags
    }
}

impl<M: RawMutex> Default for Schedule<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LightState;
    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

    type TestSchedule = Schedule<CriticalSectionRawMutex>;
    type TestLight = LightCell<CriticalSectionRawMutex>;

    #[test]
    fn test_step_delay_table() {
        assert_eq!(step_delay(1), Duration::from_millis(10_000));
        assert_eq!(step_delay(2), Duration::from_millis(15_000));
        assert_eq!(step_delay(3), Duration::from_millis(15_000));
        assert_eq!(step_delay(4), Duration::from_millis(15_000));
        assert_eq!(step_delay(0), Duration::from_millis(20_000));
    }

    #[test]
    fn test_advance_cycles_with_period_five() {
        let schedule = TestSchedule::new();
        let light = TestLight::default();

        for round in 0..2 {
            for (index, setting) in SCHEDULE.iter().enumerate() {
                let step = schedule.advance(&light);
                assert_eq!(step.applied_index, index, "round {round}");
                assert_eq!(light.get(), LightState::from(*setting));
                assert_eq!(step.next_index, (index + 1) % 5);
                assert_eq!(step.delay, step_delay(step.next_index));
            }
        }
    }

    #[test]
    fn test_toggle_signals_pause_and_resume() {
        let schedule = TestSchedule::new();
        assert!(!schedule.toggle());
        assert_eq!(schedule.flags().pending(), SCHEDULE_PAUSE);
        assert!(schedule.toggle());
        assert_eq!(
            schedule.flags().pending(),
            SCHEDULE_PAUSE | SCHEDULE_RESUME
        );
    }

    #[test]
    fn test_pause_keeps_cursor_position() {
        let schedule = TestSchedule::new();
        let light = TestLight::default();
        schedule.start();
        schedule.advance(&light);
        schedule.advance(&light);

        schedule.toggle();
        assert!(!schedule.is_active());
        assert_eq!(schedule.cursor().index, 2);

        let (step, ()) = block_on(join(schedule.next_step(&light), async {
            schedule.toggle();
        }));
        assert_eq!(step.applied_index, 2);
        assert_eq!(light.get(), LightState::from(SCHEDULE[2]));
    }

    #[test]
    fn test_stale_resume_does_not_end_pause() {
        let schedule = TestSchedule::new();
        schedule.start();
        schedule.toggle();
        assert!(!schedule.is_active());
        assert_eq!(
            schedule.flags().pending(),
            SCHEDULE_RESUME | SCHEDULE_PAUSE
        );

        let ((), ()) = block_on(join(schedule.wait_resume(), async {
            // Der Wartende hat das alte Signal bereits verworfen
            assert_eq!(schedule.flags().pending(), 0);
            schedule.toggle();
        }));
        assert!(schedule.is_active());
    }

    #[test]
    fn test_next_step_runs_immediately_when_active() {
        let schedule = TestSchedule::new();
        let light = TestLight::default();
        schedule.start();
        let step = block_on(schedule.next_step(&light));
        assert_eq!(step.applied_index, 0);
        assert_eq!(step.delay, Duration::from_secs(10));
    }
}
