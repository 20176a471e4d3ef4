//! Light Core - Plattformunabhängige Logik der Zwei-Farben-Lichtseite
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Pure Functions und die Task-übergreifende
//! Koordination (Signal-Bus, Zeitplan, Sprachansage).

#![cfg_attr(not(test), no_std)]

pub mod logic;
pub mod page;
pub mod sequencer;
pub mod signal;
pub mod state;
pub mod timeout;
pub mod traits;
pub mod types;
pub mod voice;

// Re-exports für einfachen Zugriff
pub use logic::{Backdrop, Label, PageVisual, compute_rgb, cue_for};
pub use page::{PageController, PageError, PageSession, TICK_INTERVAL};
pub use rgb::RGB8;
pub use sequencer::{SCHEDULE, Schedule, ScheduleCursor, ScheduleStep, step_delay};
pub use signal::{Flags, SCHEDULE_PAUSE, SCHEDULE_RESUME, SignalSet};
pub use state::LightCell;
pub use timeout::{ClickDetector, DOUBLE_CLICK_WINDOW, KEY_DEBOUNCE, Timeout};
pub use traits::{AudioPlayer, LedError, Navigator, PageView, SmartLedWriter};
pub use types::{
    AudioCue, ClickKind, ColorTemp, InputEvent, InputOutcome, LightSetting, LightState, Tier,
};
pub use voice::VoiceResponder;
