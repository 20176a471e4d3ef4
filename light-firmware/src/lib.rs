// Library-Root: Hardware-Anbindung und Tasks der Zwei-Farben-Lichtseite
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von light-core
pub use light_core::{InputEvent, LedError, SmartLedWriter};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::INPUT_QUEUE_DEPTH;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Sender<'static, CriticalSectionRawMutex, InputEvent, 4>
// Nutze:  InputSender

/// Channel für Tasten-Ereignisse (Button Tasks → Light Page Task)
pub type InputChannel = Channel<CriticalSectionRawMutex, InputEvent, INPUT_QUEUE_DEPTH>;

/// Sender für Tasten-Ereignisse (ein Sender pro Button Task)
pub type InputSender = Sender<'static, CriticalSectionRawMutex, InputEvent, INPUT_QUEUE_DEPTH>;

/// Receiver für Tasten-Ereignisse (Light Page Task empfängt)
pub type InputReceiver = Receiver<'static, CriticalSectionRawMutex, InputEvent, INPUT_QUEUE_DEPTH>;
