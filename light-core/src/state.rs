//! Geteilter Licht-Zustand
//!
//! Tick-Handler, Eingaben und Zeitplan greifen aus verschiedenen Tasks auf
//! denselben [`LightState`] zu. Jeder Zugriff läuft über einen Mutex, damit
//! auch ein präemptiver Scheduler nie einen halb geschriebenen Zustand sieht.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::types::LightState;

pub struct LightCell<M: RawMutex> {
    inner: Mutex<M, Cell<LightState>>,
}

impl<M: RawMutex> LightCell<M> {
    pub const fn new(state: LightState) -> Self {
        Self {
            inner: Mutex::new(Cell::new(state)),
        }
    }

    /// Konsistente Kopie des aktuellen Zustands
    pub fn get(&self) -> LightState {
        self.inner.lock(Cell::get)
    }

    pub fn set(&self, state: LightState) {
        self.inner.lock(|cell| cell.set(state));
    }

    /// Liest, verändert und schreibt den Zustand in einem Schritt
    ///
    /// Gibt den neuen Zustand zurück.
    pub fn update(&self, f: impl FnOnce(LightState) -> LightState) -> LightState {
        self.inner.lock(|cell| {
            let next = f(cell.get());
            cell.set(next);
            next
        })
    }
}

impl<M: RawMutex> Default for LightCell<M> {
    fn default() -> Self {
        Self::new(LightState::INITIAL)
    }
}
