//! Signal-Bus: Sätze benannter Flags für Task-übergreifende Benachrichtigung
//!
//! Jeder [`SignalSet`] kann von beliebig vielen Stellen gesetzt werden,
//! wird aber von genau einem wartenden Task konsumiert. Beim Konsumieren
//! werden die getroffenen Flags atomar gelöscht (flankengetriggert).

use core::cell::RefCell;
use core::future::poll_fn;
use core::task::Poll;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::waitqueue::WakerRegistration;

/// Bitmaske von Flags innerhalb eines [`SignalSet`]
pub type Flags = u32;

/// Zeitplan fortsetzen
pub const SCHEDULE_RESUME: Flags = 1 << 0;

/// Zeitplan pausieren
pub const SCHEDULE_PAUSE: Flags = 1 << 1;

struct State {
    pending: Flags,
    waker: WakerRegistration,
}

/// Satz unabhängiger boolescher Flags mit einem wartenden Konsumenten
pub struct SignalSet<M: RawMutex> {
    state: Mutex<M, RefCell<State>>,
}

impl<M: RawMutex> SignalSet<M> {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(State {
                pending: 0,
                waker: WakerRegistration::new(),
            })),
        }
    }

    /// Markiert `flags` als anstehend und weckt den Konsumenten
    ///
    /// Idempotent: ein bereits gesetztes Flag bleibt einfach gesetzt.
    pub fn signal(&self, flags: Flags) {
        self.state.lock(|state| {
            let mut state = state.borrow_mut();
            state.pending |= flags;
            state.waker.wake();
        });
    }

    /// Entnimmt alle anstehenden Flags aus `mask`, ohne zu blockieren
    pub fn try_take(&self, mask: Flags) -> Option<Flags> {
        self.state.lock(|state| {
            let mut state = state.borrow_mut();
            let matched = state.pending & mask;
            if matched == 0 {
                None
            } else {
                state.pending &= !matched;
                Some(matched)
            }
        })
    }

    /// Wartet ohne Timeout, bis mindestens ein Flag aus `mask` ansteht
    ///
    /// Löscht alle getroffenen Flags und gibt sie zurück.
    pub async fn wait_any(&self, mask: Flags) -> Flags {
        poll_fn(|cx| {
            self.state.lock(|state| {
                let mut state = state.borrow_mut();
                let matched = state.pending & mask;
                if matched == 0 {
                    state.waker.register(cx.waker());
                    Poll::Pending
                } else {
                    state.pending &= !matched;
                    Poll::Ready(matched)
                }
            })
        })
        .await
    }

    /// Aktuell anstehende Flags (ohne sie zu löschen)
    pub fn pending(&self) -> Flags {
        self.state.lock(|state| state.borrow().pending)
    }

    /// Löscht `mask`, ohne den Konsumenten zu wecken
    pub fn clear(&self, mask: Flags) {
        self.state.lock(|state| state.borrow_mut().pending &= !mask);
    }
}

impl<M: RawMutex> Default for SignalSet<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

    type TestSet = SignalSet<CriticalSectionRawMutex>;

    #[test]
    fn test_signal_is_idempotent() {
        let set = TestSet::new();
        set.signal(0b01);
        set.signal(0b01);
        assert_eq!(set.pending(), 0b01);
        assert_eq!(set.try_take(0b01), Some(0b01));
        assert_eq!(set.try_take(0b01), None);
    }

    #[test]
    fn test_try_take_only_clears_matched_flags() {
        let set = TestSet::new();
        set.signal(0b101);
        assert_eq!(set.try_take(0b001), Some(0b001));
        assert_eq!(set.pending(), 0b100);
    }

    #[test]
    fn test_wait_any_returns_immediately_when_pending() {
        let set = TestSet::new();
        set.signal(0b110);
        let matched = block_on(set.wait_any(0b011));
        assert_eq!(matched, 0b010);
        assert_eq!(set.pending(), 0b100);
    }

    #[test]
    fn test_wait_any_wakes_on_signal() {
        let set = TestSet::new();
        let (matched, ()) = block_on(join(set.wait_any(0b10), async {
            set.signal(0b01);
            set.signal(0b10);
        }));
        assert_eq!(matched, 0b10);
        assert_eq!(set.pending(), 0b01);
    }

    #[test]
    fn test_clear() {
        let set = TestSet::new();
        set.signal(0b11);
        set.clear(0b10);
        assert_eq!(set.pending(), 0b01);
    }
}
