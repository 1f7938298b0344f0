//! Scoped ownership of the desktop-wide pointer listeners
//!
//! While any drag or resize is in flight the host listens for pointer moves
//! and releases on the whole page, not just on the window. Those listeners
//! must go away exactly once, however the gesture ends: release, pointer
//! leaving the page, or the desktop being torn down mid-gesture.

/// Something that can attach and detach the move/up listener pair
pub trait ListenerHost {
    /// Handle needed to remove what `attach` installed
    type Registration;

    /// Install the listeners
    fn attach(&self) -> Self::Registration;

    /// Remove the listeners installed by `attach`
    fn detach(&self, registration: Self::Registration);
}

/// Listeners attached for as long as this value lives
pub struct ListenerScope<H: ListenerHost> {
    host: H,
    registration: Option<H::Registration>,
}

impl<H: ListenerHost> ListenerScope<H> {
    /// Attach the listeners through `host`
    pub fn acquire(host: H) -> Self {
        let registration = host.attach();
        Self {
            host,
            registration: Some(registration),
        }
    }

    /// Detach now instead of at drop
    pub fn release(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(registration) = self.registration.take() {
            self.host.detach(registration);
        }
    }
}

impl<H: ListenerHost> Drop for ListenerScope<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counts {
        attached: Cell<u32>,
        detached: Cell<u32>,
    }

    struct CountingHost(Rc<Counts>);

    impl ListenerHost for CountingHost {
        type Registration = u32;

        fn attach(&self) -> u32 {
            self.0.attached.set(self.0.attached.get() + 1);
            self.0.attached.get()
        }

        fn detach(&self, registration: u32) {
            assert_eq!(registration, self.0.attached.get());
            self.0.detached.set(self.0.detached.get() + 1);
        }
    }

    #[test]
    fn test_drop_detaches_once() {
        let counts = Rc::new(Counts::default());
        {
            let _scope = ListenerScope::acquire(CountingHost(counts.clone()));
            assert_eq!(counts.attached.get(), 1);
            assert_eq!(counts.detached.get(), 0);
        }
        assert_eq!(counts.detached.get(), 1);
    }

    #[test]
    fn test_release_then_drop_detaches_once() {
        let counts = Rc::new(Counts::default());
        let scope = ListenerScope::acquire(CountingHost(counts.clone()));
        scope.release();
        assert_eq!(counts.detached.get(), 1);
    }

    #[test]
    fn test_option_slot_pattern() {
        let counts = Rc::new(Counts::default());
        let mut slot: Option<ListenerScope<CountingHost>> = None;

        slot.get_or_insert_with(|| ListenerScope::acquire(CountingHost(counts.clone())));
        slot.get_or_insert_with(|| ListenerScope::acquire(CountingHost(counts.clone())));
        assert_eq!(counts.attached.get(), 1);

        slot = None;
        assert!(slot.is_none());
        assert_eq!(counts.detached.get(), 1);
    }
}
