//! Scoped listener detachment.

use core::ops::{Deref, DerefMut};

use crate::host::{ListenerHandle, TextHost};

/// Host access with the given listeners detached.
///
/// Creating the guard removes every listener from the host; dropping it
/// reattaches them in the same order. Writes made through the guard
/// therefore never reach those listeners.
///
/// The guard borrows the host mutably, and the controller holds `&mut self`
/// for as long as it lives, so no edit can be delivered mid-write.
pub(crate) struct DetachedListeners<'a, H: TextHost> {
    host: &'a mut H,
    listeners: &'a [ListenerHandle],
}

impl<'a, H: TextHost> DetachedListeners<'a, H> {
    pub(crate) fn new(host: &'a mut H, listeners: &'a [ListenerHandle]) -> Self {
        for &handle in listeners {
            host.remove_change_listener(handle);
        }
        Self { host, listeners }
    }
}

impl<H: TextHost> Deref for DetachedListeners<'_, H> {
    type Target = H;

    fn deref(&self) -> &Self::Target {
        self.host
    }
}

impl<H: TextHost> DerefMut for DetachedListeners<'_, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.host
    }
}

impl<H: TextHost> Drop for DetachedListeners<'_, H> {
    fn drop(&mut self) {
        for &handle in self.listeners {
            self.host.add_change_listener(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryHost;

    #[test]
    fn test_writes_inside_guard_are_not_observed() {
        let mut host = MemoryHost::new();
        let handle = ListenerHandle::next();
        host.add_change_listener(handle);
        let listeners = [handle];

        {
            let mut guarded = DetachedListeners::new(&mut host, &listeners);
            guarded.set_text("$1.00");
            assert!(guarded.listeners().is_empty());
        }

        assert_eq!(host.listeners(), &[handle]);
        assert_eq!(host.pending_changes(), 0);

        host.set_text("$2.00");
        assert_eq!(host.take_changes_for(handle), vec!["$2.00".to_owned()]);
    }

    #[test]
    fn test_reattaches_in_original_order() {
        let mut host = MemoryHost::new();
        let first = ListenerHandle::next();
        let second = ListenerHandle::next();
        host.add_change_listener(first);
        host.add_change_listener(second);
        let listeners = [first, second];

        drop(DetachedListeners::new(&mut host, &listeners));

        assert_eq!(host.listeners(), &[first, second]);
    }
}
