//! Task Scope
//!
//! Spawns local futures that can all be aborted at once when the owning
//! component unmounts. Aborting drops the future, which also drops any
//! in-flight request.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::future::{abortable, AbortHandle};
use leptos::task::spawn_local;

#[derive(Default)]
struct Registry {
    next_key: u64,
    handles: HashMap<u64, AbortHandle>,
}

impl Registry {
    fn register(&mut self, handle: AbortHandle) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        self.handles.insert(key, handle);
        key
    }
}

/// Set of abortable tasks
#[derive(Clone, Default)]
pub struct TaskScope {
    registry: Rc<RefCell<Registry>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `fut` on the local executor, tracked until it completes
    pub fn spawn(&self, fut: impl Future<Output = ()> + 'static) {
        let (task, handle) = abortable(fut);
        let key = self.registry.borrow_mut().register(handle);
        let registry = Rc::clone(&self.registry);
        spawn_local(async move {
            if task.await.is_err() {
                log::debug!("task {} aborted", key);
            }
            registry.borrow_mut().handles.remove(&key);
        });
    }

    /// Abort every task still running
    pub fn abort_all(&self) {
        let mut registry = self.registry.borrow_mut();
        let pending = registry.handles.len();
        for (_, handle) in registry.handles.drain() {
            handle.abort();
        }
        if pending > 0 {
            log::debug!("aborted {} pending tasks", pending);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::AbortHandle;

    #[test]
    fn test_register_assigns_distinct_keys() {
        let mut registry = Registry::default();
        let (first, _) = AbortHandle::new_pair();
        let (second, _) = AbortHandle::new_pair();

        assert_eq!(registry.register(first), 0);
        assert_eq!(registry.register(second), 1);
        assert_eq!(registry.handles.len(), 2);
    }

    #[test]
    fn test_abort_all_drains_handles() {
        let scope = TaskScope::new();
        let (handle, _registration) = AbortHandle::new_pair();
        let watched = handle.clone();
        scope.registry.borrow_mut().register(handle);

        scope.abort_all();

        assert!(watched.is_aborted());
        assert!(scope.registry.borrow().handles.is_empty());
    }

    #[test]
    fn test_clones_share_one_registry() {
        let scope = TaskScope::new();
        let on_unmount = scope.clone();
        let (handle, _registration) = AbortHandle::new_pair();
        let watched = handle.clone();
        scope.registry.borrow_mut().register(handle);

        on_unmount.abort_all();

        assert!(watched.is_aborted());
        assert!(Rc::ptr_eq(&scope.registry, &on_unmount.registry));
    }
}
