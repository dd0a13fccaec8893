use futures::future::{AbortHandle, AbortRegistration, Abortable};
use std::cell::RefCell;
use std::future::Future;

/// The single side effect a mounted view is allowed to run.
///
/// The task can be armed once. Cancelling, before or after arming, stops it at
/// its next suspension point and the rest of the task never runs.
pub struct MountTask {
    handle: AbortHandle,
    registration: RefCell<Option<AbortRegistration>>,
}

impl MountTask {
    pub fn new() -> Self {
        let (handle, registration) = AbortHandle::new_pair();
        Self {
            handle,
            registration: RefCell::new(Some(registration)),
        }
    }

    /// Wrap `task` in the mount's abort registration. `None` once already armed.
    pub fn arm<F: Future>(&self, task: F) -> Option<Abortable<F>> {
        self.registration
            .borrow_mut()
            .take()
            .map(|registration| Abortable::new(task, registration))
    }

    /// Arm `task` and run it on the browser event loop. Returns whether it was started.
    pub fn spawn<F>(&self, task: F) -> bool
    where
        F: Future<Output = ()> + 'static,
    {
        match self.arm(task) {
            Some(task) => {
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = task.await;
                });
                true
            }
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.registration.borrow().is_none()
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Default for MountTask {
    fn default() -> Self {
        Self::new()
    }
}
