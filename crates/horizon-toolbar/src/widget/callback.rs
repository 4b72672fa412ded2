//! Press handlers forwarded from props to view nodes.

use std::fmt;
use std::sync::Arc;

/// A cloneable, thread-safe press callback.
///
/// The toolbar never invokes handlers while rendering; it only copies them
/// into the nodes that the host turns into pressable controls.
#[derive(Clone)]
pub struct PressHandler {
    slot: Arc<dyn Fn() + Send + Sync>,
}

impl PressHandler {
    /// Wrap a closure.
    pub fn new<F>(slot: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            slot: Arc::new(slot),
        }
    }

    /// Invoke the handler.
    pub fn call(&self) {
        (self.slot)();
    }

    /// Check if two handlers share the same closure.
    pub fn ptr_eq(&self, other: &PressHandler) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<F> From<F> for PressHandler
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(slot: F) -> Self {
        Self::new(slot)
    }
}

impl PartialEq for PressHandler {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for PressHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PressHandler")
            .field("slot", &Arc::as_ptr(&self.slot))
            .finish()
    }
}
