use super::backend::KvBackend;
use crate::error::{CanvasError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory slots for testing.
///
/// Clones share the same slots, so a second store built from a clone sees
/// what the first one persisted (a "restart" against the same storage).
/// Uses `RefCell` since codecanvas is single-threaded.
#[derive(Clone, Default)]
pub struct MemBackend {
    slots: Rc<RefCell<HashMap<String, String>>>,
    simulate_write_error: Rc<RefCell<bool>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to plant raw slot content, bypassing the stores.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KvBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CanvasError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CanvasError::Store("Simulated write error".to_string()));
        }
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_slots() {
        let a = MemBackend::new();
        let b = a.clone();
        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn simulated_error_blocks_writes() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        assert!(backend.set("k", "v").is_err());
        assert_eq!(backend.get("k").unwrap(), None);
    }
}
