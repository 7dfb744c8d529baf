//! Common test utilities and helpers
//!
//! Shared fixtures for exercising the clear-on-drop capability from outside
//! the crate, plus one-time logger setup.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::sync::{Mutex, Once, OnceLock};

use autoclear::{clear_on_drop, Clear};
use flexi_logger::{Logger, LoggerHandle};

static INIT: Once = Once::new();

// Dropping the handle would shut the logger down
static LOGGER_HANDLE: OnceLock<Mutex<LoggerHandle>> = OnceLock::new();

/// Initialise logging once per test binary
///
/// Only call this once to avoid "logger already initialized" errors.
pub fn init_test_logging() {
    INIT.call_once(|| {
        if let Ok(handle) = Logger::try_with_str("trace").and_then(|logger| logger.start()) {
            let _ = LOGGER_HANDLE.set(Mutex::new(handle));
        }
    });
}

/// Shared set of live registrations, keyed by id
pub type Registry = Rc<RefCell<BTreeSet<u32>>>;

/// Ids in the order they were cleared
pub type ClearLog = Rc<RefCell<Vec<u32>>>;

/// A consumer type that removes itself from a registry when cleared
#[derive(Debug)]
pub struct Registration {
    pub id: u32,
    registry: Registry,
    clears: ClearLog,
}

impl Registration {
    pub fn register(id: u32, registry: &Registry, clears: &ClearLog) -> Self {
        registry.borrow_mut().insert(id);
        Self {
            id,
            registry: Rc::clone(registry),
            clears: Rc::clone(clears),
        }
    }
}

impl Clear for Registration {
    fn clear(&mut self) {
        self.registry.borrow_mut().remove(&self.id);
        self.clears.borrow_mut().push(self.id);
    }
}

clear_on_drop!(Registration);
