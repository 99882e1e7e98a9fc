//! Environment accessor abstraction.
//!
//! Configuration loading takes an [`Environment`] instead of calling
//! `std::env::var` directly, so tests can run against a fixed map without
//! touching process-global state.

use std::collections::HashMap;

/// Read access to named environment variables.
pub trait Environment {
    /// Value of the variable, or `None` when it is unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// A plain map works as a fixed environment for tests.
impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
