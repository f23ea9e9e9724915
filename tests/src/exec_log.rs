use std::sync::{Arc, Mutex};
use tablet::Value;

use crate::logging_driver::State;

/// One statement that reached the connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Exec {
    pub sql: String,
    pub params: Vec<Value>,
}

/// A wrapper around the statement log that provides a clean API for tests
pub struct ExecLog {
    state: Arc<Mutex<State>>,
}

impl ExecLog {
    pub(crate) fn new(state: Arc<Mutex<State>>) -> Self {
        Self { state }
    }

    /// Get the number of logged statements
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().log.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.state.lock().unwrap().log.is_empty()
    }

    /// SQL text of every logged statement, in execution order
    pub fn sql(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .log
            .iter()
            .map(|exec| exec.sql.clone())
            .collect()
    }

    /// How many times the generated key was requested
    pub fn last_insert_id_calls(&self) -> usize {
        self.state.lock().unwrap().last_insert_id_calls
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.state.lock().unwrap().log.clear();
    }

    /// Remove and return the first statement from the log
    pub fn pop(&mut self) -> Option<Exec> {
        let mut state = self.state.lock().unwrap();
        if state.log.is_empty() {
            None
        } else {
            Some(state.log.remove(0))
        }
    }
}
