use std::sync::Mutex;

use ras_core::errors::{RasError, RasResult, StorageError};
use ras_core::traits::ICollectionSlot;

/// Process-local slot for tests and throwaway sessions.
#[derive(Debug)]
pub struct MemorySlot {
    name: String,
    payload: Mutex<Option<String>>,
}

impl MemorySlot {
    /// An empty slot.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            payload: Mutex::new(None),
        }
    }

    /// A slot that already holds `payload`, as if written by an earlier session.
    pub fn with_payload(name: &str, payload: &str) -> Self {
        Self {
            name: name.to_string(),
            payload: Mutex::new(Some(payload.to_string())),
        }
    }

    /// Current payload, ignoring lock poisoning.
    pub fn payload(&self) -> Option<String> {
        match self.payload.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn unavailable(&self) -> RasError {
        RasError::StorageError(StorageError::SlotUnavailable {
            slot: self.name.clone(),
            reason: "lock poisoned".to_string(),
        })
    }
}

impl ICollectionSlot for MemorySlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> RasResult<Option<String>> {
        let guard = self.payload.lock().map_err(|_| self.unavailable())?;
        Ok(guard.clone())
    }

    fn write(&self, payload: &str) -> RasResult<()> {
        let mut guard = self.payload.lock().map_err(|_| self.unavailable())?;
        *guard = Some(payload.to_string());
        Ok(())
    }
}
