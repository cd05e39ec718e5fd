use crate::models::countdown::CountdownSnapshot;
use std::sync::{Arc, Mutex};

/// Latest snapshot, written by the refresh thread and read by the UI thread
#[derive(Debug, Clone, Default)]
pub struct SharedSnapshot {
    inner: Arc<Mutex<CountdownSnapshot>>,
}

impl SharedSnapshot {
    pub fn new(snapshot: CountdownSnapshot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(snapshot)),
        }
    }

    pub fn store(&self, snapshot: CountdownSnapshot) {
        // A snapshot is a plain value, so a poisoned lock still holds valid data
        let mut guard = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = snapshot;
    }

    pub fn load(&self) -> CountdownSnapshot {
        *self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
