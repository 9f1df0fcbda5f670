use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::data::models::{DuplicateReport, VocabEntry};
use crate::features::known::KnownStore;

/// Shared by every handler. The vocabulary never changes after startup; the
/// known store is the only mutable part.
#[derive(Clone)]
pub struct AppState {
    pub vocab: Arc<Vec<VocabEntry>>,
    pub duplicates: Arc<DuplicateReport>,
    known: Arc<Mutex<KnownStore>>,
}

impl AppState {
    pub fn new(vocab: Vec<VocabEntry>, known: KnownStore, duplicates: DuplicateReport) -> Self {
        Self {
            vocab: Arc::new(vocab),
            duplicates: Arc::new(duplicates),
            known: Arc::new(Mutex::new(known)),
        }
    }

    pub fn known(&self) -> MutexGuard<'_, KnownStore> {
        self.known.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
