//! Per-field cancellable validation timers
//!
//! Each scheduled validation is a spawned task that sleeps for the debounce
//! delay and then posts a [`PendingValidation`] on the channel. Rescheduling a
//! field aborts its previous task and bumps the generation, so a message that
//! was already queued before the reschedule is recognised as stale.

use super::field::FieldKind;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Delay between the last keystroke and validation
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// A debounce timer that has fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingValidation {
    pub field: FieldKind,
    pub generation: u64,
}

/// Owns the outstanding debounce task of every field
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    tx: UnboundedSender<PendingValidation>,
    pending: HashMap<FieldKind, (u64, JoinHandle<()>)>,
    generation: u64,
}

impl Debouncer {
    pub fn new(delay: Duration, tx: UnboundedSender<PendingValidation>) -> Self {
        Self {
            delay,
            tx,
            pending: HashMap::new(),
            generation: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start (or restart) the timer for a field. Must be called inside a tokio runtime.
    pub fn schedule(&mut self, field: FieldKind) {
        let restarted = self.is_pending(field);
        self.cancel(field);
        self.generation += 1;
        let generation = self.generation;
        let delay = self.delay;
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the page was unloaded
            let _ = tx.send(PendingValidation { field, generation });
        });
        self.pending.insert(field, (generation, handle));
        tracing::trace!(field = field.id(), generation, restarted, "Validation scheduled");
    }

    /// Drop the pending timer for a field, if any
    pub fn cancel(&mut self, field: FieldKind) {
        if let Some((_, handle)) = self.pending.remove(&field) {
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, (_, handle)) in self.pending.drain() {
            handle.abort();
        }
    }

    pub fn is_pending(&self, field: FieldKind) -> bool {
        self.pending.contains_key(&field)
    }

    /// Claim a fired timer. Returns false for timers that were cancelled or
    /// superseded after they fired.
    pub fn claim(&mut self, fired: PendingValidation) -> bool {
        match self.pending.get(&fired.field) {
            Some((generation, _)) if *generation == fired.generation => {
                self.pending.remove(&fired.field);
                true
            }
            _ => false,
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
