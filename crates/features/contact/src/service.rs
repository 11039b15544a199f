use crate::error::ContactError;
use crate::form::ContactForm;
use chrono::Utc;
use folio_domain::contact::{ContactDraft, Receipt};
use folio_kernel::safe_nanoid;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info};

/// Contact feature state.
#[folio_derive::folio_slice]
pub struct Contact {
    /// Simulated delivery latency.
    pub delay: Duration,
    submissions: Arc<AtomicU64>,
}

impl ContactInner {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay, submissions: Arc::new(AtomicU64::new(0)) }
    }
}

impl Contact {
    /// Runs one submission through `form`: validate, wait, confirm.
    ///
    /// Nothing is delivered or stored; the receipt only proves the form went through.
    /// The wait is a timer, so worker threads stay free.
    ///
    /// # Errors
    /// * [`ContactError::Validation`] with the field errors; `form` keeps the draft.
    /// * [`ContactError::InvalidTransition`] when `form` is not editable.
    pub async fn submit(
        &self,
        form: &mut ContactForm,
        draft: ContactDraft,
    ) -> Result<Receipt, ContactError> {
        form.begin(draft)?;
        debug!(delay = ?self.delay, "Contact submission in flight");

        tokio::time::sleep(self.delay).await;

        let receipt = Receipt { id: safe_nanoid!(), submitted_at: Utc::now().timestamp() };
        form.finish(receipt.clone())?;

        let total = self.submissions.fetch_add(1, Ordering::Relaxed) + 1;
        info!(receipt = %receipt.id, total, "Contact message accepted (simulated, not delivered)");

        Ok(receipt)
    }

    /// Submissions confirmed since start-up.
    #[must_use]
    pub fn submissions(&self) -> u64 {
        self.submissions.load(Ordering::Relaxed)
    }
}
