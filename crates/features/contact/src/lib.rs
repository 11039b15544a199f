//! Contact feature slice.
//!
//! Validates the contact form, drives its submission state machine and simulates a
//! delivery with a fixed delay. Messages are never sent nor persisted.

mod error;
pub mod form;
mod service;

pub use crate::error::{ContactError, ContactErrorExt};
pub use crate::form::{ContactForm, validate};
pub use crate::service::{Contact, ContactInner};

use folio_domain::config::ContactConfig;
use folio_kernel::domain::registry::InitializedSlice;
use std::time::Duration;

/// Upper bound for the simulated delay; it must fit in the shutdown drain.
pub const MAX_SUBMIT_DELAY: Duration = Duration::from_secs(10);

/// Initialize the contact feature.
///
/// # Errors
/// Returns [`ContactError::Config`] when the configured delay exceeds [`MAX_SUBMIT_DELAY`].
pub fn init(config: &ContactConfig) -> Result<InitializedSlice, ContactError> {
    let delay = config.submit_delay();
    if delay > MAX_SUBMIT_DELAY {
        return Err(ContactError::Config {
            message: format!(
                "submit_delay_ms = {} exceeds {} ms",
                config.submit_delay_ms,
                MAX_SUBMIT_DELAY.as_millis()
            )
            .into(),
            context: None,
        });
    }

    tracing::info!(delay_ms = config.submit_delay_ms, "Contact slice initialized");

    Ok(InitializedSlice::new(Contact::new(ContactInner::new(delay))))
}
