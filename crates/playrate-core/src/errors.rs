//! Failures surfaced by the speed engine.

use thiserror::Error;

/// Why a rate could not be applied to the page.
///
/// The authoritative value is always updated before application is
/// attempted, so seeing an error here does not mean the state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeedError {
    /// The document holds no media element eligible to receive a rate.
    #[error("no media element to apply the rate to")]
    NoMediaTarget,
}
