#![doc(test(attr(deny(warnings))))]

//! Betrothal Core offers the ledger, aggregation, and commentary primitives
//! that power a bride-price / dowry comparison front end.

pub mod commentary;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Betrothal Core tracing initialized.");
    });
}
