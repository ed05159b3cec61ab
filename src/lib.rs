#![doc(test(attr(deny(warnings))))]

//! Career Wizard drives a multi-step career survey: it records answers on a
//! form surface, snapshots them to local storage after every change, gates
//! each step on its required answers, and submits the finished set to a
//! suggestion service whose ranked answer it renders.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod form;
pub mod storage;
pub mod submit;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing once per process.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("career_wizard tracing initialized");
    });
}
