//! Infrastructure wiring: building application state from configuration.

pub mod state;
