//! The form-side half of the pipeline: a pure submission state machine, an
//! HTTP client for the relay, and an async driver that executes effects.

pub mod driver;
pub mod form;
pub mod relay;
