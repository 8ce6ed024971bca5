pub mod config;
pub mod discovery;
pub mod manager;
pub mod ndef;
pub mod presentation;
pub mod tag_handle;
pub mod transport;

pub(crate) mod logging;
pub(crate) mod timestamp;

uniffi::setup_scaffolding!();
