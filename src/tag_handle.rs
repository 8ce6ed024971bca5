//! Opaque reference to the tag currently in range

use std::sync::atomic::{AtomicU64, Ordering};

static DISCOVERY_CYCLE: AtomicU64 = AtomicU64::new(0);

/// A tag the host has just discovered
///
/// Only valid for the discovery cycle it was created in. Has no equality or hashing, the host
/// resolves `token` back to its own tag object when the transport is called.
#[derive(Debug, uniffi::Object)]
pub struct TagHandle {
    token: u64,
    tech_list: Vec<String>,
    cycle: u64,
}

#[uniffi::export]
impl TagHandle {
    #[uniffi::constructor]
    pub fn new(token: u64, tech_list: Vec<String>) -> Self {
        let cycle = DISCOVERY_CYCLE.fetch_add(1, Ordering::Relaxed) + 1;
        Self { token, tech_list, cycle }
    }

    /// Host-chosen value identifying its native tag object
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Technologies the host reported for the tag, informational only
    pub fn tech_list(&self) -> Vec<String> {
        self.tech_list.clone()
    }

    /// Sequence number of the discovery that produced this handle, used in log lines
    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}

impl std::fmt::Display for TagHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tag#{} (token {})", self.cycle, self.token)
    }
}
