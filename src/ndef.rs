// Re-export the tagtext_ndef crate
pub use tagtext_ndef::*;
