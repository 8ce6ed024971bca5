#[macro_export]
macro_rules! impl_default_for {
    ($name:ident) => {
        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// Build a `const` status-byte mask from a list of bit positions
#[macro_export]
macro_rules! bit_mask {
    ($($bit:expr),+ $(,)?) => {
        0u8 $(| (1u8 << $bit))+
    };
}
