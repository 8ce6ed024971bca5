//! Generates host bindings for tagtext, Kotlin when any argument mentions it, Swift otherwise

fn main() {
    let wants_kotlin = std::env::args().any(|arg| arg.to_lowercase().contains("kotlin"));

    if wants_kotlin {
        uniffi::uniffi_bindgen_main();
    } else {
        uniffi::uniffi_bindgen_swift();
    }
}
