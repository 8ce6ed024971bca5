pub mod result_ext;

/// Hex-encode bytes for log lines, truncating long payloads
pub fn preview_bytes(bytes: &[u8], max: usize) -> String {
    if bytes.len() <= max {
        return hex::encode(bytes);
    }

    format!("{}.. ({} bytes)", hex::encode(&bytes[..max]), bytes.len())
}
