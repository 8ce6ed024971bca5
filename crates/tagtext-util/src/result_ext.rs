use std::fmt::Display;

pub trait ResultExt<T, InitialError> {
    /// Map an error to a string-based error variant
    ///
    /// Converts `Result<T, InitialError>` to `Result<T, FinalError>` where FinalError has a
    /// variant that takes a String, using the Display implementation of InitialError.
    ///
    /// # Example
    /// ```rust
    /// use tagtext_util::result_ext::ResultExt;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// enum ReadError {
    ///     #[error("not utf-8: {0}")]
    ///     NotUtf8(String),
    /// }
    ///
    /// fn read(bytes: &[u8]) -> Result<&str, ReadError> {
    ///     let text = std::str::from_utf8(bytes).map_err_str(ReadError::NotUtf8)?;
    ///     Ok(text)
    /// }
    ///
    /// assert!(read(&[0xff]).is_err());
    /// ```
    fn map_err_str<FinalError, F>(self, f: F) -> Result<T, FinalError>
    where
        InitialError: Display,
        F: FnOnce(String) -> FinalError;
}

impl<Type, InitialError> ResultExt<Type, InitialError> for Result<Type, InitialError> {
    fn map_err_str<FinalError, F>(self, f: F) -> Result<Type, FinalError>
    where
        InitialError: Display,
        F: FnOnce(String) -> FinalError,
    {
        self.map_err(|e| f(e.to_string()))
    }
}
