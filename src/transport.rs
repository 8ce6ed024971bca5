use std::sync::Arc;

use tracing::{debug, warn};

use crate::tag_handle::TagHandle;

/// The host's link to the physical tag
///
/// Every call is blocking, timeouts are owned by the host
#[uniffi::export(callback_interface)]
pub trait TagTransport: Send + Sync + std::fmt::Debug + 'static {
    /// Open an I/O session with the tag
    fn connect(&self, handle: Arc<TagHandle>) -> Result<(), TransportError>;

    /// Whether the connected tag accepts writes
    fn is_writable(&self, handle: Arc<TagHandle>) -> Result<bool, TransportError>;

    /// Write a text record payload as the tag's only record
    fn write(&self, handle: Arc<TagHandle>, payload: Vec<u8>) -> Result<(), TransportError>;

    /// Release the I/O session, called once for every successful connect
    fn close(&self, handle: Arc<TagHandle>);
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum TransportError {
    #[error("unable to connect: {0}")]
    ConnectFailed(String),

    #[error("unable to write: {0}")]
    WriteFailed(String),
}

impl From<uniffi::UnexpectedUniFFICallbackError> for TransportError {
    fn from(error: uniffi::UnexpectedUniFFICallbackError) -> Self {
        warn!("unexpected transport callback error: {}", error.reason);
        Self::WriteFailed(error.reason)
    }
}

/// A connected tag, closed when dropped
#[derive(Debug)]
pub struct TagConnection<'a> {
    transport: &'a dyn TagTransport,
    handle: Arc<TagHandle>,
}

impl<'a> TagConnection<'a> {
    pub fn open(
        transport: &'a dyn TagTransport,
        handle: Arc<TagHandle>,
    ) -> Result<Self, TransportError> {
        transport.connect(handle.clone())?;
        debug!("connected to {handle}");

        Ok(Self { transport, handle })
    }

    pub fn is_writable(&self) -> Result<bool, TransportError> {
        self.transport.is_writable(self.handle.clone())
    }

    pub fn write(&self, payload: Vec<u8>) -> Result<(), TransportError> {
        self.transport.write(self.handle.clone(), payload)
    }
}

impl Drop for TagConnection<'_> {
    fn drop(&mut self) {
        debug!("closing connection to {}", self.handle);
        self.transport.close(self.handle.clone());
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    #[derive(Debug, Default)]
    struct CountingTransport {
        fail_connect: bool,
        calls: Mutex<Vec<&'static str>>,
    }

    impl TagTransport for CountingTransport {
        fn connect(&self, _handle: Arc<TagHandle>) -> Result<(), TransportError> {
            self.calls.lock().push("connect");
            if self.fail_connect {
                return Err(TransportError::ConnectFailed("out of range".to_string()));
            }
            Ok(())
        }

        fn is_writable(&self, _handle: Arc<TagHandle>) -> Result<bool, TransportError> {
            self.calls.lock().push("is_writable");
            Ok(true)
        }

        fn write(&self, _handle: Arc<TagHandle>, _payload: Vec<u8>) -> Result<(), TransportError> {
            self.calls.lock().push("write");
            Ok(())
        }

        fn close(&self, _handle: Arc<TagHandle>) {
            self.calls.lock().push("close");
        }
    }

    #[test]
    fn connection_closes_on_drop() {
        let transport = CountingTransport::default();
        let handle = Arc::new(TagHandle::new(1, vec![]));

        {
            let connection = TagConnection::open(&transport, handle).unwrap();
            assert_eq!(connection.is_writable(), Ok(true));
            connection.write(vec![0x02, b'e', b'n', b'H', b'i']).unwrap();
        }

        assert_eq!(*transport.calls.lock(), vec!["connect", "is_writable", "write", "close"]);
    }

    #[test]
    fn failed_connect_is_never_closed() {
        let transport = CountingTransport { fail_connect: true, ..Default::default() };
        let handle = Arc::new(TagHandle::new(1, vec![]));

        let result = TagConnection::open(&transport, handle);
        assert!(matches!(result, Err(TransportError::ConnectFailed(_))));
        assert_eq!(*transport.calls.lock(), vec!["connect"]);
    }
}
