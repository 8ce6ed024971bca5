mod state;

use std::sync::Arc;

use flume::Receiver;
use parking_lot::Mutex;
use tagtext_util::{preview_bytes, result_ext::ResultExt as _};
use tap::TapFallible as _;
use tracing::{debug, error, info, warn};

use crate::{
    config::SessionConfig,
    discovery::{BundledPayload, DiscoveryEvent, DiscoveryKind},
    manager::deferred_sender::{self, DeferredSender, MessageSender},
    ndef::{self, RecordError},
    presentation::{DisplayUpdate, Notification},
    tag_handle::TagHandle,
    timestamp,
    transport::{TagConnection, TagTransport},
};

pub use state::{SessionState, SessionStatus};

type Message = TagSessionReconcileMessage;
type Action = TagSessionAction;
type Reconciler = dyn TagSessionReconciler;
type SingleOrMany = deferred_sender::SingleOrMany<Message>;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::From, uniffi::Enum)]
pub enum TagSessionReconcileMessage {
    /// Text read from the tag that was just discovered
    Display(DisplayUpdate),

    Notify(Notification),

    /// The write button should follow the gate
    WriteGateChanged(bool),
}

#[uniffi::export(callback_interface)]
pub trait TagSessionReconciler: Send + Sync + std::fmt::Debug + 'static {
    /// Tells the frontend to reconcile the manager changes
    fn reconcile(&self, message: Message);
    fn reconcile_many(&self, messages: Vec<Message>);
}

#[derive(Debug, Clone, uniffi::Enum)]
pub enum TagSessionAction {
    TagDiscovered(DiscoveryEvent),
    WriteRequested { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum TagSessionError {
    #[error("Unable to read tag: {0}")]
    MalformedRecord(String),

    #[error("Input field is empty")]
    EmptyInput,

    #[error("Invalid language code: {0}")]
    InvalidLanguageCode(String),

    #[error("No NFC Tag detected!")]
    NoTagPresent,

    #[error("Scan the tag again before writing")]
    WriteNotPermitted,

    #[error("Failed to connect to tag")]
    ConnectError(String),

    #[error("Tag is read-only.")]
    ReadOnlyTag,

    #[error("Failed to write tag")]
    WriteError(String),
}

pub type Error = TagSessionError;
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<RecordError> for TagSessionError {
    fn from(error: RecordError) -> Self {
        match error {
            RecordError::MalformedRecord(reason) => Self::MalformedRecord(reason),
            RecordError::EmptyInput => Self::EmptyInput,
            RecordError::InvalidLanguageCode(code) => Self::InvalidLanguageCode(code),
        }
    }
}

#[derive(Debug, uniffi::Object)]
pub struct RustTagSessionManager {
    state: Mutex<SessionState>,
    config: SessionConfig,
    transport: Box<dyn TagTransport>,
    reconciler: MessageSender<Message>,
    reconcile_receiver: Arc<Receiver<SingleOrMany>>,
}

#[uniffi::export]
impl RustTagSessionManager {
    #[uniffi::constructor]
    pub fn new(transport: Box<dyn TagTransport>) -> Self {
        Self::with_config(transport, SessionConfig::default())
    }

    #[uniffi::constructor]
    pub fn with_config(transport: Box<dyn TagTransport>, config: SessionConfig) -> Self {
        let config = config.validated();
        let (sender, receiver) = flume::unbounded();
        let reconciler = MessageSender::new(sender, config.reconcile_capacity as usize);

        Self {
            state: Mutex::new(SessionState::default()),
            config,
            transport,
            reconciler,
            reconcile_receiver: Arc::new(receiver),
        }
    }

    #[uniffi::method]
    pub fn listen_for_updates(&self, reconciler: Box<Reconciler>) {
        let reconcile_receiver = self.reconcile_receiver.clone();

        std::thread::spawn(move || {
            while let Ok(field) = reconcile_receiver.recv() {
                match field {
                    SingleOrMany::Single(message) => reconciler.reconcile(message),
                    SingleOrMany::Many(messages) => reconciler.reconcile_many(messages),
                }
            }
        });
    }

    #[uniffi::method]
    pub fn status(&self) -> SessionStatus {
        self.state.lock().status()
    }

    #[uniffi::method]
    pub fn is_write_enabled(&self) -> bool {
        self.state.lock().is_write_enabled()
    }

    #[uniffi::method]
    pub fn has_tag(&self) -> bool {
        self.state.lock().has_tag()
    }

    /// Errors are reported to the frontend as notifications
    #[uniffi::method]
    pub fn dispatch(&self, action: Action) {
        debug!("dispatch: {action:?}");
        let _ = match action {
            Action::TagDiscovered(event) => self.on_discovery(event.handle, event.kind),
            Action::WriteRequested { text } => self.on_write_requested(&text),
        };
    }
}

impl RustTagSessionManager {
    /// A tag came into range, always opens the write gate
    pub fn on_discovery(&self, handle: Arc<TagHandle>, kind: DiscoveryKind) -> Result<()> {
        info!("discovered {handle}, techs: {:?}", handle.tech_list());

        // decode outside the lock
        let read: Option<Result<Message>> = match kind.into_first_payload() {
            BundledPayload::NotRead => None,
            BundledPayload::NoRecords => {
                debug!("first ndef message of {handle} has no records");
                None
            }
            BundledPayload::NoMessages => Some(Ok(Notification::no_ndef_messages().into())),
            BundledPayload::Payload(payload) => Some(self.read_payload(&payload)),
        };

        let mut state = self.state.lock();
        let mut sender = DeferredSender::new(self.reconciler.clone());

        debug!("{} -> TagPresent", state.name());
        if state.discovered(handle) {
            sender.queue(Message::WriteGateChanged(true));
        }

        match read {
            Some(Ok(message)) => sender.queue(message),
            Some(Err(error)) => {
                warn!("unable to read discovered tag: {error:?}");
                sender.queue(Notification::from(&error).into());
                return Err(error);
            }
            None => {}
        }

        Ok(())
    }

    /// Write text to the current tag, the gate stays closed until the next discovery
    pub fn on_write_requested(&self, text: &str) -> Result<()> {
        let result = self.write_text(text);

        let notification = match &result {
            Ok(()) => Notification::written(),
            Err(error) => Notification::from(error),
        };

        self.reconciler.send(Message::Notify(notification));
        result
    }

    fn read_payload(&self, payload: &[u8]) -> Result<Message> {
        let record = ndef::decode(payload)?;
        debug!("read {} chars in {:?}", record.text.chars().count(), record.language_tag);

        Ok(DisplayUpdate {
            text: record.text,
            timestamp: timestamp::now(&self.config.timestamp_format),
        }
        .into())
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let handle = {
            let mut state = self.state.lock();
            let handle = state
                .take_write_permit()
                .tap_err(|error| info!("write refused: {error}"))?;

            self.reconciler.send(Message::WriteGateChanged(false));
            handle
        };

        let payload = ndef::encode(text, &self.config.language_tag)
            .tap_err(|error| warn!("not writing to {handle}: {error}"))?;

        let connection = TagConnection::open(&*self.transport, handle.clone())
            .tap_err(|error| error!("unable to connect to {handle}: {error}"))
            .map_err_str(Error::ConnectError)?;

        let is_writable = connection
            .is_writable()
            .tap_err(|error| error!("unable to query {handle}: {error}"))
            .map_err_str(Error::WriteError)?;

        if !is_writable {
            warn!("{handle} is read-only");
            return Err(Error::ReadOnlyTag);
        }

        debug!("writing {} to {handle}", preview_bytes(&payload, 16));
        let payload_len = payload.len();
        connection
            .write(payload)
            .tap_err(|error| error!("unable to write to {handle}: {error}"))
            .map_err_str(Error::WriteError)?;

        info!("wrote {payload_len} byte payload to {handle}");
        Ok(())
    }
}
