pub mod deferred_sender;
pub mod tag_session_manager;
