use std::fmt::Debug;

use flume::Sender;
use tracing::{debug, error, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum SingleOrMany<T> {
    Single(T),
    Many(Vec<T>),
}

impl<T> From<T> for SingleOrMany<T> {
    fn from(msg: T) -> Self {
        SingleOrMany::Single(msg)
    }
}

impl<T> From<Vec<T>> for SingleOrMany<T> {
    fn from(msgs: Vec<T>) -> Self {
        SingleOrMany::Many(msgs)
    }
}

impl<T> SingleOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            SingleOrMany::Single(msg) => vec![msg],
            SingleOrMany::Many(msgs) => msgs,
        }
    }
}

/// Collects messages and sends them in one go when dropped
#[derive(Debug)]
pub struct DeferredSender<T>
where
    T: Debug + Send + Sync + 'static,
{
    sender: MessageSender<T>,
    buffer: Vec<T>,
}

impl<T> DeferredSender<T>
where
    T: Debug + Send + Sync + 'static,
{
    pub fn new(sender: MessageSender<T>) -> Self {
        Self { sender, buffer: vec![] }
    }

    pub fn queue(&mut self, message: T) {
        self.buffer.push(message);
    }
}

#[derive(Debug)]
pub struct MessageSender<T> {
    sender: Sender<SingleOrMany<T>>,
    backlog_warning: usize,
}

impl<T> Clone for MessageSender<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone(), backlog_warning: self.backlog_warning }
    }
}

impl<T> MessageSender<T>
where
    T: Debug + Send + Sync + 'static,
{
    /// Wraps an unbounded sender, warning whenever `backlog_warning` updates are already waiting
    pub fn new(sender: Sender<SingleOrMany<T>>, backlog_warning: usize) -> Self {
        Self { sender, backlog_warning }
    }

    /// Never blocks and never reorders, messages arrive in the order they were sent
    pub fn send(&self, message: impl Into<SingleOrMany<T>>) {
        let message = message.into();
        debug!("send: {message:?}");

        let backlog = self.sender.len();
        if backlog >= self.backlog_warning {
            warn!("{backlog} updates waiting for the frontend, is a listener installed?");
        }

        if let Err(error) = self.sender.send(message) {
            error!("unable to send message to the frontend: {error}");
        }
    }
}

impl<T> Drop for DeferredSender<T>
where
    T: Debug + Send + Sync + 'static,
{
    fn drop(&mut self) {
        let msgs = std::mem::take(&mut self.buffer);
        if msgs.len() > 1 {
            return self.sender.send(SingleOrMany::Many(msgs));
        }

        if let Some(msg) = msgs.into_iter().next() {
            self.sender.send(SingleOrMany::Single(msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flushes_on_drop() {
        let (sender, receiver) = flume::unbounded();
        let sender = MessageSender::new(sender, 10);

        {
            let mut deferred = DeferredSender::new(sender.clone());
            deferred.queue(1);
            assert!(receiver.is_empty());
        }
        assert_eq!(receiver.try_recv().unwrap(), SingleOrMany::Single(1));

        {
            let mut deferred = DeferredSender::new(sender.clone());
            deferred.queue(2);
            deferred.queue(3);
        }
        assert_eq!(receiver.try_recv().unwrap(), SingleOrMany::Many(vec![2, 3]));

        drop(DeferredSender::new(sender));
        assert!(receiver.is_empty());
    }

    #[test]
    fn backlog_past_warning_is_delivered_in_order() {
        let (sender, receiver) = flume::unbounded();
        let sender = MessageSender::new(sender, 1);

        for i in 0..50 {
            sender.send(i);
        }

        // delivered before send returns, nothing is left to a helper thread
        assert_eq!(receiver.len(), 50);

        let received = receiver.drain().flat_map(SingleOrMany::into_vec).collect::<Vec<i32>>();
        assert_eq!(received, (0..50).collect::<Vec<i32>>());
    }

    #[test]
    fn disconnected_receiver_does_not_panic() {
        let (sender, receiver) = flume::unbounded::<SingleOrMany<i32>>();
        drop(receiver);

        MessageSender::new(sender, 1).send(1);
    }
}
