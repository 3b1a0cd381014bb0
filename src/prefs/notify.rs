//! Change notification for observers of the store

use std::sync::mpsc::{self, Receiver, Sender};

/// Payload-free signal sent when the set of known keys may have changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefsChanged;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

enum Observer {
    Callback(Box<dyn FnMut()>),
    Channel(Sender<PrefsChanged>),
}

/// Observer list owned by a store instance
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut() + 'static,
    {
        self.push(Observer::Callback(Box::new(callback)))
    }

    /// Subscribe with a channel that receives one message per notification
    ///
    /// The subscription is dropped automatically once the receiver is gone.
    pub fn subscribe_channel(&mut self) -> Receiver<PrefsChanged> {
        let (tx, rx) = mpsc::channel();
        self.push(Observer::Channel(tx));
        rx
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Invoke every observer in subscription order
    pub fn notify(&mut self) {
        self.observers.retain_mut(|(_, observer)| match observer {
            Observer::Callback(callback) => {
                callback();
                true
            }
            Observer::Channel(tx) => tx.send(PrefsChanged).is_ok(),
        });
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    fn push(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.observers.len())
            .finish()
    }
}
