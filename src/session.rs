//! Signed-in user, passed explicitly to whatever needs identity.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, Weak},
};

use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), email: None, name: None }
    }

    /// First word of the name, for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.as_deref().and_then(|name| name.split_whitespace().next()).unwrap_or("User")
    }
}

type Callback = Arc<dyn Fn(Option<&User>) + Send + Sync>;

#[derive(Default)]
struct State {
    user: Option<User>,
    next_id: u64,
    subscribers: BTreeMap<u64, Callback>,
}

/// Current user plus the callbacks interested in its changes.
///
/// Cloning shares the same session.
#[derive(Clone, Default)]
pub struct SessionContext(Arc<Mutex<State>>);

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<User> {
        self.lock().user.clone()
    }

    #[instrument(skip_all, fields(user_id = %user.id))]
    pub fn sign_in(&self, user: User) {
        info!("signed in");
        self.replace(Some(user));
    }

    pub fn sign_out(&self) {
        info!("signed out");
        self.replace(None);
    }

    /// Registers a callback that receives every subsequent change.
    ///
    /// Delivery stops when the returned subscription is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(
        &self,
        callback: impl Fn(Option<&User>) + Send + Sync + 'static,
    ) -> Subscription {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.subscribers.insert(id, Arc::new(callback));
        debug!(id, n_subscribers = state.subscribers.len(), "subscribed");
        Subscription { id, session: Arc::downgrade(&self.0) }
    }

    fn replace(&self, user: Option<User>) {
        // Callbacks run outside the lock.
        let subscribers = {
            let mut state = self.lock();
            state.user.clone_from(&user);
            state.subscribers.values().cloned().collect::<Vec<_>>()
        };
        for callback in subscribers {
            callback(user.as_ref());
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.0.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[must_use]
pub struct Subscription {
    id: u64,
    session: Weak<Mutex<State>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(session) = self.session.upgrade() {
            let mut state = session.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            state.subscribers.remove(&self.id);
            debug!(id = self.id, "unsubscribed");
        }
    }
}
