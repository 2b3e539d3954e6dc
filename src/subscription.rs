//! Cancellable handler registrations keyed by topic.
//!
//! A [`Registry`] maps keys to handlers. Registering returns a
//! [`Subscription`] token; dropping or cancelling the token removes the
//! handler, and a removed handler is never invoked again, even if the removal
//! happens while a publish is in flight.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::{Rc, Weak};

use tracing::{debug, instrument, warn};

/// Identifier of a single registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler<T> = Rc<RefCell<Box<dyn FnMut(&T)>>>;

struct Inner<K, T> {
    next_id: u64,
    handlers: HashMap<K, Vec<(SubscriptionId, Handler<T>)>>,
    keys: HashMap<SubscriptionId, K>,
}

/// Removal side of a registry, erased so tokens are not generic.
trait Cancel {
    fn cancel(&self, id: SubscriptionId) -> bool;
    fn is_registered(&self, id: SubscriptionId) -> bool;
}

impl<K: Eq + Hash + Clone, T> Cancel for RefCell<Inner<K, T>> {
    fn cancel(&self, id: SubscriptionId) -> bool {
        let mut inner = self.borrow_mut();
        let Some(key) = inner.keys.remove(&id) else {
            return false;
        };
        if let Some(list) = inner.handlers.get_mut(&key) {
            list.retain(|(handler_id, _)| *handler_id != id);
            if list.is_empty() {
                inner.handlers.remove(&key);
            }
        }
        true
    }

    fn is_registered(&self, id: SubscriptionId) -> bool {
        self.borrow().keys.contains_key(&id)
    }
}

/// Handler registry keyed by `K`, delivering `&T`.
///
/// Single-threaded: handlers run on the thread that calls [`Registry::publish`].
pub struct Registry<K, T> {
    inner: Rc<RefCell<Inner<K, T>>>,
}

impl<K, T> Registry<K, T>
where
    K: Eq + Hash + Clone + fmt::Debug + 'static,
    T: 'static,
{
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                next_id: 0,
                handlers: HashMap::new(),
                keys: HashMap::new(),
            })),
        }
    }

    /// Registers `handler` for `key`.
    ///
    /// The handler stays registered for as long as the returned token lives.
    #[instrument(skip(self, handler))]
    pub fn subscribe(&self, key: K, handler: impl FnMut(&T) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = SubscriptionId(inner.next_id);
        let handler: Handler<T> = Rc::new(RefCell::new(Box::new(handler)));
        inner
            .handlers
            .entry(key.clone())
            .or_default()
            .push((id, handler));
        inner.keys.insert(id, key);
        debug!(?id, "Registered handler");

        let cancel: Rc<dyn Cancel> = self.inner.clone();
        Subscription {
            id,
            registry: Rc::downgrade(&cancel),
        }
    }

    /// Delivers `value` to every handler registered for `key`.
    ///
    /// Returns the number of handlers invoked. Handlers cancelled by an
    /// earlier handler in the same publish are skipped.
    #[instrument(skip(self, value))]
    pub fn publish(&self, key: &K, value: &T) -> usize {
        let snapshot: Vec<(SubscriptionId, Handler<T>)> = match self.inner.borrow().handlers.get(key)
        {
            Some(list) => list.clone(),
            None => return 0,
        };

        let mut delivered = 0;
        for (id, handler) in snapshot {
            if !self.inner.is_registered(id) {
                debug!(?id, "Skipping handler cancelled during publish");
                continue;
            }
            match handler.try_borrow_mut() {
                Ok(mut handler) => {
                    (&mut **handler)(value);
                    delivered += 1;
                }
                Err(_) => warn!(?id, "Handler re-entered while running, skipping"),
            }
        }
        delivered
    }

    /// Number of live handlers for `key`.
    pub fn subscriber_count(&self, key: &K) -> usize {
        self.inner
            .borrow()
            .handlers
            .get(key)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Number of live handlers across all keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().keys.len()
    }

    /// Whether no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, T> Default for Registry<K, T>
where
    K: Eq + Hash + Clone + fmt::Debug + 'static,
    T: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> fmt::Debug for Registry<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("handlers", &self.inner.borrow().keys.len())
            .finish()
    }
}

/// Capability token for one registration.
///
/// Dropping the token cancels the registration. Outliving the registry is
/// harmless.
#[must_use = "dropping a Subscription cancels it immediately"]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<dyn Cancel>,
}

impl Subscription {
    /// Identifier of this registration.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Whether the handler is still registered.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.is_registered(self.id))
    }

    /// Cancels the registration now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade()
            && registry.cancel(self.id)
        {
            debug!(id = ?self.id, "Cancelled subscription");
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
