//! Observable Entity
//!
//! Change notification and per-field validation error tracking, shared by
//! domain entities and view models.
//!
//! Implementors embed an [`EntityState`] and expose it through
//! [`ObservableEntity::entity_state`]; every other method has a default
//! implementation.
//!
//! # Delivery
//!
//! Notifications are synchronous and delivered in subscription order. A
//! listener receives `&mut` access to the entity, so it may read derived
//! state or trigger further updates. The listener list is snapshotted when a
//! dispatch starts, and a listener that is still running is skipped by any
//! nested dispatch it causes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

/// Change callback, invoked with the entity and the field that changed
pub type Listener<T> = Rc<RefCell<dyn FnMut(&mut T, <T as ObservableEntity>::Field)>>;

/// Handle returned by [`ObservableEntity::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Listener registry and validation errors of one entity
pub struct EntityState<T: ObservableEntity> {
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_subscription: u64,
    errors: HashMap<T::Field, Vec<String>>,
}

impl<T: ObservableEntity> EntityState<T> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_subscription: 0,
            errors: HashMap::new(),
        }
    }

    /// Number of active subscriptions
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// All recorded errors, keyed by field
    pub fn errors(&self) -> &HashMap<T::Field, Vec<String>> {
        &self.errors
    }
}

impl<T: ObservableEntity> Default for EntityState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ObservableEntity> fmt::Debug for EntityState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityState")
            .field("listeners", &self.listeners.len())
            .field("errors", &self.errors)
            .finish()
    }
}

/// Base capability for entities that publish field changes
pub trait ObservableEntity: Sized + 'static {
    /// Identifier of an observable field
    type Field: Copy + Eq + Hash + fmt::Debug + fmt::Display + 'static;

    fn entity_state(&self) -> &EntityState<Self>;

    fn entity_state_mut(&mut self) -> &mut EntityState<Self>;

    /// Called right before `field` is overwritten.
    ///
    /// Override to detach from an observable value that is about to be
    /// replaced.
    fn before_field_update(&mut self, _field: Self::Field) {}

    /// Register a change listener
    fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&mut Self, Self::Field) + 'static,
    {
        let state = self.entity_state_mut();
        let id = SubscriptionId(state.next_subscription);
        state.next_subscription += 1;

        let listener: Listener<Self> = Rc::new(RefCell::new(listener));
        state.listeners.push((id, listener));

        tracing::debug!(subscription = id.0, "Listener subscribed");
        id
    }

    /// Remove a listener. Returns false if it was not subscribed.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let listeners = &mut self.entity_state_mut().listeners;
        let before = listeners.len();
        listeners.retain(|(subscription, _)| *subscription != id);

        let removed = listeners.len() != before;
        if removed {
            tracing::debug!(subscription = id.0, "Listener unsubscribed");
        }
        removed
    }

    /// Deliver a change of `field` to every listener
    fn notify_field_changed(&mut self, field: Self::Field) {
        let listeners: Vec<Listener<Self>> = self
            .entity_state()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            let Ok(mut callback) = listener.try_borrow_mut() else {
                tracing::trace!(%field, "Skipping listener that is still running");
                continue;
            };
            (&mut *callback)(self, field);
        }
    }

    /// Assign `value` through `slot` if it differs from the current value.
    ///
    /// Returns true if the value changed, after listeners have been notified.
    fn set_field<V, S>(&mut self, slot: S, value: V, field: Self::Field) -> bool
    where
        V: PartialEq,
        S: Fn(&mut Self) -> &mut V,
    {
        if *slot(self) == value {
            return false;
        }

        self.before_field_update(field);
        *slot(self) = value;
        self.notify_field_changed(field);
        true
    }

    /// Assign `value` unconditionally, then run `validate`.
    ///
    /// The value is kept even if `validate` records errors. Listeners are
    /// notified after validation when the value changed, so they can inspect
    /// [`field_errors`](Self::field_errors). Returns whether the value changed.
    fn set_field_validated<V, S, C>(
        &mut self,
        slot: S,
        value: V,
        field: Self::Field,
        validate: C,
    ) -> bool
    where
        V: PartialEq,
        S: Fn(&mut Self) -> &mut V,
        C: FnOnce(&mut Self),
    {
        let changed = *slot(self) != value;

        self.before_field_update(field);
        *slot(self) = value;
        validate(self);

        if changed {
            self.notify_field_changed(field);
        }
        changed
    }

    /// Errors recorded for `field`, or `None` if there are none
    fn field_errors(&self, field: Self::Field) -> Option<&[String]> {
        self.entity_state()
            .errors
            .get(&field)
            .filter(|errors| !errors.is_empty())
            .map(Vec::as_slice)
    }

    fn has_errors(&self) -> bool {
        self.entity_state()
            .errors
            .values()
            .any(|errors| !errors.is_empty())
    }

    fn clear_errors(&mut self, field: Self::Field) {
        self.entity_state_mut().errors.remove(&field);
    }

    fn add_error<M: Into<String>>(&mut self, field: Self::Field, message: M) {
        self.entity_state_mut()
            .errors
            .entry(field)
            .or_default()
            .push(message.into());
    }
}
