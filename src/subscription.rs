//! Cancellation handles returned from `Observable::subscribe`.

use smallvec::SmallVec;
use std::{
  cell::RefCell,
  fmt::{Debug, Formatter},
  rc::Rc,
};

/// Anything that can stop further channel calls from a subscription.
///
/// Unsubscribing does not itself emit an error or completion signal; it
/// only asks the producer to stop calling back.
pub trait SubscriptionLike {
  /// Deregister the subscription before it has delivered all of its
  /// events.
  fn unsubscribe(&mut self);

  fn is_closed(&self) -> bool;
}

/// A one-shot cancel action supplied by a producer.
pub struct Teardown(Option<Box<dyn FnOnce()>>);

impl Teardown {
  pub fn new(f: impl FnOnce() + 'static) -> Self {
    Teardown(Some(Box::new(f)))
  }
}

impl SubscriptionLike for Teardown {
  fn unsubscribe(&mut self) {
    if let Some(action) = self.0.take() {
      action();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.0.is_none() }
}

/// The cancellation handle returned by every subscription activation.
///
/// It is a cheaply cloneable handle over a teardown list; composite
/// operators `add` the handles of every constituent subscription they
/// create, so cancelling the composite cancels all of them. Adding to an
/// already-closed handle cancels the child immediately. Unsubscribing is
/// idempotent.
#[derive(Clone, Default)]
pub struct Subscription(Rc<RefCell<Inner>>);

impl Subscription {
  pub fn new() -> Self { Self::default() }

  /// Handle wrapping a single cancel action.
  pub fn from_fn(f: impl FnOnce() + 'static) -> Self {
    let subscription = Subscription::new();
    subscription.add(Teardown::new(f));
    subscription
  }

  pub fn add<S: SubscriptionLike + 'static>(&self, subscription: S) {
    self.0.borrow_mut().add(Box::new(subscription));
  }
}

impl SubscriptionLike for Subscription {
  #[inline]
  fn unsubscribe(&mut self) { self.0.borrow_mut().unsubscribe() }

  #[inline]
  fn is_closed(&self) -> bool { self.0.borrow().closed }
}

impl Debug for Subscription {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let inner = self.0.borrow();
    f.debug_struct("Subscription")
      .field("closed", &inner.closed)
      .field("teardown_count", &inner.teardown.len())
      .finish()
  }
}

#[derive(Default)]
struct Inner {
  closed: bool,
  teardown: SmallVec<[Box<dyn SubscriptionLike>; 1]>,
}

impl Inner {
  fn add(&mut self, mut subscription: Box<dyn SubscriptionLike>) {
    if self.closed {
      subscription.unsubscribe();
    } else {
      self.teardown.retain(|s| !s.is_closed());
      self.teardown.push(subscription);
    }
  }

  fn unsubscribe(&mut self) {
    if !self.closed {
      self.closed = true;
      for subscription in &mut self.teardown {
        subscription.unsubscribe();
      }
    }
  }
}

impl<T: ?Sized> SubscriptionLike for Box<T>
where
  T: SubscriptionLike,
{
  #[inline]
  fn unsubscribe(&mut self) { (**self).unsubscribe() }

  #[inline]
  fn is_closed(&self) -> bool { (**self).is_closed() }
}
