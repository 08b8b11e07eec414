//! The Observable value and its subscribe entry points.

use crate::observer::{BoxObserver, CallbackObserver, Observer};
use crate::subscription::Subscription;
use std::rc::Rc;

mod of;
pub use of::{empty, of, throw};
mod from_promise;
pub use from_promise::{from_promise, Thenable};
mod from_push_stream;
pub use from_push_stream::{from_push_stream, PushStream};

/// A push-based stream of values over time: a value wrapping exactly one
/// subscription function.
///
/// An `Observable` owns no state and performs no work until subscribed;
/// every subscription re-runs the underlying producer with fresh state.
/// Cloning is cheap and clones share the same subscription function, so a
/// clone is the way to subscribe to (or compose over) the same source
/// twice.
///
/// ```
/// use rill::prelude::*;
/// use std::{cell::RefCell, rc::Rc};
///
/// let values = Rc::new(RefCell::new(Vec::new()));
/// let sink = values.clone();
/// observable::of(1)
///   .map(|v| v * 10)
///   .subscribe(move |v| sink.borrow_mut().push(v));
/// assert_eq!(*values.borrow(), vec![10]);
/// ```
pub struct Observable<Item, Err> {
  subscribe: Rc<dyn Fn(BoxObserver<Item, Err>) -> Subscription>,
}

impl<Item, Err> Clone for Observable<Item, Err> {
  fn clone(&self) -> Self {
    Observable { subscribe: self.subscribe.clone() }
  }
}

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Wrap a raw subscription function.
  ///
  /// The function receives the downstream observer and must return the
  /// cancellation handle for this activation. It may emit synchronously
  /// before returning; the protocol makes no scheduling promise.
  pub fn new<F>(subscribe: F) -> Self
  where
    F: Fn(BoxObserver<Item, Err>) -> Subscription + 'static,
  {
    Observable { subscribe: Rc::new(subscribe) }
  }

  /// Run one subscription activation with an already-boxed observer.
  pub(crate) fn raw_subscribe(
    &self,
    observer: BoxObserver<Item, Err>,
  ) -> Subscription {
    (self.subscribe)(observer)
  }

  /// Subscribe with any [`Observer`]. This is the entry point operators
  /// use to attach their own observer adapters.
  pub fn actual_subscribe<O>(&self, observer: O) -> Subscription
  where
    O: Observer<Item, Err> + 'static,
  {
    self.raw_subscribe(Box::new(observer))
  }

  /// Subscribe caring only about values; errors and completion are
  /// ignored.
  pub fn subscribe<N>(&self, next: N) -> Subscription
  where
    N: FnMut(Item) + 'static,
  {
    self.actual_subscribe(CallbackObserver {
      next,
      error: |_: Err| {},
      complete: || {},
    })
  }

  /// Subscribe with a value handler and an error handler.
  pub fn subscribe_err<N, E>(&self, next: N, error: E) -> Subscription
  where
    N: FnMut(Item) + 'static,
    E: FnMut(Err) + 'static,
  {
    self.actual_subscribe(CallbackObserver { next, error, complete: || {} })
  }

  /// Subscribe with a value handler and a completion handler.
  pub fn subscribe_complete<N, C>(&self, next: N, complete: C) -> Subscription
  where
    N: FnMut(Item) + 'static,
    C: FnMut() + 'static,
  {
    self.actual_subscribe(CallbackObserver {
      next,
      error: |_: Err| {},
      complete,
    })
  }

  /// Subscribe with all three channel handlers.
  pub fn subscribe_all<N, E, C>(
    &self,
    next: N,
    error: E,
    complete: C,
  ) -> Subscription
  where
    N: FnMut(Item) + 'static,
    E: FnMut(Err) + 'static,
    C: FnMut() + 'static,
  {
    self.actual_subscribe(CallbackObserver { next, error, complete })
  }
}
