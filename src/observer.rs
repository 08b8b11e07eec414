//! Observer trait and adapters
//!
//! The Observer is the consumer side of a subscription: three channels,
//! `next` for values, `error` for failures and `complete` for the end of
//! the stream.

use std::{cell::RefCell, rc::Rc};

/// The notification sink handed to a subscription function.
///
/// All three channels take `&mut self`: the wire protocol permits a
/// producer to signal an error and then still signal completion on the
/// same subscription (see [`observable::throw`](crate::observable::throw)),
/// and the [`recover`](crate::observable::Observable::recover) operator
/// keeps a subscription alive after converting an error into a value.
///
/// A well-behaved producer calls `next` any number of times, then at most
/// one of `error`/`complete` once, and stops afterwards. Nothing enforces
/// this; operators simply rely on it.
pub trait Observer<Item, Err> {
  /// Receive the next value from the observable.
  fn next(&mut self, value: Item);

  /// Receive an error signal from the observable.
  fn error(&mut self, err: Err);

  /// Receive the completion signal from the observable.
  fn complete(&mut self);
}

/// Boxed observer, the concrete shape every subscription function
/// receives.
pub type BoxObserver<Item, Err> = Box<dyn Observer<Item, Err>>;

/// A downstream observer shared between the constituent subscriptions of
/// a composite operator.
pub type SharedObserver<Item, Err> = Rc<RefCell<BoxObserver<Item, Err>>>;

impl<Item, Err> Observer<Item, Err> for BoxObserver<Item, Err> {
  #[inline]
  fn next(&mut self, value: Item) { (**self).next(value) }

  #[inline]
  fn error(&mut self, err: Err) { (**self).error(err) }

  #[inline]
  fn complete(&mut self) { (**self).complete() }
}

impl<Item, Err, O> Observer<Item, Err> for Rc<RefCell<O>>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) { self.borrow_mut().next(value) }

  fn error(&mut self, err: Err) { self.borrow_mut().error(err) }

  fn complete(&mut self) { self.borrow_mut().complete() }
}

/// Closure-triple observer backing the `subscribe_*` entry points.
pub(crate) struct CallbackObserver<N, E, C> {
  pub(crate) next: N,
  pub(crate) error: E,
  pub(crate) complete: C,
}

impl<Item, Err, N, E, C> Observer<Item, Err> for CallbackObserver<N, E, C>
where
  N: FnMut(Item),
  E: FnMut(Err),
  C: FnMut(),
{
  fn next(&mut self, value: Item) { (self.next)(value) }

  fn error(&mut self, err: Err) { (self.error)(err) }

  fn complete(&mut self) { (self.complete)() }
}
