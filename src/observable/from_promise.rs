use crate::observable::Observable;
use crate::subscription::Subscription;
use std::{cell::RefCell, rc::Rc};

/// The minimal capability a one-shot asynchronous producer must expose to
/// be bridged into an observable: a two-callback resolution contract.
///
/// Exactly one of `resolve`/`reject` is expected to be called, exactly
/// once, possibly from inside `then` itself.
pub trait Thenable {
  type Item;
  type Err;

  fn then(
    self,
    resolve: Box<dyn FnOnce(Self::Item)>,
    reject: Box<dyn FnOnce(Self::Err)>,
  );
}

/// Bridges a promise-like producer into an observable.
///
/// Every subscription invokes `factory` to start a fresh operation. On
/// success the value is emitted and the stream completes; on failure the
/// error is signalled and the stream still completes. The cancellation
/// handle is a no-op: the underlying operation cannot be aborted once
/// started.
pub fn from_promise<P, F>(factory: F) -> Observable<P::Item, P::Err>
where
  P: Thenable + 'static,
  P::Item: 'static,
  P::Err: 'static,
  F: Fn() -> P + 'static,
{
  Observable::new(move |observer| {
    let observer = Rc::new(RefCell::new(observer));
    let reject_observer = observer.clone();
    factory().then(
      Box::new(move |value| {
        let mut observer = observer.borrow_mut();
        observer.next(value);
        observer.complete();
      }),
      Box::new(move |err| {
        let mut observer = reject_observer.borrow_mut();
        observer.error(err);
        observer.complete();
      }),
    );
    Subscription::default()
  })
}
