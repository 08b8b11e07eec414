use crate::observable::Observable;
use crate::observer::{Observer, SharedObserver};
use crate::subscription::Subscription;
use std::{cell::RefCell, rc::Rc};

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Emits everything from `self`, then everything from `other`.
  ///
  /// `other` is not subscribed until `self` has signalled completion, so
  /// no buffering is involved; this is sequencing, not concurrency. The
  /// returned handle cancels whichever constituent subscription is
  /// currently active.
  pub fn concat(self, other: Observable<Item, Err>) -> Observable<Item, Err> {
    Observable::new(move |observer| {
      let subscription = Subscription::new();
      subscription.add(self.actual_subscribe(ConcatObserver {
        observer: Rc::new(RefCell::new(observer)),
        tail: other.clone(),
        subscription: subscription.clone(),
      }));
      subscription
    })
  }
}

struct ConcatObserver<Item: 'static, Err: 'static> {
  observer: SharedObserver<Item, Err>,
  tail: Observable<Item, Err>,
  subscription: Subscription,
}

impl<Item, Err> Observer<Item, Err> for ConcatObserver<Item, Err> {
  fn next(&mut self, value: Item) { self.observer.next(value) }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) {
    // hand the same downstream observer over to the tail; its
    // completion is the composed completion
    let tail_sub = self.tail.actual_subscribe(self.observer.clone());
    self.subscription.add(tail_sub);
  }
}
