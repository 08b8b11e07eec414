use crate::observable::Observable;
use crate::observer::{Observer, SharedObserver};
use crate::subscription::Subscription;
use std::{
  cell::{Cell, RefCell},
  rc::Rc,
};

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Combines two observables into one by interleaving their emissions.
  ///
  /// Both sides are subscribed concurrently; values and errors from
  /// either pass straight through. Completion fires once, after both
  /// sides have independently completed. The returned handle cancels
  /// both constituent subscriptions.
  pub fn merge(self, other: Observable<Item, Err>) -> Observable<Item, Err> {
    Observable::new(move |observer| {
      let observer: SharedObserver<Item, Err> =
        Rc::new(RefCell::new(observer));
      let pending = Rc::new(Cell::new(2_usize));

      let subscription = Subscription::new();
      subscription.add(self.actual_subscribe(MergeObserver {
        observer: observer.clone(),
        pending: pending.clone(),
      }));
      subscription.add(other.actual_subscribe(MergeObserver {
        observer,
        pending,
      }));
      subscription
    })
  }
}

struct MergeObserver<Item, Err> {
  observer: SharedObserver<Item, Err>,
  pending: Rc<Cell<usize>>,
}

impl<Item, Err> Observer<Item, Err> for MergeObserver<Item, Err> {
  fn next(&mut self, value: Item) { self.observer.next(value) }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) {
    let left = self.pending.get() - 1;
    self.pending.set(left);
    if left == 0 {
      self.observer.complete();
    }
  }
}
