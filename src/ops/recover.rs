use crate::observable::Observable;
use crate::observer::Observer;
use std::rc::Rc;

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Converts every error signal into a value and keeps the subscription
  /// alive.
  ///
  /// Completion is not forced at the recovery point: the result completes
  /// only when the source itself completes. A source that errors but
  /// never completes therefore yields a stream that never completes
  /// either.
  pub fn recover<F>(self, f: F) -> Observable<Item, Err>
  where
    F: Fn(Err) -> Item + 'static,
  {
    let f = Rc::new(f);
    Observable::new(move |observer| {
      self.actual_subscribe(RecoverObserver { observer, recover: f.clone() })
    })
  }
}

struct RecoverObserver<O, F> {
  observer: O,
  recover: Rc<F>,
}

impl<Item, Err, O, F> Observer<Item, Err> for RecoverObserver<O, F>
where
  O: Observer<Item, Err>,
  F: Fn(Err) -> Item,
{
  fn next(&mut self, value: Item) { self.observer.next(value) }

  fn error(&mut self, err: Err) { self.observer.next((self.recover)(err)) }

  fn complete(&mut self) { self.observer.complete() }
}
