use crate::observable::Observable;
use crate::observer::Observer;
use std::rc::Rc;

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Emits only the values the predicate accepts; errors and completion
  /// pass through unchanged.
  pub fn filter<F>(self, predicate: F) -> Observable<Item, Err>
  where
    F: Fn(&Item) -> bool + 'static,
  {
    let predicate = Rc::new(predicate);
    Observable::new(move |observer| {
      self.actual_subscribe(FilterObserver {
        observer,
        predicate: predicate.clone(),
      })
    })
  }
}

struct FilterObserver<O, F> {
  observer: O,
  predicate: Rc<F>,
}

impl<Item, Err, O, F> Observer<Item, Err> for FilterObserver<O, F>
where
  O: Observer<Item, Err>,
  F: Fn(&Item) -> bool,
{
  fn next(&mut self, value: Item) {
    if (self.predicate)(&value) {
      self.observer.next(value)
    }
  }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) { self.observer.complete() }
}
