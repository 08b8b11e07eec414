use crate::observable::Observable;
use crate::observer::Observer;
use std::rc::Rc;

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Creates a new stream which calls a closure on each value and emits
  /// its return. Errors and completion pass through unchanged.
  ///
  /// The closure is assumed total; a panic inside it propagates as a
  /// plain panic, it is not converted into an error signal.
  pub fn map<B, F>(self, f: F) -> Observable<B, Err>
  where
    B: 'static,
    F: Fn(Item) -> B + 'static,
  {
    let f = Rc::new(f);
    Observable::new(move |observer| {
      self.actual_subscribe(MapObserver { observer, map: f.clone() })
    })
  }
}

struct MapObserver<O, F> {
  observer: O,
  map: Rc<F>,
}

impl<Item, B, Err, O, F> Observer<Item, Err> for MapObserver<O, F>
where
  O: Observer<B, Err>,
  F: Fn(Item) -> B,
{
  fn next(&mut self, value: Item) { self.observer.next((self.map)(value)) }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) { self.observer.complete() }
}
