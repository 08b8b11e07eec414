use crate::observable::Observable;

impl<Item, Err> Observable<Item, Err>
where
  Item: Clone + 'static,
  Err: 'static,
{
  /// Emits `value` synchronously at subscription time, then delegates
  /// the same observer to the source. Cancellation is the source's own
  /// handle.
  pub fn start_with(self, value: Item) -> Observable<Item, Err> {
    Observable::new(move |mut observer| {
      observer.next(value.clone());
      self.raw_subscribe(observer)
    })
  }
}
