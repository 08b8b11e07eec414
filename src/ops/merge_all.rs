use crate::observable::Observable;
use crate::observer::{BoxObserver, Observer};
use crate::subscription::Subscription;
use std::{cell::RefCell, rc::Rc};

impl<Item: 'static, Err: 'static> Observable<Observable<Item, Err>, Err> {
  /// Flattens an observable of observables by subscribing every arriving
  /// inner observable immediately, with no concurrency limit.
  ///
  /// Values and errors from the outer source and from every inner pass
  /// straight through; sibling inners are not cancelled when one of them
  /// errors. The flattened stream completes exactly when the outer
  /// source has completed and no inner subscription is still live.
  ///
  /// The returned handle cancels the outer subscription and every inner
  /// subscription started so far.
  pub fn merge_all(self) -> Observable<Item, Err> {
    Observable::new(move |observer| {
      let state = Rc::new(RefCell::new(FlattenState {
        observer,
        live_inners: 0,
        outer_done: false,
      }));

      let subscription = Subscription::new();
      let outer_sub = self.actual_subscribe(OuterObserver {
        state,
        subscription: subscription.clone(),
      });
      subscription.add(outer_sub);
      subscription
    })
  }
}

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Maps every value to an observable and merges all of them:
  /// `map(f).merge_all()`.
  pub fn chain<B, F>(self, f: F) -> Observable<B, Err>
  where
    B: 'static,
    F: Fn(Item) -> Observable<B, Err> + 'static,
  {
    self.map(f).merge_all()
  }
}

struct FlattenState<Item, Err> {
  observer: BoxObserver<Item, Err>,
  live_inners: usize,
  outer_done: bool,
}

struct OuterObserver<Item, Err> {
  state: Rc<RefCell<FlattenState<Item, Err>>>,
  subscription: Subscription,
}

impl<Item: 'static, Err: 'static> Observer<Observable<Item, Err>, Err>
  for OuterObserver<Item, Err>
{
  fn next(&mut self, inner: Observable<Item, Err>) {
    self.state.borrow_mut().live_inners += 1;
    let inner_sub =
      inner.actual_subscribe(InnerObserver { state: self.state.clone() });
    self.subscription.add(inner_sub);
  }

  fn error(&mut self, err: Err) { self.state.borrow_mut().observer.error(err) }

  fn complete(&mut self) {
    let mut state = self.state.borrow_mut();
    state.outer_done = true;
    if state.live_inners == 0 {
      state.observer.complete();
    }
  }
}

struct InnerObserver<Item, Err> {
  state: Rc<RefCell<FlattenState<Item, Err>>>,
}

impl<Item, Err> Observer<Item, Err> for InnerObserver<Item, Err> {
  fn next(&mut self, value: Item) {
    self.state.borrow_mut().observer.next(value)
  }

  fn error(&mut self, err: Err) { self.state.borrow_mut().observer.error(err) }

  fn complete(&mut self) {
    let mut state = self.state.borrow_mut();
    state.live_inners -= 1;
    if state.live_inners == 0 && state.outer_done {
      state.observer.complete();
    }
  }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;
  use crate::test_util::manual_source;
  use std::{cell::RefCell, rc::Rc};

  #[test]
  fn flattens_synchronous_inners() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let (values, completions) = (log.clone(), log.clone());

    observable::of(observable::of(1))
      .concat(observable::of(observable::of(2)))
      .merge_all()
      .subscribe_complete(
        move |v| values.borrow_mut().push(v.to_string()),
        move || completions.borrow_mut().push("complete".into()),
      );

    assert_eq!(*log.borrow(), vec!["1", "2", "complete"]);
  }

  #[test]
  fn inners_run_concurrently() {
    let (outer, outer_source) =
      manual_source::<Observable<i32, ()>, ()>();
    let (first, first_source) = manual_source::<i32, ()>();
    let (second, second_source) = manual_source::<i32, ()>();

    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = values.clone();
    outer_source
      .merge_all()
      .subscribe(move |v| sink.borrow_mut().push(v));

    outer.next(first_source);
    outer.next(second_source);
    assert!(first.is_subscribed());
    assert!(second.is_subscribed());

    second.next(20);
    first.next(10);
    assert_eq!(*values.borrow(), vec![20, 10]);
  }

  #[test]
  fn completes_when_outer_and_all_inners_are_done() {
    let (outer, outer_source) =
      manual_source::<Observable<i32, ()>, ()>();
    let (first, first_source) = manual_source::<i32, ()>();
    let (second, second_source) = manual_source::<i32, ()>();

    let completed = Rc::new(RefCell::new(false));
    let c = completed.clone();
    outer_source
      .merge_all()
      .subscribe_complete(|_| {}, move || *c.borrow_mut() = true);

    outer.next(first_source);
    outer.next(second_source);
    outer.complete();
    assert!(!*completed.borrow());
    first.complete();
    assert!(!*completed.borrow());
    second.complete();
    assert!(*completed.borrow());
  }

  #[test]
  fn completes_when_outer_finishes_after_all_inners() {
    let (outer, outer_source) =
      manual_source::<Observable<i32, ()>, ()>();

    let completed = Rc::new(RefCell::new(false));
    let c = completed.clone();
    outer_source
      .merge_all()
      .subscribe_complete(|_| {}, move || *c.borrow_mut() = true);

    outer.next(observable::of(1));
    outer.next(observable::of(2));
    // every inner already ran to completion synchronously
    assert!(!*completed.borrow());
    outer.complete();
    assert!(*completed.borrow());
  }

  #[test]
  fn inner_errors_pass_through() {
    let (outer, outer_source) =
      manual_source::<Observable<i32, &'static str>, &'static str>();

    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = errors.clone();
    outer_source
      .merge_all()
      .subscribe_err(|_| {}, move |e| sink.borrow_mut().push(e));

    outer.next(observable::throw::<i32, _>("boom"));
    assert_eq!(*errors.borrow(), vec!["boom"]);
  }

  #[test]
  fn unsubscribe_cancels_outer_and_inners() {
    let (outer, outer_source) =
      manual_source::<Observable<i32, ()>, ()>();
    let (inner, inner_source) = manual_source::<i32, ()>();

    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = values.clone();
    let mut subscription = outer_source
      .merge_all()
      .subscribe(move |v| sink.borrow_mut().push(v));

    outer.next(inner_source);
    assert!(inner.is_subscribed());

    subscription.unsubscribe();
    assert!(outer.is_cancelled());
    assert!(inner.is_cancelled());

    inner.next(1);
    assert!(values.borrow().is_empty());
  }

  #[test]
  fn chain_maps_then_merges() {
    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = values.clone();

    observable::of(2)
      .chain(|v| observable::of(v * 10))
      .subscribe(move |v| sink.borrow_mut().push(v));
    assert_eq!(*values.borrow(), vec![20]);
  }
}
