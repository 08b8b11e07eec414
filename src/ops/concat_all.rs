use crate::observable::Observable;
use crate::observer::{BoxObserver, Observer};
use crate::subscription::Subscription;
use std::{cell::RefCell, collections::VecDeque, rc::Rc};

impl<Item: 'static, Err: 'static> Observable<Observable<Item, Err>, Err> {
  /// Flattens an observable of observables one inner at a time.
  ///
  /// While an inner subscription is active, arriving inners queue up in
  /// an unbounded FIFO; when the active inner completes, the next queued
  /// one is subscribed. The flattened stream completes when the outer
  /// source has completed, nothing is active and the queue is empty.
  ///
  /// The returned handle cancels the outer subscription and whichever
  /// inner subscription is active.
  pub fn concat_all(self) -> Observable<Item, Err> {
    Observable::new(move |observer| {
      let state = Rc::new(RefCell::new(SequenceState {
        observer,
        waiting: VecDeque::new(),
        inner_active: false,
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
  /// Maps every value to an observable and concatenates all of them:
  /// `map(f).concat_all()`.
  pub fn concat_map<B, F>(self, f: F) -> Observable<B, Err>
  where
    B: 'static,
    F: Fn(Item) -> Observable<B, Err> + 'static,
  {
    self.map(f).concat_all()
  }
}

struct SequenceState<Item: 'static, Err: 'static> {
  observer: BoxObserver<Item, Err>,
  waiting: VecDeque<Observable<Item, Err>>,
  inner_active: bool,
  outer_done: bool,
}

struct OuterObserver<Item: 'static, Err: 'static> {
  state: Rc<RefCell<SequenceState<Item, Err>>>,
  subscription: Subscription,
}

impl<Item: 'static, Err: 'static> Observer<Observable<Item, Err>, Err>
  for OuterObserver<Item, Err>
{
  fn next(&mut self, inner: Observable<Item, Err>) {
    {
      let mut state = self.state.borrow_mut();
      if state.inner_active {
        state.waiting.push_back(inner);
        return;
      }
      state.inner_active = true;
    }
    let inner_sub = inner.actual_subscribe(InnerObserver {
      state: self.state.clone(),
      subscription: self.subscription.clone(),
    });
    self.subscription.add(inner_sub);
  }

  fn error(&mut self, err: Err) { self.state.borrow_mut().observer.error(err) }

  fn complete(&mut self) {
    let mut state = self.state.borrow_mut();
    state.outer_done = true;
    if !state.inner_active {
      state.observer.complete();
    }
  }
}

struct InnerObserver<Item: 'static, Err: 'static> {
  state: Rc<RefCell<SequenceState<Item, Err>>>,
  subscription: Subscription,
}

impl<Item, Err> Observer<Item, Err> for InnerObserver<Item, Err> {
  fn next(&mut self, value: Item) {
    self.state.borrow_mut().observer.next(value)
  }

  fn error(&mut self, err: Err) { self.state.borrow_mut().observer.error(err) }

  fn complete(&mut self) {
    // drain step: either resubscribe with the next queued inner, or go
    // idle and complete if the outer already has
    let next_inner = {
      let mut state = self.state.borrow_mut();
      match state.waiting.pop_front() {
        Some(inner) => Some(inner),
        None => {
          state.inner_active = false;
          if state.outer_done {
            state.observer.complete();
          }
          None
        }
      }
    };
    if let Some(inner) = next_inner {
      let inner_sub = inner.actual_subscribe(InnerObserver {
        state: self.state.clone(),
        subscription: self.subscription.clone(),
      });
      self.subscription.add(inner_sub);
    }
  }
}
