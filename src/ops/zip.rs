use crate::observable::Observable;
use crate::observer::{BoxObserver, Observer};
use crate::subscription::Subscription;
use std::{cell::RefCell, collections::VecDeque, rc::Rc};

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Pairs the i-th value of `self` with the i-th value of `other`, in
  /// arrival order per side, and emits `zipper(a_i, b_i)` once both
  /// exist. Each side buffers the values that have not been paired yet.
  ///
  /// Completion fires only after both sides have completed; trailing
  /// unmatched values still sitting in a buffer are dropped silently.
  /// One finished flag per side guards the completion check, so neither
  /// side can complete the pair on its own.
  pub fn zip<B, C, F>(
    self,
    other: Observable<B, Err>,
    zipper: F,
  ) -> Observable<C, Err>
  where
    B: 'static,
    C: 'static,
    F: Fn(Item, B) -> C + 'static,
  {
    let zipper = Rc::new(zipper);
    Observable::new(move |observer| {
      let state = Rc::new(RefCell::new(ZipState {
        observer,
        buffer_a: VecDeque::new(),
        buffer_b: VecDeque::new(),
        done_a: false,
        done_b: false,
      }));

      let subscription = Subscription::new();
      subscription.add(self.actual_subscribe(ZipAObserver {
        state: state.clone(),
        zipper: zipper.clone(),
      }));
      subscription.add(other.actual_subscribe(ZipBObserver {
        state,
        zipper: zipper.clone(),
      }));
      subscription
    })
  }
}

struct ZipState<A, B, C, Err> {
  observer: BoxObserver<C, Err>,
  buffer_a: VecDeque<A>,
  buffer_b: VecDeque<B>,
  done_a: bool,
  done_b: bool,
}

impl<A, B, C, Err> ZipState<A, B, C, Err> {
  fn complete_if_both_done(&mut self) {
    if self.done_a && self.done_b {
      self.observer.complete();
    }
  }
}

struct ZipAObserver<A, B, C, Err, F> {
  state: Rc<RefCell<ZipState<A, B, C, Err>>>,
  zipper: Rc<F>,
}

struct ZipBObserver<A, B, C, Err, F> {
  state: Rc<RefCell<ZipState<A, B, C, Err>>>,
  zipper: Rc<F>,
}

impl<A, B, C, Err, F> Observer<A, Err> for ZipAObserver<A, B, C, Err, F>
where
  F: Fn(A, B) -> C,
{
  fn next(&mut self, value: A) {
    let mut state = self.state.borrow_mut();
    match state.buffer_b.pop_front() {
      Some(b) => {
        let paired = (self.zipper)(value, b);
        state.observer.next(paired);
      }
      None => state.buffer_a.push_back(value),
    }
  }

  fn error(&mut self, err: Err) { self.state.borrow_mut().observer.error(err) }

  fn complete(&mut self) {
    let mut state = self.state.borrow_mut();
    state.done_a = true;
    state.complete_if_both_done();
  }
}

impl<A, B, C, Err, F> Observer<B, Err> for ZipBObserver<A, B, C, Err, F>
where
  F: Fn(A, B) -> C,
{
  fn next(&mut self, value: B) {
    let mut state = self.state.borrow_mut();
    match state.buffer_a.pop_front() {
      Some(a) => {
        let paired = (self.zipper)(a, value);
        state.observer.next(paired);
      }
      None => state.buffer_b.push_back(value),
    }
  }

  fn error(&mut self, err: Err) { self.state.borrow_mut().observer.error(err) }

  fn complete(&mut self) {
    let mut state = self.state.borrow_mut();
    state.done_b = true;
    state.complete_if_both_done();
  }
}
