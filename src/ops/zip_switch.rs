use crate::observable::Observable;
use crate::observer::{BoxObserver, Observer};
use crate::subscription::Subscription;
use std::{cell::RefCell, rc::Rc};

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Sampling zip: every value from `self` is paired with the most
  /// recent value from `other`, once `other` has emitted at least once.
  /// Values from `other` never produce output themselves, they only
  /// refresh the sample. Completes after both sides have completed.
  ///
  /// `other` is subscribed before `self`, so with a synchronous sampled
  /// side its last value is already in place when `self` starts
  /// emitting.
  pub fn zip_switch<B, C, F>(
    self,
    other: Observable<B, Err>,
    zipper: F,
  ) -> Observable<C, Err>
  where
    B: Clone + 'static,
    C: 'static,
    F: Fn(Item, B) -> C + 'static,
  {
    let zipper = Rc::new(zipper);
    Observable::new(move |observer| {
      let state = Rc::new(RefCell::new(ZipSwitchState {
        observer,
        latest: None,
        done_a: false,
        done_b: false,
      }));

      let subscription = Subscription::new();
      subscription.add(other.actual_subscribe(SampleObserver {
        state: state.clone(),
      }));
      subscription.add(self.actual_subscribe(DrivingObserver {
        state,
        zipper: zipper.clone(),
      }));
      subscription
    })
  }
}

struct ZipSwitchState<B, C, Err> {
  observer: BoxObserver<C, Err>,
  latest: Option<B>,
  done_a: bool,
  done_b: bool,
}

impl<B, C, Err> ZipSwitchState<B, C, Err> {
  fn complete_if_both_done(&mut self) {
    if self.done_a && self.done_b {
      self.observer.complete();
    }
  }
}

/// Observes the driving side; each value emits a pair.
struct DrivingObserver<B, C, Err, F> {
  state: Rc<RefCell<ZipSwitchState<B, C, Err>>>,
  zipper: Rc<F>,
}

/// Observes the sampled side; each value only refreshes the sample.
struct SampleObserver<B, C, Err> {
  state: Rc<RefCell<ZipSwitchState<B, C, Err>>>,
}

impl<A, B, C, Err, F> Observer<A, Err> for DrivingObserver<B, C, Err, F>
where
  B: Clone,
  F: Fn(A, B) -> C,
{
  fn next(&mut self, value: A) {
    let mut state = self.state.borrow_mut();
    if let Some(sample) = state.latest.clone() {
      let paired = (self.zipper)(value, sample);
      state.observer.next(paired);
    }
  }

  fn error(&mut self, err: Err) { self.state.borrow_mut().observer.error(err) }

  fn complete(&mut self) {
    let mut state = self.state.borrow_mut();
    state.done_a = true;
    state.complete_if_both_done();
  }
}

impl<B, C, Err> Observer<B, Err> for SampleObserver<B, C, Err> {
  fn next(&mut self, value: B) {
    self.state.borrow_mut().latest = Some(value);
  }

  fn error(&mut self, err: Err) { self.state.borrow_mut().observer.error(err) }

  fn complete(&mut self) {
    let mut state = self.state.borrow_mut();
    state.done_b = true;
    state.complete_if_both_done();
  }
}
