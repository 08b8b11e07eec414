//! Hand-driven sources for exercising interleaving and cancellation in
//! operator tests.

use crate::observable::Observable;
use crate::observer::{BoxObserver, Observer};
use crate::subscription::Subscription;
use std::{cell::RefCell, rc::Rc};

type Slot<Item, Err> = Rc<RefCell<Option<BoxObserver<Item, Err>>>>;

/// A cold source the test drives by hand through its [`SourceHandle`].
///
/// Supports one active subscription at a time; cancelling drops the
/// observer out of the slot, so later emissions go nowhere.
pub(crate) fn manual_source<Item: 'static, Err: 'static>(
) -> (SourceHandle<Item, Err>, Observable<Item, Err>) {
  let slot: Slot<Item, Err> = Rc::new(RefCell::new(None));
  let subscribe_slot = slot.clone();
  let source = Observable::new(move |observer| {
    *subscribe_slot.borrow_mut() = Some(observer);
    let cancel_slot = subscribe_slot.clone();
    Subscription::from_fn(move || {
      cancel_slot.borrow_mut().take();
    })
  });
  (SourceHandle { slot }, source)
}

pub(crate) struct SourceHandle<Item, Err> {
  slot: Slot<Item, Err>,
}

impl<Item, Err> SourceHandle<Item, Err> {
  pub(crate) fn next(&self, value: Item) {
    if let Some(observer) = self.slot.borrow_mut().as_mut() {
      observer.next(value);
    }
  }

  pub(crate) fn error(&self, err: Err) {
    if let Some(observer) = self.slot.borrow_mut().as_mut() {
      observer.error(err);
    }
  }

  pub(crate) fn complete(&self) {
    let observer = self.slot.borrow_mut().take();
    if let Some(mut observer) = observer {
      observer.complete();
    }
  }

  pub(crate) fn is_subscribed(&self) -> bool {
    self.slot.borrow().is_some()
  }

  pub(crate) fn is_cancelled(&self) -> bool { !self.is_subscribed() }
}
