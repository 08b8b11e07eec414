//! # rill: a minimal push-based observable stream library
//!
//! An [`Observable`] is a value wrapping exactly one subscription
//! function. Subscribing hands it a three-channel [`Observer`] (`next`,
//! `error`, `complete`) and yields a [`Subscription`] handle that cancels
//! the activation. On top of that protocol sits a small combinator
//! algebra: transform (`map`, `filter`, `recover`), combine (`merge`,
//! `concat`, `zip`, `zip_switch`, `start_with`) and flatten
//! (`merge_all`, `concat_all`, and the derived `chain`/`concat_map`).
//!
//! ```
//! use rill::prelude::*;
//! use std::{cell::RefCell, rc::Rc};
//!
//! let values = Rc::new(RefCell::new(Vec::new()));
//! let sink = values.clone();
//! observable::of(1)
//!   .concat(observable::of(2))
//!   .filter(|v| v % 2 == 0)
//!   .map(|v| v * 10)
//!   .start_with(0)
//!   .subscribe(move |v| sink.borrow_mut().push(v));
//! assert_eq!(*values.borrow(), vec![0, 20]);
//! ```
//!
//! Everything is single-threaded and callback-driven: there is no
//! scheduler, no locking, and no buffering runtime between producers and
//! consumers. An observable performs no work until subscribed, and every
//! subscription re-runs the producer with fresh state.
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Subscription`]: subscription::Subscription

pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod subscription;

#[cfg(test)]
pub(crate) mod test_util;

pub use prelude::*;
