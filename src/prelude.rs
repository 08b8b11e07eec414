//! Re-exports of the types needed to build and consume observables.

pub use crate::observable;
pub use crate::observable::{
  from_promise, from_push_stream, Observable, PushStream, Thenable,
};
pub use crate::observer::{BoxObserver, Observer, SharedObserver};
pub use crate::subscription::{Subscription, SubscriptionLike, Teardown};
