use crate::observable::Observable;
use crate::subscription::Subscription;

/// Creates an observable producing a single value.
///
/// Completes immediately after emitting the value given. Never emits an
/// error. The value is cloned for every subscription, since each
/// subscription re-runs the producer.
///
/// # Examples
///
/// ```
/// use rill::prelude::*;
///
/// observable::of(123).subscribe(|v| println!("{},", v));
/// ```
pub fn of<Item>(value: Item) -> Observable<Item, ()>
where
  Item: Clone + 'static,
{
  Observable::new(move |mut observer| {
    observer.next(value.clone());
    observer.complete();
    Subscription::default()
  })
}

/// Creates an observable that emits no value and completes immediately.
pub fn empty<Item: 'static>() -> Observable<Item, ()> {
  Observable::new(|mut observer| {
    observer.complete();
    Subscription::default()
  })
}

/// Creates an observable that signals the error given and then still
/// signals completion.
///
/// The trailing completion is part of the protocol here: an error does
/// not implicitly end the subscription lifecycle, the producer ends it
/// explicitly.
pub fn throw<Item: 'static, Err>(err: Err) -> Observable<Item, Err>
where
  Err: Clone + 'static,
{
  Observable::new(move |mut observer| {
    observer.error(err.clone());
    observer.complete();
    Subscription::default()
  })
}
