use crate::observable::Observable;
use crate::subscription::Subscription;
use std::{cell::RefCell, rc::Rc};

/// The minimal capability set of a readable push stream: notification
/// registration plus a synchronous, non-blocking read.
///
/// `read` returns `None` as the no-data sentinel. Listener registration
/// returns an id so that the readable listener can be removed again;
/// error and end listeners fire at most once each. Implementations must
/// not invoke listeners re-entrantly from inside a registration or
/// `read` call.
pub trait PushStream {
  type Item;
  type Err;

  /// Register a data-available listener; returns its listener id.
  fn on_readable(&mut self, listener: Box<dyn FnMut()>) -> usize;

  /// Remove a previously registered data-available listener.
  fn remove_readable(&mut self, id: usize);

  /// Synchronously read the next available record, or `None`.
  fn read(&mut self) -> Option<Self::Item>;

  fn on_error(&mut self, listener: Box<dyn FnOnce(Self::Err)>);

  fn on_end(&mut self, listener: Box<dyn FnOnce()>);
}

/// Bridges a readable push stream into an observable.
///
/// Every subscription invokes `factory` to obtain a stream. On each
/// data-available notification all currently readable records are
/// drained and forwarded as values; the stream's error notification
/// becomes the error channel and its end notification the completion.
/// Cancelling removes the readable listener but leaves the stream itself
/// untouched.
pub fn from_push_stream<S, F>(factory: F) -> Observable<S::Item, S::Err>
where
  S: PushStream + 'static,
  S::Item: 'static,
  S::Err: 'static,
  F: Fn() -> S + 'static,
{
  Observable::new(move |observer| {
    let stream = Rc::new(RefCell::new(factory()));
    let observer = Rc::new(RefCell::new(observer));

    let drain_stream = stream.clone();
    let drain_observer = observer.clone();
    let listener_id = stream.borrow_mut().on_readable(Box::new(move || {
      loop {
        let record = drain_stream.borrow_mut().read();
        match record {
          Some(value) => drain_observer.borrow_mut().next(value),
          None => break,
        }
      }
    }));

    let error_observer = observer.clone();
    stream.borrow_mut().on_error(Box::new(move |err| {
      error_observer.borrow_mut().error(err);
    }));

    let end_observer = observer;
    stream.borrow_mut().on_end(Box::new(move || {
      end_observer.borrow_mut().complete();
    }));

    Subscription::from_fn(move || {
      stream.borrow_mut().remove_readable(listener_id);
    })
  })
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::prelude::*;
  use std::collections::VecDeque;

  /// In-memory push stream the tests drive by hand. Clones share the
  /// same state, so the test keeps one handle and the adapter owns
  /// another.
  #[derive(Clone, Default)]
  struct RecordStream {
    inner: Rc<RefCell<RecordStreamInner>>,
  }

  #[derive(Default)]
  struct RecordStreamInner {
    buffer: VecDeque<i32>,
    next_listener_id: usize,
    readable: Vec<(usize, Rc<RefCell<Box<dyn FnMut()>>>)>,
    error: Option<Box<dyn FnOnce(&'static str)>>,
    end: Option<Box<dyn FnOnce()>>,
  }

  impl RecordStream {
    fn push(&self, records: &[i32]) {
      let listeners: Vec<_> = {
        let mut inner = self.inner.borrow_mut();
        inner.buffer.extend(records.iter().copied());
        inner.readable.iter().map(|(_, l)| l.clone()).collect()
      };
      for listener in listeners {
        (listener.borrow_mut())();
      }
    }

    fn fail(&self, err: &'static str) {
      let listener = self.inner.borrow_mut().error.take();
      if let Some(listener) = listener {
        listener(err);
      }
    }

    fn end(&self) {
      let listener = self.inner.borrow_mut().end.take();
      if let Some(listener) = listener {
        listener();
      }
    }

    fn readable_listeners(&self) -> usize {
      self.inner.borrow().readable.len()
    }
  }

  impl PushStream for RecordStream {
    type Item = i32;
    type Err = &'static str;

    fn on_readable(&mut self, listener: Box<dyn FnMut()>) -> usize {
      let mut inner = self.inner.borrow_mut();
      let id = inner.next_listener_id;
      inner.next_listener_id += 1;
      inner.readable.push((id, Rc::new(RefCell::new(listener))));
      id
    }

    fn remove_readable(&mut self, id: usize) {
      self.inner.borrow_mut().readable.retain(|(l_id, _)| *l_id != id);
    }

    fn read(&mut self) -> Option<i32> {
      self.inner.borrow_mut().buffer.pop_front()
    }

    fn on_error(&mut self, listener: Box<dyn FnOnce(&'static str)>) {
      self.inner.borrow_mut().error = Some(listener);
    }

    fn on_end(&mut self, listener: Box<dyn FnOnce()>) {
      self.inner.borrow_mut().end = Some(listener);
    }
  }

  #[test]
  fn drains_all_available_records_per_notification() {
    let stream = RecordStream::default();
    let handle = stream.clone();
    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = values.clone();

    observable::from_push_stream(move || stream.clone())
      .subscribe(move |v| sink.borrow_mut().push(v));

    handle.push(&[1, 2, 3]);
    handle.push(&[4]);
    assert_eq!(*values.borrow(), vec![1, 2, 3, 4]);
  }

  #[test]
  fn end_completes_and_error_forwards() {
    let stream = RecordStream::default();
    let handle = stream.clone();
    let log = Rc::new(RefCell::new(Vec::new()));
    let (errors, completions) = (log.clone(), log.clone());

    observable::from_push_stream(move || stream.clone()).subscribe_all(
      |_| {},
      move |e| errors.borrow_mut().push(format!("error {e}")),
      move || completions.borrow_mut().push("complete".into()),
    );

    handle.fail("broken pipe");
    handle.end();
    assert_eq!(*log.borrow(), vec!["error broken pipe", "complete"]);
  }

  #[test]
  fn cancel_removes_the_readable_listener_only() {
    let stream = RecordStream::default();
    let handle = stream.clone();
    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = values.clone();

    let mut subscription =
      observable::from_push_stream(move || stream.clone())
        .subscribe(move |v| sink.borrow_mut().push(v));
    assert_eq!(handle.readable_listeners(), 1);

    subscription.unsubscribe();
    assert_eq!(handle.readable_listeners(), 0);

    handle.push(&[9]);
    assert!(values.borrow().is_empty());
    // the stream itself is still alive and buffering
    assert_eq!(handle.inner.borrow().buffer.len(), 1);
  }
}
