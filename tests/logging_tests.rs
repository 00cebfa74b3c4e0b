//! Diagnostics emitted through `tracing`.
//!
//! Each test installs a thread-local fmt subscriber writing into a shared
//! buffer and checks the rendered events.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use persistent_collection::prelude::*;
use rstest::rstest;
use tracing::Level;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(action: F) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, action);
    buffer.contents()
}

#[rstest]
fn test_rejected_write_is_logged() {
    let output = capture(|| {
        let mut vector = Vector::from(vec![1, 2, 3]);
        let _ = vector.set(0, 5);
    });
    assert!(output.contains("rejected write to immutable collection"));
    assert!(output.contains("operation=\"set\""));
    assert!(output.contains("DEBUG"));
}

#[rstest]
fn test_rejected_unset_is_logged() {
    let output = capture(|| {
        let mut collection = KeyedCollection::from_entries([("a", 1)]);
        let _ = collection.unset(&"a");
    });
    assert!(output.contains("operation=\"unset\""));
    assert!(output.contains("key=a"));
}

#[rstest]
fn test_missing_key_is_traced() {
    let output = capture(|| {
        let vector = Vector::from(vec![1, 2, 3]);
        let _ = vector.get(7);
    });
    assert!(output.contains("no item at key"));
    assert!(output.contains("key=7"));
    assert!(output.contains("TRACE"));
}

#[rstest]
fn test_negative_index_is_traced() {
    let output = capture(|| {
        let vector = Vector::from(vec![1, 2, 3]);
        let _ = vector.get(-2);
    });
    assert!(output.contains("index=-2"));
}

#[rstest]
fn test_rejected_filter_capability_is_logged() {
    let output = capture(|| {
        let vector = Vector::from(vec![1, 2, 3]);
        let _ = vector.filter_with(&"not a predicate");
    });
    assert!(output.contains("rejected filter capability"));
    assert!(output.contains("i32"));
}

#[rstest]
fn test_successful_reads_are_silent() {
    let output = capture(|| {
        let vector = Vector::from(vec![1, 2, 3]);
        let _ = vector.get(0);
        let _ = vector.head();
        let _ = vector.filter(|item| *item > 1);
    });
    assert!(output.is_empty());
}
