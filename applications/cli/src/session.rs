//! The currently selected audio file
//!
//! At most one decoded buffer is current. Results computed from a buffer are
//! tagged with the generation of the selection they came from, and a result
//! whose generation is no longer current is dropped instead of delivered.

use snip_core::SampleBuffer;
use std::sync::Arc;

/// Monotonic counter identifying one file selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// A decoded file together with the generation it was selected under
#[derive(Debug, Clone)]
pub struct Selection {
    pub generation: Generation,
    pub name: String,
    pub buffer: Arc<SampleBuffer>,
}

impl Selection {
    /// Tag a value derived from this selection
    pub fn tag<T>(&self, value: T) -> Tagged<T> {
        Tagged {
            generation: self.generation,
            value,
        }
    }
}

/// A value computed from a particular selection
#[derive(Debug)]
pub struct Tagged<T> {
    generation: Generation,
    value: T,
}

impl<T> Tagged<T> {
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct Session {
    next_generation: u64,
    current: Option<Selection>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `buffer` the current selection, dropping the previous one
    pub fn select(&mut self, name: impl Into<String>, buffer: SampleBuffer) -> Generation {
        self.next_generation += 1;
        let generation = Generation(self.next_generation);

        self.current = Some(Selection {
            generation,
            name: name.into(),
            buffer: Arc::new(buffer),
        });

        tracing::debug!(generation = generation.0, "Selected new file");
        generation
    }

    /// The current selection, if any
    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current
            .as_ref()
            .is_some_and(|selection| selection.generation == generation)
    }

    /// Forget the current selection
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Unwrap a result if it was computed from the current selection
    ///
    /// Returns `None` for results derived from a superseded or cleared selection.
    pub fn accept<T>(&self, tagged: Tagged<T>) -> Option<T> {
        if self.is_current(tagged.generation) {
            Some(tagged.value)
        } else {
            tracing::debug!(generation = tagged.generation.0, "Discarding stale result");
            None
        }
    }
}
