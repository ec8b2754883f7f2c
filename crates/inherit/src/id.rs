//! Identifier generation.
//!
//! Identifiers are unique across the whole hierarchy, whichever tables an
//! entity's rows end up in. One generator is created with the [`Db`] and
//! shared by every clone of the handle.
//!
//! [`Db`]: crate::Db

use inherit_core::stmt::Id;
use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

/// Source of identifiers for entities inserted without one.
pub trait IdGenerator: fmt::Debug + Send + Sync + 'static {
    /// Returns an identifier no earlier call returned.
    fn next_id(&self) -> Id;

    /// Called with every explicitly supplied identifier before it is
    /// written.
    fn observe(&self, id: Id) {
        let _ = id;
    }
}

/// Counts up from 1, skipping past any identifier supplied explicitly.
#[derive(Debug)]
pub struct Sequence {
    next: AtomicU64,
}

impl Sequence {
    pub fn new() -> Sequence {
        Sequence::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Sequence {
        Sequence {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Sequence::new()
    }
}

impl IdGenerator for Sequence {
    fn next_id(&self) -> Id {
        Id(self.next.fetch_add(1, Ordering::Relaxed))
    }

    fn observe(&self, id: Id) {
        self.next.fetch_max(id.0.saturating_add(1), Ordering::Relaxed);
    }
}

/// Random 63-bit identifiers. No coordination between handles is needed,
/// at the cost of unordered identifiers.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> Id {
        loop {
            let id = rand::random::<u64>() >> 1;
            if id != 0 {
                return Id(id);
            }
        }
    }
}
