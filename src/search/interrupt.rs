//! Cooperative cancellation of a running search.
//!
//! The engine polls its interrupt once at the top of every expansion.
//! A search that observes an interrupt returns straight away with the
//! trace gathered so far and an [`Outcome::Cancelled`](crate::search::Outcome).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

pub trait Interrupt {
    fn interrupted(&self) -> bool;
}

/// Never interrupts, the search always runs to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Interrupt for Never {
    #[inline]
    fn interrupted(&self) -> bool {
        false
    }
}

/// A cancellation flag, raised from any thread.
impl Interrupt for AtomicBool {
    #[inline]
    fn interrupted(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T> Interrupt for &T
where
    T: Interrupt + ?Sized,
{
    #[inline]
    fn interrupted(&self) -> bool {
        (**self).interrupted()
    }
}

impl<T> Interrupt for Arc<T>
where
    T: Interrupt + ?Sized,
{
    #[inline]
    fn interrupted(&self) -> bool {
        (**self).interrupted()
    }
}

/// A counter of issued requests. Advancing the generation supersedes
/// every [`Ticket`] issued before it.
///
/// ```rust
/// use pathway::search::{Generation, Interrupt};
///
/// let generation = Generation::default();
/// let first = generation.ticket();
/// assert!(!first.interrupted());
///
/// let second = generation.advance();
/// assert!(first.interrupted());
/// assert!(!second.interrupted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    /// A ticket for the current generation.
    pub fn ticket(&self) -> Ticket {
        Ticket {
            current: Arc::clone(&self.0),
            issued: self.0.load(Ordering::Acquire),
        }
    }

    /// Supersedes all outstanding tickets, returning one for the new generation.
    pub fn advance(&self) -> Ticket {
        let issued = self.0.fetch_add(1, Ordering::AcqRel) + 1;

        Ticket {
            current: Arc::clone(&self.0),
            issued,
        }
    }
}

/// Interrupts once its [`Generation`] has moved on.
#[derive(Debug, Clone)]
pub struct Ticket {
    current: Arc<AtomicU64>,
    issued: u64,
}

impl Interrupt for Ticket {
    #[inline]
    fn interrupted(&self) -> bool {
        self.current.load(Ordering::Acquire) != self.issued
    }
}
