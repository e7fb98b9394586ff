use codec::Entry;

use rustc_hash::FxHashSet;

/// Per-run search settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions<E>
where
    E: Entry,
{
    /// Nodes which may neither be expanded nor relaxed into, such as
    /// failed relays. A banned start or goal is immediately unreachable.
    pub banned: FxHashSet<E>,

    /// Whether to retain a [`Frame`](crate::search::Frame) per expansion.
    /// Counters are maintained either way.
    pub record_frames: bool,
}

impl<E> Default for SearchOptions<E>
where
    E: Entry,
{
    fn default() -> Self {
        Self {
            banned: FxHashSet::default(),
            record_frames: true,
        }
    }
}

impl<E> SearchOptions<E>
where
    E: Entry,
{
    pub fn with_banned(mut self, banned: impl IntoIterator<Item = E>) -> Self {
        self.banned.extend(banned);
        self
    }

    pub fn without_frames(self) -> Self {
        Self {
            record_frames: false,
            ..self
        }
    }

    #[inline]
    pub fn is_banned(&self, node: &E) -> bool {
        self.banned.contains(node)
    }
}
