use crate::Entry;

/// A directed arc between two identifiers with a traversal weight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge<E>
where
    E: Entry,
{
    pub source: E,
    pub target: E,
    pub weight: f64,
}

impl<E> Edge<E>
where
    E: Entry,
{
    pub fn new(source: E, target: E, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// The same arc travelled in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }
}
