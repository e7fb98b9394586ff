/// The per-node search state, created on first discovery and
/// overwritten whenever a strictly cheaper `g` is found before
/// the node is expanded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SearchRecord {
    /// Record index of the predecessor, `None` for the start.
    pub parent: Option<usize>,
    pub g: f64,
    pub h: f64,
    /// Set once the node is expanded. Closed records are final.
    pub closed: bool,
}

impl SearchRecord {
    pub fn open(parent: Option<usize>, g: f64, h: f64) -> Self {
        Self {
            parent,
            g,
            h,
            closed: false,
        }
    }

    #[inline]
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}
