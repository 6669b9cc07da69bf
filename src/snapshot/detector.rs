use super::changed;
use super::Digest;
use super::ValueSubset;

/// Remembers the last observed digest of a subset
#[derive(Debug, Default)]
pub(crate) struct ChangeDetector {
    last: Option<Digest>,
}

impl ChangeDetector {
    /// Returns true when `current` differs from the previous observation.
    pub(crate) fn observe(
        &mut self,
        current: &ValueSubset,
    ) -> bool {
        let (is_changed, digest) = changed(self.last.as_ref(), current);
        self.last = Some(digest);
        is_changed
    }

    pub(crate) fn last(&self) -> Option<&Digest> {
        self.last.as_ref()
    }
}
