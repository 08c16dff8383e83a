use crate::run::Run;

/// Stack of runs covering the already-scanned, still-unresolved prefix.
///
/// Two invariants hold after every `record` call:
/// 1. No two adjacent entries share a character - a character matching the
///    top run extends it instead of starting a new entry.
/// 2. No entry has reached the collapse threshold - a run that does is
///    evicted immediately, before the next character is recorded.
///
/// Read bottom-to-top, the stack spells out the reduced prefix of the
/// input scanned so far. Evicting the top can only expose a run with a
/// *different* character (invariant 1), so no further merging is possible
/// at that boundary until a later input character happens to match it.
#[derive(Debug, Default)]
pub(crate) struct RunTracker {
    runs: Vec<Run>,
}

impl RunTracker {
    /// Creates an empty tracker.
    pub(crate) fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Records the next input character, collapsing the top run if it
    /// reaches the threshold.
    pub(crate) fn record(&mut self, ch: char) {
        match self.runs.last_mut() {
            Some(top) if top.ch == ch => *top = top.incremented(),
            _ => self.runs.push(Run::new(ch)),
        }

        // Invariant 2: evict as soon as the top run qualifies.
        if self.runs.last().is_some_and(|top| top.meets_threshold()) {
            self.runs.pop();
        }
    }

    /// Materializes the tracked prefix, bottom of the stack first.
    pub(crate) fn into_string(self) -> String {
        let capacity = self.runs.iter().map(|r| r.len as usize).sum();
        let mut out = String::with_capacity(capacity);
        for run in self.runs {
            for _ in 0..run.len {
                out.push(run.ch);
            }
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn runs(&self) -> &[Run] {
        &self.runs
    }
}
