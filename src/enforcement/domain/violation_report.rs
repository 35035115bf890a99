use super::DependencyReference;
use std::fmt::Write as _;

/// Accumulates violating dependencies into the text appended to the
/// build-stopping error.
///
/// Each violation contributes a `group:artifact:version` line followed by a
/// trail line: `- project path: X` for a single trail entry, or
/// `- project paths: A, B, C` for several. References without a trail get no
/// trail line.
#[derive(Debug, Default)]
pub struct ViolationReport {
    lines: String,
    count: usize,
}

impl ViolationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, reference: &DependencyReference) {
        let _ = write!(self.lines, "\n{}", reference);
        let trail = reference.dependency_trail();
        if trail.len() == 1 {
            let _ = write!(self.lines, "\n - project path: {}", trail[0]);
        } else if !trail.is_empty() {
            self.lines.push_str("\n - project paths:");
            for entry in trail {
                let _ = write!(self.lines, " {},", entry);
            }
            // Drop the trailing separator.
            self.lines.pop();
        }
        self.count += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn violation_count(&self) -> usize {
        self.count
    }

    /// The accumulated report body. Every line, including the first, starts
    /// with a newline so the text reads correctly after the banner.
    pub fn into_report(self) -> String {
        self.lines
    }
}
