//! Call records for the recursive solvers
//!
//! Records live in an arena ([`CallGraph::records`]); parent→child links are
//! a separate adjacency list used only for rendering. For the memoized solver
//! one record is shared by every parent that reaches the same range, so the
//! links describe a DAG drawn as a tree. For the naive solver every
//! invocation owns a fresh record and the links are the recursion tree.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::time::Duration;

use crate::piles::Interval;

/// Index of a record inside its [`CallGraph`].
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub usize);

/// One recursive call site `f(i, j)`.
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    /// Sub-range the call solves.
    pub range: Interval,
    /// Recursion depth at which the range was first reached (root = 0).
    pub depth: usize,
    /// Number of invocations attributed to this record.
    pub count: u64,
    /// Result, once known.
    pub result: Option<u64>,
}

/// Arena of call records plus rendering links.
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallGraph {
    records: Vec<CallRecord>,
    links: Vec<Vec<RecordId>>,
}

/// Aggregate shape of a call graph.
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStats {
    /// Number of records in the arena.
    pub records: usize,
    /// Number of parent→child links.
    pub links: usize,
    /// Deepest first-visit depth.
    pub max_depth: usize,
    /// Number of distinct sub-ranges reached.
    pub distinct_ranges: usize,
    /// Range invoked most often and its total invocation count.
    pub hottest: Option<(Interval, u64)>,
}

impl CallGraph {
    /// Empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_record(&mut self, range: Interval, depth: usize) -> RecordId {
        let id = RecordId(self.records.len());
        self.records.push(CallRecord {
            range,
            depth,
            count: 0,
            result: None,
        });
        self.links.push(Vec::new());
        id
    }

    pub(crate) fn record_mut(&mut self, id: RecordId) -> &mut CallRecord {
        &mut self.records[id.0]
    }

    /// Add `parent → child` unless that link already exists.
    pub(crate) fn link(&mut self, parent: RecordId, child: RecordId) {
        let children = &mut self.links[parent.0];
        if !children.contains(&child) {
            children.push(child);
        }
    }

    /// Root record (the first one created), if any.
    pub fn root(&self) -> Option<RecordId> {
        if self.records.is_empty() {
            None
        } else {
            Some(RecordId(0))
        }
    }

    /// Record by id.
    pub fn record(&self, id: RecordId) -> &CallRecord {
        &self.records[id.0]
    }

    /// Children linked from `id`, in first-visit order.
    pub fn children(&self, id: RecordId) -> &[RecordId] {
        &self.links[id.0]
    }

    /// All records in creation order.
    pub fn records(&self) -> &[CallRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no call was ever recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of invocation counts over every record.
    pub fn total_invocations(&self) -> u64 {
        self.records.iter().map(|record| record.count).sum()
    }

    /// Shape summary.
    pub fn stats(&self) -> GraphStats {
        let mut per_range: HashMap<Interval, u64> = HashMap::new();
        for record in &self.records {
            *per_range.entry(record.range).or_insert(0) += record.count;
        }

        // Ties resolve to the smaller range so the report is deterministic.
        let hottest = per_range
            .iter()
            .max_by(|(ra, ca), (rb, cb)| ca.cmp(cb).then_with(|| rb.cmp(ra)))
            .map(|(range, count)| (*range, *count));

        GraphStats {
            records: self.records.len(),
            links: self.links.iter().map(Vec::len).sum(),
            max_depth: self.records.iter().map(|r| r.depth).max().unwrap_or(0),
            distinct_ranges: per_range.len(),
            hottest,
        }
    }

    /// Indented text rendering from the root, down to `max_depth` levels.
    ///
    /// Each line reads `[i, j] ×count = result`. Shared memoized records are
    /// printed under every parent that links to them.
    pub fn render(&self, max_depth: usize) -> String {
        let mut out = String::new();
        if let Some(root) = self.root() {
            self.render_node(root, 0, max_depth, &mut out);
        }
        out
    }

    fn render_node(&self, id: RecordId, level: usize, max_depth: usize, out: &mut String) {
        let record = self.record(id);
        let _ = write!(out, "{}{} ×{}", "  ".repeat(level), record.range, record.count);
        if let Some(result) = record.result {
            let _ = write!(out, " = {}", result);
        }
        out.push('\n');

        if level >= max_depth {
            return;
        }
        for &child in self.children(id) {
            self.render_node(child, level + 1, max_depth, out);
        }
    }
}

/// Result of a recursive solver.
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct RecursionOutcome {
    /// Minimum total merge cost.
    pub total_cost: u64,
    /// Number of invocations of the recursive function, cached hits included.
    pub call_count: u64,
    /// Instrumented call records.
    pub graph: CallGraph,
    /// Wall-clock time spent inside the recursion.
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_are_deduplicated() {
        let mut graph = CallGraph::new();
        let root = graph.push_record(Interval::new(0, 1), 0);
        let child = graph.push_record(Interval::single(0), 1);
        graph.link(root, child);
        graph.link(root, child);
        assert_eq!(graph.children(root), &[child]);
        assert_eq!(graph.stats().links, 1);
    }

    #[test]
    fn test_render_respects_depth() {
        let mut graph = CallGraph::new();
        let root = graph.push_record(Interval::new(0, 1), 0);
        let left = graph.push_record(Interval::single(0), 1);
        let right = graph.push_record(Interval::single(1), 1);
        graph.record_mut(root).count = 1;
        graph.record_mut(root).result = Some(3);
        graph.record_mut(left).count = 1;
        graph.record_mut(right).count = 1;
        graph.link(root, left);
        graph.link(root, right);

        assert_eq!(graph.render(0), "[0, 1] ×1 = 3\n");
        assert_eq!(graph.render(1), "[0, 1] ×1 = 3\n  [0] ×1\n  [1] ×1\n");
    }

    #[test]
    fn test_stats_aggregate_by_range() {
        let mut graph = CallGraph::new();
        let root = graph.push_record(Interval::new(0, 2), 0);
        graph.record_mut(root).count = 1;
        for _ in 0..3 {
            let id = graph.push_record(Interval::single(1), 2);
            graph.record_mut(id).count = 1;
            graph.link(root, id);
        }
        let stats = graph.stats();
        assert_eq!(stats.records, 4);
        assert_eq!(stats.distinct_ranges, 2);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.hottest, Some((Interval::single(1), 3)));
        assert_eq!(graph.total_invocations(), 4);
    }
}
