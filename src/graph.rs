//! Random connection graphs within and between clusters.
//!
//! Edge sets are regenerated from scratch whenever the particle population
//! they index changes; there is no incremental diffing. Candidate pairs are
//! deduplicated by a linear scan over the accepted batch, which is O(n²) in
//! the edge count — fine for the tens of points these sketches use, a known
//! limit beyond that.

use crate::sample::CloudRng;

/// A line between two particles of the same cluster, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

/// A line between particles of two different clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanEdge {
    pub start_cluster: usize,
    pub end_cluster: usize,
    pub start: usize,
    pub end: usize,
}

/// Random edges within a box-contained cluster: the candidate count is drawn
/// from `[point_count, point_count * 2]`.
pub fn intra_box_edges(rng: &mut CloudRng, point_count: usize) -> Vec<Edge> {
    if point_count < 2 {
        return Vec::new();
    }
    let candidates = rng.random_int(point_count, point_count * 2);
    random_edges(rng, point_count, candidates)
}

/// Random edges within a stack cluster: sparser, the candidate count is drawn
/// from `[1, point_count * 2]`.
pub fn intra_stack_edges(rng: &mut CloudRng, point_count: usize) -> Vec<Edge> {
    if point_count < 2 {
        return Vec::new();
    }
    let candidates = rng.random_int(1, point_count * 2);
    random_edges(rng, point_count, candidates)
}

fn random_edges(rng: &mut CloudRng, point_count: usize, candidates: usize) -> Vec<Edge> {
    let mut edges: Vec<Edge> = Vec::new();
    for _ in 0..candidates {
        let start = rng.random_int(0, point_count - 1);
        let mut end = rng.random_int(0, point_count - 1);
        while start == end {
            end = rng.random_int(0, point_count - 1);
        }
        // Ordered-pair dedup within this batch
        if !edges.iter().any(|e| e.start == start && e.end == end) {
            edges.push(Edge { start, end });
        }
    }
    edges
}

/// Random edges between consecutive clusters in stack order.
///
/// For each adjacent pair of `order`, 1 to 5 candidate lines connect a random
/// particle in the nearer cluster to one in the farther cluster. `sizes`
/// holds each cluster's particle count; spans touching an empty cluster are
/// skipped. One `Vec` per span is returned so a caller can track which gap
/// each batch belongs to.
pub fn inter_cluster_edges(
    rng: &mut CloudRng,
    sizes: &[usize],
    order: &[usize],
) -> Vec<Vec<SpanEdge>> {
    let mut spans = Vec::new();
    for pair in order.windows(2) {
        let (start_cluster, end_cluster) = (pair[0], pair[1]);
        let (start_len, end_len) = (sizes[start_cluster], sizes[end_cluster]);
        if start_len == 0 || end_len == 0 {
            spans.push(Vec::new());
            continue;
        }
        let candidates = rng.random_int(1, 5);
        let mut batch: Vec<SpanEdge> = Vec::new();
        for _ in 0..candidates {
            let start = rng.random_int(0, start_len - 1);
            let mut end = rng.random_int(0, end_len - 1);
            while start == end && end_len > 1 {
                end = rng.random_int(0, end_len - 1);
            }
            if start == end {
                continue;
            }
            if !batch.iter().any(|e| e.start == start && e.end == end) {
                batch.push(SpanEdge {
                    start_cluster,
                    end_cluster,
                    start,
                    end,
                });
            }
        }
        spans.push(batch);
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_self_loops_or_duplicates() {
        let mut rng = CloudRng::seeded(20);
        for _ in 0..50 {
            let edges = intra_stack_edges(&mut rng, 12);
            for (i, e) in edges.iter().enumerate() {
                assert_ne!(e.start, e.end);
                assert!(!edges[..i].iter().any(|o| o.start == e.start && o.end == e.end));
            }
        }
    }

    #[test]
    fn indices_stay_in_range() {
        let mut rng = CloudRng::seeded(21);
        for n in [2usize, 5, 40] {
            for e in intra_box_edges(&mut rng, n) {
                assert!(e.start < n && e.end < n);
            }
        }
    }

    #[test]
    fn box_edge_count_never_exceeds_candidate_cap() {
        let mut rng = CloudRng::seeded(22);
        for _ in 0..25 {
            let edges = intra_box_edges(&mut rng, 9);
            assert!(edges.len() <= 18);
        }
    }

    #[test]
    fn degenerate_clusters_get_no_edges() {
        let mut rng = CloudRng::seeded(23);
        assert!(intra_box_edges(&mut rng, 0).is_empty());
        assert!(intra_box_edges(&mut rng, 1).is_empty());
        assert!(intra_stack_edges(&mut rng, 1).is_empty());
    }

    #[test]
    fn spans_link_consecutive_order_entries() {
        let mut rng = CloudRng::seeded(24);
        let sizes = [6usize, 8, 5, 7];
        let order = [2usize, 0, 3, 1];
        let spans = inter_cluster_edges(&mut rng, &sizes, &order);
        assert_eq!(spans.len(), 3);
        for (i, batch) in spans.iter().enumerate() {
            assert!(!batch.is_empty());
            assert!(batch.len() <= 5);
            for e in batch {
                assert_eq!(e.start_cluster, order[i]);
                assert_eq!(e.end_cluster, order[i + 1]);
                assert!(e.start < sizes[e.start_cluster]);
                assert!(e.end < sizes[e.end_cluster]);
                assert_ne!(e.start, e.end);
            }
        }
    }

    #[test]
    fn spans_skip_empty_clusters() {
        let mut rng = CloudRng::seeded(25);
        let sizes = [4usize, 0, 6];
        let order = [0usize, 1, 2];
        let spans = inter_cluster_edges(&mut rng, &sizes, &order);
        assert_eq!(spans.len(), 2);
        assert!(spans[0].is_empty());
        assert!(spans[1].is_empty());
    }

    #[test]
    fn single_cluster_has_no_spans() {
        let mut rng = CloudRng::seeded(26);
        assert!(inter_cluster_edges(&mut rng, &[5], &[0]).is_empty());
    }
}
