//! Lattice materialisation for export and inspection.
//!
//! This module builds the full recombining lattice as an immutable,
//! addressable node structure. Construction is presentation-oriented and
//! entirely separate from the pricer's working buffer: the builder owns
//! its node storage, the pricer owns its O(N) array, and neither sees the
//! other's state.
//!
//! Recombined nodes are materialised once: the lattice holds exactly
//! `(N+1)(N+2)/2` nodes and each node's `children` field names its two
//! successors by id instead of embedding duplicate subtrees. Inlining
//! children of a recombining lattice would re-duplicate every shared
//! subtree and blow the node count up to O(2^N).

use num_traits::Float;

use pricer_core::types::LatticeParams;

/// Deterministic node id for `(time_step, level)`.
///
/// Ids are stable across runs with identical parameters, so exports can
/// be diffed.
///
/// # Examples
/// ```
/// use pricer_lattice::tree::node_id;
///
/// assert_eq!(node_id(0, 0), "n0_0");
/// assert_eq!(node_id(3, 2), "n3_2");
/// ```
pub fn node_id(time_step: usize, level: usize) -> String {
    format!("n{}_{}", time_step, level)
}

/// A single lattice node.
///
/// Part of the export artifact produced by [`LatticeBuilder`]; immutable
/// after construction and unrelated to the arrays the pricer works on.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeNode<T: Float> {
    /// Unique id, a deterministic function of `(time_step, level)`.
    pub id: String,
    /// Time step of the node, `0..=N`.
    pub time_step: usize,
    /// Level within the time step (number of up-moves), `0..=time_step`.
    pub level: usize,
    /// Node price per the lattice invariant `spot * up^level *
    /// down^(time_step - level)`.
    pub price: T,
    /// Ids of the `(down-move, up-move)` children; `None` at terminal
    /// nodes.
    pub children: Option<[String; 2]>,
}

/// The materialised recombining lattice.
///
/// Nodes are stored per time step; the node at `(i, j)` is reachable both
/// by position ([`BinomialLattice::node`]) and by following `children`
/// ids from the root.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_core::types::LatticeParams;
/// use pricer_lattice::tree::LatticeBuilder;
///
/// let params = LatticeParams::recombining(100.0_f64, 1.1, 2).unwrap();
/// let lattice = LatticeBuilder::new(params).build();
///
/// assert_eq!(lattice.node_count(), 6);
/// let root = lattice.root();
/// let (down, up) = lattice.children_of(root).unwrap();
/// assert!(down.price < up.price);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinomialLattice<T: Float> {
    steps: usize,
    levels: Vec<Vec<LatticeNode<T>>>,
}

impl<T: Float> BinomialLattice<T> {
    /// Returns the number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the root node at `(0, 0)`.
    pub fn root(&self) -> &LatticeNode<T> {
        &self.levels[0][0]
    }

    /// Returns the node at `(time_step, level)`, if it exists.
    pub fn node(&self, time_step: usize, level: usize) -> Option<&LatticeNode<T>> {
        self.levels.get(time_step).and_then(|row| row.get(level))
    }

    /// Returns the nodes at a time step, ordered by level.
    pub fn nodes_at(&self, time_step: usize) -> &[LatticeNode<T>] {
        &self.levels[time_step]
    }

    /// Resolves a node's `(down-move, up-move)` children.
    ///
    /// Returns `None` for terminal nodes.
    pub fn children_of<'a>(
        &'a self,
        node: &LatticeNode<T>,
    ) -> Option<(&'a LatticeNode<T>, &'a LatticeNode<T>)> {
        if node.time_step >= self.steps {
            return None;
        }
        let next = &self.levels[node.time_step + 1];
        Some((&next[node.level], &next[node.level + 1]))
    }

    /// Total node count, `(N+1)(N+2)/2`.
    pub fn node_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }
}

/// Builds the materialised lattice from validated geometry.
///
/// Construction is a pure function of the parameters: building twice with
/// the same geometry yields identical lattices, node ids included.
/// `steps = 0` yields a single-leaf lattice.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
#[derive(Debug, Clone)]
pub struct LatticeBuilder<T: Float> {
    params: LatticeParams<T>,
}

impl<T: Float> LatticeBuilder<T> {
    /// Creates a builder over validated geometry.
    pub fn new(params: LatticeParams<T>) -> Self {
        Self { params }
    }

    /// Materialises the lattice, one node per `(time_step, level)`.
    pub fn build(&self) -> BinomialLattice<T> {
        let n = self.params.steps();
        let mut levels = Vec::with_capacity(n + 1);

        for i in 0..=n {
            let mut row = Vec::with_capacity(i + 1);
            for j in 0..=i {
                let children = if i < n {
                    Some([node_id(i + 1, j), node_id(i + 1, j + 1)])
                } else {
                    None
                };
                row.push(LatticeNode {
                    id: node_id(i, j),
                    time_step: i,
                    level: j,
                    price: self.params.node_price(i, j),
                    children,
                });
            }
            levels.push(row);
        }

        BinomialLattice { steps: n, levels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    fn build(spot: f64, up: f64, steps: usize) -> BinomialLattice<f64> {
        let params = LatticeParams::recombining(spot, up, steps).unwrap();
        LatticeBuilder::new(params).build()
    }

    #[test]
    fn test_zero_steps_yields_single_leaf() {
        let lattice = build(100.0, 1.1, 0);
        assert_eq!(lattice.steps(), 0);
        assert_eq!(lattice.node_count(), 1);
        assert_eq!(lattice.root().children, None);
        assert_relative_eq!(lattice.root().price, 100.0);
    }

    #[test]
    fn test_node_count_is_quadratic() {
        for n in [1_usize, 2, 5, 10] {
            let lattice = build(100.0, 1.1, n);
            assert_eq!(lattice.node_count(), (n + 1) * (n + 2) / 2);
        }
    }

    #[test]
    fn test_levels_widen_by_one() {
        let lattice = build(100.0, 1.1, 4);
        for i in 0..=4 {
            assert_eq!(lattice.nodes_at(i).len(), i + 1);
        }
    }

    #[test]
    fn test_ids_are_unique_and_deterministic() {
        let first = build(100.0, 1.1, 6);
        let second = build(100.0, 1.1, 6);
        assert_eq!(first, second);

        let mut seen = HashSet::new();
        for i in 0..=6 {
            for node in first.nodes_at(i) {
                assert!(seen.insert(node.id.clone()), "duplicate id {}", node.id);
            }
        }
        assert_eq!(seen.len(), first.node_count());
    }

    #[test]
    fn test_children_ordering_down_then_up() {
        let lattice = build(100.0, 1.1, 3);
        let root = lattice.root();
        assert_eq!(
            root.children,
            Some([node_id(1, 0), node_id(1, 1)])
        );

        let (down, up) = lattice.children_of(root).unwrap();
        assert_eq!(down.level, 0);
        assert_eq!(up.level, 1);
        assert!(down.price < root.price && root.price < up.price);
    }

    #[test]
    fn test_terminal_nodes_have_no_children() {
        let lattice = build(100.0, 1.1, 3);
        for node in lattice.nodes_at(3) {
            assert_eq!(node.children, None);
            assert!(lattice.children_of(node).is_none());
        }
    }

    #[test]
    fn test_prices_follow_invariant() {
        let params = LatticeParams::new(100.0, 1.1, 0.9, 5).unwrap();
        let lattice = LatticeBuilder::new(params).build();
        for i in 0..=5_usize {
            for j in 0..=i {
                let expected = 100.0 * 1.1_f64.powi(j as i32) * 0.9_f64.powi((i - j) as i32);
                assert_relative_eq!(
                    lattice.node(i, j).unwrap().price,
                    expected,
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_node_lookup_out_of_range() {
        let lattice = build(100.0, 1.1, 2);
        assert!(lattice.node(3, 0).is_none());
        assert!(lattice.node(1, 2).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_export_shape() {
        let lattice = build(100.0, 1.1, 1);
        let json = serde_json::to_value(&lattice).unwrap();

        let root = &json["levels"][0][0];
        assert_eq!(root["id"], "n0_0");
        assert_eq!(root["time_step"], 0);
        assert_eq!(root["level"], 0);
        assert_eq!(root["price"], 100.0);
        assert_eq!(root["children"][0], "n1_0");
        assert_eq!(root["children"][1], "n1_1");

        let terminal = &json["levels"][1][1];
        assert_eq!(terminal["children"], serde_json::Value::Null);
    }
}
