//! Regression trees and cascade stages for landmark refinement.

use crate::types::{Point, Shape};

/// A split on the intensity difference of two sampled features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    pub idx1: usize,
    pub idx2: usize,
    pub threshold: f32,
}

/// A complete binary regression tree.
///
/// Nodes are numbered breadth first: the children of node `i` are `2i + 1`
/// and `2i + 2`. Indices past the last split address `leaves`.
#[derive(Debug, Clone)]
pub struct RegressionTree {
    splits: Vec<Split>,
    leaves: Vec<Shape>,
}

impl RegressionTree {
    /// `leaves` must hold one more entry than `splits`.
    pub fn new(splits: Vec<Split>, leaves: Vec<Shape>) -> Self {
        debug_assert_eq!(leaves.len(), splits.len() + 1);
        Self { splits, leaves }
    }

    /// Walk to the leaf selected by `features`.
    ///
    /// A split goes left when `features[idx1] - features[idx2]` exceeds its
    /// threshold.
    pub fn leaf(&self, features: &[f32]) -> &Shape {
        let mut node = 0usize;
        while let Some(split) = self.splits.get(node) {
            node = if features[split.idx1] - features[split.idx2] > split.threshold {
                2 * node + 1
            } else {
                2 * node + 2
            };
        }
        &self.leaves[node - self.splits.len()]
    }
}

/// One step of the cascade: where to sample, and the trees that vote on the
/// shape update.
#[derive(Debug, Clone)]
pub struct CascadeStage {
    anchors: Vec<usize>,
    offsets: Vec<Point>,
    trees: Vec<RegressionTree>,
}

impl CascadeStage {
    /// Feature `i` sits at `offsets[i]` from landmark `anchors[i]`.
    pub fn new(anchors: Vec<usize>, offsets: Vec<Point>, trees: Vec<RegressionTree>) -> Self {
        debug_assert_eq!(anchors.len(), offsets.len());
        Self {
            anchors,
            offsets,
            trees,
        }
    }

    pub fn anchors(&self) -> &[usize] {
        &self.anchors
    }

    pub fn offsets(&self) -> &[Point] {
        &self.offsets
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    /// Add every tree's leaf for `features` to `shape`.
    pub fn refine(&self, features: &[f32], shape: &mut Shape) {
        for tree in &self.trees {
            shape.add_delta(tree.leaf(features));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(x: f32, y: f32) -> Shape {
        Shape::new(vec![Point::new(x, y)])
    }

    #[test]
    fn splits_go_left_above_threshold() {
        //        [0: f0 - f1 > 50]
        //       /                 \
        //   [leaf 0]           [leaf 1]
        let tree = RegressionTree::new(
            vec![Split {
                idx1: 0,
                idx2: 1,
                threshold: 50.0,
            }],
            vec![single(-0.1, 0.0), single(0.1, 0.0)],
        );

        assert_eq!(tree.leaf(&[150.0, 50.0])[0].x, -0.1);
        assert_eq!(tree.leaf(&[100.0, 50.0])[0].x, 0.1);
        assert_eq!(tree.leaf(&[0.0, 50.0])[0].x, 0.1);
    }

    #[test]
    fn deeper_trees_index_leaves_breadth_first() {
        let split = |idx1, idx2| Split {
            idx1,
            idx2,
            threshold: 0.0,
        };
        let tree = RegressionTree::new(
            vec![split(0, 1), split(1, 2), split(2, 1)],
            (0..4).map(|i| single(i as f32, 0.0)).collect(),
        );

        // root left (0 > 1), then node 1 right (1 <= 2)
        assert_eq!(tree.leaf(&[9.0, 1.0, 5.0])[0].x, 1.0);
        // root right, then node 2 left (2 > 1)
        assert_eq!(tree.leaf(&[0.0, 1.0, 5.0])[0].x, 2.0);
        // root right, then node 2 right
        assert_eq!(tree.leaf(&[0.0, 5.0, 1.0])[0].x, 3.0);
    }

    #[test]
    fn stage_sums_tree_votes() {
        let stump = |x, y| RegressionTree::new(Vec::new(), vec![single(x, y)]);
        let stage = CascadeStage::new(Vec::new(), Vec::new(), vec![stump(0.1, 0.2), stump(0.3, 0.4)]);

        let mut shape = single(1.0, 1.0);
        stage.refine(&[], &mut shape);

        assert!((shape[0].x - 1.4).abs() < 1e-6);
        assert!((shape[0].y - 1.6).abs() < 1e-6);
        assert_eq!(stage.num_trees(), 2);
    }
}
