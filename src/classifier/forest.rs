use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::error::ModelError;
use super::metadata::{CLASS_NAMES, NUM_FEATURES};

/// A single node of a decision tree.
///
/// Split nodes route a sample left when `x[feature] <= threshold`, right
/// otherwise. Leaf nodes carry the per-class training sample counts observed
/// at that leaf.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        counts: Vec<f64>,
    },
}

/// An axis-aligned decision tree stored as a flat node array rooted at index 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Walks the tree for one sample and returns the normalized class
    /// distribution of the reached leaf.
    fn distribution(&self, x: &[f64; NUM_FEATURES], n_classes: usize) -> Result<Array1<f64>, ModelError> {
        let mut idx = 0usize;
        // A well-formed tree terminates in at most `nodes.len()` hops.
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(idx) {
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = *x.get(*feature).ok_or_else(|| {
                        ModelError::Inference(format!("split references feature {}", feature))
                    })?;
                    idx = if value <= *threshold { *left } else { *right };
                }
                Some(Node::Leaf { counts }) => {
                    if counts.len() != n_classes {
                        return Err(ModelError::Inference(format!(
                            "leaf has {} counts, expected {}",
                            counts.len(),
                            n_classes
                        )));
                    }
                    let total: f64 = counts.iter().sum();
                    if total <= 0.0 {
                        return Err(ModelError::Inference("empty leaf".into()));
                    }
                    return Ok(Array1::from_iter(counts.iter().map(|c| c / total)));
                }
                None => {
                    return Err(ModelError::Inference(format!(
                        "node index {} out of bounds",
                        idx
                    )));
                }
            }
        }
        Err(ModelError::Inference("cycle detected in tree".into()))
    }
}

/// A trained Random Forest over the four Iris measurements.
///
/// The forest is immutable once deserialized; prediction averages the
/// normalized leaf distributions of all trees and reports the class with the
/// highest averaged probability. All fields are `Send + Sync`, so a loaded
/// forest can be shared across request handlers behind an `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forest {
    /// Ordered class labels; probability vectors align to this order.
    pub classes: Vec<String>,
    /// Number of input features each tree splits on.
    pub n_features: usize,
    pub trees: Vec<Tree>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Forest>();
    }
};

impl Forest {
    /// Returns the averaged class-probability distribution for one sample,
    /// aligned to `self.classes`.
    pub fn predict_proba(&self, x: &[f64; NUM_FEATURES]) -> Result<Array1<f64>, ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::Inference("forest has no trees".into()));
        }
        let mut acc = Array1::<f64>::zeros(self.classes.len());
        for tree in &self.trees {
            acc += &tree.distribution(x, self.classes.len())?;
        }
        Ok(acc / self.trees.len() as f64)
    }

    /// Predicts the class of one sample.
    ///
    /// Returns the winning label together with its averaged probability, the
    /// maximum entry of the distribution rather than a calibrated posterior.
    pub fn predict(&self, x: &[f64; NUM_FEATURES]) -> Result<(String, f64), ModelError> {
        let proba = self.predict_proba(x)?;
        let (best, probability) = proba
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .ok_or_else(|| ModelError::Inference("empty probability vector".into()))?;
        Ok((self.classes[best].clone(), *probability))
    }

    /// Structural sanity checks run once at load time so that per-request
    /// traversal can trust node indices, leaf widths and leaf counts.
    ///
    /// The class taxonomy is closed and fixed at training time; an artifact
    /// declaring anything other than the three known labels is rejected so
    /// predictions can never leak a label outside that set.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.classes.iter().map(String::as_str).eq(CLASS_NAMES) {
            return Err(ModelError::Shape(format!(
                "class taxonomy {:?} does not match {:?}",
                self.classes, CLASS_NAMES
            )));
        }
        if self.n_features != NUM_FEATURES {
            return Err(ModelError::Shape(format!(
                "expected {} features, artifact declares {}",
                NUM_FEATURES, self.n_features
            )));
        }
        if self.trees.is_empty() {
            return Err(ModelError::Shape("forest has no trees".into()));
        }
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ModelError::Shape(format!("tree {} has no nodes", t)));
            }
            for node in &tree.nodes {
                match node {
                    Node::Split {
                        feature,
                        left,
                        right,
                        ..
                    } => {
                        if *feature >= self.n_features {
                            return Err(ModelError::Shape(format!(
                                "tree {} splits on feature {}",
                                t, feature
                            )));
                        }
                        if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                            return Err(ModelError::Shape(format!(
                                "tree {} has a child index out of bounds",
                                t
                            )));
                        }
                    }
                    Node::Leaf { counts } => {
                        if counts.len() != self.classes.len() {
                            return Err(ModelError::Shape(format!(
                                "tree {} has a leaf of width {}, expected {}",
                                t,
                                counts.len(),
                                self.classes.len()
                            )));
                        }
                        if counts.iter().any(|c| !c.is_finite() || *c < 0.0) {
                            return Err(ModelError::Shape(format!(
                                "tree {} has a leaf with invalid counts",
                                t
                            )));
                        }
                        if counts.iter().sum::<f64>() <= 0.0 {
                            return Err(ModelError::Shape(format!(
                                "tree {} has an empty leaf",
                                t
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
