#![allow(dead_code)]

use irisd::{Artifact, Forest, Node, Tree};

/// A small hand-built forest using the classic Iris split thresholds
/// (petal length 2.45 separates setosa; petal width 1.75 separates
/// versicolor from virginica). Three trees with slightly different cuts so
/// averaged probabilities are non-trivial.
pub fn fixture_forest() -> Forest {
    Forest {
        classes: vec![
            "setosa".to_string(),
            "versicolor".to_string(),
            "virginica".to_string(),
        ],
        n_features: 4,
        trees: vec![
            Tree {
                nodes: vec![
                    Node::Split {
                        feature: 2,
                        threshold: 2.45,
                        left: 1,
                        right: 2,
                    },
                    Node::Leaf {
                        counts: vec![50.0, 0.0, 0.0],
                    },
                    Node::Split {
                        feature: 3,
                        threshold: 1.75,
                        left: 3,
                        right: 4,
                    },
                    Node::Leaf {
                        counts: vec![0.0, 49.0, 5.0],
                    },
                    Node::Leaf {
                        counts: vec![0.0, 1.0, 45.0],
                    },
                ],
            },
            Tree {
                nodes: vec![
                    Node::Split {
                        feature: 2,
                        threshold: 2.6,
                        left: 1,
                        right: 2,
                    },
                    Node::Leaf {
                        counts: vec![48.0, 0.0, 0.0],
                    },
                    Node::Split {
                        feature: 3,
                        threshold: 1.65,
                        left: 3,
                        right: 4,
                    },
                    Node::Leaf {
                        counts: vec![0.0, 47.0, 1.0],
                    },
                    Node::Leaf {
                        counts: vec![0.0, 2.0, 46.0],
                    },
                ],
            },
            Tree {
                nodes: vec![
                    Node::Split {
                        feature: 2,
                        threshold: 2.45,
                        left: 1,
                        right: 2,
                    },
                    Node::Leaf {
                        counts: vec![50.0, 0.0, 0.0],
                    },
                    Node::Split {
                        feature: 2,
                        threshold: 4.85,
                        left: 3,
                        right: 4,
                    },
                    Node::Leaf {
                        counts: vec![0.0, 45.0, 6.0],
                    },
                    Node::Leaf {
                        counts: vec![0.0, 1.0, 44.0],
                    },
                ],
            },
        ],
    }
}

/// Serializes the fixture forest to disk and loads it back through the real
/// artifact path, so tests exercise the same code the binary runs.
pub fn fixture_artifact() -> Artifact {
    let file = tempfile::NamedTempFile::new().unwrap();
    serde_json::to_writer(&file, &fixture_forest()).unwrap();
    Artifact::load(file.path()).unwrap()
}

/// Canonical low-ambiguity setosa exemplar.
pub const SETOSA: [f64; 4] = [5.1, 3.5, 1.4, 0.2];

/// Canonical versicolor exemplar.
pub const VERSICOLOR: [f64; 4] = [6.3, 3.3, 4.7, 1.6];
