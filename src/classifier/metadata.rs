use serde::Serialize;

/// Number of input measurements per sample.
pub const NUM_FEATURES: usize = 4;

/// Input feature names, in wire order.
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "sepal_length",
    "sepal_width",
    "petal_length",
    "petal_width",
];

/// The closed class taxonomy, fixed at training time.
pub const CLASS_NAMES: [&str; 3] = ["setosa", "versicolor", "virginica"];

/// Training-time constants describing the deployed model.
///
/// These are baked in by the offline training step, not derived from the
/// loaded artifact's internals.
#[derive(Debug, Clone, Serialize)]
pub struct ModelMetadata {
    pub algorithm: &'static str,
    pub n_estimators: u32,
    pub max_depth: u32,
    pub random_state: u64,
    pub feature_names: [&'static str; NUM_FEATURES],
    pub class_names: [&'static str; 3],
}

impl ModelMetadata {
    pub const fn baked_in() -> Self {
        Self {
            algorithm: "RandomForestClassifier",
            n_estimators: 100,
            max_depth: 10,
            random_state: 42,
            feature_names: FEATURE_NAMES,
            class_names: CLASS_NAMES,
        }
    }
}
