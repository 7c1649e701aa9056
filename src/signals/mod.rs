//! Signal classification.

pub mod classifier;

pub use classifier::{ClassificationUnavailable, SignalClassifier, Verdict};
