pub mod tree_ensemble;

pub use tree_ensemble::TreeEnsembleClassifier;
