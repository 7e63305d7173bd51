use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{error, info};

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::entities::ModelStatus,
    prediction::{
        entities::{FEATURE_COUNT, FeatureVector},
        ports::GoalClassifier,
    },
};

/// Serialized decision-tree ensemble.
///
/// Each tree is a flat node list rooted at index 0. A split sends the sample
/// left when `features[feature] <= threshold`, right otherwise. Children must
/// sit after their parent in the list, which rules out cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    pub trees: Vec<DecisionTree>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        label: String,
    },
}

impl DecisionTree {
    fn validate(&self, tree: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err(format!("tree {tree} has no nodes"));
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } = node
            {
                if *feature >= FEATURE_COUNT {
                    return Err(format!(
                        "tree {tree} node {index} splits on feature {feature}"
                    ));
                }
                if !threshold.is_finite() {
                    return Err(format!("tree {tree} node {index} has a non-finite threshold"));
                }
                for child in [left, right] {
                    if *child <= index || *child >= self.nodes.len() {
                        return Err(format!(
                            "tree {tree} node {index} points to invalid child {child}"
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    fn predict(&self, features: &FeatureVector) -> Option<&str> {
        let mut index = 0;
        loop {
            match self.nodes.get(index)? {
                TreeNode::Leaf { label } => return Some(label.as_str()),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = features.get(*feature)?;
                    index = if value <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

impl TreeEnsemble {
    pub fn validate(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("model has no trees".to_string());
        }

        self.trees
            .iter()
            .enumerate()
            .try_for_each(|(index, tree)| tree.validate(index))
    }

    /// Majority vote over the trees. Ties go to the smallest label.
    pub fn predict(&self, features: &FeatureVector) -> Option<String> {
        let mut votes: BTreeMap<&str, usize> = BTreeMap::new();
        for tree in &self.trees {
            *votes.entry(tree.predict(features)?).or_default() += 1;
        }

        let mut winner: Option<(&str, usize)> = None;
        for (label, count) in votes {
            if winner.is_none_or(|(_, best)| count > best) {
                winner = Some((label, count));
            }
        }

        winner.map(|(label, _)| label.to_string())
    }

    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .trees
            .iter()
            .flat_map(|tree| tree.nodes.iter())
            .filter_map(|node| match node {
                TreeNode::Leaf { label } => Some(label.clone()),
                TreeNode::Split { .. } => None,
            })
            .collect();
        labels.sort();
        labels.dedup();
        labels
    }
}

#[derive(Debug, Clone)]
enum ModelState {
    Loaded {
        ensemble: TreeEnsemble,
        fingerprint: String,
    },
    Unavailable {
        reason: String,
    },
}

/// Goal classifier backed by a JSON tree-ensemble artifact.
///
/// Like the CSV catalog, a missing or corrupt artifact does not stop the
/// process; predictions then fail with `ModelUnavailable`.
#[derive(Debug, Clone)]
pub struct TreeEnsembleClassifier {
    state: ModelState,
}

impl TreeEnsembleClassifier {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let result = fs::read(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))
            .and_then(|bytes| Self::parse(&bytes));

        match result {
            Ok(classifier) => {
                let status = classifier.status();
                info!(
                    path = %path.display(),
                    trees = status.trees,
                    fingerprint = status.fingerprint.as_deref().unwrap_or_default(),
                    "Goal model loaded"
                );
                classifier
            }
            Err(reason) => {
                error!(path = %path.display(), %reason, "Failed to load goal model");
                Self::unavailable(reason)
            }
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        Self::parse(bytes).map_err(CoreError::InvalidInput)
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: ModelState::Unavailable {
                reason: reason.into(),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, ModelState::Loaded { .. })
    }

    fn parse(bytes: &[u8]) -> Result<Self, String> {
        let ensemble: TreeEnsemble =
            serde_json::from_slice(bytes).map_err(|e| format!("invalid model artifact: {e}"))?;
        ensemble.validate()?;

        let fingerprint = hex::encode(Sha256::digest(bytes));

        Ok(Self {
            state: ModelState::Loaded {
                ensemble,
                fingerprint,
            },
        })
    }
}

impl GoalClassifier for TreeEnsembleClassifier {
    fn predict_label(&self, features: &FeatureVector) -> Result<String, CoreError> {
        match &self.state {
            ModelState::Loaded { ensemble, .. } => ensemble.predict(features).ok_or_else(|| {
                error!(?features, "Tree walk did not reach a leaf");
                CoreError::InternalServerError
            }),
            ModelState::Unavailable { reason } => {
                tracing::debug!(%reason, "Prediction requested while model unavailable");
                Err(CoreError::ModelUnavailable)
            }
        }
    }

    fn status(&self) -> ModelStatus {
        match &self.state {
            ModelState::Loaded {
                ensemble,
                fingerprint,
            } => ModelStatus {
                available: true,
                fingerprint: Some(fingerprint.clone()),
                labels: ensemble.labels(),
                trees: ensemble.trees.len(),
            },
            ModelState::Unavailable { .. } => ModelStatus::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    // bmi <= 18.5 -> Weight_Gain, bmi > 30 -> Weight_Loss, else Muscle_Gain
    const MODEL: &str = r#"{
        "trees": [
            {
                "nodes": [
                    {"feature": 2, "threshold": 18.5, "left": 1, "right": 2},
                    {"label": "Weight_Gain"},
                    {"feature": 2, "threshold": 30.0, "left": 3, "right": 4},
                    {"label": "Muscle_Gain"},
                    {"label": "Weight_Loss"}
                ]
            }
        ]
    }"#;

    fn features(values: [f64; 3]) -> FeatureVector {
        FeatureVector::new(values).unwrap()
    }

    #[test]
    fn test_predicts_by_walking_tree() {
        let classifier = TreeEnsembleClassifier::from_bytes(MODEL.as_bytes()).unwrap();

        assert_eq!(
            classifier.predict_label(&features([50.0, 175.0, 16.3])),
            Ok("Weight_Gain".to_string())
        );
        assert_eq!(
            classifier.predict_label(&features([75.0, 175.0, 18.5])),
            Ok("Weight_Gain".to_string())
        );
        assert_eq!(
            classifier.predict_label(&features([75.0, 175.0, 24.5])),
            Ok("Muscle_Gain".to_string())
        );
        assert_eq!(
            classifier.predict_label(&features([110.0, 175.0, 35.9])),
            Ok("Weight_Loss".to_string())
        );
    }

    #[test]
    fn test_majority_vote_with_tie_break() {
        let ensemble = TreeEnsemble {
            trees: vec![
                DecisionTree {
                    nodes: vec![TreeNode::Leaf {
                        label: "Weight_Loss".to_string(),
                    }],
                },
                DecisionTree {
                    nodes: vec![TreeNode::Leaf {
                        label: "Muscle_Gain".to_string(),
                    }],
                },
            ],
        };
        assert_eq!(
            ensemble.predict(&features([1.0, 2.0, 3.0])),
            Some("Muscle_Gain".to_string())
        );

        let mut with_majority = ensemble.clone();
        with_majority.trees.push(DecisionTree {
            nodes: vec![TreeNode::Leaf {
                label: "Weight_Loss".to_string(),
            }],
        });
        assert_eq!(
            with_majority.predict(&features([1.0, 2.0, 3.0])),
            Some("Weight_Loss".to_string())
        );
    }

    #[test]
    fn test_rejects_invalid_artifacts() {
        let cases = [
            r#"{"trees": []}"#,
            r#"{"trees": [{"nodes": []}]}"#,
            r#"{"trees": [{"nodes": [{"feature": 3, "threshold": 1.0, "left": 1, "right": 2}, {"label": "a"}, {"label": "b"}]}]}"#,
            r#"{"trees": [{"nodes": [{"feature": 0, "threshold": 1.0, "left": 0, "right": 1}, {"label": "a"}]}]}"#,
            r#"{"trees": [{"nodes": [{"feature": 0, "threshold": 1.0, "left": 1, "right": 5}, {"label": "a"}]}]}"#,
            "not json",
        ];

        for case in cases {
            assert!(
                TreeEnsembleClassifier::from_bytes(case.as_bytes()).is_err(),
                "accepted {case}"
            );
        }
    }

    #[test]
    fn test_status_reports_fingerprint_and_labels() {
        let classifier = TreeEnsembleClassifier::from_bytes(MODEL.as_bytes()).unwrap();
        let status = classifier.status();

        assert!(status.available);
        assert_eq!(status.trees, 1);
        assert_eq!(
            status.labels,
            vec!["Muscle_Gain", "Weight_Gain", "Weight_Loss"]
        );
        assert_eq!(
            status.fingerprint,
            Some(hex::encode(Sha256::digest(MODEL.as_bytes())))
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MODEL.as_bytes()).unwrap();

        let classifier = TreeEnsembleClassifier::load(file.path());

        assert!(classifier.is_available());
    }

    #[test]
    fn test_missing_artifact_is_unavailable() {
        let classifier = TreeEnsembleClassifier::load("/nonexistent/food_model.json");

        assert!(!classifier.is_available());
        assert_eq!(
            classifier.predict_label(&features([1.0, 2.0, 3.0])),
            Err(CoreError::ModelUnavailable)
        );
        assert_eq!(classifier.status(), ModelStatus::default());
    }
}
