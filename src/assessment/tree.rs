//! Decision tree types and traversal.

use std::collections::HashMap;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CaError, Result};

/// A threshold-gated edge to the next node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub threshold: f64,
    pub next: String,
}

/// A question node. Edges are kept in declaration order; the first edge
/// whose threshold is met by the rating wins. This is deliberately not a
/// max-threshold selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentNode {
    pub prompt: String,
    pub edges: Vec<Edge>,
}

/// Immutable skill-assessment tree. Node identifiers absent from the map
/// are terminal career labels.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: HashMap<String, AssessmentNode>,
    root: String,
}

impl DecisionTree {
    pub fn new(root: impl Into<String>, nodes: HashMap<String, AssessmentNode>) -> Self {
        Self {
            nodes,
            root: root.into(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&AssessmentNode> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn prompt(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).map(|node| node.prompt.as_str())
    }

    /// A node without an entry (or without edges) is a final career label.
    #[must_use]
    pub fn is_terminal(&self, id: &str) -> bool {
        self.nodes.get(id).is_none_or(|node| node.edges.is_empty())
    }

    /// Advance from `current` using a skill rating in [0.0, 1.0].
    ///
    /// Terminal nodes are idempotent: the node comes back unchanged. On a
    /// question node, edges are scanned in declaration order and the first
    /// edge whose threshold is at most `rating` is taken. If no edge
    /// matches (unreachable with a catch-all 0.0 edge) the traversal
    /// stalls on the current node rather than failing.
    pub fn advance<'a>(&'a self, current: &'a str, rating: f64) -> Result<&'a str> {
        if !(0.0..=1.0).contains(&rating) {
            return Err(CaError::InvalidRating(rating));
        }

        let Some(node) = self.nodes.get(current) else {
            return Ok(current);
        };

        for edge in &node.edges {
            if rating >= edge.threshold {
                return Ok(&edge.next);
            }
        }

        Ok(current)
    }

    /// Check the structural invariants: every question node carries a 0.0
    /// catch-all edge, and following edges never revisits a node.
    pub fn validate(&self) -> Result<()> {
        for (id, node) in &self.nodes {
            if node.edges.is_empty() {
                continue;
            }
            if !node.edges.iter().any(|edge| edge.threshold == 0.0) {
                return Err(CaError::Config(format!(
                    "node '{id}' has no catch-all threshold-0.0 edge"
                )));
            }
        }

        let mut visiting = HashSet::new();
        self.check_acyclic(&self.root, &mut visiting)
    }

    fn check_acyclic<'a>(&'a self, id: &'a str, visiting: &mut HashSet<&'a str>) -> Result<()> {
        let Some(node) = self.nodes.get(id) else {
            return Ok(());
        };
        if !visiting.insert(id) {
            return Err(CaError::Config(format!(
                "decision tree contains a cycle through '{id}'"
            )));
        }
        for edge in &node.edges {
            self.check_acyclic(&edge.next, visiting)?;
        }
        visiting.remove(id);
        Ok(())
    }
}

impl Default for DecisionTree {
    /// The built-in career-advisor tree, rooted at the Math assessment.
    fn default() -> Self {
        let mut nodes = HashMap::new();

        let mut add = |id: &str, prompt: &str, edges: &[(f64, &str)]| {
            nodes.insert(
                id.to_string(),
                AssessmentNode {
                    prompt: prompt.to_string(),
                    edges: edges
                        .iter()
                        .map(|(threshold, next)| Edge {
                            threshold: *threshold,
                            next: (*next).to_string(),
                        })
                        .collect(),
                },
            );
        };

        add(
            "Math",
            "Rate your Math skills (0.0 - 1.0):",
            &[(0.7, "Math_High"), (0.4, "Math_Med"), (0.0, "Math_Low")],
        );
        add(
            "Math_High",
            "Rate your Programming skills (0.0 - 1.0):",
            &[(0.5, "HighProg"), (0.0, "HighPhys")],
        );
        add(
            "HighProg",
            "Rate your interest in Data/AI (0.0 - 1.0):",
            &[(0.6, "Data Scientist"), (0.0, "Software Engineer")],
        );
        // Edge order mirrors the shipped advisor tree: the 0.6 edge is
        // declared first even though it routes to the "low" outcome.
        add(
            "HighPhys",
            "Rate your Physics/Engineering knowledge (0.0 - 1.0):",
            &[(0.6, "Research Scientist"), (0.0, "Engineer")],
        );
        add(
            "Math_Med",
            "Rate your Design/Creativity skills (0.0 - 1.0):",
            &[(0.5, "MedDesign"), (0.0, "MedBio")],
        );
        add(
            "MedDesign",
            "Rate your Communication/Teamwork skills (0.0 - 1.0):",
            &[(0.6, "UI/UX Designer"), (0.0, "Graphic Designer")],
        );
        add(
            "MedBio",
            "Rate your Biology/Health knowledge (0.0 - 1.0):",
            &[(0.6, "Healthcare Specialist"), (0.0, "Project Manager")],
        );
        add(
            "Math_Low",
            "Rate your Communication/People skills (0.0 - 1.0):",
            &[(0.5, "LowComm"), (0.0, "LowHands")],
        );
        add(
            "LowComm",
            "Rate your Leadership ability (0.0 - 1.0):",
            &[(0.6, "Manager / HR Specialist"), (0.0, "Journalist / Public Speaker")],
        );
        add(
            "LowHands",
            "Rate your Practical/Technical skills (0.0 - 1.0):",
            &[(0.6, "Technician"), (0.0, "Sales Assistant")],
        );

        Self::new("Math", nodes)
    }
}

/// Human-readable skill name for a question node, used when recording a
/// session transcript.
#[must_use]
pub fn skill_name(node: &str) -> &'static str {
    match node {
        "Math" => "Mathematics",
        "Math_High" => "Advanced Math",
        "Math_Med" => "Intermediate Math",
        "Math_Low" => "Basic Math",
        "HighProg" => "Programming",
        "HighPhys" => "Physics/Engineering",
        "MedDesign" => "Design/Creativity",
        "MedBio" => "Biology/Health",
        "LowComm" => "Communication",
        "LowHands" => "Technical Skills",
        _ => "General Skills",
    }
}
