//! # Architecture Diagram
//!
//! The static node graph behind the interactive architecture pages, and the
//! node selection that is mirrored into the URL fragment (`#node-id`).
//!
//! All collections are `BTreeMap`/`BTreeSet` so neighbor lists and node
//! iteration come out in a stable order.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors building a [`Diagram`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    /// Two nodes share an id.
    #[error("duplicate diagram node: {0}")]
    DuplicateNode(String),

    /// An edge references a node that was never declared.
    #[error("edge {from} -> {to} references unknown node {missing}")]
    UnknownNode {
        from: String,
        to: String,
        missing: String,
    },
}

// =============================================================================
// NODES
// =============================================================================

/// One box in the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramNode {
    /// Stable id, also used as the URL fragment.
    pub id: String,
    /// Box label.
    pub label: String,
    /// Text shown in the detail panel when selected.
    pub summary: String,
}

impl DiagramNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            summary: summary.into(),
        }
    }
}

// =============================================================================
// DIAGRAM
// =============================================================================

/// A validated, immutable node graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    nodes: BTreeMap<String, DiagramNode>,
    edges: BTreeSet<(String, String)>,
}

impl Diagram {
    /// Build a diagram from its nodes and directed edges.
    pub fn new<E, S>(nodes: Vec<DiagramNode>, edges: E) -> Result<Self, DiagramError>
    where
        E: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut by_id = BTreeMap::new();
        for node in nodes {
            if by_id.contains_key(&node.id) {
                return Err(DiagramError::DuplicateNode(node.id));
            }
            by_id.insert(node.id.clone(), node);
        }

        let mut edge_set = BTreeSet::new();
        for (from, to) in edges {
            let (from, to) = (from.into(), to.into());
            for end in [&from, &to] {
                if !by_id.contains_key(end) {
                    return Err(DiagramError::UnknownNode {
                        missing: end.clone(),
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
            }
            edge_set.insert((from, to));
        }

        Ok(Self {
            nodes: by_id,
            edges: edge_set,
        })
    }

    /// Look up a node.
    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.get(id)
    }

    /// Whether `id` names a node.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &DiagramNode> {
        self.nodes.values()
    }

    /// Directed edges in order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().map(|(a, b)| (a.as_str(), b.as_str()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Ids connected to `id` in either direction, sorted, without `id` itself.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter_map(|(from, to)| {
                if from == id {
                    Some(to.as_str())
                } else if to == id {
                    Some(from.as_str())
                } else {
                    None
                }
            })
            .filter(|n| *n != id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

// =============================================================================
// SELECTION
// =============================================================================

/// The currently highlighted node.
///
/// A selection only ever holds an id the diagram knows; anything else
/// leaves it empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    /// Nothing selected.
    pub fn none() -> Self {
        Self::default()
    }

    /// Restore a selection from a URL fragment.
    ///
    /// Accepts `"#id"` or `"id"`. Empty or unknown fragments give no selection.
    pub fn from_hash(diagram: &Diagram, hash: &str) -> Self {
        let id = hash.trim();
        let id = id.strip_prefix('#').unwrap_or(id).trim();
        let mut selection = Self::none();
        selection.select(diagram, id);
        selection
    }

    /// The fragment to write back to the URL, `""` when nothing is selected.
    pub fn to_hash(&self) -> String {
        self.selected
            .as_deref()
            .map(|id| format!("#{}", id))
            .unwrap_or_default()
    }

    /// Selected node id.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Selected node.
    pub fn node<'d>(&self, diagram: &'d Diagram) -> Option<&'d DiagramNode> {
        self.selected.as_deref().and_then(|id| diagram.node(id))
    }

    /// Select `id`. Unknown ids clear the selection.
    pub fn select(&mut self, diagram: &Diagram, id: &str) {
        self.selected = diagram.contains(id).then(|| id.to_string());
    }

    /// Select `id`, or clear if it is already selected.
    pub fn toggle(&mut self, diagram: &Diagram, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.clear();
        } else {
            self.select(diagram, id);
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Whether `id` is the selection or adjacent to it.
    pub fn is_highlighted(&self, diagram: &Diagram, id: &str) -> bool {
        match self.selected.as_deref() {
            Some(sel) if sel == id => true,
            Some(sel) => diagram.neighbors(sel).contains(&id),
            None => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
