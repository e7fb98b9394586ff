//! Reduces a raw JSON dataset into point and adjacency lists.
//!
//! The accepted shape is:
//!
//! ```json
//! {
//!   "nodes": [{ "node_id": 1, "x": 10.0, "y": 20.0, "r": 5.0 }],
//!   "paths": [{ "id": 1, "start_id": 1, "end_id": 2, "length": 5.0 }]
//! }
//! ```
//!
//! The per-node `r` (coverage radius) is optional, as are the path `id`s.
//! Either list may be omitted entirely.
//!
//! Identifiers may be numbers or strings. An identifier is compared by its
//! textual form, so `1` and `"1"` name the same node.

#[cfg(test)]
mod test;

use crate::{CodecError, Edge, Node, PointId};

use geo::Point;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};
use std::io::Read;

/// An identifier as written in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(u64),
    Name(String),
}

impl RawId {
    /// The numeric value of the identifier, including names which spell one.
    pub fn number(&self) -> Option<u64> {
        match self {
            RawId::Number(value) => Some(*value),
            RawId::Name(name) => name.parse().ok(),
        }
    }
}

impl Display for RawId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RawId::Number(value) => write!(f, "{value}"),
            RawId::Name(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub node_id: RawId,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPath {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RawId>,
    pub start_id: RawId,
    pub end_id: RawId,
    pub length: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub paths: Vec<RawPath>,
}

impl Payload {
    pub fn from_json(data: &str) -> Result<Self, CodecError> {
        let payload: Payload = serde_json::from_str(data)?;
        payload.validate()
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, CodecError> {
        let payload: Payload = serde_json::from_reader(reader)?;
        payload.validate()
    }

    /// Ensures node identifiers are unique and coordinates are finite.
    fn validate(self) -> Result<Self, CodecError> {
        let mut seen = BTreeSet::new();

        for node in &self.nodes {
            let key = node.node_id.to_string();
            if !seen.insert(key) {
                return Err(CodecError::DuplicateNode(node.node_id.to_string()));
            }

            pathway_geo::validate(Point::new(node.x, node.y))?;
        }

        debug!(
            "Validated payload with {} nodes and {} paths",
            self.nodes.len(),
            self.paths.len()
        );

        Ok(self)
    }

    /// The [`PointId`] every identifier in the payload resolves to, keyed
    /// by its textual form.
    ///
    /// Numeric identifiers keep their value. Names are numbered in the order
    /// they are first seen (nodes, then path endpoints), starting above the
    /// largest numeric identifier.
    pub fn identifiers(&self) -> BTreeMap<String, PointId> {
        let referenced = || {
            self.nodes.iter().map(|node| &node.node_id).chain(
                self.paths
                    .iter()
                    .flat_map(|path| [&path.start_id, &path.end_id]),
            )
        };

        let mut next = referenced()
            .filter_map(RawId::number)
            .max()
            .map_or(0, |largest| largest.saturating_add(1));

        let mut table = BTreeMap::new();
        for raw in referenced() {
            let key = raw.to_string();
            if table.contains_key(&key) {
                continue;
            }

            let id = match raw.number() {
                Some(value) => PointId(value),
                None => {
                    next += 1;
                    PointId(next - 1)
                }
            };

            table.insert(key, id);
        }

        table
    }

    /// The identifier, as written in the dataset, that `id` was assigned from.
    pub fn name_of(&self, id: PointId) -> Option<String> {
        self.identifiers()
            .into_iter()
            .find_map(|(name, assigned)| (assigned == id).then_some(name))
    }

    /// The nodes of the payload, in declaration order.
    pub fn points(&self) -> Vec<Node<PointId>> {
        let table = self.identifiers();

        self.nodes
            .iter()
            .filter_map(|raw| {
                let id = table.get(&raw.node_id.to_string())?;
                Some(Node::new(Point::new(raw.x, raw.y), *id))
            })
            .collect()
    }

    /// The coverage radius of every node, in node order.
    /// Only present when every node declares one.
    pub fn radii(&self) -> Option<Vec<f64>> {
        self.nodes.iter().map(|raw| raw.r).collect()
    }

    /// The declared paths as directed edges, weighted by their length.
    ///
    /// Paths are reported verbatim; dangling references are resolved
    /// (and dropped) by the graph builder.
    pub fn edges(&self) -> impl Iterator<Item = Edge<PointId>> + '_ {
        let table = self.identifiers();

        self.paths.iter().filter_map(move |raw| {
            let source = table.get(&raw.start_id.to_string())?;
            let target = table.get(&raw.end_id.to_string())?;
            Some(Edge::new(*source, *target, raw.length))
        })
    }
}
