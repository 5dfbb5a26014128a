//! Node, result, and selection types for the block tree.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node in the block tree.
///
/// `client_id` is unique across the whole tree. `attributes` is the opaque
/// payload the editor attaches to a block; it flattens into the node on
/// serialization and is carried verbatim through every tree operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockNode {
    pub client_id: String,
    #[serde(default)]
    pub inner_blocks: Vec<BlockNode>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl BlockNode {
    pub fn new(client_id: impl Into<String>) -> Self {
        BlockNode {
            client_id: client_id.into(),
            inner_blocks: Vec::new(),
            attributes: Map::new(),
        }
    }

    pub fn with_children(client_id: impl Into<String>, inner_blocks: Vec<BlockNode>) -> Self {
        BlockNode {
            client_id: client_id.into(),
            inner_blocks,
            attributes: Map::new(),
        }
    }

    /// Number of nodes in this subtree, including the node itself.
    pub fn count(&self) -> usize {
        1 + self.inner_blocks.iter().map(BlockNode::count).sum::<usize>()
    }
}

/// Result of [`remove_item_from_tree`](crate::remove_item_from_tree).
///
/// `parent_id` is the client id of the removed node's former parent, or
/// `None` when the node sat at the root level. If the id was absent the
/// tree comes back structurally unchanged with `parent_id: None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveResult {
    pub tree: Vec<BlockNode>,
    pub parent_id: Option<String>,
}

/// Result of [`add_item_to_tree`](crate::add_item_to_tree).
///
/// `index` is the position the inserted node occupies among its new
/// siblings, or `None` when the anchor id was absent and nothing was
/// inserted. `parent_id` is `None` for a root-level insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertResult {
    pub tree: Vec<BlockNode>,
    pub parent_id: Option<String>,
    pub index: Option<usize>,
}

/// The move descriptor handed to the external store action that commits a
/// drag-and-drop reorder.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveTarget {
    /// The block that moved.
    pub client_id: String,
    /// Its parent before the move (`None` = root level).
    pub original_parent: Option<String>,
    /// Its parent after the move (`None` = root level).
    pub target_parent: Option<String>,
    /// Its index among its new siblings.
    pub target_index: usize,
}

/// One row of the flattened list view, as a drop target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropPosition {
    pub client_id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Whether a dragged block may be dropped next to this row.
    #[serde(default)]
    pub drop_sibling: bool,
    /// Whether a dragged block may be dropped into this row as a child.
    #[serde(default)]
    pub drop_container: bool,
}

/// The editor's current block selection: a single block or a
/// multi-selection set.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Single(String),
    Multi(Vec<String>),
}

/// Whether `client_id` is part of the selection.
///
/// An empty multi-selection matches nothing.
pub fn is_client_id_selected(client_id: &str, selection: &Selection) -> bool {
    match selection {
        Selection::Single(selected) => selected == client_id,
        Selection::Multi(selected) => selected.iter().any(|id| id == client_id),
    }
}
