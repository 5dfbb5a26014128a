//! block-kit-tree — keyed block-tree rewrite operations.
//!
//! Rust port of the list-view tree utilities in
//! `packages/block-editor/src/components/list-view/`.
//!
//! A block tree is an ordered forest of [`BlockNode`]s, each carrying a
//! globally unique `clientId`, its children, and an opaque attribute
//! payload. The operations here compute the reordered tree a drag-and-drop
//! move would produce — removal, sibling insertion, child insertion — as
//! pure functions: inputs are never mutated and every node on the path from
//! the root to the edit point is freshly built. The resulting tree and the
//! positional metadata ([`MoveTarget`]) are handed to an external store
//! action that performs the actual commit.
//!
//! # Example
//!
//! ```
//! use block_kit_tree::{add_item_to_tree, BlockNode};
//!
//! let tree = vec![BlockNode::new("a"), BlockNode::new("c")];
//! let result = add_item_to_tree(&tree, "a", &BlockNode::new("b"), true);
//! assert_eq!(result.index, Some(1));
//! assert_eq!(result.parent_id, None); // inserted at the root level
//! ```

pub mod drag;
pub mod ops;
pub mod types;

pub use drag::{find_first_valid_sibling, move_item_to_container, move_item_to_sibling};
pub use ops::{
    add_child_item_to_tree, add_item_to_tree, count_items, find_item, remove_item_from_tree,
};
pub use types::{
    is_client_id_selected, BlockNode, DropPosition, InsertResult, MoveTarget, RemoveResult,
    Selection,
};
