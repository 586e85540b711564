//! Required / Optional / Read-only grouping of block children
//!
//! Attributes carry their status directly. Nested blocks derive it:
//! - `min_items >= 1` makes a block required
//! - a block without item limits whose children are all read-only (recursively) is read-only
//! - everything else is optional
//!
//! An empty block has no children to be read-only, so it is optional.
use crate::schema::{Attribute, Block, BlockType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Group {
    Required,
    Optional,
    ReadOnly,
}

impl Group {
    /// Render order
    pub const ALL: [Group; 3] = [Group::Required, Group::Optional, Group::ReadOnly];

    /// Heading used in the top level section
    pub fn top_level_title(&self) -> &'static str {
        match self {
            Group::Required => "### Required",
            Group::Optional => "### Optional",
            Group::ReadOnly => "### Read-only",
        }
    }

    /// Line used in nested schema sections
    pub fn nested_title(&self) -> &'static str {
        match self {
            Group::Required => "Required:",
            Group::Optional => "Optional:",
            Group::ReadOnly => "Read-only:",
        }
    }

    fn matches(&self, child: Child) -> bool {
        match self {
            Group::Required => child.is_required(),
            Group::Optional => child.is_optional(),
            Group::ReadOnly => child.is_read_only(),
        }
    }
}

/// Either kind of block member
#[derive(Debug, Clone, Copy)]
pub enum Child<'a> {
    Attribute(&'a Attribute),
    Block(&'a BlockType),
}

impl<'a> Child<'a> {
    pub fn is_required(&self) -> bool {
        match self {
            Child::Attribute(att) => attribute_is_required(att),
            Child::Block(block_type) => block_is_required(block_type),
        }
    }

    pub fn is_optional(&self) -> bool {
        match self {
            Child::Attribute(att) => attribute_is_optional(att),
            Child::Block(block_type) => block_is_optional(block_type),
        }
    }

    pub fn is_read_only(&self) -> bool {
        match self {
            Child::Attribute(att) => attribute_is_read_only(att),
            Child::Block(block_type) => block_is_read_only(block_type),
        }
    }

    /// First group in render order whose predicate holds
    ///
    /// `None` means the schema violates the one-status-per-child invariant.
    pub fn group(&self) -> Option<Group> {
        Group::ALL.into_iter().find(|group| group.matches(*self))
    }
}

pub fn attribute_is_required(att: &Attribute) -> bool {
    att.required
}

pub fn attribute_is_optional(att: &Attribute) -> bool {
    att.optional && !att.required
}

pub fn attribute_is_read_only(att: &Attribute) -> bool {
    att.computed && !att.optional && !att.required
}

pub fn block_is_required(block_type: &BlockType) -> bool {
    block_type.min_items >= 1
}

pub fn block_is_read_only(block_type: &BlockType) -> bool {
    block_type.min_items == 0
        && block_type.max_items == 0
        && !block_type.block.is_empty()
        && all_children_read_only(&block_type.block)
}

pub fn block_is_optional(block_type: &BlockType) -> bool {
    !block_is_required(block_type) && !block_is_read_only(block_type)
}

fn all_children_read_only(block: &Block) -> bool {
    block.attributes.values().all(attribute_is_read_only)
        && block.nested_blocks.values().all(block_is_read_only)
}
