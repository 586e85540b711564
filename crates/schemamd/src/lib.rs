//! # schemamd - schema reference documentation
//!
//! Renders the schema of an infrastructure provider (its resources, data sources and the provider configuration
//! itself) as Markdown reference documentation. The output is meant to be committed and diffed, so it has to be
//! byte-for-byte reproducible.
//!
//! ## Introduction for developers
//!
//! ### Schema terms
//!
//! - a `schema` has exactly one root `block`
//! - a `block` contains
//!   - `attributes`: a named value with a [value_type::Type] or a `nested type`
//!   - `block types`: a named, nested `block` with a nesting mode and item limits
//! - a `nested type` is an attribute value with its own child attributes
//! - the nesting mode (`single`, `list`, `set` or `map`) tells how often a nested block/type may appear
//!
//! Every child of a block is either Required, Optional or Read-only (computed).
//!
//! ### Loading
//!
//! The infrastructure CLI prints all schemas of a provider as JSON (`providers schema -json`). That document is
//! decoded with [serde] into [schema::ProviderSchemas]. Nothing else is done at this point, invalid combinations
//! (an attribute without a type, a child without a status) are only detected while rendering.
//!
//! ### Grouping
//!
//! see [classify]
//!
//! Children of a block are bucketed into Required, Optional and Read-only. For attributes that is just their flag,
//! blocks derive it from `min_items`/`max_items` and their own children.
//!
//! ### Rendering
//!
//! see [render::render]
//!
//! **Example**
//!
//! A resource with a `rule` block (`min_items = 1`) containing a `match` block renders like this (abbreviated):
//!
//! ```markdown
//! ## Schema
//!
//! ### Required
//!
//! - **name** (String) Name.
//! - **rule** (Block List, Min: 1) (see [below for nested schema](#nestedschema--rule))
//!
//! <a id="nestedschema--rule"></a>
//! ### Nested Schema for `rule`
//!
//! Optional:
//!
//! - **match** (Block) (see [below for nested schema](#nestedschema--rule--match))
//! ```
//!
//! | **path**     | **anchor**                   | **heading**                      |
//! |--------------|------------------------------|----------------------------------|
//! | `rule`       | `nestedschema--rule`         | ``Nested Schema for `rule` ``       |
//! | `rule.match` | `nestedschema--rule--match`  | ``Nested Schema for `rule.match` `` |
//!
//! Nested sections are queued while a level is written and emitted afterwards. Sections found inside nested
//! sections are appended to the same queue, so the whole document is ordered level by level.
//!
//! The parenthesised part of each bullet is produced by [describe].
//!
//! ### Functions
//!
//! Provider functions are documented separately, see [function].
//!
pub mod classify;
pub mod describe;
pub mod error;
pub mod function;
pub mod render;
pub mod schema;
pub mod value_type;

pub use error::RenderError;
pub use render::{render, render_with_options, write_schema, RenderOptions};
pub use schema::{Attribute, Block, BlockType, NestedType, NestingMode, Schema};
pub use value_type::Type;
