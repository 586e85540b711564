//! schema data model
//!
//! Mirrors the JSON document the infrastructure CLI prints for `providers schema -json`.
//! A [Schema] is rooted at one [Block]; blocks contain [Attribute]s and nested [BlockType]s, attributes either
//! have a plain [Type] or a [NestedType] with child attributes of its own.
//!
//! The model is only ever read while rendering. Name maps preserve document order, which the renderer never relies on.
use crate::value_type::Type;
use indexmap::IndexMap;
use serde::Deserialize;

/// Full description of one resource, data source or provider configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub version: u64,
    pub block: Block,
}

/// One level of configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub attributes: IndexMap<String, Attribute>,
    #[serde(default, rename = "block_types")]
    pub nested_blocks: IndexMap<String, BlockType>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub deprecated: bool,
}

impl Block {
    /// No attributes and no nested blocks
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.nested_blocks.is_empty()
    }
}

/// A single named value
///
/// Exactly one of `attribute_type` and `nested_type` is expected to be set, and exactly one of
/// `required`, `optional` and `computed` (`optional` + `computed` is tolerated and reads as optional).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attribute {
    #[serde(default, rename = "type")]
    pub attribute_type: Option<Type>,
    #[serde(default)]
    pub nested_type: Option<NestedType>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub write_only: bool,
}

/// Attribute value that is itself a structured object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NestedType {
    #[serde(default)]
    pub attributes: IndexMap<String, Attribute>,
    #[serde(default)]
    pub nesting_mode: NestingMode,
    #[serde(default)]
    pub min_items: u64,
    #[serde(default)]
    pub max_items: u64,
}

/// Reference to a nested block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockType {
    #[serde(default)]
    pub nesting_mode: NestingMode,
    pub block: Block,
    #[serde(default)]
    pub min_items: u64,
    #[serde(default)]
    pub max_items: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NestingMode {
    #[default]
    Single,
    List,
    Set,
    Map,
}

impl NestingMode {
    /// Suffix following `Block`/`Attributes` in descriptions
    pub fn suffix(&self) -> &'static str {
        match self {
            NestingMode::Single => "",
            NestingMode::List => " List",
            NestingMode::Set => " Set",
            NestingMode::Map => " Map",
        }
    }
}

/// Output of `providers schema -json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSchemas {
    #[serde(default)]
    pub format_version: String,
    #[serde(default)]
    pub provider_schemas: IndexMap<String, ProviderSchema>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSchema {
    #[serde(default)]
    pub provider: Option<Schema>,
    #[serde(default)]
    pub resource_schemas: IndexMap<String, Schema>,
    #[serde(default)]
    pub data_source_schemas: IndexMap<String, Schema>,
    #[serde(default)]
    pub functions: IndexMap<String, FunctionSignature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionSignature {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub summary: String,
    pub return_type: Type,
    #[serde(default)]
    pub parameters: Vec<FunctionParameter>,
    #[serde(default)]
    pub variadic_parameter: Option<FunctionParameter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionParameter {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_nullable: bool,
    #[serde(rename = "type")]
    pub parameter_type: Type,
}

impl Schema {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Block {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ProviderSchemas {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<Block> for Schema {
    fn from(block: Block) -> Self {
        Schema { version: 0, block }
    }
}

/// Utility macro to create a [Block] from JSON text
///
/// ```
/// # use schemamd::block;
/// let block = block!(r#"{"attributes": {"id": {"type": "string", "computed": true}}}"#);
/// assert!(block.attributes["id"].computed);
/// ```
///
/// # Panic
/// Panics on invalid input
///
/// ```should_panic
/// # use schemamd::block;
/// block!(r#"{"attributes": 42}"#);
/// ```
#[macro_export]
macro_rules! block {
    { $json:expr } => {
        $crate::schema::Block::from_json($json).expect("block must decode")
    };
}

/// Utility macro to create a [Schema] from the JSON text of its root block
///
/// ```
/// # use schemamd::schema;
/// let schema = schema!(r#"{"attributes": {"name": {"type": "string", "required": true}}}"#);
/// assert!(schema.block.attributes["name"].required);
/// ```
#[macro_export]
macro_rules! schema {
    { $json:expr } => {
        $crate::schema::Schema::from($crate::block!($json))
    };
}
