//! schema to markdown rendering
//!
//! The document starts with `## Schema`, followed by the root block's children in three groups (Required, Optional,
//! Read-only). Every nested block and every attribute with a nested type links to its own
//! `### Nested Schema for` section. Those sections are queued while writing and emitted after the current level
//! is done, so the document is laid out level by level.
//!
//! Output is byte-for-byte reproducible: names are sorted explicitly before anything is written.
use crate::classify::{Child, Group};
use crate::describe;
use crate::error::{ChildKind, RenderError};
use crate::schema::{Attribute, Block, Schema};
use crate::value_type::Type;
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::Write;

/// Bookkeeping fields users should not have to interact with
///
/// Not applied unless requested via [RenderOptions::with_default_hidden_fields].
pub const DEFAULT_HIDDEN_FIELDS: [&str; 4] = ["id", "kind", "metadata.namespace", "metadata.revision"];

const NESTED_ANCHOR_PREFIX: &str = "nestedschema--";

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Dot separated paths of children to leave out
    hidden_fields: BTreeSet<String>,
    /// Repeat Required/Optional/Read-only inside each bullet
    status_qualifiers: bool,
}

impl RenderOptions {
    pub fn hide(mut self, path: impl Into<String>) -> Self {
        self.hidden_fields.insert(path.into());
        self
    }

    pub fn with_default_hidden_fields(self) -> Self {
        DEFAULT_HIDDEN_FIELDS
            .into_iter()
            .fold(self, |options, path| options.hide(path))
    }

    pub fn with_status_qualifiers(mut self, enabled: bool) -> Self {
        self.status_qualifiers = enabled;
        self
    }

    pub fn is_hidden(&self, path: &[&str]) -> bool {
        self.hidden_fields.contains(&path.join("."))
    }
}

/// Render with default options
pub fn render(schema: &Schema) -> Result<String, RenderError> {
    render_with_options(schema, &RenderOptions::default())
}

/// Render into a fresh buffer, nothing is returned on failure
pub fn render_with_options(schema: &Schema, options: &RenderOptions) -> Result<String, RenderError> {
    let mut out = String::new();
    write_schema(&mut out, schema, options)?;
    Ok(out)
}

/// Render into `w`
///
/// On error `w` may hold a partial document, callers should not publish it.
#[tracing::instrument(level = "trace", skip_all)]
pub fn write_schema<W: Write + ?Sized>(
    w: &mut W,
    schema: &Schema,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    w.write_str("## Schema\n\n")?;

    Renderer::new(w, options)
        .run(&schema.block)
        .map_err(|err| RenderError::Schema(Box::new(err)))
}

/// Link target of a nested schema section
pub fn anchor_id(path: &[&str]) -> String {
    format!("{NESTED_ANCHOR_PREFIX}{}", path.join("--"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionStyle {
    TopLevel,
    Nested,
}

/// Children of a section
#[derive(Debug, Clone, Copy)]
enum Members<'s> {
    Block(&'s Block),
    Attributes(&'s IndexMap<String, Attribute>),
}

impl<'s> Members<'s> {
    fn children(&self) -> Vec<(&'s str, Child<'s>)> {
        match self {
            Members::Block(block) => block
                .attributes
                .iter()
                .map(|(name, att)| (name.as_str(), Child::Attribute(att)))
                .chain(
                    block
                        .nested_blocks
                        .iter()
                        .map(|(name, block_type)| (name.as_str(), Child::Block(block_type))),
                )
                .collect(),
            Members::Attributes(attributes) => attributes
                .iter()
                .map(|(name, att)| (name.as_str(), Child::Attribute(att)))
                .collect(),
        }
    }
}

#[derive(Debug, derive_new::new)]
struct NestedSection<'s> {
    anchor_id: String,
    path: Vec<&'s str>,
    members: Members<'s>,
}

struct Renderer<'s, 'w, W: Write + ?Sized> {
    w: &'w mut W,
    options: &'w RenderOptions,
    pending: VecDeque<NestedSection<'s>>,
}

impl<'s, 'w, W: Write + ?Sized> Renderer<'s, 'w, W> {
    fn new(w: &'w mut W, options: &'w RenderOptions) -> Self {
        Self {
            w,
            options,
            pending: VecDeque::new(),
        }
    }

    fn run(mut self, root: &'s Block) -> Result<(), RenderError> {
        self.write_members(&[], Members::Block(root), SectionStyle::TopLevel)?;

        while let Some(section) = self.pending.pop_front() {
            tracing::debug!(anchor = %section.anchor_id, "writing nested schema section");

            writeln!(self.w, "<a id=\"{}\"></a>", section.anchor_id)?;
            write!(
                self.w,
                "### Nested Schema for `{}`\n\n",
                section.path.join(".")
            )?;
            self.write_members(&section.path, section.members, SectionStyle::Nested)?;
            self.w.write_char('\n')?;
        }

        Ok(())
    }

    fn write_members(
        &mut self,
        parents: &[&'s str],
        members: Members<'s>,
        style: SectionStyle,
    ) -> Result<(), RenderError> {
        let mut groups: BTreeMap<Group, Vec<(&'s str, Child<'s>)>> = BTreeMap::new();

        for (name, child) in members.children() {
            let path = child_path(parents, name);
            if self.options.is_hidden(&path) {
                tracing::trace!(path = %path.join("."), "hidden");
                continue;
            }

            let Some(group) = child.group() else {
                return Err(RenderError::Unclassified(name.to_string()).in_child(kind(child), &path));
            };
            tracing::trace!(path = %path.join("."), ?group, "classified");

            groups.entry(group).or_default().push((name, child));
        }

        for group in Group::ALL {
            let Some(mut children) = groups.remove(&group) else {
                continue;
            };
            children.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

            let title = match style {
                SectionStyle::TopLevel => group.top_level_title(),
                SectionStyle::Nested => group.nested_title(),
            };
            write!(self.w, "{title}\n\n")?;

            for (name, child) in children {
                let path = child_path(parents, name);
                self.write_child(&path, child)
                    .map_err(|err| err.in_child(kind(child), &path))?;
            }

            self.w.write_char('\n')?;
        }

        Ok(())
    }

    fn write_child(&mut self, path: &[&'s str], child: Child<'s>) -> Result<(), RenderError> {
        let name = path.last().copied().unwrap_or_default();
        let include_rw = self.options.status_qualifiers;

        match child {
            Child::Block(block_type) => {
                write!(self.w, "- **{name}** ")?;
                describe::write_block_type_description(&mut *self.w, block_type)?;
                let anchor_id = self.defer(path, Members::Block(&block_type.block));
                writeln!(self.w, " (see [below for nested schema](#{anchor_id}))")?;
            }
            Child::Attribute(att) => match &att.nested_type {
                Some(nested_type) => {
                    write!(self.w, "- **{name}** ")?;
                    describe::write_nested_type_description(&mut *self.w, att, include_rw)?;
                    let anchor_id = self.defer(path, Members::Attributes(&nested_type.attributes));
                    writeln!(self.w, " (see [below for nested schema](#{anchor_id}))")?;
                }
                None => {
                    if let Some(ty) = att.attribute_type.as_ref().filter(|ty| needs_expansion(ty)) {
                        return Err(RenderError::UnsupportedStructure(ty.friendly_name()));
                    }

                    write!(self.w, "- **{name}** ")?;
                    describe::write_attribute_description(&mut *self.w, att, include_rw)?;
                    self.w.write_char('\n')?;
                }
            },
        }

        Ok(())
    }

    /// Queue a nested section, returns its anchor id
    fn defer(&mut self, path: &[&'s str], members: Members<'s>) -> String {
        let anchor_id = anchor_id(path);
        self.pending
            .push_back(NestedSection::new(anchor_id.clone(), path.to_vec(), members));
        anchor_id
    }
}

fn child_path<'s>(parents: &[&'s str], name: &'s str) -> Vec<&'s str> {
    let mut path = Vec::with_capacity(parents.len() + 1);
    path.extend_from_slice(parents);
    path.push(name);
    path
}

fn kind(child: Child) -> ChildKind {
    match child {
        Child::Attribute(_) => ChildKind::Attribute,
        Child::Block(_) => ChildKind::Block,
    }
}

/// Objects, and collections of objects, would need their fields documented
fn needs_expansion(ty: &Type) -> bool {
    ty.is_object() || ty.element_type().is_some_and(Type::is_object)
}
