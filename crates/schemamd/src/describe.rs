//! type names and the parenthesised qualifiers of bullet lines
//!
//! Qualifier order is part of the output format and must not change:
//!
//! | **kind**    | **qualifiers**                                                                     |
//! |-------------|------------------------------------------------------------------------------------|
//! | attribute   | type, Required/Optional/Read-only, Write-only, Sensitive, Deprecated                |
//! | nested type | `Attributes` + nesting, Min, Max, Required/Optional/Read-only, Write-only, Sensitive, Deprecated |
//! | block       | `Block` + nesting, Min, Max, Deprecated                                             |
//!
//! Each description is followed by the trimmed schema description, if there is one.
use crate::error::RenderError;
use crate::schema::{Attribute, BlockType, NestedType, NestingMode};
use crate::value_type::Type;
use std::fmt::Write;

pub const WRITE_ONLY_LINK: &str = "[Write-only](https://developer.hashicorp.com/terraform/language/resources/ephemeral#write-only-arguments)";

/// Writes the display name of a value type, e.g. `List of String`
pub fn write_type<W: Write + ?Sized>(w: &mut W, ty: &Type) -> Result<(), RenderError> {
    match ty {
        Type::Dynamic => w.write_str("Dynamic")?,
        Type::String => w.write_str("String")?,
        Type::Bool => w.write_str("Boolean")?,
        Type::Number => w.write_str("Number")?,
        Type::List(element) => {
            w.write_str("List of ")?;
            write_type(w, element)?;
        }
        Type::Set(element) => {
            w.write_str("Set of ")?;
            write_type(w, element)?;
        }
        Type::Map(element) => {
            w.write_str("Map of ")?;
            write_type(w, element)?;
        }
        Type::Object(_) => w.write_str("Object")?,
        Type::Tuple(_) => w.write_str("Tuple")?,
        Type::Unrecognized(raw) => return Err(RenderError::UnexpectedType(raw.clone())),
    }

    Ok(())
}

/// Convenience wrapper around [write_type]
pub fn type_name(ty: &Type) -> Result<String, RenderError> {
    let mut name = String::new();
    write_type(&mut name, ty)?;
    Ok(name)
}

/// `(String, Optional, Sensitive) The description.`
///
/// Attributes with a nested type render as `Object`, see [write_nested_type_description] for the richer form.
pub fn write_attribute_description<W: Write + ?Sized>(
    w: &mut W,
    att: &Attribute,
    include_rw: bool,
) -> Result<(), RenderError> {
    w.write_char('(')?;

    match (&att.nested_type, &att.attribute_type) {
        (Some(_), _) => w.write_str("Object")?,
        (None, Some(ty)) => write_type(w, ty)?,
        (None, None) => return Err(RenderError::MalformedAttribute),
    }

    if include_rw {
        write_rw(w, att)?;
    }
    write_flags(w, att)?;
    w.write_char(')')?;

    write_description(w, &att.description)
}

/// `(Attributes List, Min: 1, Required) The description.`
pub fn write_nested_type_description<W: Write + ?Sized>(
    w: &mut W,
    att: &Attribute,
    include_rw: bool,
) -> Result<(), RenderError> {
    let Some(NestedType {
        nesting_mode,
        min_items,
        max_items,
        ..
    }) = &att.nested_type
    else {
        return Err(RenderError::MalformedAttribute);
    };

    w.write_str("(Attributes")?;
    write_nesting(w, *nesting_mode, *min_items, *max_items)?;

    if include_rw {
        write_rw(w, att)?;
    }
    write_flags(w, att)?;
    w.write_char(')')?;

    write_description(w, &att.description)
}

/// `(Block Set, Max: 4, Deprecated) The description.`
pub fn write_block_type_description<W: Write + ?Sized>(
    w: &mut W,
    block_type: &BlockType,
) -> Result<(), RenderError> {
    w.write_str("(Block")?;
    write_nesting(
        w,
        block_type.nesting_mode,
        block_type.min_items,
        block_type.max_items,
    )?;

    if block_type.block.deprecated {
        w.write_str(", Deprecated")?;
    }
    w.write_char(')')?;

    write_description(w, &block_type.block.description)
}

fn write_nesting<W: Write + ?Sized>(
    w: &mut W,
    mode: NestingMode,
    min_items: u64,
    max_items: u64,
) -> Result<(), RenderError> {
    w.write_str(mode.suffix())?;

    if min_items > 0 {
        write!(w, ", Min: {min_items}")?;
    }
    if max_items > 0 {
        write!(w, ", Max: {max_items}")?;
    }

    Ok(())
}

fn write_rw<W: Write + ?Sized>(w: &mut W, att: &Attribute) -> Result<(), RenderError> {
    if att.required {
        w.write_str(", Required")?;
    } else if att.optional {
        w.write_str(", Optional")?;
    } else if att.computed {
        w.write_str(", Read-only")?;
    }

    Ok(())
}

fn write_flags<W: Write + ?Sized>(w: &mut W, att: &Attribute) -> Result<(), RenderError> {
    if att.write_only {
        write!(w, ", {WRITE_ONLY_LINK}")?;
    }
    if att.sensitive {
        w.write_str(", Sensitive")?;
    }
    if att.deprecated {
        w.write_str(", Deprecated")?;
    }

    Ok(())
}

fn write_description<W: Write + ?Sized>(w: &mut W, description: &str) -> Result<(), RenderError> {
    let description = description.trim();
    if !description.is_empty() {
        write!(w, " {description}")?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::schema::Block;
    use pretty_assertions::assert_eq;

    fn attribute_description(att: &Attribute) -> String {
        let mut out = String::new();
        write_attribute_description(&mut out, att, true).expect("must render");
        out
    }

    fn nested_type_description(att: &Attribute) -> String {
        let mut out = String::new();
        write_nested_type_description(&mut out, att, true).expect("must render");
        out
    }

    fn block_type_description(block_type: &BlockType) -> String {
        let mut out = String::new();
        write_block_type_description(&mut out, block_type).expect("must render");
        out
    }

    fn string_attribute() -> Attribute {
        Attribute {
            attribute_type: Some(Type::String),
            description: "This is an attribute.".to_string(),
            ..Default::default()
        }
    }

    fn nested_attribute(nesting_mode: NestingMode, min_items: u64, max_items: u64) -> Attribute {
        let mut child = string_attribute();
        child.required = true;

        Attribute {
            description: "This is an attribute.".to_string(),
            nested_type: Some(NestedType {
                attributes: [("foo".to_string(), child)].into_iter().collect(),
                nesting_mode,
                min_items,
                max_items,
            }),
            ..Default::default()
        }
    }

    fn block_type(nesting_mode: NestingMode, min_items: u64, max_items: u64) -> BlockType {
        BlockType {
            nesting_mode,
            min_items,
            max_items,
            block: Block {
                description: "This is a block.".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn type_names() {
        let object = Type::Object([("bool".to_string(), Type::Bool)].into_iter().collect());

        for (expected, ty) in [
            ("Boolean", Type::Bool),
            ("Dynamic", Type::Dynamic),
            ("Number", Type::Number),
            ("String", Type::String),
            ("List of Boolean", Type::list(Type::Bool)),
            ("List of Dynamic", Type::list(Type::Dynamic)),
            ("Map of Boolean", Type::map(Type::Bool)),
            ("Set of Boolean", Type::set(Type::Bool)),
            ("Object", Type::Object(Default::default())),
            ("Object", object.clone()),
            ("Tuple", Type::Tuple(vec![])),
            ("Tuple", Type::Tuple(vec![Type::Bool])),
            (
                "List of Map of Set of Object",
                Type::list(Type::map(Type::set(object))),
            ),
        ] {
            assert_eq!(type_name(&ty).expect("known type"), expected);
        }
    }

    #[test]
    fn unexpected_type() {
        let error = type_name(&Type::list(Type::Unrecognized("\"capsule\"".to_string())))
            .expect_err("must fail");
        assert_eq!(error.to_string(), "unexpected type \"capsule\"");
    }

    #[test]
    fn attribute_qualifiers() {
        let required = Attribute {
            required: true,
            ..string_attribute()
        };
        let optional = Attribute {
            optional: true,
            ..string_attribute()
        };
        let optional_computed = Attribute {
            optional: true,
            computed: true,
            ..string_attribute()
        };
        let computed = Attribute {
            computed: true,
            ..string_attribute()
        };

        for (expected, att) in [
            ("(String, Required) This is an attribute.", required.clone()),
            (
                "(String, Required, [Write-only](https://developer.hashicorp.com/terraform/language/resources/ephemeral#write-only-arguments)) This is an attribute.",
                Attribute { write_only: true, ..required.clone() },
            ),
            (
                "(String, Required, Deprecated) This is an attribute.",
                Attribute { deprecated: true, ..required.clone() },
            ),
            (
                "(String, Required, Sensitive, Deprecated) This is an attribute.",
                Attribute { deprecated: true, sensitive: true, ..required },
            ),
            ("(String, Optional) This is an attribute.", optional.clone()),
            ("(String, Optional) This is an attribute.", optional_computed.clone()),
            (
                "(String, Optional, Deprecated) This is an attribute.",
                Attribute { deprecated: true, ..optional },
            ),
            (
                "(String, Optional, Sensitive, Deprecated) This is an attribute.",
                Attribute { deprecated: true, sensitive: true, ..optional_computed },
            ),
            ("(String, Read-only) This is an attribute.", computed.clone()),
            (
                "(String, Read-only, Deprecated) This is an attribute.",
                Attribute { deprecated: true, ..computed.clone() },
            ),
            (
                "(String, Read-only, Sensitive, Deprecated) This is an attribute.",
                Attribute { deprecated: true, sensitive: true, ..computed },
            ),
        ] {
            assert_eq!(attribute_description(&att), expected);
        }
    }

    #[test]
    fn attribute_description_whitespace() {
        for description in [
            " This is an attribute.",
            "This is an attribute. ",
            "\n\t This is an attribute.\n\t ",
        ] {
            let att = Attribute {
                required: true,
                description: description.to_string(),
                ..string_attribute()
            };
            assert_eq!(
                attribute_description(&att),
                "(String, Required) This is an attribute."
            );
        }

        let blank = Attribute {
            required: true,
            description: " \n\t".to_string(),
            ..string_attribute()
        };
        assert_eq!(attribute_description(&blank), "(String, Required)");
    }

    #[test]
    fn attribute_without_rw() {
        let att = Attribute {
            required: true,
            sensitive: true,
            ..string_attribute()
        };
        let mut out = String::new();
        write_attribute_description(&mut out, &att, false).unwrap();
        assert_eq!(out, "(String, Sensitive) This is an attribute.");
    }

    #[test]
    fn attribute_with_nested_type_reads_object() {
        let att = Attribute {
            optional: true,
            ..nested_attribute(NestingMode::Single, 0, 0)
        };
        assert_eq!(
            attribute_description(&att),
            "(Object, Optional) This is an attribute."
        );
    }

    #[test]
    fn malformed_attribute() {
        let att = Attribute {
            required: true,
            ..Default::default()
        };
        let mut out = String::new();
        let error = write_attribute_description(&mut out, &att, true).expect_err("must fail");
        assert!(matches!(error, RenderError::MalformedAttribute));

        let error = write_nested_type_description(&mut out, &att, true).expect_err("must fail");
        assert!(matches!(error, RenderError::MalformedAttribute));
    }

    #[test]
    fn nested_type_qualifiers() {
        for (expected, att) in [
            (
                "(Attributes, Optional) This is an attribute.",
                Attribute {
                    optional: true,
                    ..nested_attribute(NestingMode::Single, 0, 0)
                },
            ),
            (
                "(Attributes, Optional, [Write-only](https://developer.hashicorp.com/terraform/language/resources/ephemeral#write-only-arguments)) This is an attribute.",
                Attribute {
                    optional: true,
                    write_only: true,
                    ..nested_attribute(NestingMode::Single, 0, 0)
                },
            ),
            (
                "(Attributes List, Min: 2, Max: 3, Required) This is an attribute.",
                Attribute {
                    required: true,
                    ..nested_attribute(NestingMode::List, 2, 3)
                },
            ),
            (
                "(Attributes Map, Read-only, Sensitive) This is an attribute.",
                Attribute {
                    computed: true,
                    sensitive: true,
                    ..nested_attribute(NestingMode::Map, 0, 0)
                },
            ),
            (
                "(Attributes Set, Min: 5, Optional, Deprecated) This is an attribute.",
                Attribute {
                    optional: true,
                    deprecated: true,
                    ..nested_attribute(NestingMode::Set, 5, 0)
                },
            ),
        ] {
            assert_eq!(nested_type_description(&att), expected);
        }
    }

    #[test]
    fn block_type_qualifiers() {
        for (expected, nesting_mode, min_items, max_items) in [
            ("(Block) This is a block.", NestingMode::Single, 0, 0),
            ("(Block, Min: 1) This is a block.", NestingMode::Single, 1, 0),
            ("(Block List) This is a block.", NestingMode::List, 0, 0),
            ("(Block List, Min: 1) This is a block.", NestingMode::List, 1, 0),
            ("(Block List, Max: 4) This is a block.", NestingMode::List, 0, 4),
            ("(Block List, Min: 1, Max: 4) This is a block.", NestingMode::List, 1, 4),
            ("(Block Set) This is a block.", NestingMode::Set, 0, 0),
            ("(Block Set, Min: 1, Max: 4) This is a block.", NestingMode::Set, 1, 4),
            ("(Block Map) This is a block.", NestingMode::Map, 0, 0),
            ("(Block Map, Max: 4) This is a block.", NestingMode::Map, 0, 4),
        ] {
            assert_eq!(
                block_type_description(&block_type(nesting_mode, min_items, max_items)),
                expected
            );
        }
    }

    #[test]
    fn deprecated_block() {
        let mut deprecated = block_type(NestingMode::List, 1, 4);
        deprecated.block.deprecated = true;
        assert_eq!(
            block_type_description(&deprecated),
            "(Block List, Min: 1, Max: 4, Deprecated) This is a block."
        );

        deprecated.block.description.clear();
        assert_eq!(
            block_type_description(&deprecated),
            "(Block List, Min: 1, Max: 4, Deprecated)"
        );
    }
}
