//! provider function documentation
use crate::describe::type_name;
use crate::error::RenderError;
use crate::schema::{FunctionParameter, FunctionSignature};
use std::fmt::Write;

/// Code block with the call signature, e.g. `parse(input string, opts number...) string`
#[tracing::instrument(level = "trace", skip(signature))]
pub fn render_signature(name: &str, signature: &FunctionSignature) -> String {
    let mut parameters: Vec<String> = signature
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.name, p.parameter_type.friendly_name()))
        .collect();

    if let Some(variadic) = &signature.variadic_parameter {
        parameters.push(format!(
            "{} {}...",
            variadic.name,
            variadic.parameter_type.friendly_name()
        ));
    }

    format!(
        "```text\n{name}({}) {}\n```",
        parameters.join(", "),
        signature.return_type.friendly_name()
    )
}

/// Numbered list of the positional parameters
#[tracing::instrument(level = "trace", skip_all)]
pub fn render_arguments(signature: &FunctionSignature) -> Result<String, RenderError> {
    let mut out = String::new();
    for parameter in &signature.parameters {
        write_argument(&mut out, parameter, false)?;
        out.push('\n');
    }
    Ok(out)
}

/// Single list item for the variadic parameter, empty if there is none
#[tracing::instrument(level = "trace", skip_all)]
pub fn render_variadic_arg(signature: &FunctionSignature) -> Result<String, RenderError> {
    let mut out = String::new();
    if let Some(variadic) = &signature.variadic_parameter {
        write_argument(&mut out, variadic, true)?;
    }
    Ok(out)
}

fn write_argument(
    out: &mut String,
    parameter: &FunctionParameter,
    variadic: bool,
) -> Result<(), RenderError> {
    write!(out, "1. `{}` (", parameter.name)?;
    if variadic {
        out.push_str("Variadic, ");
    }
    out.push_str(&type_name(&parameter.parameter_type)?);
    if parameter.is_nullable {
        out.push_str(", Nullable");
    }
    out.push(')');

    let description = parameter.description.trim();
    if !description.is_empty() {
        write!(out, " {description}")?;
    }

    Ok(())
}
