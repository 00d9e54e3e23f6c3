//! Property alias declarations.

use std::fmt::Write;

use scriptalias_core::identifier::{escape_identifier, is_identifier};
use scriptalias_core::{PropertySignature, TypeRef};

use super::{EmitConfig, RenderError, TypeEmitter, write_obsolete};

/// Writes a read-only property whose getter forwards to the aliased accessor.
///
/// Cached properties memoise the first result in a `_Name` backing field.
#[derive(Clone, Debug)]
pub struct PropertyAliasEmitter {
    types: TypeEmitter,
    indent: [String; 3],
    context_name: String,
}

impl PropertyAliasEmitter {
    pub fn new(config: &EmitConfig, types: TypeEmitter) -> Self {
        Self {
            types,
            indent: [
                config.indentation(1),
                config.indentation(2),
                config.indentation(3),
            ],
            context_name: config.context_name.clone(),
        }
    }

    /// Write the declaration. The closing brace ends the output; no newline follows.
    pub fn emit<W: Write>(
        &self,
        out: &mut W,
        property: &PropertySignature,
    ) -> Result<(), RenderError> {
        if !is_identifier(&property.name) {
            return Err(RenderError::InvalidName(property.name.clone()));
        }
        if property.property_type.is_void() {
            return Err(RenderError::InvalidType(format!(
                "property `{}` can't be void",
                property.name
            )));
        }
        if let Some(generic) = generic_parameter(&property.property_type) {
            return Err(RenderError::InvalidType(format!(
                "property `{}` can't use generic parameter `{generic}`",
                property.name
            )));
        }
        let name = escape_identifier(&property.name);
        let ty = self.types.render(&property.property_type)?;
        let call = format!(
            "{}.{name}({})",
            self.types.render(&property.declaring_type)?,
            self.context_name
        );
        let [i1, i2, i3] = &self.indent;

        if property.cached {
            let wrapped = needs_nullable_backing(&property.property_type);
            let field = format!("_{}", property.name);
            let field_type = if wrapped { format!("{ty}?") } else { ty.clone() };

            writeln!(out, "private {field_type} {field};")?;
            if let Some(obsolete) = &property.obsolete {
                write_obsolete(out, obsolete)?;
            }
            writeln!(out, "public {ty} {name}")?;
            writeln!(out, "{{")?;
            writeln!(out, "{i1}get")?;
            writeln!(out, "{i1}{{")?;
            writeln!(out, "{i2}if ({field} == null)")?;
            writeln!(out, "{i2}{{")?;
            writeln!(out, "{i3}{field} = {call};")?;
            writeln!(out, "{i2}}}")?;
            if wrapped {
                writeln!(out, "{i2}return {field}.Value;")?;
            } else {
                writeln!(out, "{i2}return {field};")?;
            }
        } else {
            if let Some(obsolete) = &property.obsolete {
                write_obsolete(out, obsolete)?;
            }
            writeln!(out, "public {ty} {name}")?;
            writeln!(out, "{{")?;
            writeln!(out, "{i1}get")?;
            writeln!(out, "{i1}{{")?;
            writeln!(out, "{i2}return {call};")?;
        }
        writeln!(out, "{i1}}}")?;
        write!(out, "}}")?;
        Ok(())
    }
}

/// Value types can't be compared with `null` unless wrapped in `Nullable<T>`.
fn needs_nullable_backing(ty: &TypeRef) -> bool {
    ty.is_value_type() && !matches!(ty, TypeRef::Nullable { .. })
}

/// First generic parameter mentioned by `ty`. Properties have no type parameters to bind it.
fn generic_parameter(ty: &TypeRef) -> Option<&str> {
    match ty {
        TypeRef::GenericParameter { name } => Some(name.as_str()),
        TypeRef::Named { arguments, .. } => arguments.iter().find_map(generic_parameter),
        TypeRef::Array { element: inner, .. }
        | TypeRef::Nullable { inner }
        | TypeRef::ByRef { inner } => generic_parameter(inner),
    }
}
