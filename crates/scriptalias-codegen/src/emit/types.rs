//! Type reference rendering.

use scriptalias_core::TypeRef;
use scriptalias_core::identifier::escape_identifier;

use super::{EmitConfig, RenderError};

/// Renders type references as C# type syntax.
#[derive(Clone, Debug)]
pub struct TypeEmitter {
    qualify: bool,
}

impl Default for TypeEmitter {
    fn default() -> Self {
        Self::new(&EmitConfig::default())
    }
}

impl TypeEmitter {
    pub fn new(config: &EmitConfig) -> Self {
        Self {
            qualify: config.qualify_types,
        }
    }

    pub fn render(&self, ty: &TypeRef) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_type(&mut out, ty)?;
        Ok(out)
    }

    fn write_type(&self, out: &mut String, ty: &TypeRef) -> Result<(), RenderError> {
        match ty {
            TypeRef::Named {
                namespace,
                name,
                arguments,
                ..
            } => {
                if name.is_empty() {
                    return Err(RenderError::InvalidType("empty type name".to_string()));
                }
                if arguments.is_empty()
                    && let Some(keyword) = keyword(namespace.as_deref(), name)
                {
                    out.push_str(keyword);
                    return Ok(());
                }
                if self.qualify
                    && let Some(ns) = namespace.as_deref().filter(|ns| !ns.is_empty())
                {
                    out.push_str(ns);
                    out.push('.');
                }
                write_metadata_name(out, name);
                if !arguments.is_empty() {
                    out.push('<');
                    for (i, arg) in arguments.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        self.write_type(out, arg)?;
                    }
                    out.push('>');
                }
            }
            TypeRef::GenericParameter { name } => {
                if name.is_empty() {
                    return Err(RenderError::InvalidType(
                        "empty generic parameter name".to_string(),
                    ));
                }
                out.push_str(&escape_identifier(name));
            }
            TypeRef::Array { element, rank } => {
                if *rank == 0 {
                    return Err(RenderError::InvalidType("array of rank 0".to_string()));
                }
                self.write_type(out, element)?;
                out.push('[');
                for _ in 1..*rank {
                    out.push(',');
                }
                out.push(']');
            }
            TypeRef::Nullable { inner } => {
                self.write_type(out, inner)?;
                out.push('?');
            }
            // ref/out/in are parameter modifiers; the type itself renders as the target.
            TypeRef::ByRef { inner } => self.write_type(out, inner)?,
        }
        Ok(())
    }
}

/// C# keyword for a `System` type, if it has one.
fn keyword(namespace: Option<&str>, name: &str) -> Option<&'static str> {
    if namespace != Some("System") {
        return None;
    }
    let keyword = match name {
        "Void" => "void",
        "Boolean" => "bool",
        "Byte" => "byte",
        "SByte" => "sbyte",
        "Char" => "char",
        "Decimal" => "decimal",
        "Double" => "double",
        "Single" => "float",
        "Int16" => "short",
        "UInt16" => "ushort",
        "Int32" => "int",
        "UInt32" => "uint",
        "Int64" => "long",
        "UInt64" => "ulong",
        "Object" => "object",
        "String" => "string",
        _ => return None,
    };
    Some(keyword)
}

/// `Outer`1+Inner` → `Outer.Inner`.
fn write_metadata_name(out: &mut String, name: &str) {
    for (i, segment) in name.split('+').enumerate() {
        if i > 0 {
            out.push('.');
        }
        let segment = segment.split_once('`').map_or(segment, |(base, _)| base);
        out.push_str(segment);
    }
}
