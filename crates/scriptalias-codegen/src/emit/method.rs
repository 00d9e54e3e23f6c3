//! Method alias declarations.

use std::fmt::Write;

use scriptalias_core::identifier::{escape_identifier, is_identifier};
use scriptalias_core::{GenericConstraint, GenericParameter, MethodSignature};

use super::{EmitConfig, ParameterEmitter, RenderError, TypeEmitter, write_obsolete};

/// Writes a method declaration forwarding to the aliased extension method.
///
/// ```text
/// public string Argument<T>(string name)
///     where T : class
/// {
///     return Cake.Common.ArgumentAliases.Argument<T>(Context, name);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct MethodAliasEmitter {
    types: TypeEmitter,
    parameters: ParameterEmitter,
    indent: String,
    context_name: String,
}

impl MethodAliasEmitter {
    pub fn new(config: &EmitConfig, types: TypeEmitter, parameters: ParameterEmitter) -> Self {
        Self {
            types,
            parameters,
            indent: config.indentation(1),
            context_name: config.context_name.clone(),
        }
    }

    /// Write the declaration. The closing brace ends the output; no newline follows.
    pub fn emit<W: Write>(&self, out: &mut W, method: &MethodSignature) -> Result<(), RenderError> {
        if !is_identifier(&method.name) {
            return Err(RenderError::InvalidName(method.name.clone()));
        }
        let name = escape_identifier(&method.name);
        let returns_void = method.return_type.is_void();
        let return_type = self.types.render(&method.return_type)?;
        let type_arguments = type_argument_list(&method.generic_parameters)?;
        let script_parameters = method.script_parameters();

        if let Some(obsolete) = &method.obsolete {
            write_obsolete(out, obsolete)?;
        }
        write!(
            out,
            "public {return_type} {name}{type_arguments}({})",
            self.parameters.render(script_parameters)?
        )?;
        for generic in &method.generic_parameters {
            if let Some(clause) = self.constraint_clause(generic)? {
                write!(out, "\n{}{clause}", self.indent)?;
            }
        }
        writeln!(out)?;
        writeln!(out, "{{")?;

        let mut arguments = Vec::new();
        if method.has_receiver() {
            arguments.push(self.context_name.clone());
        }
        if !script_parameters.is_empty() {
            arguments.push(self.parameters.render_arguments(script_parameters)?);
        }
        writeln!(
            out,
            "{}{}{}.{name}{type_arguments}({});",
            self.indent,
            if returns_void { "" } else { "return " },
            self.types.render(&method.declaring_type)?,
            arguments.join(", ")
        )?;
        write!(out, "}}")?;
        Ok(())
    }

    /// `where T : class, IFoo, new()`, or `None` when unconstrained.
    fn constraint_clause(&self, generic: &GenericParameter) -> Result<Option<String>, RenderError> {
        if generic.constraints.is_empty() {
            return Ok(None);
        }

        // C# requires class/struct first and new() last.
        let mut primary = Vec::new();
        let mut secondary = Vec::new();
        let mut constructor = false;
        for constraint in &generic.constraints {
            match constraint {
                GenericConstraint::Class => primary.push("class".to_string()),
                GenericConstraint::Struct => primary.push("struct".to_string()),
                GenericConstraint::Type(ty) => secondary.push(self.types.render(ty)?),
                GenericConstraint::New => constructor = true,
            }
        }
        let mut parts = primary;
        parts.extend(secondary);
        if constructor {
            parts.push("new()".to_string());
        }
        Ok(Some(format!(
            "where {} : {}",
            escape_identifier(&generic.name),
            parts.join(", ")
        )))
    }
}

fn type_argument_list(generics: &[GenericParameter]) -> Result<String, RenderError> {
    if generics.is_empty() {
        return Ok(String::new());
    }
    let mut names = Vec::with_capacity(generics.len());
    for generic in generics {
        if !is_identifier(&generic.name) {
            return Err(RenderError::InvalidName(generic.name.clone()));
        }
        names.push(escape_identifier(&generic.name));
    }
    Ok(format!("<{}>", names.join(", ")))
}
