//! Parameter list rendering.

use scriptalias_core::identifier::{escape_identifier, is_identifier};
use scriptalias_core::{DefaultValue, Parameter, ParameterModifier, TypeRef};

use super::{RenderError, TypeEmitter, literal};

/// Renders parameter lists and the matching call-site argument lists.
#[derive(Clone, Debug, Default)]
pub struct ParameterEmitter {
    types: TypeEmitter,
}

impl ParameterEmitter {
    pub fn new(types: TypeEmitter) -> Self {
        Self { types }
    }

    /// `[modifier ]Type name[ = default]`, comma separated.
    pub fn render(&self, parameters: &[Parameter]) -> Result<String, RenderError> {
        let mut out = String::new();
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_parameter(&mut out, parameter)?;
        }
        Ok(out)
    }

    /// Forwarding arguments: names with `ref`/`out`/`in` where required.
    pub fn render_arguments(&self, parameters: &[Parameter]) -> Result<String, RenderError> {
        let mut out = String::new();
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            check_name(parameter)?;
            match parameter.modifier {
                ParameterModifier::Ref | ParameterModifier::Out | ParameterModifier::In => {
                    if let Some(keyword) = parameter.modifier.keyword() {
                        out.push_str(keyword);
                        out.push(' ');
                    }
                }
                ParameterModifier::None | ParameterModifier::This | ParameterModifier::Params => {}
            }
            out.push_str(&escape_identifier(&parameter.name));
        }
        Ok(out)
    }

    fn write_parameter(&self, out: &mut String, parameter: &Parameter) -> Result<(), RenderError> {
        check_name(parameter)?;
        if let Some(keyword) = parameter.modifier.keyword() {
            out.push_str(keyword);
            out.push(' ');
        }
        out.push_str(&self.types.render(&parameter.ty)?);
        out.push(' ');
        out.push_str(&escape_identifier(&parameter.name));

        if let Some(default) = &parameter.default {
            if !matches!(
                parameter.modifier,
                ParameterModifier::None | ParameterModifier::In
            ) {
                return Err(RenderError::InvalidParameter {
                    name: parameter.name.clone(),
                    reason: "default value on a ref, out, this or params parameter",
                });
            }
            out.push_str(" = ");
            out.push_str(&self.default_value(parameter, default)?);
        }
        Ok(())
    }

    fn default_value(
        &self,
        parameter: &Parameter,
        value: &DefaultValue,
    ) -> Result<String, RenderError> {
        let target = constant_type(&parameter.ty);
        let rendered = match value {
            DefaultValue::Null => "null".to_string(),
            DefaultValue::Bool(b) => b.to_string(),
            DefaultValue::Integer(n) if is_user_value_type(target) => {
                // `(T)-1` parses as a subtraction.
                let target = self.types.render(target)?;
                if *n < 0 {
                    format!("({target})({n})")
                } else {
                    format!("({target}){n}")
                }
            }
            DefaultValue::Integer(n) => n.to_string(),
            DefaultValue::Float(f) => {
                let mut real = literal::float(*f).ok_or_else(|| RenderError::InvalidParameter {
                    name: parameter.name.clone(),
                    reason: "non-finite default value",
                })?;
                // An unsuffixed real literal is a double.
                match system_name(target) {
                    Some("Single") => real.push('f'),
                    Some("Decimal") => real.push('m'),
                    _ => {}
                }
                real
            }
            DefaultValue::String(s) => literal::string(s),
            DefaultValue::Char(c) => literal::character(*c),
            DefaultValue::Default => format!("default({})", self.types.render(&parameter.ty)?),
        };
        Ok(rendered)
    }
}

/// The type a default constant converts to: by-ref and nullable wrappers removed.
fn constant_type(ty: &TypeRef) -> &TypeRef {
    match ty {
        TypeRef::ByRef { inner } | TypeRef::Nullable { inner } => constant_type(inner),
        _ => ty,
    }
}

fn system_name(ty: &TypeRef) -> Option<&str> {
    match ty {
        TypeRef::Named {
            namespace: Some(namespace),
            name,
            arguments,
            ..
        } if namespace == "System" && arguments.is_empty() => Some(name.as_str()),
        _ => None,
    }
}

/// Enums and other non-primitive value types need an explicit cast from an integer.
fn is_user_value_type(ty: &TypeRef) -> bool {
    matches!(ty, TypeRef::Named { value_type: true, .. }) && system_name(ty).is_none()
}

fn check_name(parameter: &Parameter) -> Result<(), RenderError> {
    if is_identifier(&parameter.name) {
        Ok(())
    } else {
        Err(RenderError::InvalidName(parameter.name.clone()))
    }
}
