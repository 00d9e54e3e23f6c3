//! Structural validation of discovered aliases.

use std::collections::HashSet;

use scriptalias_core::identifier::is_identifier;
use scriptalias_core::{
    AliasSignature, GenericConstraint, MethodSignature, ParameterModifier, PropertySignature,
    ScriptAlias, TypeRef,
};

/// Check every alias and return one message per problem, in alias order.
pub fn verify_aliases(aliases: &[ScriptAlias]) -> Vec<String> {
    let mut verifier = Verifier::default();
    for alias in aliases {
        verifier.alias(alias);
    }
    verifier.problems
}

#[derive(Default)]
struct Verifier {
    problems: Vec<String>,
}

impl Verifier {
    fn report(&mut self, alias: &str, message: impl std::fmt::Display) {
        self.problems.push(format!("`{alias}`: {message}"));
    }

    fn alias(&mut self, alias: &ScriptAlias) {
        let name = alias.name();
        if !is_identifier(name) {
            self.report(name, "alias name is not a valid identifier");
        }
        if alias.namespaces.iter().any(|ns| ns.trim().is_empty()) {
            self.report(name, "empty namespace");
        }
        match &alias.signature {
            AliasSignature::Method(method) => self.method(method),
            AliasSignature::Property(property) => self.property(property),
        }
    }

    fn method(&mut self, method: &MethodSignature) {
        let name = method.name.as_str();

        let mut declared = HashSet::new();
        for generic in &method.generic_parameters {
            if !is_identifier(&generic.name) {
                self.report(
                    name,
                    format!("generic parameter `{}` is not a valid identifier", generic.name),
                );
            }
            if !declared.insert(generic.name.as_str()) {
                self.report(name, format!("duplicate generic parameter `{}`", generic.name));
            }
        }

        if !method.has_receiver() {
            self.report(name, "missing `this` receiver parameter");
        }

        let mut seen = HashSet::new();
        let last = method.parameters.len().saturating_sub(1);
        for (i, parameter) in method.parameters.iter().enumerate() {
            if !is_identifier(&parameter.name) {
                self.report(
                    name,
                    format!("parameter `{}` is not a valid identifier", parameter.name),
                );
            }
            if !seen.insert(parameter.name.as_str()) {
                self.report(name, format!("duplicate parameter `{}`", parameter.name));
            }
            match parameter.modifier {
                ParameterModifier::This if i != 0 => self.report(
                    name,
                    format!("`this` on non-leading parameter `{}`", parameter.name),
                ),
                ParameterModifier::Params if i != last => self.report(
                    name,
                    format!("`params` parameter `{}` is not last", parameter.name),
                ),
                ParameterModifier::Params if !matches!(parameter.ty, TypeRef::Array { .. }) => {
                    self.report(
                        name,
                        format!("`params` parameter `{}` is not an array", parameter.name),
                    )
                }
                _ => {}
            }
            self.type_ref(name, &parameter.ty, &declared);
        }

        self.type_ref(name, &method.return_type, &declared);
        self.type_ref(name, &method.declaring_type, &HashSet::new());
        for generic in &method.generic_parameters {
            for constraint in &generic.constraints {
                if let GenericConstraint::Type(ty) = constraint {
                    self.type_ref(name, ty, &declared);
                }
            }
        }
    }

    fn property(&mut self, property: &PropertySignature) {
        let name = property.name.as_str();
        if property.property_type.is_void() {
            self.report(name, "property type is void");
        }
        let none = HashSet::new();
        self.type_ref(name, &property.property_type, &none);
        self.type_ref(name, &property.declaring_type, &none);
    }

    /// Report malformed types and generic parameters not in `declared`.
    fn type_ref(&mut self, alias: &str, ty: &TypeRef, declared: &HashSet<&str>) {
        match ty {
            TypeRef::Named {
                name, arguments, ..
            } => {
                if name.is_empty() {
                    self.report(alias, "type with empty name");
                }
                for argument in arguments {
                    self.type_ref(alias, argument, declared);
                }
            }
            TypeRef::GenericParameter { name } => {
                if !declared.contains(name.as_str()) {
                    self.report(alias, format!("undeclared generic parameter `{name}`"));
                }
            }
            TypeRef::Array { element, rank } => {
                if *rank == 0 {
                    self.report(alias, "array of rank 0");
                }
                self.type_ref(alias, element, declared);
            }
            TypeRef::Nullable { inner } | TypeRef::ByRef { inner } => {
                self.type_ref(alias, inner, declared)
            }
        }
    }
}
