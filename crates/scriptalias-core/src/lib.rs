#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for script alias generation.
//!
//! Two layers:
//! - **Descriptor layer**: `ScriptAlias` and the signature data an emitter
//!   needs to render one declaration
//! - **Manifest layer**: the JSON document a module's alias scan produces

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub mod identifier;
pub mod manifest;


pub use manifest::{AliasManifest, parse_manifest};

// ============================================================================
// Alias Descriptors
// ============================================================================

/// Declaration kind of a discovered alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasKind {
    Method,
    Property,
}

/// One discovered script alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptAlias {
    /// Namespaces the generated declaration needs in scope.
    #[serde(default)]
    pub namespaces: BTreeSet<String>,
    #[serde(flatten)]
    pub signature: AliasSignature,
}

impl ScriptAlias {
    pub fn method(signature: MethodSignature) -> Self {
        Self {
            namespaces: BTreeSet::new(),
            signature: AliasSignature::Method(signature),
        }
    }

    pub fn property(signature: PropertySignature) -> Self {
        Self {
            namespaces: BTreeSet::new(),
            signature: AliasSignature::Property(signature),
        }
    }

    /// Add a required namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.insert(namespace.into());
        self
    }

    pub fn kind(&self) -> AliasKind {
        match self.signature {
            AliasSignature::Method(_) => AliasKind::Method,
            AliasSignature::Property(_) => AliasKind::Property,
        }
    }

    pub fn name(&self) -> &str {
        match &self.signature {
            AliasSignature::Method(m) => &m.name,
            AliasSignature::Property(p) => &p.name,
        }
    }
}

/// Kind-specific signature data, tagged by `kind` in manifests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AliasSignature {
    Method(MethodSignature),
    Property(PropertySignature),
}

/// Signature of an aliased extension method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    /// Static type that declares the aliased method.
    pub declaring_type: TypeRef,
    pub return_type: TypeRef,
    /// Full parameter list. A leading `this` parameter is the script context.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub generic_parameters: Vec<GenericParameter>,
    #[serde(default)]
    pub obsolete: Option<Obsolete>,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, declaring_type: TypeRef, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            declaring_type,
            return_type,
            parameters: Vec::new(),
            generic_parameters: Vec::new(),
            obsolete: None,
        }
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn generic_parameter(mut self, parameter: GenericParameter) -> Self {
        self.generic_parameters.push(parameter);
        self
    }

    pub fn obsolete(mut self, obsolete: Obsolete) -> Self {
        self.obsolete = Some(obsolete);
        self
    }

    /// Whether the first parameter is the `this` context receiver.
    pub fn has_receiver(&self) -> bool {
        self.parameters
            .first()
            .is_some_and(|p| p.modifier == ParameterModifier::This)
    }

    /// Parameters exposed by the alias (receiver excluded).
    pub fn script_parameters(&self) -> &[Parameter] {
        if self.has_receiver() {
            &self.parameters[1..]
        } else {
            &self.parameters
        }
    }
}

/// Signature of an aliased property accessor.
///
/// Property aliases are read-only: the aliased member is a method taking
/// only the script context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySignature {
    pub name: String,
    pub declaring_type: TypeRef,
    pub property_type: TypeRef,
    /// Evaluate once and memoise in a backing field.
    #[serde(default)]
    pub cached: bool,
    #[serde(default)]
    pub obsolete: Option<Obsolete>,
}

impl PropertySignature {
    pub fn new(name: impl Into<String>, declaring_type: TypeRef, property_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            declaring_type,
            property_type,
            cached: false,
            obsolete: None,
        }
    }

    pub fn cached(mut self, value: bool) -> Self {
        self.cached = value;
        self
    }

    pub fn obsolete(mut self, obsolete: Obsolete) -> Self {
        self.obsolete = Some(obsolete);
        self
    }
}

/// Deprecation marker carried over to the generated declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obsolete {
    #[serde(default)]
    pub message: Option<String>,
    /// Usage is a compile error rather than a warning.
    #[serde(default)]
    pub error: bool,
}

// ============================================================================
// Types
// ============================================================================

/// Reference to a type as it appears in module metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypeRef {
    /// Named type. `name` may use metadata spelling (`Outer+Inner`, `List`1`).
    Named {
        #[serde(default)]
        namespace: Option<String>,
        name: String,
        #[serde(default)]
        arguments: Vec<TypeRef>,
        #[serde(default)]
        value_type: bool,
    },
    GenericParameter {
        name: String,
    },
    Array {
        element: Box<TypeRef>,
        #[serde(default = "default_rank")]
        rank: u8,
    },
    Nullable {
        inner: Box<TypeRef>,
    },
    ByRef {
        inner: Box<TypeRef>,
    },
}

fn default_rank() -> u8 {
    1
}

/// `System` types that are value types and have a C# keyword.
const SYSTEM_VALUE_TYPES: &[&str] = &[
    "Boolean", "Byte", "SByte", "Char", "Decimal", "Double", "Single", "Int16", "UInt16", "Int32",
    "UInt32", "Int64", "UInt64",
];

impl TypeRef {
    pub fn named(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            namespace: Some(namespace.into()),
            name: name.into(),
            arguments: Vec::new(),
            value_type: false,
        }
    }

    /// A user-defined struct or enum.
    pub fn value(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            namespace: Some(namespace.into()),
            name: name.into(),
            arguments: Vec::new(),
            value_type: true,
        }
    }

    pub fn void() -> Self {
        Self::named("System", "Void")
    }

    pub fn generic_parameter(name: impl Into<String>) -> Self {
        Self::GenericParameter { name: name.into() }
    }

    pub fn array_of(element: TypeRef) -> Self {
        Self::Array {
            element: Box::new(element),
            rank: 1,
        }
    }

    pub fn nullable(inner: TypeRef) -> Self {
        Self::Nullable {
            inner: Box::new(inner),
        }
    }

    pub fn by_ref(inner: TypeRef) -> Self {
        Self::ByRef {
            inner: Box::new(inner),
        }
    }

    /// Attach type arguments to a named type. No-op for other variants.
    pub fn with_arguments(mut self, args: impl IntoIterator<Item = TypeRef>) -> Self {
        if let Self::Named { arguments, .. } = &mut self {
            arguments.extend(args);
        }
        self
    }

    pub fn is_void(&self) -> bool {
        matches!(
            self,
            Self::Named { namespace: Some(ns), name, arguments, .. }
                if ns == "System" && name == "Void" && arguments.is_empty()
        )
    }

    /// Whether a backing field of this type can't hold `null`.
    pub fn is_value_type(&self) -> bool {
        match self {
            Self::Named {
                namespace,
                name,
                value_type,
                ..
            } => {
                *value_type
                    || (namespace.as_deref() == Some("System")
                        && SYSTEM_VALUE_TYPES.contains(&name.as_str()))
            }
            Self::Nullable { .. } => true,
            Self::ByRef { inner } => inner.is_value_type(),
            Self::GenericParameter { .. } | Self::Array { .. } => false,
        }
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// One parameter of an aliased method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub modifier: ParameterModifier,
    #[serde(default)]
    pub default: Option<DefaultValue>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifier: ParameterModifier::None,
            default: None,
        }
    }

    /// The `this` receiver of an extension method.
    pub fn receiver(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name, ty).modifier(ParameterModifier::This)
    }

    pub fn modifier(mut self, modifier: ParameterModifier) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn default_value(mut self, value: DefaultValue) -> Self {
        self.default = Some(value);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterModifier {
    #[default]
    None,
    This,
    Ref,
    Out,
    In,
    Params,
}

impl ParameterModifier {
    /// Keyword written before the parameter type, if any.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::This => Some("this"),
            Self::Ref => Some("ref"),
            Self::Out => Some("out"),
            Self::In => Some("in"),
            Self::Params => Some("params"),
        }
    }
}

/// Compile-time default of an optional parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Char(char),
    /// `default(T)` of the parameter type.
    Default,
}

// ============================================================================
// Generics
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericParameter {
    pub name: String,
    #[serde(default)]
    pub constraints: Vec<GenericConstraint>,
}

impl GenericParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
        }
    }

    pub fn constraint(mut self, constraint: GenericConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenericConstraint {
    /// `class`
    Class,
    /// `struct`
    Struct,
    /// `new()`
    New,
    /// Base type or interface.
    Type(TypeRef),
}
