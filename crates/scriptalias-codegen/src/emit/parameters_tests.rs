use scriptalias_core::{DefaultValue, Parameter, ParameterModifier, TypeRef};

use super::{ParameterEmitter, RenderError};

fn string() -> TypeRef {
    TypeRef::named("System", "String")
}

fn int() -> TypeRef {
    TypeRef::named("System", "Int32")
}

#[test]
fn empty_list() {
    let emitter = ParameterEmitter::default();
    assert_eq!(emitter.render(&[]).unwrap(), "");
    assert_eq!(emitter.render_arguments(&[]).unwrap(), "");
}

#[test]
fn plain_parameters() {
    let params = [
        Parameter::new("source", string()),
        Parameter::new("target", TypeRef::named("Cake.Core.IO", "DirectoryPath")),
    ];
    let emitter = ParameterEmitter::default();
    assert_eq!(
        emitter.render(&params).unwrap(),
        "string source, Cake.Core.IO.DirectoryPath target"
    );
    assert_eq!(emitter.render_arguments(&params).unwrap(), "source, target");
}

#[test]
fn modifiers() {
    let params = [
        Parameter::receiver("context", TypeRef::named("Cake.Core", "ICakeContext")),
        Parameter::new("count", TypeRef::by_ref(int())).modifier(ParameterModifier::Ref),
        Parameter::new("result", TypeRef::by_ref(string())).modifier(ParameterModifier::Out),
        Parameter::new("limit", TypeRef::by_ref(int())).modifier(ParameterModifier::In),
        Parameter::new("args", TypeRef::array_of(TypeRef::named("System", "Object")))
            .modifier(ParameterModifier::Params),
    ];
    let emitter = ParameterEmitter::default();
    assert_eq!(
        emitter.render(&params).unwrap(),
        "this Cake.Core.ICakeContext context, ref int count, out string result, in int limit, params object[] args"
    );
    assert_eq!(
        emitter.render_arguments(&params[1..]).unwrap(),
        "ref count, out result, in limit, args"
    );
}

#[test]
fn keyword_names_are_escaped() {
    let params = [
        Parameter::new("object", TypeRef::named("System", "Object")),
        Parameter::new("params", TypeRef::array_of(string())).modifier(ParameterModifier::Params),
    ];
    let emitter = ParameterEmitter::default();
    assert_eq!(
        emitter.render(&params).unwrap(),
        "object @object, params string[] @params"
    );
    assert_eq!(emitter.render_arguments(&params).unwrap(), "@object, @params");
}

#[test]
fn default_values() {
    let params = [
        Parameter::new("name", string()).default_value(DefaultValue::Null),
        Parameter::new("force", TypeRef::named("System", "Boolean"))
            .default_value(DefaultValue::Bool(false)),
        Parameter::new("retries", int()).default_value(DefaultValue::Integer(-1)),
        Parameter::new("ratio", TypeRef::named("System", "Double"))
            .default_value(DefaultValue::Float(1.0)),
        Parameter::new("pattern", string()).default_value(DefaultValue::String("**/*.cs".into())),
        Parameter::new("separator", TypeRef::named("System", "Char"))
            .default_value(DefaultValue::Char('\\')),
        Parameter::new("timeout", TypeRef::named("System", "TimeSpan"))
            .default_value(DefaultValue::Default),
    ];
    let rendered = ParameterEmitter::default().render(&params).unwrap();
    let expected = [
        "string name = null",
        "bool force = false",
        "int retries = -1",
        "double ratio = 1.0",
        r#"string pattern = "**/*.cs""#,
        r"char separator = '\\'",
        "System.TimeSpan timeout = default(System.TimeSpan)",
    ]
    .join(", ");
    assert_eq!(rendered, expected);
}

#[test]
fn real_defaults_carry_the_parameter_type_suffix() {
    let params = [
        Parameter::new("ratio", TypeRef::named("System", "Single"))
            .default_value(DefaultValue::Float(1.5)),
        Parameter::new("amount", TypeRef::named("System", "Decimal"))
            .default_value(DefaultValue::Float(2.5)),
        Parameter::new("scale", TypeRef::nullable(TypeRef::named("System", "Single")))
            .default_value(DefaultValue::Float(3.0)),
        Parameter::new("weight", TypeRef::named("System", "Double"))
            .default_value(DefaultValue::Float(0.5)),
    ];
    assert_eq!(
        ParameterEmitter::default().render(&params).unwrap(),
        "float ratio = 1.5f, decimal amount = 2.5m, float? scale = 3.0f, double weight = 0.5"
    );
}

#[test]
fn integer_defaults_on_enums_are_cast() {
    let verbosity = || TypeRef::value("Cake.Core.Diagnostics", "Verbosity");
    let params = [
        Parameter::new("verbosity", verbosity()).default_value(DefaultValue::Integer(2)),
        Parameter::new("fallback", TypeRef::nullable(verbosity()))
            .default_value(DefaultValue::Integer(-1)),
        Parameter::new("budget", TypeRef::named("System", "Decimal"))
            .default_value(DefaultValue::Integer(3)),
    ];
    let rendered = ParameterEmitter::default().render(&params).unwrap();
    let expected = [
        "Cake.Core.Diagnostics.Verbosity verbosity = (Cake.Core.Diagnostics.Verbosity)2",
        "Cake.Core.Diagnostics.Verbosity? fallback = (Cake.Core.Diagnostics.Verbosity)(-1)",
        "decimal budget = 3",
    ]
    .join(", ");
    assert_eq!(rendered, expected);
}

#[test]
fn in_parameter_accepts_default() {
    let params = [Parameter::new("limit", int())
        .modifier(ParameterModifier::In)
        .default_value(DefaultValue::Integer(10))];
    assert_eq!(
        ParameterEmitter::default().render(&params).unwrap(),
        "in int limit = 10"
    );
}

#[test]
fn default_on_out_parameter_is_rejected() {
    let params = [Parameter::new("result", TypeRef::by_ref(int()))
        .modifier(ParameterModifier::Out)
        .default_value(DefaultValue::Integer(0))];
    let err = ParameterEmitter::default().render(&params).unwrap_err();
    assert!(matches!(err, RenderError::InvalidParameter { ref name, .. } if name == "result"));
}

#[test]
fn non_finite_default_is_rejected() {
    let params =
        [Parameter::new("ratio", TypeRef::named("System", "Double"))
            .default_value(DefaultValue::Float(f64::NAN))];
    let err = ParameterEmitter::default().render(&params).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid parameter `ratio`: non-finite default value"
    );
}

#[test]
fn invalid_names_are_rejected() {
    let emitter = ParameterEmitter::default();
    let params = [Parameter::new("two words", string())];
    assert!(matches!(
        emitter.render(&params),
        Err(RenderError::InvalidName(name)) if name == "two words"
    ));
    assert!(emitter.render_arguments(&params).is_err());
}
