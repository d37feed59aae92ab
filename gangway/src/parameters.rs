use indexmap::IndexMap;
use openapiv3::{
    Parameter, ParameterSchemaOrContent, ReferenceOr, SchemaKind, Type, VariantOrUnknownOrEmpty,
};

/// Collects the declared types of an operation's path parameters, keyed by
/// parameter name, for [`convert_path_with_types`](crate::convert_path_with_types).
///
/// Query, header and cookie parameters never reach the route template and
/// are skipped. A parameter whose schema is a `$ref` or a non-primitive
/// kind gets no entry and stays untyped in the converted path.
pub fn path_parameter_types(parameters: &[ReferenceOr<Parameter>]) -> IndexMap<String, String> {
    let mut types = IndexMap::new();

    for parameter in parameters {
        let ReferenceOr::Item(Parameter::Path { parameter_data, .. }) = parameter else {
            continue;
        };

        let ParameterSchemaOrContent::Schema(schema) = &parameter_data.format else {
            continue;
        };

        let ReferenceOr::Item(schema) = schema else {
            tracing::debug!(
                "path parameter `{}` has a referenced schema, leaving it untyped",
                parameter_data.name
            );
            continue;
        };

        match declared_type(&schema.schema_kind) {
            Some(declared) => {
                types.insert(parameter_data.name.clone(), declared.to_string());
            }
            None => {
                tracing::debug!(
                    "path parameter `{}` has a non-primitive schema, leaving it untyped",
                    parameter_data.name
                );
            }
        }
    }

    types
}

fn declared_type(kind: &SchemaKind) -> Option<&'static str> {
    match kind {
        SchemaKind::Type(Type::Integer(_)) => Some("integer"),
        SchemaKind::Type(Type::Number(_)) => Some("number"),
        SchemaKind::Type(Type::Boolean(_)) => Some("boolean"),
        // `format: path` is the non-standard marker for segments that may
        // contain slashes, it selects the `path` route converter
        SchemaKind::Type(Type::String(ty)) => match &ty.format {
            VariantOrUnknownOrEmpty::Unknown(format) if format == "path" => Some("path"),
            _ => Some("string"),
        },
        _ => None,
    }
}
