//! Value parameter types: resolved syntax to [`ParameterTypeModel`].

use resgen_diagnostic::{Diagnostic, ErrorCode};
use resgen_ir::ast::TypeSyntax;
use resgen_ir::ParameterTypeModel;
use resgen_types::{Scope, TypeResolver};

/// Resolve `ty` in `scope`, or `None` when it names nothing visible.
///
/// `System.Nullable<T>` is unwrapped to `T` and rendered `T?`. Reference
/// types annotated `?` keep the annotation.
pub fn resolve_parameter_type(
    ty: &TypeSyntax,
    scope: &Scope,
    resolver: &dyn TypeResolver,
) -> Option<ParameterTypeModel> {
    let resolved = resolver.resolve(ty, scope)?;
    let (unwrapped, nullable_value_type) = match resolved.nullable_underlying() {
        Some(underlying) => (underlying, true),
        None => (&resolved, false),
    };
    Some(ParameterTypeModel {
        fully_qualified_name: unwrapped.display().to_owned(),
        is_nullable: nullable_value_type || ty.is_nullable(),
        can_be_null: nullable_value_type || unwrapped.is_reference_type(),
    })
}

/// `UnknownType` at `ty`, quoting its source text.
pub(crate) fn unknown_type(ty: &TypeSyntax, source: &str) -> Diagnostic {
    let text = ty.span.text(source);
    Diagnostic::from_code(ErrorCode::UnknownType)
        .with_message(format!("Unknown type '{text}'"))
        .with_label(ty.span, "not found in this scope")
}
