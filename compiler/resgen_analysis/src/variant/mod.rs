//! Parse one result declaration into its variants.
//!
//! ```text
//! [result: Ok(Value<Person>), NotFound, Error(Message<string>, Code<int>)]
//!          ^^ variant         ^^^^^^^^ variant without data
//!             ^^^^^^^^^^^^^ value parameter: name<Type>
//! ```
//!
//! Malformed variants and parameters are reported and dropped; the rest of
//! the declaration is still parsed.

use resgen_diagnostic::{Diagnostic, ErrorCode};
use resgen_ir::ast::{Attribute, AttributeArgument, AttributeList, NameKind};
use resgen_ir::{ResultValueModel, Span, ValueParameterModel};

use crate::builder::MethodCx;
use crate::param_type::{resolve_parameter_type, unknown_type};
use crate::Cancelled;

/// Variants declared by `list`, in source order.
pub(crate) fn parse_declaration(
    list: &AttributeList,
    cx: &MethodCx<'_>,
) -> Result<Vec<ResultValueModel>, Cancelled> {
    let mut parsed = Vec::with_capacity(list.attributes.len());
    for attribute in &list.attributes {
        cx.cancel.check()?;
        if let Some(value) = parse_value(attribute, cx)? {
            parsed.push((attribute.span, value));
        }
    }

    if let [(span, _)] = parsed.as_slice() {
        cx.reporter.report(
            Diagnostic::from_code(ErrorCode::CanBeInlined)
                .with_message(
                    "Result type with only one variant can be removed and inlined into the return type of the method",
                )
                .with_label(*span, "the only variant"),
        );
    }

    Ok(parsed.into_iter().map(|(_, value)| value).collect())
}

fn parse_value(
    attribute: &Attribute,
    cx: &MethodCx<'_>,
) -> Result<Option<ResultValueModel>, Cancelled> {
    let Some(ident) = attribute.name.as_simple() else {
        cx.reporter.report(
            Diagnostic::from_code(ErrorCode::BadValueSyntax)
                .with_message("Result value name has to be a single identifier")
                .with_label(attribute.name.span, "expected a single identifier"),
        );
        return Ok(None);
    };

    let mut parameters = Vec::with_capacity(attribute.arguments().len());
    for arg in attribute.arguments() {
        cx.cancel.check()?;
        if let Some(parameter) = parse_parameter(arg, cx) {
            parameters.push(parameter);
        }
    }
    Ok(Some(ResultValueModel {
        name: cx.interner.lookup(ident.name).to_owned(),
        parameters,
    }))
}

/// `name<Type>`. A `name:` or `Name =` prefix on the argument is ignored.
fn parse_parameter(arg: &AttributeArgument, cx: &MethodCx<'_>) -> Option<ValueParameterModel> {
    let generic = arg.expr.as_name().and_then(|name| match &name.kind {
        NameKind::Generic { ident, type_args } if !type_args.args.is_empty() => {
            Some((ident, &type_args.args))
        }
        _ => None,
    });
    let Some((ident, types)) = generic else {
        cx.reporter.report(
            Diagnostic::from_code(ErrorCode::BadValueParameterSyntax)
                .with_message(
                    "Value parameter has to be an identifier followed by angle brackets and a type",
                )
                .with_label(arg.expr.span, "expected `Name<Type>`"),
        );
        return None;
    };

    if let [_, second, ..] = types.as_slice() {
        let end = types.last().map_or(second.span.end, |last| last.span.end);
        cx.reporter.report(
            Diagnostic::from_code(ErrorCode::TooManyValueParameterTypes)
                .with_message("Value parameters can only specify a single type")
                .with_label(Span::new(second.span.start, end), "extra types"),
        );
    }

    // Every type is resolved so each unknown one is reported.
    let resolved: Vec<_> = types
        .iter()
        .map(|ty| {
            let model = resolve_parameter_type(ty, cx.scope, cx.resolver);
            if model.is_none() {
                cx.reporter.report(unknown_type(ty, cx.source));
            }
            model
        })
        .collect();
    let ty = resolved.into_iter().next().flatten()?;

    Some(ValueParameterModel {
        name: cx.interner.lookup(ident.name).to_owned(),
        ty,
    })
}
