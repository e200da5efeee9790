//! Per-method pipeline: marker arguments, type name, declarations, variants.
//!
//! Only an invalid marker constructor, an invalid type name or a missing
//! declaration stop the build. Everything below that level is reported,
//! dropped, and the build goes on.

use resgen_diagnostic::{Diagnostic, ErrorCode};
use resgen_ir::ast::{Attribute, MemberDecl};
use resgen_ir::{ResultTypeModel, StringInterner};
use resgen_types::{Scope, TypeResolver};
use tracing::debug;

use crate::analyze::Analyzer;
use crate::collect::MethodSite;
use crate::ctor::{classify_ctor_args, CtorArgs};
use crate::identifier::is_valid_identifier;
use crate::locate::{
    count_declarations, find_declarations, report_excess, report_ignored, report_missing,
    DeclarationCount,
};
use crate::report::Reporter;
use crate::variant::parse_declaration;
use crate::{AnalysisContext, CancellationToken, Cancelled};

/// What variant parsing needs from the method being analyzed.
pub(crate) struct MethodCx<'a> {
    pub resolver: &'a dyn TypeResolver,
    pub interner: &'a StringInterner,
    pub scope: &'a Scope,
    pub source: &'a str,
    pub reporter: Reporter<'a>,
    pub cancel: &'a CancellationToken,
}

/// First marker application on `member`, looking at lists without a
/// target or with `method:`.
pub(crate) fn find_marker<'m>(
    member: &'m MemberDecl,
    scope: &Scope,
    ctx: &AnalysisContext,
    resolver: &dyn TypeResolver,
    interner: &StringInterner,
) -> Option<&'m Attribute> {
    member
        .attributes
        .iter()
        .filter(|list| match list.target {
            None => true,
            Some(target) => interner.lookup(target.name) == "method",
        })
        .flat_map(|list| &list.attributes)
        .find(|attribute| ctx.is_marker(attribute, scope, resolver, interner))
}

/// Build the result type of a marked method.
///
/// `other_half` is the partial counterpart whose declarations are ignored.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(method = site.name(analyzer.interner()))
)]
pub(crate) fn build_model(
    analyzer: &Analyzer<'_>,
    site: &MethodSite<'_>,
    marker: &Attribute,
    other_half: Option<&MethodSite<'_>>,
) -> Result<Option<ResultTypeModel>, Cancelled> {
    let ctx = analyzer.context();
    let interner = analyzer.interner();
    let reporter = Reporter::new(analyzer.sink(), site.file);

    if let Some(other) = other_half {
        let ignored = find_declarations(other.member, ctx, interner);
        report_ignored(&ignored, Reporter::new(analyzer.sink(), other.file));
    }

    let Some(name) = type_name(site, marker, ctx, interner, reporter) else {
        return Ok(None);
    };

    let cx = MethodCx {
        resolver: analyzer.resolver(),
        interner,
        scope: &site.scope,
        source: site.source,
        reporter,
        cancel: analyzer.cancellation(),
    };

    let declarations = find_declarations(site.member, ctx, interner);
    let (canonical, excess) = match count_declarations(declarations) {
        DeclarationCount::Missing => {
            report_missing(site.member, site.method, ctx, reporter);
            return Ok(None);
        }
        DeclarationCount::Found { canonical, excess } => (canonical, excess),
    };
    report_excess(canonical, &excess, reporter);

    cx.cancel.check()?;
    let values = parse_declaration(canonical, &cx)?;
    for list in &excess {
        cx.cancel.check()?;
        parse_declaration(list, &cx)?;
    }

    debug!(name = %name, variants = values.len(), "built result type");
    Ok(Some(ResultTypeModel { name, values }))
}

/// Validated type name, or `None` after reporting why there is none.
fn type_name(
    site: &MethodSite<'_>,
    marker: &Attribute,
    ctx: &AnalysisContext,
    interner: &StringInterner,
    reporter: Reporter<'_>,
) -> Option<String> {
    let args = classify_ctor_args(marker, interner);
    let Some(name) = args.type_name(|| ctx.default_type_name(site.name(interner))) else {
        let span = marker.args.as_ref().map_or(marker.span, |list| list.span);
        reporter.report(
            Diagnostic::from_code(ErrorCode::InvalidAttributeCtor)
                .with_message(
                    "Attribute constructor should take either no parameters or one string parameter",
                )
                .with_label(span, "no constructor takes these arguments"),
        );
        return None;
    };

    if is_valid_identifier(&name) {
        return Some(name);
    }
    let span = match (&args, marker.arguments().first()) {
        (CtorArgs::ExplicitName(_), Some(arg)) => arg.expr.span,
        _ => site.method.name.span,
    };
    let mut diagnostic = Diagnostic::from_code(ErrorCode::InvalidResultTypeName)
        .with_message(format!("'{name}' is not a valid result type name"))
        .with_label(span, "not an identifier");
    if let Some(description) = ErrorCode::InvalidResultTypeName.description() {
        diagnostic = diagnostic.with_note(description);
    }
    reporter.report(diagnostic);
    None
}
