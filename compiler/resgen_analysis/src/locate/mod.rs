//! Find the result declarations of a method and check how many there are.

use resgen_diagnostic::{Applicability, Diagnostic, ErrorCode, Suggestion};
use resgen_ir::ast::{AttributeList, MemberDecl, MethodDecl};
use resgen_ir::StringInterner;

use crate::report::Reporter;
use crate::AnalysisContext;

/// Attribute lists on `member` targeted at results, in source order.
pub fn find_declarations<'a>(
    member: &'a MemberDecl,
    ctx: &AnalysisContext,
    interner: &StringInterner,
) -> Vec<&'a AttributeList> {
    member
        .attributes
        .iter()
        .filter(|list| ctx.is_declaration(list, interner))
        .collect()
}

/// How many declarations a marked method has.
#[derive(Debug)]
pub(crate) enum DeclarationCount<'a> {
    Missing,
    /// The first list declares the result; the rest are reported.
    Found {
        canonical: &'a AttributeList,
        excess: Vec<&'a AttributeList>,
    },
}

pub(crate) fn count_declarations(declarations: Vec<&AttributeList>) -> DeclarationCount<'_> {
    let mut lists = declarations.into_iter();
    match lists.next() {
        None => DeclarationCount::Missing,
        Some(canonical) => DeclarationCount::Found {
            canonical,
            excess: lists.collect(),
        },
    }
}

/// `SpecifyResultDeclaration` at the method name, with a declaration to
/// insert after the method's last attribute list.
pub(crate) fn report_missing(
    member: &MemberDecl,
    method: &MethodDecl,
    ctx: &AnalysisContext,
    reporter: Reporter<'_>,
) {
    let target = &ctx.declaration_target;
    let (offset, snippet) = match member.attributes.last() {
        Some(list) => (list.span.end, format!(" [{target}: Ok, Error]")),
        None => (member.span.start, format!("[{target}: Ok, Error] ")),
    };
    reporter.report(
        Diagnostic::from_code(ErrorCode::SpecifyResultDeclaration)
            .with_message(format!("Specify a result declaration using [{target}: ...]"))
            .with_label(method.name.span, "this method returns a generated result type")
            .with_structured_suggestion(Suggestion::insertion(
                "declare the result values",
                offset,
                snippet,
                Applicability::HasPlaceholders,
            )),
    );
}

/// `TooManyResultDeclarations` at each excess list, pointing back at the
/// canonical one.
pub(crate) fn report_excess(
    canonical: &AttributeList,
    excess: &[&AttributeList],
    reporter: Reporter<'_>,
) {
    for list in excess {
        reporter.report(
            Diagnostic::from_code(ErrorCode::TooManyResultDeclarations)
                .with_message("Only one result declaration may be specified per method")
                .with_label(list.span, "extra result declaration")
                .with_secondary_label(canonical.span, "first declaration used here")
                .with_suggestion("merge the values into the first declaration"),
        );
    }
}

/// `IgnoredResultDeclaration` at each declaration of the partial half that
/// is not analyzed.
pub(crate) fn report_ignored(declarations: &[&AttributeList], reporter: Reporter<'_>) {
    for list in declarations {
        let mut diagnostic = Diagnostic::from_code(ErrorCode::IgnoredResultDeclaration)
            .with_message("Result declaration is ignored on this part of the partial method")
            .with_label(list.span, "ignored")
            .with_structured_suggestion(Suggestion::new(
                "remove the ignored declaration",
                list.span,
                "",
                Applicability::MachineApplicable,
            ));
        if let Some(description) = ErrorCode::IgnoredResultDeclaration.description() {
            diagnostic = diagnostic.with_note(description);
        }
        reporter.report(diagnostic);
    }
}
