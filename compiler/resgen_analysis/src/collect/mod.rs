//! Gather the methods that may carry the marker.

use resgen_ir::ast::{CompilationUnit, MemberDecl, MemberKind, MethodDecl};
use resgen_ir::{FileId, StringInterner};
use resgen_types::{walk_types, Scope, TypeParamInfo, TypeTable};

/// A parsed file handed to the analysis.
#[derive(Clone, Copy, Debug)]
pub struct SourceUnit<'a> {
    pub file: FileId,
    pub source: &'a str,
    pub unit: &'a CompilationUnit,
}

/// An ordinary method with the scope its signature resolves in.
#[derive(Clone, Debug)]
pub(crate) struct MethodSite<'a> {
    pub file: FileId,
    pub source: &'a str,
    pub member: &'a MemberDecl,
    pub method: &'a MethodDecl,
    /// Scope inside the containing type plus the method's own type
    /// parameters.
    pub scope: Scope,
}

impl MethodSite<'_> {
    pub fn name<'i>(&self, interner: &'i StringInterner) -> &'i str {
        interner.lookup(self.method.name.name)
    }
}

/// Ordinary methods of `unit` in source order.
///
/// Explicit interface implementations are left out; constructors,
/// operators and accessors never parse as methods.
#[tracing::instrument(level = "debug", skip_all, fields(file = ?unit.file))]
pub(crate) fn collect_methods<'a>(
    unit: SourceUnit<'a>,
    table: &TypeTable,
    interner: &StringInterner,
) -> Vec<MethodSite<'a>> {
    let mut sites = Vec::new();
    walk_types(unit.unit, table, interner, |scope, decl| {
        for member in &decl.members {
            let MemberKind::Method(method) = &member.kind else {
                continue;
            };
            if method.explicit_interface.is_some() {
                continue;
            }
            let mut scope = scope.clone();
            scope.add_type_params(TypeParamInfo::from_decl(
                &method.type_params,
                &method.constraints,
                interner,
            ));
            sites.push(MethodSite {
                file: unit.file,
                source: unit.source,
                member,
                method,
                scope,
            });
        }
    });
    tracing::trace!(methods = sites.len(), "collected methods");
    sites
}
