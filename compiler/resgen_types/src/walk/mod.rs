//! Visiting type declarations with their scopes.

use resgen_ir::ast::{CompilationUnit, MemberKind, NamespaceMember, TypeDecl};
use resgen_ir::StringInterner;

use crate::{Scope, TypeId, TypeParamInfo, TypeTable};

/// Call `f` for every type declaration in `unit`, outermost first, with the
/// scope inside the type's body.
///
/// `table` must have been built from `unit`; types missing from it are
/// skipped along with their nested types.
pub fn walk_types<'u, F>(unit: &'u CompilationUnit, table: &TypeTable, interner: &StringInterner, mut f: F)
where
    F: FnMut(&Scope, &'u TypeDecl),
{
    let mut scope = Scope::new();
    scope.add_usings(&unit.usings, interner);
    let mut walker = Walker {
        table,
        interner,
        f: &mut f,
    };
    walker.members(&unit.members, &scope);
}

struct Walker<'t, 'f, F> {
    table: &'t TypeTable,
    interner: &'t StringInterner,
    f: &'f mut F,
}

impl<'u, F> Walker<'_, '_, F>
where
    F: FnMut(&Scope, &'u TypeDecl),
{
    fn members(&mut self, members: &'u [NamespaceMember], scope: &Scope) {
        for member in members {
            match member {
                NamespaceMember::Namespace(ns) => {
                    let mut inner = scope.clone();
                    inner.enter_namespace(&ns.name, self.interner);
                    inner.add_usings(&ns.usings, self.interner);
                    self.members(&ns.members, &inner);
                }
                NamespaceMember::Type(decl) => self.type_decl(decl, None, scope),
            }
        }
    }

    fn type_decl(&mut self, decl: &'u TypeDecl, parent: Option<TypeId>, scope: &Scope) {
        let name = self.interner.lookup(decl.name.name);
        let arity = decl.type_params.len();
        let id = match parent {
            Some(parent) => self.table.lookup_nested(parent, name, arity),
            None => self.table.lookup_in_namespace(scope.namespace(), name, arity),
        };
        let Some(id) = id else {
            return;
        };

        let mut inner = scope.clone();
        inner.enter_type(
            id,
            TypeParamInfo::from_decl(&decl.type_params, &decl.constraints, self.interner),
        );
        (self.f)(&inner, decl);
        for member in &decl.members {
            if let MemberKind::Type(nested) = &member.kind {
                self.type_decl(nested, Some(id), &inner);
            }
        }
    }
}
