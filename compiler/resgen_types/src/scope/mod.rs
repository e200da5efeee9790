//! What names are visible at a point in a file.

use resgen_ir::ast::{
    Constraint, ConstraintClause, NameKind, NameSyntax, TypeParam, TypeSyntax, UsingDirective,
    UsingKind,
};
use resgen_ir::StringInterner;

use crate::{TypeCategory, TypeId};

/// Dotted text of a namespace name; `global::` is dropped.
pub(crate) fn name_text(name: &NameSyntax, interner: &StringInterner) -> String {
    match &name.kind {
        NameKind::Simple(ident) | NameKind::Generic { ident, .. } => {
            interner.lookup(ident.name).to_owned()
        }
        NameKind::Qualified { left, right } => {
            format!("{}.{}", name_text(left, interner), name_text(right, interner))
        }
        NameKind::AliasQualified { name, .. } => name_text(name, interner),
    }
}

/// `outer.inner`, or `inner` at the global namespace.
pub(crate) fn join_namespace(outer: &str, inner: &str) -> String {
    if outer.is_empty() {
        inner.to_owned()
    } else {
        format!("{outer}.{inner}")
    }
}

/// A type parameter in scope.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeParamInfo {
    pub name: String,
    pub category: TypeCategory,
}

impl TypeParamInfo {
    /// Parameters of a type or method, categorized by their `where`
    /// clauses: `class` makes a reference type, `struct` and `unmanaged` a
    /// value type.
    pub fn from_decl(
        params: &[TypeParam],
        constraints: &[ConstraintClause],
        interner: &StringInterner,
    ) -> Vec<TypeParamInfo> {
        params
            .iter()
            .map(|param| {
                let category = constraints
                    .iter()
                    .filter(|clause| clause.param.name == param.name.name)
                    .flat_map(|clause| &clause.constraints)
                    .find_map(|constraint| match constraint {
                        Constraint::Class => Some(TypeCategory::Reference),
                        Constraint::Struct | Constraint::Unmanaged => Some(TypeCategory::Value),
                        _ => None,
                    })
                    .unwrap_or(TypeCategory::Unconstrained);
                TypeParamInfo {
                    name: interner.lookup(param.name.name).to_owned(),
                    category,
                }
            })
            .collect()
    }
}

/// One enclosing namespace with the `using` directives declared directly
/// in it.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScopeLevel {
    pub namespace: String,
    pub imports: Vec<String>,
    pub aliases: Vec<(String, TypeSyntax)>,
}

impl ScopeLevel {
    pub fn alias(&self, name: &str) -> Option<&TypeSyntax> {
        self.aliases
            .iter()
            .find(|(alias, _)| alias == name)
            .map(|(_, target)| target)
    }
}

/// Lookup context at one point in a file.
///
/// Levels, containing types and type parameters are kept outermost first;
/// lookups walk them innermost first.
#[derive(Clone, Debug)]
pub struct Scope {
    levels: Vec<ScopeLevel>,
    containing_types: Vec<TypeId>,
    type_params: Vec<TypeParamInfo>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    /// The global namespace of a file with no `using` directives.
    pub fn new() -> Self {
        Scope {
            levels: vec![ScopeLevel::default()],
            containing_types: Vec::new(),
            type_params: Vec::new(),
        }
    }

    /// Attach `using` directives to the innermost namespace. `global using`
    /// directives are registered with the type table instead.
    pub fn add_usings(&mut self, usings: &[UsingDirective], interner: &StringInterner) {
        let Some(level) = self.levels.last_mut() else {
            return;
        };
        for using in usings.iter().filter(|using| !using.is_global) {
            match &using.kind {
                UsingKind::Namespace(name) => level.imports.push(name_text(name, interner)),
                UsingKind::Alias { alias, target } => level
                    .aliases
                    .push((interner.lookup(alias.name).to_owned(), target.clone())),
                UsingKind::Static(_) => {}
            }
        }
    }

    /// Enter `namespace A.B`: one level per segment.
    pub fn enter_namespace(&mut self, name: &NameSyntax, interner: &StringInterner) {
        let text = name_text(name, interner);
        for segment in text.split('.') {
            let namespace = join_namespace(self.namespace(), segment);
            self.levels.push(ScopeLevel {
                namespace,
                ..ScopeLevel::default()
            });
        }
    }

    /// Enter the body of type `id` with its type parameters.
    pub fn enter_type(&mut self, id: TypeId, type_params: Vec<TypeParamInfo>) {
        self.containing_types.push(id);
        self.type_params.extend(type_params);
    }

    /// Add method type parameters.
    pub fn add_type_params(&mut self, type_params: Vec<TypeParamInfo>) {
        self.type_params.extend(type_params);
    }

    /// Dotted name of the innermost namespace; empty at the global one.
    pub fn namespace(&self) -> &str {
        self.levels.last().map_or("", |level| level.namespace.as_str())
    }

    /// Innermost enclosing type.
    pub fn containing_type(&self) -> Option<TypeId> {
        self.containing_types.last().copied()
    }

    pub(crate) fn levels(&self) -> &[ScopeLevel] {
        &self.levels
    }

    pub(crate) fn containing_types(&self) -> &[TypeId] {
        &self.containing_types
    }

    pub(crate) fn type_params(&self) -> &[TypeParamInfo] {
        &self.type_params
    }

    /// Scope outside level `index`: where the directives of that level
    /// resolve their targets.
    pub(crate) fn outside(&self, index: usize) -> Scope {
        if index == 0 {
            return Scope::new();
        }
        Scope {
            levels: self.levels[..index].to_vec(),
            containing_types: Vec::new(),
            type_params: Vec::new(),
        }
    }
}
