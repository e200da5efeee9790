//! Type syntax to [`TypeDescriptor`].
//!
//! Simple names are looked up in this order, first match wins:
//!
//! 1. type parameters, innermost first
//! 2. types nested in the containing types, innermost first
//! 3. for each enclosing namespace, innermost first: its types and
//!    namespaces, then the aliases and namespaces imported by the `using`
//!    directives declared there
//! 4. at the global namespace, `global using` aliases and imports, including
//!    the implicit ones
//!
//! Qualified names resolve their left side as a namespace or type and look
//! the right side up inside it.

use resgen_ir::ast::{Ident, NameKind, NameSyntax, TypeKind, TypeSyntax};
use resgen_ir::{PredefinedType, StringInterner};
use tracing::trace;

use crate::scope::{join_namespace, ScopeLevel};
use crate::{
    escape_identifier, Scope, SpecialType, TypeCategory, TypeDescriptor, TypeId, TypeTable,
};

/// Resolves type syntax at a point in a file.
///
/// Implementations are shared across the worker threads analyzing methods.
pub trait TypeResolver: Sync {
    /// Resolve a type, or `None` if it names nothing visible.
    fn resolve(&self, ty: &TypeSyntax, scope: &Scope) -> Option<TypeDescriptor>;

    /// Resolve an attribute name, trying the `Attribute`-suffixed spelling
    /// first.
    fn resolve_attribute(&self, name: &NameSyntax, scope: &Scope) -> Option<TypeDescriptor>;
}

/// [`TypeResolver`] over a [`TypeTable`].
#[derive(Clone, Copy)]
pub struct TableResolver<'a> {
    table: &'a TypeTable,
    interner: &'a StringInterner,
}

/// What a name denotes.
enum Resolved {
    Namespace(String),
    Type(TypeId, TypeDescriptor),
    /// Type parameters and contextual types; nothing can be nested in them.
    Leaf(TypeDescriptor),
}

impl Resolved {
    fn into_type(self) -> Option<TypeDescriptor> {
        match self {
            Resolved::Type(_, descriptor) | Resolved::Leaf(descriptor) => Some(descriptor),
            Resolved::Namespace(_) => None,
        }
    }
}

/// Scope plus whether alias directives may be consulted. Alias targets
/// resolve without aliases, so aliases never chain.
#[derive(Clone, Copy)]
struct Lookup<'s> {
    scope: &'s Scope,
    aliases: bool,
}

fn predefined(ty: PredefinedType) -> TypeDescriptor {
    let category = if ty.is_reference_type() {
        TypeCategory::Reference
    } else {
        TypeCategory::Value
    };
    TypeDescriptor::new(ty.keyword(), category)
}

/// Types spelled with contextual keywords.
fn contextual_type(name: &str) -> Option<TypeDescriptor> {
    let category = match name {
        "dynamic" => TypeCategory::Reference,
        "nint" | "nuint" => TypeCategory::Value,
        _ => return None,
    };
    Some(TypeDescriptor::new(name, category))
}

/// Identifier and type arguments of a single name segment.
fn segment(name: &NameSyntax) -> Option<(Ident, &[TypeSyntax])> {
    match &name.kind {
        NameKind::Simple(ident) => Some((*ident, &[])),
        NameKind::Generic { ident, type_args } => Some((*ident, type_args.args.as_slice())),
        NameKind::Qualified { .. } | NameKind::AliasQualified { .. } => None,
    }
}

impl<'a> TableResolver<'a> {
    pub fn new(table: &'a TypeTable, interner: &'a StringInterner) -> Self {
        TableResolver { table, interner }
    }

    fn resolve_type(&self, ty: &TypeSyntax, lookup: Lookup<'_>) -> Option<TypeDescriptor> {
        match &ty.kind {
            TypeKind::Predefined(predefined_ty) => Some(predefined(*predefined_ty)),
            TypeKind::Named(name) => self.resolve_name(name, lookup, "")?.into_type(),
            TypeKind::Nullable(inner) => {
                let inner = self.resolve_type(inner, lookup)?;
                if inner.is_value_type() && inner.nullable_underlying().is_none() {
                    Some(TypeDescriptor::nullable_of(inner))
                } else {
                    Some(inner)
                }
            }
            TypeKind::Array { element, rank } => {
                let element = self.resolve_type(element, lookup)?;
                let commas = ",".repeat(rank.saturating_sub(1) as usize);
                Some(TypeDescriptor::new(
                    format!("{element}[{commas}]"),
                    TypeCategory::Reference,
                ))
            }
            TypeKind::Tuple(elements) => {
                let mut parts = Vec::with_capacity(elements.len());
                for element in elements {
                    let ty = self.resolve_type(&element.ty, lookup)?;
                    parts.push(match element.name {
                        Some(name) => format!(
                            "{ty} {}",
                            escape_identifier(self.interner.lookup(name.name))
                        ),
                        None => ty.display().to_owned(),
                    });
                }
                Some(TypeDescriptor::new(
                    format!("({})", parts.join(", ")),
                    TypeCategory::Value,
                ))
            }
            TypeKind::Pointer(_) => None,
        }
    }

    fn resolve_args(&self, args: &[TypeSyntax], lookup: Lookup<'_>) -> Option<Vec<TypeDescriptor>> {
        args.iter().map(|arg| self.resolve_type(arg, lookup)).collect()
    }

    /// Resolve `name`; `suffix` is appended to its rightmost identifier.
    fn resolve_name(&self, name: &NameSyntax, lookup: Lookup<'_>, suffix: &str) -> Option<Resolved> {
        match &name.kind {
            NameKind::Simple(_) | NameKind::Generic { .. } => {
                let (ident, args) = segment(name)?;
                let args = self.resolve_args(args, lookup)?;
                let text = format!("{}{suffix}", self.interner.lookup(ident.name));
                self.lookup_simple(&text, args, lookup)
            }
            NameKind::Qualified { left, right } => {
                let left = self.resolve_name(left, lookup, "")?;
                self.member_of(&left, right, lookup, suffix)
            }
            NameKind::AliasQualified { alias, name } => {
                let alias = self.interner.lookup(alias.name);
                let root = if alias == "global" {
                    Resolved::Namespace(String::new())
                } else {
                    match self.lookup_alias(alias, lookup)? {
                        namespace @ Resolved::Namespace(_) => namespace,
                        _ => return None,
                    }
                };
                self.member_of(&root, name, lookup, suffix)
            }
        }
    }

    /// Look `segment_name` up inside a namespace or type.
    fn member_of(
        &self,
        left: &Resolved,
        segment_name: &NameSyntax,
        lookup: Lookup<'_>,
        suffix: &str,
    ) -> Option<Resolved> {
        let (ident, args) = segment(segment_name)?;
        let args = self.resolve_args(args, lookup)?;
        let name = format!("{}{suffix}", self.interner.lookup(ident.name));
        match left {
            Resolved::Namespace(namespace) => {
                if let Some(id) = self.table.lookup_in_namespace(namespace, &name, args.len()) {
                    return Some(Resolved::Type(id, self.describe(id, args, None)));
                }
                let nested = join_namespace(namespace, &name);
                (args.is_empty() && self.table.has_namespace(&nested))
                    .then_some(Resolved::Namespace(nested))
            }
            Resolved::Type(container, descriptor) => {
                let id = self.table.lookup_nested(*container, &name, args.len())?;
                Some(Resolved::Type(id, self.describe(id, args, Some(descriptor))))
            }
            Resolved::Leaf(_) => None,
        }
    }

    fn lookup_simple(
        &self,
        name: &str,
        args: Vec<TypeDescriptor>,
        lookup: Lookup<'_>,
    ) -> Option<Resolved> {
        let scope = lookup.scope;
        let arity = args.len();
        if arity == 0 {
            if let Some(param) = scope.type_params().iter().rev().find(|p| p.name == name) {
                return Some(Resolved::Leaf(TypeDescriptor::new(
                    escape_identifier(name),
                    param.category,
                )));
            }
        }
        for &container in scope.containing_types().iter().rev() {
            if let Some(id) = self.table.lookup_nested(container, name, arity) {
                return Some(Resolved::Type(id, self.describe(id, args, None)));
            }
        }
        for (index, level) in scope.levels().iter().enumerate().rev() {
            if let Some(id) = self.table.lookup_in_namespace(&level.namespace, name, arity) {
                return Some(Resolved::Type(id, self.describe(id, args, None)));
            }
            if arity == 0 {
                let nested = join_namespace(&level.namespace, name);
                if self.table.has_namespace(&nested) {
                    return Some(Resolved::Namespace(nested));
                }
                if lookup.aliases {
                    if let Some(target) = level.alias(name) {
                        return self.resolve_alias_target(target, &scope.outside(index));
                    }
                }
            }
            if let Some(id) = self.lookup_imported(scope, index, level, name, arity) {
                return Some(Resolved::Type(id, self.describe(id, args, None)));
            }
            if index == 0 {
                if arity == 0 && lookup.aliases {
                    if let Some(target) = self.global_alias(name) {
                        return self.resolve_alias_target(target, &Scope::new());
                    }
                }
                let imported = self.table.global_imports().iter().find_map(|namespace| {
                    self.table.lookup_in_namespace(namespace, name, arity)
                });
                if let Some(id) = imported {
                    return Some(Resolved::Type(id, self.describe(id, args, None)));
                }
            }
        }
        if arity == 0 {
            if let Some(descriptor) = contextual_type(name) {
                return Some(Resolved::Leaf(descriptor));
            }
        }
        trace!(name, arity, "type not found");
        None
    }

    /// Types imported by the `using` directives of `level`.
    fn lookup_imported(
        &self,
        scope: &Scope,
        index: usize,
        level: &ScopeLevel,
        name: &str,
        arity: usize,
    ) -> Option<TypeId> {
        level.imports.iter().find_map(|import| {
            let namespace = self.import_namespace(scope, index, import)?;
            self.table.lookup_in_namespace(&namespace, name, arity)
        })
    }

    /// Target of `global using {name} = T;`.
    fn global_alias(&self, name: &str) -> Option<&'a TypeSyntax> {
        self.table
            .global_aliases()
            .iter()
            .find(|(alias, _)| alias == name)
            .map(|(_, target)| target)
    }

    /// Namespace named by `using {import};` at level `index`, resolved
    /// relative to that level and its enclosing namespaces.
    fn import_namespace(&self, scope: &Scope, index: usize, import: &str) -> Option<String> {
        scope.levels()[..=index]
            .iter()
            .rev()
            .map(|level| join_namespace(&level.namespace, import))
            .find(|namespace| self.table.has_namespace(namespace))
    }

    fn lookup_alias(&self, alias: &str, lookup: Lookup<'_>) -> Option<Resolved> {
        if !lookup.aliases {
            return None;
        }
        let scope = lookup.scope;
        for (index, level) in scope.levels().iter().enumerate().rev() {
            if let Some(target) = level.alias(alias) {
                return self.resolve_alias_target(target, &scope.outside(index));
            }
        }
        let target = self.global_alias(alias)?;
        self.resolve_alias_target(target, &Scope::new())
    }

    fn resolve_alias_target(&self, target: &TypeSyntax, scope: &Scope) -> Option<Resolved> {
        let lookup = Lookup {
            scope,
            aliases: false,
        };
        match &target.kind {
            TypeKind::Named(name) => self.resolve_name(name, lookup, ""),
            _ => self.resolve_type(target, lookup).map(Resolved::Leaf),
        }
    }

    /// Descriptor of type `id` applied to `args`. `container` is the
    /// constructed enclosing type when the name was qualified by it.
    fn describe(
        &self,
        id: TypeId,
        args: Vec<TypeDescriptor>,
        container: Option<&TypeDescriptor>,
    ) -> TypeDescriptor {
        let entry = self.table.entry(id);
        match entry.special {
            Some(SpecialType::Predefined(ty)) => return predefined(ty),
            Some(SpecialType::Nullable) => {
                if let [inner] = args.as_slice() {
                    return if inner.is_value_type() && inner.nullable_underlying().is_none() {
                        TypeDescriptor::nullable_of(inner.clone())
                    } else {
                        inner.clone()
                    };
                }
            }
            None => {}
        }

        let mut display = match (container, entry.containing) {
            (Some(container), _) => format!("{container}."),
            (None, Some(parent)) => {
                let params = self.table.entry(parent).type_params.iter();
                let own_args = params
                    .map(|param| TypeDescriptor::new(escape_identifier(param), TypeCategory::Unconstrained))
                    .collect();
                format!("{}.", self.describe(parent, own_args, None))
            }
            (None, None) if entry.namespace.is_empty() => "global::".to_owned(),
            (None, None) => {
                let namespace: Vec<_> = entry
                    .namespace
                    .split('.')
                    .map(escape_identifier)
                    .collect();
                format!("global::{}.", namespace.join("."))
            }
        };
        display.push_str(&escape_identifier(&entry.name));
        if !args.is_empty() {
            let args: Vec<_> = args.iter().map(TypeDescriptor::display).collect();
            display.push('<');
            display.push_str(&args.join(", "));
            display.push('>');
        }
        TypeDescriptor::new(display, entry.category)
    }
}

impl TypeResolver for TableResolver<'_> {
    fn resolve(&self, ty: &TypeSyntax, scope: &Scope) -> Option<TypeDescriptor> {
        let lookup = Lookup {
            scope,
            aliases: true,
        };
        self.resolve_type(ty, lookup)
    }

    fn resolve_attribute(&self, name: &NameSyntax, scope: &Scope) -> Option<TypeDescriptor> {
        let lookup = Lookup {
            scope,
            aliases: true,
        };
        self.resolve_name(name, lookup, "Attribute")
            .and_then(Resolved::into_type)
            .or_else(|| self.resolve_name(name, lookup, "")?.into_type())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
