//! Every type a compilation can see.
//!
//! Types are keyed by container (namespace or enclosing type), simple name
//! and arity, the way C# distinguishes `Task` from `Task<T>`. Partial
//! declarations of the same type in one or more files share one entry.

use resgen_ir::ast::{
    CompilationUnit, MemberKind, NamespaceMember, TypeDecl, TypeSyntax, UsingKind,
};
use resgen_ir::{PredefinedType, StringInterner};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::scope::{join_namespace, name_text};
use crate::well_known::{WellKnownType, IMPLICIT_USINGS, NULLABLE, WELL_KNOWN_TYPES};
use crate::TypeCategory;

/// Index of a type in its [`TypeTable`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Types with a spelling or shape of their own.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SpecialType {
    /// `System.Int32` and friends, displayed with their keyword.
    Predefined(PredefinedType),
    /// `System.Nullable<T>`.
    Nullable,
}

/// Where a type came from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeOrigin {
    /// Built in or registered by the driver.
    Library,
    /// Declared in a processed source file.
    Source,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeEntry {
    pub name: String,
    /// Dotted namespace; empty for the global namespace.
    pub namespace: String,
    /// Enclosing type of a nested type.
    pub containing: Option<TypeId>,
    pub arity: usize,
    /// Declared type parameter names; empty for library types.
    pub type_params: Vec<String>,
    pub category: TypeCategory,
    pub special: Option<SpecialType>,
    pub origin: TypeOrigin,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
enum Container {
    Namespace(String),
    Type(TypeId),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct TypeKey {
    container: Container,
    name: String,
    arity: usize,
}

/// Types, namespaces and global imports of one compilation.
#[derive(Clone, Debug)]
pub struct TypeTable {
    entries: Vec<TypeEntry>,
    by_key: FxHashMap<TypeKey, TypeId>,
    namespaces: FxHashSet<String>,
    global_imports: Vec<String>,
    global_aliases: Vec<(String, TypeSyntax)>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    /// Table with the predefined and well-known library types and the
    /// implicit global usings.
    pub fn new() -> Self {
        let mut table = TypeTable::empty();
        for &ty in PredefinedType::ALL {
            let category = if ty.is_reference_type() {
                TypeCategory::Reference
            } else {
                TypeCategory::Value
            };
            let id = table.add_external("System", ty.system_name(), 0, category);
            table.entries[id.index()].special = Some(SpecialType::Predefined(ty));
        }
        let id = table.add_well_known(&NULLABLE);
        table.entries[id.index()].special = Some(SpecialType::Nullable);
        for ty in WELL_KNOWN_TYPES {
            table.add_well_known(ty);
        }
        table
            .global_imports
            .extend(IMPLICIT_USINGS.iter().map(|ns| (*ns).to_owned()));
        table
    }

    /// Table with nothing in it, not even predefined types.
    pub fn empty() -> Self {
        let mut namespaces = FxHashSet::default();
        namespaces.insert(String::new());
        TypeTable {
            entries: Vec::new(),
            by_key: FxHashMap::default(),
            namespaces,
            global_imports: Vec::new(),
            global_aliases: Vec::new(),
        }
    }

    fn add_well_known(&mut self, ty: &WellKnownType) -> TypeId {
        self.add_external(ty.namespace, ty.name, ty.arity, ty.category)
    }

    /// Register a library type declared outside the processed sources.
    pub fn add_external(
        &mut self,
        namespace: &str,
        name: &str,
        arity: usize,
        category: TypeCategory,
    ) -> TypeId {
        self.add_namespace(namespace);
        self.insert(
            Container::Namespace(namespace.to_owned()),
            TypeEntry {
                name: name.to_owned(),
                namespace: namespace.to_owned(),
                containing: None,
                arity,
                type_params: Vec::new(),
                category,
                special: None,
                origin: TypeOrigin::Library,
            },
        )
    }

    /// Register the namespaces, types and global usings of a parsed file.
    #[tracing::instrument(level = "debug", skip_all, fields(members = unit.members.len()))]
    pub fn add_unit(&mut self, unit: &CompilationUnit, interner: &StringInterner) {
        for using in unit.usings.iter().filter(|using| using.is_global) {
            match &using.kind {
                UsingKind::Namespace(name) => {
                    self.global_imports.push(name_text(name, interner));
                }
                UsingKind::Alias { alias, target } => {
                    let alias = interner.lookup(alias.name).to_owned();
                    self.global_aliases.push((alias, target.clone()));
                }
                UsingKind::Static(_) => {}
            }
        }
        let before = self.entries.len();
        self.add_members(&unit.members, "", interner);
        debug!(types = self.entries.len() - before, "registered source types");
    }

    fn add_members(&mut self, members: &[NamespaceMember], namespace: &str, interner: &StringInterner) {
        for member in members {
            match member {
                NamespaceMember::Namespace(ns) => {
                    let full = join_namespace(namespace, &name_text(&ns.name, interner));
                    self.add_namespace(&full);
                    self.add_members(&ns.members, &full, interner);
                }
                NamespaceMember::Type(decl) => {
                    self.add_type(
                        decl,
                        Container::Namespace(namespace.to_owned()),
                        namespace,
                        interner,
                    );
                }
            }
        }
    }

    fn add_type(
        &mut self,
        decl: &TypeDecl,
        container: Container,
        namespace: &str,
        interner: &StringInterner,
    ) {
        let category = if decl.kind.is_reference_type() {
            TypeCategory::Reference
        } else {
            TypeCategory::Value
        };
        let containing = match container {
            Container::Type(id) => Some(id),
            Container::Namespace(_) => None,
        };
        let id = self.insert(
            container,
            TypeEntry {
                name: interner.lookup(decl.name.name).to_owned(),
                namespace: namespace.to_owned(),
                containing,
                arity: decl.type_params.len(),
                type_params: decl
                    .type_params
                    .iter()
                    .map(|param| interner.lookup(param.name.name).to_owned())
                    .collect(),
                category,
                special: None,
                origin: TypeOrigin::Source,
            },
        );
        for member in &decl.members {
            if let MemberKind::Type(nested) = &member.kind {
                self.add_type(nested, Container::Type(id), namespace, interner);
            }
        }
    }

    /// Insert `entry`, or return the entry already registered under the
    /// same key.
    fn insert(&mut self, container: Container, entry: TypeEntry) -> TypeId {
        let key = TypeKey {
            container,
            name: entry.name.clone(),
            arity: entry.arity,
        };
        if let Some(&id) = self.by_key.get(&key) {
            return id;
        }
        let id = TypeId(u32::try_from(self.entries.len()).unwrap_or(u32::MAX));
        self.entries.push(entry);
        self.by_key.insert(key, id);
        id
    }

    fn add_namespace(&mut self, namespace: &str) {
        let mut end = 0;
        for segment in namespace.split('.') {
            end += segment.len();
            self.namespaces.insert(namespace[..end].to_owned());
            end += 1;
        }
    }

    pub fn entry(&self, id: TypeId) -> &TypeEntry {
        &self.entries[id.index()]
    }

    pub fn lookup_in_namespace(&self, namespace: &str, name: &str, arity: usize) -> Option<TypeId> {
        self.lookup(Container::Namespace(namespace.to_owned()), name, arity)
    }

    pub fn lookup_nested(&self, container: TypeId, name: &str, arity: usize) -> Option<TypeId> {
        self.lookup(Container::Type(container), name, arity)
    }

    fn lookup(&self, container: Container, name: &str, arity: usize) -> Option<TypeId> {
        let key = TypeKey {
            container,
            name: name.to_owned(),
            arity,
        };
        self.by_key.get(&key).copied()
    }

    /// Whether `namespace` (dotted, without `global::`) exists.
    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.namespaces.contains(namespace)
    }

    /// Namespaces imported into every file: implicit usings, then
    /// `global using` directives in registration order.
    pub fn global_imports(&self) -> &[String] {
        &self.global_imports
    }

    /// `global using A = T;` directives.
    pub fn global_aliases(&self) -> &[(String, TypeSyntax)] {
        &self.global_aliases
    }

    /// Entries declared in processed sources.
    pub fn source_types(&self) -> impl Iterator<Item = &TypeEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.origin == TypeOrigin::Source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
