//! Session configuration: which attribute marks a method, and how result
//! declarations are spelled.
//!
//! Built once per run and passed by reference into every entry point.

use resgen_ir::ast::{Attribute, AttributeList};
use resgen_ir::StringInterner;
use resgen_types::{Scope, TypeCategory, TypeId, TypeResolver, TypeTable};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnalysisContext {
    /// Namespace of the marker attribute; empty for the global namespace.
    pub marker_namespace: String,
    /// Marker attribute name without its `Attribute` suffix.
    pub marker_name: String,
    /// Target specifier of declaration lists, as in `[result: Ok, Error]`.
    pub declaration_target: String,
    /// Appended to the method name when the marker names no type.
    pub name_suffix: String,
    /// Whether an unqualified marker has to be imported with `using`.
    /// When off, `[ReturnsResult]` also matches by spelling alone.
    pub require_marker_import: bool,
}

impl Default for AnalysisContext {
    fn default() -> Self {
        AnalysisContext {
            marker_namespace: "ResultGenerator".to_owned(),
            marker_name: "ReturnsResult".to_owned(),
            declaration_target: "result".to_owned(),
            name_suffix: "Result".to_owned(),
            require_marker_import: true,
        }
    }
}

impl AnalysisContext {
    /// Declared name of the marker attribute class.
    pub fn marker_type_name(&self) -> String {
        format!("{}Attribute", self.marker_name)
    }

    /// The marker's fully qualified display, as the resolver spells it.
    pub fn marker_display(&self) -> String {
        if self.marker_namespace.is_empty() {
            format!("global::{}", self.marker_type_name())
        } else {
            format!("global::{}.{}", self.marker_namespace, self.marker_type_name())
        }
    }

    /// Register the marker attribute class so attribute names can resolve
    /// to it.
    pub fn register_marker(&self, table: &mut TypeTable) -> TypeId {
        table.add_external(
            &self.marker_namespace,
            &self.marker_type_name(),
            0,
            TypeCategory::Reference,
        )
    }

    /// Whether `attribute` applies the marker.
    pub fn is_marker(
        &self,
        attribute: &Attribute,
        scope: &Scope,
        resolver: &dyn TypeResolver,
        interner: &StringInterner,
    ) -> bool {
        if let Some(ty) = resolver.resolve_attribute(&attribute.name, scope) {
            return ty.display() == self.marker_display();
        }
        !self.require_marker_import
            && attribute.name.as_simple().is_some_and(|ident| {
                let text = interner.lookup(ident.name);
                text == self.marker_name || text == self.marker_type_name()
            })
    }

    /// Whether `list` is a result declaration.
    pub fn is_declaration(&self, list: &AttributeList, interner: &StringInterner) -> bool {
        list.target
            .is_some_and(|target| interner.lookup(target.name) == self.declaration_target)
    }

    /// Type name used when the marker names none.
    pub fn default_type_name(&self, method_name: &str) -> String {
        format!("{method_name}{}", self.name_suffix)
    }
}
