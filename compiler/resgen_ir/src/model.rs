//! Result-type model: what the renderer turns into source text.
//!
//! The model is a plain tree of owned values. Structural equality and hashing
//! over the whole tree make it usable as a memoization key for rendered
//! output.

/// A generated result type.
///
/// Variants are numbered from 1 in `values` order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ResultTypeModel {
    /// Validated identifier, written without `@`.
    pub name: String,
    pub values: Vec<ResultValueModel>,
}

impl ResultTypeModel {
    /// Discriminant assigned to each variant, in order.
    pub fn discriminants(&self) -> impl Iterator<Item = (usize, &ResultValueModel)> {
        self.values.iter().enumerate().map(|(i, value)| (i + 1, value))
    }
}

/// One variant of a result type.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ResultValueModel {
    /// Declared name, casing preserved.
    pub name: String,
    pub parameters: Vec<ValueParameterModel>,
}

impl ResultValueModel {
    /// Whether the variant carries data.
    #[inline]
    pub fn has_data(&self) -> bool {
        !self.parameters.is_empty()
    }
}

/// A named, typed payload slot of a variant.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ValueParameterModel {
    pub name: String,
    pub ty: ParameterTypeModel,
}

/// A resolved parameter type.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParameterTypeModel {
    /// Fully qualified display of the (unwrapped) type.
    pub fully_qualified_name: String,
    /// Render with a trailing `?`.
    pub is_nullable: bool,
    /// The runtime value may be null.
    pub can_be_null: bool,
}

impl ParameterTypeModel {
    /// Type text as written in generated code.
    pub fn display(&self) -> String {
        if self.is_nullable {
            format!("{}?", self.fully_qualified_name)
        } else {
            self.fully_qualified_name.clone()
        }
    }
}
