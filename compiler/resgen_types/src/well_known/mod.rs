//! Library types every compilation can see without declaring them.

use crate::TypeCategory;

/// A library type known by name, namespace and arity.
pub(crate) struct WellKnownType {
    pub namespace: &'static str,
    pub name: &'static str,
    pub arity: usize,
    pub category: TypeCategory,
}

const fn class(namespace: &'static str, name: &'static str, arity: usize) -> WellKnownType {
    WellKnownType {
        namespace,
        name,
        arity,
        category: TypeCategory::Reference,
    }
}

const fn value(namespace: &'static str, name: &'static str, arity: usize) -> WellKnownType {
    WellKnownType {
        namespace,
        name,
        arity,
        category: TypeCategory::Value,
    }
}

const SYSTEM: &str = "System";
const GENERIC: &str = "System.Collections.Generic";
const TASKS: &str = "System.Threading.Tasks";

/// `System.Nullable<T>`, registered apart from the rest.
pub(crate) const NULLABLE: WellKnownType = value(SYSTEM, "Nullable", 1);

pub(crate) const WELL_KNOWN_TYPES: &[WellKnownType] = &[
    value(SYSTEM, "Guid", 0),
    value(SYSTEM, "DateTime", 0),
    value(SYSTEM, "DateTimeOffset", 0),
    value(SYSTEM, "DateOnly", 0),
    value(SYSTEM, "TimeOnly", 0),
    value(SYSTEM, "TimeSpan", 0),
    value(SYSTEM, "Half", 0),
    value(SYSTEM, "Int128", 0),
    value(SYSTEM, "UInt128", 0),
    value(SYSTEM, "IntPtr", 0),
    value(SYSTEM, "UIntPtr", 0),
    value(SYSTEM, "Index", 0),
    value(SYSTEM, "Range", 0),
    value(SYSTEM, "ReadOnlyMemory", 1),
    value(SYSTEM, "Memory", 1),
    value(SYSTEM, "ValueTuple", 2),
    class(SYSTEM, "Exception", 0),
    class(SYSTEM, "ArgumentException", 0),
    class(SYSTEM, "InvalidOperationException", 0),
    class(SYSTEM, "Uri", 0),
    class(SYSTEM, "Version", 0),
    class(SYSTEM, "Type", 0),
    class(SYSTEM, "Array", 0),
    class(SYSTEM, "Delegate", 0),
    class(SYSTEM, "Action", 0),
    class(SYSTEM, "Action", 1),
    class(SYSTEM, "Action", 2),
    class(SYSTEM, "Func", 1),
    class(SYSTEM, "Func", 2),
    class(SYSTEM, "Func", 3),
    class(SYSTEM, "Lazy", 1),
    class(SYSTEM, "Tuple", 2),
    class(SYSTEM, "Attribute", 0),
    class(GENERIC, "List", 1),
    class(GENERIC, "Dictionary", 2),
    class(GENERIC, "HashSet", 1),
    class(GENERIC, "Queue", 1),
    class(GENERIC, "Stack", 1),
    class(GENERIC, "IEnumerable", 1),
    class(GENERIC, "ICollection", 1),
    class(GENERIC, "IList", 1),
    class(GENERIC, "ISet", 1),
    class(GENERIC, "IDictionary", 2),
    class(GENERIC, "IReadOnlyCollection", 1),
    class(GENERIC, "IReadOnlyList", 1),
    class(GENERIC, "IReadOnlyDictionary", 2),
    value(GENERIC, "KeyValuePair", 2),
    class("System.Collections", "IEnumerable", 0),
    value("System.Collections.Immutable", "ImmutableArray", 1),
    class("System.Collections.Immutable", "ImmutableList", 1),
    class("System.Collections.Immutable", "ImmutableDictionary", 2),
    class("System.IO", "Stream", 0),
    class("System.IO", "FileInfo", 0),
    class("System.IO", "IOException", 0),
    class("System.Text", "StringBuilder", 0),
    class("System.Net.Http", "HttpResponseMessage", 0),
    value("System.Threading", "CancellationToken", 0),
    class(TASKS, "Task", 0),
    class(TASKS, "Task", 1),
    value(TASKS, "ValueTask", 0),
    value(TASKS, "ValueTask", 1),
];

/// Namespaces imported into every file, as the .NET SDK does with implicit
/// usings.
pub const IMPLICIT_USINGS: &[&str] = &[
    "System",
    "System.Collections.Generic",
    "System.IO",
    "System.Linq",
    "System.Net.Http",
    "System.Threading",
    "System.Threading.Tasks",
];
