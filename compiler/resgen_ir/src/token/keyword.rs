//! C# reserved keywords and predefined type keywords.
//!
//! Contextual keywords (`partial`, `record`, `global`, `where`, ...) are not
//! listed here; the lexer produces them as identifiers and the parser
//! recognizes them by text.

macro_rules! define_keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// A reserved C# keyword.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum Keyword {
            $($variant,)*
        }

        impl Keyword {
            /// All reserved keywords, in alphabetical order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// Source spelling of the keyword.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }

            /// Keyword spelled exactly `text`, if any.
            pub fn from_text(text: &str) -> Option<Keyword> {
                match text {
                    $($text => Some(Keyword::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

define_keywords! {
    Abstract => "abstract",
    As => "as",
    Base => "base",
    Bool => "bool",
    Break => "break",
    Byte => "byte",
    Case => "case",
    Catch => "catch",
    Char => "char",
    Checked => "checked",
    Class => "class",
    Const => "const",
    Continue => "continue",
    Decimal => "decimal",
    Default => "default",
    Delegate => "delegate",
    Do => "do",
    Double => "double",
    Else => "else",
    Enum => "enum",
    Event => "event",
    Explicit => "explicit",
    Extern => "extern",
    False => "false",
    Finally => "finally",
    Fixed => "fixed",
    Float => "float",
    For => "for",
    Foreach => "foreach",
    Goto => "goto",
    If => "if",
    Implicit => "implicit",
    In => "in",
    Int => "int",
    Interface => "interface",
    Internal => "internal",
    Is => "is",
    Lock => "lock",
    Long => "long",
    Namespace => "namespace",
    New => "new",
    Null => "null",
    Object => "object",
    Operator => "operator",
    Out => "out",
    Override => "override",
    Params => "params",
    Private => "private",
    Protected => "protected",
    Public => "public",
    Readonly => "readonly",
    Ref => "ref",
    Return => "return",
    SByte => "sbyte",
    Sealed => "sealed",
    Short => "short",
    Sizeof => "sizeof",
    Stackalloc => "stackalloc",
    Static => "static",
    String => "string",
    Struct => "struct",
    Switch => "switch",
    This => "this",
    Throw => "throw",
    True => "true",
    Try => "try",
    Typeof => "typeof",
    UInt => "uint",
    ULong => "ulong",
    Unchecked => "unchecked",
    Unsafe => "unsafe",
    UShort => "ushort",
    Using => "using",
    Virtual => "virtual",
    Void => "void",
    Volatile => "volatile",
    While => "while",
}

impl Keyword {
    /// The predefined type this keyword names, if it names one.
    pub const fn predefined_type(self) -> Option<PredefinedType> {
        Some(match self {
            Keyword::Bool => PredefinedType::Bool,
            Keyword::Byte => PredefinedType::Byte,
            Keyword::SByte => PredefinedType::SByte,
            Keyword::Char => PredefinedType::Char,
            Keyword::Decimal => PredefinedType::Decimal,
            Keyword::Double => PredefinedType::Double,
            Keyword::Float => PredefinedType::Float,
            Keyword::Int => PredefinedType::Int,
            Keyword::UInt => PredefinedType::UInt,
            Keyword::Long => PredefinedType::Long,
            Keyword::ULong => PredefinedType::ULong,
            Keyword::Short => PredefinedType::Short,
            Keyword::UShort => PredefinedType::UShort,
            Keyword::Object => PredefinedType::Object,
            Keyword::String => PredefinedType::String,
            Keyword::Void => PredefinedType::Void,
            _ => return None,
        })
    }
}

/// A type spelled with a keyword (`int`, `string`, `object`, ...).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PredefinedType {
    Bool,
    Byte,
    SByte,
    Char,
    Decimal,
    Double,
    Float,
    Int,
    UInt,
    Long,
    ULong,
    Short,
    UShort,
    Object,
    String,
    Void,
}

impl PredefinedType {
    /// Every predefined type.
    pub const ALL: &'static [PredefinedType] = &[
        PredefinedType::Bool,
        PredefinedType::Byte,
        PredefinedType::SByte,
        PredefinedType::Char,
        PredefinedType::Decimal,
        PredefinedType::Double,
        PredefinedType::Float,
        PredefinedType::Int,
        PredefinedType::UInt,
        PredefinedType::Long,
        PredefinedType::ULong,
        PredefinedType::Short,
        PredefinedType::UShort,
        PredefinedType::Object,
        PredefinedType::String,
        PredefinedType::Void,
    ];

    /// Keyword spelling, which is also the canonical display.
    pub const fn keyword(self) -> &'static str {
        match self {
            PredefinedType::Bool => "bool",
            PredefinedType::Byte => "byte",
            PredefinedType::SByte => "sbyte",
            PredefinedType::Char => "char",
            PredefinedType::Decimal => "decimal",
            PredefinedType::Double => "double",
            PredefinedType::Float => "float",
            PredefinedType::Int => "int",
            PredefinedType::UInt => "uint",
            PredefinedType::Long => "long",
            PredefinedType::ULong => "ulong",
            PredefinedType::Short => "short",
            PredefinedType::UShort => "ushort",
            PredefinedType::Object => "object",
            PredefinedType::String => "string",
            PredefinedType::Void => "void",
        }
    }

    /// Simple name of the `System` type the keyword aliases.
    pub const fn system_name(self) -> &'static str {
        match self {
            PredefinedType::Bool => "Boolean",
            PredefinedType::Byte => "Byte",
            PredefinedType::SByte => "SByte",
            PredefinedType::Char => "Char",
            PredefinedType::Decimal => "Decimal",
            PredefinedType::Double => "Double",
            PredefinedType::Float => "Single",
            PredefinedType::Int => "Int32",
            PredefinedType::UInt => "UInt32",
            PredefinedType::Long => "Int64",
            PredefinedType::ULong => "UInt64",
            PredefinedType::Short => "Int16",
            PredefinedType::UShort => "UInt16",
            PredefinedType::Object => "Object",
            PredefinedType::String => "String",
            PredefinedType::Void => "Void",
        }
    }

    /// `object` and `string` are reference types; the rest are values.
    pub const fn is_reference_type(self) -> bool {
        matches!(self, PredefinedType::Object | PredefinedType::String)
    }

    /// Predefined type aliased by `System.{name}`.
    pub fn from_system_name(name: &str) -> Option<PredefinedType> {
        PredefinedType::ALL
            .iter()
            .copied()
            .find(|ty| ty.system_name() == name)
    }
}
