//! Error codes for all resgen diagnostics.
//!
//! Each code is a stable identifier (e.g. `RESGEN0003`) used for `--explain`
//! lookups, JSON output and documentation.

use std::fmt;

use crate::Severity;

/// Error codes for all resgen diagnostics.
///
/// Format: `RESGEN####` where the first digit indicates the source:
/// - RESGEN0xxx: result declarations (the generator's own diagnostics)
/// - RESGEN1xxx: lexing and parsing of the C# input
/// - RESGEN9xxx: driver errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Result declarations (RESGEN0xxx)
    /// Marked method has no `[result: ...]` declaration
    SpecifyResultDeclaration,
    /// More than one `[result: ...]` declaration on a method
    TooManyResultDeclarations,
    /// Result type name is not a valid identifier
    InvalidResultTypeName,
    /// Marker attribute arguments match no constructor
    InvalidAttributeCtor,
    /// Single-variant result type (info)
    CanBeInlined,
    /// Variant name is not a single identifier
    BadValueSyntax,
    /// Variant argument is not `name<Type>`
    BadValueParameterSyntax,
    /// Parameter declares more than one type
    TooManyValueParameterTypes,
    /// Parameter type does not resolve
    UnknownType,
    /// Declaration on the unmarked half of a partial method (warning)
    IgnoredResultDeclaration,

    // Syntax (RESGEN1xxx)
    /// Unterminated string literal
    UnterminatedString,
    /// Unterminated character literal
    UnterminatedChar,
    /// Unterminated block comment
    UnterminatedComment,
    /// Character that starts no token
    InvalidCharacter,
    /// Unexpected token
    UnexpectedToken,
    /// Expected an identifier
    ExpectedIdentifier,
    /// Expected a type
    ExpectedType,
    /// Expected an expression
    ExpectedExpression,
    /// Unclosed delimiter
    UnclosedDelimiter,
    /// Expected a type or namespace declaration
    ExpectedDeclaration,

    // Driver (RESGEN9xxx)
    /// Two result types would be written to the same file
    DuplicateResultType,
    /// Source file too large to address with 32-bit offsets
    SourceTooLarge,
}

/// Diagnostic category, as shown in JSON output.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    /// The declaration is wrong and generation is affected.
    ResultCorrectness,
    /// The declaration works but could be simpler.
    ResultQuality,
    /// The C# input could not be read.
    Syntax,
    /// The generator itself could not complete.
    Driver,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::ResultCorrectness => "ResultCorrectness",
            Category::ResultQuality => "ResultQuality",
            Category::Syntax => "Syntax",
            Category::Driver => "Driver",
        }
    }
}

impl ErrorCode {
    /// All error codes, in code order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::SpecifyResultDeclaration,
        ErrorCode::TooManyResultDeclarations,
        ErrorCode::InvalidResultTypeName,
        ErrorCode::InvalidAttributeCtor,
        ErrorCode::CanBeInlined,
        ErrorCode::BadValueSyntax,
        ErrorCode::BadValueParameterSyntax,
        ErrorCode::TooManyValueParameterTypes,
        ErrorCode::UnknownType,
        ErrorCode::IgnoredResultDeclaration,
        ErrorCode::UnterminatedString,
        ErrorCode::UnterminatedChar,
        ErrorCode::UnterminatedComment,
        ErrorCode::InvalidCharacter,
        ErrorCode::UnexpectedToken,
        ErrorCode::ExpectedIdentifier,
        ErrorCode::ExpectedType,
        ErrorCode::ExpectedExpression,
        ErrorCode::UnclosedDelimiter,
        ErrorCode::ExpectedDeclaration,
        ErrorCode::DuplicateResultType,
        ErrorCode::SourceTooLarge,
    ];

    /// Get the code string (e.g. "RESGEN0001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::SpecifyResultDeclaration => "RESGEN0001",
            ErrorCode::TooManyResultDeclarations => "RESGEN0002",
            ErrorCode::InvalidResultTypeName => "RESGEN0003",
            ErrorCode::InvalidAttributeCtor => "RESGEN0004",
            ErrorCode::CanBeInlined => "RESGEN0005",
            ErrorCode::BadValueSyntax => "RESGEN0006",
            ErrorCode::BadValueParameterSyntax => "RESGEN0007",
            ErrorCode::TooManyValueParameterTypes => "RESGEN0008",
            ErrorCode::UnknownType => "RESGEN0009",
            ErrorCode::IgnoredResultDeclaration => "RESGEN0010",
            ErrorCode::UnterminatedString => "RESGEN1001",
            ErrorCode::UnterminatedChar => "RESGEN1002",
            ErrorCode::UnterminatedComment => "RESGEN1003",
            ErrorCode::InvalidCharacter => "RESGEN1004",
            ErrorCode::UnexpectedToken => "RESGEN1101",
            ErrorCode::ExpectedIdentifier => "RESGEN1102",
            ErrorCode::ExpectedType => "RESGEN1103",
            ErrorCode::ExpectedExpression => "RESGEN1104",
            ErrorCode::UnclosedDelimiter => "RESGEN1105",
            ErrorCode::ExpectedDeclaration => "RESGEN1106",
            ErrorCode::DuplicateResultType => "RESGEN9001",
            ErrorCode::SourceTooLarge => "RESGEN9002",
        }
    }

    /// Short human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::SpecifyResultDeclaration => "Specify result declaration",
            ErrorCode::TooManyResultDeclarations => "Too many result declarations",
            ErrorCode::InvalidResultTypeName => "Invalid result type name",
            ErrorCode::InvalidAttributeCtor => "Unrecognized attribute constructor",
            ErrorCode::CanBeInlined => "Result type can be inlined",
            ErrorCode::BadValueSyntax => "Invalid result value identifier",
            ErrorCode::BadValueParameterSyntax => "Invalid value parameter syntax",
            ErrorCode::TooManyValueParameterTypes => "Too many value parameter types",
            ErrorCode::UnknownType => "Unknown type",
            ErrorCode::IgnoredResultDeclaration => "Ignored result declaration",
            ErrorCode::UnterminatedString => "Unterminated string literal",
            ErrorCode::UnterminatedChar => "Unterminated character literal",
            ErrorCode::UnterminatedComment => "Unterminated block comment",
            ErrorCode::InvalidCharacter => "Invalid character",
            ErrorCode::UnexpectedToken => "Unexpected token",
            ErrorCode::ExpectedIdentifier => "Expected identifier",
            ErrorCode::ExpectedType => "Expected type",
            ErrorCode::ExpectedExpression => "Expected expression",
            ErrorCode::UnclosedDelimiter => "Unclosed delimiter",
            ErrorCode::ExpectedDeclaration => "Expected declaration",
            ErrorCode::DuplicateResultType => "Duplicate result type",
            ErrorCode::SourceTooLarge => "Source file too large",
        }
    }

    /// Severity the code is reported with.
    pub fn default_severity(&self) -> Severity {
        match self {
            ErrorCode::SpecifyResultDeclaration | ErrorCode::IgnoredResultDeclaration => {
                Severity::Warning
            }
            ErrorCode::CanBeInlined => Severity::Info,
            _ => Severity::Error,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ErrorCode::CanBeInlined => Category::ResultQuality,
            _ if self.is_result_code() => Category::ResultCorrectness,
            _ if self.is_syntax_error() => Category::Syntax,
            _ => Category::Driver,
        }
    }

    /// Longer explanation attached to some codes.
    pub fn description(&self) -> Option<&'static str> {
        match self {
            ErrorCode::InvalidResultTypeName => {
                Some("Result type names have to be valid C# identifiers")
            }
            ErrorCode::IgnoredResultDeclaration => Some(
                "Only the part of a partial method that carries the marker attribute declares the result type",
            ),
            _ => None,
        }
    }

    /// Check if this is one of the generator's own result-declaration codes.
    pub fn is_result_code(&self) -> bool {
        self.as_str().starts_with("RESGEN0")
    }

    /// Check if this is a lexer or parser error.
    pub fn is_syntax_error(&self) -> bool {
        self.as_str().starts_with("RESGEN1")
    }

    /// Check if this is a driver error.
    pub fn is_driver_error(&self) -> bool {
        self.as_str().starts_with("RESGEN9")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
