//! Whether a user-supplied name can become a generated C# identifier.

/// True when `text` is non-empty, starts with a letter (`Lu Ll Lt Lm Lo
/// Nl`) or `_`, and continues with letters, `Mn Mc Nd Pc Cf` characters or
/// `_`.
///
/// Keywords are accepted since generated names are always written with
/// `@`. The `@` itself is not part of an identifier.
pub fn is_valid_identifier(text: &str) -> bool {
    resgen_lexer::is_identifier(text)
}
