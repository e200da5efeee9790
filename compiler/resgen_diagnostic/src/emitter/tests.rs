use super::*;

#[test]
fn test_escape_json() {
    assert_eq!(escape_json("hello"), "hello");
    assert_eq!(escape_json("Unknown type 'Foo'"), "Unknown type 'Foo'");
    assert_eq!(escape_json("\"quoted\""), "\\\"quoted\\\"");
    assert_eq!(escape_json("line1\nline2"), "line1\\nline2");
    assert_eq!(escape_json("C:\\src\\Foo.cs"), "C:\\\\src\\\\Foo.cs");
    assert_eq!(escape_json("\u{1}"), "\\u0001");
}

#[test]
fn test_trailing_comma() {
    assert_eq!(trailing_comma(0, 2), ",");
    assert_eq!(trailing_comma(1, 2), "");
    assert_eq!(trailing_comma(0, 1), "");
}
