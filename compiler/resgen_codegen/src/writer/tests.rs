use pretty_assertions::assert_eq;

use super::CodeWriter;

#[test]
fn indent_dedent() {
    let mut writer = CodeWriter::new();
    writer.append_line("line1");
    writer.indent();
    writer.append_line("line2");
    writer.indent();
    writer.append_line("line3");
    writer.dedent();
    writer.append_line("line4");
    writer.dedent();
    writer.append_line("line5");

    assert_eq!(
        writer.finish(),
        "line1\n    line2\n        line3\n    line4\nline5\n"
    );
}

#[test]
fn continuation_is_not_indented() {
    let mut writer = CodeWriter::new();
    writer.indent();
    writer.append("a");
    writer.append("b");
    writer.append_line("c");
    writer.append("d");
    assert_eq!(writer.as_str(), "    abc\n    d");
}

#[test]
fn multi_line_text_indents_every_following_line() {
    let mut writer = CodeWriter::new();
    writer.append("x");
    writer.indent();
    writer.append("\n\n");
    writer.append("y");
    assert_eq!(writer.finish(), "x\n    \n    y");
}

#[test]
fn bare_newline_has_no_indentation() {
    let mut writer = CodeWriter::new();
    writer.indent();
    writer.append_line("a");
    writer.newline();
    writer.append_line("b");
    assert_eq!(writer.finish(), "    a\n\n    b\n");
}

#[test]
fn block_indents_body() {
    let mut writer = CodeWriter::new();
    writer.append_line("struct S");
    writer.block(|w| {
        w.append_line("int x;");
        w.append_line("");
        w.append_line("int y;");
    });
    assert_eq!(
        writer.finish(),
        "struct S\n{\n    int x;\n    \n    int y;\n}\n"
    );
}

#[test]
fn sections_put_separator_between_items() {
    let mut writer = CodeWriter::new();
    writer.sections(", ", ["a", "b", "c"], |w, item| w.append(item));
    writer.append(";");
    assert_eq!(writer.finish(), "a, b, c;");

    let mut empty = CodeWriter::new();
    empty.sections(", ", Vec::<&str>::new(), |w, item| w.append(item));
    assert_eq!(empty.finish(), "");
}
