use pretty_assertions::assert_eq;
use proptest::prelude::*;
use resgen_ir::{ParameterTypeModel, ResultTypeModel, ResultValueModel, ValueParameterModel};

use super::{file_name, lower_camel, render};

fn param(name: &str, fqn: &str, is_nullable: bool) -> ValueParameterModel {
    ValueParameterModel {
        name: name.to_owned(),
        ty: ParameterTypeModel {
            fully_qualified_name: fqn.to_owned(),
            is_nullable,
            can_be_null: is_nullable,
        },
    }
}

fn value(name: &str, parameters: Vec<ValueParameterModel>) -> ResultValueModel {
    ResultValueModel {
        name: name.to_owned(),
        parameters,
    }
}

fn model(name: &str, values: Vec<ResultValueModel>) -> ResultTypeModel {
    ResultTypeModel {
        name: name.to_owned(),
        values,
    }
}

/// Joins lines so that indentation on blank lines stays visible.
fn lines(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

const PREAMBLE: [&str; 8] = [
    "/// <auto-generated/>",
    "",
    "using System.Diagnostics.CodeAnalysis;",
    "using ResultGenerator.Internal;",
    "",
    "#nullable enable",
    "",
    "[ResultType]",
];

fn expected(body: &[&str]) -> String {
    let mut all: Vec<&str> = PREAMBLE.to_vec();
    all.extend_from_slice(body);
    lines(&all)
}

#[test]
fn variants_without_data() {
    let rendered = render(&model(
        "GetPersonResult",
        vec![value("Ok", Vec::new()), value("NotFound", Vec::new())],
    ));
    assert_eq!(
        rendered,
        expected(&[
            "public readonly partial struct @GetPersonResult",
            "{",
            "    private readonly int _flag;",
            "    ",
            "    // Variant Ok has no data.",
            "    // Variant NotFound has no data.",
            "    ",
            "    private @GetPersonResult(int flag)",
            "    {",
            "        this._flag = flag;",
            "    }",
            "",
            "    public static @GetPersonResult @Ok() => new(1);",
            "    public static @GetPersonResult @NotFound() => new(2);",
            "    ",
            "    public bool IsOk => this._flag == 1;",
            "    public bool IsNotFound => this._flag == 2;",
            "    ",
            "    // Variant Ok has no data to try get.",
            "    // Variant NotFound has no data to try get.",
            "    ",
            "    public override string? ToString()",
            "    {",
            "        if (this._flag == 1)",
            "        {",
            "            return \"Ok\";",
            "        }",
            "        ",
            "        if (this._flag == 2)",
            "        {",
            "            return \"NotFound\";",
            "        }",
            "",
            "        return null;",
            "    }",
            "}",
        ])
    );
}

#[test]
fn get_person() {
    let rendered = render(&model(
        "GetPersonResult",
        vec![
            value("Ok", vec![param("Value", "global::App.Services.Person", false)]),
            value("NotFound", Vec::new()),
        ],
    ));
    assert_eq!(
        rendered,
        expected(&[
            "public readonly partial struct @GetPersonResult",
            "{",
            "    private readonly int _flag;",
            "    ",
            "    private readonly global::App.Services.Person _okData;",
            "    // Variant NotFound has no data.",
            "    ",
            "    private @GetPersonResult(int flag, global::App.Services.Person @ok = default!)",
            "    {",
            "        this._flag = flag;",
            "        this._okData = @ok;",
            "    }",
            "",
            "    public static @GetPersonResult @Ok(global::App.Services.Person @value) => new(1, @ok: (@value));",
            "    public static @GetPersonResult @NotFound() => new(2);",
            "    ",
            "    public bool IsOk => this._flag == 1;",
            "    public bool IsNotFound => this._flag == 2;",
            "    ",
            "    public bool TryAsOk([MaybeNullWhen(false)] out global::App.Services.Person @value)",
            "    {",
            "        @value = this._okData;",
            "        return this._flag == 1;",
            "    }",
            "    // Variant NotFound has no data to try get.",
            "    ",
            "    public override string? ToString()",
            "    {",
            "        if (this._flag == 1)",
            "        {",
            "            var @value = this._okData;",
            "            return $$\"\"\"",
            "            Ok { Value = {{@value}} }",
            "            \"\"\";",
            "        }",
            "        ",
            "        if (this._flag == 2)",
            "        {",
            "            return \"NotFound\";",
            "        }",
            "",
            "        return null;",
            "    }",
            "}",
        ])
    );
}

#[test]
fn several_parameters_use_tuples() {
    let rendered = render(&model(
        "Multi",
        vec![
            value(
                "A",
                vec![
                    param("Str", "string", false),
                    param("X", "int", false),
                    param("B", "bool", false),
                ],
            ),
            value("B", Vec::new()),
        ],
    ));
    assert_eq!(
        rendered,
        expected(&[
            "public readonly partial struct @Multi",
            "{",
            "    private readonly int _flag;",
            "    ",
            "    private readonly (string, int, bool) _aData;",
            "    // Variant B has no data.",
            "    ",
            "    private @Multi(int flag, (string, int, bool) @a = default!)",
            "    {",
            "        this._flag = flag;",
            "        this._aData = @a;",
            "    }",
            "",
            "    public static @Multi @A(string @str, int @x, bool @b) => new(1, @a: (@str, @x, @b));",
            "    public static @Multi @B() => new(2);",
            "    ",
            "    public bool IsA => this._flag == 1;",
            "    public bool IsB => this._flag == 2;",
            "    ",
            "    public bool TryAsA([MaybeNullWhen(false)] out string @str, [MaybeNullWhen(false)] out int @x, [MaybeNullWhen(false)] out bool @b)",
            "    {",
            "        (@str, @x, @b) = this._aData;",
            "        return this._flag == 1;",
            "    }",
            "    // Variant B has no data to try get.",
            "    ",
            "    public override string? ToString()",
            "    {",
            "        if (this._flag == 1)",
            "        {",
            "            var (@str, @x, @b) = this._aData;",
            "            return $$\"\"\"",
            "            A { Str = {{@str}}, X = {{@x}}, B = {{@b}} }",
            "            \"\"\";",
            "        }",
            "        ",
            "        if (this._flag == 2)",
            "        {",
            "            return \"B\";",
            "        }",
            "",
            "        return null;",
            "    }",
            "}",
        ])
    );
}

#[test]
fn nullable_types_get_question_mark() {
    let rendered = render(&model(
        "R",
        vec![
            value(
                "Error",
                vec![param("Message", "string", true), param("Code", "int", true)],
            ),
            value("Ok", Vec::new()),
        ],
    ));
    assert!(rendered.contains("    private readonly (string?, int?) _errorData;\n"));
    assert!(rendered.contains(
        "    public static @R @Error(string? @message, int? @code) => new(1, @error: (@message, @code));\n"
    ));
    assert!(rendered.contains("[MaybeNullWhen(false)] out string? @message"));
}

#[test]
fn keyword_names_are_escaped() {
    let generated = model("class", vec![value("Ok", Vec::new()), value("Error", Vec::new())]);
    let rendered = render(&generated);
    assert!(rendered.contains("public readonly partial struct @class\n"));
    assert!(rendered.contains("    private @class(int flag)\n"));
    assert!(rendered.contains("    public static @class @Ok() => new(1);\n"));
    assert_eq!(file_name(&generated), "class.g.cs");
}

#[test]
fn duplicate_variants_keep_their_positions() {
    let rendered = render(&model("R", vec![value("A", Vec::new()), value("A", Vec::new())]));
    assert!(rendered.contains("    public bool IsA => this._flag == 1;\n    public bool IsA => this._flag == 2;\n"));
}

#[test]
fn lower_camel_lowercases_first_char_only() {
    assert_eq!(lower_camel("NotFound"), "notFound");
    assert_eq!(lower_camel("ok"), "ok");
    assert_eq!(lower_camel("URL"), "uRL");
    assert_eq!(lower_camel("_X"), "_X");
    assert_eq!(lower_camel("Ärger"), "ärger");
    assert_eq!(lower_camel(""), "");
}

fn identifier() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9_]{0,8}"
}

proptest! {
    #[test]
    fn every_variant_gets_its_discriminant(
        names in prop::collection::vec(identifier(), 1..6),
        with_data in prop::collection::vec(any::<bool>(), 6),
    ) {
        let values: Vec<_> = names
            .iter()
            .zip(&with_data)
            .map(|(name, &data)| {
                let parameters = if data { vec![param("Value", "int", false)] } else { Vec::new() };
                value(name, parameters)
            })
            .collect();
        let generated = model("Generated", values);
        let rendered = render(&generated);

        prop_assert_eq!(&rendered, &render(&generated));
        for (i, name) in names.iter().enumerate() {
            let predicate = format!("    public bool Is{name} => this._flag == {};\n", i + 1);
            prop_assert!(rendered.contains(&predicate));
            let branch = format!("        if (this._flag == {})\n", i + 1);
            prop_assert!(rendered.contains(&branch));
        }
        let tail = "        return null;\n    }\n}\n";
        prop_assert!(rendered.ends_with(tail));
    }
}
