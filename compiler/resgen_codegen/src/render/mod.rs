//! Result type rendering.
//!
//! A model becomes one `readonly partial struct` holding an `int` flag (the
//! 1-based variant discriminant) and one field per data-carrying variant.
//! Every identifier taken from the model is written `@`-escaped, so keyword
//! names such as `class` stay legal.

use resgen_ir::{ResultTypeModel, ResultValueModel, ValueParameterModel};

use crate::writer::CodeWriter;

const HEADER: &str = "/// <auto-generated/>

using System.Diagnostics.CodeAnalysis;
using ResultGenerator.Internal;

#nullable enable

[ResultType]";

/// Render `model` as C# source.
///
/// Output depends only on the model: equal models render identical text.
#[tracing::instrument(level = "debug", skip_all, fields(name = %model.name))]
pub fn render(model: &ResultTypeModel) -> String {
    let mut out = CodeWriter::with_capacity(1024 + model.values.len() * 512);
    let type_name = type_name(model);

    out.append_line(&format!("{HEADER}\npublic readonly partial struct {type_name}"));
    out.block(|out| {
        out.append_line("private readonly int _flag;\n");

        out.sections("\n", &model.values, write_field);
        out.append("\n\n");

        write_ctor(out, model, &type_name);

        out.sections("\n", model.discriminants(), |out, (index, value)| {
            write_factory(out, &type_name, index, value);
        });
        out.append("\n\n");

        out.sections("\n", model.discriminants(), |out, (index, value)| {
            out.append(&format!(
                "public bool Is{} => this._flag == {index};",
                value.name
            ));
        });
        out.append("\n\n");

        out.sections("\n", model.discriminants(), |out, (index, value)| {
            write_try_as(out, index, value);
        });
        out.append("\n\n");

        write_to_string(out, model);
    });

    let text = out.finish();
    tracing::trace!(bytes = text.len(), "rendered");
    text
}

/// Name of the generated file for `model`.
pub fn file_name(model: &ResultTypeModel) -> String {
    format!("{}.g.cs", model.name)
}

fn write_field(out: &mut CodeWriter, value: &ResultValueModel) {
    if value.has_data() {
        out.append(&format!(
            "private readonly {} {};",
            payload_type(&value.parameters),
            field_name(value)
        ));
    } else {
        out.append(&format!("// Variant {} has no data.", value.name));
    }
}

fn write_ctor(out: &mut CodeWriter, model: &ResultTypeModel, type_name: &str) {
    let data = || model.values.iter().filter(|value| value.has_data());

    out.append(&format!("private {type_name}(int flag"));
    for value in data() {
        out.append(&format!(
            ", {} {} = default!",
            payload_type(&value.parameters),
            payload_name(value)
        ));
    }
    out.append_line(")");

    out.block(|out| {
        out.append_line("this._flag = flag;");
        for value in data() {
            out.append_line(&format!(
                "this.{} = {};",
                field_name(value),
                payload_name(value)
            ));
        }
    });
    out.newline();
}

fn write_factory(out: &mut CodeWriter, type_name: &str, index: usize, value: &ResultValueModel) {
    out.append(&format!("public static {type_name} @{}", value.name));

    if !value.has_data() {
        out.append(&format!("() => new({index});"));
        return;
    }

    let parameters = join(&value.parameters, |parameter| {
        format!("{} {}", parameter.ty.display(), parameter_name(parameter))
    });
    let arguments = join(&value.parameters, parameter_name);
    out.append(&format!(
        "({parameters}) => new({index}, {}: ({arguments}));",
        payload_name(value)
    ));
}

fn write_try_as(out: &mut CodeWriter, index: usize, value: &ResultValueModel) {
    if !value.has_data() {
        out.append(&format!("// Variant {} has no data to try get.", value.name));
        return;
    }

    out.append(&format!("public bool TryAs{}(", value.name));
    out.sections(", ", &value.parameters, |out, parameter| {
        out.append(&format!(
            "[MaybeNullWhen(false)] out {} {}",
            parameter.ty.display(),
            parameter_name(parameter)
        ));
    });
    out.append_line(")\n{");

    out.indent();
    out.append_line(&format!(
        "{} = this.{};\nreturn this._flag == {index};",
        payload_target(&value.parameters),
        field_name(value)
    ));
    out.dedent();
    out.append("}");
}

fn write_to_string(out: &mut CodeWriter, model: &ResultTypeModel) {
    out.append_line("public override string? ToString()");
    out.block(|out| {
        out.sections("\n", model.discriminants(), |out, (index, value)| {
            out.append_line(&format!("if (this._flag == {index})"));
            out.block(|out| write_description(out, value));
        });

        out.newline();
        out.append_line("return null;");
    });
}

/// Body of one `ToString` branch: the variant name, plus a raw interpolated
/// string listing the payload when there is one.
fn write_description(out: &mut CodeWriter, value: &ResultValueModel) {
    if !value.has_data() {
        out.append_line(&format!("return \"{}\";", value.name));
        return;
    }

    out.append("var ");
    out.append(&payload_target(&value.parameters));
    out.append_line(&format!(" = this.{};", field_name(value)));

    out.append(&format!("return $$\"\"\"\n{} {{ ", value.name));
    out.sections(", ", &value.parameters, |out, parameter| {
        out.append(&format!(
            "{} = {{{{{}}}}}",
            parameter.name,
            parameter_name(parameter)
        ));
    });
    out.append_line(" }\n\"\"\";");
}

fn type_name(model: &ResultTypeModel) -> String {
    format!("@{}", model.name)
}

/// `_okData` for variant `Ok`.
fn field_name(value: &ResultValueModel) -> String {
    format!("_{}Data", lower_camel(&value.name))
}

/// Constructor argument carrying the payload of `value`.
fn payload_name(value: &ResultValueModel) -> String {
    format!("@{}", lower_camel(&value.name))
}

fn parameter_name(parameter: &ValueParameterModel) -> String {
    format!("@{}", lower_camel(&parameter.name))
}

/// `T` for one parameter, `(T1, T2)` for several.
fn payload_type(parameters: &[ValueParameterModel]) -> String {
    match parameters {
        [single] => single.ty.display(),
        _ => format!("({})", join(parameters, |parameter| parameter.ty.display())),
    }
}

/// `@p` for one parameter, `(@p1, @p2)` for several.
fn payload_target(parameters: &[ValueParameterModel]) -> String {
    match parameters {
        [single] => parameter_name(single),
        _ => format!("({})", join(parameters, parameter_name)),
    }
}

fn join(
    parameters: &[ValueParameterModel],
    text: impl Fn(&ValueParameterModel) -> String,
) -> String {
    parameters.iter().map(text).collect::<Vec<_>>().join(", ")
}

/// Lowercase the first character, keep the rest.
fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests;
