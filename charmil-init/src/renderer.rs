use crate::context::TemplateContext;
use crate::error::{InitError, Result};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node<'a> {
    Text(&'a str),
    Field { name: &'a str, line: usize },
}

/// A parsed file: literal text interleaved with `{{.Field}}` references.
///
/// Supports `{{- ` and ` -}}` to trim whitespace around an action. Nothing
/// else (conditionals, pipelines, comments) is accepted.
#[derive(Debug)]
pub struct Template<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> Template<'a> {
    pub fn parse(source: &'a str) -> Result<Self> {
        let mut nodes = Vec::new();
        let mut rest = source;
        let mut line = 1;
        let mut trim_next_text = false;

        while let Some(start) = rest.find(OPEN) {
            let mut text = &rest[..start];
            let after_open = &rest[start + OPEN.len()..];
            line += text.matches('\n').count();

            if trim_next_text {
                text = text.trim_start_matches(is_trim_space);
            }

            let body_and_rest = match after_open.strip_prefix('-') {
                Some(stripped) if stripped.starts_with(is_trim_space) => {
                    text = text.trim_end_matches(is_trim_space);
                    stripped
                }
                _ => after_open,
            };
            push_text(&mut nodes, text);

            let Some(end) = body_and_rest.find(CLOSE) else {
                return Err(parse_error(line, "unclosed action"));
            };

            let mut body = &body_and_rest[..end];
            trim_next_text = false;
            if let Some(stripped) = body.strip_suffix('-') {
                if stripped.ends_with(is_trim_space) {
                    body = stripped;
                    trim_next_text = true;
                }
            }

            nodes.push(parse_action(body.trim(), line)?);
            line += body.matches('\n').count();
            rest = &body_and_rest[end + CLOSE.len()..];
        }

        if trim_next_text {
            rest = rest.trim_start_matches(is_trim_space);
        }
        push_text(&mut nodes, rest);

        Ok(Self { nodes })
    }

    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut output = String::new();

        for node in &self.nodes {
            match node {
                Node::Text(text) => output.push_str(text),
                Node::Field { name, line } => {
                    let value = context.field(name).ok_or_else(|| InitError::TemplateExec {
                        field: name.to_string(),
                        line: *line,
                    })?;
                    output.push_str(value);
                }
            }
        }

        Ok(output)
    }
}

/// Parse `content` and substitute the context's fields.
pub fn render(content: &str, context: &TemplateContext) -> Result<String> {
    Template::parse(content)?.render(context)
}

fn parse_action(action: &str, line: usize) -> Result<Node<'_>> {
    if action.is_empty() {
        return Err(parse_error(line, "missing value for command"));
    }

    match action.strip_prefix('.') {
        Some(name) if name.split('.').all(is_identifier) => Ok(Node::Field { name, line }),
        _ => Err(parse_error(
            line,
            format!("unsupported action \"{action}\", only field references like {{{{.CliName}}}} are allowed"),
        )),
    }
}

fn push_text<'a>(nodes: &mut Vec<Node<'a>>, text: &'a str) {
    if !text.is_empty() {
        nodes.push(Node::Text(text));
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn is_trim_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn parse_error(line: usize, message: impl Into<String>) -> InitError {
    InitError::TemplateParse {
        line,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> TemplateContext {
        TemplateContext::new("aerogear", "charmil-demo", "demo").unwrap()
    }

    #[test]
    fn test_all_fields_concatenate() {
        let output = render("{{.Owner}}{{.Repo}}{{.CliName}}", &context()).unwrap();
        assert_eq!(output, "aerogearcharmil-demodemo");
    }

    #[test]
    fn test_text_without_markers_is_unchanged() {
        let source = "package main\n\nfunc main() {\n\tfmt.Println(\"}} not an action\")\n}\n";
        assert_eq!(render(source, &context()).unwrap(), source);
    }

    #[test]
    fn test_go_module_path() {
        let source = "module github.com/{{.Owner}}/{{ .Repo }}\n\ngo 1.16\n";
        assert_eq!(
            render(source, &context()).unwrap(),
            "module github.com/aerogear/charmil-demo\n\ngo 1.16\n"
        );
    }

    #[test]
    fn test_trim_markers() {
        let source = "name:\n    {{- .CliName -}}   \n!";
        assert_eq!(render(source, &context()).unwrap(), "name:demo!");
    }

    #[test]
    fn test_dash_without_space_is_not_a_trim_marker() {
        let err = render("a {{-.Owner}}", &context()).unwrap_err();
        assert!(matches!(err, InitError::TemplateParse { line: 1, .. }));
    }

    #[test]
    fn test_unclosed_action_reports_line() {
        let err = render("one\ntwo\nthree {{.Owner\n", &context()).unwrap_err();
        match err {
            InitError::TemplateParse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("unclosed"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_directives_are_rejected() {
        for source in [
            "{{if .Owner}}x{{end}}",
            "{{range .Repo}}{{end}}",
            "{{/* comment */}}",
            "{{.Owner | printf \"%s\"}}",
            "{{.}}",
            "{{ }}",
        ] {
            assert!(
                matches!(render(source, &context()), Err(InitError::TemplateParse { .. })),
                "{source} should not parse"
            );
        }
    }

    #[test]
    fn test_unknown_field_is_exec_error() {
        let err = render("line one\n{{.Version}}", &context()).unwrap_err();
        match err {
            InitError::TemplateExec { field, line } => {
                assert_eq!(field, "Version");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_nested_field_is_exec_error() {
        let err = render("{{.Owner.Name}}", &context()).unwrap_err();
        assert!(matches!(err, InitError::TemplateExec { .. }));
    }

    #[test]
    fn test_line_numbers_account_for_multiline_actions() {
        let err = render("{{\n.Owner\n}}\n{{.Missing}}", &context()).unwrap_err();
        assert!(matches!(err, InitError::TemplateExec { line: 4, .. }));
    }
}
