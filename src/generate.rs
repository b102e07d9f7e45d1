use std::io::Write;

use log::{debug, warn};
use thiserror::Error;

use crate::codegen::mock::mock_def;
use crate::codegen::{to_struct, MockOptions};
use crate::defaults::apply_defaults;
use crate::models::Interface;
use crate::syntax::{parse_interface, SyntaxError};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("generate: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("generate: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse `raw` and return its interface with every parameter named.
pub fn interface_model(raw: &str) -> Result<Interface, GenerateError> {
    let parsed = parse_interface(raw)?;
    debug!("Parsed interface:\n{}", parsed);
    Ok(apply_defaults(&parsed))
}

pub fn generate<W: Write>(raw: &str, w: &mut W) -> Result<(), GenerateError> {
    generate_with(raw, w, &MockOptions::default())
}

/// Write `raw` followed by the generated mock to `w`.
///
/// Nothing is written unless the whole declaration could be processed.
///
/// # Panics
///
/// Panics when the interface embeds a non-method element or a method runs
/// out of single-letter names.
pub fn generate_with<W: Write>(raw: &str, w: &mut W, opts: &MockOptions) -> Result<(), GenerateError> {
    let iface = interface_model(raw)?;

    for method in &iface.methods {
        if method.params.iter().any(|p| p.name.as_str() == Some(opts.receiver.as_str())) {
            warn!(
                "Parameter of {} shadows the receiver {}, the generated code will not compile",
                method.name, opts.receiver
            );
        }
    }

    let def = to_struct(&iface);
    debug!("Generating {}{} with {} method(s)", opts.prefix, def.name, def.methods.len());
    let generated = mock_def(&def, opts);

    w.write_all(raw.as_bytes())?;
    if !raw.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.write_all(generated.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glob::glob;
    use std::fs;

    fn gen(raw: &str) -> String {
        let mut out = Vec::new();
        generate(raw, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_unnamed_params() {
        let raw = "type Foo interface { Bar(int, string) error }\n";
        let out = gen(raw);
        assert!(out.starts_with(raw));
        assert_eq!(
            &out[raw.len()..],
            "
type MockFoo struct {
\tBarFn func(a int, b string) error
}

func (o MockFoo) Bar(a int, b string) error {
\treturn o.BarFn(a, b)
}
"
        );
    }

    #[test]
    fn test_named_results_are_kept() {
        let out = gen("type Foo interface { Get(key string) (val string, err error) }\n");
        assert!(out.contains("\tGetFn func(key string) (val string, err error)\n"));
        assert!(out.contains(
            "func (o MockFoo) Get(key string) (val string, err error) {\n\treturn o.GetFn(key)\n}\n"
        ));
    }

    #[test]
    fn test_unnamed_results_stay_unnamed() {
        let out = gen("type Foo interface { F() (int, error) }\n");
        assert!(out.contains("\tFFn func() (int, error)\n"));
        assert!(out.contains("func (o MockFoo) F() (int, error) {\n\treturn o.FFn()\n}\n"));
    }

    #[test]
    fn test_blank_param() {
        let out = gen("type Foo interface { Bar(_ int, s string) }\n");
        assert!(out.contains("\tBarFn func(_ int, s string)\n"));
        assert!(out.contains("\to.BarFn(_, s)\n"));
    }

    #[test]
    fn test_missing_trailing_newline() {
        let out = gen("type Foo interface { Close() }");
        assert!(out.starts_with("type Foo interface { Close() }\n\ntype MockFoo struct {\n"));
    }

    #[test]
    fn test_options() {
        let opts = MockOptions {
            prefix: "Stub".to_string(),
            receiver: "s".to_string(),
        };
        let mut out = Vec::new();
        generate_with("type Clock interface { Now() time.Time }\n", &mut out, &opts).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("type StubClock struct {\n\tNowFn func() time.Time\n}\n"));
        assert!(out.contains("func (s StubClock) Now() time.Time {\n\treturn s.NowFn()\n}\n"));
    }

    #[test]
    fn test_idempotent() {
        let raw = "type Foo interface {\n\tBar(context.Context, ...string) (n int, err error)\n}\n";
        assert_eq!(gen(raw), gen(raw));
    }

    #[test]
    fn test_syntax_error_writes_nothing() {
        let mut out = Vec::new();
        let err = generate("type Foo interface {\n\tBar(\n", &mut out).unwrap_err();
        assert!(matches!(err, GenerateError::Syntax(_)));
        assert!(err.to_string().starts_with("generate: "));
        assert!(out.is_empty());
    }

    #[test]
    fn test_array_length_expression() {
        let out = gen("type Foo interface { Do(buf [N * 2]byte) [N*2 + 1]int }\n");
        assert!(out.contains("\tDoFn func(buf [N * 2]byte) [N*2 + 1]int\n"));
        assert!(out.contains("\treturn o.DoFn(buf)\n"));
    }

    #[test]
    fn test_unterminated_comment_writes_nothing() {
        let mut out = Vec::new();
        let err = generate("type Foo interface {\n\tBar() /* error\n}\n", &mut out).unwrap_err();
        assert_eq!(err.to_string(), "generate: 2:8: comment not terminated");
        assert!(out.is_empty());
    }

    #[test]
    fn test_interface_model() {
        let iface = interface_model("type Foo interface { Bar(int, bool) (n int, err error) }").unwrap();
        let bar = &iface.methods[0];
        assert_eq!(bar.params[0].name.as_str(), Some("a"));
        assert_eq!(bar.params[1].name.as_str(), Some("b"));
        assert_eq!(bar.results[0].name.as_str(), Some("n"));
        assert_eq!(bar.results[1].name.as_str(), Some("err"));
    }

    /// Generates every `fixtures/*.in` and compares it with the matching
    /// `.out` file. Run with `REGENERATE=1` to rewrite the expectations.
    #[test]
    fn test_fixtures() {
        let pattern = format!("{}/fixtures/*.in", env!("CARGO_MANIFEST_DIR"));
        let regenerate = std::env::var_os("REGENERATE").is_some();

        let mut count = 0;
        let mut failures = Vec::new();
        for path in glob(&pattern).unwrap() {
            let path = path.unwrap();
            let input = fs::read_to_string(&path).unwrap();
            let got = gen(&input);
            count += 1;

            let expected_path = path.with_extension("out");
            if regenerate {
                fs::write(&expected_path, &got).unwrap();
                continue;
            }

            let expected = fs::read_to_string(&expected_path).unwrap();
            if got != expected {
                failures.push(format!(
                    "{}: output does not match expected. expected:\n{}\ngot:\n{}",
                    path.display(),
                    expected,
                    got
                ));
            }
        }

        assert!(count > 0, "no fixtures found");
        assert!(failures.is_empty(), "{}", failures.join("\n"));
    }
}
