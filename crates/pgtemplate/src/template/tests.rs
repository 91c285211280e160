use super::*;
use crate::args::Arg;
use crate::error::TemplateError;
use crate::fragment::Fragment;
use crate::{Value, args};

fn tokens(src: &str) -> Vec<Token<'_>> {
    parse(src, '@').collect()
}

fn ph(name: &str, format: Format) -> Token<'_> {
    Token::Placeholder(Placeholder { name, format })
}

// ==================== Parser ====================

#[test]
fn parse_empty_template_yields_nothing() {
    assert!(tokens("").is_empty());
}

#[test]
fn parse_plain_text_is_one_literal() {
    assert_eq!(tokens("SELECT 1"), vec![Token::Literal("SELECT 1")]);
}

#[test]
fn parse_skips_empty_literals_between_placeholders() {
    assert_eq!(
        tokens("{}{@L}{foo@L}"),
        vec![
            ph("", Format::Passthrough),
            ph("", Format::Literal),
            ph("foo", Format::Literal),
        ]
    );
}

#[test]
fn parse_all_codes() {
    for (code, format) in [
        ('S', Format::Sql),
        ('I', Format::Identifier),
        ('L', Format::Literal),
        ('P', Format::Placeholder),
        ('Q', Format::Qualified),
    ] {
        let src = format!("{{x@{code}}}");
        assert_eq!(tokens(&src), vec![ph("x", format)], "code {code}");
    }
}

#[test]
fn parse_disambiguates_marker_in_names() {
    assert_eq!(tokens("{kyt@@S}"), vec![ph("kyt@", Format::Sql)]);
    assert_eq!(tokens("{nol@@}"), vec![ph("nol@@", Format::Passthrough)]);
    assert_eq!(tokens("{tek@}"), vec![ph("tek@", Format::Passthrough)]);
    assert_eq!(tokens("{@}"), vec![ph("@", Format::Passthrough)]);
    assert_eq!(tokens("{@@}"), vec![ph("@@", Format::Passthrough)]);
    assert_eq!(tokens("{a@b@I}"), vec![ph("a@b", Format::Identifier)]);
}

#[test]
fn parse_codes_are_case_sensitive_and_closed() {
    assert_eq!(tokens("{x@i}"), vec![ph("x@i", Format::Passthrough)]);
    assert_eq!(tokens("{x@X}"), vec![ph("x@X", Format::Passthrough)]);
    assert_eq!(tokens("{x#I}"), vec![ph("x#I", Format::Passthrough)]);
    assert_eq!(tokens("{I}"), vec![ph("I", Format::Passthrough)]);
}

#[test]
fn parse_custom_marker() {
    let got: Vec<_> = parse("{a#I} {b@I}", '#').collect();
    assert_eq!(
        got,
        vec![
            ph("a", Format::Identifier),
            Token::Literal(" "),
            ph("b@I", Format::Passthrough),
        ]
    );
}

#[test]
fn parse_multibyte_marker_and_names() {
    let got: Vec<_> = parse("é {café§L}", '§').collect();
    assert_eq!(got, vec![Token::Literal("é "), ph("café", Format::Literal)]);
}

#[test]
fn parse_first_close_brace_wins() {
    assert_eq!(
        tokens("{a{b}c}"),
        vec![ph("a{b", Format::Passthrough), Token::Literal("c}")]
    );
}

#[test]
fn parse_unclosed_brace_is_literal() {
    assert_eq!(
        tokens("a = {x@L} AND b = {oops"),
        vec![
            Token::Literal("a = "),
            ph("x", Format::Literal),
            Token::Literal(" AND b = {oops"),
        ]
    );
    assert_eq!(tokens("{"), vec![Token::Literal("{")]);
}

#[test]
fn parse_stray_close_brace_is_literal() {
    assert_eq!(
        tokens("a } b {}"),
        vec![Token::Literal("a } b "), ph("", Format::Passthrough)]
    );
}

#[test]
fn format_code_round_trip() {
    for c in Format::CODES {
        let f = Format::from_code(c).unwrap();
        assert_eq!(f.code(), Some(c));
        assert_eq!(f.to_string(), c.to_string());
    }
    assert_eq!(Format::Passthrough.code(), None);
    assert_eq!(Format::from_code('s'), None);
}

// ==================== Binder ====================

#[test]
fn literal_tokens_become_raw_sql() {
    let got = bind(tokens("SELECT 1"), &Args::new()).unwrap();
    assert_eq!(got.parts(), &[Fragment::sql("SELECT 1")]);
}

#[test]
fn positional_cursor_advances_once_per_placeholder() {
    let got = bind(
        tokens("{@I}, {@L}, {}, {@P}"),
        &args!["a", "b", Fragment::sql("c"), "d"],
    )
    .unwrap();
    assert_eq!(
        got.parts(),
        &[
            Fragment::identifier("a"),
            Fragment::sql(", "),
            Fragment::literal("b"),
            Fragment::sql(", "),
            Fragment::sql("c"),
            Fragment::sql(", "),
            Fragment::placeholder("d"),
        ]
    );
}

#[test]
fn named_placeholders_do_not_consume_positionals() {
    let got = bind(tokens("{x@I}{@I}{x@L}"), &args!["pos"; "x" => "named"]).unwrap();
    assert_eq!(
        got.parts(),
        &[
            Fragment::identifier("named"),
            Fragment::identifier("pos"),
            Fragment::literal("named"),
        ]
    );
}

#[test]
fn positional_args_never_satisfy_names() {
    let err = bind(tokens("{x@I}"), &args!["x"]).unwrap_err();
    assert_eq!(err, TemplateError::MissingNamedArgument("x".into()));
}

#[test]
fn missing_positional_reports_index() {
    let err = bind(tokens("{}{@L}{foo@L}"), &args![Fragment::sql("a"); "foo" => "bar"])
        .unwrap_err();
    assert_eq!(
        err,
        TemplateError::MissingPositionalArgument {
            index: 1,
            supplied: 1
        }
    );
    assert!(err.is_missing_argument());
}

#[test]
fn qualified_is_nested_not_flattened() {
    let got = bind(tokens("x{@Q}y"), &args!["s.t"]).unwrap();
    assert_eq!(got.len(), 3);
    assert_eq!(got.parts()[1], Fragment::Composed(Composed::qualified("s.t")));
}

#[test]
fn placeholder_format_accepts_null_and_empty_as_anonymous() {
    let got = bind(tokens("{@P}{@P}"), &args![Value::Null, ""]).unwrap();
    assert_eq!(
        got.parts(),
        &[
            Fragment::anonymous_placeholder(),
            Fragment::anonymous_placeholder()
        ]
    );
}

#[test]
fn passthrough_rejects_plain_values() {
    let err = bind(tokens("{}"), &args!["text"]).unwrap_err();
    assert_eq!(
        err,
        TemplateError::NotAFragment {
            placeholder: "#0".into()
        }
    );
    assert!(err.is_type_error());
}

#[test]
fn text_formats_reject_other_values() {
    let err = bind(tokens("{n@I}"), &args![; "n" => 5]).unwrap_err();
    assert_eq!(
        err,
        TemplateError::TypeMismatch {
            placeholder: "n".into(),
            format: 'I',
            expected: "text",
            found: "int",
        }
    );

    let err = bind(tokens("{@Q}"), &args![Fragment::sql("a.b")]).unwrap_err();
    assert!(matches!(
        err,
        TemplateError::TypeMismatch {
            format: 'Q',
            found: "sql",
            ..
        }
    ));
}

#[test]
fn literal_format_rejects_fragments() {
    let err = bind(tokens("{@L}"), &args![Fragment::identifier("x")]).unwrap_err();
    assert!(matches!(
        err,
        TemplateError::TypeMismatch {
            format: 'L',
            expected: "a plain value",
            found: "identifier",
            ..
        }
    ));
}

#[test]
fn placeholder_format_rejects_numbers() {
    let err = bind(tokens("{@P}"), &args![1]).unwrap_err();
    assert!(matches!(err, TemplateError::TypeMismatch { format: 'P', .. }));
}

#[test]
fn first_missing_argument_aborts() {
    let err = bind(tokens("{a}{b}"), &Args::new()).unwrap_err();
    assert_eq!(err, TemplateError::MissingNamedArgument("a".into()));
}

#[test]
fn missing_argument_outranks_earlier_type_error() {
    let err = bind(tokens("{@P}{x}"), &args![1]).unwrap_err();
    assert_eq!(err, TemplateError::MissingNamedArgument("x".into()));
}

#[test]
fn first_type_error_is_reported() {
    let err = bind(tokens("{@I}{@S}"), &args![1, true]).unwrap_err();
    assert!(matches!(
        err,
        TemplateError::TypeMismatch {
            format: 'I',
            found: "int",
            ..
        }
    ));
}

// ==================== Template ====================

#[test]
fn template_exposes_parse_results() {
    let t = Template::new("{a@I} {} {@L} {a@L} {b}");
    assert_eq!(t.marker(), '@');
    assert_eq!(t.source(), "{a@I} {} {@L} {a@L} {b}");
    assert_eq!(t.positional_count(), 2);
    assert_eq!(t.names(), vec!["a", "b"]);
    assert_eq!(t.tokens().count(), 9);
}

#[test]
fn template_with_config_validates_marker() {
    let cfg = crate::TemplateConfig::new().with_marker('#');
    let t = Template::with_config("{x#I}", &cfg).unwrap();
    let q = t.format(&args![; "x" => "col"]).unwrap();
    assert_eq!(q.parts(), &[Fragment::identifier("col")]);

    let bad = crate::TemplateConfig::new().with_marker('{');
    assert!(Template::with_config("{x}", &bad).is_err());
}

#[test]
fn template_from_str() {
    let t: Template = "{@I}".parse().unwrap();
    assert_eq!(t, Template::from("{@I}"));
}

#[test]
fn arg_kinds_in_errors() {
    assert_eq!(Arg::from(Fragment::sql("x")).kind(), "sql");
    assert_eq!(Arg::from(1.5).kind(), "float");
}
