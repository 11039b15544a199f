use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum SampleError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, SampleError> {
    Ok(raw.parse::<u32>()?)
}

#[test]
fn source_errors_convert_with_question_mark() {
    let err = parse("abc").expect_err("not a number");
    assert!(matches!(err, SampleError::Parse { context: None, .. }));
}

#[test]
fn context_is_attached_to_source_results() {
    let err = "abc".parse::<u32>().context("reading port").expect_err("not a number");
    assert!(err.to_string().starts_with("Parse error (reading port):"), "got: {err}");
}

#[test]
fn context_is_attached_to_own_results() {
    let result: Result<(), SampleError> =
        Err(SampleError::Validation { message: "empty".into(), context: None });
    let err = result.context("checking form").expect_err("still an error");
    assert_eq!(err.to_string(), "Validation error (checking form): empty");
}

#[test]
fn messages_convert_into_internal_variant() {
    let err: SampleError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");

    let err: SampleError = format!("code {}", 7).into();
    assert!(matches!(err, SampleError::Internal { .. }));
}
