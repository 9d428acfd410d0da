use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{Method, Request};
use paramex::uuid::Uuid;
use paramex::{
    bind_from_form, bind_from_headers, bind_from_query, param_record, BindError, ErrorKind,
    ExtractError, Extractor, ExtractorConfig, FormError, ParamExtractor,
};
use std::collections::HashMap;

// --- Test Records ---

param_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    struct HeaderParams {
        name: String => "name",
        age: i64 => "age",
        height: f64 => "height",
        married: bool => "married",
    }
}

param_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    struct FormParams {
        name: String => "name",
        age: isize => "age",
        height: f64 => "height",
        married: bool => "married",
    }
}

param_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    struct QueryParams {
        name: String => "name",
        age: i32 => "age",
        height: f32 => "height",
        married: bool => "married",
    }
}

param_record! {
    #[derive(Debug, Default)]
    struct EmptyTag {
        name: String => "-",
        age: i32 => "",
        height: f32 => "test",
    }
}

param_record! {
    #[derive(Debug, Default)]
    struct ArrayParams {
        values: Vec<String> => "strArray",
    }
}

param_record! {
    #[derive(Debug, Default)]
    struct BoolError { name: bool => "name" }
}

param_record! {
    #[derive(Debug, Default)]
    struct I32Error { name: i32 => "name" }
}

param_record! {
    #[derive(Debug, Default)]
    struct IntError { name: isize => "name" }
}

param_record! {
    #[derive(Debug, Default)]
    struct I64Error { name: i64 => "name" }
}

param_record! {
    #[derive(Debug, Default)]
    struct F32Error { name: f32 => "name" }
}

param_record! {
    #[derive(Debug, Default)]
    struct F64Error { name: f64 => "name" }
}

param_record! {
    #[derive(Debug, Default)]
    struct UuidError { name: Uuid => "name" }
}

param_record! {
    #[derive(Debug, Default)]
    struct MapParams { name: HashMap<String, String> => "name" }
}

/// A request carrying the same four keys in its headers, query string and form body.
fn make_request() -> Request<Vec<u8>> {
    let body = "name=form_name&age=50&height=1.72&married=true&strArray=str1&strArray=str2&strArray=1";
    Request::builder()
        .method(Method::POST)
        .uri("https://example.com/?name=query_name&age=20&height=1.78&married=false")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(CONTENT_LENGTH, body.len())
        .header("name", "header_name")
        .header("age", "40")
        .header("height", "1.74")
        .header("married", "true")
        .body(body.as_bytes().to_vec())
        .expect("valid request")
}

#[test]
fn test_extract_every_source() {
    let mut req = make_request();
    let extractor = ParamExtractor::new();

    let mut headers = HeaderParams::default();
    extractor.extract_headers(&mut headers, &req).unwrap();
    assert_eq!(
        headers,
        HeaderParams {
            name: "header_name".into(),
            age: 40,
            height: 1.74,
            married: true,
        }
    );

    let mut forms = FormParams::default();
    extractor.extract_forms(&mut forms, &mut req).unwrap();
    assert_eq!(
        forms,
        FormParams {
            name: "form_name".into(),
            age: 50,
            height: 1.72,
            married: true,
        }
    );

    let mut queries = QueryParams::default();
    extractor.extract_queries(&mut queries, &req).unwrap();
    assert_eq!(
        queries,
        QueryParams {
            name: "query_name".into(),
            age: 20,
            height: 1.78,
            married: false,
        }
    );
}

/// A request where the `-` key and `test` carry a coercible value in every source,
/// and the empty key in every source that can hold it (not headers).
fn empty_tag_request() -> Request<Vec<u8>> {
    Request::builder()
        .method(Method::POST)
        .uri("https://example.com/?-=1&=1&test=1.5")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header("-", "1")
        .header("test", "2.5")
        .body(b"-=1&=1&test=3.5".to_vec())
        .expect("valid request")
}

#[test]
fn test_empty_field_tags_are_never_bound() {
    let mut req = empty_tag_request();

    let mut from_headers = EmptyTag::default();
    bind_from_headers(&mut from_headers, &req).unwrap();
    assert_eq!(from_headers.name, "");
    assert_eq!(from_headers.age, 0);
    assert_eq!(from_headers.height, 2.5);

    let mut from_query = EmptyTag::default();
    bind_from_query(&mut from_query, &req).unwrap();
    assert_eq!(from_query.name, "");
    assert_eq!(from_query.age, 0);
    assert_eq!(from_query.height, 1.5);

    let mut from_form = EmptyTag::default();
    bind_from_form(&mut from_form, &mut req).unwrap();
    assert_eq!(from_form.name, "");
    assert_eq!(from_form.age, 0);
    assert_eq!(from_form.height, 3.5);
}

#[test]
fn test_missing_keys_leave_prior_values() {
    let req = Request::builder()
        .uri("https://example.com/")
        .body(())
        .unwrap();

    let mut headers = HeaderParams {
        name: "kept".into(),
        age: 3,
        ..Default::default()
    };
    bind_from_headers(&mut headers, &req).unwrap();
    bind_from_headers(&mut headers, &req).unwrap();
    assert_eq!(headers.name, "kept");
    assert_eq!(headers.age, 3);

    let mut queries = QueryParams::default();
    bind_from_query(&mut queries, &req).unwrap();
    assert_eq!(queries, QueryParams::default());

    let mut req = Request::builder()
        .method(Method::POST)
        .uri("https://example.com/?page=2")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(b"other=1".to_vec())
        .unwrap();
    let mut forms = FormParams {
        name: "kept".into(),
        height: 1.5,
        ..Default::default()
    };
    bind_from_form(&mut forms, &mut req).unwrap();
    assert_eq!(forms.name, "kept");
    assert_eq!(forms.age, 0);
    assert_eq!(forms.height, 1.5);
    assert!(!forms.married);
}

#[test]
fn test_invalid_query_pairs_are_skipped() {
    let mut headers = HeaderParams {
        age: 7,
        ..Default::default()
    };

    let req = Request::builder().uri("/?age=1;x=2").body(()).unwrap();
    bind_from_query(&mut headers, &req).unwrap();
    assert_eq!(headers.age, 7);

    let req = Request::builder()
        .uri("/?name=a%zz&age=%zz&married=true")
        .body(())
        .unwrap();
    bind_from_query(&mut headers, &req).unwrap();
    assert_eq!(headers.name, "");
    assert_eq!(headers.age, 7);
    assert!(headers.married);
}

#[test]
fn test_text_arrays_from_form_and_query() {
    let mut req = make_request();

    let mut from_form = ArrayParams::default();
    bind_from_form(&mut from_form, &mut req).unwrap();
    assert_eq!(from_form.values, vec!["str1", "str2", "1"]);

    let req = Request::builder()
        .uri("/?strArray=b&strArray=a")
        .body(())
        .unwrap();
    let mut from_query = ArrayParams::default();
    bind_from_query(&mut from_query, &req).unwrap();
    assert_eq!(from_query.values, vec!["b", "a"]);
}

#[test]
fn test_text_array_from_headers_is_unsupported() {
    let req = make_request();
    let mut params = ArrayParams::default();
    let err = bind_from_headers(&mut params, &req).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedParamType);
    assert!(params.values.is_empty());
}

#[test]
fn test_argument_errors() {
    let mut req = make_request();

    let header = HeaderParams::default();
    let err = bind_from_headers(header.clone(), &req).unwrap_err();
    assert!(matches!(err, BindError::NotAssignable { .. }));

    let mut i = 0i64;
    let err = bind_from_headers(&mut i, &req).unwrap_err();
    assert!(matches!(err, BindError::UnsupportedType { .. }));

    let err = bind_from_query(&header, &req).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotAssignable);

    let err = bind_from_form(header, &mut req).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Bind(BindError::NotAssignable { .. })
    ));
}

#[test]
fn test_unsupported_param_type() {
    let req = make_request();
    let mut obj = MapParams::default();
    let err = bind_from_headers(&mut obj, &req).unwrap_err();
    assert!(matches!(err, BindError::UnsupportedParamType { .. }));
}

#[test]
fn test_unmarshal_errors() {
    let req = make_request();

    fn message<R>(mut record: R, req: &Request<Vec<u8>>) -> String
    where
        for<'a> &'a mut R: paramex::Target<'a>,
    {
        let err = bind_from_headers(&mut record, req).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unmarshal);
        err.to_string()
    }

    assert_eq!(
        message(BoolError::default(), &req),
        "error unmarshalling [header_name] into [bool] due to invalid boolean token"
    );
    assert_eq!(
        message(I32Error::default(), &req),
        "error unmarshalling [header_name] into [i32] due to invalid digit found in string"
    );
    assert_eq!(
        message(IntError::default(), &req),
        "error unmarshalling [header_name] into [isize] due to invalid digit found in string"
    );
    assert_eq!(
        message(I64Error::default(), &req),
        "error unmarshalling [header_name] into [i64] due to invalid digit found in string"
    );
    assert_eq!(
        message(F32Error::default(), &req),
        "error unmarshalling [header_name] into [f32] due to invalid float literal"
    );
    assert_eq!(
        message(F64Error::default(), &req),
        "error unmarshalling [header_name] into [f64] due to invalid float literal"
    );
    assert_eq!(
        message(UuidError::default(), &req),
        "error unmarshalling [header_name] into [Uuid] due to invalid UUID length: 11"
    );
}

#[test]
fn test_non_numeric_age_keeps_name() {
    let mut req = make_request();
    req.headers_mut()
        .insert("age", "header_name".parse().unwrap());

    let mut headers = HeaderParams::default();
    let err = bind_from_headers(&mut headers, &req).unwrap_err();
    match err {
        BindError::Unmarshal { value, target, .. } => {
            assert_eq!(value, "header_name");
            assert_eq!(target, "i64");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(headers.name, "header_name");
    assert_eq!(headers.height, 0.0);
}

#[test]
fn test_form_parse_errors_are_returned_verbatim() {
    let mut req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(b"name=%zz".to_vec())
        .unwrap();

    let mut forms = FormParams::default();
    let err = bind_from_form(&mut forms, &mut req).unwrap_err();
    assert!(matches!(err, ExtractError::Form(FormError::InvalidEscape(_))));
    assert_eq!(err.to_string(), "invalid URL escape \"%zz\"");
    assert_eq!(forms, FormParams::default());
}

#[test]
fn test_form_body_limit_comes_from_config() {
    let mut req = make_request();
    let extractor = ParamExtractor::with_config(ExtractorConfig::default().with_max_form_bytes(8));
    assert_eq!(extractor.config().max_form_bytes, 8);

    let mut forms = FormParams::default();
    let err = extractor.extract_forms(&mut forms, &mut req).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Form(FormError::BodyTooLarge { limit: 8, .. })
    ));
}

#[test]
fn test_cached_form_is_checked_against_each_extractor_limit() {
    let mut req = make_request();

    let mut forms = FormParams::default();
    ParamExtractor::new()
        .extract_forms(&mut forms, &mut req)
        .unwrap();
    assert_eq!(forms.age, 50);

    let strict = ParamExtractor::with_config(ExtractorConfig::default().with_max_form_bytes(8));
    let mut again = FormParams::default();
    let err = strict.extract_forms(&mut again, &mut req).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Form(FormError::BodyTooLarge { limit: 8, .. })
    ));
    assert_eq!(again, FormParams::default());
}

#[test]
fn test_multipart_text_fields_bind() {
    let body = "--demo\r\n\
        Content-Disposition: form-data; name=\"name\"\r\n\r\n\
        form_name\r\n\
        --demo\r\n\
        Content-Disposition: form-data; name=\"age\"\r\n\r\n\
        50\r\n\
        --demo\r\n\
        Content-Disposition: form-data; name=\"strArray\"\r\n\r\n\
        str1\r\n\
        --demo\r\n\
        Content-Disposition: form-data; name=\"strArray\"\r\n\r\n\
        str2\r\n\
        --demo\r\n\
        Content-Disposition: form-data; name=\"height\"; filename=\"h.txt\"\r\n\r\n\
        oops\r\n\
        --demo--\r\n";
    let mut req = Request::builder()
        .method(Method::PUT)
        .uri("/?married=true")
        .header(CONTENT_TYPE, "multipart/form-data; boundary=demo")
        .body(body.as_bytes().to_vec())
        .unwrap();

    let mut forms = FormParams::default();
    bind_from_form(&mut forms, &mut req).unwrap();
    assert_eq!(forms.name, "form_name");
    assert_eq!(forms.age, 50);
    assert_eq!(forms.height, 0.0);
    assert!(forms.married);

    let mut arrays = ArrayParams::default();
    bind_from_form(&mut arrays, &mut req).unwrap();
    assert_eq!(arrays.values, vec!["str1", "str2"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_binds_into_distinct_records() {
    let mut handles = Vec::new();
    for i in 0..32i64 {
        handles.push(tokio::spawn(async move {
            let mut req = Request::builder()
                .method(Method::POST)
                .uri(format!("/?age={i}"))
                .header("name", format!("worker_{i}"))
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(format!("height={i}.5").into_bytes())
                .unwrap();

            let mut headers = HeaderParams::default();
            bind_from_headers(&mut headers, &req).unwrap();
            let mut queries = QueryParams::default();
            bind_from_query(&mut queries, &req).unwrap();
            let mut forms = FormParams::default();
            bind_from_form(&mut forms, &mut req).unwrap();
            (i, headers, queries, forms)
        }));
    }

    for handle in handles {
        let (i, headers, queries, forms) = handle.await.unwrap();
        assert_eq!(headers.name, format!("worker_{i}"));
        assert_eq!(i64::from(queries.age), i);
        assert_eq!(forms.age, i as isize);
        assert_eq!(forms.height, i as f64 + 0.5);
    }
}
