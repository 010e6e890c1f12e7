use spindle::http::response::{Response, ResponseBuilder, Status};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(Status::Ok.as_u16(), 200);
    assert_eq!(Status::BadRequest.as_u16(), 400);
    assert_eq!(Status::NotFound.as_u16(), 404);
    assert_eq!(Status::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(Status::Ok.reason_phrase(), "OK");
    assert_eq!(Status::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(Status::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        Status::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(Status::Ok)
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.status, Status::Ok);
    assert_eq!(&response.body[..], b"Hello, World!");
}

#[test]
fn test_response_builder_auto_content_length() {
    let response = ResponseBuilder::new(Status::Ok)
        .body(b"This is the body".to_vec())
        .build();

    assert_eq!(response.header("Content-Length"), Some("16"));
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(Status::Ok)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.header("Content-Length"), Some("999"));
}

#[test]
fn test_response_builder_keeps_header_order() {
    let response = ResponseBuilder::new(Status::Ok)
        .header("Content-Type", "text/html")
        .header("X-Custom", "value")
        .body(b"x".to_vec())
        .build();

    let names: Vec<&str> = response.headers.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["Content-Type", "X-Custom", "Content-Length"]);
}

#[test]
fn test_html_helper_sets_content_type() {
    let response = Response::html(Status::Ok, "<p>hi</p>");

    assert_eq!(response.header("Content-Type"), Some("text/html"));
}

#[test]
fn test_error_page_names_the_status() {
    let response = Response::error_page(Status::NotFound);
    let body = String::from_utf8(response.body.to_vec()).unwrap();

    assert_eq!(response.status, Status::NotFound);
    assert_eq!(response.header("Content-Type"), Some("text/html"));
    assert!(body.contains("404 Not Found"));
}

#[test]
fn test_error_page_each_status() {
    for status in [
        Status::BadRequest,
        Status::NotFound,
        Status::InternalServerError,
    ] {
        let response = Response::error_page(status);
        let body = String::from_utf8(response.body.to_vec()).unwrap();
        assert!(body.contains(status.reason_phrase()));
    }
}
