use super::*;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn resident_path_formats_id() {
    assert_eq!(resident_path(42), "/residents/42");
}

#[test]
fn appointments_path_adds_resident_filter() {
    assert_eq!(appointments_path(None), "/appointments");
    assert_eq!(appointments_path(Some(7)), "/appointments?resident_id=7");
}

#[test]
fn prescriptions_path_adds_resident_filter() {
    assert_eq!(prescriptions_path(None), "/medications");
    assert_eq!(prescriptions_path(Some(3)), "/medications?resident_id=3");
    assert_eq!(prescription_path(9), "/medications/9");
}

#[test]
fn verify_email_path_trims_token() {
    assert_eq!(verify_email_path(" abc.def "), "/auth/verify-email/abc.def");
}

#[test]
fn user_and_appointment_paths_format_id() {
    assert_eq!(user_path(5), "/users/5");
    assert_eq!(appointment_path(11), "/appointments/11");
}

// =============================================================
// Error detail
// =============================================================

#[test]
fn parse_detail_reads_string_detail() {
    assert_eq!(
        parse_detail(r#"{"detail":"Nom d'utilisateur déjà pris"}"#),
        Some("Nom d'utilisateur déjà pris".to_owned())
    );
}

#[test]
fn parse_detail_ignores_validation_arrays() {
    assert_eq!(parse_detail(r#"{"detail":[{"loc":["body","date"],"msg":"field required"}]}"#), None);
}

#[test]
fn parse_detail_ignores_non_json_and_blank() {
    assert_eq!(parse_detail("Internal Server Error"), None);
    assert_eq!(parse_detail(r#"{"detail":"   "}"#), None);
    assert_eq!(parse_detail(r#"{"message":"ok"}"#), None);
}

#[test]
fn user_message_prefers_server_detail() {
    let err = ApiError::Status { status: 400, detail: Some("Identifiants incorrects".to_owned()) };
    assert_eq!(err.user_message("Erreur"), "Identifiants incorrects");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn user_message_falls_back_without_detail() {
    let err = ApiError::Status { status: 500, detail: None };
    assert_eq!(err.user_message("Erreur lors de l'ajout"), "Erreur lors de l'ajout");
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.user_message("Erreur réseau"), "Erreur réseau");
    assert_eq!(err.status(), None);
}

#[test]
fn status_error_display_includes_detail() {
    let err = ApiError::Status { status: 404, detail: Some("Résident non trouvé".to_owned()) };
    assert_eq!(err.to_string(), "HTTP 404: Résident non trouvé");
    let err = ApiError::Status { status: 502, detail: None };
    assert_eq!(err.to_string(), "HTTP 502: request failed");
}

// =============================================================
// Non-browser transport
// =============================================================

#[test]
fn transport_is_unavailable_outside_browser() {
    let result = block_on_ready(fetch_residents());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Minimal executor for futures that complete on first poll.
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future did not complete immediately"),
    }
}
