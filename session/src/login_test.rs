use futures::executor::block_on;

use super::*;
use crate::api::Reply;
use crate::mock::{Call, MockApi};

fn creds() -> Credentials {
    Credentials { email: "alice@example.com".to_owned(), password: "p@ss word&1".to_owned() }
}

// =============================================================
// Form body
// =============================================================

#[test]
fn form_body_maps_email_to_username_and_encodes_values() {
    assert_eq!(creds().form_body(), "username=alice%40example.com&password=p%40ss%20word%261");
}

#[test]
fn debug_output_redacts_password() {
    let rendered = format!("{:?}", creds());
    assert!(rendered.contains("alice@example.com"));
    assert!(!rendered.contains("p@ss"));
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_success_returns_ok_and_posts_form() {
    let api = MockApi::replying(200, r#"{"message":"Login successful"}"#);
    assert_eq!(block_on(submit(&api, &creds())), Ok(()));
    assert_eq!(
        api.calls(),
        vec![Call::Login { form_body: "username=alice%40example.com&password=p%40ss%20word%261".to_owned() }]
    );
}

#[test]
fn submit_401_surfaces_server_detail() {
    let api = MockApi::replying(401, r#"{"detail":"Invalid credentials"}"#);
    let err = block_on(submit(&api, &creds())).expect_err("should be rejected");
    assert_eq!(err, LoginError::Rejected { status: 401, detail: Some("Invalid credentials".to_owned()) });
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn submit_non_json_body_falls_back_to_generic_message() {
    let api = MockApi::replying(502, "<html>Bad Gateway</html>");
    let err = block_on(submit(&api, &creds())).expect_err("should be rejected");
    assert_eq!(err.user_message(), "Login failed");
}

#[test]
fn submit_json_without_detail_falls_back_to_generic_message() {
    let api = MockApi::replying(400, r#"{"error":"bad"}"#);
    let err = block_on(submit(&api, &creds())).expect_err("should be rejected");
    assert_eq!(err.user_message(), "Login failed");
}

#[test]
fn submit_validation_array_detail_falls_back_to_generic_message() {
    let api = MockApi::replying(422, r#"{"detail":[{"loc":["body","username"],"msg":"field required"}]}"#);
    let err = block_on(submit(&api, &creds())).expect_err("should be rejected");
    assert_eq!(err.user_message(), "Login failed");
}

#[test]
fn submit_empty_detail_falls_back_to_generic_message() {
    let api = MockApi::replying(401, r#"{"detail":""}"#);
    let err = block_on(submit(&api, &creds())).expect_err("should be rejected");
    assert_eq!(err.user_message(), "Login failed");
}

#[test]
fn submit_transport_failure_uses_retry_message() {
    let api = MockApi::unreachable();
    let err = block_on(submit(&api, &creds())).expect_err("should fail");
    assert!(matches!(err, LoginError::Transport(_)));
    assert_eq!(err.user_message(), "An error occurred. Please try again.");
}

// =============================================================
// LoginForm state machine
// =============================================================

#[test]
fn begin_requires_both_fields() {
    let mut form = LoginForm::default();
    assert_eq!(form.begin("", "secret"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(form.begin("a@b.com", ""), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(form.phase, LoginPhase::Idle);
}

#[test]
fn begin_enters_submitting_and_returns_credentials() {
    let mut form = LoginForm::default();
    let credentials = form.begin("a@b.com", "secret").expect("valid").expect("not in flight");
    assert_eq!(credentials.email, "a@b.com");
    assert!(form.is_submitting());
}

#[test]
fn begin_while_submitting_is_ignored() {
    let mut form = LoginForm::default();
    form.begin("a@b.com", "secret").expect("valid");
    assert_eq!(form.begin("a@b.com", "secret"), Ok(None));
    assert!(form.is_submitting());
}

#[test]
fn failed_attempt_returns_to_idle_with_error() {
    let mut form = LoginForm::default();
    form.begin("a@b.com", "secret").expect("valid");
    let ok = form.finish(&Err(LoginError::Rejected { status: 401, detail: Some("Invalid credentials".to_owned()) }));
    assert!(!ok);
    assert_eq!(form.phase, LoginPhase::Idle);
    assert_eq!(form.error.as_deref(), Some("Invalid credentials"));
}

#[test]
fn resubmit_after_failure_clears_error_before_result() {
    let mut form = LoginForm::default();
    form.begin("a@b.com", "wrong").expect("valid");
    form.finish(&Err(LoginError::Rejected { status: 401, detail: None }));
    assert_eq!(form.error.as_deref(), Some("Login failed"));

    form.begin("a@b.com", "right").expect("valid");
    assert!(form.error.is_none());
    assert!(form.is_submitting());
}

#[test]
fn successful_attempt_has_no_error() {
    let api = MockApi::default();
    api.push(Ok(Reply::new(200, "")));
    let mut form = LoginForm::default();
    let credentials = form.begin("a@b.com", "secret").expect("valid").expect("not in flight");
    let result = block_on(submit(&api, &credentials));
    assert!(form.finish(&result));
    assert_eq!(form.phase, LoginPhase::Succeeded);
    assert!(form.error.is_none());
}

// =============================================================
// attempt: login outcome to gate transition
// =============================================================

fn started(form: &mut LoginForm) -> Credentials {
    form.begin("alice@example.com", "secret").expect("valid").expect("not in flight")
}

#[test]
fn attempt_success_emits_exactly_one_login_event() {
    let api = MockApi::replying(200, r#"{"message":"Login successful"}"#);
    let mut form = LoginForm::default();
    let credentials = started(&mut form);
    let events: Vec<_> = block_on(attempt(&api, &mut form, &credentials)).into_iter().collect();
    assert_eq!(events, vec![AuthEvent::LoggedIn { username: "alice@example.com".to_owned() }]);
    assert_eq!(api.calls().len(), 1);
    assert_eq!(form.phase, LoginPhase::Succeeded);
    assert!(form.error.is_none());
}

#[test]
fn attempt_rejected_emits_nothing_and_shows_detail() {
    let api = MockApi::replying(401, r#"{"detail":"Invalid credentials"}"#);
    let mut form = LoginForm::default();
    let credentials = started(&mut form);
    assert_eq!(block_on(attempt(&api, &mut form, &credentials)), None);
    assert_eq!(form.phase, LoginPhase::Idle);
    assert_eq!(form.error.as_deref(), Some("Invalid credentials"));
}

#[test]
fn attempt_non_json_rejection_emits_nothing() {
    let api = MockApi::replying(500, "Internal Server Error");
    let mut form = LoginForm::default();
    let credentials = started(&mut form);
    assert_eq!(block_on(attempt(&api, &mut form, &credentials)), None);
    assert_eq!(form.error.as_deref(), Some("Login failed"));
}

#[test]
fn attempt_transport_failure_emits_nothing() {
    let api = MockApi::unreachable();
    let mut form = LoginForm::default();
    let credentials = started(&mut form);
    assert_eq!(block_on(attempt(&api, &mut form, &credentials)), None);
    assert_eq!(form.error.as_deref(), Some("An error occurred. Please try again."));
}
