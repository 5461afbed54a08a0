use std::{num::NonZeroUsize, time::Duration};

use folio::{
    contact::{ContactForm, ContactMessage, FormRelay},
    error::Error,
    state::Submissions,
    ui::{ActiveTab, FormStatus, ThemeMode, ViewState},
};
use reqwest::{StatusCode, Url};
use wiremock::{
    matchers::{body_string_contains, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn message() -> ContactMessage {
    ContactMessage {
        name: "John Doe".into(),
        email: "john@example.com".into(),
        message: "Hello Kedarnath, I'm interested in...".into(),
    }
}

fn relay(uri: &str) -> FormRelay {
    FormRelay::new(
        Url::parse(&format!("{uri}/submit")).unwrap(),
        "secret".into(),
        None,
    )
    .unwrap()
}

#[tokio::test]
async fn relay_sends_one_multipart_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .and(body_string_contains("name=\"name\""))
        .and(body_string_contains("John Doe"))
        .and(body_string_contains("name=\"email\""))
        .and(body_string_contains("name=\"message\""))
        .and(body_string_contains("name=\"access_key\""))
        .and(body_string_contains("secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"success\": true}"))
        .expect(1)
        .mount(&server)
        .await;

    relay(&server.uri()).deliver(&message()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0].headers.get("content-type").unwrap();
    assert!(content_type
        .to_str()
        .unwrap()
        .starts_with("multipart/form-data"));
}

#[tokio::test]
async fn relay_any_2xx_is_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202).set_body_string("not json"))
        .mount(&server)
        .await;

    assert!(relay(&server.uri()).deliver(&message()).await.is_ok());
}

#[tokio::test]
async fn relay_error_status_no_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    match relay(&server.uri()).deliver(&message()).await {
        Err(Error::RelayStatus(status)) => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn relay_transport_failure() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let result = relay(&format!("http://127.0.0.1:{port}"))
        .deliver(&message())
        .await;
    assert!(matches!(result, Err(Error::Relay(_))));
}

#[tokio::test(start_paused = true)]
async fn submission_lifecycle() {
    let subs = Submissions::new(NonZeroUsize::new(2).unwrap(), Duration::from_secs(3));

    let ok = subs.begin(message()).await;
    let ko = subs.begin(message()).await;
    assert_eq!(subs.get(ok).await.status, FormStatus::Sending);

    subs.finish(ok, Ok(())).await;
    subs.finish(ko, Err(Error::RelayStatus(StatusCode::INTERNAL_SERVER_ERROR)))
        .await;
    assert_eq!(subs.get(ok).await.status, FormStatus::Success);
    assert_eq!(subs.get(ko).await.status, FormStatus::Error);
    assert_eq!(subs.pending_resets().await, 2);

    tokio::time::sleep(Duration::from_millis(3010)).await;
    assert_eq!(subs.get(ok).await.status, FormStatus::Idle);
    assert_eq!(subs.get(ok).await.draft, None);
    assert_eq!(subs.get(ko).await.status, FormStatus::Idle);
    assert_eq!(subs.get(ko).await.draft, Some(message()));
    assert_eq!(subs.pending_resets().await, 0);
}

#[test]
fn form_keeps_view() {
    let form = ContactForm::parse(
        b"name=Jane&email=jane%40example.com&message=Hi&theme=light&tab=databases",
    )
    .unwrap();
    assert_eq!(
        form.view,
        ViewState {
            theme: ThemeMode::Light,
            tab: ActiveTab::Databases,
        }
    );
    assert_eq!(form.view.with_theme_toggled().theme, ThemeMode::Dark);
}
