//! Common test utilities for integration tests.
//!
//! Shared client construction and mock setup for the Natter flows. Tests
//! talk to a wiremock server on 127.0.0.1, which counts as a secure origin
//! for the `Secure` `csrfToken` cookie.

#[allow(unused_imports)]
pub use natter_client::{
    ClientError, Cookie, CookieStore, LoginForm, LoginOutcome, MemoryCookieStore, NatterClient,
    SpaceForm, SpaceOutcome, submit_create_space, submit_login,
};
#[allow(unused_imports)]
pub use serde_json::json;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use wiremock::matchers::{method, path};

/// Session cookie the mock server hands out on login.
#[allow(dead_code)]
pub const SESSION_COOKIE: &str = "JSESSIONID=node0mock;Path=/;Secure;HttpOnly";

/// A client pointed at `server` with an in-memory cookie store.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> NatterClient {
    NatterClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

/// A client that already holds a session cookie and the given token.
#[allow(dead_code)]
pub fn logged_in_client(server: &MockServer, token: &str) -> NatterClient {
    let mut store = MemoryCookieStore::new();
    store.set(Cookie {
        http_only: true,
        secure: true,
        path: Some("/".to_string()),
        ..Cookie::new("JSESSIONID", "node0mock")
    });
    store.set(Cookie::csrf_token(token));

    NatterClient::builder()
        .base_url(server.uri())
        .cookie_store(Box::new(store))
        .build()
        .expect("client should build")
}

/// Mount a successful `POST /sessions` returning `token`.
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("Set-Cookie", SESSION_COOKIE)
                .set_body_json(json!({ "token": token })),
        )
        .mount(server)
        .await;
}

/// Events recorded by [`capture_logs`], one line per event:
/// `LEVEL message key=value ...`.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CapturedLogs {
    events: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
    next_id: std::sync::Arc<std::sync::atomic::AtomicU64>,
}

#[allow(dead_code)]
impl CapturedLogs {
    pub fn lines(&self) -> Vec<String> {
        self.events.lock().expect("lock poisoned").clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

struct EventVisitor {
    message: String,
    fields: Vec<String>,
}

impl tracing::field::Visit for EventVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

impl tracing::Subscriber for CapturedLogs {
    fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _attrs: &tracing::span::Attributes<'_>) -> tracing::span::Id {
        let id = self
            .next_id
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        tracing::span::Id::from_u64(id + 1)
    }

    fn record(&self, _span: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

    fn record_follows_from(&self, _span: &tracing::span::Id, _follows: &tracing::span::Id) {}

    fn event(&self, event: &tracing::Event<'_>) {
        let mut visitor = EventVisitor {
            message: String::new(),
            fields: Vec::new(),
        };
        event.record(&mut visitor);

        let mut line = format!("{} {}", event.metadata().level(), visitor.message);
        for field in visitor.fields {
            line.push(' ');
            line.push_str(&field);
        }
        self.events.lock().expect("lock poisoned").push(line);
    }

    fn enter(&self, _span: &tracing::span::Id) {}

    fn exit(&self, _span: &tracing::span::Id) {}

    fn register_callsite(
        &self,
        _metadata: &'static tracing::Metadata<'static>,
    ) -> tracing::subscriber::Interest {
        tracing::subscriber::Interest::always()
    }
}

/// Route events on the current thread into a fresh [`CapturedLogs`] until the
/// guard is dropped. `#[tokio::test]` runs on one thread, so the whole test
/// body is covered.
#[allow(dead_code)]
pub fn capture_logs() -> (CapturedLogs, tracing::dispatcher::DefaultGuard) {
    let logs = CapturedLogs::default();
    let guard = tracing::dispatcher::set_default(&tracing::Dispatch::new(logs.clone()));
    (logs, guard)
}
