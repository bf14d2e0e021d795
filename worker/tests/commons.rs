use push_contact_reconciler::push_contact_api_token_getter::StaticPushContactApiTokenGetter;
use push_contact_reconciler::sent_messages_handler::SentMessagesHandler;
use push_contact_reconciler::settings::ReconcilerSettings;
use push_contact_reconciler_worker::routes::Routes;
use push_contact_reconciler_worker::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PUSH_CONTACT_API_TOKEN: &str = "push-contact-api-token";

#[allow(dead_code)]
pub struct TestContext {
    pub mock_server: MockServer,
    pub worker_uri: String,
    pub client: reqwest::Client,
}

impl AsyncTestContext for TestContext {
    async fn setup() -> Self {
        let mock_server = MockServer::start().await;

        let settings = ReconcilerSettings::new(&mock_server.uri()).with_fatal_messaging_error_codes(["UNREGISTERED"]);
        let token_getter = Arc::new(StaticPushContactApiTokenGetter::new(PUSH_CONTACT_API_TOKEN));
        let handler = SentMessagesHandler::with_http_client(settings, token_getter).unwrap();

        let routes = Routes::routes(&AppState::new(handler));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await.unwrap();
        let worker_uri = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            let _ = axum::serve(listener, routes).await;
        });

        Self {
            mock_server,
            worker_uri,
            client: reqwest::Client::new(),
        }
    }
}

pub struct PushContactApiMock;

#[allow(dead_code)]
impl PushContactApiMock {
    pub async fn mock_delete(ctx: &TestContext) {
        Mock::given(method("DELETE"))
            .and(path("/PushContact"))
            .and(header("Authorization", format!("Bearer {PUSH_CONTACT_API_TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(200))
            .mount(&ctx.mock_server)
            .await;
    }

    /// Deletions run in the background, so wait for them to reach the registry.
    pub async fn wait_for_requests(
        ctx: &TestContext,
        expected: usize,
    ) -> Vec<wiremock::Request> {
        for _ in 0..50 {
            let requests = ctx.mock_server.received_requests().await.unwrap_or_default();
            if requests.len() >= expected {
                return requests;
            }

            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        ctx.mock_server.received_requests().await.unwrap_or_default()
    }
}
