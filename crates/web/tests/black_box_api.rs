use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

use baseshop_commanding::{
    Command, CommandResult, CommandReturnType, CommandService, CommandServiceResult,
};
use baseshop_container::{ContainerExt, ObjectContainer};
use baseshop_web::app::{build_app_with, dto::ProjectCreatedResponse, services};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(container: ObjectContainer) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = build_app_with(container);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Accepts every command and remembers the target aggregate ids.
#[derive(Default)]
struct RecordingCommandService {
    sent: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl CommandService for RecordingCommandService {
    fn send(&self, command: Arc<dyn Command>) -> CommandServiceResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push(command.aggregate_root_id().to_string());
        Ok(())
    }

    async fn send_async(&self, command: Arc<dyn Command>) -> CommandServiceResult<()> {
        self.send(command)
    }

    async fn execute_with(
        &self,
        command: Arc<dyn Command>,
        _return_type: CommandReturnType,
    ) -> CommandServiceResult<CommandResult> {
        self.send(command.clone())?;
        Ok(CommandResult::success(command.as_ref()))
    }
}

baseshop_container::implements!(RecordingCommandService => dyn CommandService);

#[tokio::test]
async fn health_is_ok() {
    let server = TestServer::spawn(services::build_container().unwrap()).await;

    let res = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_project_requires_a_name() {
    let server = TestServer::spawn(services::build_container().unwrap()).await;
    let client = reqwest::Client::new();

    for body in [json!({}), json!({ "name": null }), json!({ "name": "   " })] {
        let res = client
            .post(server.url("/Projects"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let err: serde_json::Value = res.json().await.unwrap();
        assert_eq!(err["error"], "validation_error");
    }
}

#[tokio::test]
async fn default_wiring_reports_not_implemented() {
    let server = TestServer::spawn(services::build_container().unwrap()).await;

    let res = reqwest::Client::new()
        .post(server.url("/Projects"))
        .json(&json!({ "Name": "Storefront" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);

    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "not_implemented");
}

#[tokio::test]
async fn configured_command_service_accepts_the_project() {
    let recorder = RecordingCommandService::default();
    let sent = recorder.sent.clone();
    let container = services::build_container_with(|c| {
        c.register_instance::<dyn CommandService, RecordingCommandService>(recorder, None)
    })
    .unwrap();
    let server = TestServer::spawn(container).await;

    let res = reqwest::Client::new()
        .post(server.url("/Projects"))
        .json(&json!({ "name": " Storefront " }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let created: ProjectCreatedResponse = res.json().await.unwrap();
    assert_eq!(created.name, "Storefront");
    assert_eq!(*sent.lock().unwrap(), vec![created.id]);
}

#[tokio::test]
async fn uninitialized_container_is_a_server_error() {
    let server = TestServer::spawn(ObjectContainer::new()).await;

    let res = reqwest::Client::new()
        .post(server.url("/Projects"))
        .json(&json!({ "name": "Storefront" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "container_error");
}
