use reqwest::Client;
use serde_json::json;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use tokio::time::sleep;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(base_url).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(api_endpoint: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_yt_dashboard"))
        .env("PORT", port.to_string())
        .env("API_ENDPOINT", api_endpoint)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

fn envelope(inner: serde_json::Value) -> String {
    json!({ "statusCode": 200, "body": inner.to_string() }).to_string()
}

async fn mount_endpoint(server: &MockServer, endpoint: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{endpoint}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn http_index_renders_all_sections() {
    let upstream = MockServer::start().await;
    mount_endpoint(
        &upstream,
        "channels",
        envelope(json!({ "data": [
            { "channel_id": "abc", "title": "Channel A", "char_tags": ["vtuber"] }
        ] })),
    )
    .await;
    mount_endpoint(
        &upstream,
        "videos",
        envelope(json!({ "data": [
            { "video_id": "v42", "title": "First Stream", "channel_title": "Channel A", "char_tags": ["debut"] }
        ] })),
    )
    .await;
    mount_endpoint(
        &upstream,
        "stats",
        envelope(json!({ "data": [
            { "video_id": "v42", "video_title": "First Stream", "total_views": 1234567, "views_last_30_days": 890 }
        ] })),
    )
    .await;

    let server = spawn_server(&upstream.uri()).await;
    let body = Client::new()
        .get(&server.base_url)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("https://www.youtube.com/channel/abc"));
    assert!(body.contains("Channel A"));
    assert!(body.contains("https://www.youtube.com/watch?v=v42"));
    assert!(body.contains("Tags: debut"));
    assert!(body.contains("Total views: 1,234,567"));
    assert!(body.contains("Views (last 30 days): 890"));
}

#[tokio::test]
async fn http_failed_endpoint_degrades_to_empty_section() {
    let upstream = MockServer::start().await;
    mount_endpoint(
        &upstream,
        "channels",
        envelope(json!({ "data": [
            { "channel_id": "abc", "title": "Channel A", "char_tags": [] }
        ] })),
    )
    .await;
    mount_endpoint(
        &upstream,
        "videos",
        envelope(json!({ "data": [] })),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;

    let server = spawn_server(&upstream.uri()).await;
    let response = Client::new().get(&server.base_url).send().await.unwrap();
    assert!(response.status().is_success());

    let body = response.text().await.unwrap();
    assert!(body.contains("https://www.youtube.com/channel/abc"));
    assert!(body.contains("id=\"stats-list\""));
    assert!(!body.contains("Total views:"));
}
