//! End-to-end tests: real router on an ephemeral port, driven over HTTP and WebSocket.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use hiroba_server::{config::ServerConfig, ui::Server};
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::oneshot};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{Error as WsError, Message},
};

type Client = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Helper struct to manage the in-process server lifecycle
struct TestServer {
    addr: std::net::SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server = Server::new(ServerConfig {
            port: addr.port(),
            ..ServerConfig::default()
        });
        tokio::spawn(async move {
            server
                .serve(listener, async {
                    let _ = shutdown_rx.await;
                })
                .await
                .unwrap();
        });
        Self {
            addr,
            shutdown: Some(shutdown_tx),
        }
    }

    fn http(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    fn ws(&self, room_id: &str, username: &str) -> String {
        format!("ws://{}/ws/{}/{}", self.addr, room_id, username)
    }

    async fn connect(&self, room_id: &str, username: &str) -> Client {
        let (client, _response) = connect_async(self.ws(room_id, username)).await.unwrap();
        client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

/// Next text frame, failing the test if none arrives in time.
async fn next_text(client: &mut Client) -> String {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(5), client.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("connection closed")
            .expect("websocket error");
        if let Message::Text(text) = frame {
            return text.as_str().to_owned();
        }
    }
}

#[tokio::test]
async fn test_room_http_endpoints() {
    // テスト項目: ルーム作成・存在確認・参加の HTTP API
    // given (前提条件):
    let server = TestServer::start().await;
    let http = reqwest::Client::new();

    // when (操作): lobby を 2 回作成
    let created = http
        .post(server.http("/create_room/?room_id=lobby"))
        .send()
        .await
        .unwrap();
    let duplicate = http
        .post(server.http("/create_room/?room_id=lobby"))
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(created.status(), 200);
    assert_eq!(
        created.json::<Value>().await.unwrap(),
        json!({"message": "Room created", "room_id": "lobby"})
    );
    assert_eq!(duplicate.status(), 409);
    assert_eq!(
        duplicate.json::<Value>().await.unwrap(),
        json!({"error": "Room already exists"})
    );

    let exists: Value = http
        .get(server.http("/api/check_room/lobby"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(exists, json!({"exists": true}));
    let ghost: Value = http
        .get(server.http("/api/check_room/ghost"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ghost, json!({"exists": false}));

    let joined = http
        .post(server.http("/join_room/?room_id=lobby"))
        .json(&json!({"username": "alice"}))
        .send()
        .await
        .unwrap();
    assert_eq!(joined.status(), 200);
    assert_eq!(
        joined.json::<Value>().await.unwrap(),
        json!({"message": "alice joined room lobby"})
    );

    let not_joined = http
        .post(server.http("/join_room/?room_id=ghost"))
        .json(&json!({"username": "alice"}))
        .send()
        .await
        .unwrap();
    assert_eq!(not_joined.status(), 404);
}

#[tokio::test]
async fn test_websocket_to_unknown_room_is_rejected() {
    // テスト項目: 存在しないルームへの WebSocket 接続はアップグレード前に 404 で拒否される
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let result = connect_async(server.ws("ghost", "alice")).await;

    // then (期待する結果):
    match result {
        Err(WsError::Http(response)) => assert_eq!(response.status(), 404),
        other => panic!("expected HTTP 404, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_chat_between_two_sessions() {
    // テスト項目: 2 つのセッション間で参加・発言・離脱が配送され、履歴に残る
    // given (前提条件):
    let server = TestServer::start().await;
    let http = reqwest::Client::new();
    http.post(server.http("/create_room/?room_id=lobby"))
        .send()
        .await
        .unwrap();

    let mut alice = server.connect("lobby", "alice").await;
    assert_eq!(next_text(&mut alice).await, "alice has joined the chat");
    let mut bob = server.connect("lobby", "bob").await;
    assert_eq!(next_text(&mut bob).await, "bob has joined the chat");
    assert_eq!(next_text(&mut alice).await, "bob has joined the chat");

    // when (操作): alice が発言し、bob が切断する
    alice.send(Message::text("hi")).await.unwrap();
    assert_eq!(next_text(&mut alice).await, "alice: hi");
    assert_eq!(next_text(&mut bob).await, "alice: hi");
    bob.close(None).await.unwrap();

    // then (期待する結果):
    assert_eq!(next_text(&mut alice).await, "bob has left the chat");

    let detail: Value = http
        .get(server.http("/api/rooms/lobby"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(detail["room_id"], "lobby");
    assert_eq!(detail["active_members"], 1);
    assert_eq!(
        detail["messages"],
        json!([
            "alice has joined the chat",
            "bob has joined the chat",
            "alice: hi",
            "bob has left the chat"
        ])
    );
}

#[tokio::test]
async fn test_health_check() {
    // テスト項目: ヘルスチェックが ok を返す
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let body: Value = reqwest::get(server.http("/api/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(body, json!({"status": "ok"}));
}
