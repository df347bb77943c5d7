//! End-to-end tests of `DefaultCatalogClient` against a loopback responder.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use catalog_core::ports::SERVER_ERROR_MESSAGE;
use catalog_core::{ApiPortError, ProductApiPort, ProductCategory, ProductDraft, RecordStore, normalize};
use catalog_http::{CatalogClientConfig, DefaultCatalogClient};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// What the responder saw for one request.
#[derive(Debug, Clone)]
struct Seen {
    method: String,
    path: String,
    body: String,
}

type Route = dyn Fn(&Seen) -> (u16, String) + Send + Sync;

struct Responder {
    base_url: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl Responder {
    async fn start(route: impl Fn(&Seen) -> (u16, String) + Send + Sync + 'static) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let route: Arc<Route> = Arc::new(route);

        let log = Arc::clone(&seen);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let route = Arc::clone(&route);
                let log = Arc::clone(&log);
                tokio::spawn(async move { serve(stream, &*route, &log).await });
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            seen,
        }
    }

    fn client(&self) -> DefaultCatalogClient {
        let config = CatalogClientConfig::new()
            .with_base_url(&self.base_url)
            .with_timeout(Duration::from_secs(5));
        DefaultCatalogClient::new(&config).unwrap()
    }

    fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

async fn serve(mut stream: TcpStream, route: &Route, log: &Mutex<Vec<Seen>>) {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
    let seen = Seen {
        method: request_line.next().unwrap_or_default().to_string(),
        path: request_line.next().unwrap_or_default().to_string(),
        body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
    };
    let (status, body) = route(&seen);
    log.lock().unwrap().push(seen);

    let response = format!(
        "HTTP/1.1 {status} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

fn catalog() -> Value {
    json!([
        {"id": "1", "name": "Módulo ABS", "category": "Electrónica", "price": 320,
         "stock": 4, "description": "ABS pump", "compatibleModels": ["Golf V"]},
        {"id": 2, "name": "Filtro", "category": "Motor", "price": "18.5",
         "stock": 40, "description": "Oil filter", "compatibleModels": []}
    ])
}

#[tokio::test]
async fn test_list_against_live_server() {
    let server = Responder::start(|_| (200, catalog().to_string())).await;
    let entries = server.client().list().await.unwrap();

    let products: Vec<_> = entries.iter().map(normalize).collect();
    assert_eq!(products.len(), 2);
    assert_eq!(products[1].id, "2");
    assert!((products[1].price - 18.5).abs() < f64::EPSILON);

    let seen = server.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "GET");
    assert_eq!(seen[0].path, "/products");
}

#[tokio::test]
async fn test_status_codes_are_classified() {
    let server = Responder::start(|seen| match seen.path.as_str() {
        "/products/missing" => (404, String::new()),
        "/products/broken" => (500, r#"{"error": "boom"}"#.to_string()),
        "/products/invalid" => (400, "bad id".to_string()),
        _ => (200, "not json".to_string()),
    })
    .await;
    let client = server.client();

    assert!(matches!(
        client.get("missing").await,
        Err(ApiPortError::NotFound { .. })
    ));
    assert_eq!(
        client.get("broken").await.unwrap_err(),
        ApiPortError::Server { status: 500 }
    );
    assert_eq!(
        client.get("invalid").await.unwrap_err(),
        ApiPortError::BadRequest {
            message: "bad id".to_string()
        }
    );
    assert!(matches!(
        client.get("other").await,
        Err(ApiPortError::InvalidResponse { .. })
    ));
}

#[tokio::test]
async fn test_create_sends_json_and_reads_assigned_id() {
    let server = Responder::start(|seen| {
        let mut body: Value = serde_json::from_str(&seen.body).unwrap();
        body["id"] = json!("7");
        (201, body.to_string())
    })
    .await;

    let draft = ProductDraft {
        name: "Turbo".to_string(),
        category: ProductCategory::Motor,
        price: 900.0,
        stock: 2,
        ..ProductDraft::default()
    };
    let created = normalize(&server.client().create(&draft).await.unwrap());

    assert_eq!(created, draft.clone().with_id("7"));
    let seen = server.seen();
    assert_eq!(seen[0].method, "POST");
    assert_eq!(seen[0].path, "/products");
}

#[tokio::test]
async fn test_ids_are_encoded_as_one_segment() {
    let server = Responder::start(|_| (200, r#"{"id": "a/b"}"#.to_string())).await;
    server.client().get("a/b").await.unwrap();
    assert_eq!(server.seen()[0].path, "/products/a%2Fb");
}

#[tokio::test]
async fn test_delete_accepts_any_success_body() {
    let server = Responder::start(|_| (200, "deleted".to_string())).await;
    server.client().delete("5").await.unwrap();

    let seen = server.seen();
    assert_eq!(seen[0].method, "DELETE");
    assert_eq!(seen[0].path, "/products/5");
}

#[tokio::test]
async fn test_closed_port_is_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = CatalogClientConfig::new().with_base_url(format!("http://{addr}"));
    let client = DefaultCatalogClient::new(&config).unwrap();

    assert!(matches!(
        client.list().await,
        Err(ApiPortError::Unreachable { .. })
    ));
}

#[tokio::test]
async fn test_silent_server_times_out_as_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    let config = CatalogClientConfig::new()
        .with_base_url(format!("http://{addr}"))
        .with_timeout(Duration::from_millis(200));
    let client = DefaultCatalogClient::new(&config).unwrap();

    assert!(matches!(
        client.get("1").await,
        Err(ApiPortError::Unreachable { .. })
    ));
}

#[tokio::test]
async fn test_store_over_http_surfaces_classified_error() {
    let server = Responder::start(|seen| match seen.method.as_str() {
        "GET" => (200, catalog().to_string()),
        _ => (503, String::new()),
    })
    .await;
    let store = RecordStore::new(Arc::new(server.client()));

    assert!(store.list().await);
    assert_eq!(store.products().len(), 2);

    let mut edited = store.get_by_id("1").into_cached().unwrap();
    let before = edited.clone();
    edited.stock = 0;

    assert!(store.update(&edited).await.is_none());
    assert_eq!(store.snapshot().get("1"), Some(&before));
    assert_eq!(store.status().error.as_deref(), Some(SERVER_ERROR_MESSAGE));
}
