mod common;

use std::io;
use std::net::TcpListener;
use std::time::Duration;
use actix_web::{web, HttpResponse};
use bootstrap_actix::http::enums::shutdown_signal::ShutdownSignal;
use bootstrap_actix::http::http::{http_service_with_listener, listen_until};
use bootstrap_actix::http::structs::http_server_options::HttpServerOptions;
use tokio::sync::oneshot;

fn https_client() -> reqwest::Client {
    reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

fn start(options: HttpServerOptions) -> (u16, oneshot::Sender<()>, actix_web::rt::task::JoinHandle<io::Result<()>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let instance = http_service_with_listener(options, listener).unwrap();
    let port = instance.local_addr.port();
    let (tx, rx) = oneshot::channel::<()>();
    let shutdown = async move {
        rx.await.map_err(io::Error::other)?;
        Ok::<_, io::Error>(ShutdownSignal::Terminate)
    };
    let task = actix_web::rt::spawn(listen_until(instance, shutdown, None));
    (port, tx, task)
}

#[actix_web::test]
async fn test_https_probes_and_routes() {
    let paths = common::certificate_paths();
    common::write_valid_certificate(&paths);
    let options = HttpServerOptions::default()
        .with_tls(paths.cert_str(), paths.key_str())
        .with_init_routes(|cfg| {
            cfg.route("/hello", web::get().to(|| async { HttpResponse::Ok().body("hello") }));
        });
    let (port, tx, task) = start(options);
    let client = https_client();

    for path in ["/healthz", "/readyz"] {
        let response = client.get(format!("https://127.0.0.1:{}{}", port, path)).send().await.unwrap();
        assert_eq!(response.status(), 200, "{} should answer 200", path);
    }
    let response = client.get(format!("https://127.0.0.1:{}/hello", port)).send().await.unwrap();
    assert_eq!(response.text().await.unwrap(), "hello");

    tx.send(()).unwrap();
    assert!(task.await.unwrap().is_ok());
}

#[actix_web::test]
async fn test_https_handshakes_fail_until_certificate_is_readable() {
    let paths = common::certificate_paths();
    let options = HttpServerOptions::default().with_tls(paths.cert_str(), paths.key_str());
    let (port, tx, task) = start(options);
    let client = https_client();
    let url = format!("https://127.0.0.1:{}/healthz", port);

    assert!(client.get(&url).send().await.is_err());

    common::write_valid_certificate(&paths);
    let response = client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), 200);

    tx.send(()).unwrap();
    assert!(task.await.unwrap().is_ok());
}

#[actix_web::test]
async fn test_plain_http_without_tls_paths() {
    let (port, tx, task) = start(HttpServerOptions::default());
    let response = reqwest::get(format!("http://127.0.0.1:{}/healthz", port)).await.unwrap();
    assert_eq!(response.status(), 200);

    tx.send(()).unwrap();
    assert!(task.await.unwrap().is_ok());
}
