//! Startup failure semantics.

use std::time::Duration;

use imc_api::config::loader::parse_config;
use imc_api::config::ConfigError;
use imc_api::lifecycle::startup::{run_until, StartupError};
use imc_api::net::ListenerError;
use imc_api::{ServiceConfig, Shutdown};
use tokio::net::{TcpListener, TcpStream};

#[tokio::test]
async fn test_occupied_port_fails_startup() {
    let holder = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let taken = holder.local_addr().unwrap();

    let mut config = ServiceConfig::default();
    config.listener.bind_address = taken.to_string();

    let shutdown = Shutdown::new();
    let result = tokio::time::timeout(Duration::from_secs(5), run_until(config, &shutdown))
        .await
        .expect("startup should fail immediately");

    assert!(matches!(
        result,
        Err(StartupError::Listener(ListenerError::AddrInUse(addr))) if addr == taken
    ));
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_binding() {
    let err = parse_config(
        r#"
        [timeouts]
        request_secs = 0
        "#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Validation(_)));
    let startup: StartupError = err.into();
    assert!(startup.to_string().starts_with("configuration error"));
}

/// Reserve a free loopback port, then release it for the service to take.
async fn free_port() -> u16 {
    let holder = TcpListener::bind("127.0.0.1:0").await.unwrap();
    holder.local_addr().unwrap().port()
}

async fn wait_for_listener(port: u16) -> bool {
    for _ in 0..50 {
        if TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}

#[tokio::test]
async fn test_bad_metrics_address_fails_before_binding() {
    let port = free_port().await;
    let mut config = ServiceConfig::default();
    config.listener.bind_address = format!("127.0.0.1:{port}");
    config.observability.metrics_enabled = true;
    config.observability.metrics_address = "not-an-address".into();

    let shutdown = Shutdown::new();
    let result = run_until(config, &shutdown).await;

    assert!(matches!(
        result,
        Err(StartupError::MetricsAddress(ref addr)) if addr == "not-an-address"
    ));
    assert!(TcpStream::connect(("127.0.0.1", port)).await.is_err());
}

#[tokio::test]
async fn test_metrics_exporter_serves_request_counters() {
    let port = free_port().await;
    let metrics_port = free_port().await;

    let mut config = ServiceConfig::default();
    config.listener.bind_address = format!("127.0.0.1:{port}");
    config.observability.metrics_enabled = true;
    config.observability.metrics_address = format!("127.0.0.1:{metrics_port}");

    let shutdown = Shutdown::new();
    let runner = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move { run_until(config, &shutdown).await })
    };
    assert!(wait_for_listener(port).await, "service never started listening");
    assert!(wait_for_listener(metrics_port).await, "exporter never started listening");

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();
    let res = client
        .get(format!("http://127.0.0.1:{port}/imc?valor=31"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let scrape = client
        .get(format!("http://127.0.0.1:{metrics_port}/metrics"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(scrape.contains("imc_http_requests_total"), "{scrape}");
    assert!(scrape.contains("imc_classifications_total"), "{scrape}");

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), runner)
        .await
        .unwrap()
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_run_serves_until_shutdown() {
    let port = free_port().await;

    let mut config = ServiceConfig::default();
    config.listener.bind_address = format!("127.0.0.1:{port}");

    let shutdown = Shutdown::new();
    let runner = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move { run_until(config, &shutdown).await })
    };

    assert!(wait_for_listener(port).await, "service never started listening");

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), runner)
        .await
        .unwrap()
        .unwrap();
    assert!(result.is_ok());
}
