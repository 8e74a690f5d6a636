//! Load testing for the IMC service.

use std::time::{Duration, Instant};

use imc_api::ServiceConfig;

mod common;

#[tokio::test]
async fn test_load_performance() {
    let mut config = ServiceConfig::default();
    config.listener.max_connections = 8;
    let service = common::start_service(config).await;

    let concurrency = 20;
    let requests_per_task = 50;
    let total_requests = concurrency * requests_per_task;

    let client = reqwest::Client::new();
    let start = Instant::now();

    let mut handles = Vec::with_capacity(concurrency);
    for task in 0..concurrency {
        let client = client.clone();
        let url = service.url("/imc");
        handles.push(tokio::spawn(async move {
            let mut ok = 0usize;
            for i in 0..requests_per_task {
                let valor = format!("{}.5", 15 + (task + i) % 30);
                let res = client.get(&url).query(&[("valor", valor)]).send().await;
                if matches!(res, Ok(r) if r.status().is_success()) {
                    ok += 1;
                }
            }
            ok
        }));
    }

    let mut successes = 0;
    for handle in handles {
        successes += handle.await.unwrap();
    }
    let elapsed = start.elapsed();
    drop(client);

    println!(
        "{} requests in {:?} ({:.0} req/s)",
        total_requests,
        elapsed,
        total_requests as f64 / elapsed.as_secs_f64()
    );

    assert_eq!(successes, total_requests, "every request should succeed");
    assert!(elapsed < Duration::from_secs(30), "load test too slow: {elapsed:?}");

    service.stop().await.unwrap();
}
