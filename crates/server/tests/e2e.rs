use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

struct TestApp {
    base_url: String,
    data_dir: std::path::PathBuf,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // isolated data file per test run
    let data_dir = std::env::temp_dir().join(format!("server_e2e_{}", Uuid::new_v4()));
    let mut cfg = AppConfig::default();
    cfg.storage.data_file = data_dir.join("campaigns.json");
    cfg.server.frontend_dir = "/nonexistent-frontend-for-tests".into();

    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, data_dir })
}

#[tokio::test]
async fn e2e_campaign_lifecycle_persists_to_disk() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let url = format!("{}/campaigns", app.base_url);

    let res = c.get(&url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!([]));

    let res = c
        .post(&url)
        .json(&json!({"name": "Launch", "client": "Acme", "startDate": "2024-01-01", "status": "Active"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = c
        .put(format!("{url}/Launch"))
        .json(&json!({"status": "Completed"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let on_disk: serde_json::Value =
        serde_json::from_slice(&tokio::fs::read(app.data_dir.join("campaigns.json")).await?)?;
    assert_eq!(
        on_disk,
        json!([{"name": "Launch", "client": "Acme", "startDate": "2024-01-01", "status": "Completed"}])
    );

    let res = c.put(format!("{url}/Missing")).json(&json!({"status": "Paused"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.delete(format!("{url}/Launch")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.get(&url).send().await?;
    assert_eq!(res.json::<serde_json::Value>().await?, json!([]));

    let _ = tokio::fs::remove_dir_all(&app.data_dir).await;
    Ok(())
}

#[tokio::test]
async fn e2e_corrupt_file_keeps_serving_with_500s() -> anyhow::Result<()> {
    let data_dir = std::env::temp_dir().join(format!("server_e2e_corrupt_{}", Uuid::new_v4()));
    tokio::fs::create_dir_all(&data_dir).await?;
    tokio::fs::write(data_dir.join("campaigns.json"), b"[[[").await?;
    let mut cfg = AppConfig::default();
    cfg.storage.data_file = data_dir.join("campaigns.json");
    cfg.server.frontend_dir = "/nonexistent-frontend-for-tests".into();

    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    let c = reqwest::Client::new();
    let res = c.get(format!("{base_url}/")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.get(format!("{base_url}/campaigns")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json::<serde_json::Value>().await?["error"], "Storage Error");
    assert_eq!(tokio::fs::read(data_dir.join("campaigns.json")).await?, b"[[[");

    let _ = tokio::fs::remove_dir_all(&data_dir).await;
    Ok(())
}
