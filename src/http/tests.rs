use std::num::NonZeroU64;
use std::time::Duration;

use url::Url;

use crate::args::{BenchConfig, HttpMethod};

use super::{Outcome, Workload};

fn config(target: &str, params: &[(&str, &str)]) -> Result<BenchConfig, String> {
    Ok(BenchConfig {
        requests: NonZeroU64::new(10).ok_or("requests must be non-zero")?,
        concurrency: NonZeroU64::new(2).ok_or("concurrency must be non-zero")?,
        timeout: Duration::from_millis(100),
        target: Url::parse(target).map_err(|err| format!("parse target failed: {}", err))?,
        method: HttpMethod::Get,
        params: params
            .iter()
            .map(|&(key, value)| (key.to_owned(), value.to_owned()))
            .collect(),
        body: None,
    })
}

#[test]
fn success_is_exactly_2xx() {
    assert!(Outcome::Status(200).is_success());
    assert!(Outcome::Status(204).is_success());
    assert!(Outcome::Status(299).is_success());
    assert!(!Outcome::Status(199).is_success());
    assert!(!Outcome::Status(301).is_success());
    assert!(!Outcome::Status(404).is_success());
    assert!(!Outcome::Status(500).is_success());
    assert!(!Outcome::TimedOut.is_success());
    assert!(!Outcome::Failed.is_success());
}

#[test]
fn timeout_is_tagged() {
    assert!(Outcome::TimedOut.is_timeout());
    assert!(!Outcome::Failed.is_timeout());
    assert!(!Outcome::Status(200).is_timeout());
}

#[test]
fn workload_composes_encoded_query() -> Result<(), String> {
    let config = config("http://localhost:8080/ping", &[("q", "two words"), ("n", "1")])?;
    let workload = Workload::from_config(&config).map_err(|err| err.to_string())?;
    assert_eq!(
        workload.url().as_str(),
        "http://localhost:8080/ping?q=two+words&n=1"
    );
    Ok(())
}

#[test]
fn workload_without_params_keeps_url_untouched() -> Result<(), String> {
    let config = config("http://localhost:8080/ping", &[])?;
    let workload = Workload::from_config(&config).map_err(|err| err.to_string())?;
    assert_eq!(workload.url().as_str(), "http://localhost:8080/ping");
    Ok(())
}

#[test]
fn json_body_is_owned_bytes() -> Result<(), String> {
    let mut config = config("http://localhost:8080/items", &[])?;
    config.method = HttpMethod::Post;
    config.body = Some(serde_json::json!({"name": "volley"}));
    let workload = Workload::from_config(&config).map_err(|err| err.to_string())?;
    let body = workload.body().ok_or("body missing")?;
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|err| format!("body not JSON: {}", err))?;
    assert_eq!(value, serde_json::json!({"name": "volley"}));
    Ok(())
}

#[test]
fn template_with_body_clones_per_request() -> Result<(), String> {
    let mut config = config("http://localhost:8080/items", &[])?;
    config.method = HttpMethod::Post;
    config.body = Some(serde_json::json!({"k": 1}));
    let workload = Workload::from_config(&config).map_err(|err| err.to_string())?;

    let client = reqwest::Client::new();
    let template = workload
        .build_request(&client)
        .map_err(|err| err.to_string())?;

    // Two independent clones must each carry a full body copy.
    for _ in 0..2 {
        let request = template.try_clone().ok_or("template must be cloneable")?;
        let body = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .ok_or("cloned request lost its body")?;
        assert!(!body.is_empty());
    }
    Ok(())
}
