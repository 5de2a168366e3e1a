#![allow(dead_code)]

use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tps_console::domain::activity::ActivityResource;
use tps_console::domain::error::ConsoleError;
use tps_console::domain::transport::{Transport, TransportFuture};
use tps_console::services::resource_client::ResourceClient;

/// Serves canned JSON per URL and records every request it sees.
#[derive(Default)]
pub struct InMemoryTransport {
    responses: Mutex<HashMap<String, Value>>,
    requests: Mutex<Vec<(String, String, Option<Value>)>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), body);
    }

    /// `(method, url, body)` in request order.
    pub fn requests(&self) -> Vec<(String, String, Option<Value>)> {
        self.requests.lock().unwrap().clone()
    }

    fn answer(&self, method: &str, url: &str, body: Option<Value>) -> Result<Value, ConsoleError> {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), url.to_string(), body.clone()));
        match self.responses.lock().unwrap().get(url) {
            Some(value) => Ok(value.clone()),
            // Echo PUT bodies back like a server that accepted the update.
            None if method == "PUT" => Ok(body.unwrap_or(Value::Null)),
            None => Err(ConsoleError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

impl Transport for InMemoryTransport {
    fn get(&self, url: &str) -> TransportFuture<'_> {
        let url = url.to_string();
        Box::pin(async move { self.answer("GET", &url, None) })
    }

    fn put(&self, url: &str, body: Value) -> TransportFuture<'_> {
        let url = url.to_string();
        Box::pin(async move { self.answer("PUT", &url, Some(body)) })
    }
}

pub fn activity_client(transport: Arc<InMemoryTransport>) -> ResourceClient<ActivityResource> {
    ResourceClient::new(ActivityResource, transport)
}

/// Wire JSON of activity number `n`.
pub fn wire_activity(n: u64) -> Value {
    json!({
        "id": n,
        "TokenID": format!("token{n}"),
        "UserID": format!("user{n}"),
        "IP": format!("10.0.0.{n}"),
        "Operation": "format",
        "Result": "success",
        "Date": 1_356_998_400_000u64 + n * 1000,
    })
}

/// A page response with activities `ids` and the given `(rel, href)` links.
pub fn page(ids: &[u64], links: &[(&str, &str)], total: u64) -> Value {
    let entries: Vec<Value> = ids.iter().map(|&n| wire_activity(n)).collect();
    let links: Vec<Value> = links
        .iter()
        .map(|(rel, href)| json!({"rel": rel, "href": href}))
        .collect();
    json!({
        "total": total,
        "entries": entries,
        "Link": links,
    })
}
