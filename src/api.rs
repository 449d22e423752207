// Copyright © 2025 Nipun Kumar

//! HTTP access to the chat server's message collection.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use dioxus::logger::tracing::debug;

use crate::config::{API_PATH, API_PORT};
use crate::message::{Message, OutgoingMessage};

/// The two calls the client makes against a chat server.
#[async_trait(?Send)]
pub trait MessageApi {
    /// Full message list, in the order the server wants it displayed.
    async fn list_messages(&self) -> Result<Vec<Message>>;

    /// Any 2xx counts as accepted; the response body is ignored.
    async fn post_message(&self, msg: &OutgoingMessage) -> Result<()>;
}

/// `http://{host}:5000/api/messages`. The host is used as entered.
pub fn messages_url(host: &str) -> String {
    format!("http://{host}:{API_PORT}{API_PATH}")
}

pub struct HttpMessageApi {
    client: reqwest::Client,
    url: String,
}

impl HttpMessageApi {
    pub fn new(host: &str) -> Self {
        Self::with_url(messages_url(host))
    }

    pub(crate) fn with_url(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl MessageApi for HttpMessageApi {
    async fn list_messages(&self) -> Result<Vec<Message>> {
        let res = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("GET {}", self.url))?;
        let status = res.status();
        if !status.is_success() {
            bail!("GET {} returned {status}", self.url);
        }
        let messages: Vec<Message> = res
            .json()
            .await
            .with_context(|| format!("decoding message list from {}", self.url))?;
        debug!("fetched {} messages", messages.len());
        Ok(messages)
    }

    async fn post_message(&self, msg: &OutgoingMessage) -> Result<()> {
        let res = self
            .client
            .post(&self.url)
            .json(msg)
            .send()
            .await
            .with_context(|| format!("POST {}", self.url))?;
        let status = res.status();
        if !status.is_success() {
            bail!("POST {} returned {status}", self.url);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> HttpMessageApi {
        HttpMessageApi::with_url(format!("{}{API_PATH}", server.uri()))
    }

    #[test]
    fn url_uses_fixed_port_and_path() {
        assert_eq!(messages_url("10.0.0.5"), "http://10.0.0.5:5000/api/messages");
        assert_eq!(HttpMessageApi::new("chat.lan").url(), "http://chat.lan:5000/api/messages");
    }

    #[tokio::test]
    async fn list_decodes_server_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"username": "bob", "message": "second"},
                {"username": "alice", "message": "first"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let list = api_for(&server).list_messages().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].message, "second");
        assert_eq!(list[1].message, "first");
    }

    #[tokio::test]
    async fn list_rejects_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/messages"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = api_for(&server).list_messages().await.unwrap_err();
        assert!(format!("{err:#}").contains("500"));
    }

    #[tokio::test]
    async fn list_rejects_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "a list"})))
            .mount(&server)
            .await;

        assert!(api_for(&server).list_messages().await.is_err());
    }

    #[tokio::test]
    async fn post_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/messages"))
            .and(body_json(json!({"username": "alice", "message": "hello"})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let msg = OutgoingMessage {
            username: "alice".into(),
            message: "hello".into(),
        };
        api_for(&server).post_message(&msg).await.unwrap();
    }

    #[tokio::test]
    async fn post_rejects_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/messages"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let msg = OutgoingMessage {
            username: "alice".into(),
            message: "hello".into(),
        };
        assert!(api_for(&server).post_message(&msg).await.is_err());
    }

    #[tokio::test]
    async fn unreachable_host_is_an_error() {
        let server = MockServer::start().await;
        let api = api_for(&server);
        drop(server);
        assert!(api.list_messages().await.is_err());
    }
}
