// Copyright © 2025 Nipun Kumar

//! Poll and send logic, independent of the UI toolkit.
//!
//! Network failures stop here: they are logged and turned into plain outcomes
//! so the view never sees an error value.

use std::pin::Pin;
use std::rc::Rc;

use dioxus::logger::tracing::{info, warn};

use crate::api::{HttpMessageApi, MessageApi};
use crate::message::{Message, OutgoingMessage};
use crate::session::Session;
use crate::timer::Ticker;

/// A detached unit of work handed to whatever executor runs the view.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// The view state the client reads and writes.
pub trait ChatView {
    fn draft(&self) -> String;
    fn clear_draft(&mut self);
    /// Replaces the displayed list wholesale.
    fn show_messages(&mut self, messages: Vec<Message>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Draft was blank; nothing was sent.
    Skipped,
    Sent,
    /// Request failed; the draft was kept.
    Failed,
}

#[derive(Clone)]
pub struct ChatClient {
    api: Rc<dyn MessageApi>,
}

impl ChatClient {
    pub fn new(api: Rc<dyn MessageApi>) -> Self {
        Self { api }
    }

    pub fn for_session(session: &Session) -> Self {
        let api = HttpMessageApi::new(&session.server_address);
        info!("polling {}", api.url());
        Self::new(Rc::new(api))
    }

    /// One fetch. `None` means the request failed and was logged.
    pub async fn fetch(&self) -> Option<Vec<Message>> {
        match self.api.list_messages().await {
            Ok(messages) => Some(messages),
            Err(e) => {
                warn!("Error fetching messages: {e:?}");
                None
            }
        }
    }

    /// One poll tick: on success the view shows exactly what the server
    /// returned, on failure it keeps what it had.
    pub async fn refresh(&self, view: &mut impl ChatView) {
        if let Some(messages) = self.fetch().await {
            view.show_messages(messages);
        }
    }

    /// Runs forever, refreshing `view` on every tick. Each fetch is handed to
    /// `spawn` instead of being awaited, so a request that never answers does
    /// not hold up the next tick. Stop polling by dropping or aborting the task
    /// running this future.
    pub async fn poll<V, S>(&self, mut ticker: Ticker, view: V, mut spawn: S)
    where
        V: ChatView + Clone + 'static,
        S: FnMut(LocalTask),
    {
        loop {
            ticker.tick().await;
            let client = self.clone();
            let mut view = view.clone();
            spawn(Box::pin(async move {
                client.refresh(&mut view).await;
            }));
        }
    }

    /// Sends the draft under `username`. On success the draft is cleared and
    /// the list is refreshed straight away instead of waiting for the next tick.
    pub async fn submit(&self, view: &mut impl ChatView, username: &str) -> SendOutcome {
        let draft = view.draft();
        if draft.trim().is_empty() {
            return SendOutcome::Skipped;
        }
        let msg = OutgoingMessage {
            username: username.to_string(),
            message: draft,
        };
        if let Err(e) = self.api.post_message(&msg).await {
            warn!("Error sending message: {e:?}");
            return SendOutcome::Failed;
        }
        view.clear_draft();
        self.refresh(view).await;
        SendOutcome::Sent
    }
}
