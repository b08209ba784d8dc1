//! Notification bell fed by a polled HTTP API.
//!
//! The widget polls on a fixed cadence. Responses race: a slow response
//! from an earlier poll may arrive after a later one, so every poll gets a
//! token and the widget only applies the response of the newest poll it
//! issued. A failed fetch degrades to an empty list rather than an error
//! surface.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contracts::system::notifications::{NotificationItem, TenantNote};

use crate::shared::config::NotificationsConfig;

/// Remote side of the notification feed
#[async_trait]
pub trait NotificationTransport: Send + Sync {
    async fn fetch_notes(&self) -> anyhow::Result<Vec<TenantNote>>;
    async fn mark_read(&self, id: &str) -> anyhow::Result<()>;
}

/// Transport talking to the real notification API
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &NotificationsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl NotificationTransport for HttpTransport {
    async fn fetch_notes(&self) -> anyhow::Result<Vec<TenantNote>> {
        let url = format!("{}/tenant-note/", self.base_url);
        let notes = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(notes)
    }

    async fn mark_read(&self, id: &str) -> anyhow::Result<()> {
        let url = format!("{}/bot-notifications/{}/read", self.base_url, id);
        self.client
            .patch(&url)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// State behind the notification bell
pub struct NotificationWidget {
    transport: Arc<dyn NotificationTransport>,
    notes: Vec<TenantNote>,
    poll_interval: Duration,
    /// Token of the newest poll issued so far
    issued: u64,
}

impl NotificationWidget {
    pub fn new(transport: Arc<dyn NotificationTransport>, config: &NotificationsConfig) -> Self {
        Self {
            transport,
            notes: Vec::new(),
            poll_interval: Duration::from_secs(config.poll_interval_secs),
            issued: 0,
        }
    }

    /// Cadence for the host's polling loop
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Issue a poll token; responses carrying an older token are stale
    pub fn begin_poll(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Apply a poll response unless a newer poll has been issued since
    pub fn apply(&mut self, token: u64, result: anyhow::Result<Vec<TenantNote>>) {
        if token < self.issued {
            tracing::debug!(token, newest = self.issued, "stale poll response dropped");
            return;
        }
        match result {
            Ok(notes) => {
                tracing::debug!(count = notes.len(), "notifications refreshed");
                self.notes = notes;
            }
            Err(err) => {
                // Degrade quietly; the next tick will try again
                tracing::warn!("notification fetch failed: {err}");
                self.notes.clear();
            }
        }
    }

    /// One full poll cycle against the transport
    pub async fn refresh(&mut self) {
        let token = self.begin_poll();
        let result = self.transport.fetch_notes().await;
        self.apply(token, result);
    }

    pub fn unread_count(&self) -> usize {
        self.notes.iter().filter(|note| !note.is_read).count()
    }

    /// Dropdown content, newest formatting relative to `now`
    pub fn items(&self, now: DateTime<Utc>) -> Vec<NotificationItem> {
        self.notes
            .iter()
            .map(|note| NotificationItem::from_note(note, now))
            .collect()
    }

    /// Flip a note to read locally, then tell the server
    ///
    /// The flip is optimistic: a failed PATCH keeps the local state and the
    /// next poll restores the server's view.
    pub async fn mark_read(&mut self, id: &str) {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            tracing::warn!(id, "mark read: unknown notification");
            return;
        };
        note.is_read = true;
        if let Err(err) = self.transport.mark_read(id).await {
            tracing::warn!(id, "mark read failed: {err}");
        }
    }

    pub async fn mark_all_read(&mut self) {
        let unread: Vec<String> = self
            .notes
            .iter()
            .filter(|note| !note.is_read)
            .map(|note| note.id.clone())
            .collect();
        for id in unread {
            self.mark_read(&id).await;
        }
    }
}
