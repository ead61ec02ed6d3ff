//! Per-room fan-out of rendered scoreboard fragments.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, broadcast};

/// SSE event name carried by every scoreboard push.
pub const SCOREBOARD_EVENT: &str = "scoreboard-update";

#[derive(Debug)]
struct Channel {
    tx: broadcast::Sender<String>,
    /// Revision of the last fragment sent. Held across the send so fragments
    /// leave in revision order.
    published: Mutex<u64>,
}

/// One broadcast channel per room, created up front for every known slug.
#[derive(Clone, Debug)]
pub struct Broadcaster {
    channels: Arc<HashMap<String, Channel>>,
}

impl Broadcaster {
    pub fn new<'a>(slugs: impl IntoIterator<Item = &'a str>, capacity: usize) -> Self {
        let channels = slugs
            .into_iter()
            .map(|slug| {
                let channel = Channel {
                    tx: broadcast::channel(capacity).0,
                    published: Mutex::new(0),
                };
                (slug.to_owned(), channel)
            })
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Pushes `fragment` to everyone watching `slug` and returns how many
    /// subscribers received it.
    ///
    /// A fragment whose `revision` is not newer than the last one sent on the
    /// stream is dropped, so a slow publisher can never overwrite a newer
    /// scoreboard with an older one.
    pub async fn publish(&self, slug: &str, revision: u64, fragment: &str) -> usize {
        let Some(channel) = self.channels.get(slug) else {
            tracing::warn!(room = %slug, "Publish to unknown stream");
            return 0;
        };

        let mut published = channel.published.lock().await;
        if revision <= *published {
            tracing::debug!(
                room = %slug,
                revision,
                published = *published,
                "Stale scoreboard dropped"
            );
            return 0;
        }
        *published = revision;

        // nobody listening is fine
        let delivered = channel.tx.send(single_line(fragment)).unwrap_or(0);
        tracing::debug!(room = %slug, revision, delivered, "Scoreboard published");
        delivered
    }

    pub fn subscribe(&self, slug: &str) -> Option<broadcast::Receiver<String>> {
        self.channels.get(slug).map(|channel| channel.tx.subscribe())
    }
}

/// SSE data lines cannot carry raw newlines.
pub fn single_line(fragment: &str) -> String {
    fragment.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}
