//! In-memory quiz state: the fixed room registry, the player directory and
//! each room's scoreboard.

pub mod catalog;
mod player;
mod room;
mod scoreboard;

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

pub use player::{Player, PlayerId, PlayerToken};
pub use room::{Room, RoomInfo};
pub use scoreboard::{Score, Scoreboard, Standing, Standings};

/// Authoritative state shared by every request handler.
///
/// Rooms are fixed at construction. Players are added on join and live for
/// the rest of the process.
#[derive(Debug)]
pub struct Quiz {
    rooms: Vec<Arc<Room>>,
    players: RwLock<HashMap<PlayerToken, Arc<Player>>>,
}

impl Quiz {
    pub fn new(rooms: impl IntoIterator<Item = RoomInfo>) -> Self {
        Self {
            rooms: rooms
                .into_iter()
                .map(|info| Arc::new(Room::new(info)))
                .collect(),
            players: RwLock::new(HashMap::new()),
        }
    }

    pub fn rooms(&self) -> &[Arc<Room>] {
        &self.rooms
    }

    pub fn find_room(&self, slug: &str) -> Option<Arc<Room>> {
        self.rooms.iter().find(|room| room.slug() == slug).cloned()
    }

    /// Creates a player with a fresh id and token and gives them a zero
    /// score in `room`. Names are not checked for uniqueness.
    pub async fn register_player(&self, room: &Room, name: String) -> (Arc<Player>, Standings) {
        let player = {
            let mut players = self.players.write().await;
            let token = loop {
                let token = PlayerToken::random();
                if !players.contains_key(&token) {
                    break token;
                }
            };
            let player = Arc::new(Player::new(name, token.clone()));
            players.insert(token, Arc::clone(&player));
            player
        };

        let standings = room.enter(&player).await;

        tracing::info!(
            room = %room.slug(),
            player = %player.id(),
            name = %player.name(),
            "Player joined"
        );

        (player, standings)
    }

    pub async fn find_player_by_token(&self, token: &str) -> Option<Arc<Player>> {
        if token.is_empty() {
            return None;
        }

        self.players.read().await.get(token).cloned()
    }

    #[cfg(test)]
    pub async fn player_count(&self) -> usize {
        self.players.read().await.len()
    }
}
