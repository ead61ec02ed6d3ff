use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::Mutex;

use super::{
    player::Player,
    scoreboard::{Scoreboard, Standings},
};

/// Static description of a room, as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoomInfo {
    pub name: String,
    pub slug: String,
    pub image: String,
}

/// A quiz room and the scoreboard it owns.
///
/// Every method holds the scoreboard lock only while it mutates and copies
/// out the standings, so callers render and broadcast without the lock.
#[derive(Debug)]
pub struct Room {
    info: RoomInfo,
    scoreboard: Mutex<Scoreboard>,
}

impl Room {
    pub fn new(info: RoomInfo) -> Self {
        Self {
            info,
            scoreboard: Mutex::new(Scoreboard::new()),
        }
    }

    pub fn info(&self) -> &RoomInfo {
        &self.info
    }

    pub fn slug(&self) -> &str {
        &self.info.slug
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Makes sure `player` has an entry on this room's scoreboard.
    pub async fn enter(&self, player: &Arc<Player>) -> Standings {
        let mut scoreboard = self.scoreboard.lock().await;
        scoreboard.find_or_create_score(player);
        scoreboard.standings()
    }

    pub async fn update_score(&self, player: &Arc<Player>, delta: i64) -> Standings {
        let mut scoreboard = self.scoreboard.lock().await;
        let total = scoreboard.update_score(player, delta);
        tracing::debug!(
            room = %self.info.slug,
            player = %player.id(),
            delta,
            total,
            "Score updated"
        );
        scoreboard.standings()
    }

    pub async fn standings(&self) -> Standings {
        self.scoreboard.lock().await.standings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{player::PlayerToken, scoreboard::Standing};

    fn classic_rock() -> Room {
        Room::new(RoomInfo {
            name: "Classic Rock".to_owned(),
            slug: "classic-rock".to_owned(),
            image: "/web/images/guitar.svg".to_owned(),
        })
    }

    #[tokio::test]
    async fn test_enter_twice_keeps_one_entry() {
        let room = classic_rock();
        let alice = Arc::new(Player::new("Alice".to_owned(), PlayerToken::random()));

        room.enter(&alice).await;
        let standings = room.enter(&alice).await;

        assert_eq!(standings.rows.len(), 1);
        assert_eq!(standings.rows[0].points, 0);
        assert_eq!(standings.revision, 1);
    }

    #[tokio::test]
    async fn test_update_score_snapshot_reflects_change() {
        let room = classic_rock();
        let alice = Arc::new(Player::new("Alice".to_owned(), PlayerToken::random()));

        room.update_score(&alice, 1).await;
        let standings = room.update_score(&alice, 1).await;

        assert_eq!(
            standings.rows,
            vec![Standing {
                name: "Alice".to_owned(),
                points: 2
            }]
        );
        assert_eq!(room.standings().await, standings);
    }
}
