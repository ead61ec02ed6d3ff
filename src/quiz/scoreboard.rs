use std::sync::Arc;

use super::player::Player;

#[derive(Debug)]
pub struct Score {
    player: Arc<Player>,
    points: i64,
}

impl Score {
    fn new(player: Arc<Player>) -> Self {
        Self { player, points: 0 }
    }
}

/// A name/points row copied out of a scoreboard for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub points: i64,
}

/// Rows of a scoreboard at a given revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    pub revision: u64,
    pub rows: Vec<Standing>,
}

/// Scores of one room, kept in join order. Entries are only ever appended
/// or have points added; nothing is removed or reordered.
///
/// `revision` goes up by one on every append or point change, so two
/// snapshots can be ordered without holding the lock.
#[derive(Debug, Default)]
pub struct Scoreboard {
    scores: Vec<Score>,
    revision: u64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_or_create_score(&mut self, player: &Arc<Player>) -> &mut Score {
        let index = match self
            .scores
            .iter()
            .position(|score| score.player.id() == player.id())
        {
            Some(index) => index,
            None => {
                self.scores.push(Score::new(Arc::clone(player)));
                self.revision += 1;
                self.scores.len() - 1
            }
        };

        &mut self.scores[index]
    }

    /// Adds `delta` to the player's score and returns the new total. A delta
    /// that would overflow the total is ignored.
    pub fn update_score(&mut self, player: &Arc<Player>, delta: i64) -> i64 {
        let score = self.find_or_create_score(player);
        let Some(total) = score.points.checked_add(delta) else {
            tracing::warn!(
                player = %player.id(),
                points = score.points,
                delta,
                "Score overflow, delta ignored"
            );
            return score.points;
        };

        score.points = total;
        if delta != 0 {
            self.revision += 1;
        }
        total
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[cfg(test)]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn standings(&self) -> Standings {
        Standings {
            revision: self.revision,
            rows: self
                .scores
                .iter()
                .map(|score| Standing {
                    name: score.player.name().to_owned(),
                    points: score.points,
                })
                .collect(),
        }
    }
}
