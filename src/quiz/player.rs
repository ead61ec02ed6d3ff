use std::{borrow::Borrow, fmt};

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub(crate) fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Secret handed to a player on join and sent back in the
/// `Authentication-Token` header to re-identify them.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PlayerToken(String);

impl PlayerToken {
    pub(crate) fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PlayerToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlayerToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("PlayerToken([REDACTED])")
    }
}

#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    token: PlayerToken,
}

impl Player {
    pub(crate) fn new(name: String, token: PlayerToken) -> Self {
        Self {
            id: PlayerId::new(),
            name,
            token,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> &PlayerToken {
        &self.token
    }
}
