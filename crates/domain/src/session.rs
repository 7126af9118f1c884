use crate::shared::entity::ID;
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Local,
    Google,
    Apple,
    Discord,
}

impl Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Local => "LOCAL",
            Self::Google => "GOOGLE",
            Self::Apple => "APPLE",
            Self::Discord => "DISCORD",
        };
        write!(f, "{}", kind)
    }
}

impl FromStr for SessionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOCAL" => Ok(Self::Local),
            "GOOGLE" => Ok(Self::Google),
            "APPLE" => Ok(Self::Apple),
            "DISCORD" => Ok(Self::Discord),
            other => Err(format!("Unknown session kind: {}", other)),
        }
    }
}

/// A logged in user. The `id` is the opaque token handed to the client.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub user_id: ID,
    pub kind: SessionKind,
    pub expires_ts: i64,
}

impl Session {
    pub fn new(id: String, user_id: ID, kind: SessionKind, expires_ts: i64) -> Self {
        Self {
            id,
            user_id,
            kind,
            expires_ts,
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_ts <= now
    }
}
