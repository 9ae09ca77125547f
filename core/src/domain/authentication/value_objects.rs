use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque caller identity. Resolving it from a session or token happens
/// outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    user_id: Uuid,
}

impl Identity {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    pub fn id(&self) -> Uuid {
        self.user_id
    }
}

impl From<Uuid> for Identity {
    fn from(user_id: Uuid) -> Self {
        Self::new(user_id)
    }
}
