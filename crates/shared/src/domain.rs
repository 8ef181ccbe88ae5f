use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

id_newtype!(ConnectionId);

/// A saved persona record the user can select as the audience for a
/// generated explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub name: String,
    pub persona: String,
}

impl Connection {
    /// Builds a connection with a freshly generated id. Ids are never
    /// reused, so two connections with identical fields stay distinct.
    pub fn new(name: impl Into<String>, persona: impl Into<String>) -> Self {
        Self {
            id: ConnectionId::new(),
            name: name.into(),
            persona: persona.into(),
        }
    }
}
