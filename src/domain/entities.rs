use serde::{Deserialize, Serialize};

// How a guest attends the event. Wire and database values use the
// Portuguese labels the clients send.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Participation {
    #[serde(rename = "Sozinho")]
    Alone,
    #[serde(rename = "Acompanhado")]
    Accompanied,
}

impl Participation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Participation::Alone => "Sozinho",
            Participation::Accompanied => "Acompanhado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Sozinho" => Some(Participation::Alone),
            "Acompanhado" => Some(Participation::Accompanied),
            _ => None,
        }
    }
}

// Registered guest with an owned, ordered companion list.
// Id is 0 until the storage layer assigns one.
#[derive(Clone, Debug)]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub attendance_confirmed: bool,
    pub participation: Participation,
    pub companion_count: i32,
    pub companions: Vec<Companion>,
}

// Companion brought by a guest. The owning-guest foreign key lives only
// in the storage schema, not here.
#[derive(Clone, Debug)]
pub struct Companion {
    pub id: i64,
    pub name: String,
}
