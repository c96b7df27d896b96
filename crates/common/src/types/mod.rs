use serde::Serialize;

/// Body of the `/health` probe.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self { Self { status: "ok" } }
}
