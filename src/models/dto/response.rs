use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
