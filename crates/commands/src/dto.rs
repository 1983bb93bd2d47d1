use serde::Deserialize;

/// Arguments of `get_pihole_stats`
#[derive(Deserialize)]
pub struct StatsArgs {
    pub host: String,
    #[serde(default)]
    pub password: Option<String>,
}

// Hand-written so the password never reaches a log line.
impl std::fmt::Debug for StatsArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsArgs")
            .field("host", &self.host)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}
