use anyhow::Result;

/// Engine configuration loaded from environment variables.
///
/// Everything has a working default so the engine runs out of the box; a
/// `.env` file is honored when present.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Path to the skill vocabulary CSV loaded once at startup.
    pub skill_db_path: String,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(EngineConfig {
            skill_db_path: std::env::var("SKILL_DB_PATH")
                .unwrap_or_else(|_| "data/skills.csv".to_string()),
        })
    }
}
