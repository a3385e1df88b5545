/// Database configuration and connection management
pub mod database;

/// Default category configuration loading from config.toml
pub mod categories;

/// Environment selection and `.env` file loading
pub mod environment;
