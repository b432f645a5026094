//! Example showing how validation failures are reported

use tagconf::{Config, ConfigError};

#[derive(Debug, Default, Config)]
struct AppConfig {
    #[conf("required,env=DATABASE_URL")]
    pub database_url: String,

    #[conf("env=MAX_CONNECTIONS,type=uint32")]
    pub max_connections: u32,
}

fn main() {
    std::env::remove_var("DATABASE_URL");
    std::env::set_var("MAX_CONNECTIONS", "many");

    match tagconf::validate_config(AppConfig::default()) {
        Ok(config) => println!("Loaded: {config:?}"),
        Err(ConfigError::FieldRequired { field }) => {
            println!("Missing required field: {field}");
        }
        Err(err) => println!("Invalid configuration: {err}"),
    }

    std::env::set_var("DATABASE_URL", "postgres://localhost/db");
    if let Err(err) = tagconf::validate_config(AppConfig::default()) {
        println!("Invalid configuration: {err}");
    }
}
