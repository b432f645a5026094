//! Basic usage example

use tagconf::Config;

#[derive(Debug, Default, Config)]
struct AppConfig {
    // Required string: loaded from ACCESS_SECRET
    #[conf("required,env=ACCESS_SECRET")]
    pub access_secret: String,

    // Optional: zero value when unset
    #[conf("env=REFRESH_SECRET")]
    pub refresh_secret: String,

    // Numeric type
    #[conf("env=PORT,type=uint16")]
    pub port: u16,

    // Sequence split on ','
    #[conf("required,env=KAFKA_BROKERS,type=[,]string")]
    pub kafka_brokers: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("ACCESS_SECRET", "access_secret");
    std::env::set_var("PORT", "8080");
    std::env::set_var("KAFKA_BROKERS", "broker1,broker2,broker3");

    // Load configuration
    let config = AppConfig::from_env()?;

    println!("Configuration loaded:");
    println!("  Access Secret: {}", config.access_secret);
    println!("  Refresh Secret: {:?}", config.refresh_secret);
    println!("  Port: {}", config.port);
    println!("  Kafka Brokers: {:?}", config.kafka_brokers);

    Ok(())
}
