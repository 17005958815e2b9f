use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        recipes_path: get_env_or_default("RECIPES_PATH", "data/recipes.json"),
        bind_addr: get_env_or_default("BIND_ADDR", "0.0.0.0:3000"),
    }
});

pub struct Config {
    pub recipes_path: String,
    pub bind_addr: String,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
