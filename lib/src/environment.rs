use crate::error::ReconcilerError;
use std::env;
use std::str::FromStr;

pub struct Environment;

impl Environment {
    pub fn string(
        env_name: &str,
        default: &str,
    ) -> String {
        env::var(env_name).ok().unwrap_or(default.to_string())
    }

    pub fn required_string(env_name: &str) -> Result<String, ReconcilerError> {
        env::var(env_name)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ReconcilerError::configuration(&format!("{env_name} is not set"), "Missing required environment variable"))
    }

    pub fn u16(
        env_name: &str,
        default: u16,
    ) -> Result<u16, ReconcilerError> {
        Self::parse(env_name, default)
    }

    pub fn u64(
        env_name: &str,
        default: u64,
    ) -> Result<u64, ReconcilerError> {
        Self::parse(env_name, default)
    }

    pub fn list(
        env_name: &str,
        default: &str,
    ) -> Vec<String> {
        Self::string(env_name, default)
            .split(',')
            .map(|it| it.trim())
            .filter(|it| !it.is_empty())
            .map(|it| it.to_string())
            .collect()
    }

    fn parse<T: FromStr>(
        env_name: &str,
        default: T,
    ) -> Result<T, ReconcilerError> {
        match env::var(env_name).ok() {
            None => Ok(default),
            Some(value) => value
                .trim()
                .parse::<T>()
                .map_err(|_| ReconcilerError::configuration(&format!("{env_name}={value}"), "Failed to parse environment variable")),
        }
    }
}
