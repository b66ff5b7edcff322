use std::{
  env::{self, VarError},
  fmt::Display,
  str::FromStr,
};

use crate::api::errors::AppError;

#[derive(Clone, Debug)]
pub struct Config {
  pub env: Env,
  pub listen_addr: String,

  // Ranking
  pub max_limit: usize,

  // Debugging
  pub enable_prometheus: bool,
  pub enable_tracing: bool,
  pub tracing_exporter: TracingExporter,
}

impl Default for Config {
  fn default() -> Config {
    Config {
      env: Env::Dev,
      listen_addr: "0.0.0.0:8000".into(),
      max_limit: 50,
      enable_prometheus: false,
      enable_tracing: false,
      tracing_exporter: TracingExporter::Otlp,
    }
  }
}

impl Config {
  pub fn from_env() -> Result<Config, AppError> {
    Ok(Config {
      env: Env::from(env::var("ENV").unwrap_or("dev".into())),
      listen_addr: env::var("LISTEN_ADDR").unwrap_or("0.0.0.0:8000".into()),
      max_limit: parse_env("MAX_LIMIT", 50)?,
      enable_prometheus: env::var("ENABLE_PROMETHEUS").unwrap_or_default() == "1",
      enable_tracing: env::var("ENABLE_TRACING").unwrap_or_default() == "1",
      tracing_exporter: env::var("TRACING_EXPORTER").unwrap_or("otlp".into()).parse()?,
    })
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Env {
  Dev,
  Production,
}

impl From<String> for Env {
  fn from(value: String) -> Self {
    match value.as_ref() {
      "dev" => Env::Dev,
      "production" => Env::Production,
      _ => Env::Dev,
    }
  }
}

#[derive(Clone, Debug)]
pub enum TracingExporter {
  Otlp,
}

impl FromStr for TracingExporter {
  type Err = AppError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value {
      "otlp" => Ok(TracingExporter::Otlp),
      other => Err(AppError::ConfigError(format!("unsupported tracing exporter kind: {other}"))),
    }
  }
}

pub fn parse_env<T>(name: &str, default: T) -> anyhow::Result<T>
where
  T: FromStr,
  T::Err: Display,
{
  match env::var(name) {
    Ok(value) if value.is_empty() => Ok(default),
    Ok(value) => Ok(value.parse::<T>().map_err(|err| AppError::ConfigError(format!("could not read {name}: {err}")))?),
    Err(err) => match err {
      VarError::NotPresent => Ok(default),
      _ => Err(AppError::ConfigError(format!("could not read {name}: {err}")).into()),
    },
  }
}

#[cfg(test)]
mod tests {
  use std::{
    env,
    net::{IpAddr, Ipv4Addr},
  };

  use super::{Config, Env, TracingExporter};

  #[test]
  #[serial_test::serial]
  fn parse_config_from_env() {
    unsafe {
      env::set_var("ENV", "production");
      env::set_var("LISTEN_ADDR", "0.0.0.0:8080");
      env::set_var("MAX_LIMIT", "25");
      env::set_var("ENABLE_PROMETHEUS", "1");
      env::set_var("ENABLE_TRACING", "1");
    }

    let config = Config::from_env().unwrap();

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.listen_addr, "0.0.0.0:8080");
    assert_eq!(config.max_limit, 25);
    assert_eq!(config.enable_prometheus, true);
    assert_eq!(config.enable_tracing, true);

    unsafe {
      env::remove_var("ENV");
      env::remove_var("LISTEN_ADDR");
      env::remove_var("MAX_LIMIT");
      env::remove_var("ENABLE_PROMETHEUS");
      env::remove_var("ENABLE_TRACING");
    }
  }

  #[test]
  #[serial_test::serial]
  fn defaults_without_environment() {
    let config = Config::from_env().unwrap();

    assert_eq!(config.env, Env::Dev);
    assert_eq!(config.listen_addr, "0.0.0.0:8000");
    assert_eq!(config.max_limit, 50);
    assert_eq!(config.enable_prometheus, false);
    assert_eq!(config.enable_tracing, false);
  }

  #[test]
  #[serial_test::serial]
  fn parse_env() {
    unsafe {
      env::set_var("INT", "42");
      env::set_var("BOOL", "true");
      env::set_var("IP", "1.2.3.4");
    }

    assert_eq!(super::parse_env::<u32>("INT", 0).unwrap(), 42);
    assert_eq!(super::parse_env::<bool>("BOOL", true).unwrap(), true);
    assert_eq!(super::parse_env::<IpAddr>("IP", IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4))).unwrap(), IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)));

    assert!(matches!(super::parse_env::<u32>("BOOL", 0), Err(_)));

    unsafe {
      env::remove_var("INT");
      env::remove_var("BOOL");
      env::remove_var("IP");
    }
  }

  #[test]
  fn tracing_exporter_from_str() {
    assert!(matches!("otlp".parse(), Ok(TracingExporter::Otlp)));
    assert!(matches!("other".parse::<TracingExporter>(), Err(_)));
  }
}
