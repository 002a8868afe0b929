// src/config.rs

//! Command-line and environment configuration for the exporter.

use core::time::Duration;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

use clap::{builder::BoolishValueParser, ArgAction, Parser, ValueEnum};

use crate::supervisor::{RecoveryRetry, SupervisorConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecoveryMode {
    /// Retry recovery after every further `failure-threshold` failures
    Threshold,
    /// Retry recovery on every failed poll once the threshold is reached
    Cycle,
}

impl From<RecoveryMode> for RecoveryRetry {
    fn from(mode: RecoveryMode) -> Self {
        match mode {
            RecoveryMode::Threshold => RecoveryRetry::EveryThreshold,
            RecoveryMode::Cycle => RecoveryRetry::EveryCycle,
        }
    }
}

/// SPS30 Prometheus exporter
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// HTTP listen address; ":port" listens on all interfaces
    #[arg(long, env = "METRICS_ADDR", default_value = ":2112", value_parser = parse_listen_addr)]
    pub listen_addr: SocketAddr,

    /// Interval between sensor polls (e.g. 500ms, 2s, 1m)
    #[arg(long, env = "POLL_INTERVAL", default_value = "2s", value_parser = parse_duration)]
    pub poll_interval: Duration,

    /// Expose POST /clean to start fan cleaning (true/false, yes/no, 1/0, on/off)
    #[arg(
        long,
        env = "ENABLE_CLEAN_ENDPOINT",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub enable_clean_endpoint: bool,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,

    /// Log filter directive; RUST_LOG takes precedence when set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// I2C character device
    #[arg(long, env = "I2C_BUS", default_value = "/dev/i2c-1")]
    pub i2c_bus: PathBuf,

    /// 7-bit I2C address of the sensor
    #[arg(long, env = "I2C_ADDRESS", default_value = "0x69", value_parser = parse_i2c_address)]
    pub i2c_address: u16,

    /// Consecutive failed polls before the sensor is restarted
    #[arg(long, env = "FAILURE_THRESHOLD", default_value_t = 5)]
    pub failure_threshold: u32,

    /// How a failed recovery is retried
    #[arg(long, env = "RECOVERY_MODE", value_enum, default_value_t = RecoveryMode::Threshold)]
    pub recovery_mode: RecoveryMode,
}

impl Config {
    pub fn supervisor(&self) -> SupervisorConfig {
        SupervisorConfig {
            interval: self.poll_interval,
            failure_threshold: self.failure_threshold,
            recovery_retry: self.recovery_mode.into(),
            ..SupervisorConfig::default()
        }
    }
}

/// Parses durations such as `500ms`, `2s`, `1.5m` or `1m30s`.
///
/// Zero is rejected since it cannot drive a timer.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration".to_string());
    }

    let mut total = Duration::ZERO;
    let mut rest = s;
    while !rest.is_empty() {
        let num_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(|| format!("missing unit in duration '{s}'"))?;
        let (num_str, tail) = rest.split_at(num_end);
        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);

        let value: f64 = num_str
            .parse()
            .map_err(|_| format!("invalid number '{num_str}' in duration '{s}'"))?;
        let unit_nanos = match unit {
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            _ => return Err(format!("unknown unit '{unit}' in duration '{s}'")),
        };
        let nanos = (value * unit_nanos).round();
        if !(0.0..=u64::MAX as f64).contains(&nanos) {
            return Err(format!("duration '{s}' out of range"));
        }
        total = total
            .checked_add(Duration::from_nanos(nanos as u64))
            .ok_or_else(|| format!("duration '{s}' out of range"))?;
        rest = next;
    }

    if total.is_zero() {
        return Err("duration must be greater than zero".to_string());
    }
    Ok(total)
}

/// Parses `host:port`, or `:port` for all interfaces.
pub fn parse_listen_addr(s: &str) -> Result<SocketAddr, String> {
    if let Some(port) = s.strip_prefix(':') {
        let port: u16 = port.parse().map_err(|_| format!("invalid port in '{s}'"))?;
        return Ok(SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port)));
    }
    s.parse().map_err(|e| format!("invalid listen address '{s}': {e}"))
}

/// Parses a 7-bit address given in hex (`0x69`) or decimal.
pub fn parse_i2c_address(s: &str) -> Result<u16, String> {
    let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    }
    .map_err(|_| format!("invalid I2C address '{s}'"))?;

    if value > 0x7F {
        return Err(format!("I2C address {value:#04x} is not a 7-bit address"));
    }
    Ok(value)
}
