//! Runner configuration from environment variables and command-line arguments.
//!
//! # Environment Variables
//!
//! - `LANE_DODGE_TICK_MS`: scheduler period in milliseconds (default: 180)
//! - `LANE_DODGE_SEED`: spawn RNG seed (default: derived from the clock)
//! - `LANE_DODGE_ASSETS`: sprite directory (default: "assets")
//! - `LANE_DODGE_LOG_PATH`: append log records to this file (default: unset, no logging)
//! - `LANE_DODGE_LOG_LEVEL`: `error`, `warn`, `info`, `debug` or `trace` (default: info)
//!
//! Malformed environment values fall back to the defaults. Command-line flags
//! override the environment and are validated strictly.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Result};
use log::LevelFilter;

use crate::types::TICK_MS;

pub const USAGE: &str = "\
usage: lane-dodge [--seed N] [--tick-ms N] [--assets DIR]
       lane-dodge headless [--ticks N] [--seed N]

keys:  <- / h / a   move left
       -> / l / d   move right
       ENTER / r    restart
       q / Esc      quit";

/// Default number of ticks for a headless run.
pub const DEFAULT_HEADLESS_TICKS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Interactive terminal game.
    Play,
    /// Simulate without a terminal and print one JSON line per tick.
    Headless { ticks: u32 },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    pub tick_ms: u32,
    pub seed: u32,
    pub assets_dir: PathBuf,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl RunConfig {
    /// Create from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = lookup("LANE_DODGE_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(TICK_MS);

        let seed = lookup("LANE_DODGE_SEED")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or_else(clock_seed);

        let assets_dir = lookup("LANE_DODGE_ASSETS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("assets"));

        let log_path = lookup("LANE_DODGE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_level = lookup("LANE_DODGE_LOG_LEVEL")
            .and_then(|s| s.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            mode: Mode::Play,
            tick_ms,
            seed,
            assets_dir,
            log_path,
            log_level,
        }
    }

    /// Apply command-line arguments (without the program name).
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut rest = args;
        if let Some(first) = rest.first() {
            if first == "headless" {
                self.mode = Mode::Headless {
                    ticks: DEFAULT_HEADLESS_TICKS,
                };
                rest = &rest[1..];
            }
        }

        let mut i = 0usize;
        while i < rest.len() {
            let flag = rest[i].as_str();
            match flag {
                "-h" | "--help" => {
                    self.mode = Mode::Help;
                }
                "--seed" => {
                    i += 1;
                    self.seed = parse_value(flag, rest.get(i))?;
                }
                "--tick-ms" => {
                    i += 1;
                    let ms: u32 = parse_value(flag, rest.get(i))?;
                    if ms == 0 {
                        bail!("--tick-ms must be greater than zero");
                    }
                    self.tick_ms = ms;
                }
                "--assets" => {
                    i += 1;
                    let dir = rest
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --assets"))?;
                    self.assets_dir = PathBuf::from(dir);
                }
                "--ticks" => {
                    i += 1;
                    let ticks = parse_value(flag, rest.get(i))?;
                    match self.mode {
                        Mode::Headless { .. } => self.mode = Mode::Headless { ticks },
                        _ => bail!("--ticks is only valid in headless mode"),
                    }
                }
                other => bail!("unknown argument: {}", other),
            }
            i += 1;
        }

        Ok(self)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T> {
    let v = value.ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> RunConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RunConfig::from_lookup(|key| map.get(key).cloned())
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_environment() {
        let cfg = env(&[]);
        assert_eq!(cfg.mode, Mode::Play);
        assert_eq!(cfg.tick_ms, 180);
        assert_eq!(cfg.assets_dir, PathBuf::from("assets"));
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_level, LevelFilter::Info);
    }

    #[test]
    fn environment_values_are_used() {
        let cfg = env(&[
            ("LANE_DODGE_TICK_MS", "90"),
            ("LANE_DODGE_SEED", "77"),
            ("LANE_DODGE_ASSETS", "/tmp/cars"),
            ("LANE_DODGE_LOG_PATH", "dodge.log"),
            ("LANE_DODGE_LOG_LEVEL", "debug"),
        ]);
        assert_eq!(cfg.tick_ms, 90);
        assert_eq!(cfg.seed, 77);
        assert_eq!(cfg.assets_dir, PathBuf::from("/tmp/cars"));
        assert_eq!(cfg.log_path, Some(PathBuf::from("dodge.log")));
        assert_eq!(cfg.log_level, LevelFilter::Debug);
    }

    #[test]
    fn malformed_environment_falls_back() {
        let cfg = env(&[
            ("LANE_DODGE_TICK_MS", "0"),
            ("LANE_DODGE_LOG_PATH", "   "),
            ("LANE_DODGE_LOG_LEVEL", "loud"),
        ]);
        assert_eq!(cfg.tick_ms, 180);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_level, LevelFilter::Info);
    }

    #[test]
    fn flags_override_environment() {
        let cfg = env(&[("LANE_DODGE_SEED", "1")])
            .apply_args(&args(&["--seed", "42", "--tick-ms", "50", "--assets", "art"]))
            .unwrap();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.tick_ms, 50);
        assert_eq!(cfg.assets_dir, PathBuf::from("art"));
    }

    #[test]
    fn headless_subcommand() {
        let cfg = env(&[]).apply_args(&args(&["headless"])).unwrap();
        assert_eq!(
            cfg.mode,
            Mode::Headless {
                ticks: DEFAULT_HEADLESS_TICKS
            }
        );

        let cfg = env(&[])
            .apply_args(&args(&["headless", "--ticks", "25", "--seed", "3"]))
            .unwrap();
        assert_eq!(cfg.mode, Mode::Headless { ticks: 25 });
        assert_eq!(cfg.seed, 3);
    }

    #[test]
    fn invalid_flags_are_errors() {
        assert!(env(&[]).apply_args(&args(&["--seed"])).is_err());
        assert!(env(&[]).apply_args(&args(&["--seed", "x"])).is_err());
        assert!(env(&[]).apply_args(&args(&["--tick-ms", "0"])).is_err());
        assert!(env(&[]).apply_args(&args(&["--ticks", "5"])).is_err());
        assert!(env(&[]).apply_args(&args(&["--fast"])).is_err());
    }

    #[test]
    fn help_flag() {
        let cfg = env(&[]).apply_args(&args(&["--help"])).unwrap();
        assert_eq!(cfg.mode, Mode::Help);
    }
}
