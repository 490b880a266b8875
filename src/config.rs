//! Runtime configuration parsed from the command line.

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::DrainOrder;
use crate::types::DEFAULT_FPS;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about)]
pub struct Config {
    /// Simulation steps per second
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub fps: u32,

    /// Apply queued moves oldest-first instead of newest-first
    #[arg(long)]
    pub fifo_input: bool,

    /// Terminal columns per tile
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=4))]
    pub cell_width: u16,

    /// Write logs to this file (the terminal is busy drawing the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            fifo_input: false,
            cell_width: 2,
            log_file: None,
        }
    }
}

impl Config {
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(1000 / self.fps.max(1) as u64)
    }

    pub fn drain_order(&self) -> DrainOrder {
        if self.fifo_input {
            DrainOrder::Fifo
        } else {
            DrainOrder::Lifo
        }
    }

    /// Install the global logger.
    ///
    /// With `--log-file` logs go to that file. Otherwise logging stays off
    /// unless `RUST_LOG` is set, in which case stderr is used.
    pub fn init_logging(&self) -> Result<()> {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
        match &self.log_file {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("creating log file {}", path.display()))?;
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            None if std::env::var_os("RUST_LOG").is_some() => {}
            None => {
                builder.filter_level(log::LevelFilter::Off);
            }
        }
        builder.try_init().context("installing logger")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_thirty_hz_lifo() {
        let cfg = Config::try_parse_from(["tui-boulder"]).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.tick_duration(), Duration::from_millis(33));
        assert_eq!(cfg.drain_order(), DrainOrder::Lifo);
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = Config::try_parse_from([
            "tui-boulder",
            "--fps",
            "60",
            "--fifo-input",
            "--cell-width",
            "1",
            "--log-file",
            "boulder.log",
        ])
        .unwrap();
        assert_eq!(cfg.tick_duration(), Duration::from_millis(16));
        assert_eq!(cfg.drain_order(), DrainOrder::Fifo);
        assert_eq!(cfg.cell_width, 1);
        assert_eq!(cfg.log_file, Some(PathBuf::from("boulder.log")));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(Config::try_parse_from(["tui-boulder", "--fps", "0"]).is_err());
        assert!(Config::try_parse_from(["tui-boulder", "--cell-width", "9"]).is_err());
    }
}
