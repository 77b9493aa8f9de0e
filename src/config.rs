use std::path::PathBuf;

use anyhow::{Result, anyhow};

use crate::competition::CompetitionOverrides;
use crate::fixtures::{DEFAULT_TEAM_MARKER, FeedOptions};

pub const ENV_ICS_URL: &str = "LFC_ICS_URL";
pub const ENV_TEAM_MARKER: &str = "LFC_TEAM_MARKER";
pub const ENV_DATA_DIR: &str = "LFC_DATA_DIR";
pub const ENV_PUBLIC_DIR: &str = "LFC_PUBLIC_DIR";
pub const ENV_OVERRIDES: &str = "LFC_OVERRIDES";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_PUBLIC_DIR: &str = "public/data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Url(String),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: FeedSource,
    pub team_marker: String,
    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
    pub overrides_path: Option<PathBuf>,
    pub dry_run: bool,
}

impl Config {
    /// Read `.env.local`/`.env`, then the process environment and arguments.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");
        let args = std::env::args().skip(1).collect::<Vec<_>>();
        Self::from_parts(&args, |key| std::env::var(key).ok())
    }

    pub fn from_parts<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let source = match arg_value(args, "--ics") {
            Some(path) => FeedSource::File(PathBuf::from(path)),
            None => {
                let url = env(ENV_ICS_URL).ok_or_else(|| {
                    anyhow!("missing {ENV_ICS_URL} env var (or pass --ics <file>)")
                })?;
                FeedSource::Url(url.trim().to_string())
            }
        };

        let data_dir = arg_value(args, "--out")
            .or_else(|| env(ENV_DATA_DIR))
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let public_dir = env(ENV_PUBLIC_DIR).unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string());

        Ok(Self {
            source,
            team_marker: env(ENV_TEAM_MARKER).unwrap_or_else(|| DEFAULT_TEAM_MARKER.to_string()),
            data_dir: PathBuf::from(data_dir),
            public_dir: PathBuf::from(public_dir),
            overrides_path: env(ENV_OVERRIDES).map(PathBuf::from),
            dry_run: args.iter().any(|a| a == "--dry-run"),
        })
    }

    /// Built-in overrides, with the optional override file merged on top.
    pub fn feed_options(&self) -> Result<FeedOptions> {
        let mut overrides = CompetitionOverrides::builtin();
        if let Some(path) = &self.overrides_path {
            let entries = CompetitionOverrides::load_json(path)?;
            overrides.extend(&entries);
        }
        Ok(FeedOptions::new(&self.team_marker, overrides))
    }

    /// Primary data directory first, then the public mirror.
    pub fn output_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.data_dir.clone()];
        if self.public_dir != self.data_dir {
            dirs.push(self.public_dir.clone());
        }
        dirs
    }
}

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == flag {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(next.to_string());
            }
        }
    }
    None
}
