//! Runtime configuration: `CUPMATCH_*` environment variables, then command-line flags.

use anyhow::{anyhow, Result};

use crate::core::ScoringRules;
use crate::types::{GestureMode, DEFAULT_ITEM_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Item count of the first round.
    pub items: usize,
    /// RNG seed; derived from the clock when unset.
    pub seed: Option<u32>,
    pub gesture: GestureMode,
    /// Scoring preset name (`canonical` or `flat`).
    pub scoring: String,
    pub log_path: Option<String>,
    pub headless: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            items: DEFAULT_ITEM_COUNT,
            seed: None,
            gesture: GestureMode::Drag,
            scoring: String::from("canonical"),
            log_path: None,
            headless: false,
        }
    }
}

impl AppConfig {
    /// Read the environment. Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let items = lookup("CUPMATCH_ITEMS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.items);

        let seed = lookup("CUPMATCH_SEED").and_then(|s| s.trim().parse().ok());

        let gesture = lookup("CUPMATCH_GESTURE")
            .and_then(|s| GestureMode::parse(s.trim()))
            .unwrap_or(defaults.gesture);

        let scoring = lookup("CUPMATCH_SCORING")
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| ScoringRules::from_preset(s).is_some())
            .unwrap_or(defaults.scoring);

        let log_path = lookup("CUPMATCH_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            items,
            seed,
            gesture,
            scoring,
            log_path,
            headless: false,
        }
    }

    /// Apply command-line flags on top of `self`. `args` excludes the program name.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--items" => {
                    let v = flag_value(args, &mut i, "--items")?;
                    self.items = v
                        .parse::<usize>()
                        .map_err(|_| anyhow!("invalid --items value: {}", v))?;
                }
                "--seed" => {
                    let v = flag_value(args, &mut i, "--seed")?;
                    self.seed = Some(
                        v.parse::<u32>()
                            .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                    );
                }
                "--gesture" => {
                    let v = flag_value(args, &mut i, "--gesture")?;
                    self.gesture = GestureMode::parse(v)
                        .ok_or_else(|| anyhow!("invalid --gesture value: {} (drag|click)", v))?;
                }
                "--scoring" => {
                    let v = flag_value(args, &mut i, "--scoring")?.to_ascii_lowercase();
                    if ScoringRules::from_preset(&v).is_none() {
                        return Err(anyhow!("invalid --scoring value: {} (canonical|flat)", v));
                    }
                    self.scoring = v;
                }
                "--log" => {
                    self.log_path = Some(flag_value(args, &mut i, "--log")?.to_string());
                }
                "--headless" => self.headless = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(self)
    }

    /// Resolved scoring rules; unknown presets were rejected during parsing.
    pub fn rules(&self) -> ScoringRules {
        ScoringRules::from_preset(&self.scoring).unwrap_or_default()
    }
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}
