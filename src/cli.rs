//! Command-line overrides for the terminal host.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::GameConfig;
use crate::term::GameView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub seed: Option<u32>,
    pub width: Option<u8>,
    pub height: Option<u8>,
    /// Terminal columns per board cell
    pub cell_width: Option<u16>,
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

/// Parse `--seed N`, `--width N`, `--height N` and `--cell-width N`
/// (program name excluded).
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--seed" => {
                i += 1;
                let v = value(args, i, flag)?;
                out.seed = Some(
                    v.parse()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--width" | "--height" => {
                i += 1;
                let v = value(args, i, flag)?;
                let n: u8 = v
                    .parse()
                    .map_err(|_| anyhow!("invalid {} value: {}", flag, v))?;
                if flag == "--width" {
                    out.width = Some(n);
                } else {
                    out.height = Some(n);
                }
            }
            "--cell-width" => {
                i += 1;
                let v = value(args, i, flag)?;
                let n: u16 = v
                    .parse()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| anyhow!("invalid --cell-width value: {}", v))?;
                out.cell_width = Some(n);
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(out)
}

impl CliArgs {
    /// Apply flags on top of `config`; seed 0 is replaced by a clock-derived one.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        if config.seed == 0 {
            config.seed = clock_seed();
        }
        config
    }

    /// Board view with the requested cell width, one row per cell.
    pub fn view(&self) -> GameView {
        self.cell_width
            .map(|w| GameView::new(w, 1))
            .unwrap_or_default()
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    // Fold to 32 bits; never 0.
    ((nanos ^ (nanos >> 32)) as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_all_flags() {
        let parsed = parse_args(&args(&[
            "--seed",
            "42",
            "--width",
            "8",
            "--height",
            "5",
            "--cell-width",
            "5",
        ]))
        .unwrap();
        assert_eq!(
            parsed,
            CliArgs {
                seed: Some(42),
                width: Some(8),
                height: Some(5),
                cell_width: Some(5),
            }
        );
        assert_eq!(parsed.view(), GameView::new(5, 1));
        assert_eq!(CliArgs::default().view(), GameView::default());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["--width", "wide"])).is_err());
        assert!(parse_args(&args(&["--height", "300"])).is_err());
        assert!(parse_args(&args(&["--cell-width", "0"])).is_err());
        assert!(parse_args(&args(&["--speed", "1"])).is_err());
    }

    #[test]
    fn flags_override_config_and_zero_seed_is_replaced() {
        let base = GameConfig::default().with_seed(9);
        let cfg = CliArgs {
            width: Some(7),
            ..CliArgs::default()
        }
        .apply(base);
        assert_eq!((cfg.width, cfg.height, cfg.seed), (7, 6, 9));

        let cfg = CliArgs {
            seed: Some(0),
            ..CliArgs::default()
        }
        .apply(GameConfig::default());
        assert_ne!(cfg.seed, 0);
    }
}
