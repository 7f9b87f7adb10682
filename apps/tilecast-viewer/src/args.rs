//! Command line parsing.

use anyhow::{anyhow, bail, Context};
use glam::DVec2;
use tilecast_dda::Strategy;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerArgs {
    pub map: Option<String>,
    pub config: Option<String>,
    pub output: String,
    pub position: Option<DVec2>,
    /// Degrees.
    pub angle: f64,
    pub strategy: Option<Strategy>,
    pub frames: u64,
    /// Degrees per frame.
    pub turn: f64,
    pub no_minimap: bool,
}

impl Default for ViewerArgs {
    fn default() -> Self {
        Self {
            map: None,
            config: None,
            output: "tilecast_{}.png".to_string(),
            position: None,
            angle: 0.0,
            strategy: None,
            frames: 1,
            turn: 0.0,
            no_minimap: false,
        }
    }
}

impl ViewerArgs {
    /// Parse from a slice of arguments, the first being the program name.
    pub fn parse_args(args: &[String]) -> anyhow::Result<Self> {
        let mut parsed = Self::default();

        let mut i = 1;
        while i < args.len() {
            let flag = args[i].as_str();
            let mut value = || {
                i += 1;
                args.get(i)
                    .cloned()
                    .ok_or_else(|| anyhow!("missing value for {flag}"))
            };

            match flag {
                "--map" => parsed.map = Some(value()?),
                "--config" => parsed.config = Some(value()?),
                "-o" | "--output" => parsed.output = value()?,
                "--pos" => parsed.position = Some(parse_position(&value()?)?),
                "--angle" => {
                    parsed.angle = value()?.parse().context("--angle expects degrees")?;
                }
                "--strategy" => parsed.strategy = Some(value()?.parse()?),
                "--frames" => {
                    parsed.frames = value()?.parse().context("--frames expects a count")?;
                }
                "--turn" => {
                    parsed.turn = value()?.parse().context("--turn expects degrees")?;
                }
                "--no-minimap" => parsed.no_minimap = true,
                other => bail!("unknown argument {other}, see --help"),
            }
            i += 1;
        }

        Ok(parsed)
    }
}

/// Parse `"x,y"` into a position.
fn parse_position(s: &str) -> anyhow::Result<DVec2> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("position must look like X,Y, got {s}"))?;
    Ok(DVec2::new(
        x.trim().parse().context("invalid x coordinate")?,
        y.trim().parse().context("invalid y coordinate")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("tilecast-viewer")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn defaults_without_flags() {
        assert_eq!(ViewerArgs::parse_args(&args(&[])).unwrap(), ViewerArgs::default());
    }

    #[test]
    fn parse_all_flags() {
        let parsed = ViewerArgs::parse_args(&args(&[
            "--map", "level.txt", "-o", "out_{}.png", "--pos", "3.5, 4.5", "--angle", "90",
            "--strategy", "exact", "--frames", "4", "--turn", "15", "--no-minimap",
        ]))
        .unwrap();

        assert_eq!(parsed.map.as_deref(), Some("level.txt"));
        assert_eq!(parsed.output, "out_{}.png");
        assert_eq!(parsed.position, Some(DVec2::new(3.5, 4.5)));
        assert_eq!(parsed.angle, 90.0);
        assert_eq!(parsed.strategy, Some(Strategy::Exact));
        assert_eq!(parsed.frames, 4);
        assert_eq!(parsed.turn, 15.0);
        assert!(parsed.no_minimap);
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(ViewerArgs::parse_args(&args(&["--map"])).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(ViewerArgs::parse_args(&args(&["--fullscreen"])).is_err());
    }

    #[test]
    fn bad_position_is_an_error() {
        assert!(ViewerArgs::parse_args(&args(&["--pos", "3.5"])).is_err());
    }
}
