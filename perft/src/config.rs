//! Command-line configuration.

use std::str::FromStr;

use tracing::Level;

use crate::error::ConfigError;

/// Rook and king against a bare king.
pub const DEFAULT_FEN: &str = "4k3/8/8/8/8/8/8/R3K3 w";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub fen: String,
    pub depth: u32,
    /// Report per-root-move counts instead of a count per depth.
    pub divide: bool,
    /// Worker threads; 0 lets rayon decide.
    pub threads: usize,
    /// Machine-readable output without colour or progress bars.
    pub plain: bool,
    /// Number of random make/unmake walks to run instead of counting.
    pub soak: Option<u32>,
    pub seed: Option<u64>,
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fen: DEFAULT_FEN.to_string(),
            depth: 4,
            divide: false,
            threads: 0,
            plain: false,
            soak: None,
            seed: None,
            verbosity: 0,
        }
    }
}

fn number<T: FromStr>(flag: &'static str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value.ok_or(ConfigError::MissingValue(flag))?;
    value.parse().map_err(|_| ConfigError::InvalidNumber { flag, value })
}

impl Config {
    /// Parse arguments, excluding the program name.
    ///
    /// `--fen` takes every following word up to the next flag, so a full FEN
    /// string can be passed without quoting.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut args = args.into_iter().peekable();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fen" => {
                    let mut fields = Vec::new();
                    while let Some(field) = args.next_if(|a| !a.starts_with("--") && !is_verbosity(a)) {
                        fields.push(field);
                    }
                    if fields.is_empty() {
                        return Err(ConfigError::MissingValue("--fen"));
                    }
                    config.fen = fields.join(" ");
                }
                "--depth" => config.depth = number("--depth", args.next())?,
                "--threads" => config.threads = number("--threads", args.next())?,
                "--soak" => config.soak = Some(number("--soak", args.next())?),
                "--seed" => config.seed = Some(number("--seed", args.next())?),
                "--divide" => config.divide = true,
                "--plain" => config.plain = true,
                a if is_verbosity(a) => {
                    #[allow(clippy::cast_possible_truncation)]
                    let count = (a.len() - 1) as u8;
                    config.verbosity = config.verbosity.saturating_add(count);
                }
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(config)
    }

    /// Most verbose level to log: warnings by default, each `-v` one step more.
    pub const fn log_level(&self) -> Level {
        match self.verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn is_verbosity(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-') && arg[1..].bytes().all(|b| b == b'v')
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::{Config, DEFAULT_FEN};
    use crate::error::ConfigError;

    fn parse(args: &str) -> Result<Config, ConfigError> {
        Config::from_args(args.split_whitespace().map(String::from))
    }

    #[test]
    fn defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.fen, DEFAULT_FEN);
        assert_eq!(config.depth, 4);
        assert_eq!(config.log_level(), Level::WARN);
    }

    #[test]
    fn fen_spans_words() {
        let config = parse("--fen 8/8/8/8/8/8/8/R3K3 b - - 0 1 --depth 2 --divide").unwrap();
        assert_eq!(config.fen, "8/8/8/8/8/8/8/R3K3 b - - 0 1");
        assert_eq!(config.depth, 2);
        assert!(config.divide);
    }

    #[test]
    fn flags_and_numbers() {
        let config = parse("--plain --threads 3 --soak 100 --seed 42 -vv").unwrap();
        assert!(config.plain);
        assert_eq!(config.threads, 3);
        assert_eq!(config.soak, Some(100));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level(), Level::DEBUG);

        let config = parse("-v -vv").unwrap();
        assert_eq!(config.log_level(), Level::TRACE);
    }

    #[test]
    fn bad_arguments() {
        assert_eq!(parse("--depth"), Err(ConfigError::MissingValue("--depth")));
        assert_eq!(parse("--fen --divide"), Err(ConfigError::MissingValue("--fen")));
        assert_eq!(
            parse("--depth four"),
            Err(ConfigError::InvalidNumber { flag: "--depth", value: "four".to_string() })
        );
        assert_eq!(parse("--threads -1"), Err(ConfigError::InvalidNumber { flag: "--threads", value: "-1".to_string() }));
        assert_eq!(parse("--fast"), Err(ConfigError::UnknownArgument("--fast".to_string())));
        assert_eq!(parse("-x"), Err(ConfigError::UnknownArgument("-x".to_string())));
    }
}
