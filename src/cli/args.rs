use crate::THINK_MAX_MS;
use crate::THINK_MIN_MS;
use crate::gameroom::*;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play zhithead against the bot", long_about = None)]
pub struct Args {
    #[arg(long, help = "Seed the shuffle for a repeatable game")]
    pub seed: Option<u64>,
    #[arg(long, help = "Resolve plays and bot turns without pausing")]
    pub fast: bool,
    #[arg(long, default_value_t = THINK_MIN_MS, help = "Shortest bot thinking time in ms")]
    pub think_min: u64,
    #[arg(long, default_value_t = THINK_MAX_MS, help = "Longest bot thinking time in ms")]
    pub think_max: u64,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let seed = args.seed.unwrap_or_else(rand::random);
        match args.fast {
            true => Config::instant(seed),
            false => Config {
                seed,
                thinking: Thinking {
                    min: Duration::from_millis(args.think_min),
                    max: Duration::from_millis(args.think_max.max(args.think_min)),
                },
                tempo: Some(Tempo::default()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["zhithead"]).unwrap();
        assert_eq!(args.seed, None);
        assert!(!args.fast);
        let config = Config::from(args);
        assert_eq!(config.thinking, Thinking::default());
        assert_eq!(config.tempo, Some(Tempo::default()));
    }

    #[test]
    fn fast_drops_all_pacing() {
        let args = Args::try_parse_from(["zhithead", "--seed", "9", "--fast"]).unwrap();
        let config = Config::from(args);
        assert_eq!(config.seed, 9);
        assert_eq!(config.thinking, Thinking::instant());
        assert_eq!(config.tempo, None);
    }

    #[test]
    fn inverted_window_collapses() {
        let args =
            Args::try_parse_from(["zhithead", "--think-min", "500", "--think-max", "100"]).unwrap();
        let config = Config::from(args);
        assert_eq!(config.thinking.min, config.thinking.max);
    }
}
