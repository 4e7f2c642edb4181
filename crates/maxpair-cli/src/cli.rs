// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Command-line configuration of the `maxpair` demonstration binary.

use clap::Parser;
use maxpair::Strategy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

/// Default length of the demonstration input `1..=len`.
pub const DEFAULT_LEN: u64 = 200_000;

/// Log level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Builds the log filter from `RUST_LOG`-style directives, falling back to
/// `DEFAULT_LOG_LEVEL`.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[derive(Debug, Parser)]
#[command(name = "maxpair")]
#[command(version, about = "Compare maximum pairwise product strategies on a generated input")]
pub struct Cli {
    /// Number of elements; the input is 1..=len unless --random is set
    #[arg(long, default_value_t = DEFAULT_LEN)]
    pub len: u64,

    /// Draw the elements from a seeded random generator instead
    #[arg(long)]
    pub random: bool,

    /// Seed for --random
    #[arg(long, default_value_t = 42, requires = "random")]
    pub seed: u64,

    /// Largest value drawn with --random
    #[arg(long, default_value_t = 100_000, requires = "random")]
    pub max_value: u64,

    /// Strategy to run (repeatable): brute-force, linear-scan, partition, tournament
    #[arg(long = "strategy", short, value_parser = parse_strategy)]
    pub strategies: Vec<Strategy>,

    /// Run brute force even on inputs beyond its practical limit
    #[arg(long)]
    pub force: bool,

    /// Print the selection statistics of every run
    #[arg(long)]
    pub stats: bool,
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

impl Cli {
    /// The strategies to run in the order given, without repeats;
    /// `linear-scan` and `partition` when none is given.
    pub fn selected_strategies(&self) -> Vec<Strategy> {
        if self.strategies.is_empty() {
            return vec![Strategy::LinearScan, Strategy::Partition];
        }

        let mut strategies = Vec::with_capacity(self.strategies.len());
        for &strategy in &self.strategies {
            if !strategies.contains(&strategy) {
                strategies.push(strategy);
            }
        }
        strategies
    }

    /// Builds the input sequence described by the arguments.
    pub fn sequence(&self) -> Vec<u64> {
        if self.random {
            let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
            (0..self.len)
                .map(|_| rng.random_range(0..=self.max_value))
                .collect()
        } else {
            (1..=self.len).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["maxpair"]);
        assert_eq!(cli.len, DEFAULT_LEN);
        assert!(!cli.random);
        assert_eq!(
            cli.selected_strategies(),
            vec![Strategy::LinearScan, Strategy::Partition]
        );
        let sequence = cli.sequence();
        assert_eq!(sequence.len(), 200_000);
        assert_eq!(sequence.first(), Some(&1));
        assert_eq!(sequence.last(), Some(&200_000));
    }

    #[test]
    fn test_repeated_strategies() {
        let cli = Cli::parse_from([
            "maxpair",
            "--strategy",
            "tournament",
            "-s",
            "brute-force",
            "--strategy",
            "tournament",
        ]);
        assert_eq!(
            cli.selected_strategies(),
            vec![Strategy::Tournament, Strategy::BruteForce]
        );
    }

    #[test]
    fn test_strategies_keep_given_order() {
        let cli = Cli::parse_from(["maxpair", "-s", "tournament", "-s", "linear-scan"]);
        assert_eq!(
            cli.selected_strategies(),
            vec![Strategy::Tournament, Strategy::LinearScan]
        );
    }

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_honours_debug_directive() {
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("maxpair=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(Cli::try_parse_from(["maxpair", "--strategy", "bogo"]).is_err());
    }

    #[test]
    fn test_random_sequence_is_seeded() {
        let args = ["maxpair", "--len", "50", "--random", "--seed", "7", "--max-value", "9"];
        let a = Cli::parse_from(args).sequence();
        let b = Cli::parse_from(args).sequence();
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        assert!(a.iter().all(|&x| x <= 9));
    }

    #[test]
    fn test_seed_requires_random() {
        assert!(Cli::try_parse_from(["maxpair", "--seed", "7"]).is_err());
    }
}
