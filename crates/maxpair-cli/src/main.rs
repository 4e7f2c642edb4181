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

use anyhow::Result;
use clap::Parser;
use maxpair::{SelectionStatistics, Strategy, strategy::brute_force::BRUTE_FORCE_PRACTICAL_LIMIT};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(cli::log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .init();

    let cli = Cli::parse();
    let sequence = cli.sequence();
    tracing::info!(
        len = sequence.len(),
        random = cli.random,
        "generated input sequence"
    );

    for strategy in cli.selected_strategies() {
        if strategy == Strategy::BruteForce
            && sequence.len() > BRUTE_FORCE_PRACTICAL_LIMIT
            && !cli.force
        {
            tracing::warn!(
                len = sequence.len(),
                limit = BRUTE_FORCE_PRACTICAL_LIMIT,
                "skipping brute-force on a large input; pass --force to run it anyway"
            );
            continue;
        }

        let mut stats = SelectionStatistics::default();
        let product = strategy
            .select_with_stats(&sequence, &mut stats)
            .and_then(|pair| pair.product())
            .map_err(|e| anyhow::anyhow!("{} failed: {}", strategy, e))?;

        tracing::debug!(
            %strategy,
            comparisons = stats.comparisons,
            elapsed = ?stats.time_total,
            "strategy finished"
        );

        println!("{}: {}", strategy, product);
        if cli.stats {
            print!("{}", stats);
        }
    }

    Ok(())
}
