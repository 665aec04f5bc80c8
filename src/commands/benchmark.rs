//! Benchmark command
//!
//! Runs the best-word search over many random draws and reports how good
//! the best words are and how fast the search runs.

use crate::core::Draw;
use crate::game::{DrawPolicy, find_best_word};
use crate::wordlists::SetDictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    pub seed: u64,
    pub policy: DrawPolicy,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            policy: DrawPolicy::Weighted,
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_draws: usize,
    pub dictionary_size: usize,
    pub average_best: f64,
    pub min_best: i32,
    pub max_best: i32,
    /// Number of draws whose best word reaches each total
    pub distribution: BTreeMap<i32, usize>,
    /// Draws whose best word uses every letter in order
    pub perfect_draws: usize,
    pub hardest_draw: Option<(Draw, i32)>,
    pub duration: Duration,
    pub draws_per_second: f64,
}

/// Generate the draws for a benchmark, reproducibly from the seed
#[must_use]
pub fn generate_draws(config: &BenchmarkConfig) -> Vec<Draw> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|_| config.policy.generate(&mut rng))
        .collect()
}

/// Run the best-word search on every draw
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_benchmark(
    dictionary: &SetDictionary,
    draws: &[Draw],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(draws.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut totals = Vec::with_capacity(draws.len());
    let mut distribution: BTreeMap<i32, usize> = BTreeMap::new();
    let mut perfect_draws = 0;
    let mut hardest_draw: Option<(Draw, i32)> = None;

    for (idx, draw) in draws.iter().enumerate() {
        let Some(best) = find_best_word(draw, dictionary.words()) else {
            pb.inc(1);
            continue;
        };

        let total = best.total();
        totals.push(total);
        *distribution.entry(total).or_insert(0) += 1;

        if best.score.order_bonus && best.score.insertions == 0 {
            perfect_draws += 1;
        }
        if hardest_draw.is_none_or(|(_, worst)| total < worst) {
            hardest_draw = Some((*draw, total));
        }

        if idx % 10 == 0 {
            let avg = totals.iter().map(|&t| f64::from(t)).sum::<f64>() / totals.len() as f64;
            pb.set_message(format!("Avg best: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_draws = totals.len();
    let average_best = if total_draws > 0 {
        totals.iter().map(|&t| f64::from(t)).sum::<f64>() / total_draws as f64
    } else {
        0.0
    };

    info!(
        draws = total_draws,
        average_best,
        elapsed_ms = duration.as_millis() as u64,
        "benchmark finished"
    );

    BenchmarkResult {
        total_draws,
        dictionary_size: dictionary.len(),
        average_best,
        min_best: totals.iter().copied().min().unwrap_or(0),
        max_best: totals.iter().copied().max().unwrap_or(0),
        distribution,
        perfect_draws,
        hardest_draw,
        duration,
        draws_per_second: total_draws as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::embedded_dictionary;

    #[test]
    fn generated_draws_are_reproducible() {
        let config = BenchmarkConfig::new(20, 1234);
        assert_eq!(generate_draws(&config), generate_draws(&config));
        assert_eq!(generate_draws(&config).len(), 20);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_draws(&BenchmarkConfig::new(20, 1));
        let b = generate_draws(&BenchmarkConfig::new(20, 2));
        assert_ne!(a, b);
    }

    #[test]
    fn benchmark_runs() {
        let dict = embedded_dictionary();
        let draws = generate_draws(&BenchmarkConfig::new(10, 7));
        let result = run_benchmark(&dict, &draws, false);

        assert_eq!(result.total_draws, 10);
        assert_eq!(result.dictionary_size, dict.len());
        assert!(result.max_best <= 15);
        assert!(result.min_best <= result.max_best);
        assert!(result.hardest_draw.is_some());
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dict = embedded_dictionary();
        let draws = generate_draws(&BenchmarkConfig::new(10, 7));
        let result = run_benchmark(&dict, &draws, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_draws);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let dict = embedded_dictionary();
        let draws = generate_draws(&BenchmarkConfig::new(10, 99));
        let result = run_benchmark(&dict, &draws, false);

        assert!(result.average_best >= f64::from(result.min_best));
        assert!(result.average_best <= f64::from(result.max_best));
        assert!(result.perfect_draws <= result.total_draws);
        assert_eq!(result.hardest_draw.map(|(_, t)| t), Some(result.min_best));
    }

    #[test]
    fn benchmark_known_draws() {
        let dict = embedded_dictionary();
        let draws: Vec<Draw> = ["RAME", "BANE", "TRPL"]
            .iter()
            .map(|d| d.parse().unwrap())
            .collect();
        let result = run_benchmark(&dict, &draws, false);

        assert_eq!(result.max_best, 15);
        assert_eq!(result.distribution.get(&15), Some(&1));
        assert_eq!(result.perfect_draws, 1);
    }

    #[test]
    fn benchmark_empty_dictionary() {
        let dict = SetDictionary::default();
        let draws = generate_draws(&BenchmarkConfig::new(5, 7));
        let result = run_benchmark(&dict, &draws, false);

        assert_eq!(result.total_draws, 0);
        assert!(result.distribution.is_empty());
        assert!(result.hardest_draw.is_none());
        assert!(result.average_best.abs() < f64::EPSILON);
    }
}
