//! Flag handling for ab-run.

use clap::Parser;

use ab_policy::BoardingPolicy;
use ab_sim::BatchConfig;

use crate::cli::{Cli, Command, SweepArgs};

fn batch_from(args: &[&str]) -> BatchConfig {
    let cli = Cli::try_parse_from(args).unwrap();
    match cli.command {
        Command::Batch { common, sweep } => common.batch_config(&sweep).unwrap(),
        Command::Run { common } => common.batch_config(&SweepArgs::default()).unwrap(),
    }
}

// ── Sweep overrides ───────────────────────────────────────────────────────────

#[cfg(test)]
mod sweep {
    use super::*;

    #[test]
    fn zones_reach_policies_given_on_the_command_line() {
        let batch = batch_from(&["ab-run", "batch", "--policies", "back-to-front,random", "--zones", "5"]);
        assert_eq!(
            batch.policies,
            vec![BoardingPolicy::BackToFront { zones: 5 }, BoardingPolicy::Random]
        );
    }

    #[test]
    fn explicit_zone_suffix_is_overridden_by_zones_flag() {
        let batch = batch_from(&["ab-run", "batch", "--policies", "segmented-random:2", "--zones", "4"]);
        assert_eq!(batch.policies, vec![BoardingPolicy::SegmentedRandom { zones: 4 }]);
    }

    #[test]
    fn seeds_and_rates_replace_the_template() {
        let batch = batch_from(&["ab-run", "batch", "--seeds", "7", "--rates", "0,0.25", "--seed", "40"]);
        assert_eq!(batch.seeds, 7);
        assert_eq!(batch.conformance_rates, vec![0.0, 0.25]);
        assert_eq!(batch.run.seed, 40);
        assert_eq!(batch.run_count(), 14);
    }

    #[test]
    fn single_run_flags() {
        let batch = batch_from(&[
            "ab-run", "run", "--policy", "back-to-front", "--zones", "6", "--walk-ticks", "2", "--rows", "10",
        ]);
        assert_eq!(batch.run.policy, BoardingPolicy::BackToFront { zones: 6 });
        assert_eq!(batch.run.walk_ticks_per_cell, 2);
        assert_eq!(batch.layout.rows, 10);
        assert!(batch.policies.is_empty());
    }
}
