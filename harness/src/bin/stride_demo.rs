//! Prints stride search results for the demonstration samples.
//!
//! Usage: `stride_demo`
//!
//! For each default needle, one line per sample with the stride index (or
//! `-1`), then the element at every found index. Ends with the verdict of
//! the bisect/stride comparison.

use std::process::ExitCode;

use stride_harness::policy::PolicyConfig;
use stride_harness::report::render_index;
use stride_harness::runner::run_suite;
use stride_harness::samples::default_samples;
use stride_kernel::search::Strategy;

fn main() -> ExitCode {
    let samples = default_samples();
    let report = match run_suite(&samples, &PolicyConfig::default()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("stride_demo: {e}");
            return ExitCode::FAILURE;
        }
    };

    for &needle in &report.policy.needles {
        println!("needle {needle}");
        let found: Vec<_> = samples
            .iter()
            .filter_map(|sample| {
                let probe = report.probe(&sample.name, needle)?;
                Some((sample, probe.result(Strategy::Stride)))
            })
            .collect();
        for (sample, index) in &found {
            println!("  {} -> {}", sample.name, render_index(*index));
        }
        for (sample, index) in &found {
            if let Some(i) = *index {
                println!("  {}[{i}] = {}", sample.name, sample.values[i]);
            }
        }
    }

    println!("verdict={}", report.verdict().as_str());
    ExitCode::SUCCESS
}
