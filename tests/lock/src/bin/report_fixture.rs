//! Binary that runs the default sample suite and prints deterministic
//! `key=value` lines for cross-process verification.
//!
//! Usage: `report_fixture`

use stride_harness::policy::PolicyConfig;
use stride_harness::runner::run_suite;
use stride_harness::samples::default_samples;

fn main() {
    let report =
        run_suite(&default_samples(), &PolicyConfig::default()).expect("default suite failed");
    for line in report.render_lines().expect("report rendering failed") {
        println!("{line}");
    }
}
