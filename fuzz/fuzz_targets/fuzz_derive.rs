#![no_main]

use libfuzzer_sys::fuzz_target;
use tachsplit_core::options::{RoundingPolicy, SplitOptions};
use tachsplit_core::{derive, format_hours};

// Derivation and formatting must never panic, and the split invariant
// must hold for arbitrary text in either field under both policies.
fuzz_target!(|data: (&str, &str)| {
    let (start, end) = data;
    for rounding in [RoundingPolicy::Exact, RoundingPolicy::TenthsFirst] {
        let opts = SplitOptions {
            rounding,
            ..Default::default()
        };
        let totals = derive(start, end, &opts);
        assert_eq!(totals.per_person, totals.total / 2.0);
        let _ = format_hours(totals.check_in, opts.precision);
    }
});
