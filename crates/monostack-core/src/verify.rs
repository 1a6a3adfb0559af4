//! Exhaustive cross-check of the stack algorithms against the oracles.

use serde::Serialize;
use tracing::debug;

use crate::boundary::boundaries;
use crate::contribution::{contribution_sum, sum_of_subarray_ranges};
use crate::extremum::{Extremum, Relation, Side};
use crate::nearest::{nearest, nearest_circular};
use crate::oracle;

const SIDES: [Side; 2] = [Side::Previous, Side::Next];
const RELATIONS: [Relation; 4] = [
    Relation::Less,
    Relation::LessOrEqual,
    Relation::Greater,
    Relation::GreaterOrEqual,
];

/// Every sequence of length `0..=max_len` over the values `0..alphabet`, in
/// odometer order.
pub struct AllSequences {
    max_len: usize,
    alphabet: i64,
    current: Option<Vec<i64>>,
}

impl AllSequences {
    pub fn new(max_len: usize, alphabet: i64) -> Self {
        Self {
            max_len,
            alphabet: alphabet.max(1),
            current: Some(Vec::new()),
        }
    }

    fn advance(&self, seq: &[i64]) -> Option<Vec<i64>> {
        let mut next = seq.to_vec();
        for digit in next.iter_mut().rev() {
            *digit += 1;
            if *digit < self.alphabet {
                return Some(next);
            }
            *digit = 0;
        }
        // Every digit wrapped: move on to the next length.
        (seq.len() < self.max_len).then(|| vec![0; seq.len() + 1])
    }
}

impl Iterator for AllSequences {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Vec<i64>> {
        let seq = self.current.take()?;
        self.current = self.advance(&seq);
        Some(seq)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub check: String,
    pub sequence: Vec<i64>,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub sequences: usize,
    pub checks: usize,
}

/// Runs every check on one sequence. Returns the number of checks passed.
pub fn check_sequence(seq: &[i64]) -> Result<usize, Mismatch> {
    let mut checks = 0;
    let mut expect = |check: String, expected: String, actual: String| {
        checks += 1;
        if expected == actual {
            Ok(())
        } else {
            Err(Mismatch {
                check,
                sequence: seq.to_vec(),
                expected,
                actual,
            })
        }
    };

    for mode in [Extremum::Min, Extremum::Max] {
        let b = boundaries(seq, mode);
        expect(
            format!("partition/{mode}"),
            oracle::subarray_count(seq.len()).to_string(),
            b.total_subarrays().to_string(),
        )?;
        expect(
            format!("sum/{mode}"),
            oracle::extremum_sum(seq, mode).to_string(),
            contribution_sum(seq, mode).to_string(),
        )?;
    }

    expect(
        "sum/range".into(),
        oracle::sum_of_subarray_ranges(seq).to_string(),
        sum_of_subarray_ranges(seq).to_string(),
    )?;

    for side in SIDES {
        for relation in RELATIONS {
            expect(
                format!("nearest/{side}/{relation}"),
                format!("{:?}", oracle::nearest(seq, side, relation)),
                format!("{:?}", nearest(seq, side, relation)),
            )?;
            expect(
                format!("circular/{side}/{relation}"),
                format!("{:?}", oracle::nearest_circular(seq, side, relation)),
                format!("{:?}", nearest_circular(seq, side, relation)),
            )?;
        }
    }

    Ok(checks)
}

/// Checks every sequence produced by [`AllSequences`], stopping at the first
/// mismatch.
pub fn verify_exhaustive(max_len: usize, alphabet: i64) -> Result<VerifyReport, Mismatch> {
    let mut report = VerifyReport::default();
    for seq in AllSequences::new(max_len, alphabet) {
        report.checks += check_sequence(&seq)?;
        report.sequences += 1;
    }
    debug!(
        sequences = report.sequences,
        checks = report.checks,
        "exhaustive verification passed"
    );
    Ok(report)
}
