//! Akiyama–Tanigawa rational Bernoulli number generator (C4) and its
//! resumable on-disk state (C5).
//!
//! [`BernState`] owns the generator's working row and its finished output
//! pairs. [`BernState::step`] advances exactly one inner-loop iteration;
//! [`BernState::run`] drives it to completion, calling back with progress
//! every 1024 steps the way the reference harness checkpoints. [`direct`]
//! is a one-shot convenience wrapper for callers that don't need resumable
//! state at all (see its doc comment for where that's grounded).

mod table_data;

pub mod checkpoint;
pub mod table;

use crate::bigint::BigInt;

/// Working and output state for one Bernoulli computation of size `n`
/// (computes B2, B4, ..., B(2n)).
#[derive(Debug, Clone)]
pub struct BernState {
    n: usize,
    num: Vec<BigInt>,
    den: Vec<BigInt>,
    out_num: Vec<BigInt>,
    out_den: Vec<BigInt>,
    loop_count: u64,
    produced: usize,
    outer: usize,
    inner: usize,
}

impl BernState {
    /// Fresh state targeting `n` even Bernoulli numbers (B2..B(2n)).
    pub fn new(n: usize) -> Self {
        let mut state = BernState {
            n,
            num: vec![BigInt::zero(); 2 * n + 1],
            den: vec![BigInt::zero(); 2 * n + 1],
            out_num: vec![BigInt::zero(); n],
            out_den: vec![BigInt::zero(); n],
            loop_count: 0,
            produced: 0,
            outer: 1,
            inner: 1,
        };
        state.num[0] = BigInt::one();
        state.den[0] = BigInt::one();
        state
    }

    /// Target count of even Bernoulli numbers.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of completed output pairs so far.
    pub fn produced(&self) -> usize {
        self.produced
    }

    /// Monotone step counter, used only for progress reporting.
    pub fn loop_count(&self) -> u64 {
        self.loop_count
    }

    /// `true` once `produced == n` and no further steps remain.
    pub fn is_complete(&self) -> bool {
        self.outer > 2 * self.n
    }

    /// Completed `(numerator, denominator)` pairs produced so far; element
    /// `i` is `B_{2(i+1)}`.
    pub fn results(&self) -> impl Iterator<Item = (&BigInt, &BigInt)> {
        self.out_num[..self.produced]
            .iter()
            .zip(self.out_den[..self.produced].iter())
    }

    /// Grow all four buffers to target `new_n`, preserving existing
    /// contents. No-op if `new_n <= n`. Never shrinks. Only safe to call
    /// between calls to [`Self::step`]/[`Self::run`] (the *fresh* or
    /// *suspend* states), never mid-step.
    pub fn upsize(&mut self, new_n: usize) {
        if new_n <= self.n {
            return;
        }
        self.num.resize(2 * new_n + 1, BigInt::zero());
        self.den.resize(2 * new_n + 1, BigInt::zero());
        self.out_num.resize(new_n, BigInt::zero());
        self.out_den.resize(new_n, BigInt::zero());
        self.n = new_n;
    }

    fn total_loops(&self) -> u64 {
        let top = 2 * self.n as u64;
        (top + 1) * (top + 2) / 2
    }

    /// Progress in parts-per-thousand of total work, per spec §4.4 step 7.
    pub fn permille(&self) -> u32 {
        let total = self.total_loops();
        if total == 0 {
            return 1000;
        }
        ((self.loop_count * 1000) / total) as u32
    }

    /// Advance exactly one inner-loop iteration (spec §4.4 steps 1-7).
    /// Returns `false` without doing anything once [`Self::is_complete`].
    pub fn step(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }

        let m = self.outer;
        if self.inner == m {
            // First touch of row m this pass: initialize num[m] = 1, den[m] = m+1.
            self.num[m] = BigInt::one();
            self.den[m] = BigInt::from_i64(m as i64 + 1);
        }
        let j = self.inner;

        self.num[j - 1] = BigInt::mul(&self.num[j - 1], &self.den[j]);
        let mut tmp = BigInt::mul(&self.num[j], &self.den[j - 1]);
        tmp.negate();
        self.num[j - 1] = BigInt::add(&self.num[j - 1], &tmp);
        self.den[j - 1] = BigInt::mul(&self.den[j - 1], &self.den[j]);
        self.num[j - 1] = BigInt::mul(&self.num[j - 1], &BigInt::from_i64(j as i64));

        let p = self.num[j - 1].bit0().min(self.den[j - 1].bit0());
        if p > 0 {
            self.num[j - 1] = BigInt::shr(&self.num[j - 1], p);
            self.den[j - 1] = BigInt::shr(&self.den[j - 1], p);
        }

        let g = BigInt::gcd(&self.num[j - 1], &self.den[j - 1]);
        if !g.equ_int(1) {
            let (qn, _) = BigInt::div_rem(&self.num[j - 1], &g).expect("gcd is never zero here");
            let (qd, _) = BigInt::div_rem(&self.den[j - 1], &g).expect("gcd is never zero here");
            self.num[j - 1] = qn;
            self.den[j - 1] = qd;
        }

        self.loop_count += 1;

        if j > 1 {
            self.inner = j - 1;
        } else {
            if m % 2 == 0 {
                self.out_num[self.produced] = self.num[0].clone();
                self.out_den[self.produced] = self.den[0].clone();
                self.produced += 1;
            }
            self.outer = m + 1;
            self.inner = self.outer;
        }

        true
    }

    /// Run to completion, calling `on_progress(self, permille)` every 1024
    /// steps. The callback may read state (e.g. to checkpoint via
    /// `save_file`, added in the `checkpoint` submodule) but the generator
    /// itself never suspends mid-step; only the caller decides whether to
    /// act between calls.
    pub fn run<F: FnMut(&BernState, u32)>(&mut self, mut on_progress: F) {
        while self.step() {
            if self.loop_count % 1024 == 0 {
                let permille = self.permille();
                on_progress(self, permille);
            }
        }
    }
}

/// One-shot, non-resumable computation of the first `n` even Bernoulli
/// numbers. Grounded in the original source's stateless `Bernoulli(n,
/// numer, denom, cb)` overload, which builds its own scratch triangle and
/// returns once rather than persisting resumable state — useful for
/// callers (tests, quick CLI lookups) that want a result without ever
/// touching the checkpoint file.
pub fn direct<F: FnMut(u32)>(n: usize, mut progress: F) -> Vec<(BigInt, BigInt)> {
    let mut state = BernState::new(n);
    state.run(|_, permille| progress(permille));
    state
        .results()
        .map(|(num, den)| (num.clone(), den.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bernoulli_three_matches_seed_scenario() {
        let results = direct(3, |_| {});
        let rendered: Vec<(String, String)> = results
            .iter()
            .map(|(n, d)| (n.to_string(), d.to_string()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("1".to_string(), "6".to_string()),
                ("-1".to_string(), "30".to_string()),
                ("1".to_string(), "42".to_string()),
            ]
        );
    }

    #[test]
    fn bernoulli_five_extends_three() {
        let three = direct(3, |_| {});
        let five = direct(5, |_| {});
        assert_eq!(&five[..3], &three[..]);
        assert_eq!(five[3].0.to_string(), "-1");
        assert_eq!(five[3].1.to_string(), "30");
        assert_eq!(five[4].0.to_string(), "5");
        assert_eq!(five[4].1.to_string(), "66");
    }

    #[test]
    fn matches_embedded_table_for_first_entries() {
        for i in 0..16usize {
            let k = (i as i64 + 1) * 2;
            let (table_num, table_den) = table::lookup(k);
            let generated = direct(i + 1, |_| {});
            let (gen_num, gen_den) = &generated[i];
            assert_eq!(gen_num, &table_num, "numerator mismatch at B{k}");
            assert_eq!(gen_den, &table_den, "denominator mismatch at B{k}");
        }
    }

    #[test]
    fn zero_target_produces_nothing() {
        let results = direct(0, |_| {});
        assert!(results.is_empty());
    }

    #[test]
    fn step_by_step_matches_run_to_completion() {
        let mut stepped = BernState::new(4);
        while stepped.step() {}
        let run_all = direct(4, |_| {});
        let stepped_results: Vec<_> = stepped
            .results()
            .map(|(n, d)| (n.clone(), d.clone()))
            .collect();
        assert_eq!(stepped_results, run_all);
    }

    #[test]
    fn upsize_preserves_existing_results() {
        let mut state = BernState::new(3);
        state.run(|_, _| {});
        let before: Vec<_> = state.results().map(|(n, d)| (n.clone(), d.clone())).collect();
        state.upsize(5);
        assert_eq!(state.n(), 5);
        state.run(|_, _| {});
        let after: Vec<_> = state.results().map(|(n, d)| (n.clone(), d.clone())).collect();
        assert_eq!(&after[..3], &before[..]);
        assert_eq!(after.len(), 5);
    }

    #[test]
    fn upsize_to_smaller_n_is_a_no_op() {
        let mut state = BernState::new(5);
        state.upsize(2);
        assert_eq!(state.n(), 5);
    }
}
