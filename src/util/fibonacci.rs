// src/util/fibonacci.rs

//! A Fibonacci calculator with a private memoization cache.
//!
//! The cache is an exclusively-owned mapping inside the value; no global
//! state. Repeated calls with the same input return the cached result
//! without recomputation.

use std::collections::HashMap;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// A Fibonacci calculator that remembers every value it has computed.
///
/// `fib(0) = 0`, `fib(1) = 1`; only values for `n ≥ 2` enter the cache.
/// The cache lives exactly as long as the calculator.
#[derive(Debug, Default)]
pub struct CachingFibonacci {
    /// previously computed results keyed by input
    cache: HashMap<u32, u128>,
}

impl CachingFibonacci {
    pub fn new() -> CachingFibonacci {
        CachingFibonacci { cache: HashMap::new() }
    }

    /// The `n`-th Fibonacci number.
    pub fn fib(
        &mut self,
        n: u32,
    ) -> u128 {
        if n == 0 {
            return 0;
        }
        if n == 1 {
            return 1;
        }
        if let Some(value) = self.cache.get(&n) {
            return *value;
        }
        let value: u128 = self.fib(n - 1) + self.fib(n - 2);
        self.cache
            .insert(n, value);

        value
    }

    /// Count of memoized entries. Inputs `0` and `1` are answered without
    /// caching so they never appear here.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}

/// Return a counting closure paired with its own freshly-created cache.
///
/// Each call to `caching_fibonacci` yields an independent cache; the cache
/// persists for the lifetime of the returned closure.
pub fn caching_fibonacci() -> impl FnMut(u32) -> u128 {
    defñ!();
    let mut fibonacci = CachingFibonacci::new();

    move |n: u32| fibonacci.fib(n)
}
