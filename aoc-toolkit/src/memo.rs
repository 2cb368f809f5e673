//! Memoization for dynamic programming over a dependency DAG
//!
//! A [`DpProblem`] names the states each state depends on and how to combine
//! their values; a [`DpCache`] resolves a state by walking dependencies with
//! an explicit stack, so deep chains never grow the call stack. Values live
//! in a pluggable [`Backend`]:
//!
//! - [`Vec2DBackend`]: dense `rows × cols` table, for small second indices
//!   such as visitation bitmasks
//! - [`HashMapBackend`]: any hashable index, for sparse or large state spaces
//!
//! # Warning: Cycle Behavior
//!
//! The cache does not detect cycles. A cyclic dependency graph makes
//! [`DpCache::get`] loop forever; callers must check acyclicity first.
//!
//! # Example
//!
//! ```rust
//! use aoc_toolkit::memo::{DpCache, DpProblem, HashMapBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<u64, u64> for Fibonacci {
//!     fn deps(&self, n: &u64) -> Vec<u64> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &u64, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let mut cache = DpCache::new(HashMapBackend::new(), Fibonacci);
//! assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

/// Storage for computed values keyed by state index
pub trait Backend<I, K> {
    /// Cached value for `index`, if computed
    fn get(&self, index: &I) -> Option<&K>;

    /// Cached value for `index`, computing and storing it with `f` if absent
    fn get_or_insert(&mut self, index: I, f: impl FnOnce() -> K) -> &K;

    /// Number of stored values
    fn len(&self) -> usize;

    /// Whether nothing is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense table indexed by `(row, col)` with `col < cols`
///
/// The second index is a `u64` so bitmask states can be used directly.
/// Indices outside the table are never stored: `get` returns `None` and
/// `get_or_insert` panics.
#[derive(Debug)]
pub struct Vec2DBackend<K> {
    cols: usize,
    data: Vec<Option<K>>,
    filled: usize,
}

impl<K> Vec2DBackend<K> {
    /// Create a table with `rows * cols` empty slots
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            data: std::iter::repeat_with(|| None).take(rows * cols).collect(),
            filled: 0,
        }
    }

    fn slot(&self, &(row, col): &(usize, u64)) -> Option<usize> {
        let col = usize::try_from(col).ok().filter(|&c| c < self.cols)?;
        row.checked_mul(self.cols)?
            .checked_add(col)
            .filter(|&slot| slot < self.data.len())
    }
}

impl<K> Backend<(usize, u64), K> for Vec2DBackend<K> {
    fn get(&self, index: &(usize, u64)) -> Option<&K> {
        self.data[self.slot(index)?].as_ref()
    }

    /// # Panics
    ///
    /// Panics if `index` lies outside the table.
    fn get_or_insert(&mut self, index: (usize, u64), f: impl FnOnce() -> K) -> &K {
        let Some(slot) = self.slot(&index) else {
            panic!("index {index:?} outside {}-column table", self.cols);
        };
        let cell = &mut self.data[slot];
        if cell.is_none() {
            self.filled += 1;
        }
        cell.get_or_insert_with(f)
    }

    fn len(&self) -> usize {
        self.filled
    }
}

/// Hash-map table for arbitrary hashable indices
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn get_or_insert(&mut self, index: I, f: impl FnOnce() -> K) -> &K {
        self.data.entry(index).or_insert_with(f)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

/// Dependency structure and combination rule of a DP problem
pub trait DpProblem<I, K> {
    /// States this state depends on; empty for base cases
    fn deps(&self, index: &I) -> Vec<I>;

    /// Value of `index` given the values of [`deps`](Self::deps), in order
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}

struct Frame<I, K> {
    index: I,
    deps: Vec<I>,
    values: Vec<K>,
}

/// Lazily evaluated memo over a [`DpProblem`]
///
/// Each state is computed at most once per cache; the cache is meant to be
/// scoped to one query and dropped afterwards.
pub struct DpCache<I, K, B, P> {
    backend: B,
    problem: P,
    _phantom: std::marker::PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Create a cache over `problem` storing values in `backend`
    pub fn new(backend: B, problem: P) -> Self {
        Self {
            backend,
            problem,
            _phantom: std::marker::PhantomData,
        }
    }

    /// The problem definition
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Number of states computed so far
    pub fn computed(&self) -> usize {
        self.backend.len()
    }

    /// Value of `index`, resolving uncached dependencies first
    pub fn get(&mut self, index: &I) -> K {
        if let Some(value) = self.backend.get(index) {
            return value.clone();
        }

        let mut frame = self.frame(index.clone());
        let mut parents: Vec<Frame<I, K>> = Vec::new();

        loop {
            while let Some(value) = frame
                .deps
                .get(frame.values.len())
                .and_then(|dep| self.backend.get(dep))
            {
                frame.values.push(value.clone());
            }

            if let Some(dep) = frame.deps.get(frame.values.len()).cloned() {
                let child = self.frame(dep);
                parents.push(std::mem::replace(&mut frame, child));
                continue;
            }

            let Frame { index, values, .. } = frame;
            let value = self.problem.compute(&index, values);
            let value = self.backend.get_or_insert(index, || value).clone();

            match parents.pop() {
                Some(parent) => {
                    frame = parent;
                    frame.values.push(value);
                }
                None => return value,
            }
        }
    }

    fn frame(&self, index: I) -> Frame<I, K> {
        let deps = self.problem.deps(&index);
        Frame {
            values: Vec::with_capacity(deps.len()),
            index,
            deps,
        }
    }
}
