//! Executors for evaluating independent work items, such as the cases of
//! the regression matrix.
//!
//! - [`SyncExecutor`]: sequential, always available
//! - [`RayonExecutor`]: work-stealing thread pool (feature: `rayon-executor`)
//!
//! Every executor returns results in input order, so output does not depend
//! on which one ran.

#[cfg(feature = "rayon-executor")]
mod rayon;

#[cfg(feature = "rayon-executor")]
pub use self::rayon::RayonExecutor;

use std::fmt::Debug;

pub trait Executor: Send + Sync + Debug {
    /// Applies `f` to every item. Results are in the same order as `items`.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static;

    /// 1 for sequential executors, the pool size otherwise.
    fn parallelism(&self) -> usize;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncExecutor;

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}

/// `Executor` has generic methods and cannot be a trait object, so callers
/// hold one of the concrete executors through this enum.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    Sync(SyncExecutor),
    #[cfg(feature = "rayon-executor")]
    Rayon(RayonExecutor),
}

impl Default for ExecutorImpl {
    #[cfg(feature = "rayon-executor")]
    fn default() -> Self {
        ExecutorImpl::Rayon(RayonExecutor::new())
    }

    #[cfg(not(feature = "rayon-executor"))]
    fn default() -> Self {
        ExecutorImpl::Sync(SyncExecutor)
    }
}

impl Executor for ExecutorImpl {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all(items, f),
            #[cfg(feature = "rayon-executor")]
            ExecutorImpl::Rayon(exec) => exec.execute_all(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon-executor")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon-executor")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}
