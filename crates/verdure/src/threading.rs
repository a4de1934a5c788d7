//! Bounded worker pool with fan-out / fan-in over a channel.
//!
//! Each task's `(key, outcome)` is sent over a crossbeam channel; the
//! pool's scope is the barrier, so once [`WorkerPool::fan_out`] returns every
//! task has reported and the receiver holds all results.
//!
//! ```text
//!   fan_out ──spawn──► worker 0 ─┐
//!           ──spawn──► worker 1 ─┼──(key, outcome)──► Receiver ──► one reducer
//!           ──spawn──► worker n ─┘
//!           ◄──────── scope joins ───────────
//! ```

use crossbeam_channel::{self as channel, Receiver};
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// Dedicated rayon pool with named threads.
pub struct WorkerPool {
  pool: ThreadPool,
}

impl WorkerPool {
  /// Create a pool of `threads` workers named `{prefix}-{i}`.
  ///
  /// `0` lets rayon pick one worker per available core.
  pub fn new(threads: usize, prefix: &'static str) -> Result<Self, ThreadPoolBuildError> {
    let pool = ThreadPoolBuilder::new()
      .num_threads(threads)
      .thread_name(move |i| format!("{prefix}-{i}"))
      .build()?;
    Ok(Self { pool })
  }

  pub fn num_threads(&self) -> usize {
    self.pool.current_num_threads()
  }

  /// Run `work` once per key and block until all tasks have reported.
  ///
  /// Results arrive in completion order, not key order.
  pub fn fan_out<K, R, F>(&self, keys: &[K], work: F) -> Receiver<(K, R)>
  where
    K: Copy + Send + Sync,
    R: Send,
    F: Fn(K) -> R + Sync,
  {
    let (tx, rx) = channel::bounded(keys.len());
    let work = &work;
    self.pool.scope(|scope| {
      for &key in keys {
        let tx = tx.clone();
        scope.spawn(move |_| {
          // The receiver outlives the scope; the channel has room for every key.
          let _ = tx.send((key, work(key)));
        });
      }
    });
    rx
  }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fan_out_reports_every_key() {
    let pool = WorkerPool::new(4, "test-worker").unwrap();
    let keys: Vec<u32> = (0..10).collect();

    let rx = pool.fan_out(&keys, |k| k * 2);
    let mut results: Vec<(u32, u32)> = rx.try_iter().collect();
    results.sort();

    assert_eq!(results.len(), 10);
    for (k, doubled) in results {
      assert_eq!(doubled, k * 2);
    }
  }

  #[test]
  fn test_threads_are_named() {
    let pool = WorkerPool::new(2, "test-named").unwrap();
    let rx = pool.fan_out(&[0u8], |_| std::thread::current().name().map(str::to_owned));
    let (_, name) = rx.try_recv().unwrap();
    assert!(name.unwrap().starts_with("test-named-"));
  }

  #[test]
  fn test_pool_size() {
    assert_eq!(WorkerPool::new(3, "test-size").unwrap().num_threads(), 3);
    assert!(WorkerPool::new(0, "test-auto").unwrap().num_threads() >= 1);
  }

  #[test]
  fn test_empty_fan_out() {
    let pool = WorkerPool::new(1, "test-empty").unwrap();
    let rx = pool.fan_out(&[] as &[u8], |k| k);
    assert!(rx.try_recv().is_err());
  }
}
