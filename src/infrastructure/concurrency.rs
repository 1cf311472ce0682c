/// Concurrency settings for the comparison engine.
/// Configures the rayon pool used for pairwise fragment comparison.

use anyhow::Result;
use tracing::info;

/// Worker count to use: the requested one, or half the cores (minimum 1).
pub fn worker_count(requested: Option<usize>) -> usize {
    match requested {
        Some(n) if n > 0 => n,
        _ => std::cmp::max(1, num_cpus::get() / 2),
    }
}

/// Initialize the global rayon thread pool with controlled worker count.
/// Fails if the global pool was already built.
pub fn init_thread_pool(requested: Option<usize>) -> Result<usize> {
    let workers = worker_count(requested);

    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()?;

    info!(
        workers,
        cores = num_cpus::get(),
        "initialized comparison thread pool"
    );

    Ok(workers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_count_honours_request() {
        assert_eq!(worker_count(Some(3)), 3);
    }

    #[test]
    fn test_worker_count_defaults_to_at_least_one() {
        assert!(worker_count(None) >= 1);
        assert_eq!(worker_count(Some(0)), worker_count(None));
    }
}
