//! Ordered API-key pool with a synchronized rotation cursor.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::Error;

/// Rotating pool of upstream API keys.
///
/// The cursor only moves forward: a rate-limited key is never returned to.
/// `advance` uses a CAS loop so concurrent rate-limit responses rotate the
/// pool at most one step per observed index.
#[derive(Debug)]
pub(crate) struct KeyPool {
    keys: Vec<String>,
    cursor: AtomicUsize,
}

impl KeyPool {
    /// Creates a pool from an ordered key list.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when `keys` is empty.
    pub(crate) fn new(keys: Vec<String>) -> Result<Self, Error> {
        if keys.is_empty() {
            return Err(Error::Config(String::from(
                "api key pool must not be empty",
            )));
        }
        Ok(Self {
            keys,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Key the next request authenticates with.
    pub(crate) fn current(&self) -> &str {
        let idx = self.cursor.load(Ordering::Acquire);
        self.keys
            .get(idx)
            .or_else(|| self.keys.last())
            .map_or("", String::as_str)
    }

    /// Advances the cursor to the next key. Returns `false` when the cursor
    /// already sits on the last key; the cursor is left unchanged then.
    pub(crate) fn advance(&self) -> bool {
        self.cursor
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |idx| {
                let next = idx.saturating_add(1);
                (next < self.keys.len()).then_some(next)
            })
            .is_ok()
    }

    /// Current cursor position.
    pub(crate) fn cursor(&self) -> usize {
        self.cursor.load(Ordering::Acquire)
    }

    /// Number of keys in the pool.
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_empty_pool_rejected() {
        // Arrange & Act
        let result = KeyPool::new(Vec::new());

        // Assert
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_current_starts_at_first_key() {
        // Arrange
        let pool = KeyPool::new(vec![String::from("k1"), String::from("k2")]).unwrap();

        // Act & Assert
        assert_eq!(pool.current(), "k1");
        assert_eq!(pool.cursor(), 0);
    }

    #[test]
    fn test_advance_walks_the_pool() {
        // Arrange
        let pool = KeyPool::new(vec![
            String::from("k1"),
            String::from("k2"),
            String::from("k3"),
        ])
        .unwrap();

        // Act & Assert
        assert!(pool.advance());
        assert_eq!(pool.current(), "k2");
        assert!(pool.advance());
        assert_eq!(pool.current(), "k3");
        assert_eq!(pool.cursor(), 2);
    }

    #[test]
    fn test_advance_stops_at_last_key() {
        // Arrange
        let pool = KeyPool::new(vec![String::from("k1"), String::from("k2")]).unwrap();
        assert!(pool.advance());

        // Act
        let advanced = pool.advance();

        // Assert: cursor stays on the last key
        assert!(!advanced);
        assert_eq!(pool.cursor(), 1);
        assert_eq!(pool.current(), "k2");
    }

    #[test]
    fn test_single_key_pool_never_advances() {
        // Arrange
        let pool = KeyPool::new(vec![String::from("only")]).unwrap();

        // Act & Assert
        assert!(!pool.advance());
        assert_eq!(pool.cursor(), 0);
        assert_eq!(pool.current(), "only");
    }

    #[test]
    fn test_concurrent_advance_moves_one_step_per_index() {
        // Arrange
        let pool = std::sync::Arc::new(
            KeyPool::new(vec![
                String::from("k1"),
                String::from("k2"),
                String::from("k3"),
            ])
            .unwrap(),
        );

        // Act: many threads racing to advance
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let pool = std::sync::Arc::clone(&pool);
                std::thread::spawn(move || {
                    pool.advance();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Assert: cursor never runs past the last index
        assert_eq!(pool.cursor(), 2);
    }
}
