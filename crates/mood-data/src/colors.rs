//! Fixed-capacity color pool for lines.

/// Hands out colors from a fixed palette and takes them back when a line is
/// deleted. Never gives the same color to two simultaneously active lines;
/// its capacity is the hard ceiling on active lines.
#[derive(Debug, Clone)]
pub struct ColorPool {
    pool: Vec<String>,
    in_use: Vec<String>,
}

impl ColorPool {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pool: colors.into_iter().map(Into::into).collect(),
            in_use: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.pool.len()
    }

    pub fn in_use(&self) -> usize {
        self.in_use.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.in_use.len() >= self.pool.len()
    }

    /// The first pool color not currently in use, in pool order.
    pub fn acquire(&mut self) -> Option<String> {
        let color = self
            .pool
            .iter()
            .find(|c| !self.in_use.contains(c))
            .cloned()?;
        self.in_use.push(color.clone());
        Some(color)
    }

    /// Return a color to the pool. Unknown colors are ignored.
    pub fn release(&mut self, color: &str) {
        if let Some(pos) = self.in_use.iter().position(|c| c == color) {
            self.in_use.remove(pos);
        }
    }

    /// Re-mark a color as in use, e.g. when rebuilding a line that kept its
    /// color across an edit.
    pub fn reserve(&mut self, color: &str) {
        if self.pool.iter().any(|c| c == color) && !self.in_use.iter().any(|c| c == color) {
            self.in_use.push(color.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquires_in_pool_order() {
        let mut pool = ColorPool::new(["#111", "#222", "#333"]);
        assert_eq!(pool.acquire().as_deref(), Some("#111"));
        assert_eq!(pool.acquire().as_deref(), Some("#222"));
        assert_eq!(pool.in_use(), 2);
    }

    #[test]
    fn exhausted_pool_returns_none() {
        let mut pool = ColorPool::new(["#111"]);
        assert!(pool.acquire().is_some());
        assert!(pool.is_exhausted());
        assert_eq!(pool.acquire(), None);
    }

    #[test]
    fn released_color_is_reused_next() {
        let mut pool = ColorPool::new(["#111", "#222"]);
        let first = pool.acquire().unwrap();
        let _second = pool.acquire().unwrap();
        pool.release(&first);
        // The exact released color becomes eligible again.
        assert_eq!(pool.acquire(), Some(first));
    }

    #[test]
    fn no_color_held_twice() {
        let mut pool = ColorPool::new(["#111", "#222", "#333"]);
        let mut held = Vec::new();
        while let Some(c) = pool.acquire() {
            held.push(c);
        }
        let mut unique = held.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), held.len());
        assert_eq!(held.len(), pool.capacity());
    }

    #[test]
    fn releasing_unknown_color_is_harmless() {
        let mut pool = ColorPool::new(["#111"]);
        pool.release("#f0f");
        assert_eq!(pool.in_use(), 0);
    }
}
