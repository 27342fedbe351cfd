//! Evenly spaced sample grids.

/// `count` evenly spaced values over `[start, stop]`, endpoints inclusive.
///
/// Values are `start + i * step`; the final value is pinned to `stop` so the
/// upper bound is hit exactly. `count == 1` yields just `start`.
#[derive(Debug, Clone)]
pub struct Linspace {
    start: f64,
    stop: f64,
    step: f64,
    count: usize,
    next: usize,
}

pub fn linspace(start: f64, stop: f64, count: usize) -> Linspace {
    let step = if count > 1 {
        (stop - start) / (count - 1) as f64
    } else {
        0.0
    };
    Linspace {
        start,
        stop,
        step,
        count,
        next: 0,
    }
}

impl Iterator for Linspace {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }
        let i = self.next;
        self.next += 1;
        if self.count > 1 && i == self.count - 1 {
            Some(self.stop)
        } else {
            Some(self.start + i as f64 * self.step)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Linspace {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let v: Vec<f64> = linspace(0.2727, 0.7887, 30).collect();
        assert_eq!(v.len(), 30);
        assert_eq!(v[0], 0.2727);
        assert_eq!(v[29], 0.7887);
        assert!(v.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn degenerate_counts() {
        assert_eq!(linspace(1.0, 2.0, 0).count(), 0);
        assert_eq!(linspace(1.0, 2.0, 1).collect::<Vec<_>>(), vec![1.0]);
        assert_eq!(linspace(1.0, 2.0, 2).collect::<Vec<_>>(), vec![1.0, 2.0]);
    }

    #[test]
    fn reports_remaining_length() {
        let mut grid = linspace(0.0, 1.0, 5);
        assert_eq!(grid.len(), 5);
        grid.next();
        assert_eq!(grid.len(), 4);
    }
}
