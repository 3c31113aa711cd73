//! Heights of N cities raised by K triangular impulses.

use crate::error::InvalidInput;
use crate::read_words::Words;

/// An impulse raises city `j` by `max(0, magnitude - |center - j|)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Impulse {
    pub center: i64,
    pub magnitude: i64,
}

impl Impulse {
    pub fn contribution(&self, j: i64) -> i64 {
        (self.magnitude - (self.center - j).abs()).max(0)
    }
}

/// Heights of cities `1..=n`, each starting at 1.
#[derive(Clone, Debug)]
pub struct HeightArray {
    // Index 0 is unused.
    buf: Vec<i64>,
}

impl HeightArray {
    /// Fails without aborting when `n` heights can't be allocated.
    pub fn new(n: usize) -> Result<Self, InvalidInput> {
        let too_large = || InvalidInput::TooLarge {
            what: "N".to_owned(),
            value: n,
        };
        let len = n.checked_add(1).ok_or_else(too_large)?;

        let mut buf = Vec::new();
        buf.try_reserve_exact(len).map_err(|_| too_large())?;
        buf.push(0);
        buf.resize(len, 1);
        Ok(HeightArray { buf })
    }

    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    /// Height of city `j` (1-based).
    pub fn height(&self, j: usize) -> i64 {
        self.buf[j]
    }

    /// Returns `None` if a height overflows; heights before that city are
    /// already raised.
    pub fn apply_impulse(&mut self, impulse: &Impulse) -> Option<()> {
        if impulse.magnitude <= 0 {
            return Some(());
        }

        let reach = impulse.magnitude - 1;
        let left = impulse.center.saturating_sub(reach).max(1);
        let right = impulse.center.saturating_add(reach).min(self.len() as i64);
        for j in left..=right {
            let h = &mut self.buf[j as usize];
            *h = h.checked_add(impulse.contribution(j))?;
        }
        Some(())
    }

    /// Indices of every city at the maximum height, ascending.
    pub fn max_indices(&self) -> Vec<usize> {
        let max = match self.buf[1..].iter().max() {
            Some(&max) => max,
            None => return Vec::new(),
        };

        (1..self.buf.len()).filter(|&j| self.buf[j] == max).collect()
    }
}

/// Reads `N K` and `K` impulses `C D`, and returns the answer line.
pub fn solve(words: &mut Words) -> Result<String, InvalidInput> {
    let n = words.next_value::<usize>("N")?;
    let k = words.next_value::<usize>("K")?;
    debug!("impulse: N = {}, K = {}", n, k);

    let mut impulses = Vec::new();
    for i in 0..k {
        let center = words.next_value::<i64>(&format!("C[{}]", i))?;
        let magnitude = words.next_value::<i64>(&format!("D[{}]", i))?;
        impulses.push(Impulse { center, magnitude });
    }

    let mut heights = HeightArray::new(n)?;
    for (index, impulse) in impulses.iter().enumerate() {
        heights
            .apply_impulse(impulse)
            .ok_or(InvalidInput::Overflow { index })?;
    }

    let line = heights
        .max_indices()
        .iter()
        .map(|j| j.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(format!("{}\n", line))
}
