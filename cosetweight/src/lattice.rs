//! Qubit supports of the toric code on a periodic `n`×`m` lattice.
//!
//! Qubits live on edges, two per cell, so an `n`×`m` torus has `2nm` qubits.
//! Qubit indices are laid out in rows of `n`: even rows (`0..n`, `2n..3n`, ...)
//! hold one edge orientation and odd rows (`n..2n`, `3n..4n`, ...) the other.
//! Square (plaquette) supports are anchored on even rows, star (vertex) supports
//! on odd rows, and every neighbour lookup wraps around the torus.
//!
//! One square is left out: the product of all `nm` squares is the identity, so
//! the remaining `nm - 1` are independent. All `nm` stars are produced; the
//! stabilizer code drops the one dependent star.

use crate::error::{Error, Result};

/// Anchor qubits of the square supports (`star == false`) or star supports
/// (`star == true`), one per lattice cell.
///
/// The anchor of cell `(x, offset)` is `x + (2 * offset + star) * n`. The last
/// cell is skipped for squares, giving `nm - 1` square anchors and `nm` star
/// anchors. The iterator is lazy and can be restarted by cloning it.
pub fn starts(n: usize, m: usize, star: bool) -> impl Iterator<Item = usize> + Clone {
    (0..m)
        .flat_map(move |offset| (0..n).map(move |x| (offset, x)))
        .filter(move |&(offset, x)| star || offset != m - 1 || x != n - 1)
        .map(move |(offset, x)| x + (2 * offset + usize::from(star)) * n)
}

/// Plaquette supports `[start, start + n, right, top]` for every square anchor.
///
/// `right` wraps to `start + 1` on the last column and `top` wraps to
/// `start % n` on the last row.
pub fn squares(n: usize, m: usize) -> impl Iterator<Item = [usize; 4]> + Clone {
    starts(n, m, false).map(move |start| {
        let right = if start % n == n - 1 { start + 1 } else { start + n + 1 };
        let top = if start >= 2 * (m - 1) * n {
            start % n
        } else {
            start + 2 * n
        };
        [start, start + n, right, top]
    })
}

/// Vertex supports `[start, start - n, left, bottom]` for every star anchor.
///
/// `left` wraps to `start - 1` on the first column and `bottom` wraps to
/// `start + 2(m - 1)n` on the first row.
pub fn stars(n: usize, m: usize) -> impl Iterator<Item = [usize; 4]> + Clone {
    starts(n, m, true).map(move |start| {
        let left = if start % n == 0 { start - 1 } else { start - (n + 1) };
        let bottom = if start < 2 * n {
            start + 2 * (m - 1) * n
        } else {
            start - 2 * n
        };
        [start, start - n, left, bottom]
    })
}

/// Supports of the two logical X operators: the row `n..2n` and the column
/// `{2kn : k < m}`.
pub fn toric_log_xs(n: usize, m: usize) -> [Vec<usize>; 2] {
    [(n..2 * n).collect(), (0..m).map(|k| 2 * k * n).collect()]
}

/// Supports of the two logical Z operators: the row `0..n` and the column
/// `{(2k + 1)n : k < m}`.
pub fn toric_log_zs(n: usize, m: usize) -> [Vec<usize>; 2] {
    [(0..n).collect(), (0..m).map(|k| (2 * k + 1) * n).collect()]
}

/// Dimensions of a periodic lattice, `width` cells along a row and `height` rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LatticeShape {
    width: usize,
    height: usize,
}

impl LatticeShape {
    /// # Errors
    ///
    /// Returns [`Error::InvalidLattice`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidLattice { width, height });
        }
        Ok(LatticeShape { width, height })
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidLattice`] if `size` is zero.
    pub fn square(size: usize) -> Result<Self> {
        Self::new(size, size)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn qubit_count(&self) -> usize {
        2 * self.width * self.height
    }

    #[must_use]
    pub fn square_count(&self) -> usize {
        self.width * self.height - 1
    }

    #[must_use]
    pub fn star_count(&self) -> usize {
        self.width * self.height
    }

    pub fn squares(&self) -> impl Iterator<Item = [usize; 4]> + Clone {
        squares(self.width, self.height)
    }

    pub fn stars(&self) -> impl Iterator<Item = [usize; 4]> + Clone {
        stars(self.width, self.height)
    }

    #[must_use]
    pub fn logical_xs(&self) -> [Vec<usize>; 2] {
        toric_log_xs(self.width, self.height)
    }

    #[must_use]
    pub fn logical_zs(&self) -> [Vec<usize>; 2] {
        toric_log_zs(self.width, self.height)
    }
}
