use std::ops;

use crate::dims::Dims;

/// Flat row-major 2D buffer addressed by [`Dims`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    /// Builds the array by calling `f` for every position, row by row.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Dims) -> T) -> Self {
        let buf = Dims::iter_fill(Dims::ZERO, Dims(width as i32, height as i32))
            .map(&mut f)
            .collect();

        Self { buf, width, height }
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        if !pos.all_non_negative() {
            return None;
        }

        let (x, y) = (pos.0 as usize, pos.1 as usize);
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Dims(x as i32, y as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    /// One row of the array, `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }

        let start = y * self.width;
        Some(&self.buf[start..start + self.width])
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        let arr = Array2D::from_fn(3, 2, |pos| pos);
        for pos in arr.iter_pos() {
            assert_eq!(arr[pos], pos);
        }
        assert_eq!(arr.dim_to_idx(Dims(2, 1)), Some(5));
        assert_eq!(arr.idx_to_dim(4), Some(Dims(1, 1)));
    }

    #[test]
    fn out_of_bounds_is_none() {
        let arr = Array2D::from_fn(2, 2, |_| 0u8);
        assert_eq!(arr.get(Dims(2, 0)), None);
        assert_eq!(arr.get(Dims(0, -1)), None);
        assert_eq!(arr.idx_to_dim(4), None);
        assert!(arr.row(2).is_none());
    }

    #[test]
    fn rows() {
        let arr = Array2D::from_fn(2, 2, |pos| pos.0 + pos.1 * 10);
        assert_eq!(arr.row(1), Some(&[10, 11][..]));
    }
}
