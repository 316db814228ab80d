use serde::Serialize;

use crate::error::{MaskError, Result};

/// Dense boolean indicator array of fixed length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Mask {
    bits: Vec<bool>,
}

pub type MaskBatch = Vec<Mask>;

impl Mask {
    /// All-`false` mask of `len` positions. Fails instead of aborting when the
    /// buffer cannot be allocated.
    pub fn new(len: usize) -> Result<Self> {
        let mut bits = Vec::new();
        bits.try_reserve_exact(len).map_err(|err| {
            MaskError::Shape(format!("cannot allocate a mask of length {}: {}", len, err))
        })?;
        bits.resize(len, false);
        Ok(Self { bits })
    }
    pub fn len(&self) -> usize { self.bits.len() }
    pub fn is_empty(&self) -> bool { self.bits.is_empty() }
    pub fn count_true(&self) -> usize { self.bits.iter().filter(|&&b| b).count() }
    pub fn as_slice(&self) -> &[bool] { &self.bits }
    pub fn into_vec(self) -> Vec<bool> { self.bits }

    /// Ascending positions holding `true`.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter().enumerate().filter(|(_, b)| **b).map(|(i, _)| i)
    }

    /// Marks every position in `indices`. Callers must have range-checked them.
    pub(crate) fn scatter(&mut self, indices: &[u64]) {
        for &v in indices {
            self.bits[v as usize] = true;
        }
    }
}

impl From<Vec<bool>> for Mask {
    fn from(bits: Vec<bool>) -> Self { Self { bits } }
}

impl std::ops::Index<usize> for Mask {
    type Output = bool;

    fn index(&self, idx: usize) -> &bool { &self.bits[idx] }
}

pub fn to_bool_vecs(batch: MaskBatch) -> Vec<Vec<bool>> {
    batch.into_iter().map(Mask::into_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mask_is_all_false() {
        let m = Mask::new(4).unwrap();
        assert_eq!(m.len(), 4);
        assert_eq!(m.count_true(), 0);
        assert!(m.as_slice().iter().all(|&b| !b));
    }

    #[test]
    fn scatter_sets_positions_and_ignores_duplicates() {
        let mut m = Mask::new(5).unwrap();
        m.scatter(&[3, 1, 3, 3]);
        assert_eq!(m.positions().collect::<Vec<_>>(), vec![1, 3]);
        assert!(m[1]);
        assert!(!m[0]);
    }

    #[test]
    fn unallocatable_length_is_shape_error() {
        let err = Mask::new(usize::MAX).unwrap_err();
        assert!(matches!(err, MaskError::Shape(_)));
    }

    #[test]
    fn serializes_as_plain_bool_array() {
        let m = Mask::from(vec![true, false]);
        assert_eq!(serde_json::to_string(&m).unwrap(), "[true,false]");
    }
}
