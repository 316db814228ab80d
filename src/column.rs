use std::borrow::Cow;
use std::fmt;

use crate::error::{MaskError, Result};
use crate::schema::ElementType;

#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    UInt64(u64),
    Int64(i64),
    Float64(f64),
    Boolean(bool),
    Utf8(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::UInt64(u) => write!(f, "{}", u),
            ScalarValue::Int64(i) => write!(f, "{}", i),
            ScalarValue::Float64(v) => {
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    write!(f, "{:.1}", v)
                } else {
                    write!(f, "{}", v)
                }
            }
            ScalarValue::Boolean(b) => write!(f, "{}", b),
            ScalarValue::Utf8(s) => write!(f, "{}", s),
        }
    }
}

impl ScalarValue {
    pub fn data_type(&self) -> ElementType {
        match self {
            ScalarValue::UInt64(_) => ElementType::UInt64,
            ScalarValue::Int64(_) => ElementType::Int64,
            ScalarValue::Float64(_) => ElementType::Float64,
            ScalarValue::Boolean(_) => ElementType::Boolean,
            ScalarValue::Utf8(_) => ElementType::Utf8,
        }
    }
}

/// Typed one-dimensional host array.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexColumn {
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    UInt64(Vec<u64>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Boolean(Vec<bool>),
    Utf8(Vec<String>),
}

impl IndexColumn {
    pub fn data_type(&self) -> ElementType {
        match self {
            IndexColumn::UInt8(_) => ElementType::UInt8,
            IndexColumn::UInt16(_) => ElementType::UInt16,
            IndexColumn::UInt32(_) => ElementType::UInt32,
            IndexColumn::UInt64(_) => ElementType::UInt64,
            IndexColumn::Int8(_) => ElementType::Int8,
            IndexColumn::Int16(_) => ElementType::Int16,
            IndexColumn::Int32(_) => ElementType::Int32,
            IndexColumn::Int64(_) => ElementType::Int64,
            IndexColumn::Float32(_) => ElementType::Float32,
            IndexColumn::Float64(_) => ElementType::Float64,
            IndexColumn::Boolean(_) => ElementType::Boolean,
            IndexColumn::Utf8(_) => ElementType::Utf8,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            IndexColumn::UInt8(v) => v.len(),
            IndexColumn::UInt16(v) => v.len(),
            IndexColumn::UInt32(v) => v.len(),
            IndexColumn::UInt64(v) => v.len(),
            IndexColumn::Int8(v) => v.len(),
            IndexColumn::Int16(v) => v.len(),
            IndexColumn::Int32(v) => v.len(),
            IndexColumn::Int64(v) => v.len(),
            IndexColumn::Float32(v) => v.len(),
            IndexColumn::Float64(v) => v.len(),
            IndexColumn::Boolean(v) => v.len(),
            IndexColumn::Utf8(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn get(&self, idx: usize) -> Option<ScalarValue> {
        match self {
            IndexColumn::UInt8(v) => v.get(idx).map(|&x| ScalarValue::UInt64(x as u64)),
            IndexColumn::UInt16(v) => v.get(idx).map(|&x| ScalarValue::UInt64(x as u64)),
            IndexColumn::UInt32(v) => v.get(idx).map(|&x| ScalarValue::UInt64(x as u64)),
            IndexColumn::UInt64(v) => v.get(idx).map(|&x| ScalarValue::UInt64(x)),
            IndexColumn::Int8(v) => v.get(idx).map(|&x| ScalarValue::Int64(x as i64)),
            IndexColumn::Int16(v) => v.get(idx).map(|&x| ScalarValue::Int64(x as i64)),
            IndexColumn::Int32(v) => v.get(idx).map(|&x| ScalarValue::Int64(x as i64)),
            IndexColumn::Int64(v) => v.get(idx).map(|&x| ScalarValue::Int64(x)),
            IndexColumn::Float32(v) => v.get(idx).map(|&x| ScalarValue::Float64(x as f64)),
            IndexColumn::Float64(v) => v.get(idx).map(|&x| ScalarValue::Float64(x)),
            IndexColumn::Boolean(v) => v.get(idx).map(|&x| ScalarValue::Boolean(x)),
            IndexColumn::Utf8(v) => v.get(idx).map(|x| ScalarValue::Utf8(x.clone())),
        }
    }

    /// Widens the column to `u64` indices. `uint64` columns are borrowed as-is.
    ///
    /// Negative signed values fail as a range error against `length`; non-integer
    /// element types fail as an element type error for index set `set`.
    pub fn to_indices(&self, set: usize, length: u64) -> Result<Cow<'_, [u64]>> {
        match self {
            IndexColumn::UInt64(v) => Ok(Cow::Borrowed(v.as_slice())),
            IndexColumn::UInt8(v) => Ok(Cow::Owned(v.iter().map(|&x| x as u64).collect())),
            IndexColumn::UInt16(v) => Ok(Cow::Owned(v.iter().map(|&x| x as u64).collect())),
            IndexColumn::UInt32(v) => Ok(Cow::Owned(v.iter().map(|&x| x as u64).collect())),
            IndexColumn::Int8(v) => widen_signed(v.iter().map(|&x| x as i64), set, length),
            IndexColumn::Int16(v) => widen_signed(v.iter().map(|&x| x as i64), set, length),
            IndexColumn::Int32(v) => widen_signed(v.iter().map(|&x| x as i64), set, length),
            IndexColumn::Int64(v) => widen_signed(v.iter().copied(), set, length),
            other => Err(MaskError::ElementType { set, found: other.data_type().to_string() }),
        }
    }
}

fn widen_signed<I>(values: I, set: usize, length: u64) -> Result<Cow<'static, [u64]>>
where
    I: Iterator<Item = i64>,
{
    let mut out = Vec::with_capacity(values.size_hint().0);
    for (element, x) in values.enumerate() {
        if x < 0 {
            return Err(MaskError::Range { set, element, value: x as i128, length });
        }
        out.push(x as u64);
    }
    Ok(Cow::Owned(out))
}

impl From<Vec<u64>> for IndexColumn {
    fn from(v: Vec<u64>) -> Self { IndexColumn::UInt64(v) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uint64_is_borrowed() {
        let col = IndexColumn::UInt64(vec![1, 2]);
        assert!(matches!(col.to_indices(0, 3).unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn narrow_unsigned_is_widened() {
        let col = IndexColumn::UInt8(vec![0, 255]);
        assert_eq!(col.to_indices(0, 300).unwrap().as_ref(), &[0u64, 255]);
    }

    #[test]
    fn negative_signed_is_range_error() {
        let col = IndexColumn::Int32(vec![1, -2]);
        let err = col.to_indices(3, 5).unwrap_err();
        assert_eq!(err, MaskError::Range { set: 3, element: 1, value: -2, length: 5 });
    }

    #[test]
    fn floats_are_rejected() {
        let col = IndexColumn::Float64(vec![1.0]);
        let err = col.to_indices(1, 5).unwrap_err();
        assert_eq!(err, MaskError::ElementType { set: 1, found: "double".into() });
    }

    #[test]
    fn get_reports_scalars() {
        let col = IndexColumn::Int16(vec![-4]);
        assert_eq!(col.get(0), Some(ScalarValue::Int64(-4)));
        assert_eq!(col.get(1), None);
        assert_eq!(ScalarValue::Float64(3.0).to_string(), "3.0");
    }
}
