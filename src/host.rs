//! Dynamically typed call boundary for embedding runtimes.
//!
//! A host hands over its arguments as [`HostValue`]s and asks for a number of
//! outputs. Arity and shape are checked first, then every index set is widened
//! and range-checked, and only then are masks allocated.

use std::borrow::Cow;

use log::debug;

use crate::bitmap::MaskBatch;
use crate::column::{IndexColumn, ScalarValue};
use crate::convert::Converter;
use crate::error::{MaskError, Result};
use crate::validate::{check_batch_size, check_set};

#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Scalar(ScalarValue),
    Array(IndexColumn),
    /// Heterogeneous ordered container.
    Cell(Vec<HostValue>),
    Masks(MaskBatch),
}

impl HostValue {
    pub fn type_name(&self) -> String {
        match self {
            HostValue::Scalar(v) => v.data_type().to_string(),
            HostValue::Array(col) => col.data_type().to_string(),
            HostValue::Cell(_) => "cell".to_string(),
            HostValue::Masks(_) => "mask batch".to_string(),
        }
    }

    pub fn into_masks(self) -> Option<MaskBatch> {
        match self {
            HostValue::Masks(masks) => Some(masks),
            _ => None,
        }
    }
}

impl From<Vec<Vec<u64>>> for HostValue {
    fn from(sets: Vec<Vec<u64>>) -> Self {
        HostValue::Cell(sets.into_iter().map(|s| HostValue::Array(IndexColumn::UInt64(s))).collect())
    }
}

impl From<u64> for HostValue {
    fn from(length: u64) -> Self { HostValue::Scalar(ScalarValue::UInt64(length)) }
}

/// Entry point: `masks = convert(indices, length)`.
pub fn call(inputs: &[HostValue], nargout: usize) -> Result<Vec<HostValue>> {
    call_with(&Converter::default(), inputs, nargout)
}

pub fn call_with(converter: &Converter, inputs: &[HostValue], nargout: usize) -> Result<Vec<HostValue>> {
    if inputs.len() != 2 {
        return Err(MaskError::Arity(format!("wrong number of inputs: expected 2, got {}", inputs.len())));
    }
    if nargout != 1 {
        return Err(MaskError::Arity(format!("wrong number of outputs: expected 1, got {}", nargout)));
    }
    let cells = match &inputs[0] {
        HostValue::Cell(cells) => cells,
        other => {
            return Err(MaskError::Shape(format!("indices must be a cell container, got {}", other.type_name())));
        }
    };
    let length = length_from(&inputs[1])?;
    let len = check_batch_size(cells.len(), length)?;
    let sets = index_sets(cells, length)?;
    debug!("host call with {} index sets, length {}", sets.len(), length);

    let masks = converter.convert_validated(&sets, len)?;
    Ok(vec![HostValue::Masks(masks)])
}

fn length_from(value: &HostValue) -> Result<u64> {
    let scalar = match value {
        HostValue::Scalar(s) => s.clone(),
        HostValue::Array(col) if col.len() == 1 && col.data_type().is_numeric() => match col.get(0) {
            Some(s) => s,
            None => return Err(MaskError::Shape("length must be a scalar".to_string())),
        },
        HostValue::Array(col) if col.len() != 1 => {
            return Err(MaskError::Shape(format!("length must be a scalar, got {} elements", col.len())));
        }
        other => {
            return Err(MaskError::Shape(format!("length must be a numeric scalar, got {}", other.type_name())));
        }
    };
    match scalar {
        ScalarValue::UInt64(n) => Ok(n),
        ScalarValue::Int64(n) if n >= 0 => Ok(n as u64),
        // 2^64 is exactly representable; anything below it fits.
        ScalarValue::Float64(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f < 18_446_744_073_709_551_616.0 => {
            Ok(f as u64)
        }
        ScalarValue::Int64(_) | ScalarValue::Float64(_) => {
            Err(MaskError::Shape(format!("length must be a non-negative integer, got {}", scalar)))
        }
        other => Err(MaskError::Shape(format!("length must be numeric, got {}", other.data_type()))),
    }
}

fn index_sets(cells: &[HostValue], length: u64) -> Result<Vec<Cow<'_, [u64]>>> {
    cells
        .iter()
        .enumerate()
        .map(|(set, cell)| match cell {
            HostValue::Array(col) => {
                let indices = col.to_indices(set, length)?;
                check_set(set, &indices, length)?;
                Ok(indices)
            }
            other => Err(MaskError::ElementType { set, found: other.type_name() }),
        })
        .collect()
}
