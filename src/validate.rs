use crate::error::{MaskError, Result};

/// Checks that a mask of `length` positions is addressable on this platform.
pub fn check_length(length: u64) -> Result<usize> {
    usize::try_from(length).map_err(|_| {
        MaskError::Shape(format!("length {} exceeds the addressable size {}", length, usize::MAX))
    })
}

/// Checks every value of one index set against `[0, length)`.
pub fn check_set(set: usize, values: &[u64], length: u64) -> Result<()> {
    match values.iter().position(|&v| v >= length) {
        Some(element) => Err(MaskError::Range {
            set,
            element,
            value: values[element] as i128,
            length,
        }),
        None => Ok(()),
    }
}

/// Checks that `sets` masks of `length` positions are addressable together.
pub fn check_batch_size(sets: usize, length: u64) -> Result<usize> {
    let len = check_length(length)?;
    if sets.checked_mul(len).is_none() {
        return Err(MaskError::Shape(format!(
            "{} masks of length {} exceed the addressable size", sets, length
        )));
    }
    Ok(len)
}

/// Validates the whole batch before any mask is allocated.
///
/// Returns the mask length as `usize`. The first failing set in batch order is reported.
pub fn validate_batch<S: AsRef<[u64]>>(batch: &[S], length: u64) -> Result<usize> {
    let len = check_batch_size(batch.len(), length)?;
    for (set, values) in batch.iter().enumerate() {
        check_set(set, values.as_ref(), length)?;
    }
    Ok(len)
}
