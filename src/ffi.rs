use crate::bitmap::MaskBatch;
use crate::convert::convert;
use crate::error::MaskError;
use std::ffi::CString;
use std::os::raw::c_char;

pub struct MaskBatchHandle {
    masks: MaskBatch,
}

fn write_error(err_out: *mut *mut c_char, err: &MaskError) {
    if err_out.is_null() { return; }
    let msg = format!("{}: {}", err.identifier(), err);
    let raw = match CString::new(msg) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    };
    unsafe { *err_out = raw; }
}

/// Converts `n_sets` index sets into masks of `length` positions.
///
/// `sets[i]` points at `set_lens[i]` indices. Returns null on failure and, when
/// `err_out` is non-null, stores a message there that must be released with
/// `index_mask_string_free`.
#[no_mangle]
pub extern "C" fn index_mask_convert(
    sets: *const *const u64,
    set_lens: *const usize,
    n_sets: usize,
    length: u64,
    err_out: *mut *mut c_char,
) -> *mut MaskBatchHandle {
    if !err_out.is_null() {
        unsafe { *err_out = std::ptr::null_mut(); }
    }
    if n_sets > 0 && (sets.is_null() || set_lens.is_null()) {
        write_error(err_out, &MaskError::Shape("index set table is null".to_string()));
        return std::ptr::null_mut();
    }
    let mut batch: Vec<&[u64]> = Vec::with_capacity(n_sets);
    for i in 0..n_sets {
        let (ptr, len) = unsafe { (*sets.add(i), *set_lens.add(i)) };
        if len == 0 {
            batch.push(&[]);
        } else if ptr.is_null() {
            write_error(err_out, &MaskError::Shape(format!("index set {} is null", i)));
            return std::ptr::null_mut();
        } else {
            batch.push(unsafe { std::slice::from_raw_parts(ptr, len) });
        }
    }
    match convert(&batch, length) {
        Ok(masks) => Box::into_raw(Box::new(MaskBatchHandle { masks })),
        Err(err) => {
            write_error(err_out, &err);
            std::ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "C" fn index_mask_batch_len(handle: *const MaskBatchHandle) -> usize {
    if handle.is_null() { return 0; }
    unsafe { (*handle).masks.len() }
}

#[no_mangle]
pub extern "C" fn index_mask_batch_mask_len(handle: *const MaskBatchHandle, idx: usize) -> usize {
    if handle.is_null() { return 0; }
    let masks = unsafe { &(*handle).masks };
    masks.get(idx).map(|m| m.len()).unwrap_or(0)
}

/// Borrowed pointer to mask `idx`; valid until the batch is freed.
#[no_mangle]
pub extern "C" fn index_mask_batch_mask_data(handle: *const MaskBatchHandle, idx: usize) -> *const bool {
    if handle.is_null() { return std::ptr::null(); }
    let masks = unsafe { &(*handle).masks };
    match masks.get(idx) {
        Some(m) => m.as_slice().as_ptr(),
        None => std::ptr::null(),
    }
}

#[no_mangle]
pub extern "C" fn index_mask_batch_free(handle: *mut MaskBatchHandle) {
    if !handle.is_null() {
        unsafe { drop(Box::from_raw(handle)); }
    }
}

#[no_mangle]
pub extern "C" fn index_mask_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe { drop(CString::from_raw(s)); }
    }
}
