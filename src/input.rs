//! Adapters from C-style inputs onto [`StringMap::get`].

use std::ffi::{c_char, CStr};

use crate::StringMap;

impl<V: Clone> StringMap<V> {
    /// Returns the value for the bytes of `key` up to, not including, its
    /// first zero byte. A key without a zero byte is used whole.
    pub fn get_nul_terminated(&self, key: &[u8]) -> V {
        let len = key.iter().position(|&b| b == 0).unwrap_or(key.len());
        self.get(&key[..len])
    }

    /// Returns the value for a C string, excluding its terminator.
    pub fn get_cstr(&self, key: &CStr) -> V {
        self.get(key.to_bytes())
    }

    /// Returns the value for the `len` bytes at `ptr`.
    ///
    /// A null `ptr` yields the default value and is never dereferenced.
    ///
    /// # Safety
    ///
    /// If `ptr` is non-null it must be valid for reads of `len` bytes, as
    /// required by [`std::slice::from_raw_parts`].
    pub unsafe fn get_raw(&self, ptr: *const u8, len: usize) -> V {
        if ptr.is_null() {
            return self.default.clone();
        }
        // SAFETY: non-null, and the caller guarantees `len` readable bytes.
        let key = unsafe { std::slice::from_raw_parts(ptr, len) };
        self.get(key)
    }

    /// Returns the value for the zero-terminated string at `ptr`.
    ///
    /// A null `ptr` yields the default value and is never dereferenced.
    ///
    /// # Safety
    ///
    /// If `ptr` is non-null it must point to a zero-terminated string, as
    /// required by [`CStr::from_ptr`].
    pub unsafe fn get_c_ptr(&self, ptr: *const c_char) -> V {
        if ptr.is_null() {
            return self.default.clone();
        }
        // SAFETY: non-null, and the caller guarantees a terminator.
        let key = unsafe { CStr::from_ptr(ptr) };
        self.get_cstr(key)
    }
}
