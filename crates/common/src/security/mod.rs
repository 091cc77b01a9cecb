//! Security primitives for handling sensitive material
//!
//! Secret containers that zeroize on drop, a scope guard for wiping borrowed
//! buffers on every exit path, and memory barrier helpers.

pub mod secret;

pub use secret::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

/// Memory barrier utilities
pub mod barrier {
    use core::sync::atomic::{compiler_fence, fence, Ordering};

    /// Insert a compiler fence to prevent reordering
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }

    /// Insert a full memory fence
    #[inline(always)]
    pub fn memory_fence_seq_cst() {
        fence(Ordering::SeqCst);
    }
}
