//! Interior mutability for [`GameSession`](crate::GameSession).
//!
//! With `std` this wraps `std::sync::Mutex` and recovers from poisoning, so a
//! panicking presentation callback cannot brick the session. Without `std`
//! it falls back to `spin::Mutex`.

#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;
