//! Guard predicates.
//!
//! Guards are pure boolean functions over a borrowed value. They back both
//! the reservation filter (one guard per active constraint) and the
//! presentation policy that decides which status actions are offered.

use std::fmt;

/// Pure predicate over `T`.
///
/// # Example
///
/// ```rust
/// use velodesk::core::Guard;
///
/// let short = Guard::new(|s: &str| s.len() < 4);
/// let lower = Guard::new(|s: &str| s.chars().all(|c| c.is_lowercase()));
/// let both = Guard::all(vec![short, lower]);
///
/// assert!(both.check("abc"));
/// assert!(!both.check("ABC"));
/// assert!(!both.check("abcdef"));
/// ```
pub struct Guard<T: ?Sized> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized + 'static> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Conjunction of guards. An empty list accepts every value.
    pub fn all(guards: Vec<Guard<T>>) -> Self {
        Guard::new(move |value: &T| guards.iter().all(|g| g.check(value)))
    }

    /// Disjunction of guards. An empty list rejects every value.
    pub fn any(guards: Vec<Guard<T>>) -> Self {
        Guard::new(move |value: &T| guards.iter().any(|g| g.check(value)))
    }

    /// Check if the guard accepts this value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T: ?Sized> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
