//! Predicate capabilities accepted by filtering operations.
//!
//! A filter can be driven by two kinds of capability:
//!
//! - a **callable**: any `Fn(&T) -> bool` / `FnMut(&T) -> bool`
//! - a **matcher**: an object implementing [`Matcher`], which exposes a
//!   `matches` operation
//!
//! [`Predicate`] normalizes both into a single test before any item is
//! visited. [`Predicate::from_any`] is the dynamic entry point: it inspects a
//! type-erased capability and rejects anything it does not recognize with
//! [`CollectionError::InvalidArgument`].
//!
//! # Examples
//!
//! ```rust
//! use persistent_collection::predicate::{Matcher, Predicate};
//!
//! struct StartsWith(&'static str);
//!
//! impl Matcher<String> for StartsWith {
//!     fn matches(&self, item: &String) -> bool {
//!         item.starts_with(self.0)
//!     }
//! }
//!
//! let matcher = StartsWith("Hello");
//! let mut predicate = Predicate::from_matcher(&matcher);
//! assert!(predicate.test(&"Hello there".to_string()));
//! assert!(!predicate.test(&"Goodbye".to_string()));
//! ```

use std::any::Any;
use std::fmt;

use crate::error::CollectionError;

// =============================================================================
// Matcher
// =============================================================================

/// An object that decides whether an item matches.
///
/// Every `Fn(&T) -> bool` is a `Matcher<T>`, so closures can be used
/// wherever a matcher is expected.
pub trait Matcher<T: ?Sized> {
    /// Returns `true` if `item` matches.
    fn matches(&self, item: &T) -> bool;
}

impl<T: ?Sized, F> Matcher<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

// =============================================================================
// Predicate
// =============================================================================

/// A boxed callable predicate, the type-erased form [`Predicate::from_any`]
/// recognizes as a callable.
pub type BoxedPredicate<T> = Box<dyn Fn(&T) -> bool>;

/// A boxed matcher object, the type-erased form [`Predicate::from_any`]
/// recognizes as a matcher.
pub type BoxedMatcher<T> = Box<dyn Matcher<T>>;

/// Thread-safe twin of [`BoxedPredicate`].
pub type SharedPredicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Thread-safe twin of [`BoxedMatcher`].
pub type SharedMatcher<T> = Box<dyn Matcher<T> + Send + Sync>;

/// A predicate capability normalized to a single `&T -> bool` test.
pub enum Predicate<'a, T> {
    /// A callable predicate.
    Callable(Box<dyn FnMut(&T) -> bool + 'a>),
    /// A matcher object.
    Matcher(&'a dyn Matcher<T>),
}

impl<'a, T> Predicate<'a, T> {
    /// Wraps a callable predicate.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: FnMut(&T) -> bool + 'a,
    {
        Self::Callable(Box::new(function))
    }

    /// Wraps a matcher object.
    pub fn from_matcher<M>(matcher: &'a M) -> Self
    where
        M: Matcher<T>,
    {
        Self::Matcher(matcher)
    }

    /// Evaluates the predicate for `item`.
    #[inline]
    pub fn test(&mut self, item: &T) -> bool {
        match self {
            Self::Callable(function) => function(item),
            Self::Matcher(matcher) => matcher.matches(item),
        }
    }
}

impl<'a, T: 'static> Predicate<'a, T> {
    /// Recognizes a type-erased capability.
    ///
    /// Accepted callables are `fn(&T) -> bool` pointers,
    /// [`BoxedPredicate<T>`] and [`SharedPredicate<T>`]. Accepted matchers
    /// are [`BoxedMatcher<T>`] and [`SharedMatcher<T>`].
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] when `capability` is
    /// neither form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_collection::predicate::{BoxedPredicate, Predicate};
    ///
    /// let even: BoxedPredicate<i32> = Box::new(|value: &i32| value % 2 == 0);
    /// assert!(Predicate::<i32>::from_any(&even).is_ok());
    ///
    /// fn is_odd(value: &i32) -> bool {
    ///     value % 2 == 1
    /// }
    /// let odd: fn(&i32) -> bool = is_odd;
    /// assert!(Predicate::<i32>::from_any(&odd).is_ok());
    ///
    /// let not_a_predicate = "even";
    /// assert!(Predicate::<i32>::from_any(&not_a_predicate).is_err());
    /// ```
    pub fn from_any(capability: &'a dyn Any) -> Result<Self, CollectionError> {
        if let Some(function) = capability.downcast_ref::<fn(&T) -> bool>() {
            return Ok(Self::from_fn(move |item: &T| function(item)));
        }
        if let Some(function) = capability.downcast_ref::<BoxedPredicate<T>>() {
            return Ok(Self::from_fn(move |item: &T| function(item)));
        }
        if let Some(function) = capability.downcast_ref::<SharedPredicate<T>>() {
            return Ok(Self::from_fn(move |item: &T| function(item)));
        }
        if let Some(matcher) = capability.downcast_ref::<BoxedMatcher<T>>() {
            return Ok(Self::Matcher(&**matcher));
        }
        if let Some(matcher) = capability.downcast_ref::<SharedMatcher<T>>() {
            return Ok(Self::Matcher(&**matcher));
        }
        tracing::debug!(
            item_type = std::any::type_name::<T>(),
            "rejected filter capability"
        );
        Err(CollectionError::invalid_argument(format!(
            "expected a predicate or matcher over {}",
            std::any::type_name::<T>()
        )))
    }
}

impl<T> fmt::Debug for Predicate<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callable(_) => formatter.write_str("Predicate::Callable"),
            Self::Matcher(_) => formatter.write_str("Predicate::Matcher"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct LongerThan(usize);

    impl Matcher<str> for LongerThan {
        fn matches(&self, item: &str) -> bool {
            item.len() > self.0
        }
    }

    impl Matcher<String> for LongerThan {
        fn matches(&self, item: &String) -> bool {
            item.len() > self.0
        }
    }

    #[rstest]
    fn test_closure_is_matcher() {
        let even = |value: &i32| value % 2 == 0;
        assert!(even.matches(&4));
        assert!(!even.matches(&3));
    }

    #[rstest]
    fn test_unsized_matcher() {
        assert!(LongerThan(2).matches("abc"));
        assert!(!LongerThan(2).matches("ab"));
    }

    #[rstest]
    fn test_from_fn_allows_state() {
        let mut calls = 0;
        {
            let mut predicate = Predicate::from_fn(|value: &i32| {
                calls += 1;
                *value > 1
            });
            assert!(!predicate.test(&1));
            assert!(predicate.test(&2));
        }
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn test_from_any_callable() {
        let positive: BoxedPredicate<i32> = Box::new(|value: &i32| *value > 0);
        let mut predicate = Predicate::<i32>::from_any(&positive).unwrap();
        assert!(matches!(predicate, Predicate::Callable(_)));
        assert!(predicate.test(&1));
        assert!(!predicate.test(&-1));
    }

    #[rstest]
    fn test_from_any_matcher() {
        let matcher: BoxedMatcher<String> = Box::new(LongerThan(3));
        let mut predicate = Predicate::<String>::from_any(&matcher).unwrap();
        assert!(matches!(predicate, Predicate::Matcher(_)));
        assert!(predicate.test(&"four".to_string()));
        assert!(!predicate.test(&"one".to_string()));
    }

    fn is_negative(value: &i32) -> bool {
        *value < 0
    }

    #[rstest]
    fn test_from_any_function_pointer() {
        let pointer: fn(&i32) -> bool = is_negative;
        let mut predicate = Predicate::<i32>::from_any(&pointer).unwrap();
        assert!(matches!(predicate, Predicate::Callable(_)));
        assert!(predicate.test(&-3));
        assert!(!predicate.test(&3));
    }

    #[rstest]
    fn test_from_any_thread_safe_forms() {
        let callable: SharedPredicate<String> = Box::new(|value: &String| value.is_empty());
        let mut predicate = Predicate::<String>::from_any(&callable).unwrap();
        assert!(predicate.test(&String::new()));

        let matcher: SharedMatcher<String> = Box::new(LongerThan(1));
        let mut predicate = Predicate::<String>::from_any(&matcher).unwrap();
        assert!(matches!(predicate, Predicate::Matcher(_)));
        assert!(predicate.test(&"ab".to_string()));
    }

    #[rstest]
    fn test_from_any_rejects_unknown_capability() {
        let error = Predicate::<i32>::from_any(&42_u8).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[rstest]
    fn test_from_any_rejects_predicate_over_other_type() {
        let over_strings: BoxedPredicate<String> = Box::new(|value: &String| value.is_empty());
        let error = Predicate::<i32>::from_any(&over_strings).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[rstest]
    fn test_debug() {
        let predicate = Predicate::from_fn(|_: &i32| true);
        assert_eq!(format!("{predicate:?}"), "Predicate::Callable");
    }
}
