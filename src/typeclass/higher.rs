//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Vector<_>` as a type constructor directly, so
//! [`TypeConstructor`] names the applied type (`Inner`) and the same
//! constructor applied to another type (`WithType<B>`).

/// A type constructor applied to some type `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be the same type as `F`.
///
/// # Example
///
/// ```rust
/// use persistent_collection::persistent::Vector;
/// use persistent_collection::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Vector<i32>>();
/// ```
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same type constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
