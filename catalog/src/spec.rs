//! Specification pattern - composable predicates over products.
//!
//! New filtering criteria are added by writing new specification types, not
//! by editing existing filter code. Composites hold their children by value
//! and recurse on evaluation, so specification trees of arbitrary depth
//! type-check; boxed trait objects compose too through the blanket impls
//! below.

use crate::{Color, Product, Size};
use serde::{Deserialize, Serialize};

/// A reusable predicate over a [`Product`].
pub trait Specification {
    /// Check whether `product` satisfies this specification.
    fn is_satisfied(&self, product: &Product) -> bool;

    /// Combine with another specification; both must be satisfied.
    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: Specification,
    {
        AndSpecification::new(self, other)
    }

    /// Combine with another specification; either may be satisfied.
    fn or<S>(self, other: S) -> OrSpecification<Self, S>
    where
        Self: Sized,
        S: Specification,
    {
        OrSpecification::new(self, other)
    }

    /// Negate this specification.
    fn not(self) -> NotSpecification<Self>
    where
        Self: Sized,
    {
        NotSpecification::new(self)
    }
}

impl<S: Specification + ?Sized> Specification for &S {
    fn is_satisfied(&self, product: &Product) -> bool {
        (**self).is_satisfied(product)
    }
}

impl<S: Specification + ?Sized> Specification for Box<S> {
    fn is_satisfied(&self, product: &Product) -> bool {
        (**self).is_satisfied(product)
    }
}

/// Satisfied by products of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSpecification {
    /// Color a product must have
    pub color: Color,
}

impl ColorSpecification {
    /// Create a specification for `color`.
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification for ColorSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.color == self.color
    }
}

/// Satisfied by products of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeSpecification {
    /// Size a product must have
    pub size: Size,
}

impl SizeSpecification {
    /// Create a specification for `size`.
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification for SizeSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.size == self.size
    }
}

/// Satisfied when both child specifications are satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndSpecification<A, B> {
    /// First child
    pub first: A,
    /// Second child
    pub second: B,
}

impl<A, B> AndSpecification<A, B> {
    /// Compose two specifications conjunctively.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Specification, B: Specification> Specification for AndSpecification<A, B> {
    fn is_satisfied(&self, product: &Product) -> bool {
        self.first.is_satisfied(product) && self.second.is_satisfied(product)
    }
}

/// Satisfied when either child specification is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrSpecification<A, B> {
    /// First child
    pub first: A,
    /// Second child
    pub second: B,
}

impl<A, B> OrSpecification<A, B> {
    /// Compose two specifications disjunctively.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Specification, B: Specification> Specification for OrSpecification<A, B> {
    fn is_satisfied(&self, product: &Product) -> bool {
        self.first.is_satisfied(product) || self.second.is_satisfied(product)
    }
}

/// Satisfied when the child specification is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSpecification<S> {
    /// Negated child
    pub inner: S,
}

impl<S> NotSpecification<S> {
    /// Negate a specification.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Specification> Specification for NotSpecification<S> {
    fn is_satisfied(&self, product: &Product) -> bool {
        !self.inner.is_satisfied(product)
    }
}
