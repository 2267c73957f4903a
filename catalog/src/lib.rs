//! # Solid Catalog
//!
//! Product filtering through a composable specification pattern.
//!
//! This crate is a worked example of the Open/Closed Principle: the
//! [`filter`] function is closed against modification, and filtering
//! behavior is extended by adding new [`Specification`] types rather than
//! by editing it.
//!
//! ## Design Principles
//!
//! - **Specifications are data**: each concrete specification holds its
//!   comparison target and nothing else.
//! - **Composition over enumeration**: conjunction, disjunction, and
//!   negation are their own specification types, so arbitrary predicate
//!   trees are built from the same small vocabulary.
//! - **Aliasing preserved**: filtering returns references into the input
//!   slice, never copies.
//!
//! ## Quick Start
//!
//! ```rust
//! use solid_catalog::{
//!     filter, Color, ColorSpecification, Product, Size, SizeSpecification, Specification,
//! };
//!
//! let products = vec![
//!     Product::new("Apple", Color::Green, Size::Small),
//!     Product::new("Tree", Color::Green, Size::Large),
//!     Product::new("House", Color::Blue, Size::Large),
//! ];
//!
//! let large_green =
//!     ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));
//!
//! let matches = filter(&products, &large_green);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].name, "Tree");
//! ```

pub mod filter;
pub mod product;
pub mod spec;

// Re-export main types at crate root
pub use filter::filter;
pub use product::{Color, Product, Size};
pub use spec::{
    AndSpecification, ColorSpecification, NotSpecification, OrSpecification, SizeSpecification,
    Specification,
};
