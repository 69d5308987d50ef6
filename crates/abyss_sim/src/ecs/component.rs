//! Component trait

/// Marker trait for components
///
/// Every type stored in a [`ComponentTable`](super::ComponentTable) implements
/// this. The name is used in diagnostics when a table invariant is violated.
pub trait Component: 'static {
    /// Human readable component name for error messages
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}
