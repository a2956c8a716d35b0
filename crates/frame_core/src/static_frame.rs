//! Frames with a layout fixed at compile time.
//!
//! Coordinate names are matched with `const fn` string comparison, so a literal
//! name resolves during compilation (see [`static_index!`]) and costs nothing at
//! run time. Resolving a name that is only known at run time walks the same
//! table and reports [`FrameError::NameNotFound`] on a miss.
//!
//! [`static_index!`]: crate::static_index

use crate::error::FrameError;
use crate::traits::{Frame, Scalar};
use nalgebra::Vector2;

/// Byte-wise string equality usable in constant expressions.
pub const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Sequential lookup of `name` in a coordinate table.
pub const fn resolve(table: &[&str], name: &str) -> Option<usize> {
    let mut i = 0;
    while i < table.len() {
        if str_eq(table[i], name) {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Resolves a literal coordinate name against a type exposing
/// `const fn lookup(&str) -> Option<usize>`, inside a `const` item.
///
/// An unknown name fails compilation. The type must not mention generic
/// parameters of the enclosing item.
///
/// ```
/// use frame_core::static_frame::ExampleLayout;
/// let qdot = frame_core::static_index!(ExampleLayout, "qdot");
/// assert_eq!(qdot, 1);
/// ```
#[macro_export]
macro_rules! static_index {
    ($layout:ty, $name:literal) => {{
        const INDEX: usize = match <$layout>::lookup($name) {
            Some(index) => index,
            None => panic!(concat!("coordinate `", $name, "` not found")),
        };
        INDEX
    }};
}

/// Coordinate table of [`ExampleStaticFrame`]: position then velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleLayout;

impl ExampleLayout {
    pub const COORDINATES: [&'static str; 2] = ["q", "qdot"];

    pub const fn lookup(name: &str) -> Option<usize> {
        resolve(&Self::COORDINATES, name)
    }

    /// Non-failing query form: -1 when `name` is not a coordinate.
    pub const fn index_static(name: &str) -> isize {
        match Self::lookup(name) {
            Some(index) => index as isize,
            None => -1,
        }
    }
}

/// Two-slot frame holding `q` and `qdot`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExampleStaticFrame<T: Scalar> {
    data: Vector2<T>,
}

impl<T: Scalar> ExampleStaticFrame<T> {
    pub fn new() -> Self {
        Self {
            data: Vector2::zeros(),
        }
    }

    pub fn from_values(q: T, qdot: T) -> Self {
        Self {
            data: Vector2::new(q, qdot),
        }
    }

    pub const fn lookup(name: &str) -> Option<usize> {
        ExampleLayout::lookup(name)
    }

    pub const fn index_static(name: &str) -> isize {
        ExampleLayout::index_static(name)
    }

    pub fn data(&self) -> &Vector2<T> {
        &self.data
    }
}

impl<T: Scalar> Default for ExampleStaticFrame<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Frame<T> for ExampleStaticFrame<T> {
    fn dimension(&self) -> usize {
        ExampleLayout::COORDINATES.len()
    }

    fn value(&self, index: usize) -> T {
        self.data[index]
    }

    fn set_value(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }

    fn index_of(&self, name: &str) -> Result<usize, FrameError> {
        Self::lookup(name).ok_or_else(|| FrameError::NameNotFound(name.to_string()))
    }

    fn coordinate_name(&self, index: usize) -> Option<&str> {
        ExampleLayout::COORDINATES.get(index).copied()
    }

    fn duplicate(&self) -> Box<dyn Frame<T>> {
        Box::new(*self)
    }
}
