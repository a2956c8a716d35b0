use crate::error::FrameError;
use num_traits::{Num, NumCast};
use std::fmt::{Debug, Display};

/// A trait for types that can be stored in a frame.
/// Integers are valid scalars, so this only asks for ring arithmetic, casts,
/// and what nalgebra needs to back a vector with it.
pub trait Scalar: nalgebra::Scalar + Num + NumCast + Copy + Debug + Display + 'static {}

impl<T> Scalar for T where T: nalgebra::Scalar + Num + NumCast + Copy + Debug + Display + 'static {}

/// A numeric vector whose slots are addressable both by offset and by name.
///
/// Offsets outside `0..dimension()` panic, the same as slice indexing.
pub trait Frame<T: Scalar> {
    /// Returns the number of coordinates.
    fn dimension(&self) -> usize;

    fn value(&self, index: usize) -> T;

    fn set_value(&mut self, index: usize, value: T);

    /// Resolves a coordinate name to its offset.
    fn index_of(&self, name: &str) -> Result<usize, FrameError>;

    /// Returns the name registered at `index`, if any.
    fn coordinate_name(&self, index: usize) -> Option<&str>;

    /// Produces an independent copy with the same layout and values.
    fn duplicate(&self) -> Box<dyn Frame<T>>;

    fn value_of(&self, name: &str) -> Result<T, FrameError> {
        Ok(self.value(self.index_of(name)?))
    }

    fn set_value_of(&mut self, name: &str, value: T) -> Result<(), FrameError> {
        let index = self.index_of(name)?;
        self.set_value(index, value);
        Ok(())
    }

    fn coordinate_names(&self) -> Vec<&str> {
        (0..self.dimension())
            .filter_map(|i| self.coordinate_name(i))
            .collect()
    }

    fn values(&self) -> Vec<T> {
        (0..self.dimension()).map(|i| self.value(i)).collect()
    }

    /// True when both frames declare the same coordinates in the same order.
    fn same_layout(&self, other: &dyn Frame<T>) -> bool {
        self.dimension() == other.dimension()
            && (0..self.dimension()).all(|i| self.coordinate_name(i) == other.coordinate_name(i))
    }
}

/// Represents a dynamics function (one simulation stage).
///
/// The interface is object safe, so it cannot carry a generic method. Instead it
/// exposes one entry point per supported scalar type; implementors keep a single
/// generic `dynamics::<T>` body and generate these with [`impl_system_dispatch!`].
///
/// [`impl_system_dispatch!`]: crate::impl_system_dispatch
pub trait System {
    /// x: input frame
    /// xdot: output frame, populated from x
    fn dynamics_f64(&self, x: &dyn Frame<f64>, xdot: &mut dyn Frame<f64>)
        -> Result<(), FrameError>;

    fn dynamics_i32(&self, x: &dyn Frame<i32>, xdot: &mut dyn Frame<i32>)
        -> Result<(), FrameError>;
}

pub(crate) mod sealed {
    pub trait Sealed {}

    impl Sealed for f64 {}
    impl Sealed for i32 {}
}

/// The closed set of scalars a [`System`] can be evaluated with.
/// Maps a generic call site onto the matching non-generic entry point.
pub trait DispatchScalar: Scalar + sealed::Sealed {
    fn dispatch(
        system: &dyn System,
        x: &dyn Frame<Self>,
        xdot: &mut dyn Frame<Self>,
    ) -> Result<(), FrameError>;
}

impl DispatchScalar for f64 {
    fn dispatch(
        system: &dyn System,
        x: &dyn Frame<f64>,
        xdot: &mut dyn Frame<f64>,
    ) -> Result<(), FrameError> {
        system.dynamics_f64(x, xdot)
    }
}

impl DispatchScalar for i32 {
    fn dispatch(
        system: &dyn System,
        x: &dyn Frame<i32>,
        xdot: &mut dyn Frame<i32>,
    ) -> Result<(), FrameError> {
        system.dynamics_i32(x, xdot)
    }
}

/// Evaluates `system` for any supported scalar type.
pub fn evaluate<T: DispatchScalar>(
    system: &dyn System,
    x: &dyn Frame<T>,
    xdot: &mut dyn Frame<T>,
) -> Result<(), FrameError> {
    T::dispatch(system, x, xdot)
}

/// Implements [`System`] for a type with an inherent
/// `fn dynamics<T: ...>(&self, &dyn Frame<T>, &mut dyn Frame<T>) -> Result<(), FrameError>`
/// by forwarding both scalar entry points to it.
#[macro_export]
macro_rules! impl_system_dispatch {
    ($ty:ty) => {
        impl $crate::traits::System for $ty {
            fn dynamics_f64(
                &self,
                x: &dyn $crate::traits::Frame<f64>,
                xdot: &mut dyn $crate::traits::Frame<f64>,
            ) -> ::core::result::Result<(), $crate::error::FrameError> {
                self.dynamics::<f64>(x, xdot)
            }

            fn dynamics_i32(
                &self,
                x: &dyn $crate::traits::Frame<i32>,
                xdot: &mut dyn $crate::traits::Frame<i32>,
            ) -> ::core::result::Result<(), $crate::error::FrameError> {
                self.dynamics::<i32>(x, xdot)
            }
        }
    };
}
