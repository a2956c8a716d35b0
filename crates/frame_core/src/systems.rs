use crate::error::FrameError;
use crate::traits::{Frame, Scalar};

/// Half step of a double integrator: q' = qdot, qdot' = 1.
///
/// Works on any frame declaring `q` and `qdot`, resolving both by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExampleStaticSystem;

impl ExampleStaticSystem {
    pub fn dynamics<T: Scalar>(
        &self,
        x: &dyn Frame<T>,
        xdot: &mut dyn Frame<T>,
    ) -> Result<(), FrameError> {
        let q = xdot.index_of("q")?;
        let velocity = x.value(x.index_of("qdot")?);
        xdot.set_value(q, velocity);

        let qdot = xdot.index_of("qdot")?;
        xdot.set_value(qdot, T::one());
        Ok(())
    }
}

crate::impl_system_dispatch!(ExampleStaticSystem);
