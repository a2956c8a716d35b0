//! The `frame_core` crate provides named state frames and dynamics functions
//! that are evaluated over more than one scalar type through a non-generic
//! interface.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `Frame` (named vector),
//!   `System` (dynamics function), `DispatchScalar` (per-scalar entry points).
//! - **Frames**: `VectorFrame` (runtime layout, hashed names) and
//!   `ExampleStaticFrame` (compile-time layout, `const fn` name resolution).
//! - **Systems**: `ExampleStaticSystem`, a double-integrator half step.
//! - **Chain**: composition of two systems through a scratch frame.
pub mod chain;
pub mod error;
pub mod frame;
pub mod static_frame;
pub mod systems;
pub mod traits;

pub use chain::{Chain, ChainSettings, IntermediateShape};
pub use error::FrameError;
pub use frame::{FrameSnapshot, VectorFrame};
pub use static_frame::{ExampleLayout, ExampleStaticFrame};
pub use systems::ExampleStaticSystem;
pub use traits::{evaluate, DispatchScalar, Frame, Scalar, System};
