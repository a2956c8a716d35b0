use crate::error::FrameError;
use crate::traits::{DispatchScalar, Frame, System};
use log::trace;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Which frame the intermediate vector of a [`Chain`] copies its layout from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntermediateShape {
    /// Duplicate the output frame.
    #[default]
    Output,
    /// Duplicate the input frame.
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSettings {
    pub intermediate: IntermediateShape,
    /// Reject input and output frames whose coordinates differ.
    pub check_layout: bool,
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            intermediate: IntermediateShape::Output,
            check_layout: true,
        }
    }
}

/// Runs `first` into a scratch frame, then `second` from the scratch frame into
/// the output. A chain is itself a [`System`], so chains nest.
pub struct Chain<'a> {
    first: &'a dyn System,
    second: &'a dyn System,
    settings: ChainSettings,
}

impl<'a> Chain<'a> {
    pub fn new(first: &'a dyn System, second: &'a dyn System) -> Self {
        Self::with_settings(first, second, ChainSettings::default())
    }

    pub fn with_settings(
        first: &'a dyn System,
        second: &'a dyn System,
        settings: ChainSettings,
    ) -> Self {
        Self {
            first,
            second,
            settings,
        }
    }

    pub fn settings(&self) -> ChainSettings {
        self.settings
    }

    pub fn dynamics<T: DispatchScalar>(
        &self,
        x: &dyn Frame<T>,
        xdot: &mut dyn Frame<T>,
    ) -> Result<(), FrameError> {
        if self.settings.check_layout && !x.same_layout(&*xdot) {
            return Err(FrameError::LayoutMismatch {
                expected: owned_names(x),
                found: owned_names(&*xdot),
            });
        }

        let mut intermediate = match self.settings.intermediate {
            IntermediateShape::Output => xdot.duplicate(),
            IntermediateShape::Input => x.duplicate(),
        };
        trace!(
            "chain intermediate shaped from {:?}: [{}]",
            self.settings.intermediate,
            intermediate.coordinate_names().join(", ")
        );

        T::dispatch(self.first, x, intermediate.as_mut())?;
        trace!("chain first stage done");
        T::dispatch(self.second, intermediate.as_ref(), xdot)
    }
}

crate::impl_system_dispatch!(Chain<'_>);

fn owned_names<T: DispatchScalar>(frame: &dyn Frame<T>) -> Vec<String> {
    frame
        .coordinate_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Evaluates `system` chained with itself `stages` times.
/// One stage is a plain evaluation.
///
/// Produces the same result as nesting `stages - 1` [`Chain`]s with `settings`,
/// without recursion: every stage but the last writes into a fresh scratch
/// frame shaped per `settings.intermediate`.
pub fn evaluate_repeated<T: DispatchScalar>(
    system: &dyn System,
    stages: NonZeroUsize,
    settings: ChainSettings,
    x: &dyn Frame<T>,
    xdot: &mut dyn Frame<T>,
) -> Result<(), FrameError> {
    if stages.get() == 1 {
        return T::dispatch(system, x, xdot);
    }
    if settings.check_layout && !x.same_layout(&*xdot) {
        return Err(FrameError::LayoutMismatch {
            expected: owned_names(x),
            found: owned_names(&*xdot),
        });
    }

    let scratch = |x: &dyn Frame<T>, xdot: &dyn Frame<T>| match settings.intermediate {
        IntermediateShape::Output => xdot.duplicate(),
        IntermediateShape::Input => x.duplicate(),
    };

    let mut current = scratch(x, &*xdot);
    T::dispatch(system, x, current.as_mut())?;
    for stage in 2..stages.get() {
        let mut next = scratch(x, &*xdot);
        T::dispatch(system, current.as_ref(), next.as_mut())?;
        current = next;
        trace!("repeated stage {stage} done");
    }
    T::dispatch(system, current.as_ref(), xdot)
}
