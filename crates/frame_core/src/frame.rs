use crate::error::FrameError;
use crate::traits::{Frame, Scalar};
use log::debug;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A frame whose layout is chosen at runtime.
/// Names are resolved through a hash map on every lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorFrame<T: Scalar> {
    data: DVector<T>,
    coordinate_to_index: HashMap<String, usize>,
    coordinate_names: Vec<String>,
}

impl<T: Scalar> VectorFrame<T> {
    /// Builds a zeroed frame with one slot per name, in the given order.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, FrameError> {
        let mut coordinate_to_index = HashMap::with_capacity(names.len());
        let mut coordinate_names = Vec::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            let name = name.as_ref();
            if coordinate_to_index.insert(name.to_string(), i).is_some() {
                return Err(FrameError::DuplicateCoordinate(name.to_string()));
            }
            coordinate_names.push(name.to_string());
        }

        debug!("built vector frame [{}]", coordinate_names.join(", "));

        Ok(Self {
            data: DVector::zeros(coordinate_names.len()),
            coordinate_to_index,
            coordinate_names,
        })
    }

    pub fn from_values<S: AsRef<str>>(names: &[S], values: &[T]) -> Result<Self, FrameError> {
        if names.len() != values.len() {
            return Err(FrameError::LengthMismatch {
                expected: names.len(),
                found: values.len(),
            });
        }
        let mut frame = Self::new(names)?;
        frame.data.copy_from_slice(values);
        Ok(frame)
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }
}

impl<T: Scalar> Frame<T> for VectorFrame<T> {
    fn dimension(&self) -> usize {
        self.data.len()
    }

    fn value(&self, index: usize) -> T {
        self.data[index]
    }

    fn set_value(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }

    fn index_of(&self, name: &str) -> Result<usize, FrameError> {
        self.coordinate_to_index
            .get(name)
            .copied()
            .ok_or_else(|| FrameError::NameNotFound(name.to_string()))
    }

    fn coordinate_name(&self, index: usize) -> Option<&str> {
        self.coordinate_names.get(index).map(String::as_str)
    }

    fn duplicate(&self) -> Box<dyn Frame<T>> {
        Box::new(self.clone())
    }
}

/// Names and values captured from any frame.
/// `Display` renders the values as one whitespace-separated row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot<T> {
    pub coordinates: Vec<String>,
    pub values: Vec<T>,
}

impl<T: Scalar> FrameSnapshot<T> {
    pub fn capture(frame: &dyn Frame<T>) -> Self {
        Self {
            coordinates: frame
                .coordinate_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            values: frame.values(),
        }
    }

    /// Rebuilds a dynamic frame with the captured layout and values.
    pub fn to_frame(&self) -> Result<VectorFrame<T>, FrameError> {
        VectorFrame::from_values(&self.coordinates, &self.values)
    }
}

impl<T: fmt::Display> fmt::Display for FrameSnapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameSnapshot, VectorFrame};
    use crate::error::FrameError;
    use crate::traits::Frame;

    #[test]
    fn new_frame_is_zeroed_and_resolves_every_name() {
        let frame = VectorFrame::<f64>::new(&["x", "y", "z"]).expect("frame should build");
        assert_eq!(frame.dimension(), 3);
        assert_eq!(frame.as_slice(), &[0.0, 0.0, 0.0]);
        for (i, name) in ["x", "y", "z"].iter().enumerate() {
            assert_eq!(frame.index_of(name), Ok(i));
            assert_eq!(frame.coordinate_name(i), Some(*name));
        }
        assert_eq!(frame.coordinate_name(3), None);
    }

    #[test]
    fn unknown_names_fail_with_the_same_error_kind() {
        let frame = VectorFrame::<i32>::new(&["q", "qdot"]).expect("frame should build");
        for name in ["", "Q", "QDOT", "qd", "qdot "] {
            assert_eq!(
                frame.index_of(name),
                Err(FrameError::NameNotFound(name.to_string()))
            );
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = VectorFrame::<f64>::new(&["q", "qdot", "q"]).expect_err("expected error");
        assert_eq!(err, FrameError::DuplicateCoordinate("q".to_string()));
        assert!(format!("{err}").contains("more than once"));
    }

    #[test]
    fn from_values_checks_length() {
        let err = VectorFrame::<f64>::from_values(&["a", "b"], &[1.0]).expect_err("expected error");
        assert!(matches!(
            err,
            FrameError::LengthMismatch {
                expected: 2,
                found: 1
            }
        ));

        let frame = VectorFrame::<f64>::from_values(&["a", "b"], &[1.5, -2.0]).expect("frame should build");
        assert_eq!(frame.value_of("b"), Ok(-2.0));
    }

    #[test]
    fn duplicate_is_independent_of_source() {
        let mut original = VectorFrame::<i32>::from_values(&["q", "qdot"], &[1, 2]).expect("frame");
        let mut copy = original.duplicate();
        assert_eq!(copy.values(), vec![1, 2]);
        assert!(copy.same_layout(&original));

        copy.set_value(0, 10);
        assert_eq!(original.value(0), 1);

        original.set_value_of("qdot", 20).expect("qdot exists");
        assert_eq!(copy.value_of("qdot"), Ok(2));
    }

    #[test]
    fn same_layout_is_order_sensitive() {
        let a = VectorFrame::<f64>::new(&["q", "qdot"]).expect("frame");
        let b = VectorFrame::<f64>::new(&["qdot", "q"]).expect("frame");
        let c = VectorFrame::<f64>::new(&["q"]).expect("frame");
        assert!(!a.same_layout(&b));
        assert!(!a.same_layout(&c));
        assert!(a.same_layout(&a.clone()));
    }

    #[test]
    fn snapshot_renders_row_and_rebuilds_frame() {
        let frame = VectorFrame::<f64>::from_values(&["q", "qdot"], &[1.0, 1.0]).expect("frame");
        let snapshot = FrameSnapshot::<f64>::capture(&frame);
        assert_eq!(snapshot.to_string(), "1 1");
        assert_eq!(snapshot.to_frame().expect("rebuild"), frame);

        let json = serde_json::to_string(&snapshot).expect("serialize");
        assert_eq!(json, r#"{"coordinates":["q","qdot"],"values":[1.0,1.0]}"#);
        let parsed: FrameSnapshot<f64> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn empty_frame_renders_empty_row() {
        let frame = VectorFrame::<i32>::new::<&str>(&[]).expect("frame");
        assert_eq!(frame.dimension(), 0);
        assert_eq!(FrameSnapshot::<i32>::capture(&frame).to_string(), "");
    }
}
