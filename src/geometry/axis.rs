use serde::{Serialize, Deserialize};
use strum::{Display, EnumIter};

use crate::geometry::{GeometryError, ProcResult};

/// A coordinate axis of a `Point`.
/// Doubles as a typed index that can never be out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[strum(serialize = "x")]
    X,
    #[strum(serialize = "y")]
    Y,
    #[strum(serialize = "z")]
    Z,
}
impl Axis {
    /// Positional index of the axis (0, 1 or 2).
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}
impl TryFrom<usize> for Axis {
    type Error = GeometryError;

    fn try_from(index: usize) -> ProcResult<Self> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(GeometryError::IndexOutOfRange{index}),
        }
    }
}
