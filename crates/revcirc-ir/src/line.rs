//! Register line identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// Index of one bit position in a circuit register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub usize);

impl LineId {
    /// Convert a raw, caller-supplied index into a line id.
    ///
    /// `role` only feeds the error message, so a gate constructor can report
    /// which of its operands was rejected.
    pub fn checked(role: LineRole, raw: i64) -> IrResult<Self> {
        if raw < 0 {
            return Err(IrError::NegativeLine { role, index: raw });
        }
        usize::try_from(raw)
            .map(LineId)
            .map_err(|_| IrError::LineOverflow { role, index: raw })
    }

    /// The position of this line inside a register slice.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l{}", self.0)
    }
}

impl From<usize> for LineId {
    fn from(id: usize) -> Self {
        LineId(id)
    }
}

/// The part a line plays in a gate, used to name rejected operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// The single target of a Toffoli, CNOT or NOT gate.
    Target,
    /// The first swapped line of a Fredkin gate.
    FirstTarget,
    /// The second swapped line of a Fredkin gate.
    SecondTarget,
    /// A control line, with its position in the control list.
    Control(usize),
}

impl fmt::Display for LineRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRole::Target => write!(f, "target bit"),
            LineRole::FirstTarget => write!(f, "first target bit"),
            LineRole::SecondTarget => write!(f, "second target bit"),
            LineRole::Control(i) => write!(f, "control bit c{i}"),
        }
    }
}

/// Validate a list of raw control indices.
pub(crate) fn checked_controls(
    controls: impl IntoIterator<Item = i64>,
) -> IrResult<Vec<LineId>> {
    controls
        .into_iter()
        .enumerate()
        .map(|(i, c)| LineId::checked(LineRole::Control(i), c))
        .collect()
}
