//! Error types for the IR crate.

use crate::gate::GateType;
use crate::line::{LineId, LineRole};
use thiserror::Error;

/// Errors that can occur while building or evaluating reversible circuits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A gate constructor received a negative line index.
    #[error("invalid index for the {role}: {index} is less than zero")]
    NegativeLine {
        /// Which operand was rejected.
        role: LineRole,
        /// The raw index supplied by the caller.
        index: i64,
    },

    /// A gate constructor received an index that does not fit the platform.
    #[error("invalid index for the {role}: {index} exceeds the addressable range")]
    LineOverflow {
        /// Which operand was rejected.
        role: LineRole,
        /// The raw index supplied by the caller.
        index: i64,
    },

    /// A circuit must have at least one line.
    #[error("a circuit must have at least one line")]
    NoLines,

    /// A gate being placed references a line outside the circuit.
    #[error("gate of type '{gate}' uses line {line} which does not exist on a circuit of {lines} lines")]
    LineNotInCircuit {
        /// Type of the rejected gate.
        gate: GateType,
        /// The offending line.
        line: LineId,
        /// Width of the circuit.
        lines: usize,
    },

    /// A control line is outside the register being evaluated.
    #[error("control c{position} refers to a non-existent line {line} (num of lines is {len})")]
    ControlOutOfRange {
        /// Position of the control in the gate's control list.
        position: usize,
        /// The offending line.
        line: LineId,
        /// Length of the register.
        len: usize,
    },

    /// Control evaluation failed inside a gate.
    #[error("evaluate controls of '{gate}' gate: {source}")]
    ControlEvaluation {
        /// Type of the failing gate.
        gate: GateType,
        /// The underlying control error.
        #[source]
        source: Box<IrError>,
    },

    /// The target of a Toffoli-family gate is outside the register.
    #[error("target bit {target} refers to a non-existent line (num of lines is {len})")]
    TargetOutOfRange {
        /// The offending target line.
        target: LineId,
        /// Length of the register.
        len: usize,
    },

    /// One or both Fredkin targets are outside the register.
    #[error("target bits ({target1}, {target2}) refer to non-existent line/s (num of lines is {len})")]
    TargetsOutOfRange {
        /// First swapped line.
        target1: LineId,
        /// Second swapped line.
        target2: LineId,
        /// Length of the register.
        len: usize,
    },

    /// A register value was not a binary digit.
    #[error("invalid bit {found:?} at position {position}: expected '0' or '1'")]
    InvalidBit {
        /// Position in the register (or in the source text).
        position: usize,
        /// The offending value.
        found: char,
    },

    /// Permutation enumeration was requested on a circuit that is too wide.
    #[error("circuit has {lines} lines; permutation enumeration supports at most {max}")]
    TooWideForPermutation {
        /// Width of the circuit.
        lines: usize,
        /// Supported maximum.
        max: usize,
    },
}

impl IrError {
    /// Wrap a control error with the type of the gate that evaluated it.
    pub(crate) fn in_controls_of(self, gate: GateType) -> Self {
        IrError::ControlEvaluation {
            gate,
            source: Box::new(self),
        }
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
