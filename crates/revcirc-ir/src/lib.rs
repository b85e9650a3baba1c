//! Revcirc Reversible Circuit Representation
//!
//! This crate provides the core data structures for representing and
//! evaluating classical reversible logic circuits.
//!
//! # Overview
//!
//! A [`Circuit`] is an ordered list of [`Gate`]s over a fixed number of
//! lines. Evaluating a circuit threads a binary register (`&[u8]`, one bit
//! per line) through every gate from first to last. Each gate is a bit
//! permutation and its own inverse, so every circuit is invertible.
//!
//! # Core Components
//!
//! - **Lines**: [`LineId`] addresses one register position
//! - **Gates**: [`Gate`] with the Toffoli, CNOT, NOT and Fredkin variants
//! - **Circuit**: [`Circuit`] with checked placement, removal and evaluation
//! - **Registers**: [`register`] helpers to parse and render bit strings
//!
//! # Example: Toffoli and Fredkin
//!
//! ```rust
//! use revcirc_ir::{Circuit, Gate};
//!
//! let mut circuit = Circuit::new(3, []).unwrap();
//! circuit
//!     .place_gates([
//!         Gate::toffoli(2, [0, 1]).unwrap(),
//!         Gate::fredkin(0, 1, [2]).unwrap(),
//!     ])
//!     .unwrap();
//!
//! let output = circuit.evaluate(&[1, 1, 0]).unwrap();
//! assert_eq!(&*output, &[1, 1, 1]);
//!
//! // Gates run in reverse undo the circuit.
//! let restored = circuit.inverse().evaluate(&output).unwrap().into_owned();
//! assert_eq!(restored, vec![1, 1, 0]);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Targets | Controls | Effect when all controls are 1 |
//! |------|---------|----------|--------------------------------|
//! | `toffoli` | 1 | 0..n | flip the target |
//! | `cnot` | 1 | 1 | flip the target |
//! | `not` | 1 | 0 | flip the target (always fires) |
//! | `fredkin` | 2 | 0..n | swap the targets |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod line;
pub mod register;

pub use circuit::{Circuit, MAX_PERMUTATION_LINES, is_identity_permutation};
pub use error::{IrError, IrResult};
pub use gate::{Cnot, Fredkin, Gate, GateType, Not, Toffoli};
pub use line::{LineId, LineRole};
pub use register::{format_bits, from_index, parse_bits, to_index, validate_bits};
