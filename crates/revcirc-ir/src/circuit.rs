//! Reversible circuit container and evaluation.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{debug, instrument, trace};

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, GateType};
use crate::register::{from_index, to_index};

/// Widest circuit [`Circuit::permutation`] will enumerate.
pub const MAX_PERMUTATION_LINES: usize = 20;

/// A reversible circuit: an ordered gate list over a fixed number of lines.
///
/// Gates appended with [`Circuit::place_gates`] are checked against the line
/// count. Gates passed to [`Circuit::new`] are stored as given; use
/// [`Circuit::with_gates`] to check initial gates as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CircuitRepr", into = "CircuitRepr")]
pub struct Circuit {
    /// Width of the register.
    lines: usize,
    /// Gates in evaluation order.
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create a circuit with `lines` lines and an initial gate list.
    ///
    /// The initial gates are not checked against `lines`; a gate that
    /// references a missing line surfaces as an evaluation error instead.
    pub fn new(lines: usize, gates: impl IntoIterator<Item = Gate>) -> IrResult<Self> {
        if lines == 0 {
            return Err(IrError::NoLines);
        }
        Ok(Self {
            lines,
            gates: gates.into_iter().collect(),
        })
    }

    /// Create a circuit whose initial gates go through [`Circuit::place_gates`].
    pub fn with_gates(lines: usize, gates: impl IntoIterator<Item = Gate>) -> IrResult<Self> {
        let mut circuit = Self::new(lines, [])?;
        circuit.place_gates(gates)?;
        Ok(circuit)
    }

    /// Append a batch of gates.
    ///
    /// Every line of every gate must be below the circuit's line count. On the
    /// first violation the whole batch is rejected and the circuit is left
    /// untouched.
    pub fn place_gates(&mut self, gates: impl IntoIterator<Item = Gate>) -> IrResult<&mut Self> {
        let batch: Vec<Gate> = gates.into_iter().collect();

        for gate in &batch {
            if let Some(line) = gate
                .used_lines()
                .into_iter()
                .find(|line| line.index() >= self.lines)
            {
                return Err(IrError::LineNotInCircuit {
                    gate: gate.gate_type(),
                    line,
                    lines: self.lines,
                });
            }
        }

        debug!(
            "Placing {} gates after {} existing",
            batch.len(),
            self.gates.len()
        );
        self.gates.extend(batch);
        Ok(self)
    }

    /// Remove the gates at the given positions.
    ///
    /// Positions past the end are ignored, as are repeats of a position.
    /// The remaining gates keep their relative order.
    pub fn remove_gates(&mut self, positions: impl IntoIterator<Item = usize>) -> &mut Self {
        let doomed: FxHashSet<usize> = positions.into_iter().collect();
        let before = self.gates.len();

        let mut position = 0;
        self.gates.retain(|_| {
            let keep = !doomed.contains(&position);
            position += 1;
            keep
        });

        debug!("Removed {} of {} gates", before - self.gates.len(), before);
        self
    }

    /// Evaluate the circuit on a register.
    ///
    /// The register length is not checked against the line count; each gate
    /// checks the lines it touches. The first failing gate aborts evaluation
    /// and its error is returned unchanged. With no gates the input is
    /// returned borrowed.
    #[instrument(level = "trace", skip_all, fields(lines = self.lines, gates = self.gates.len()))]
    pub fn evaluate<'a>(&self, input: &'a [u8]) -> IrResult<Cow<'a, [u8]>> {
        let mut register = Cow::Borrowed(input);
        for (position, gate) in self.gates.iter().enumerate() {
            trace!("Evaluating gate {position}: {gate}");
            register = gate.apply(register)?;
        }
        Ok(register)
    }

    /// The inverse circuit: the same gates in reverse order.
    ///
    /// Every gate kind is its own inverse, so reversing the order undoes the
    /// whole circuit.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            lines: self.lines,
            gates: self.gates.iter().rev().cloned().collect(),
        }
    }

    /// Map each basis input to its output, as integers.
    ///
    /// Line 0 is the most significant bit. Entry `i` of the result is the
    /// output index for input index `i`.
    pub fn permutation(&self) -> IrResult<Vec<u64>> {
        if self.lines > MAX_PERMUTATION_LINES {
            return Err(IrError::TooWideForPermutation {
                lines: self.lines,
                max: MAX_PERMUTATION_LINES,
            });
        }

        (0..1u64 << self.lines)
            .map(|index| {
                let input = from_index(index, self.lines);
                self.evaluate(&input).map(|output| to_index(&output))
            })
            .collect()
    }

    /// Whether the circuit maps every basis input to itself.
    pub fn is_identity(&self) -> IrResult<bool> {
        Ok(is_identity_permutation(&self.permutation()?))
    }

    /// Number of gates of each type.
    pub fn gate_counts(&self) -> FxHashMap<GateType, usize> {
        let mut counts = FxHashMap::default();
        for gate in &self.gates {
            *counts.entry(gate.gate_type()).or_insert(0) += 1;
        }
        counts
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the number of lines.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Get the gates in evaluation order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get the number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

/// Whether a table from [`Circuit::permutation`] maps every index to itself.
pub fn is_identity_permutation(permutation: &[u64]) -> bool {
    permutation
        .iter()
        .enumerate()
        .all(|(input, &output)| input as u64 == output)
}

/// Document form of a circuit.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CircuitRepr {
    lines: usize,
    #[serde(default)]
    gates: Vec<Gate>,
}

impl TryFrom<CircuitRepr> for Circuit {
    type Error = IrError;

    fn try_from(repr: CircuitRepr) -> IrResult<Self> {
        Circuit::with_gates(repr.lines, repr.gates)
    }
}

impl From<Circuit> for CircuitRepr {
    fn from(circuit: Circuit) -> Self {
        Self {
            lines: circuit.lines,
            gates: circuit.gates,
        }
    }
}
