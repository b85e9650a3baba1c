//! Reversible gate types.
//!
//! Every gate is a bit permutation of the register and its own inverse.
//! NOT and CNOT are restricted Toffoli gates: [`Cnot`] and [`Not`] wrap a
//! [`Toffoli`] and share its evaluation and bounds logic. Their control count
//! is fixed by their constructors.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::line::{LineId, LineRole, checked_controls};

/// Type tag of a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateType {
    /// Multi-controlled NOT.
    Toffoli,
    /// Singly-controlled NOT.
    Cnot,
    /// Uncontrolled NOT.
    Not,
    /// Multi-controlled SWAP.
    Fredkin,
}

impl GateType {
    /// Get the name of this gate type.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            GateType::Toffoli => "toffoli",
            GateType::Cnot => "cnot",
            GateType::Not => "not",
            GateType::Fredkin => "fredkin",
        }
    }
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decide whether a gate fires.
///
/// An empty control list is vacuously active. Scanning stops at the first
/// control holding 0, so later controls are not range-checked.
pub(crate) fn controls_active(input: &[u8], controls: &[LineId]) -> IrResult<bool> {
    for (position, &line) in controls.iter().enumerate() {
        let Some(&bit) = input.get(line.index()) else {
            return Err(IrError::ControlOutOfRange {
                position,
                line,
                len: input.len(),
            });
        };
        if bit == 0 {
            return Ok(false);
        }
    }
    Ok(true)
}

#[inline]
fn flip(bit: u8) -> u8 {
    if bit == 0 { 1 } else { 0 }
}

/// Flips one target line when all control lines hold 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Toffoli {
    target: LineId,
    controls: Vec<LineId>,
}

impl Toffoli {
    /// Create a Toffoli gate from raw indices.
    ///
    /// With no controls the gate always flips its target.
    pub fn new(target: i64, controls: impl IntoIterator<Item = i64>) -> IrResult<Self> {
        Ok(Self {
            target: LineId::checked(LineRole::Target, target)?,
            controls: checked_controls(controls)?,
        })
    }

    /// The flipped line.
    pub fn target(&self) -> LineId {
        self.target
    }

    /// The control lines, in construction order.
    pub fn controls(&self) -> &[LineId] {
        &self.controls
    }

    /// Target first, then every control.
    pub fn used_lines(&self) -> Vec<LineId> {
        std::iter::once(self.target)
            .chain(self.controls.iter().copied())
            .collect()
    }

    fn apply<'a>(&self, gate: GateType, register: Cow<'a, [u8]>) -> IrResult<Cow<'a, [u8]>> {
        let active =
            controls_active(&register, &self.controls).map_err(|e| e.in_controls_of(gate))?;

        let target = self.target.index();
        if target >= register.len() {
            return Err(IrError::TargetOutOfRange {
                target: self.target,
                len: register.len(),
            });
        }

        if !active {
            return Ok(register);
        }

        let mut output = register;
        let bits = output.to_mut();
        bits[target] = flip(bits[target]);
        Ok(output)
    }
}

/// Swaps two target lines when all control lines hold 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fredkin {
    target1: LineId,
    target2: LineId,
    controls: Vec<LineId>,
}

impl Fredkin {
    /// Create a Fredkin gate from raw indices.
    ///
    /// With no controls the gate always swaps its targets.
    pub fn new(
        target1: i64,
        target2: i64,
        controls: impl IntoIterator<Item = i64>,
    ) -> IrResult<Self> {
        Ok(Self {
            target1: LineId::checked(LineRole::FirstTarget, target1)?,
            target2: LineId::checked(LineRole::SecondTarget, target2)?,
            controls: checked_controls(controls)?,
        })
    }

    /// The two swapped lines.
    pub fn targets(&self) -> (LineId, LineId) {
        (self.target1, self.target2)
    }

    /// The control lines, in construction order.
    pub fn controls(&self) -> &[LineId] {
        &self.controls
    }

    /// Both targets, then every control.
    pub fn used_lines(&self) -> Vec<LineId> {
        [self.target1, self.target2]
            .into_iter()
            .chain(self.controls.iter().copied())
            .collect()
    }

    fn apply<'a>(&self, register: Cow<'a, [u8]>) -> IrResult<Cow<'a, [u8]>> {
        let active = controls_active(&register, &self.controls)
            .map_err(|e| e.in_controls_of(GateType::Fredkin))?;

        let (t1, t2) = (self.target1.index(), self.target2.index());
        if t1 >= register.len() || t2 >= register.len() {
            return Err(IrError::TargetsOutOfRange {
                target1: self.target1,
                target2: self.target2,
                len: register.len(),
            });
        }

        if !active {
            return Ok(register);
        }

        let mut output = register;
        output.to_mut().swap(t1, t2);
        Ok(output)
    }
}

/// Flips one target line when its single control line holds 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnot(Toffoli);

impl Cnot {
    /// Create a CNOT gate from raw indices.
    pub fn new(target: i64, control: i64) -> IrResult<Self> {
        Toffoli::new(target, [control]).map(Cnot)
    }

    /// The flipped line.
    pub fn target(&self) -> LineId {
        self.0.target
    }

    /// The control line.
    pub fn control(&self) -> LineId {
        self.0.controls[0]
    }

    /// The gate as a one-control Toffoli.
    pub fn as_toffoli(&self) -> &Toffoli {
        &self.0
    }
}

/// Always flips one target line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Not(Toffoli);

impl Not {
    /// Create a NOT gate from a raw index.
    pub fn new(target: i64) -> IrResult<Self> {
        Toffoli::new(target, []).map(Not)
    }

    /// The flipped line.
    pub fn target(&self) -> LineId {
        self.0.target
    }

    /// The gate as an uncontrolled Toffoli.
    pub fn as_toffoli(&self) -> &Toffoli {
        &self.0
    }
}

/// A reversible gate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GateRepr", into = "GateRepr")]
pub enum Gate {
    /// General multi-controlled NOT.
    Toffoli(Toffoli),
    /// Toffoli with exactly one control.
    Cnot(Cnot),
    /// Toffoli with no controls.
    Not(Not),
    /// Controlled swap.
    Fredkin(Fredkin),
}

impl Gate {
    /// Toffoli gate flipping `target` when every control is 1.
    pub fn toffoli(target: i64, controls: impl IntoIterator<Item = i64>) -> IrResult<Self> {
        Ok(Gate::Toffoli(Toffoli::new(target, controls)?))
    }

    /// CNOT gate flipping `target` when `control` is 1.
    pub fn cnot(target: i64, control: i64) -> IrResult<Self> {
        Ok(Gate::Cnot(Cnot::new(target, control)?))
    }

    /// NOT gate, always flipping `target`.
    pub fn not(target: i64) -> IrResult<Self> {
        Ok(Gate::Not(Not::new(target)?))
    }

    /// Fredkin gate swapping `target1` and `target2` when every control is 1.
    pub fn fredkin(
        target1: i64,
        target2: i64,
        controls: impl IntoIterator<Item = i64>,
    ) -> IrResult<Self> {
        Ok(Gate::Fredkin(Fredkin::new(target1, target2, controls)?))
    }

    /// Type tag of this gate.
    #[inline]
    pub fn gate_type(&self) -> GateType {
        match self {
            Gate::Toffoli(_) => GateType::Toffoli,
            Gate::Cnot(_) => GateType::Cnot,
            Gate::Not(_) => GateType::Not,
            Gate::Fredkin(_) => GateType::Fredkin,
        }
    }

    /// Every line this gate reads or writes: targets first, then controls.
    pub fn used_lines(&self) -> Vec<LineId> {
        match self {
            Gate::Toffoli(t) | Gate::Cnot(Cnot(t)) | Gate::Not(Not(t)) => t.used_lines(),
            Gate::Fredkin(f) => f.used_lines(),
        }
    }

    /// The control lines of this gate.
    pub fn controls(&self) -> &[LineId] {
        match self {
            Gate::Toffoli(t) | Gate::Cnot(Cnot(t)) | Gate::Not(Not(t)) => t.controls(),
            Gate::Fredkin(f) => f.controls(),
        }
    }

    /// Evaluate the gate on a register.
    ///
    /// Returns the input borrowed when the gate does not fire, and a fresh
    /// vector otherwise. Target bounds are checked even when the gate does
    /// not fire.
    pub fn evaluate<'a>(&self, input: &'a [u8]) -> IrResult<Cow<'a, [u8]>> {
        self.apply(Cow::Borrowed(input))
    }

    /// Evaluate the gate on a register that may already be owned.
    ///
    /// An owned register is updated in place; a borrowed one is copied
    /// before the gate writes to it.
    pub fn apply<'a>(&self, register: Cow<'a, [u8]>) -> IrResult<Cow<'a, [u8]>> {
        match self {
            Gate::Toffoli(t) | Gate::Cnot(Cnot(t)) | Gate::Not(Not(t)) => {
                t.apply(self.gate_type(), register)
            }
            Gate::Fredkin(f) => f.apply(register),
        }
    }
}

impl From<Toffoli> for Gate {
    fn from(gate: Toffoli) -> Self {
        Gate::Toffoli(gate)
    }
}

impl From<Cnot> for Gate {
    fn from(gate: Cnot) -> Self {
        Gate::Cnot(gate)
    }
}

impl From<Not> for Gate {
    fn from(gate: Not) -> Self {
        Gate::Not(gate)
    }
}

impl From<Fredkin> for Gate {
    fn from(gate: Fredkin) -> Self {
        Gate::Fredkin(gate)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate_type())?;
        match self {
            Gate::Toffoli(t) | Gate::Cnot(Cnot(t)) | Gate::Not(Not(t)) => {
                write!(f, "{}", t.target)?
            }
            Gate::Fredkin(g) => write!(f, "{}, {}", g.target1, g.target2)?,
        }
        let controls = self.controls();
        if !controls.is_empty() {
            let joined: Vec<String> = controls.iter().map(ToString::to_string).collect();
            write!(f, "; {}", joined.join(", "))?;
        }
        write!(f, ")")
    }
}

/// Wire form of a gate. Deserializing goes through the checked constructors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum GateRepr {
    Toffoli {
        target: i64,
        #[serde(default)]
        controls: Vec<i64>,
    },
    Cnot {
        target: i64,
        control: i64,
    },
    Not {
        target: i64,
    },
    Fredkin {
        target1: i64,
        target2: i64,
        #[serde(default)]
        controls: Vec<i64>,
    },
}

impl TryFrom<GateRepr> for Gate {
    type Error = IrError;

    fn try_from(repr: GateRepr) -> IrResult<Self> {
        match repr {
            GateRepr::Toffoli { target, controls } => Gate::toffoli(target, controls),
            GateRepr::Cnot { target, control } => Gate::cnot(target, control),
            GateRepr::Not { target } => Gate::not(target),
            GateRepr::Fredkin {
                target1,
                target2,
                controls,
            } => Gate::fredkin(target1, target2, controls),
        }
    }
}

fn raw(line: LineId) -> i64 {
    // Constructed from an i64, so the round trip cannot truncate.
    line.index() as i64
}

impl From<Gate> for GateRepr {
    fn from(gate: Gate) -> Self {
        match gate {
            Gate::Toffoli(t) => GateRepr::Toffoli {
                target: raw(t.target),
                controls: t.controls.into_iter().map(raw).collect(),
            },
            Gate::Cnot(g) => GateRepr::Cnot {
                target: raw(g.target()),
                control: raw(g.control()),
            },
            Gate::Not(g) => GateRepr::Not {
                target: raw(g.target()),
            },
            Gate::Fredkin(f) => GateRepr::Fredkin {
                target1: raw(f.target1),
                target2: raw(f.target2),
                controls: f.controls.into_iter().map(raw).collect(),
            },
        }
    }
}
