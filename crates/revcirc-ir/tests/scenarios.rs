//! End-to-end circuit scenarios.

use revcirc_ir::{Circuit, Gate, GateType, IrError, LineId, parse_bits};

fn eval(gate: &Gate, input: &[u8]) -> Vec<u8> {
    gate.evaluate(input).unwrap().into_owned()
}

// ---------------------------------------------------------------------------
// Single gates
// ---------------------------------------------------------------------------

#[test]
fn toffoli_fires_only_when_all_controls_set() {
    let gate = Gate::toffoli(2, [0, 1]).unwrap();
    assert_eq!(eval(&gate, &[1, 1, 0]), vec![1, 1, 1]);
    assert_eq!(eval(&gate, &[1, 0, 0]), vec![1, 0, 0]);
}

#[test]
fn fredkin_swaps_when_control_set() {
    let gate = Gate::fredkin(0, 1, [2]).unwrap();
    assert_eq!(eval(&gate, &[0, 1, 1]), vec![1, 0, 1]);
    assert_eq!(eval(&gate, &[0, 1, 0]), vec![0, 1, 0]);
}

#[test]
fn cnot_follows_its_control() {
    let gate = Gate::cnot(0, 1).unwrap();
    assert_eq!(eval(&gate, &[0, 1]), vec![1, 1]);
    assert_eq!(eval(&gate, &[1, 0]), vec![1, 0]);
}

#[test]
fn not_and_cnot_match_their_toffoli_forms() {
    let not = Gate::not(1).unwrap();
    let toffoli_not = Gate::toffoli(1, []).unwrap();
    let cnot = Gate::cnot(1, 0).unwrap();
    let toffoli_cnot = Gate::toffoli(1, [0]).unwrap();

    for input in [[0u8, 0], [0, 1], [1, 0], [1, 1]] {
        assert_eq!(eval(&not, &input), eval(&toffoli_not, &input));
        assert_eq!(eval(&cnot, &input), eval(&toffoli_cnot, &input));
    }
    assert_eq!(not.used_lines(), toffoli_not.used_lines());
    assert_eq!(cnot.used_lines(), toffoli_cnot.used_lines());
}

#[test]
fn gates_may_share_lines() {
    // Target and control on the same line is accepted; reading happens first.
    let gate = Gate::toffoli(0, [0]).unwrap();
    assert_eq!(eval(&gate, &[1]), vec![0]);
    assert_eq!(eval(&gate, &[0]), vec![0]);

    let mut circuit = Circuit::new(1, []).unwrap();
    assert!(circuit.place_gates([gate]).is_ok());
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

#[test]
fn placement_rejects_control_past_last_line() {
    let mut circuit = Circuit::new(3, []).unwrap();
    let err = circuit
        .place_gates([Gate::toffoli(0, [2, 3]).unwrap()])
        .unwrap_err();

    assert_eq!(
        err,
        IrError::LineNotInCircuit {
            gate: GateType::Toffoli,
            line: LineId(3),
            lines: 3,
        }
    );
    assert!(circuit.is_empty());
    assert!(err.to_string().contains("toffoli"));
}

#[test]
fn placement_rejects_fredkin_target() {
    let mut circuit = Circuit::new(2, []).unwrap();
    let err = circuit
        .place_gates([Gate::fredkin(0, 2, []).unwrap()])
        .unwrap_err();
    assert!(matches!(
        err,
        IrError::LineNotInCircuit {
            gate: GateType::Fredkin,
            line: LineId(2),
            ..
        }
    ));
}

// ---------------------------------------------------------------------------
// Whole circuits
// ---------------------------------------------------------------------------

fn nine_line_circuit() -> Circuit {
    let mut circuit = Circuit::new(9, []).unwrap();
    circuit
        .place_gates([
            Gate::toffoli(2, [0, 1]).unwrap(),
            Gate::fredkin(3, 4, [5]).unwrap(),
            Gate::cnot(6, 7).unwrap(),
            Gate::not(8).unwrap(),
        ])
        .unwrap();
    circuit
}

#[test]
fn all_gate_kinds_side_by_side() {
    let circuit = nine_line_circuit();
    let output = circuit.evaluate(&[1, 1, 0, 0, 1, 1, 0, 1, 0]).unwrap();
    assert_eq!(output.into_owned(), vec![1, 1, 1, 1, 0, 1, 1, 1, 1]);
}

#[test]
fn all_gate_kinds_with_inactive_controls() {
    let circuit = nine_line_circuit();
    let input = parse_bits("100 010 10 0").unwrap();
    let output = circuit.evaluate(&input).unwrap();
    assert_eq!(output.into_owned(), parse_bits("100 010 10 1").unwrap());
}

#[test]
fn spare_lines_pass_through_unconstructed_circuit() {
    // Line 9 is touched by no gate.
    let circuit = Circuit::new(10, nine_line_circuit().gates().to_vec()).unwrap();
    let output = circuit.evaluate(&[1, 1, 0, 0, 1, 1, 0, 1, 0, 1]).unwrap();
    assert_eq!(output.into_owned(), vec![1, 1, 1, 1, 0, 1, 1, 1, 1, 1]);
}

#[test]
fn sequence_of_gates_on_shared_lines() {
    // l0: x  x  x
    // l1: .  x  .
    // l2: o  o  .
    // l3: o  .  o
    //     T  F  CN
    let circuit = Circuit::with_gates(
        4,
        [
            Gate::toffoli(0, [2, 3]).unwrap(),
            Gate::fredkin(0, 1, [2]).unwrap(),
            Gate::cnot(0, 3).unwrap(),
        ],
    )
    .unwrap();

    // Toffoli: 0011 -> 1011; Fredkin: 1011 -> 0111; CNOT: 0111 -> 1111.
    let output = circuit.evaluate(&[0, 0, 1, 1]).unwrap();
    assert_eq!(output.into_owned(), vec![1, 1, 1, 1]);

    // Toffoli idle; Fredkin idle; CNOT: 0001 -> 1001.
    let output = circuit.evaluate(&[0, 0, 0, 1]).unwrap();
    assert_eq!(output.into_owned(), vec![1, 0, 0, 1]);
}

#[test]
fn removal_then_evaluation() {
    let mut circuit = nine_line_circuit();
    circuit.remove_gates([0, 2]);
    assert_eq!(circuit.len(), 2);

    let output = circuit.evaluate(&[1, 1, 0, 0, 1, 1, 0, 1, 0]).unwrap();
    assert_eq!(output.into_owned(), vec![1, 1, 0, 1, 0, 1, 0, 1, 1]);
}

#[test]
fn short_register_reports_gate_and_length() {
    let circuit = nine_line_circuit();
    let err = circuit.evaluate(&[1, 1, 0, 0, 1]).unwrap_err();
    match err {
        IrError::ControlEvaluation { gate, source } => {
            assert_eq!(gate, GateType::Fredkin);
            assert_eq!(
                *source,
                IrError::ControlOutOfRange {
                    position: 0,
                    line: LineId(5),
                    len: 5,
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}
