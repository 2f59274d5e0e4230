//! End-to-end keypad scenarios driven through the intent API.

use calc_core::{CalcError, Calculator, EngineState, Intent, KeyInput, Operator};

/// Feed a key sequence, collecting every error raised along the way.
fn press(calc: &mut Calculator, keys: &str) -> Vec<CalcError> {
    Intent::from_keys(keys)
        .into_iter()
        .filter_map(|intent| calc.apply(intent).err())
        .collect()
}

#[test]
fn test_typing_valid_numbers_is_exact() {
    for text in ["0", "42", "3.5", ".75", "100.", "0.000001", "9876543210"] {
        let mut calc = Calculator::new();
        assert!(press(&mut calc, text).is_empty());
        assert_eq!(calc.input_text(), text);
    }
}

#[test]
fn test_double_point_rejected() {
    let mut calc = Calculator::new();
    press(&mut calc, "1..");
    assert_eq!(calc.input_text(), "1.");
    assert_eq!(calc.input_text().matches('.').count(), 1);
}

#[test]
fn test_operator_on_empty_input() {
    let mut calc = Calculator::new();
    let errors = press(&mut calc, "+");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error_code(), "MISSING_OPERAND");
    assert_eq!(errors[0].to_string(), "left operand does not exist");
    assert_eq!(calc.equation_text(), "0");
}

#[test]
fn test_addition_scenario() {
    let mut calc = Calculator::new();
    press(&mut calc, "12");
    press(&mut calc, "3");
    press(&mut calc, "+");
    press(&mut calc, "4");
    assert!(press(&mut calc, "=").is_empty());

    assert_eq!(calc.equation_text(), "123 + 4 = 127");
    assert_eq!(calc.pending().map(|p| p.left), Some(127.0));
    assert_eq!(calc.input_text(), "");
}

#[test]
fn test_division_by_zero_scenario() {
    let mut calc = Calculator::new();
    let errors = press(&mut calc, "5\u{00F7}0=");
    assert_eq!(errors, vec![CalcError::DivisionByZero { left: 5.0 }]);
    assert_eq!(calc.equation_text(), "5 / 0 = error");
    assert_eq!(calc.pending(), None);
    assert_eq!(calc.state(), EngineState::Errored);

    let errors = press(&mut calc, "*");
    assert_eq!(errors[0].error_code(), "MISSING_OPERAND");
}

#[test]
fn test_power_scenario() {
    let mut calc = Calculator::new();
    assert!(press(&mut calc, "2^10=").is_empty());
    assert_eq!(calc.equation().result(), Some(1024.0));

    let mut calc = Calculator::new();
    assert!(press(&mut calc, "2p10=").is_empty());
    assert_eq!(calc.equation_text(), "2 ^ 10 = 1024");
}

#[test]
fn test_chaining_scenario() {
    let mut calc = Calculator::new();
    assert!(press(&mut calc, "3+4=").is_empty());
    assert_eq!(calc.equation().result(), Some(7.0));

    assert!(press(&mut calc, "+5=").is_empty());
    assert_eq!(calc.equation().result(), Some(12.0));
    assert_eq!(calc.equation_text(), "7 + 5 = 12");
}

#[test]
fn test_operator_change_of_mind() {
    let mut calc = Calculator::new();
    press(&mut calc, "8+3");
    press(&mut calc, "*");
    assert_eq!(calc.equation_text(), "8 * ??");
    press(&mut calc, "2=");
    assert_eq!(calc.equation_text(), "8 * 2 = 16");
}

#[test]
fn test_clear_from_any_state() {
    for keys in ["", "12", "12+", "12+3", "12+3=", "1/0=", "2+3=*"] {
        let mut calc = Calculator::new();
        press(&mut calc, keys);
        calc.apply(Intent::from_key(KeyInput::Escape).unwrap()).unwrap();
        assert_eq!(calc.input_text(), "", "keys: {keys}");
        assert_eq!(calc.pending(), None, "keys: {keys}");
        assert_eq!(calc.equation_text(), "0", "keys: {keys}");
        assert_eq!(calc.state(), EngineState::Empty, "keys: {keys}");
    }
}

#[test]
fn test_backspace_and_invert_at_the_boundary() {
    let mut calc = Calculator::new();
    calc.apply(Intent::Backspace).unwrap();
    calc.apply(Intent::Backspace).unwrap();
    assert_eq!(calc.input_text(), "");

    calc.apply(Intent::InvertSign).unwrap();
    assert_eq!(calc.input_text(), "");

    press(&mut calc, ".");
    calc.apply(Intent::InvertSign).unwrap();
    assert_eq!(calc.input_text(), ".");
}

#[test]
fn test_negative_left_operand() {
    let mut calc = Calculator::new();
    press(&mut calc, "6n-4=");
    assert_eq!(calc.equation_text(), "-6 - 4 = -10");
}

#[test]
fn test_snapshot_json() {
    let mut calc = Calculator::new();
    press(&mut calc, "7");
    let snapshot = calc.apply(Intent::Operator(Operator::Subtract)).unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["equation"], "7 - ??");
    assert_eq!(json["input"], "");
    assert_eq!(json["state"], "left_captured");
}
