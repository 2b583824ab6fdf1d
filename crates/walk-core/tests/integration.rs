//! tests/integration.rs — batterie d’intégration pour walk-core
//!
//! Astuce : lance en local avec :
//!   cargo test -p walk-core
//!   cargo test -p walk-core --no-default-features

use walk_core::{
    demo, evaluate, evaluate_into, evaluate_with, terms, EvalConfig, EvalError, ErrorKind,
    Evaluator, OutputSlot, Strategy, Term, MAX_INDEX,
};

// -----------------------------------------------------------------------------
// Scénarios concrets
// -----------------------------------------------------------------------------

#[test]
fn concrete_scenarios() {
    assert_eq!(evaluate(0), Ok(1));
    assert_eq!(evaluate(1), Ok(1));
    assert_eq!(evaluate(2), Ok(2));
    assert_eq!(evaluate(5), Ok(8));
    assert_eq!(evaluate(10), Ok(89));
}

#[test]
fn end_to_end_demo_keeps_the_quirk() {
    let out = demo::run(5).expect("demo ok");
    assert_eq!(out.slot, 8);
    assert_eq!(out.exit_code, 5);
}

#[test]
fn caller_owned_slot() {
    let mut a: Term = 5;
    evaluate_into(a, &mut a).unwrap();
    assert_eq!(a, 8);

    let mut slot = OutputSlot::new();
    slot.store(10).unwrap();
    assert_eq!(slot.get(), Some(89));
}

// -----------------------------------------------------------------------------
// Stratégies & bornes
// -----------------------------------------------------------------------------

#[test]
fn strategies_agree_up_to_thirty() {
    for n in 0..=30 {
        let reference = evaluate(n).unwrap();
        for s in Strategy::ALL {
            assert_eq!(evaluate_with(n, s).unwrap(), reference, "n = {n}, strategy = {s}");
        }
    }
}

#[test]
fn linear_strategies_reach_the_top() {
    let top = i64::from(MAX_INDEX);
    let expected = terms().last().unwrap();
    assert_eq!(evaluate(top), Ok(expected));
    assert_eq!(evaluate_with(top, Strategy::Memoized), Ok(expected));
    assert_eq!(evaluate(top + 1).unwrap_err().kind(), ErrorKind::ArithmeticOverflow);
}

#[test]
fn recursive_budget_is_resource_exhaustion() {
    let cfg = EvalConfig { strategy: Strategy::Recursive, max_calls: 1_000, ..Default::default() };
    let mut ev = Evaluator::new(cfg);
    let err = ev.evaluate(40).unwrap_err();
    assert_eq!(err, EvalError::BudgetExhausted { limit: 1_000 });
    assert_eq!(err.kind(), ErrorKind::ResourceExhaustion);
    // l’évaluateur reste utilisable après un échec
    assert_eq!(ev.evaluate(5), Ok(8));
}

#[test]
fn negative_inputs_are_invalid_arguments() {
    let err = evaluate(-7).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
