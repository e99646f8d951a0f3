//! The programs under `demos/` run end to end.

use pica_eval::buffer_handler;
use picac::commands::{parse_source, run_source};
use pretty_assertions::assert_eq;

const DESCRIBE: &str = include_str!("../../../demos/describe.pica");
const COUNTER: &str = include_str!("../../../demos/counter.pica");

#[test]
fn describe_demo() {
    let print = buffer_handler();
    let result = run_source(DESCRIBE, print.clone());
    assert_eq!(result, Ok("\"something else\"\n".to_string()));
    assert_eq!(
        print.output(),
        [
            "zero",
            "negative",
            "text: hi",
            "pair",
            "unary function",
            "nothing",
            "",
        ]
        .join("\n")
    );
}

#[test]
fn counter_demo_evaluates_subject_once() {
    let result = run_source(COUNTER, buffer_handler());
    assert_eq!(result, Ok("(\"first\", 1)\n".to_string()));
}

#[test]
fn demos_parse() {
    for source in [DESCRIBE, COUNTER] {
        if let Err(diag) = parse_source(source) {
            panic!("demo failed to parse: {diag}");
        }
    }
}
