use super::*;

#[test]
fn nested_blocks_do_not_overflow() {
    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(200_000), 200_000);
}

#[test]
fn passes_results_through() {
    let parsed: Result<u8, String> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(parsed, Ok(7));
}
