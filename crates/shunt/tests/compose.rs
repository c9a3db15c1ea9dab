use shunt::compose::{self, flow, step, Pipeline};
use shunt::Chain;

#[test]
fn test_flow_and_compose_ordering() {
    let left_to_right = flow(vec![step(|n: i64| n + 1), step(|n| n * 2)]);
    assert_eq!(left_to_right(2), 6);

    let right_to_left = compose::compose(vec![step(|n: i64| n + 1), step(|n| n * 2)]);
    assert_eq!(right_to_left(2), 5);
}

#[test]
fn test_flow_output_feeds_a_chain() {
    let normalize = flow(vec![
        step(|s: String| s.trim().to_string()),
        step(|s: String| s.to_lowercase()),
    ]);

    let out = Pipeline::from("  HELLO  ".to_string())
        .pipe(normalize)
        .pipe(Chain::<String, String>::lift(|s| s.len()))
        .value()
        .fold(|n| n as i64, |_| -1);

    assert_eq!(out, 5);
}

#[test]
fn test_lift_bridges_into_bind() {
    let parse = compose::lift(|s: String| s.parse::<i64>().unwrap());

    let out: Chain<i64, String> = parse("12".to_string()).bind(|n| Chain::of(n * 2));
    assert_eq!(out.try_value(), Ok(24));

    let out: Chain<i64, String> = parse("not a number".to_string());
    assert!(!out.is_success());
}
