// unit tests

use super::*;

use rayon::ThreadPoolBuilder;

/// Largest n whose sum still fits in a u64.
const LARGEST_EXACT_N: u64 = 6_074_000_999;

fn test_pool() -> ThreadPool {
  ThreadPoolBuilder::new().num_threads(4).build().unwrap()
}

#[test]
fn small_inputs_test() {
  assert_eq!(add_up_to(0), 0);
  assert_eq!(add_up_to(1), 1);
  assert_eq!(add_up_to(2), 3);
  assert_eq!(add_up_to(10), 55);
  assert_eq!(add_up_to(100), 5050);
}

#[test]
fn one_billion_test() {
  assert_eq!(add_up_to(1_000_000_000), 500_000_000_500_000_000);
}

#[test]
fn matches_formula_in_u128_test() {
  for n in (0..2_000u64).chain([
    999_999_999,
    1_000_000_001,
    4_294_967_295,
    4_294_967_296,
    LARGEST_EXACT_N - 1,
    LARGEST_EXACT_N,
  ]) {
    let expected = (n as u128) * (n as u128 + 1) / 2;
    assert_eq!(add_up_to(n) as u128, expected, "n = {n}");
  }
}

#[test]
fn even_and_odd_halving_test() {
  // even n halves n, odd n halves n + 1
  assert_eq!(add_up_to(4), 2 * 5);
  assert_eq!(add_up_to(5), 5 * 3);
  assert_eq!(checked_add_up_to(4), Some(10));
  assert_eq!(checked_add_up_to(5), Some(15));

  // largest even input: wraps to 2^63 + 1
  let n = u64::MAX - 1;
  let expected = ((n as u128) * (n as u128 + 1) / 2) as u64;
  assert_eq!(add_up_to(n), expected);
  assert_eq!(expected, (1 << 63) + 1);
}

#[test]
fn loop_matches_closed_form_test() {
  for n in 0..500 {
    assert_eq!(add_up_to_loop(n), add_up_to(n), "n = {n}");
  }
  assert_eq!(add_up_to_loop(1_000_000), add_up_to(1_000_000));
}

#[test]
fn parallel_matches_closed_form_test() {
  let pool = test_pool();
  for n in [0, 1, 2, 7, 10, 1_000, 123_457, 1_000_000] {
    assert_eq!(add_up_to_par(n, &pool), add_up_to(n), "n = {n}");
  }
}

#[test]
fn checked_boundary_test() {
  assert_eq!(checked_add_up_to(0), Some(0));
  assert_eq!(checked_add_up_to(10), Some(55));
  assert_eq!(
    checked_add_up_to(LARGEST_EXACT_N),
    Some(18_446_744_070_963_499_500)
  );
  assert_eq!(checked_add_up_to(LARGEST_EXACT_N + 1), None);
  assert_eq!(checked_add_up_to(u64::MAX - 1), None);
  assert_eq!(checked_add_up_to(u64::MAX), None);
}

#[test]
fn wrapping_overflow_test() {
  // true sum is 2^63 (2^64 - 1) = 2^63 mod 2^64
  assert_eq!(add_up_to(u64::MAX), 1 << 63);

  // one past the exact range wraps to the true sum mod 2^64
  let n = LARGEST_EXACT_N + 1;
  let expected = ((n as u128) * (n as u128 + 1) / 2) as u64;
  assert_eq!(add_up_to(n), expected);
}
