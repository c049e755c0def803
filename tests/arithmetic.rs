use rpn::{MAX, MIN, SENTINEL};

mod cases;

test_case! {
    name: addition,
    input: "3 4 +",
    expected: Ok(7.0),
}

test_case! {
    name: subtraction_pops_right_operand_first,
    input: "3 10 -",
    expected: Ok(-7.0),
}

test_case! {
    name: multiplication,
    input: "2.5 4 *",
    expected: Ok(10.0),
}

test_case! {
    name: division,
    input: "7 2 /",
    expected: Ok(3.5),
}

test_case! {
    name: power,
    input: "2 3 ^",
    expected: Ok(8.0),
}

test_case! {
    name: fractional_power,
    input: "9 0.5 ^",
    expected: Ok(3.0),
}

test_case! {
    name: precedence_is_encoded_by_order,
    // 1 + 2 * 3
    input: "1 2 3 * +",
    expected: Ok(7.0),
}

test_case! {
    name: grouped_expression,
    // (1 + 2) * 3
    input: "1 2 + 3 *",
    expected: Ok(9.0),
}

test_case! {
    name: right_associative_power,
    // 2 ^ (3 ^ 2)
    input: "2 3 2 ^ ^",
    expected: Ok(512.0),
}

test_case! {
    name: negated_operand,
    input: "4 ~ 6 +",
    expected: Ok(2.0),
}

test_case! {
    name: negated_result,
    input: "4 6 + ~",
    expected: Ok(-10.0),
}

test_case! {
    name: division_by_zero,
    input: "5 0 /",
    expected: Ok(SENTINEL),
}

test_case! {
    name: division_by_computed_zero,
    input: "1 3 3 - /",
    expected: Ok(SENTINEL),
}

test_case! {
    name: sentinel_flows_into_later_operations,
    input: "5 0 / 10 /",
    expected: Ok(10_000.1),
}

test_case! {
    name: positive_overflow_saturates,
    input: "60000 60000 +",
    expected: Ok(MAX),
}

test_case! {
    name: negative_overflow_saturates,
    input: "60000 ~ 60000 -",
    expected: Ok(MIN),
}

test_case! {
    name: huge_power_saturates,
    input: "10 400 ^",
    expected: Ok(MAX),
}

test_case! {
    name: boundary_is_kept,
    input: "50000 2 *",
    expected: Ok(100_000.0),
}

test_case! {
    name: sentinel_valued_quotient_is_a_number,
    input: "200002 2 /",
    expected: Ok(MAX),
}

test_case! {
    name: negative_base_fractional_exponent,
    input: "8 ~ 0.5 ^",
    expected: Ok(SENTINEL),
}
