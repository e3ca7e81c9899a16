use crate::ListAccountsQuery;

use googletest::prelude::*;

fn query(page: Option<&str>, page_size: Option<&str>) -> ListAccountsQuery {
    ListAccountsQuery {
        page: page.map(String::from),
        page_size: page_size.map(String::from),
    }
}

#[test]
fn test_numeric_values_are_parsed() {
    let q = query(Some("3"), Some("25"));

    assert_that!(q.page(), eq(3));
    assert_that!(q.page_size(), eq(25));
}

#[test]
fn test_absent_values_are_zero() {
    let q = ListAccountsQuery::default();

    assert_that!(q.page(), eq(0));
    assert_that!(q.page_size(), eq(0));
}

#[test]
fn test_non_numeric_values_count_as_absent() {
    let q = query(Some("two"), Some("10x"));

    assert_that!(q.page(), eq(0));
    assert_that!(q.page_size(), eq(0));
}

#[test]
fn test_negative_values_are_passed_through_for_coercion() {
    let q = query(Some("-4"), Some(" 500 "));

    assert_that!(q.page(), eq(-4));
    assert_that!(q.page_size(), eq(500));
}
