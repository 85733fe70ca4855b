use api::{LocalReturnInfo, ReturnInfo};

#[test]
fn test_fresh_holder_reports_clean_state() {
    let mut info = LocalReturnInfo::new();
    assert!(
        !info.has_exceptions().unwrap(),
        "Fresh holder should have no exceptions"
    );
    assert_eq!(
        info.get_return_code().unwrap(),
        0,
        "Fresh holder should report the default return code"
    );
}

#[test]
fn test_has_exceptions_latches_after_first_add() {
    let mut info = LocalReturnInfo::new();
    info.add_exception_string("first failure").unwrap();
    assert!(info.has_exceptions().unwrap());

    // Stays true no matter how many more are recorded
    for i in 0..5 {
        info.add_exception_string(&format!("failure {}", i)).unwrap();
        assert!(info.has_exceptions().unwrap());
    }
}

#[test]
fn test_last_return_code_write_wins() {
    let mut info = LocalReturnInfo::new();
    info.set_return_code(17).unwrap();
    info.set_return_code(-3).unwrap();
    assert_eq!(info.get_return_code().unwrap(), -3);
}

#[test]
fn test_return_code_round_trip_extremes() {
    let mut info = LocalReturnInfo::new();
    for code in [i32::MIN, -1, 0, 1, i32::MAX] {
        info.set_return_code(code).unwrap();
        assert_eq!(info.get_return_code().unwrap(), code);
    }
}

#[test]
fn test_recorded_exception_and_code_scenario() {
    let mut info = LocalReturnInfo::new();
    info.add_exception_string("disk full").unwrap();
    info.set_return_code(-5).unwrap();

    assert!(info.has_exceptions().unwrap());
    assert_eq!(info.get_return_code().unwrap(), -5);
}

#[test]
fn test_two_holders_are_independent() {
    let mut first = LocalReturnInfo::new();
    let mut second = LocalReturnInfo::new();

    first.add_exception_string("only on the first holder").unwrap();
    first.set_return_code(42).unwrap();

    assert!(
        !second.has_exceptions().unwrap(),
        "Mutating one holder must not leak into another"
    );
    assert_eq!(second.get_return_code().unwrap(), 0);
}

#[test]
fn test_messages_keep_insertion_order() {
    let mut info = LocalReturnInfo::new();
    info.add_exception_string("first").unwrap();
    info.add_exception_string("second").unwrap();
    info.add_exception_string("third").unwrap();

    assert_eq!(info.exception_strings(), ["first", "second", "third"]);
}

#[test]
fn test_empty_message_is_recorded() {
    let mut info = LocalReturnInfo::new();
    info.add_exception_string("").unwrap();
    assert!(
        info.has_exceptions().unwrap(),
        "An empty message still counts as a recorded exception"
    );
    assert_eq!(info.exception_strings(), [""]);
}
