use bank::adapter::AccountStore;
use bank::domain::AccountState;
use bank::service::{Replay, mock::generator};
use std::io::Write;
use tempfile::NamedTempFile;

use crate::context::*;

fn script(lines: &[&str]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(temp_file, "{}", line).unwrap();
    }
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_replay_applies_actions_in_order() {
    let temp_file = script(&[
        "type",
        "openAccount",
        "deposit",
        "requestLoan",
        "withdraw",
    ]);

    let final_state = Replay::new(AccountStore::new(), temp_file.path())
        .process()
        .unwrap();

    assert_eq!(final_state, state(5600, 5000, true));
}

#[test]
fn test_replay_ignores_unknown_types_and_extra_columns() {
    let temp_file = script(&[
        "type,note",
        "openAccount,first",
        "deposite,typo",
        " withdraw ,spaced",
        "transfer,",
    ]);

    let final_state = Replay::new(AccountStore::new(), temp_file.path())
        .process()
        .unwrap();

    assert_eq!(final_state, state(450, 0, true));
}

#[test]
fn test_replay_drain_and_close() {
    let mut lines = vec!["type", "openAccount"];
    lines.extend(std::iter::repeat_n("withdraw", 10));
    lines.push("closeAccount");
    let temp_file = script(&lines);

    let final_state = Replay::new(AccountStore::new(), temp_file.path())
        .process()
        .unwrap();

    assert_eq!(final_state, AccountState::INITIAL);
}

#[test]
fn test_replay_missing_file_fails() {
    let result = Replay::new(AccountStore::new(), "/nonexistent/actions.csv").process();

    assert!(result.is_err());
}

#[test]
fn test_output_csv() {
    let mut out = Vec::new();

    Replay::output_csv(&state(-20, 0, true), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "balance,loan,is_active\n-20,0,true\n"
    );
}

#[test]
fn test_generated_script_replays() {
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path().to_str().unwrap().to_string();

    generator(&path, 50).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("type"));
    assert_eq!(lines.next(), Some("openAccount"));
    assert_eq!(lines.count(), 49);

    let final_state = Replay::new(AccountStore::new(), &path).process().unwrap();
    assert!(final_state.loan == 0 || final_state.loan == 5000);
    // A closed account carries nothing over
    if !final_state.is_active {
        assert_eq!(final_state, AccountState::INITIAL);
    }
    // Every rule keeps the balance at or above zero once the account is open
    assert!(final_state.balance >= 0);
}
