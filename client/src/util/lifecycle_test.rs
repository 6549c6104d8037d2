use super::*;

#[test]
fn new_flag_is_alive() {
    assert!(AliveFlag::default().is_alive());
}

#[test]
fn kill_is_seen_by_clones() {
    let flag = AliveFlag::default();
    let task_copy = flag.clone();
    flag.kill();
    assert!(!task_copy.is_alive());
}
