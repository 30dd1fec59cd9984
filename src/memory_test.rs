use super::*;

#[test]
fn with_classes_collapses_duplicates() {
    let root = MemoryRoot::with_classes(&["no-js", "no-js", "app"]);
    assert_eq!(root.classes(), ["no-js", "app"]);
}

#[test]
fn add_and_remove_are_idempotent() {
    let mut root = MemoryRoot::new();
    root.add("dark").unwrap();
    root.add("dark").unwrap();
    assert_eq!(root.classes(), ["dark"]);

    root.remove("dark").unwrap();
    root.remove("dark").unwrap();
    assert!(root.classes().is_empty());
}

#[test]
fn rejected_token_fails_both_operations() {
    let mut root = MemoryRoot::new();
    root.reject("dark");
    assert_eq!(root.add("dark"), Err(MemoryHostError::Rejected("dark".into())));
    assert_eq!(root.remove("dark"), Err(MemoryHostError::Rejected("dark".into())));
    assert!(root.add("light").is_ok());
}

#[test]
fn set_matches_only_fires_on_change() {
    let pref = MemoryPreference::new(false);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    pref.subscribe(Box::new(move |m: bool| {
        sink.borrow_mut().push(m);
        Ok(())
    }))
    .unwrap();

    pref.set_matches(false).unwrap();
    pref.set_matches(true).unwrap();
    pref.set_matches(true).unwrap();
    pref.set_matches(false).unwrap();

    assert_eq!(*seen.borrow(), vec![true, false]);
    assert!(!pref.matches());
}

#[test]
fn dispatch_always_delivers_and_updates_state() {
    let pref = MemoryPreference::new(true);
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    pref.subscribe(Box::new(move |_: bool| {
        *sink.borrow_mut() += 1;
        Ok(())
    }))
    .unwrap();

    pref.dispatch(true).unwrap();
    pref.dispatch(true).unwrap();
    assert_eq!(*count.borrow(), 2);
    assert!(pref.matches());
}

#[test]
fn clones_share_handlers_and_state() {
    let pref = MemoryPreference::new(false);
    let driver = pref.clone();
    pref.subscribe(Box::new(|_: bool| Ok(()))).unwrap();
    assert_eq!(driver.listener_count(), 1);

    driver.set_matches(true).unwrap();
    assert!(pref.matches());
}

#[test]
fn handler_error_stops_dispatch_and_keeps_handlers() {
    let pref = MemoryPreference::new(false);
    let later = Rc::new(RefCell::new(false));
    let sink = Rc::clone(&later);
    pref.subscribe(Box::new(|_: bool| Err(MemoryHostError::Rejected("x".into())))).unwrap();
    pref.subscribe(Box::new(move |_: bool| {
        *sink.borrow_mut() = true;
        Ok(())
    }))
    .unwrap();

    assert_eq!(pref.set_matches(true), Err(MemoryHostError::Rejected("x".into())));
    assert!(!*later.borrow());
    assert_eq!(pref.listener_count(), 2);
}
