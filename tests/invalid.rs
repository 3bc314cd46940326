use ignore_caps_lock as icl;
use icl::{CorrectorOptions, Dom, KeyEvent, MemoryDom, Outcome, Page, PageEvent};

// Key presses on elements that are neither text controls nor content-editable
// are ignored and leave no deferred work behind.
#[test]
fn unsupported_elements_are_ignored() {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    let password = dom.append_input(body, "password");
    let button = dom.append_element(body, "button");
    let mut page = Page::new(dom, CorrectorOptions::default());

    for target in [password, button, body] {
        let out = page.dispatch(PageEvent::KeyPress(KeyEvent::press(target, 'A' as u32, false)));
        assert_eq!(out, Outcome::UnsupportedSurface);
        assert!(page.corrector().deferred_for(target).is_none());
    }
    assert_eq!(page.dom().value(password).unwrap(), "");
}

// Malformed and unknown toggle messages must not flip the flag.
#[test]
fn bad_messages_are_dropped() {
    let mut page = Page::new(MemoryDom::new(), CorrectorOptions::default());
    for raw in ["", "{", "[]", r#"{"action":1}"#, r#"{"action":"toggle"}"#] {
        page.dispatch(PageEvent::Message(raw.into()));
        assert!(page.corrector().is_enabled(), "flag flipped by {raw:?}");
    }
}

#[test]
fn config_can_start_disabled() {
    let opts = CorrectorOptions::from_json(r#"{"enabled_on_load": false}"#).unwrap();
    let mut dom = MemoryDom::new();
    let input = dom.append_input(dom.body(), "text");
    let mut page = Page::new(dom, opts);
    assert_eq!(page.type_into_control(input, 'A' as u32, false), Outcome::Disabled);
    assert_eq!(page.dom().value(input).unwrap(), "A");
}
