use ignore_caps_lock as icl;
use icl::{
    CorrectionState, CorrectorOptions, Dom, InputEvent, KeyEvent, MemoryDom, NodeId, NodeTree,
    Outcome, Page, PageEvent, SelectionRange,
};
use pretty_assertions::assert_eq;

fn editor(dom: &mut MemoryDom, text: &str) -> (NodeId, NodeId) {
    let div = dom.append_element(dom.body(), "div");
    dom.set_content_editable(div, true).unwrap();
    let t = dom.append_text(div, text);
    (div, t)
}

fn caret(node: NodeId, at: usize) -> Option<SelectionRange> {
    Some(SelectionRange { node, start: at, end: at })
}

fn press(page: &mut Page, target: NodeId, c: char, shift: bool) -> Outcome {
    page.dispatch(PageEvent::KeyPress(KeyEvent::press(target, c as u32, shift)))
}

fn input(page: &mut Page, target: NodeId) -> Outcome {
    page.dispatch(PageEvent::Input(InputEvent::new(target)))
}

#[test]
fn host_rewrite_is_overridden_exactly_once() {
    let mut dom = MemoryDom::new();
    let (div, text) = editor(&mut dom, "ab");
    dom.select(caret(text, 2));
    let mut page = Page::new(dom, CorrectorOptions::default());

    assert_eq!(press(&mut page, div, 'C', false), Outcome::Applied);
    assert_eq!(page.dom().text_content(div), "abc");

    // The page's editor re-renders with the browser's casing.
    page.dom_mut().set_text_content(div, "abC").unwrap();
    assert_eq!(input(&mut page, div), Outcome::Reapplied);
    assert_eq!(page.dom().text_content(div), "abc");
    let sel = page.dom().selection().unwrap();
    assert_eq!((sel.start, sel.end), (3, 3));
    assert_eq!(page.corrector().state(), &CorrectionState::Idle);

    // A later unrelated input event changes nothing.
    page.dom_mut().set_text_content(div, "abcd").unwrap();
    assert_eq!(input(&mut page, div), Outcome::Idle);
    assert_eq!(page.dom().text_content(div), "abcd");
}

#[test]
fn without_follow_up_the_immediate_correction_stands() {
    let mut dom = MemoryDom::new();
    let (div, text) = editor(&mut dom, "");
    dom.select(caret(text, 0));
    let mut page = Page::new(dom, CorrectorOptions::default());

    press(&mut page, div, 'x', true);
    assert_eq!(page.dom().text_content(div), "X");
    assert!(page.corrector().pending().is_some());
}

#[test]
fn second_keystroke_overwrites_pending_slot() {
    let mut dom = MemoryDom::new();
    let (first, first_text) = editor(&mut dom, "a");
    let (second, second_text) = editor(&mut dom, "b");
    let mut page = Page::new(dom, CorrectorOptions::default());

    page.dom_mut().select(caret(first_text, 1));
    press(&mut page, first, 'Y', false);
    page.dom_mut().select(caret(second_text, 1));
    press(&mut page, second, 'Z', false);

    let pending = page.corrector().pending().cloned().unwrap();
    assert_eq!(pending.surface, second);
    assert_eq!(pending.modified_text, "bz");

    // The first container's follow-up is gone.
    page.dom_mut().set_text_content(first, "aY").unwrap();
    assert_eq!(input(&mut page, first), Outcome::Idle);
    assert_eq!(page.dom().text_content(first), "aY");

    page.dom_mut().set_text_content(second, "bZ").unwrap();
    assert_eq!(input(&mut page, second), Outcome::Reapplied);
    assert_eq!(page.dom().text_content(second), "bz");
}

#[test]
fn nested_wrappers_are_descended() {
    let mut dom = MemoryDom::new();
    let root = dom.append_element(dom.body(), "div");
    dom.set_content_editable(root, true).unwrap();
    let outer = dom.append_element(root, "div");
    let inner = dom.append_element(outer, "span");
    let text = dom.append_text(inner, "hi");
    dom.select(caret(text, 2));
    let mut page = Page::new(dom, CorrectorOptions::default());

    assert_eq!(press(&mut page, root, 'X', false), Outcome::Applied);
    assert_eq!(page.corrector().pending().map(|p| p.container), Some(inner));
    assert_eq!(page.dom().text_content(root), "hix");
    assert_eq!(page.dom().children(outer), vec![inner]);
}

#[test]
fn line_break_placeholder_is_replaced() {
    let mut dom = MemoryDom::new();
    let span = dom.append_element(dom.body(), "span");
    dom.set_content_editable(span, true).unwrap();
    dom.append_element(span, "br");
    dom.select(caret(span, 0));
    let mut page = Page::new(dom, CorrectorOptions::default());

    assert_eq!(press(&mut page, span, 'a', true), Outcome::Applied);
    let wrapper = page.dom().children(span)[0];
    assert_eq!(page.dom().node_name(wrapper).as_deref(), Some("span"));
    assert_eq!(page.dom().attribute(wrapper, "data-text"), Some("true"));
    assert_eq!(page.dom().text_content(span), "A");
    assert_eq!(page.corrector().pending().map(|p| p.container), Some(wrapper));
}

#[test]
fn selection_is_consumed_by_the_keystroke() {
    let mut dom = MemoryDom::new();
    let (div, text) = editor(&mut dom, "hello");
    dom.select(Some(SelectionRange { node: text, start: 0, end: 5 }));
    let mut page = Page::new(dom, CorrectorOptions::default());

    press(&mut page, div, 'W', false);
    assert_eq!(page.dom().text_content(div), "w");
    let sel = page.dom().selection().unwrap();
    assert_eq!((sel.start, sel.end), (1, 1));
}

#[test]
fn missing_selection_leaves_text_untouched() {
    let mut dom = MemoryDom::new();
    let (div, _) = editor(&mut dom, "abc");
    let mut page = Page::new(dom, CorrectorOptions::default());

    assert_eq!(press(&mut page, div, 'D', false), Outcome::Failed);
    assert_eq!(page.dom().text_content(div), "abc");
    assert_eq!(input(&mut page, div), Outcome::Idle);
}

#[test]
fn stale_selection_offset_is_clamped_to_container_text() {
    let mut dom = MemoryDom::new();
    let (div, _) = editor(&mut dom, "ab");
    let other = dom.append_element(dom.body(), "p");
    let long = dom.append_text(other, "0123456789");
    dom.select(caret(long, 7));
    let mut page = Page::new(dom, CorrectorOptions::default());

    assert_eq!(press(&mut page, div, 'C', false), Outcome::Applied);
    assert_eq!(page.dom().text_content(div), "abc");
    let sel = page.dom().selection().unwrap();
    assert_eq!((sel.node, sel.start, sel.end), (page.dom().children(div)[0], 3, 3));
    assert_eq!(page.corrector().pending().map(|p| p.cursor_position), Some(3));
    assert_eq!(page.dom().text_content(other), "0123456789");
}

#[test]
fn descent_depth_comes_from_options() {
    let mut dom = MemoryDom::new();
    let root = dom.append_element(dom.body(), "div");
    dom.set_content_editable(root, true).unwrap();
    let level1 = dom.append_element(root, "div");
    let level2 = dom.append_element(level1, "div");
    let text = dom.append_text(level2, "");
    dom.select(caret(text, 0));
    let opts = CorrectorOptions {
        max_descent_depth: 1,
        ..CorrectorOptions::default()
    };
    let mut page = Page::new(dom, opts);

    press(&mut page, root, 'Q', false);
    assert_eq!(page.corrector().pending().map(|p| p.container), Some(level1));
    assert_eq!(page.dom().children(level1).len(), 1);
    assert_eq!(page.dom().text_content(level1), "q");
}
