//! End-to-end flow tests through the public API: typing, suggestion
//! selection, submit, and the dissolve wipe down to termination.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use vanish_input::{
    BLUR_GRACE, KeyboardEvent, MAX_SUGGESTIONS, ROTATE_INTERVAL, RenderCommand, StateFlags,
    Suggestion, VanishInput, WIPE_STEP,
};

fn placeholders() -> Vec<String> {
    vec![
        "Search AAPL...".into(),
        "Try TSLA...".into(),
        "Look up NVDA...".into(),
    ]
}

fn type_str(input: &mut VanishInput, text: &str) {
    for c in text.chars() {
        input.handle_key(&KeyboardEvent::new(c.to_string()));
    }
}

/// Frames that always suffice to drain a dissolve on the 800-wide surface.
fn drain_frames() -> usize {
    (800.0 / WIPE_STEP) as usize + 1100
}

#[test]
fn full_search_and_vanish_flow() {
    let submitted: Rc<RefCell<Vec<Suggestion>>> = Rc::new(RefCell::new(Vec::new()));
    let changes: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let mut input = VanishInput::new(placeholders());
    let submitted_clone = submitted.clone();
    input.on_submit(move |s| submitted_clone.borrow_mut().push(s.clone()));
    let changes_clone = changes.clone();
    input.on_change(move |v| changes_clone.borrow_mut().push(v.to_string()));

    let t0 = Instant::now();
    input.start(t0);
    input.focus();

    // Type a partial symbol and watch the dropdown populate
    type_str(&mut input, "NV");
    assert_eq!(input.value(), "NV");
    assert_eq!(*changes.borrow(), vec!["N".to_string(), "NV".to_string()]);
    let list = input.suggestions();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].symbol, "NVDA");
    assert!(input.flags().contains(StateFlags::DROPDOWN_OPEN));

    // Highlight it and accept with Enter
    input.handle_key(&KeyboardEvent::new("ArrowDown"));
    assert_eq!(input.highlighted(), 0);
    input.handle_key(&KeyboardEvent::new("Enter"));

    // Submit fired immediately with the full catalog entry
    assert_eq!(submitted.borrow().len(), 1);
    assert_eq!(submitted.borrow()[0].symbol, "NVDA");
    assert_eq!(submitted.borrow()[0].name, "NVIDIA Corporation");
    assert_eq!(input.value(), "NVDA");
    assert!(input.is_animating());
    assert!(input.suggestions().is_empty());

    // Drive the dissolve to completion
    let mut clears = 0;
    let mut finished_at = None;
    for frame in 0..drain_frames() {
        let commands = input.tick(t0);
        if let Some(RenderCommand::ClearFrom { .. }) = commands.first() {
            clears += 1;
        }
        if !input.is_animating() {
            finished_at = Some(frame);
            break;
        }
    }
    assert!(finished_at.is_some(), "dissolve must terminate");
    assert!(clears > 1, "the wipe spans multiple frames");

    // Terminal state: empty value, idle, no stray particles
    assert_eq!(input.value(), "");
    assert_eq!(input.particle_count(), 0);
    assert!(!input.flags().contains(StateFlags::ANIMATING));

    // Only the one submit ever fired
    assert_eq!(submitted.borrow().len(), 1);

    // And typing works again afterwards
    type_str(&mut input, "V");
    assert_eq!(input.value(), "V");
    assert!(!input.suggestions().is_empty());
}

#[test]
fn free_text_submit_synthesizes_unknown_symbol() {
    let submitted: Rc<RefCell<Vec<Suggestion>>> = Rc::new(RefCell::new(Vec::new()));
    let mut input = VanishInput::new(placeholders());
    let submitted_clone = submitted.clone();
    input.on_submit(move |s| submitted_clone.borrow_mut().push(s.clone()));

    type_str(&mut input, "PLTR");
    input.handle_key(&KeyboardEvent::new("Enter"));

    assert_eq!(submitted.borrow().len(), 1);
    assert_eq!(submitted.borrow()[0].symbol, "PLTR");
    assert_eq!(submitted.borrow()[0].name, "");
    assert!(input.is_animating());
}

#[test]
fn click_during_blur_grace_still_submits() {
    let submitted: Rc<RefCell<Vec<Suggestion>>> = Rc::new(RefCell::new(Vec::new()));
    let mut input = VanishInput::new(placeholders());
    let submitted_clone = submitted.clone();
    input.on_submit(move |s| submitted_clone.borrow_mut().push(s.clone()));

    input.focus();
    type_str(&mut input, "JP");
    assert_eq!(input.suggestions()[0].symbol, "JPM");

    // Pointer press blurs the input first; the list survives the window
    let t0 = Instant::now();
    input.blur(t0);
    input.tick(t0 + Duration::from_millis(50));
    assert!(!input.suggestions().is_empty());

    input.click_suggestion(0);
    assert_eq!(submitted.borrow().len(), 1);
    assert_eq!(submitted.borrow()[0].symbol, "JPM");
    assert_eq!(input.value(), "JPM");
    assert!(input.is_animating());
}

#[test]
fn blur_without_click_dismisses_dropdown() {
    let mut input = VanishInput::new(placeholders());
    input.focus();
    type_str(&mut input, "A");
    assert!(!input.suggestions().is_empty());

    let t0 = Instant::now();
    input.blur(t0);
    input.tick(t0 + BLUR_GRACE + Duration::from_millis(1));

    assert!(input.suggestions().is_empty());
    assert!(!input.flags().contains(StateFlags::DROPDOWN_OPEN));
    assert_eq!(input.value(), "A");
}

#[test]
fn suggestion_list_is_capped_and_navigable() {
    let mut input = VanishInput::new(placeholders());
    // "inc" appears in many company names
    type_str(&mut input, "inc");
    let list = input.suggestions();
    assert_eq!(list.len(), MAX_SUGGESTIONS);

    // Wrap all the way around the list and back to the top entry
    for _ in 0..=list.len() {
        input.handle_key(&KeyboardEvent::new("ArrowDown"));
    }
    assert_eq!(input.highlighted(), 0);

    // ArrowUp from the top wraps to the bottom
    input.handle_key(&KeyboardEvent::new("ArrowUp"));
    assert_eq!(input.highlighted(), (list.len() - 1) as i32);
}

#[test]
fn placeholder_cadence_respects_visibility() {
    let mut input = VanishInput::new(placeholders());
    let t0 = Instant::now();
    input.start(t0);
    assert_eq!(input.current_placeholder(), Some("Search AAPL..."));

    // Hidden: the cadence is suspended entirely
    input.set_visible(false, t0);
    input.tick(t0 + ROTATE_INTERVAL * 4);
    assert_eq!(input.current_placeholder(), Some("Search AAPL..."));

    // Visible again: cadence restarts from the resume point
    let resume = t0 + ROTATE_INTERVAL * 4;
    input.set_visible(true, resume);
    input.tick(resume + ROTATE_INTERVAL);
    assert_eq!(input.current_placeholder(), Some("Try TSLA..."));
}

#[test]
fn animation_owns_the_input_until_finished() {
    let mut input = VanishInput::new(placeholders());
    type_str(&mut input, "V");
    input.handle_key(&KeyboardEvent::new("Enter"));
    assert!(input.is_animating());

    // Every mutation path is suppressed mid-flight
    type_str(&mut input, "XYZ");
    input.set_value("other");
    input.click_suggestion(0);
    assert_eq!(input.value(), "V");

    let t0 = Instant::now();
    for _ in 0..drain_frames() {
        input.tick(t0);
        if !input.is_animating() {
            break;
        }
    }
    assert!(!input.is_animating());

    // Control returns to the keyboard
    input.set_value("MSFT");
    assert_eq!(input.value(), "MSFT");
}
