use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use super::ModalState;
use crate::engine::leads::form::{FieldFocus, FormStatus, SubmitLeadEvent, WishlistForm};

/// Longest accepted field value. Keeps a held-down key from growing
/// the string without bound.
const MAX_FIELD_LEN: usize = 120;

/// Applies one logical key to a field value. Returns whether the value
/// changed.
pub fn apply_key(value: &mut String, key: &Key) -> bool {
    match key {
        Key::Character(input) => {
            if input.chars().any(char::is_control) || value.len() >= MAX_FIELD_LEN {
                return false;
            }
            value.push_str(input);
            true
        }
        Key::Space => {
            if value.len() >= MAX_FIELD_LEN {
                return false;
            }
            value.push(' ');
            true
        }
        Key::Backspace => value.pop().is_some(),
        _ => false,
    }
}

/// Keyboard editing for the wishlist fields. Only runs while the
/// wishlist modal is open; Tab cycles fields, Enter submits, Escape
/// closes the modal.
pub fn handle_text_input(
    mut events: EventReader<KeyboardInput>,
    mut modal_state: ResMut<ModalState>,
    mut form: ResMut<WishlistForm>,
    mut submit: EventWriter<SubmitLeadEvent>,
) {
    if !modal_state.wishlist_open {
        events.clear();
        return;
    }

    for event in events.read() {
        if !event.state.is_pressed() {
            continue;
        }
        match &event.logical_key {
            Key::Tab => {
                form.retry();
                form.focus = form.focus.next();
            }
            Key::Enter => {
                submit.write(SubmitLeadEvent);
            }
            Key::Escape => {
                modal_state.wishlist_open = false;
            }
            key => {
                if form.status == FormStatus::Submitting {
                    continue;
                }
                // Editing after a failure implicitly clears the error.
                form.retry();
                let focus = form.focus;
                let target = match focus {
                    FieldFocus::Name => &mut form.name,
                    FieldFocus::Email => &mut form.email,
                };
                apply_key(target, key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_and_space_append() {
        let mut value = String::new();
        assert!(apply_key(&mut value, &Key::Character("a".into())));
        assert!(apply_key(&mut value, &Key::Character("b".into())));
        assert!(apply_key(&mut value, &Key::Space));
        assert!(apply_key(&mut value, &Key::Character("c".into())));
        assert_eq!(value, "ab c");
    }

    #[test]
    fn backspace_removes_the_last_character() {
        let mut value = "abc".to_string();
        assert!(apply_key(&mut value, &Key::Backspace));
        assert_eq!(value, "ab");

        let mut empty = String::new();
        assert!(!apply_key(&mut empty, &Key::Backspace));
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut value = "a".to_string();
        assert!(!apply_key(&mut value, &Key::Character("\u{7f}".into())));
        assert!(!apply_key(&mut value, &Key::ArrowLeft));
        assert_eq!(value, "a");
    }

    #[test]
    fn values_stop_growing_at_the_cap() {
        let mut value = "x".repeat(MAX_FIELD_LEN);
        assert!(!apply_key(&mut value, &Key::Character("y".into())));
        assert!(!apply_key(&mut value, &Key::Space));
        assert_eq!(value.len(), MAX_FIELD_LEN);
    }

    #[test]
    fn multibyte_input_appends_whole_graphemes() {
        let mut value = String::new();
        assert!(apply_key(&mut value, &Key::Character("বাং".into())));
        assert_eq!(value, "বাং");
    }
}
