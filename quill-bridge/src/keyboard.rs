//! Keyboard dispatch and subscription management.
//!
//! The trigger key is bound inside the focused text editor so its default
//! action (inserting a tab) never runs. Everything else global lives in the
//! subscription: Escape dismisses, Ctrl+T cycles themes, and a left click
//! that no widget captured dismisses the suggestion panel.

use crate::app::QuillApp;
use crate::messages::Message;

use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};
use iced::widget::text_editor::{Binding, KeyPress, Status};
use iced::{event, keyboard, mouse, Subscription};

use quill_core::TriggerKey;

// ────────────────────────────────────────────────────────────────
// Editor key bindings
// ────────────────────────────────────────────────────────────────

/// Whether `key` + `modifiers` is the configured trigger.
pub fn is_trigger(key: &Key, modifiers: Modifiers, trigger: TriggerKey) -> bool {
    match trigger {
        TriggerKey::Tab => {
            matches!(key, Key::Named(Named::Tab)) && !modifiers.control() && !modifiers.alt()
        }
        TriggerKey::CtrlSpace => matches!(key, Key::Named(Named::Space)) && modifiers.control(),
    }
}

/// Key binding hook for the text editor.
///
/// iced asks for a binding even when the editor is not focused; the trigger
/// only counts while it is. Escape keeps its default (unfocus) and the
/// dismissal comes from the subscription.
pub fn editor_binding(key_press: KeyPress, trigger: TriggerKey) -> Option<Binding<Message>> {
    let focused = matches!(key_press.status, Status::Focused { .. });

    if focused && is_trigger(&key_press.key, key_press.modifiers, trigger) {
        return Some(Binding::Custom(Message::RequestSuggestions));
    }

    Binding::from_key_press(key_press)
}

// ────────────────────────────────────────────────────────────────
// Subscription
// ────────────────────────────────────────────────────────────────

/// Map a key press that reached the window (outside the editor's bindings).
pub fn global_key(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.control() {
        return match key {
            Key::Character(c) if c.as_str() == "t" || c.as_str() == "T" => {
                Some(Message::CycleTheme)
            }
            _ => None,
        };
    }

    match key {
        Key::Named(Named::Escape) => Some(Message::DismissSuggestions),
        _ => None,
    }
}

/// Route a window event that reached the subscription.
pub fn route_event(evt: iced::Event, status: event::Status) -> Option<Message> {
    match evt {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            global_key(&key, modifiers)
        }
        // Clicks on the panel or inside the editor are captured by those
        // widgets; anything left over landed outside both.
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            if matches!(status, event::Status::Ignored) =>
        {
            Some(Message::DismissSuggestions)
        }
        _ => None,
    }
}

pub fn subscription(_app: &QuillApp) -> Subscription<Message> {
    event::listen_with(|evt, status, _id| route_event(evt, status))
}
