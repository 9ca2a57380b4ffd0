use dioxus::prelude::*;
use wall_shared::models::{NoteInput, MAX_MESSAGE_LEN, MAX_NAME_LEN};

/// The writing surface. It is itself a note: message area, name line, and a
/// pin button. Ctrl/Cmd+Enter submits.
#[component]
pub fn WriteNote(on_submit: EventHandler<NoteInput>) -> Element {
    let mut message = use_signal(String::new);
    let mut name = use_signal(String::new);

    let can_submit = !message.read().trim().is_empty();

    let mut submit = move || {
        let input = NoteInput {
            message: message.read().trim().to_string(),
            name: Some(name.read().trim().to_string()),
        };
        if input.message.is_empty() {
            return;
        }
        on_submit.call(input);
        message.set(String::new());
        name.set(String::new());
    };

    rsx! {
        form {
            class: "write-note",
            onsubmit: move |evt| {
                evt.prevent_default();
                submit();
            },

            div { class: "write-note__paper",
                textarea {
                    class: "write-note__message",
                    placeholder: "Write something...",
                    rows: "3",
                    maxlength: "{MAX_MESSAGE_LEN}",
                    aria_label: "Your thought",
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        let mods = evt.modifiers();
                        if evt.key() == Key::Enter && (mods.ctrl() || mods.meta()) {
                            evt.prevent_default();
                            submit();
                        }
                    },
                }

                div { class: "write-note__footer",
                    span { class: "write-note__dash", "—" }
                    input {
                        class: "write-note__name",
                        r#type: "text",
                        placeholder: "Anonymous",
                        maxlength: "{MAX_NAME_LEN}",
                        aria_label: "Your name (optional)",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    button {
                        class: "write-note__submit",
                        r#type: "submit",
                        disabled: !can_submit,
                        aria_label: "Place note on wall",
                        "Pin it"
                    }
                }
            }

            if can_submit {
                p { class: "write-note__hint", "Press Ctrl+Enter to pin" }
            }
        }
    }
}
