use dioxus::prelude::*;
use wasm_bindgen::JsCast;

/// localStorage key remembering the chosen font across visits.
pub const FONT_STORAGE_KEY: &str = "wall-font";

pub const DEFAULT_FONT: &str = "Caveat";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontOption {
    pub name: &'static str,
    pub family: &'static str,
    pub category: &'static str,
}

const fn font(name: &'static str, family: &'static str, category: &'static str) -> FontOption {
    FontOption {
        name,
        family,
        category,
    }
}

/// The wall's typography palette: handwritten, bookish, clean, and display
/// faces that each change the feel of the whole page.
pub static FONT_OPTIONS: [FontOption; 20] = [
    font("Caveat", "Caveat, cursive", "Handwritten"),
    font("Patrick Hand", "Patrick Hand, cursive", "Handwritten"),
    font("Kalam", "Kalam, cursive", "Handwritten"),
    font("Indie Flower", "Indie Flower, cursive", "Handwritten"),
    font("Architects Daughter", "Architects Daughter, cursive", "Handwritten"),
    font("Shadows Into Light", "Shadows Into Light, cursive", "Handwritten"),
    font("Permanent Marker", "Permanent Marker, cursive", "Handwritten"),
    font("Crimson Text", "Crimson Text, serif", "Serif"),
    font("Lora", "Lora, serif", "Serif"),
    font("Merriweather", "Merriweather, serif", "Serif"),
    font("Playfair Display", "Playfair Display, serif", "Serif"),
    font("Libre Baskerville", "Libre Baskerville, serif", "Serif"),
    font("EB Garamond", "EB Garamond, serif", "Serif"),
    font("Inter", "Inter, sans-serif", "Sans-Serif"),
    font("Open Sans", "Open Sans, sans-serif", "Sans-Serif"),
    font("Nunito", "Nunito, sans-serif", "Sans-Serif"),
    font("Raleway", "Raleway, sans-serif", "Sans-Serif"),
    font("Special Elite", "Special Elite, cursive", "Display"),
    font("Courier Prime", "Courier Prime, monospace", "Display"),
    font("Anonymous Pro", "Anonymous Pro, monospace", "Display"),
];

pub fn find_font(name: &str) -> Option<&'static FontOption> {
    FONT_OPTIONS.iter().find(|f| f.name == name)
}

/// Category names in display order, deduplicated.
pub fn categories() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for f in &FONT_OPTIONS {
        if !out.contains(&f.category) {
            out.push(f.category);
        }
    }
    out
}

fn apply_font(family: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };
    if let Ok(el) = root.dyn_into::<web_sys::HtmlElement>() {
        let style = el.style();
        let _ = style.set_property("--font-handwritten", family);
        let _ = style.set_property("--font-body", family);
    }
}

fn load_saved_font() -> String {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(FONT_STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_FONT.to_string())
}

fn save_font(name: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(FONT_STORAGE_KEY, name);
    }
}

/// Typography control: a toggle that opens a panel of fonts grouped by
/// category. The choice applies to the whole document and persists locally.
#[component]
pub fn FontSwitcher() -> Element {
    let mut is_open = use_signal(|| false);
    let mut selected = use_signal(load_saved_font);

    use_effect(move || {
        let name = selected.read().clone();
        if let Some(f) = find_font(&name) {
            apply_font(f.family);
            save_font(f.name);
        }
    });

    let open = *is_open.read();
    let current = selected.read().clone();

    rsx! {
        div { class: "font-switcher",
            button {
                class: "font-switcher__toggle",
                aria_label: "Change font",
                title: "Change font",
                onclick: move |_| {
                    let cur = *is_open.read();
                    is_open.set(!cur);
                },
                "Font"
            }

            if open {
                div {
                    class: "font-switcher__backdrop",
                    onclick: move |_| is_open.set(false),
                }
                div { class: "font-switcher__panel",
                    div { class: "font-switcher__header",
                        h3 { class: "font-switcher__title", "Choose Your Font" }
                        button {
                            class: "font-switcher__close",
                            aria_label: "Close",
                            onclick: move |_| is_open.set(false),
                            "×"
                        }
                    }

                    for category in categories() {
                        div { class: "font-switcher__category",
                            h4 { class: "font-switcher__category-title", "{category}" }
                            div { class: "font-switcher__options",
                                for f in FONT_OPTIONS.iter().filter(|f| f.category == category) {
                                    button {
                                        class: if current == f.name {
                                            "font-switcher__option font-switcher__option--active"
                                        } else {
                                            "font-switcher__option"
                                        },
                                        style: "font-family: {f.family};",
                                        onclick: move |_| {
                                            selected.set(f.name.to_string());
                                            is_open.set(false);
                                        },
                                        "{f.name}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_twenty_fonts() {
        assert_eq!(FONT_OPTIONS.len(), 20);
    }

    #[test]
    fn test_default_font_exists() {
        let f = find_font(DEFAULT_FONT).unwrap();
        assert_eq!(f.category, "Handwritten");
        assert!(f.family.starts_with("Caveat"));
    }

    #[test]
    fn test_unknown_font_is_none() {
        assert!(find_font("Comic Sans").is_none());
    }

    #[test]
    fn test_categories_in_display_order() {
        assert_eq!(
            categories(),
            vec!["Handwritten", "Serif", "Sans-Serif", "Display"]
        );
    }

    #[test]
    fn test_font_names_are_unique() {
        for (i, a) in FONT_OPTIONS.iter().enumerate() {
            for b in &FONT_OPTIONS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
