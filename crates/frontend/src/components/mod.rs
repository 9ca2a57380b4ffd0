pub mod admin_panel;
pub mod canvas_view;
pub mod font_switcher;
pub mod navigation_radar;
pub mod note_card;
pub mod wall_view;
pub mod write_note;
