use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls to the section with the given id; a missing element is a no-op.
pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("no section with id {id}");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn set_dark_theme(dark: bool) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().toggle_with_force("dark", dark);
    }
}
