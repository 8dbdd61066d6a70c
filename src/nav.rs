use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// The four anchored page sections. Components never touch the DOM to
/// navigate; they emit a `Section` through an `on_navigate` callback and the
/// app root performs the scroll here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id the section renders under.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

/// Smooth-scrolls to the section's anchor. Missing elements are ignored;
/// every section is rendered unconditionally so that only happens mid-mount.
pub fn scroll_to(section: Section) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.anchor()));
    if let Some(element) = element {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_stable_and_unique() {
        let anchors: Vec<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["home", "about", "projects", "contact"]);
        for (i, a) in anchors.iter().enumerate() {
            assert!(!anchors[i + 1..].contains(a));
        }
    }
}
