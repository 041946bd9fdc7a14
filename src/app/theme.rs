use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class on the wrapper that Tailwind's `dark:` variants key off.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    /// Particle fill and link stroke colors.
    pub fn particle_colors(self) -> (&'static str, &'static str) {
        match self {
            Theme::Light => ("#f43f5e", "#be123c"),
            Theme::Dark => ("#fb7185", "#f43f5e"),
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Session-only theme, seeded from `prefers-color-scheme`.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let prefers_dark = use_preferred_dark();
    let theme = RwSignal::new(Theme::Light);
    Effect::new(move |_| {
        theme.set(if prefers_dark.get() {
            Theme::Dark
        } else {
            Theme::Light
        });
    });
    provide_context(ThemeContext { theme });

    view! { <div class=move || theme.get().class()>{children()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.class(), "dark");
        assert!(Theme::Light.class().is_empty());
    }
}
