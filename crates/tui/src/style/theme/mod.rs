mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations().to_vec()
}

/// Look a theme up by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtins::registrations()
		.iter()
		.find(|registration| registration.answers_to(name))
		.map(|registration| registration.theme)
}

/// Names of the built-in themes, in load order.
#[must_use]
pub fn names() -> Vec<String> {
	builtins::registrations()
		.iter()
		.map(|registration| registration.name.clone())
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
