use std::str::FromStr;

use anyhow::{Context, Result, bail};
use include_dir::Dir;
use ratatui::style::{Color, Modifier, Style};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

/// One `.toml` file: a name, lookup aliases and a style per dialog element.
#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: DialogStyles,
}

#[derive(Debug, Deserialize)]
struct DialogStyles {
	#[serde(deserialize_with = "element_style")]
	header: Style,
	#[serde(deserialize_with = "element_style")]
	row_highlight: Style,
	#[serde(deserialize_with = "element_style")]
	prompt: Style,
	#[serde(deserialize_with = "element_style")]
	empty: Style,
	#[serde(deserialize_with = "element_style")]
	highlight: Style,
	#[serde(default = "error_fallback", deserialize_with = "element_style")]
	error: Style,
}

impl From<DialogStyles> for Theme {
	fn from(styles: DialogStyles) -> Self {
		Self {
			header: styles.header,
			row_highlight: styles.row_highlight,
			prompt: styles.prompt,
			empty: styles.empty,
			highlight: styles.highlight,
			error: styles.error,
		}
	}
}

impl ThemeFile {
	fn into_registration(self) -> ThemeRegistration {
		self.aliases
			.iter()
			.map(|alias| alias.trim())
			.filter(|alias| !alias.is_empty())
			.fold(
				ThemeRegistration::new(self.name, self.styles.into()),
				|registration, alias| registration.alias(alias),
			)
	}
}

fn error_fallback() -> Style {
	Style::new().fg(Color::Red).add_modifier(Modifier::BOLD)
}

/// `{ fg = "..", bg = "..", modifiers = [..] }`; colours use ratatui's names,
/// `#rrggbb` or a 0-255 palette index.
fn element_style<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Style, D::Error> {
	#[derive(Deserialize)]
	#[serde(deny_unknown_fields)]
	struct Entry {
		fg: Option<String>,
		bg: Option<String>,
		#[serde(default)]
		modifiers: Vec<String>,
	}

	let entry = Entry::deserialize(deserializer)?;
	let colour = |value: &str| {
		Color::from_str(value.trim()).map_err(|_| D::Error::custom(format!("unknown colour `{value}`")))
	};

	let mut style = Style::new();
	if let Some(fg) = &entry.fg {
		style = style.fg(colour(fg)?);
	}
	if let Some(bg) = &entry.bg {
		style = style.bg(colour(bg)?);
	}
	for name in &entry.modifiers {
		let modifier = match name.trim().to_ascii_lowercase().as_str() {
			"bold" => Modifier::BOLD,
			"dim" => Modifier::DIM,
			"italic" => Modifier::ITALIC,
			"underlined" | "underline" => Modifier::UNDERLINED,
			"reversed" => Modifier::REVERSED,
			other => return Err(D::Error::custom(format!("unknown modifier `{other}`"))),
		};
		style = style.add_modifier(modifier);
	}
	Ok(style)
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir
		.files()
		.filter(|file| file.path().extension().is_some_and(|ext| ext == "toml"))
		.collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::with_capacity(files.len());
	let mut default_name: Option<String> = None;
	for file in files {
		let path = file.path();
		let contents = file
			.contents_utf8()
			.with_context(|| format!("{path:?} is not valid UTF-8"))?;
		let theme: ThemeFile =
			toml::from_str(contents).with_context(|| format!("invalid theme file {path:?}"))?;

		if theme.default {
			if let Some(existing) = &default_name {
				bail!("themes `{existing}` and `{}` are both marked default", theme.name);
			}
			default_name = Some(theme.name.clone());
		}
		registrations.push(theme.into_registration());
	}

	let default_theme = match &default_name {
		Some(name) => registrations.iter().find(|registration| &registration.name == name),
		None => registrations.first(),
	}
	.map(|registration| registration.theme);
	let Some(default_theme) = default_theme else {
		bail!("no built-in theme definitions were found");
	};

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}
