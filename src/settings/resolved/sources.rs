use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where the settings that can fail validation were taken from.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) entity: Option<SettingSource>,
	pub(crate) page_size: Option<SettingSource>,
	pub(crate) fixture: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_entity(&self) -> SettingSource {
		self.entity
			.clone()
			.unwrap_or(SettingSource::ConfigKey("picker.entity"))
	}

	pub(crate) fn source_for_page_size(&self) -> SettingSource {
		self.page_size
			.clone()
			.unwrap_or(SettingSource::ConfigKey("picker.page_size"))
	}

	pub(crate) fn source_for_fixture(&self) -> SettingSource {
		self.fixture
			.clone()
			.unwrap_or(SettingSource::ConfigKey("source.fixture"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}
}
