//! Create-new extension points.
//!
//! Integrations register one [`CreateHook`] per entity type. When the user asks
//! to create a record the picker looks up the hook for its entity, hands it the
//! current search text, and commits whatever identifier the hook returns.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::HookError;

/// What a create hook receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
	pub entity: String,
	/// Search text at the time of the request, offered as a prefill.
	pub prefill: String,
}

/// Creates a record for one entity type and returns its identifier.
///
/// Returning [`HookError::Cancelled`] leaves the picker open without a
/// notification.
pub trait CreateHook: Send + Sync {
	fn create(&self, request: &CreateRequest) -> Result<String, HookError>;
}

impl<F> CreateHook for F
where
	F: Fn(&CreateRequest) -> Result<String, HookError> + Send + Sync,
{
	fn create(&self, request: &CreateRequest) -> Result<String, HookError> {
		self(request)
	}
}

/// Create hooks keyed by entity type.
#[derive(Clone, Default)]
pub struct CreateHookRegistry {
	hooks: IndexMap<String, Arc<dyn CreateHook>>,
}

impl CreateHookRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `hook` for `entity`. Each entity takes at most one hook.
	pub fn register(
		&mut self,
		entity: impl Into<String>,
		hook: Arc<dyn CreateHook>,
	) -> Result<(), HookError> {
		let entity = entity.into();
		if self.hooks.contains_key(&entity) {
			return Err(HookError::DuplicateEntity { entity });
		}
		tracing::debug!(%entity, "registered create hook");
		self.hooks.insert(entity, hook);
		Ok(())
	}

	pub fn deregister(&mut self, entity: &str) -> Option<Arc<dyn CreateHook>> {
		self.hooks.shift_remove(entity)
	}

	pub fn get(&self, entity: &str) -> Option<Arc<dyn CreateHook>> {
		self.hooks.get(entity).cloned()
	}

	pub fn contains(&self, entity: &str) -> bool {
		self.hooks.contains_key(entity)
	}

	pub fn entities(&self) -> impl Iterator<Item = &str> {
		self.hooks.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.hooks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.hooks.is_empty()
	}
}

impl fmt::Debug for CreateHookRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CreateHookRegistry")
			.field("entities", &self.hooks.keys().collect::<Vec<_>>())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn echo(request: &CreateRequest) -> Result<String, HookError> {
		Ok(format!("{}:{}", request.entity, request.prefill))
	}

	#[test]
	fn hooks_are_looked_up_by_entity() {
		let mut registry = CreateHookRegistry::new();
		registry.register("Customer", Arc::new(echo)).unwrap();

		let hook = registry.get("Customer").unwrap();
		let id = hook
			.create(&CreateRequest {
				entity: "Customer".into(),
				prefill: "Ali".into(),
			})
			.unwrap();

		assert_eq!(id, "Customer:Ali");
		assert!(registry.get("Vehicle").is_none());
	}

	#[test]
	fn second_registration_for_an_entity_is_rejected() {
		let mut registry = CreateHookRegistry::new();
		registry.register("Customer", Arc::new(echo)).unwrap();

		let err = registry.register("Customer", Arc::new(echo)).unwrap_err();

		assert_eq!(
			err,
			HookError::DuplicateEntity {
				entity: "Customer".into()
			}
		);
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn deregistering_frees_the_entity() {
		let mut registry = CreateHookRegistry::new();
		registry.register("Customer", Arc::new(echo)).unwrap();

		assert!(registry.deregister("Customer").is_some());
		assert!(registry.is_empty());
		registry.register("Customer", Arc::new(echo)).unwrap();
		assert_eq!(registry.entities().collect::<Vec<_>>(), ["Customer"]);
	}
}
