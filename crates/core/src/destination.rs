//! Write sinks that receive the committed identifier.

use std::cell::RefCell;
use std::rc::Rc;

/// Caller-supplied target of a commit, invoked exactly once per commit.
pub trait Destination {
	fn set_value(&mut self, field: &str, value: &str);
}

impl<F> Destination for F
where
	F: FnMut(&str, &str),
{
	fn set_value(&mut self, field: &str, value: &str) {
		self(field, value);
	}
}

/// Destination that remembers every write; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct CapturedValue {
	writes: Rc<RefCell<Vec<(String, String)>>>,
}

impl CapturedValue {
	pub fn new() -> Self {
		Self::default()
	}

	/// Most recent `(field, value)` written.
	pub fn last(&self) -> Option<(String, String)> {
		self.writes.borrow().last().cloned()
	}

	pub fn writes(&self) -> Vec<(String, String)> {
		self.writes.borrow().clone()
	}
}

impl Destination for CapturedValue {
	fn set_value(&mut self, field: &str, value: &str) {
		self.writes
			.borrow_mut()
			.push((field.to_string(), value.to_string()));
	}
}
