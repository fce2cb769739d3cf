//! Component trait definition.

use dsfr_core::page::Page;

/// Trait for reusable UI components.
///
/// A component owns whatever instance state must survive between renders and
/// turns it into a fresh [`Page`] each time [`Component::render`] is called.
///
/// # Example
///
/// ```
/// use dsfr_components::Component;
/// use dsfr_core::page::{IntoPage, Page, PageElement};
///
/// struct Greeting {
/// 	name: String,
/// }
///
/// impl Component for Greeting {
/// 	fn render(&self) -> Page {
/// 		PageElement::new("p")
/// 			.child(format!("Bonjour, {} !", self.name))
/// 			.into_page()
/// 	}
///
/// 	fn name() -> &'static str {
/// 		"Greeting"
/// 	}
/// }
///
/// let greeting = Greeting { name: "Marianne".to_string() };
/// assert_eq!(greeting.render().render_to_string(), "<p>Bonjour, Marianne !</p>");
/// ```
pub trait Component: 'static {
	/// Renders the component to a Page.
	fn render(&self) -> Page;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}

#[cfg(test)]
mod tests {
	use super::*;
	use dsfr_core::page::{IntoPage, PageElement};
	use rstest::rstest;

	struct TestComponent {
		message: String,
	}

	impl Component for TestComponent {
		fn render(&self) -> Page {
			PageElement::new("div")
				.child(self.message.clone())
				.into_page()
		}

		fn name() -> &'static str {
			"TestComponent"
		}
	}

	#[rstest]
	fn test_component_render() {
		let comp = TestComponent {
			message: "Hello".to_string(),
		};
		assert_eq!(comp.render().render_to_string(), "<div>Hello</div>");
	}

	#[rstest]
	fn test_component_name() {
		assert_eq!(TestComponent::name(), "TestComponent");
	}

	#[rstest]
	fn test_component_behind_trait_object() {
		let comp: Box<dyn Component> = Box::new(TestComponent {
			message: "Dynamic".to_string(),
		});
		assert_eq!(comp.render().render_to_string(), "<div>Dynamic</div>");
	}
}
