//! Argument normalization for `Layer::register`
//!
//! Both arguments accept either one item or an ordered sequence of items.
//! A single item is treated as a one-element sequence.

use nanomind_core::{Error, Handler, LayerEvent, Result};

/// The event name(s) a registration targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventSelector {
    One(String),
    Many(Vec<String>),
}

impl EventSelector {
    /// Build a selector from a dynamic value: a string or an array.
    ///
    /// Any other shape is rejected. Array elements that are not strings are
    /// kept as their rendered form so they fail later as unknown events.
    pub fn from_value(value: &toml::Value) -> Result<Self> {
        match value {
            toml::Value::String(name) => Ok(Self::One(name.clone())),
            toml::Value::Array(items) => Ok(Self::Many(
                items
                    .iter()
                    .map(|item| match item {
                        toml::Value::String(name) => name.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            )),
            other => Err(Error::dsl(format!("Can't use event(s) '{}'", other))),
        }
    }

    pub fn names(&self) -> &[String] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        }
    }

    /// Resolve every name, failing on the first unknown one.
    pub(crate) fn resolve(&self) -> Result<Vec<LayerEvent>> {
        self.names().iter().map(|name| name.parse()).collect()
    }
}

impl From<&str> for EventSelector {
    fn from(name: &str) -> Self {
        Self::One(name.to_string())
    }
}

impl From<String> for EventSelector {
    fn from(name: String) -> Self {
        Self::One(name)
    }
}

impl From<LayerEvent> for EventSelector {
    fn from(event: LayerEvent) -> Self {
        Self::One(event.as_str().to_string())
    }
}

impl From<Vec<&str>> for EventSelector {
    fn from(names: Vec<&str>) -> Self {
        Self::Many(names.into_iter().map(String::from).collect())
    }
}

impl From<Vec<String>> for EventSelector {
    fn from(names: Vec<String>) -> Self {
        Self::Many(names)
    }
}

impl From<Vec<LayerEvent>> for EventSelector {
    fn from(events: Vec<LayerEvent>) -> Self {
        Self::Many(events.iter().map(|e| e.as_str().to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for EventSelector {
    fn from(names: [&str; N]) -> Self {
        Self::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[LayerEvent; N]> for EventSelector {
    fn from(events: [LayerEvent; N]) -> Self {
        Self::Many(events.iter().map(|e| e.as_str().to_string()).collect())
    }
}

/// The handler(s) a registration attaches.
#[derive(Clone, Debug, Default)]
pub struct Handlers(Vec<Handler>);

impl Handlers {
    pub fn into_vec(self) -> Vec<Handler> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Handler> for Handlers {
    fn from(handler: Handler) -> Self {
        Self(vec![handler])
    }
}

impl From<Vec<Handler>> for Handlers {
    fn from(handlers: Vec<Handler>) -> Self {
        Self(handlers)
    }
}

impl<const N: usize> From<[Handler; N]> for Handlers {
    fn from(handlers: [Handler; N]) -> Self {
        Self(handlers.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_name_is_one_element_sequence() {
        let selector = EventSelector::from("after_creation");
        assert_eq!(selector.names(), &["after_creation".to_string()]);
    }

    #[test]
    fn resolve_keeps_order() {
        let selector = EventSelector::from(["before_deletion", "after_creation"]);
        assert_eq!(
            selector.resolve().unwrap(),
            vec![LayerEvent::BeforeDeletion, LayerEvent::AfterCreation]
        );
    }

    #[test]
    fn resolve_fails_on_first_unknown() {
        let selector = EventSelector::from(vec!["after_creation", "nope", "also_nope"]);
        let err = selector.resolve().unwrap_err();
        assert!(err.to_string().contains("Unknown event 'nope'"));
    }

    #[test]
    fn from_value_accepts_string_and_array() {
        let one = EventSelector::from_value(&toml::Value::String("after_creation".into())).unwrap();
        assert_eq!(one, EventSelector::One("after_creation".into()));

        let many = EventSelector::from_value(&toml::Value::Array(vec![
            toml::Value::String("after_creation".into()),
            toml::Value::String("before_deletion".into()),
        ]))
        .unwrap();
        assert_eq!(many.names().len(), 2);
    }

    #[test]
    fn from_value_rejects_tables() {
        let mut table = toml::map::Map::new();
        table.insert("after_creation".into(), toml::Value::Boolean(true));
        let err = EventSelector::from_value(&toml::Value::Table(table)).unwrap_err();
        assert!(err.is_dsl());
        assert!(err.to_string().contains("Can't use event(s)"));
    }

    #[test]
    fn from_value_rejects_scalars() {
        assert!(EventSelector::from_value(&toml::Value::Integer(3)).is_err());
        assert!(EventSelector::from_value(&toml::Value::Boolean(false)).is_err());
    }

    #[test]
    fn non_string_array_items_fail_as_unknown_events() {
        let selector =
            EventSelector::from_value(&toml::Value::Array(vec![toml::Value::Integer(7)])).unwrap();
        let err = selector.resolve().unwrap_err();
        assert!(err.to_string().contains("Unknown event '7'"));
    }

    #[test]
    fn single_handler_is_one_element_sequence() {
        let handlers = Handlers::from(Handler::new(()));
        assert_eq!(handlers.len(), 1);
    }
}
