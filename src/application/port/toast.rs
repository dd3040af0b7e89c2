// SPDX-License-Identifier: MPL-2.0
//! Outbound toast surface.
//!
//! The composer never talks to the UI directly: it hands `{title, description,
//! variant}` triples to a [`ToastSink`]. Titles and descriptions are i18n keys
//! resolved by whoever renders them.

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    /// Confirmation or informational message.
    #[default]
    Default,
    /// Something the user has to fix.
    Destructive,
}

/// A message for the toast surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    title_key: &'static str,
    description_key: &'static str,
    args: Vec<(String, String)>,
    variant: ToastVariant,
}

impl Toast {
    /// Creates a default-variant toast.
    #[must_use]
    pub fn new(title_key: &'static str, description_key: &'static str) -> Self {
        Self {
            title_key,
            description_key,
            args: Vec::new(),
            variant: ToastVariant::Default,
        }
    }

    /// Creates a destructive toast.
    #[must_use]
    pub fn destructive(title_key: &'static str, description_key: &'static str) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title_key, description_key)
        }
    }

    /// Adds an interpolation argument for the description.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn title_key(&self) -> &'static str {
        self.title_key
    }

    #[must_use]
    pub fn description_key(&self) -> &'static str {
        self.description_key
    }

    #[must_use]
    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }

    /// Looks up an interpolation argument by name.
    #[must_use]
    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn variant(&self) -> ToastVariant {
        self.variant
    }
}

/// Anything that can display toasts.
pub trait ToastSink {
    fn show(&mut self, toast: Toast);
}

/// Collects toasts in order; handy for headless callers and tests.
impl ToastSink for Vec<Toast> {
    fn show(&mut self, toast: Toast) {
        self.push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_variant_and_args() {
        let toast = Toast::destructive("t", "d").with_arg("title", "Hello");
        assert_eq!(toast.variant(), ToastVariant::Destructive);
        assert_eq!(toast.arg("title"), Some("Hello"));
        assert_eq!(toast.arg("missing"), None);
    }

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<Toast> = Vec::new();
        sink.show(Toast::new("a", "a-desc"));
        sink.show(Toast::new("b", "b-desc"));
        let keys: Vec<_> = sink.iter().map(Toast::title_key).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
