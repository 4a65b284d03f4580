//! String lookup for user-facing messages.
//!
//! Templates use `{{name}}` placeholders which are replaced by the matching parameter.

use std::sync::Arc;

/// Named values interpolated into a template.
pub type Params<'a> = &'a [(&'a str, &'a str)];

pub trait Translate {
    /// Returns the message for `key`, with `params` interpolated.
    fn translate(&self, key: &str, params: Params) -> String;

    fn l(&self, key: &str) -> String {
        self.translate(key, &[])
    }
}

impl<T: Translate + ?Sized> Translate for Arc<T> {
    fn translate(&self, key: &str, params: Params) -> String {
        (**self).translate(key, params)
    }
}

const EN: &[(&str, &str)] = &[
    ("cmps.forms.required", "required"),
    ("cmps.common.form.TapAssetSelect.balance", "Balance: {{balance}}"),
];

/// Built-in english messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct English;

impl Translate for English {
    fn translate(&self, key: &str, params: Params) -> String {
        match EN.iter().find(|(k, _)| *k == key) {
            Some((_, template)) => interpolate(template, params),
            None => {
                log::debug!("Missing translation for key {}", key);
                key.to_string()
            }
        }
    }
}

/// Resolves relative keys under a component namespace. Keys already rooted at `cmps.`
/// are looked up as they are.
#[derive(Clone)]
pub struct Prefixed {
    prefix: &'static str,
    inner: Arc<dyn Translate>,
}

impl Prefixed {
    pub fn new(prefix: &'static str, inner: Arc<dyn Translate>) -> Self {
        Self { prefix, inner }
    }
}

impl std::fmt::Debug for Prefixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prefixed")
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl Translate for Prefixed {
    fn translate(&self, key: &str, params: Params) -> String {
        if key.starts_with("cmps.") {
            self.inner.translate(key, params)
        } else {
            self.inner
                .translate(&format!("{}.{}", self.prefix, key), params)
        }
    }
}

pub fn interpolate(template: &str, params: Params) -> String {
    let mut res = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let Some(end) = rest[start + 2..].find("}}") else {
            break;
        };
        let name = rest[start + 2..start + 2 + end].trim();
        res.push_str(&rest[..start]);
        match params.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => res.push_str(value),
            // Unknown placeholders are kept so the missing parameter is visible.
            None => res.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &rest[start + 2 + end + 2..];
    }
    res.push_str(rest);
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate() {
        assert_eq!(
            interpolate("Balance: {{balance}}", &[("balance", "1 000")]),
            "Balance: 1 000"
        );
        assert_eq!(
            interpolate("{{ a }} and {{b}}", &[("a", "x"), ("b", "y")]),
            "x and y"
        );
        assert_eq!(interpolate("{{missing}}!", &[]), "{{missing}}!");
        assert_eq!(interpolate("open {{ end", &[("end", "x")]), "open {{ end");
        assert_eq!(interpolate("plain", &[("a", "b")]), "plain");
    }

    #[test]
    fn test_english() {
        assert_eq!(English.l("cmps.forms.required"), "required");
        assert_eq!(English.l("unknown.key"), "unknown.key");
    }

    #[test]
    fn test_prefixed() {
        let l = Prefixed::new("cmps.common.form.TapAssetSelect", Arc::new(English));
        assert_eq!(
            l.translate("balance", &[("balance", "42")]),
            "Balance: 42"
        );
        assert_eq!(l.l("cmps.forms.required"), "required");
    }
}
