use std::collections::BTreeMap;

use bitcoin::Denomination;
use iced::Length;

use crate::{component::text, theme, widget::*};

#[derive(Debug, Clone, PartialEq)]
pub struct Value<T> {
    pub value: T,
    pub valid: bool,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
            valid: true,
        }
    }
}

impl Value<String> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            valid: true,
        }
    }
}

/// An input registered in a form under a unique name.
pub trait Field {
    fn name(&self) -> &str;

    /// The value contributed to the submitted values, `None` if unset.
    fn value(&self) -> Option<String>;

    /// Checks the field and updates its validity state, returns whether it is valid.
    fn validate(&mut self) -> bool;
}

/// Values collected from the fields of a submitted form, keyed by field name.
pub type FormValues = BTreeMap<String, String>;

/// Validates every field and collects their values.
///
/// All fields are validated, even after a first failure, so that each invalid field displays
/// its message. On failure the names of the invalid fields are returned.
pub fn collect(fields: &mut [&mut dyn Field]) -> Result<FormValues, Vec<String>> {
    let mut values = FormValues::new();
    let mut invalid = Vec::new();
    for field in fields.iter_mut() {
        if !field.validate() {
            invalid.push(field.name().to_string());
        } else if let Some(value) = field.value() {
            values.insert(field.name().to_string(), value);
        }
    }
    if invalid.is_empty() {
        Ok(values)
    } else {
        Err(invalid)
    }
}

pub struct Form<'a, Message> {
    input: TextInput<'a, Message>,
    warning: Option<&'a str>,
    valid: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`] that restrict input values to a valid amount of satoshis before
    /// applying the `on_change` function.
    pub fn new_amount_sats<F>(placeholder: &str, value: &'a Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            input: TextInput::new(placeholder, &value.value).on_input(move |s| {
                if bitcoin::Amount::from_str_in(&s, Denomination::Satoshi).is_ok() || s.is_empty()
                {
                    on_change(s)
                } else {
                    on_change(value.value.clone())
                }
            }),
            warning: None,
            valid: value.valid,
        }
    }

    /// Sets the [`Form`] with a warning message
    pub fn warning(mut self, warning: &'a str) -> Self {
        self.warning = Some(warning);
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .push(if !form.valid {
                    form.input.style(theme::text_input::invalid)
                } else {
                    form.input
                })
                .push_maybe(if !form.valid {
                    form.warning
                        .map(|message| text::caption(message).style(theme::text::error))
                } else {
                    None
                })
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Required {
        name: &'static str,
        value: Value<String>,
    }

    impl Field for Required {
        fn name(&self) -> &str {
            self.name
        }
        fn value(&self) -> Option<String> {
            Some(self.value.value.clone()).filter(|v| !v.is_empty())
        }
        fn validate(&mut self) -> bool {
            self.value.valid = !self.value.value.is_empty();
            self.value.valid
        }
    }

    #[test]
    fn test_collect() {
        let mut a = Required {
            name: "a",
            value: Value::new("1"),
        };
        let mut b = Required {
            name: "b",
            value: Value::new("2"),
        };
        let mut fields: [&mut dyn Field; 2] = [&mut a, &mut b];
        let values = collect(&mut fields).unwrap();
        assert_eq!(values.get("a").map(String::as_str), Some("1"));
        assert_eq!(values.get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_collect_validates_every_field() {
        let mut a = Required {
            name: "a",
            value: Value::default(),
        };
        let mut b = Required {
            name: "b",
            value: Value::default(),
        };
        let mut c = Required {
            name: "c",
            value: Value::new("ok"),
        };
        let mut fields: [&mut dyn Field; 3] = [&mut a, &mut b, &mut c];
        assert_eq!(
            collect(&mut fields),
            Err(vec!["a".to_string(), "b".to_string()])
        );
        assert!(!a.value.valid);
        assert!(!b.value.valid);
        assert!(c.value.valid);
    }
}
