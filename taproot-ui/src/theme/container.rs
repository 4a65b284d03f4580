use iced::widget::container::{transparent, Catalog, Style, StyleFn};
use iced::Background;

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(transparent)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

pub fn background(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.background)),
        ..Default::default()
    }
}

/// Background of a form field that does not accept input.
pub fn field_disabled(theme: &Theme) -> Style {
    let p = &theme.colors.pick_lists.disabled;
    Style {
        background: Some(Background::Color(p.background)),
        text_color: Some(p.text),
        border: iced::Border {
            radius: 25.0.into(),
            width: if p.border.is_some() { 1.0 } else { 0.0 },
            color: p.border.unwrap_or(iced::Color::TRANSPARENT),
        },
        ..Default::default()
    }
}
