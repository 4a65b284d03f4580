pub use iced::widget::overlay::menu::Catalog;
use iced::{
    widget::overlay::menu::{Style, StyleFn},
    Border,
};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> <Self as Catalog>::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &<Self as Catalog>::Class<'_>) -> Style {
        class(self)
    }
}

pub fn primary(theme: &Theme) -> Style {
    Style {
        text_color: theme.colors.menus.text,
        background: theme.colors.menus.background.into(),
        selected_text_color: theme.colors.menus.selected_text,
        selected_background: theme.colors.menus.selected_background.into(),
        border: if let Some(color) = theme.colors.menus.border {
            Border {
                radius: 10.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                ..Default::default()
            }
        },
    }
}
