use iced::{
    widget::pick_list::{Catalog, Status, Style, StyleFn},
    Background, Border,
};

use super::{
    palette::{PickList, PickListPalette},
    Theme,
};

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> <Self as Catalog>::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &<Self as Catalog>::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    pick_list(&theme.colors.pick_lists.primary, status)
}

/// Style of a required selector left empty at submission.
pub fn invalid(theme: &Theme, status: Status) -> Style {
    pick_list(&theme.colors.pick_lists.invalid, status)
}

fn pick_list(p: &PickList, status: Status) -> Style {
    match status {
        Status::Active => style(&p.active),
        Status::Hovered | Status::Opened => style(&p.hovered),
    }
}

fn style(p: &PickListPalette) -> Style {
    Style {
        text_color: p.text,
        placeholder_color: p.placeholder,
        handle_color: p.handle,
        background: Background::Color(p.background),
        border: if let Some(color) = p.border {
            Border {
                radius: 25.0.into(),
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
