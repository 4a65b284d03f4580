use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub pick_lists: PickLists,
    pub menus: Menu,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickLists {
    pub primary: PickList,
    pub invalid: PickList,
    pub disabled: PickListPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickList {
    pub active: PickListPalette,
    pub hovered: PickListPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickListPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub placeholder: iced::Color,
    pub handle: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Menu {
    pub background: iced::Color,
    pub text: iced::Color,
    pub selected_background: iced::Color,
    pub selected_text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::LIGHT_BLACK,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::GREY_2,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::GREEN,
                        text: color::LIGHT_BLACK,
                        border: color::GREEN.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREEN,
                        text: color::LIGHT_BLACK,
                        border: color::WHITE.into(),
                    },
                    disabled: Some(ButtonPalette {
                        background: color::GREY_7,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
            },
            pick_lists: PickLists {
                primary: PickList {
                    active: PickListPalette {
                        background: color::GREY_7,
                        text: color::WHITE,
                        placeholder: color::GREY_3,
                        handle: color::WHITE,
                        border: color::GREY_7.into(),
                    },
                    hovered: PickListPalette {
                        background: color::GREY_7,
                        text: color::WHITE,
                        placeholder: color::GREY_3,
                        handle: color::GREEN,
                        border: color::GREEN.into(),
                    },
                },
                invalid: PickList {
                    active: PickListPalette {
                        background: color::GREY_7,
                        text: color::WHITE,
                        placeholder: color::GREY_3,
                        handle: color::RED,
                        border: color::RED.into(),
                    },
                    hovered: PickListPalette {
                        background: color::GREY_7,
                        text: color::WHITE,
                        placeholder: color::GREY_3,
                        handle: color::RED,
                        border: color::RED.into(),
                    },
                },
                disabled: PickListPalette {
                    background: color::GREY_5,
                    text: color::GREY_3,
                    placeholder: color::GREY_3,
                    handle: color::GREY_3,
                    border: None,
                },
            },
            menus: Menu {
                background: color::GREY_7,
                text: color::WHITE,
                selected_background: color::GREY_5,
                selected_text: color::GREEN,
                border: color::GREY_3.into(),
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::BLACK,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_7,
                        value: color::GREEN,
                        selection: color::GREEN,
                        border: Some(color::GREEN),
                    },
                    disabled: TextInputPalette {
                        background: color::BLACK,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_7,
                        value: color::GREY_3,
                        selection: color::GREY_3,
                        border: Some(color::GREY_7),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::BLACK,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_7,
                        value: color::RED,
                        selection: color::RED,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::BLACK,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_7,
                        value: color::GREY_3,
                        selection: color::GREY_3,
                        border: Some(color::RED),
                    },
                },
            },
        }
    }
}
