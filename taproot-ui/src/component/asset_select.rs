//! Required form field selecting the asset a payment settles in: the native currency or one
//! of the Taproot Assets held by a node.

use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use bitcoin::Network;
use iced::{widget::pick_list, Length};

use crate::{
    component::{
        amount::format_amount,
        form::{Field, Value},
        text::{self, ellipse_inner},
    },
    i18n::{Prefixed, Translate},
    node::{node_state, AssetBalance, NodeState, NodeStates},
    theme,
    widget::*,
};

/// Value of the native currency option.
pub const NATIVE_VALUE: &str = "sats";
pub const NATIVE_LABEL: &str = "Bitcoin (sats)";
pub const ASSETS_GROUP_LABEL: &str = "Taproot Assets";

const TRANSLATION_PREFIX: &str = "cmps.common.form.TapAssetSelect";
/// Characters kept on each side of an abbreviated asset id.
const ID_ELLIPSIS_LEN: usize = 4;

/// A selectable option. It is handed back to the caller with every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOption {
    Native,
    Asset(AssetBalance),
}

impl AssetOption {
    pub fn value(&self) -> &str {
        match self {
            Self::Native => NATIVE_VALUE,
            Self::Asset(a) => &a.id,
        }
    }
}

impl Display for AssetOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native => write!(f, "{}", NATIVE_LABEL),
            Self::Asset(a) => write!(
                f,
                "{} ({})  {}",
                a.name,
                ellipse_inner(&a.id, ID_ELLIPSIS_LEN),
                format_amount(a.balance)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub label: &'static str,
    pub options: Vec<AssetOption>,
}

/// Options offered by the selector: the native currency first, then the assets group if the
/// node holds any asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub native: AssetOption,
    pub group: Option<OptionGroup>,
}

impl Options {
    pub fn new(assets: &[AssetBalance]) -> Self {
        Self {
            native: AssetOption::Native,
            group: (!assets.is_empty()).then(|| OptionGroup {
                label: ASSETS_GROUP_LABEL,
                options: assets.iter().cloned().map(AssetOption::Asset).collect(),
            }),
        }
    }

    /// Lines of the dropdown menu, the group label included.
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries = vec![Entry::Option(self.native.clone())];
        if let Some(group) = &self.group {
            entries.push(Entry::Group(group.label));
            entries.extend(group.options.iter().cloned().map(Entry::Option));
        }
        entries
    }
}

/// A line of the dropdown menu. Group labels are listed but selecting one has no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Group(&'static str),
    Option(AssetOption),
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Group(label) => write!(f, "{}:", label),
            Self::Option(option) => write!(f, "{}", option),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Selected(Entry),
}

/// Notification of a selection made by the user, to be handled by the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub value: String,
    pub option: AssetOption,
}

/// Values computed from the current selection and node state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Derivation {
    /// Assets of the node, sorted by name.
    pub assets: Vec<AssetBalance>,
    /// Help text displaying the balance of the selected asset, empty if none.
    pub balance: String,
}

/// Sorts the node assets and computes the balance help text of the selected asset.
pub fn derive(
    selected: &str,
    node_state: Option<&NodeState>,
    show_balance: bool,
    l: &dyn Translate,
) -> Derivation {
    let mut derivation = Derivation::default();
    if let Some(state) = node_state {
        derivation.assets = state.sorted_balances();
        let selected_balance = derivation
            .assets
            .iter()
            .find(|a| a.id == selected)
            .map(|a| a.balance);
        if let Some(balance) = selected_balance.filter(|b| show_balance && *b != 0) {
            let balance = format_amount(balance);
            derivation.balance = l.translate("balance", &[("balance", balance.as_str())]);
        }
    }
    derivation
}

/// Configuration of an [`AssetSelect`], mostly forwarded to the dropdown.
#[derive(Debug, Clone)]
pub struct Props {
    pub name: String,
    pub label: Option<String>,
    /// Kept for per-network asset filtering, not consulted yet.
    pub network: Network,
    pub node_name: Option<String>,
    pub initial_value: Option<String>,
    pub show_balance: bool,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub width: Length,
    pub padding: u16,
    pub text_size: Option<u16>,
}

impl Props {
    pub fn new(name: impl Into<String>, network: Network) -> Self {
        Self {
            name: name.into(),
            label: None,
            network,
            node_name: None,
            initial_value: None,
            show_balance: false,
            placeholder: None,
            disabled: false,
            width: Length::Fill,
            padding: 10,
            text_size: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn node_name(mut self, node_name: impl Into<String>) -> Self {
        self.node_name = Some(node_name.into());
        self
    }

    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    pub fn show_balance(mut self, show_balance: bool) -> Self {
        self.show_balance = show_balance;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    pub fn text_size(mut self, size: u16) -> Self {
        self.text_size = Some(size);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoKey {
    selected: String,
    node_name: Option<String>,
    /// Hash of the node state, `None` if the node is unknown.
    node_state: Option<u64>,
    show_balance: bool,
}

fn fingerprint(state: &NodeState) -> u64 {
    let mut hasher = DefaultHasher::new();
    state.hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug)]
struct Memo {
    key: MemoKey,
    derivation: Derivation,
}

pub struct AssetSelect {
    props: Props,
    selected: Value<String>,
    l: Prefixed,
    memo: RefCell<Option<Memo>>,
}

impl AssetSelect {
    pub fn new(props: Props, l: Arc<dyn Translate>) -> Self {
        let selected = Value::new(props.initial_value.clone().unwrap_or_default());
        Self {
            props,
            selected,
            l: Prefixed::new(TRANSLATION_PREFIX, l),
            memo: RefCell::new(None),
        }
    }

    pub fn network(&self) -> Network {
        self.props.network
    }

    /// Identifier of the selected option, empty if nothing is selected.
    pub fn selected(&self) -> &str {
        &self.selected.value
    }

    pub fn is_valid(&self) -> bool {
        self.selected.valid
    }

    pub fn set_node_name(&mut self, node_name: Option<String>) {
        self.props.node_name = node_name;
    }

    pub fn set_show_balance(&mut self, show_balance: bool) {
        self.props.show_balance = show_balance;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.props.disabled = disabled;
    }

    /// Returns the derivation for the current inputs, reusing the last one if none of them
    /// changed.
    pub fn derivation(&self, node_states: Option<&NodeStates>) -> Derivation {
        let state = node_state(node_states, self.props.node_name.as_deref());
        let key = MemoKey {
            selected: self.selected.value.clone(),
            node_name: self.props.node_name.clone(),
            node_state: state.map(fingerprint),
            show_balance: self.props.show_balance,
        };
        let mut memo = self.memo.borrow_mut();
        match memo.as_ref() {
            Some(m) if m.key == key => m.derivation.clone(),
            _ => {
                let derivation = derive(&key.selected, state, key.show_balance, &self.l);
                *memo = Some(Memo {
                    key,
                    derivation: derivation.clone(),
                });
                derivation
            }
        }
    }

    pub fn options(&self, node_states: Option<&NodeStates>) -> Options {
        Options::new(&self.derivation(node_states).assets)
    }

    /// Help text displayed under the field.
    pub fn help(&self, node_states: Option<&NodeStates>) -> String {
        self.help_text(self.derivation(node_states))
    }

    fn help_text(&self, derivation: Derivation) -> String {
        if !self.selected.valid {
            self.l.l("cmps.forms.required")
        } else {
            derivation.balance
        }
    }

    /// Applies the user selection. The returned [`Change`] is to be handled by the parent,
    /// it is produced once the selection is stored.
    pub fn update(&mut self, message: Message) -> Option<Change> {
        match message {
            Message::Selected(Entry::Group(_)) => None,
            Message::Selected(Entry::Option(option)) => {
                self.selected = Value::new(option.value());
                log::debug!("{}: selected {}", self.props.name, self.selected.value);
                Some(Change {
                    value: option.value().to_string(),
                    option,
                })
            }
        }
    }

    pub fn view<'a>(&'a self, node_states: Option<&NodeStates>) -> Element<'a, Message> {
        let derivation = self.derivation(node_states);
        let options = Options::new(&derivation.assets);
        let help = self.help_text(derivation);
        let selected = options
            .entries()
            .into_iter()
            .find(|e| matches!(e, Entry::Option(o) if o.value() == self.selected.value));

        let input: Element<'a, Message> = if self.props.disabled {
            Container::new(
                text::text(
                    selected
                        .as_ref()
                        .map(|e| e.to_string())
                        .or_else(|| self.props.placeholder.clone())
                        .unwrap_or_default(),
                )
                .style(theme::text::secondary),
            )
            .padding(self.props.padding)
            .width(self.props.width)
            .style(theme::container::field_disabled)
            .into()
        } else {
            let mut list = pick_list(options.entries(), selected, Message::Selected)
                .width(self.props.width)
                .padding(self.props.padding)
                .style(if self.selected.valid {
                    theme::pick_list::primary
                } else {
                    theme::pick_list::invalid
                });
            if let Some(placeholder) = &self.props.placeholder {
                list = list.placeholder(placeholder.clone());
            }
            if let Some(size) = self.props.text_size {
                list = list.text_size(size);
            }
            list.into()
        };

        Column::new()
            .spacing(5)
            .width(self.props.width)
            .push_maybe(
                self.props
                    .label
                    .as_ref()
                    .map(|label| text::p1_medium(label).style(theme::text::primary)),
            )
            .push(input)
            .push_maybe((!help.is_empty()).then(|| {
                text::caption(help).style(if self.selected.valid {
                    theme::text::secondary
                } else {
                    theme::text::error
                })
            }))
            .into()
    }
}

impl Field for AssetSelect {
    fn name(&self) -> &str {
        &self.props.name
    }

    fn value(&self) -> Option<String> {
        Some(self.selected.value.clone()).filter(|v| !v.is_empty())
    }

    fn validate(&mut self) -> bool {
        self.selected.valid = !self.selected.value.is_empty();
        self.selected.valid
    }
}
