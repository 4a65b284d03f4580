use std::sync::Arc;

use iced::{
    widget::{pick_list, Space},
    Alignment, Length, Task,
};
use tracing::{info, warn};

use taproot_ui::{
    component::{
        asset_select::{self, AssetSelect, Props},
        form::{self, Field, Form, FormValues, Value},
        text,
    },
    i18n::{English, Translate},
    node::NodeStates,
    theme,
    widget::*,
};

use crate::config::Config;

pub const ASSET_FIELD: &str = "asset";
pub const AMOUNT_FIELD: &str = "amount";

#[derive(Debug, Clone)]
pub enum Message {
    NodeSelected(String),
    Asset(asset_select::Message),
    AmountEdited(String),
    Submit,
}

/// Amount to send, in the smallest unit of the selected asset.
#[derive(Debug, Default)]
pub struct AmountField {
    value: Value<String>,
}

impl Field for AmountField {
    fn name(&self) -> &str {
        AMOUNT_FIELD
    }

    fn value(&self) -> Option<String> {
        Some(self.value.value.clone()).filter(|v| !v.is_empty())
    }

    fn validate(&mut self) -> bool {
        self.value.valid = !self.value.value.is_empty();
        self.value.valid
    }
}

/// A payment form: the node paying, the asset used and the amount.
pub struct App {
    node_states: NodeStates,
    node_names: Vec<String>,
    node: Option<String>,
    asset: AssetSelect,
    amount: AmountField,
    required: String,
    submitted: Option<FormValues>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let l: Arc<dyn Translate> = Arc::new(English);
        let node_names: Vec<String> = config.nodes.keys().cloned().collect();
        let node = node_names.first().cloned();

        let mut props = Props::new(ASSET_FIELD, config.network)
            .label("Asset")
            .placeholder("Select an asset")
            .show_balance(config.show_balance);
        if let Some(node) = &node {
            props = props.node_name(node.clone());
        }
        if let Some(asset) = config.initial_asset {
            props = props.initial_value(asset);
        }

        Self {
            required: l.l("cmps.forms.required"),
            asset: AssetSelect::new(props, l),
            node_states: config.nodes,
            node_names,
            node,
            amount: AmountField::default(),
            submitted: None,
        }
    }

    pub fn title(&self) -> String {
        format!("Taproot Assets - {}", self.asset.network())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NodeSelected(node) => {
                info!("Paying from node {}", node);
                self.asset.set_node_name(Some(node.clone()));
                self.node = Some(node);
                self.submitted = None;
            }
            Message::Asset(msg) => {
                if let Some(change) = self.asset.update(msg) {
                    info!("Asset changed to {}", change.value);
                    self.submitted = None;
                }
            }
            Message::AmountEdited(amount) => {
                self.amount.value = Value::new(amount);
                self.submitted = None;
            }
            Message::Submit => {
                let mut fields: [&mut dyn Field; 2] = [&mut self.asset, &mut self.amount];
                match form::collect(&mut fields) {
                    Ok(values) => {
                        info!("Form submitted: {:?}", values);
                        self.submitted = Some(values);
                    }
                    Err(fields) => {
                        warn!("Form has invalid fields: {}", fields.join(", "));
                        self.submitted = None;
                    }
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let node_picker = Column::new()
            .spacing(5)
            .push(text::p1_medium("Node").style(theme::text::primary))
            .push(
                pick_list(
                    self.node_names.as_slice(),
                    self.node.as_ref(),
                    Message::NodeSelected,
                )
                .placeholder("No node configured")
                .style(theme::pick_list::primary)
                .width(Length::Fill)
                .padding(10),
            );

        let amount = Column::new()
            .spacing(5)
            .push(text::p1_medium("Amount").style(theme::text::primary))
            .push(
                Form::new_amount_sats("Amount", &self.amount.value, Message::AmountEdited)
                    .warning(&self.required)
                    .padding(10),
            );

        Container::new(
            Column::new()
                .spacing(20)
                .max_width(600)
                .push(text::h3("Send"))
                .push(node_picker)
                .push(
                    self.asset
                        .view(Some(&self.node_states))
                        .map(Message::Asset),
                )
                .push(amount)
                .push(
                    Row::new()
                        .align_y(Alignment::Center)
                        .push(Space::with_width(Length::Fill))
                        .push(
                            Button::new(text::text("Submit"))
                                .on_press(Message::Submit)
                                .style(theme::button::primary)
                                .padding(10),
                        ),
                )
                .push_maybe(self.submitted.as_ref().map(|values| {
                    text::p2_regular(
                        values
                            .iter()
                            .map(|(k, v)| format!("{}: {}", k, v))
                            .collect::<Vec<_>>()
                            .join(", "),
                    )
                    .style(theme::text::success)
                })),
        )
        .padding(40)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .style(theme::container::background)
        .into()
    }

    pub fn submitted(&self) -> Option<&FormValues> {
        self.submitted.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taproot_ui::{
        component::asset_select::{AssetOption, Entry},
        node::{AssetBalance, NodeState},
    };

    fn config() -> Config {
        let mut config = Config::default();
        config.nodes.insert(
            "alice".to_string(),
            NodeState::new(vec![AssetBalance::new("aaaabbbbccccdddd", "LUSD", 500)]),
        );
        config.nodes.insert(
            "bob".to_string(),
            NodeState::new(vec![AssetBalance::new("eeeeffff00001111", "ACME", 7)]),
        );
        config
    }

    fn select(app: &mut App, option: AssetOption) {
        let _ = app.update(Message::Asset(asset_select::Message::Selected(
            Entry::Option(option),
        )));
    }

    #[test]
    fn test_submit_requires_asset() {
        let mut app = App::new(config());
        let _ = app.update(Message::AmountEdited("1000".to_string()));
        let _ = app.update(Message::Submit);
        assert!(app.submitted().is_none());
        assert!(!app.asset.is_valid());

        select(&mut app, AssetOption::Native);
        let _ = app.update(Message::Submit);
        let values = app.submitted().unwrap();
        assert_eq!(values.get(ASSET_FIELD).map(String::as_str), Some("sats"));
        assert_eq!(values.get(AMOUNT_FIELD).map(String::as_str), Some("1000"));
    }

    #[test]
    fn test_initial_asset() {
        let mut config = config();
        config.initial_asset = Some("sats".to_string());
        let mut app = App::new(config);
        let _ = app.update(Message::AmountEdited("1".to_string()));
        let _ = app.update(Message::Submit);
        assert!(app.submitted().is_some());
    }

    #[test]
    fn test_node_switch() {
        let mut app = App::new(config());
        assert_eq!(app.node.as_deref(), Some("alice"));
        select(
            &mut app,
            AssetOption::Asset(AssetBalance::new("aaaabbbbccccdddd", "LUSD", 500)),
        );
        assert_eq!(app.asset.help(Some(&app.node_states)), "Balance: 500");

        let _ = app.update(Message::NodeSelected("bob".to_string()));
        assert_eq!(app.asset.help(Some(&app.node_states)), "");
        assert_eq!(
            app.asset.derivation(Some(&app.node_states)).assets[0].name,
            "ACME"
        );
    }
}
