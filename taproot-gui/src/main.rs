#![windows_subsystem = "windows"]

use std::{error::Error, process};

use iced::{Settings, Size, Task};
use tracing::warn;

use taproot_gui::{
    app::App,
    args::{parse_args, Arg, USAGE},
    config::{Config, ConfigError},
    logger::{parse_log_level, setup_logger},
    VERSION,
};
use taproot_ui::{component::text, font, theme};

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().skip(1).collect())?;
    let conf_path = match args.as_slice() {
        [] => Config::default_path()?,
        [Arg::ConfPath(path)] => path.clone(),
        [Arg::Version] => {
            eprintln!("{}", VERSION);
            process::exit(0);
        }
        [Arg::Help] => {
            eprintln!("{}", USAGE);
            process::exit(0);
        }
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    let (config, missing) = match Config::from_file(&conf_path) {
        Ok(config) => (config, false),
        Err(ConfigError::NotFound) => (Config::default(), true),
        Err(e) => return Err(e.into()),
    };

    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    setup_logger(log_level)?;
    if missing {
        warn!(
            "No configuration file at {}, no node is known",
            conf_path.display()
        );
    }

    let settings = Settings {
        id: Some("taproot-gui".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 800.0,
            height: 600.0,
        },
        min_size: Some(Size {
            width: 500.0,
            height: 450.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| theme::Theme::default())
        .settings(settings)
        .window(window_settings)
        .run_with(move || (App::new(config), Task::none()))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}
