// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{App, Flags};
use iced::window;
use iced::Size;

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        api_url: args.opt_value_from_str("--api-url").unwrap(),
    };

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(720.0, 540.0)),
            ..window::Settings::default()
        })
        .run_with(move || App::new(flags))
}
