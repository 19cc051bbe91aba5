// SPDX-License-Identifier: MPL-2.0
use moodslide::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        config: args.opt_value_from_str("--config").unwrap_or(None),
        font_dir: args.opt_value_from_str("--font-dir").unwrap_or(None),
    };

    app::run(flags)
}
