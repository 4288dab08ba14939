use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use std::io::Write;

/// Initiates the stdout logger. Defaults to info, `RUST_LOG` overrides.
pub fn init() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                _ => style.set_color(Color::Green),
            };

            writeln!(
                buf,
                "{} | {} | {}",
                &chrono::Utc::now().to_string()[11..23],
                format_args!("{:^5}", style.value(record.level())),
                record.args(),
            )
        })
        .init()
}
