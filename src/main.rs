// SPDX-License-Identifier: MPL-2.0
use iced_banner::app::{self, Flags};
use iced_banner::domain::banner::{Edge, Springiness};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_banner=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let springiness = match args.opt_value_from_str::<_, String>("--springiness") {
        Ok(Some(name)) => {
            let parsed = Springiness::from_name(&name);
            if parsed.is_none() {
                tracing::warn!(%name, "unknown springiness, expected none, slight or heavy");
            }
            parsed
        }
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(error = %err, "invalid --springiness");
            None
        }
    };
    let auto_dismiss_secs = args
        .opt_value_from_str::<_, u32>("--duration")
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "invalid --duration");
            None
        });
    let edge = args.contains("--bottom").then_some(Edge::Bottom);

    app::run(Flags {
        springiness,
        auto_dismiss_secs,
        edge,
    })
}
