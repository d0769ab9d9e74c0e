use std::{env, sync::Arc};

use clap::Parser;
use hive_console::{
    app::envy::Envy,
    console::service::Console,
    forms::{enums::form_layout::FormLayout, source::MapFormSource},
    inference::transport::ReqwestTransport,
    render::sink::RenderTargets,
};
use tracing_subscriber::EnvFilter;

/// Submit a creative or verified inference request and print the rendered response.
#[derive(Debug, Parser)]
#[command(name = "hive-console", version)]
struct Args {
    /// "creative" or "verified"
    #[arg(long)]
    mode: Option<String>,
    #[arg(long, default_value = "")]
    prompt: String,
    /// Comma separated media kinds, e.g. "text,image"
    #[arg(long)]
    media: Option<String>,
    #[arg(long)]
    temperature: Option<String>,
    #[arg(long)]
    top_k: Option<String>,
    #[arg(long)]
    max_steps: Option<String>,
    #[arg(long)]
    invoice: Option<String>,
    #[arg(long)]
    free_local: bool,
    #[arg(long)]
    allow_network: bool,
    #[arg(long)]
    axiom_set: Option<String>,
    #[arg(long)]
    payment_token: Option<String>,
    /// Overrides FORM_LAYOUT ("standard" or "extended")
    #[arg(long)]
    layout: Option<String>,
    /// Overrides API_BASE_URL
    #[arg(long)]
    base_url: Option<String>,
}

impl Args {
    fn form_source(&self, layout: FormLayout) -> MapFormSource {
        let ids = layout.field_ids();
        let mut source = MapFormSource::new()
            .with_value(ids.prompt, self.prompt.to_string())
            .with_checked(ids.free_local, self.free_local)
            .with_checked(ids.allow_network, self.allow_network);

        if let Some(mode) = &self.mode {
            source = source.with_selected(ids.mode_group, mode.to_string());
        }

        let values = [
            (ids.media, &self.media),
            (ids.temperature, &self.temperature),
            (ids.top_k, &self.top_k),
            (ids.max_steps, &self.max_steps),
            (ids.lightning_invoice, &self.invoice),
            (ids.axiom_set, &self.axiom_set),
        ];
        for (id, value) in values {
            if let Some(value) = value {
                source.set_value(id, value.to_string());
            }
        }

        match (ids.payment_token, &self.payment_token) {
            (Some(id), Some(token)) => source.set_value(id, token.to_string()),
            (None, Some(_)) => {
                tracing::warn!(layout = layout.value(), "layout has no payment token field, ignoring --payment-token")
            }
            _ => {}
        }

        source
    }
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let args = Args::parse();

    let layout_name = args
        .layout
        .clone()
        .or(envy.form_layout.clone())
        .unwrap_or_default();
    let layout = match layout_name.parse::<FormLayout>() {
        Ok(layout) => layout,
        Err(e) => panic!("{}", e),
    };
    let base_url = args.base_url.clone().unwrap_or(envy.api_base_url());

    tracing::debug!(%app_env, %base_url, layout = layout.value(), "configured");

    let console = Console::new(
        Arc::new(ReqwestTransport::default()),
        base_url,
        layout,
        RenderTargets::stdout(),
    );

    let source = args.form_source(console.layout());
    console.submit_once(&source).await;
}
