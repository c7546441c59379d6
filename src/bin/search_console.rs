//! Interactive search against a running studioflow server.
//!
//! Every line read from stdin is treated as the new content of the search
//! input; the table body is printed whenever it is replaced.
//!
//! Usage: `search_console [clients|projects]`

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};

use studioflow::models::config::{SearchConfig, load_settings};
use studioflow::search::{
    CLIENT_SEARCH, ClientRowRenderer, JsonFetcher, MemoryPage, PROJECT_SEARCH, ProjectRowRenderer,
    RenderTarget, ReqwestTransport, RowRenderer, SearchAnchors, SearchController, SearchState,
    TextInput,
};

/// Upper bound on waiting for the last search after stdin closes.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Table body printing its markup to stdout.
#[derive(Default)]
struct ConsoleBody {
    html: Mutex<String>,
}

impl RenderTarget for ConsoleBody {
    fn html(&self) -> String {
        self.html
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_html(&self, html: String) {
        println!("{html}");
        *self.html.lock().unwrap_or_else(PoisonError::into_inner) = html;
    }
}

fn load_search_config() -> Result<SearchConfig, config::ConfigError> {
    load_settings()?.get::<SearchConfig>("search")
}

async fn drive<R: RowRenderer>(
    anchors: &SearchAnchors,
    renderer: R,
    fetcher: JsonFetcher,
    delay: Duration,
) -> std::io::Result<()> {
    let input = Arc::new(TextInput::default());
    let page = MemoryPage::new()
        .with_input(anchors.input_id, input.clone())
        .with_render_target(anchors.target_id, Arc::new(ConsoleBody::default()));

    let Some(controller) = SearchController::bind(&page, anchors, renderer, fetcher, delay) else {
        return Err(std::io::Error::other("search anchors are not bound"));
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        input.set_value(line);
        controller.on_input();
    }

    let drained = tokio::time::timeout(DRAIN_TIMEOUT, async {
        while controller.state() == SearchState::Searching {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    })
    .await;

    if drained.is_err() {
        log::warn!("Gave up waiting for the last search after {DRAIN_TIMEOUT:?}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let entity = std::env::args().nth(1).unwrap_or_else(|| "clients".into());

    let search_config = match load_search_config() {
        Ok(search_config) => search_config,
        Err(err) => {
            log::error!("Error loading search config: {err}");
            std::process::exit(1);
        }
    };

    let transport = match ReqwestTransport::new(&search_config.base_url) {
        Ok(transport) => transport,
        Err(err) => {
            log::error!("Error creating HTTP client: {err}");
            std::process::exit(1);
        }
    };
    if let Some(cookie) = &search_config.session_cookie {
        transport.add_cookie(cookie);
    }
    log::info!("Searching {entity} on {}", transport.base_url());

    let fetcher = JsonFetcher::new(Arc::new(transport));
    let delay = search_config.delay();

    let result = match entity.as_str() {
        "clients" => match ClientRowRenderer::new() {
            Ok(renderer) => drive(&CLIENT_SEARCH, renderer, fetcher, delay).await,
            Err(err) => Err(std::io::Error::other(err)),
        },
        "projects" => match ProjectRowRenderer::new() {
            Ok(renderer) => drive(&PROJECT_SEARCH, renderer, fetcher, delay).await,
            Err(err) => Err(std::io::Error::other(err)),
        },
        other => {
            log::error!("Unknown entity {other:?}, expected clients or projects");
            std::process::exit(2);
        }
    };

    if let Err(err) = &result {
        log::error!("Search console failed: {err}");
    }
    result
}
