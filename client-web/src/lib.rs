//! Browser side of formguard: live password policy feedback and submit gating
//! for forms relying on native constraint validation.

use common::{consts::CONFIG_ELEMENT_ID, Config};
use eyre::WrapErr;
use tracing::{debug, error};
use web_sys::Document;

pub mod dom;
pub mod form_gatekeeper;
pub mod password_checker;

/// Wires everything once the document is parsed.
///
/// The wasm module may start after `DOMContentLoaded` already fired, in which
/// case attachment happens right away.
pub fn start() {
    if let Err(e) = on_page_load() {
        error!("{:?}", e);
    }
}

fn on_page_load() -> eyre::Result<()> {
    let document = dom::document()?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_| run(&doc))?;
    } else {
        run(&document);
    }
    Ok(())
}

fn run(document: &Document) {
    let res = load_config(document).and_then(|config| attach_all(document, &config));
    if let Err(e) = res {
        error!("{:?}", e);
    }
}

/// Reads the JSON config embedded in `<script type="application/json" id="formguard-config">`,
/// falling back to the defaults when the page has none.
pub fn load_config(document: &Document) -> eyre::Result<Config> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => {
            let json = element.text_content().unwrap_or_default();
            Config::from_json(&json).wrap_err("invalid formguard config")
        }
        None => Ok(Config::default()),
    }
}

/// Both behaviors are independent: a failure attaching one does not prevent
/// the other.
pub fn attach_all(document: &Document, config: &Config) -> eyre::Result<()> {
    let checker = password_checker::attach(document, config);
    let gatekeeper = form_gatekeeper::attach(document, config);

    checker.wrap_err("failed to attach password checker")?;
    let forms = gatekeeper.wrap_err("failed to attach form gatekeeper")?;
    debug!(forms, "page behaviors attached");
    Ok(())
}
