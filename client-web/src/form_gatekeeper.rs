use common::{gate, Config};
use tracing::debug;
use web_sys::{Document, HtmlFormElement};

use crate::dom::{self, Form, Submit};

/// Gates the submission of every marked form on native constraint validation.
/// Returns how many forms were hooked.
pub fn attach(document: &Document, config: &Config) -> eyre::Result<usize> {
    let forms = dom::query_all::<HtmlFormElement>(document, &config.form_selector)?;

    for form in &forms {
        let form = Form(form.clone());
        let validated_class = config.validated_class.clone();
        let target = form.0.clone();
        dom::listen(&target, "submit", move |event| {
            gate::on_submit(&form, &Submit(event), &validated_class);
        })?;
    }

    debug!(forms = forms.len(), "form gatekeeper attached");
    Ok(forms.len())
}
