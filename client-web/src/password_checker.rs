use common::{password as policy, Config};
use tracing::debug;
use web_sys::{Document, Element, HtmlInputElement};

use crate::dom::{self, Input, Meter};

/// Hooks the policy check onto the first password field of the page, along
/// with the confirmation matcher and strength meter when the page has them.
pub fn attach(document: &Document, config: &Config) -> eyre::Result<()> {
    let password = match dom::query::<HtmlInputElement>(document, &config.password_selector)? {
        Some(field) => Input(field),
        None => {
            debug!("no password field, strength checker not attached");
            return Ok(());
        }
    };

    let field = password.clone();
    dom::listen(&password.0, "input", move |_| policy::on_password_input(&field))?;

    attach_confirmation(document, config, &password)?;
    attach_strength_meter(document, config, &password)?;
    Ok(())
}

fn attach_confirmation(document: &Document, config: &Config, password: &Input) -> eyre::Result<()> {
    let confirmation = match dom::query::<HtmlInputElement>(document, &config.confirmation_selector)? {
        Some(field) if !field.is_same_node(Some(password.0.as_ref())) => Input(field),
        _ => {
            debug!("no confirmation field");
            return Ok(());
        }
    };

    // either side changing can make them (mis)match
    for target in [&password.0, &confirmation.0] {
        let (password, confirmation) = (password.clone(), confirmation.clone());
        dom::listen(target, "input", move |_| policy::on_confirmation_input(&password, &confirmation))?;
    }
    Ok(())
}

fn attach_strength_meter(document: &Document, config: &Config, password: &Input) -> eyre::Result<()> {
    let meter = match dom::query::<Element>(document, &config.strength_meter_selector)? {
        Some(element) => Meter(element),
        None => {
            debug!("no strength meter");
            return Ok(());
        }
    };
    let email = dom::query::<HtmlInputElement>(document, &config.email_selector)?.map(Input);

    let field = password.clone();
    dom::listen(&password.0, "input", move |_| policy::on_strength_input(&field, email.as_ref(), &meter))?;
    Ok(())
}
