//! `railpal checkout` — create a checkout session and print the URL.

use railpal_backend_client::BackendClient;
use railpal_config::Settings;

use crate::exit_codes::{self, checkout_exit_code};
use crate::{resolve_api_base, CliError};

pub(crate) fn cmd_checkout(price_id: String, api_base: Option<String>) -> Result<(), CliError> {
    let settings = Settings::load();
    let price_id = resolve_price_id(price_id, &settings);

    let base = resolve_api_base(api_base, &settings);
    let client = BackendClient::with_base_url(base).map_err(|e| CliError {
        code: exit_codes::EXIT_CHECKOUT_TRANSPORT,
        message: format!("cannot build HTTP client: {}", e),
        hint: None,
    })?;

    let url = client.create_checkout_session(&price_id).map_err(|e| CliError {
        code: checkout_exit_code(&e),
        message: format!("checkout failed: {}", e),
        hint: None,
    })?;

    println!("{}", url);
    Ok(())
}

/// Map the `monthly` / `credits` aliases through settings; anything else is a
/// literal price ID.
fn resolve_price_id(price_id: String, settings: &Settings) -> String {
    match price_id.as_str() {
        "monthly" => settings.price_monthly.clone(),
        "credits" => settings.price_credits.clone(),
        _ => price_id,
    }
}
