use contracts::shared::contact::{interpret_reply, ContactRequest, ContactResponse, CONTACT_ENDPOINT};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Post a contact/catering request. `Err` carries the text shown under the form.
pub async fn send_contact(request: &ContactRequest) -> Result<(), String> {
    let response = Request::post(&api_url(CONTACT_ENDPOINT))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let status = response.status();
    // An unreadable body is not an error by itself; the status decides
    let body = response.json::<ContactResponse>().await.ok();
    interpret_reply(status, body)
}
