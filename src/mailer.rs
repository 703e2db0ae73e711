use serde_json::json;

use crate::{
    config::EmailConfig,
    contact::{ContactMessage, DeliveryError, EmailSender},
};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// JSON body of an EmailJS `send` call. The public key travels as `user_id`.
pub fn request_body(message: &ContactMessage, config: &EmailConfig) -> String {
    json!({
        "service_id": config.service_id,
        "template_id": config.template_id,
        "user_id": config.public_key,
        "template_params": {
            "name": message.name,
            "email": message.email,
            "message": message.message,
        },
    })
    .to_string()
}

/// Sends contact messages through the EmailJS REST API, straight from the
/// browser. There is nothing to send from on the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailJsSender;

impl EmailSender for EmailJsSender {
    async fn send(
        &self,
        message: &ContactMessage,
        config: &EmailConfig,
    ) -> Result<(), DeliveryError> {
        let body = request_body(message, config);
        #[cfg(feature = "hydrate")]
        {
            post_json(EMAILJS_SEND_URL, &body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(DeliveryError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_json(url: &str, body: &str) -> Result<(), DeliveryError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    fn js_err(e: JsValue) -> DeliveryError {
        DeliveryError::Network(format!("{e:?}"))
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| DeliveryError::Network("no window".to_string()))?;
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp.dyn_into().map_err(js_err)?;
    if resp.ok() {
        return Ok(());
    }

    let status = resp.status();
    let body = match resp.text() {
        Ok(p) => JsFuture::from(p)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    Err(DeliveryError::Rejected { status, body })
}
