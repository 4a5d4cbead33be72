use actix_web::{HttpResponse, Result, web};
use chrono::Local;

use crate::api_models::process::{MessageRequest, MessageResponse};

/// Local wall-clock time rendered as ISO-8601 without an offset, read once
/// per request at handling time. The fractional part is omitted when the
/// clock lands on a whole second.
fn current_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

pub async fn process_message(request: web::Json<MessageRequest>) -> Result<HttpResponse> {
    let request = request.into_inner();
    let processed = format!("Processed: {}", request.message.to_uppercase());

    Ok(HttpResponse::Ok().json(MessageResponse {
        original_message: request.message,
        processed_message: processed,
        timestamp: current_timestamp(),
    }))
}
