use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::middleware::Next;
use actix_web::{Error, HttpResponse};
use serde_json::json;

/// Turns `401 Unauthorized` responses produced by the
/// [`AuthenticatedUser`](crate::domain::auth::AuthenticatedUser) extractor
/// into a redirect to the login page. `/api/*` callers get a JSON body
/// instead.
pub async fn redirect_unauthorized(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let res = next.call(req).await?;

    if res.status() != StatusCode::UNAUTHORIZED {
        return Ok(res.map_into_left_body());
    }

    let (req, _) = res.into_parts();
    let response = if req.path().starts_with("/api/") {
        HttpResponse::Unauthorized().json(json!({
            "success": false,
            "error": "authentication required",
        }))
    } else {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/login"))
            .finish()
    };

    Ok(ServiceResponse::new(req, response.map_into_right_body()))
}
