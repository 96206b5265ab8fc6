use utoipa::OpenApi;

use crate::presentation::envelope::ApiResponse;
use crate::presentation::handlers::health::HealthDto;
use crate::presentation::handlers::messages::{CreateMessageDto, MessageDto, UpdateMessageDto};
use crate::presentation::handlers::status::HttpStatusDto;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::messages::list_messages,
        crate::presentation::handlers::messages::create_message,
        crate::presentation::handlers::messages::update_message,
        crate::presentation::handlers::messages::delete_message,
        crate::presentation::handlers::status::get_http_status,
        crate::presentation::handlers::status::get_status_image,
        crate::presentation::handlers::health::health_check
    ),
    components(
        schemas(
            CreateMessageDto,
            UpdateMessageDto,
            MessageDto,
            HttpStatusDto,
            HealthDto,
            ApiResponse<MessageDto>,
            ApiResponse<Vec<MessageDto>>,
            ApiResponse<HttpStatusDto>
        )
    ),
    tags(
        (name = "messages", description = "Message CRUD endpoints"),
        (name = "status", description = "HTTP status lookup and image proxy"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
