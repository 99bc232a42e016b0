use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "1.0.0",
        description = r#"
# Catalog API

CRUD operations over catalog items.

## Error Handling

Failing requests return a JSON body with the HTTP status category, a message,
optional field-level validation errors and the request id:

```json
{
  "error": "Bad Request",
  "message": "Validation failed",
  "errors": { "price": ["price must be between 1 and 1000"] },
  "timestamp": "2024-01-01T00:00:00Z"
}
```

A missing item is reported as `404` with an empty body.
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "Items", description = "Catalog item endpoints")
    ),
    paths(
        crate::handlers::items::list_items,
        crate::handlers::items::get_item,
        crate::handlers::items::create_item,
        crate::handlers::items::update_item,
        crate::handlers::items::delete_item,
    ),
    components(
        schemas(
            crate::dto::ItemResponse,
            crate::dto::CreateItemRequest,
            crate::dto::UpdateItemRequest,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
