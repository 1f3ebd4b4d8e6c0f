use utoipa::openapi::{InfoBuilder, OpenApi, OpenApiBuilder, Paths};

/// Minimal OpenAPI specification for the Trending Service.
pub fn doc() -> OpenApi {
    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title("AgriGrow Trending Service API")
                .version("1.0.0")
                .description(Some(
                    "Trending content discovery endpoints for the AgriGrow platform.",
                ))
                .build(),
        )
        .paths(Paths::new())
        .build()
}
