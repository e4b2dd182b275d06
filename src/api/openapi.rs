use super::handlers::{bookmarks, health};
use utoipa::openapi::{InfoBuilder, License, OpenApiBuilder, Tag};
use utoipa_axum::{router::OpenApiRouter, routes};

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Reuse the same router wiring and only return the generated OpenAPI document.
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

/// Build the router that also drives the `OpenAPI` document.
///
/// Add new endpoints here via `.routes(routes!(...))` so they are both served
/// and included in the generated `OpenAPI` document.
pub(crate) fn api_router() -> OpenApiRouter {
    // `routes!` reads #[utoipa::path] to bind HTTP method + path; handlers sharing a path go together.
    let mut router = OpenApiRouter::with_openapi(cargo_openapi())
        .routes(routes!(health::health))
        .routes(routes!(
            bookmarks::list_bookmarks,
            bookmarks::create_bookmark
        ))
        .routes(routes!(
            bookmarks::get_bookmark,
            bookmarks::delete_bookmark
        ));

    let mut bookmarks_tag = Tag::new("bookmarks");
    bookmarks_tag.description = Some("Create, read and delete bookmarks".to_string());

    let mut health_tag = Tag::new("health");
    health_tag.description = Some("Service and database status".to_string());

    router.get_openapi_mut().tags = Some(vec![bookmarks_tag, health_tag]);

    router
}

fn cargo_openapi() -> utoipa::openapi::OpenApi {
    // Use Cargo.toml metadata instead of the utoipa-axum crate info defaults.
    let info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some(
            "Bookmarks REST API. Every route expects `Authorization: Bearer <token>`.",
        ))
        .license(Some(License::new(env!("CARGO_PKG_LICENSE"))))
        .build();

    OpenApiBuilder::new().info(info).build()
}
