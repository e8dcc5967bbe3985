use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::replenishment::generate_suggestions,
        crate::handlers::replenishment::suggestion_stats,
    ),
    components(schemas(
        crate::services::replenishment::RunSummary,
        crate::services::replenishment::UrgencyBreakdown,
        crate::services::replenishment::TypeBreakdown,
        crate::errors::ErrorResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "replenishment", description = "Replenishment suggestion engine")
    ),
    info(
        title = "Supplyline API",
        description = "Supply-chain operations backend",
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
