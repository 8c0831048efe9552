//! `OpenAPI` document for this service.
//!
//! Advertises the API-key security scheme (header, configured name) and
//! attaches it to every protected operation. Built once at startup and
//! served as static JSON from `/openapi.json`.

use axum::{
    Router,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use utoipa::openapi::{
    OpenApi, OpenApiBuilder,
    info::InfoBuilder,
    path::{HttpMethod, OperationBuilder, PathItemBuilder, PathsBuilder},
    response::ResponseBuilder,
    schema::ComponentsBuilder,
    security::{ApiKey, ApiKeyValue, SecurityRequirement, SecurityScheme},
};

use crate::error::AppError;
use crate::services::auth::{ApiKeyOptions, SCHEME_NAME};
use crate::state::AppState;

pub const OPENAPI_PATH: &str = "/openapi.json";

struct Operation {
    path: &'static str,
    id: &'static str,
    summary: &'static str,
    protected: bool,
    admin_only: bool,
}

const OPERATIONS: &[Operation] = &[
    Operation {
        path: "/health",
        id: "health",
        summary: "Liveness check",
        protected: false,
        admin_only: false,
    },
    Operation {
        path: "/api/v1/me",
        id: "me",
        summary: "Identity and claims of the caller",
        protected: true,
        admin_only: false,
    },
    Operation {
        path: "/api/v1/admin/ping",
        id: "admin_ping",
        summary: "Admin-only connectivity check",
        protected: true,
        admin_only: true,
    },
];

pub fn build_openapi(options: &ApiKeyOptions) -> OpenApi {
    let mut paths = PathsBuilder::new();

    for op in OPERATIONS {
        let mut builder = OperationBuilder::new()
            .operation_id(Some(op.id))
            .summary(Some(op.summary))
            .response("200", ResponseBuilder::new().description("OK").build());

        if op.protected {
            builder = builder
                .security(SecurityRequirement::new(SCHEME_NAME, Vec::<String>::new()))
                .response(
                    "401",
                    ResponseBuilder::new()
                        .description("Missing or invalid API key")
                        .build(),
                );
        }
        if op.admin_only {
            builder = builder.response(
                "403",
                ResponseBuilder::new()
                    .description("Caller lacks the admin role")
                    .build(),
            );
        }

        let item = PathItemBuilder::new()
            .operation(HttpMethod::Get, builder.build())
            .build();
        paths = paths.path(op.path, item);
    }

    let key_name = options.key_name().to_string();
    let description = format!("Api key needed to access the endpoints. {key_name}: My_API_Key");
    let components = ComponentsBuilder::new()
        .security_scheme(
            SCHEME_NAME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                key_name,
                description,
            ))),
        )
        .build();

    let info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .build();

    OpenApiBuilder::new()
        .info(info)
        .paths(paths.build())
        .components(Some(components))
        .build()
}

/// `/openapi.json` を返す Router。serialize は起動時に一度だけ。
pub fn routes(options: &ApiKeyOptions) -> Router<AppState> {
    let body = match serde_json::to_string_pretty(&build_openapi(options)) {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize OpenAPI document");
            None
        }
    };

    Router::new().route(
        OPENAPI_PATH,
        get(move || {
            let body = body.clone();
            async move { serve(body) }
        }),
    )
}

fn serve(body: Option<String>) -> Response {
    match body {
        Some(json) => (
            [
                (header::CONTENT_TYPE, "application/json"),
                (header::CACHE_CONTROL, "no-store"),
            ],
            json,
        )
            .into_response(),
        None => AppError::Internal.into_response(),
    }
}
