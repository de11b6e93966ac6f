use poem::{
    EndpointExt, IntoEndpoint, Route, Server as PoemServer, listener::TcpListener,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::api::error::payload_error_response;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// API, Swagger UI and OpenAPI document mounted on one route tree.
    pub fn routes(container: DependencyContainer, addr: &str) -> Route {
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Inventory Service API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest(
                "/",
                api_service
                    .into_endpoint()
                    .catch_error(payload_error_response),
            )
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container, &addr)
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
