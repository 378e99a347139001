use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer,
    listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{
    api::error::render_framework_error,
    config::{api_key_config::ApiKeyConfig, app_config::AppConfig},
    setup::dependency_injection::DependencyContainer,
};

pub struct Server;

impl Server {
    /// Assembles the full endpoint tree: the API under `/api`, Swagger UI
    /// under `/docs`, and the raw document under `/openapi.json`.
    pub fn app(
        container: DependencyContainer,
        api_key: ApiKeyConfig,
        cors: Cors,
        server_url: String,
    ) -> impl Endpoint {
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Product Catalog API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .data(api_key)
            .catch_all_error(render_framework_error)
            .with(cors)
            .with(Tracing)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(
            container,
            config.api_key,
            config.cors,
            format!("http://{}/api", addr),
        );

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
