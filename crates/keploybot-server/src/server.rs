//! Server module.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error,
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use keploybot_config::Config;
use keploybot_core::{CoreContext, CoreModule};
use keploybot_ghapi_github::GithubApiService;
use keploybot_ghapi_interface::ApiService;
use tracing::info;

use crate::{
    health::health_check_route, middlewares::VerifySignature,
    webhook::configure_webhook_handlers, Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// API adapter.
    pub api_service: Box<dyn ApiService>,
}

impl AppContext {
    /// Create new app context.
    pub fn new(config: Config, core_module: CoreModule) -> Self {
        Self {
            config: config.clone(),
            core_module,
            api_service: Box::new(GithubApiService::new(config)),
        }
    }

    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        core_module: CoreModule,
        api_service: Box<dyn ApiService + Send + Sync>,
    ) -> Self {
        Self {
            config,
            core_module,
            api_service,
        }
    }

    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            api_service: self.api_service.as_ref(),
            core_module: &self.core_module,
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<Arc<AppContext>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context.clone())
        .wrap(Logger::default())
        .service(
            web::scope("/webhook")
                .wrap(VerifySignature::new(&context.config))
                .configure(configure_webhook_handlers),
        )
        .route("/health", web::get().to(health_check_route))
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on keploybot!" }))
            }),
        )
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            // Display Bad Request response on invalid JSON data
            error::InternalError::from_response(
                "",
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": err.to_string()
                })),
            )
            .into()
        }))
}

/// Run bot server.
pub async fn run_bot_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting bot server",
    );

    run_bot_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_bot_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(Arc::new(context));
    let cloned_context = context.clone();

    let mut server = HttpServer::new(move || build_actix_app(context.clone()));

    if let Some(workers) = cloned_context.config.server.workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
