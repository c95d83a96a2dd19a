use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::config::app_conf::AppConfig;
use crate::config::jwt_conf::JwtConfig;
use crate::middlewares::admin_middleware::AdminAuthState;
use crate::repository::quote_repo::InMemoryQuoteRepository;
use crate::router::quote_router::quote_router;
use crate::service::quote_service::QuoteServiceImpl;
use crate::util::jwt::JwtTokenUtilsImpl;

pub struct App {
    config: AppConfig,
    router: Router,
    pub quote_service: Arc<QuoteServiceImpl>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();

        let jwt_config = JwtConfig::from_env().expect("JWT config error");
        let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(jwt_config));

        let quote_repo = Arc::new(InMemoryQuoteRepository::new());
        let quote_service = Arc::new(QuoteServiceImpl::new(quote_repo));

        let admin_auth_state = Arc::new(AdminAuthState {
            jwt_utils: jwt_utils.clone(),
        });

        let router = Self::create_router(quote_service.clone(), admin_auth_state);

        App {
            config,
            router,
            quote_service,
        }
    }

    fn create_router(
        quote_service: Arc<QuoteServiceImpl>,
        admin_auth_state: Arc<AdminAuthState>,
    ) -> Router {
        Router::new()
            .merge(quote_router(quote_service, admin_auth_state))
            .route("/health", get(|| async { "OK" }))
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(self.config.host.parse().expect("Invalid host"), self.config.port);
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }
}
