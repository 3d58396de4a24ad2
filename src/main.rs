use axum::{
    routing::{get, patch, post},
    Router,
};
use std::net::SocketAddr;
use talentflow_backend::{
    config::{get_config, init_config},
    routes,
    store::Store,
    AppState,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let store = Store::seeded();
    let app_state = AppState::new(store);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let ats_api = Router::new()
        .route("/api/jobs", get(routes::jobs::list_jobs))
        .route("/api/jobs/stats", get(routes::jobs::job_stats))
        .route("/api/jobs/drafts", post(routes::jobs::create_draft))
        .route(
            "/api/jobs/drafts/:id",
            get(routes::jobs::get_draft).patch(routes::jobs::update_draft),
        )
        .route("/api/jobs/drafts/:id/next", post(routes::jobs::advance_draft))
        .route("/api/jobs/drafts/:id/back", post(routes::jobs::back_draft))
        .route(
            "/api/jobs/drafts/:id/channels/:name",
            post(routes::jobs::toggle_channel),
        )
        .route(
            "/api/jobs/drafts/:id/publish",
            post(routes::jobs::publish_draft),
        )
        .route("/api/jobs/:id", get(routes::jobs::get_job))
        .route("/api/candidates", get(routes::candidates::list_candidates))
        .route("/api/candidates/:id", get(routes::candidates::get_candidate))
        .route("/api/interviews", get(routes::interviews::list_interviews))
        .route(
            "/api/interviews/stats",
            get(routes::interviews::interview_stats),
        )
        .route(
            "/api/interviews/interviewers",
            get(routes::interviews::list_interviewers),
        )
        .route(
            "/api/interviews/slots",
            get(routes::interviews::list_time_slots),
        )
        .route(
            "/api/interviews/preview",
            post(routes::interviews::preview_schedule),
        )
        .route(
            "/api/interviews/schedule",
            post(routes::interviews::schedule_interview),
        )
        .route("/api/offers", get(routes::offers::list_offers))
        .route("/api/offers/stats", get(routes::offers::offer_stats))
        .route("/api/offers/onboarding", get(routes::offers::list_onboarding))
        .route(
            "/api/assessments",
            get(routes::assessments::list_assessments),
        )
        .route(
            "/api/assessments/results",
            get(routes::assessments::list_recent_results),
        )
        .route(
            "/api/templates",
            get(routes::templates::list_templates).post(routes::templates::create_template),
        )
        .route(
            "/api/templates/placeholders",
            get(routes::templates::list_placeholders),
        )
        .route("/api/templates/splice", post(routes::templates::splice_template))
        .route(
            "/api/templates/:id",
            patch(routes::templates::update_template)
                .delete(routes::templates::delete_template),
        )
        .route(
            "/api/templates/:id/duplicate",
            post(routes::templates::duplicate_template),
        )
        .route(
            "/api/integrations",
            get(routes::integrations::list_integrations),
        )
        .route(
            "/api/integrations/:id/connect",
            post(routes::integrations::connect_integration),
        )
        .route(
            "/api/integrations/:id/disconnect",
            post(routes::integrations::disconnect_integration),
        )
        .route(
            "/api/integrations/:id/settings",
            patch(routes::integrations::update_integration_settings),
        )
        .route("/api/talent-pool", get(routes::talent_pool::list_talent_pool))
        .route("/api/analytics/kpis", get(routes::analytics::list_kpis))
        .route("/api/analytics/sources", get(routes::analytics::list_sources))
        .route("/api/analytics/funnel", get(routes::analytics::funnel))
        .route("/api/analytics/diversity", get(routes::analytics::diversity))
        .route(
            "/api/video-interviews",
            get(routes::analytics::list_video_interviews),
        )
        .route(
            "/api/video-interviews/:id/insights",
            get(routes::analytics::video_insights),
        )
        .layer(axum::middleware::from_fn_with_state(
            talentflow_backend::middleware::rate_limit::new_rps_state(config.api_rps),
            talentflow_backend::middleware::rate_limit::rps_middleware,
        ));

    let content_api = Router::new()
        .route("/api/content/features", get(routes::content::list_features))
        .route(
            "/api/content/features/:slug",
            get(routes::content::get_feature),
        )
        .route(
            "/api/content/help/categories",
            get(routes::content::list_help_categories),
        )
        .route(
            "/api/content/help/categories/:slug",
            get(routes::content::get_help_category),
        )
        .route(
            "/api/content/help/articles/:slug",
            get(routes::content::get_help_article),
        )
        .layer(axum::middleware::from_fn_with_state(
            talentflow_backend::middleware::rate_limit::new_rps_state(config.public_rps),
            talentflow_backend::middleware::rate_limit::rps_middleware,
        ));

    let app = base_routes
        .merge(ats_api)
        .merge(content_api)
        .fallback(routes::not_found)
        .with_state(app_state)
        .layer(talentflow_backend::middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
