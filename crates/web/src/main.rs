use std::sync::Arc;

use anyhow::Context;
use axum::{Extension, Router};
use storage::Database;
use storage::files::{FileStorage, LocalFileStorage};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::teams::handlers::list_teams,
        features::teams::handlers::get_team,
        features::teams::handlers::create_team,
        features::teams::handlers::update_team,
        features::teams::handlers::delete_team,
        features::skaters::handlers::list_skaters,
        features::skaters::handlers::get_skater,
        features::skaters::handlers::create_skater,
        features::skaters::handlers::update_skater,
        features::skaters::handlers::delete_skater,
        features::skaters::handlers::upload_skater_document,
        features::judges::handlers::list_judges,
        features::judges::handlers::get_judge,
        features::judges::handlers::create_judge,
        features::judges::handlers::update_judge,
        features::judges::handlers::delete_judge,
        features::modalities::handlers::list_modalities,
        features::modalities::handlers::get_modality,
        features::modalities::handlers::create_modality,
        features::modalities::handlers::update_modality,
        features::modalities::handlers::delete_modality,
        features::categories::handlers::list_categories,
        features::categories::handlers::get_category,
        features::categories::handlers::create_category,
        features::categories::handlers::update_category,
        features::categories::handlers::delete_category,
        features::age_brackets::handlers::list_age_brackets,
        features::age_brackets::handlers::get_age_bracket,
        features::age_brackets::handlers::create_age_bracket,
        features::age_brackets::handlers::update_age_bracket,
        features::age_brackets::handlers::delete_age_bracket,
        features::required_exercises::handlers::list_required_exercises,
        features::required_exercises::handlers::get_required_exercise,
        features::required_exercises::handlers::create_required_exercise,
        features::required_exercises::handlers::update_required_exercise,
        features::required_exercises::handlers::delete_required_exercise,
        features::tournaments::handlers::list_tournaments,
        features::tournaments::handlers::get_tournament,
        features::tournaments::handlers::create_tournament,
        features::tournaments::handlers::update_tournament,
        features::tournaments::handlers::delete_tournament,
        features::entries::handlers::list_entries,
        features::entries::handlers::entry_options,
        features::entries::handlers::get_entry,
        features::entries::handlers::create_entry,
        features::entries::handlers::update_entry,
        features::entries::handlers::delete_entry,
    ),
    components(
        schemas(
            storage::dto::team::CreateTeamRequest,
            storage::dto::team::UpdateTeamRequest,
            storage::dto::team::TeamResponse,
            storage::dto::skater::CreateSkaterRequest,
            storage::dto::skater::UpdateSkaterRequest,
            storage::dto::skater::SkaterResponse,
            storage::dto::skater::UploadDocumentRequest,
            storage::dto::skater::UploadDocumentResponse,
            storage::dto::judge::CreateJudgeRequest,
            storage::dto::judge::UpdateJudgeRequest,
            storage::dto::judge::JudgeResponse,
            storage::dto::modality::CreateModalityRequest,
            storage::dto::modality::UpdateModalityRequest,
            storage::dto::modality::ModalityResponse,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::UpdateCategoryRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::age_bracket::CreateAgeBracketRequest,
            storage::dto::age_bracket::UpdateAgeBracketRequest,
            storage::dto::age_bracket::AgeBracketResponse,
            storage::dto::required_exercise::CreateRequiredExerciseRequest,
            storage::dto::required_exercise::UpdateRequiredExerciseRequest,
            storage::dto::required_exercise::RequiredExerciseResponse,
            storage::dto::tournament::CreateTournamentRequest,
            storage::dto::tournament::UpdateTournamentRequest,
            storage::dto::tournament::TournamentResponse,
            storage::dto::entry::CreateEntryRequest,
            storage::dto::entry::EntryResponse,
            storage::models::Team,
            storage::models::Skater,
            storage::models::Judge,
            storage::models::JudgeLevel,
            storage::models::JudgeSpecialty,
            storage::models::JudgeStatus,
            storage::models::Modality,
            storage::models::Category,
            storage::models::AgeBracket,
            storage::models::RequiredExercise,
            storage::models::Tournament,
            storage::models::Entry,
            storage::services::entries::SelectionOptions,
            storage::services::entries::OptionItem,
            storage::services::skaters::DocumentKind,
        )
    ),
    tags(
        (name = "teams", description = "Team registry"),
        (name = "skaters", description = "Skater registry and documents"),
        (name = "judges", description = "Judge registry"),
        (name = "modalities", description = "Competition modalities"),
        (name = "categories", description = "Competition categories"),
        (name = "age-brackets", description = "Age brackets"),
        (name = "required-exercises", description = "Required exercises"),
        (name = "tournaments", description = "Tournament registry"),
        (name = "entries", description = "Tournament entries"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting federation competition API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    let files: Arc<dyn FileStorage> = Arc::new(LocalFileStorage::new(
        &config.upload_dir,
        &config.upload_base_url,
    ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", features::api_router(api_keys))
        .layer(Extension(files))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
