// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use acts_api::{
    ApiError, CreateAstronautDutyRequest, CreateAstronautDutyResponse, CreatePersonRequest,
    CreatePersonResponse, GetAstronautDutiesResponse, GetPeopleResponse, GetPersonByNameResponse,
    ProcessLog, RenamePersonRequest, RenamePersonResponse, create_astronaut_duty, create_person,
    get_astronaut_duties_by_name, get_people, get_person_by_name, rename_person,
};
use acts_persistence::Persistence;
use axum::{
    Json, Router,
    extract::{Path, State as AxumState, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// ACTS Server - HTTP server for the Astronaut Career Tracking System
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Populate an empty database with the demo people before serving
    #[arg(long)]
    seed_demo: bool,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for people, duties, and process logs.
    persistence: Arc<Mutex<Persistence>>,
}

/// Problem-details error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProblemDetails {
    /// The human-readable status name.
    title: String,
    /// A human-readable explanation of this particular failure.
    detail: String,
    /// The HTTP status code.
    status: u16,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The human-readable status name.
    title: String,
    /// The detail message for the response body.
    detail: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ProblemDetails> = Json(ProblemDetails {
            title: self.title,
            detail: self.detail,
            status: self.status.as_u16(),
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ResourceNotFound { message } => Self {
                status: StatusCode::NOT_FOUND,
                title: String::from("Not Found"),
                detail: message,
            },
            ApiError::DuplicateResource { message } => Self {
                status: StatusCode::CONFLICT,
                title: String::from("Conflict"),
                detail: message,
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                title: String::from("Bad Request"),
                detail: err.to_string(),
            },
            ApiError::Internal { message } => {
                // The underlying message stays server-side.
                error!(error = %message, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    title: String::from("Internal Server Error"),
                    detail: String::from("An unexpected error occurred."),
                }
            }
        }
    }
}

/// Renders a JSON body-extraction rejection as a Bad Request problem.
fn bad_request(rejection: &JsonRejection) -> HttpError {
    HttpError {
        status: StatusCode::BAD_REQUEST,
        title: String::from("Bad Request"),
        detail: rejection.body_text(),
    }
}

/// Finishes a process log and writes it to the store.
///
/// A failure to write the log is reported via `tracing::warn!` and never
/// fails the request.
async fn persist_log(app_state: &AppState, log: &ProcessLog, started: Instant) {
    let elapsed_ms: i64 = i64::try_from(started.elapsed().as_millis()).unwrap_or(i64::MAX);
    match log.finish(elapsed_ms) {
        Ok(entry) => {
            let mut persistence = app_state.persistence.lock().await;
            if let Err(err) = persistence.insert_log_entry(&entry) {
                warn!(error = %err, "Failed to persist process log entry");
            }
            drop(persistence);
        }
        Err(err) => warn!(error = %err, "Failed to finish process log entry"),
    }
}

/// Handler for GET `/person` endpoint.
///
/// Lists every person with their current astronaut status.
async fn handle_get_people(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<GetPeopleResponse>, HttpError> {
    info!("Handling get_people request");

    let started: Instant = Instant::now();
    let mut log: ProcessLog = ProcessLog::new();

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<GetPeopleResponse, ApiError> = get_people(&mut persistence, &mut log);
    drop(persistence);

    if let Err(err) = &result {
        log.record_error(err.detail());
    }
    persist_log(&app_state, &log, started).await;

    let response: GetPeopleResponse = result?;

    Ok(Json(response))
}

/// Handler for GET `/person/{name}` endpoint.
///
/// Looks up a single person by exact name.
async fn handle_get_person_by_name(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Result<Json<GetPersonByNameResponse>, HttpError> {
    info!(name = %name, "Handling get_person_by_name request");

    let started: Instant = Instant::now();
    let mut log: ProcessLog = ProcessLog::new();

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<GetPersonByNameResponse, ApiError> =
        get_person_by_name(&mut persistence, &mut log, &name);
    drop(persistence);

    if let Err(err) = &result {
        log.record_error(err.detail());
    }
    persist_log(&app_state, &log, started).await;

    let response: GetPersonByNameResponse = result?;

    Ok(Json(response))
}

/// Handler for POST `/person` endpoint.
///
/// Creates a person and answers 201 with a Location pointing at the new
/// resource.
async fn handle_create_person(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> Result<Response, HttpError> {
    let Json(req) = payload.map_err(|rejection| bad_request(&rejection))?;
    info!(name = %req.name, "Handling create_person request");

    let started: Instant = Instant::now();
    let mut log: ProcessLog = ProcessLog::new();
    let name: String = req.name.clone();

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<CreatePersonResponse, ApiError> =
        create_person(&mut persistence, &mut log, req);
    drop(persistence);

    if let Err(err) = &result {
        log.record_error(err.detail());
    }
    persist_log(&app_state, &log, started).await;

    let response: CreatePersonResponse = result?;
    info!(person_id = response.id, "Successfully created person");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/person/{name}"))],
        Json(response),
    )
        .into_response())
}

/// Handler for PUT `/person/{name}` endpoint.
///
/// Renames an existing person.
async fn handle_rename_person(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<RenamePersonRequest>, JsonRejection>,
) -> Result<Json<RenamePersonResponse>, HttpError> {
    let Json(req) = payload.map_err(|rejection| bad_request(&rejection))?;
    info!(name = %name, new_name = %req.new_name, "Handling rename_person request");

    let started: Instant = Instant::now();
    let mut log: ProcessLog = ProcessLog::new();

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<RenamePersonResponse, ApiError> =
        rename_person(&mut persistence, &mut log, &name, req);
    drop(persistence);

    if let Err(err) = &result {
        log.record_error(err.detail());
    }
    persist_log(&app_state, &log, started).await;

    let response: RenamePersonResponse = result?;
    info!(person_id = response.id, "Successfully renamed person");

    Ok(Json(response))
}

/// Handler for GET `/astronautduty/{name}` endpoint.
///
/// Retrieves a person's full duty history.
async fn handle_get_astronaut_duties(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Result<Json<GetAstronautDutiesResponse>, HttpError> {
    info!(name = %name, "Handling get_astronaut_duties request");

    let started: Instant = Instant::now();
    let mut log: ProcessLog = ProcessLog::new();

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<GetAstronautDutiesResponse, ApiError> =
        get_astronaut_duties_by_name(&mut persistence, &mut log, &name);
    drop(persistence);

    if let Err(err) = &result {
        log.record_error(err.detail());
    }
    persist_log(&app_state, &log, started).await;

    let response: GetAstronautDutiesResponse = result?;

    Ok(Json(response))
}

/// Handler for POST `/astronautduty` endpoint.
///
/// Records a new duty assignment and answers 201 with a Location pointing
/// at the person's duty history.
async fn handle_create_astronaut_duty(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateAstronautDutyRequest>, JsonRejection>,
) -> Result<Response, HttpError> {
    let Json(req) = payload.map_err(|rejection| bad_request(&rejection))?;
    info!(
        name = %req.name,
        rank = %req.rank,
        duty_title = %req.duty_title,
        duty_start_date = %req.duty_start_date,
        "Handling create_astronaut_duty request"
    );

    let started: Instant = Instant::now();
    let mut log: ProcessLog = ProcessLog::new();
    let name: String = req.name.clone();

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<CreateAstronautDutyResponse, ApiError> =
        create_astronaut_duty(&mut persistence, &mut log, req);
    drop(persistence);

    if let Err(err) = &result {
        log.record_error(err.detail());
    }
    persist_log(&app_state, &log, started).await;

    let response: CreateAstronautDutyResponse = result?;
    info!(duty_id = response.id, "Successfully created astronaut duty");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/astronautduty/{name}"))],
        Json(response),
    )
        .into_response())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/person", get(handle_get_people))
        .route("/person", post(handle_create_person))
        .route("/person/{name}", get(handle_get_person_by_name))
        .route("/person/{name}", put(handle_rename_person))
        .route("/astronautduty", post(handle_create_astronaut_duty))
        .route("/astronautduty/{name}", get(handle_get_astronaut_duties))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing ACTS server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if args.seed_demo {
        let seeded: bool = persistence.seed_demo_data()?;
        if seeded {
            info!("Seeded demo people");
        }
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
