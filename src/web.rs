use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use serde::Serialize;

use crate::form::TournamentSubmission;
use crate::schedule::{generate_all, CategoryConfig, CategoryKind, Schedule};
use crate::error::SchedulerError;

#[derive(Serialize)]
pub struct CategoryPreset {
    category: CategoryKind,
    match_duration_minutes: u32,
    break_minutes: u32,
    slot_duration_minutes: u32,
}

/// Result for one category: either a schedule or the reason it failed
#[derive(Serialize)]
pub struct CategoryOutcome {
    category: CategoryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule: Option<Schedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    /// "invalid_input" when the organiser can fix the request, "unsatisfiable" otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<&'static str>,
}

impl CategoryOutcome {
    fn from_result(category: CategoryKind, result: Result<Schedule, SchedulerError>) -> Self {
        match result {
            Ok(schedule) => Self { category, schedule: Some(schedule), error: None, error_kind: None },
            Err(e) => Self {
                category,
                schedule: None,
                error_kind: Some(if e.is_user_correctable() { "invalid_input" } else { "unsatisfiable" }),
                error: Some(e.to_string()),
            },
        }
    }
}

// Category presets endpoint
async fn get_categories() -> Result<HttpResponse> {
    let presets: Vec<CategoryPreset> = CategoryKind::ALL
        .iter()
        .map(|&kind| CategoryPreset {
            category: kind,
            match_duration_minutes: kind.match_duration_minutes(),
            break_minutes: kind.break_minutes(),
            slot_duration_minutes: kind.match_duration_minutes() + kind.break_minutes(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(presets))
}

// Schedule generation endpoint
async fn post_schedule(req: web::Json<TournamentSubmission>) -> Result<HttpResponse> {
    let submission = req.into_inner();
    if submission.categories.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "Select at least one category"
        })));
    }

    // Configs that fail validation are reported alongside the generated ones
    let mut outcomes: Vec<Option<CategoryOutcome>> = Vec::new();
    let mut configs: Vec<CategoryConfig> = Vec::new();
    for category in submission.categories {
        let kind = category.category;
        match category.into_config() {
            Ok(config) => {
                configs.push(config);
                outcomes.push(None);
            }
            Err(e) => outcomes.push(Some(CategoryOutcome::from_result(kind, Err(e)))),
        }
    }

    let mut generated = configs
        .iter()
        .zip(generate_all(&configs))
        .map(|(config, result)| CategoryOutcome::from_result(config.kind, result));
    let outcomes: Vec<CategoryOutcome> = outcomes
        .into_iter()
        .filter_map(|slot| slot.or_else(|| generated.next()))
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "categories": outcomes
    })))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/categories", web::get().to(get_categories))
        .route("/api/schedule", web::post().to(post_schedule));
}

pub async fn start_server(port: u16) -> std::io::Result<()> {
    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
