use crate::model::fixture::FixtureSchema;
use crate::model::player::PlayerSchema;
use crate::model::response::{DataResponse, Response};
use crate::model::team::{NewTeamSchema, UpdateTeamSchema};
use crate::service::error::ServiceError;
use crate::service::fixture::{
    create_fixture_service, delete_fixture_service, get_fixture_service, list_fixtures_service,
    schedule_service, update_fixture_service,
};
use crate::service::player::{
    create_player_service, delete_player_service, get_player_service, leaderboards_service,
    list_players_service, update_player_service,
};
use crate::service::standings::{
    recalculate_standings_service, standings_service, summary_service,
};
use crate::service::team::{
    create_team_service, delete_team_service, get_team_service, list_teams_service,
    update_team_service,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{delete, error, get, post, put, web, HttpResponse};
use serde::Deserialize;

type HandlerResult = Result<HttpResponse, ServiceError>;

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    limit: Option<usize>,
}

#[get("/teams")]
async fn list_teams_handler(data: Data<AppState>) -> HandlerResult {
    let teams = list_teams_service(data.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(DataResponse::success(teams)))
}

#[post("/teams")]
async fn create_team_handler(data: Data<AppState>, body: Json<NewTeamSchema>) -> HandlerResult {
    let team = create_team_service(data.store.as_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(DataResponse::success(team)))
}

#[get("/teams/{id}")]
async fn get_team_handler(data: Data<AppState>, id: Path<String>) -> HandlerResult {
    let team = get_team_service(data.store.as_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(DataResponse::success(team)))
}

#[put("/teams/{id}")]
async fn update_team_handler(
    data: Data<AppState>,
    id: Path<String>,
    body: Json<UpdateTeamSchema>,
) -> HandlerResult {
    let team = update_team_service(data.store.as_ref(), &id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DataResponse::success(team)))
}

#[delete("/teams/{id}")]
async fn delete_team_handler(data: Data<AppState>, id: Path<String>) -> HandlerResult {
    delete_team_service(data.store.as_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(Response::success("Team deleted")))
}

#[get("/fixtures")]
async fn list_fixtures_handler(data: Data<AppState>) -> HandlerResult {
    let fixtures = list_fixtures_service(data.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(DataResponse::success(fixtures)))
}

#[get("/fixtures/schedule")]
async fn schedule_handler(data: Data<AppState>) -> HandlerResult {
    let rounds = schedule_service(data.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(DataResponse::success(rounds)))
}

#[post("/fixtures")]
async fn create_fixture_handler(data: Data<AppState>, body: Json<FixtureSchema>) -> HandlerResult {
    let fixture = create_fixture_service(data.store.as_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(DataResponse::success(fixture)))
}

#[get("/fixtures/{id}")]
async fn get_fixture_handler(data: Data<AppState>, id: Path<String>) -> HandlerResult {
    let fixture = get_fixture_service(data.store.as_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(DataResponse::success(fixture)))
}

#[put("/fixtures/{id}")]
async fn update_fixture_handler(
    data: Data<AppState>,
    id: Path<String>,
    body: Json<FixtureSchema>,
) -> HandlerResult {
    let fixture = update_fixture_service(data.store.as_ref(), &id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DataResponse::success(fixture)))
}

#[delete("/fixtures/{id}")]
async fn delete_fixture_handler(data: Data<AppState>, id: Path<String>) -> HandlerResult {
    delete_fixture_service(data.store.as_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(Response::success("Fixture deleted")))
}

#[get("/players")]
async fn list_players_handler(data: Data<AppState>) -> HandlerResult {
    let players = list_players_service(data.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(DataResponse::success(players)))
}

#[post("/players")]
async fn create_player_handler(data: Data<AppState>, body: Json<PlayerSchema>) -> HandlerResult {
    let player = create_player_service(data.store.as_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(DataResponse::success(player)))
}

#[get("/players/{id}")]
async fn get_player_handler(data: Data<AppState>, id: Path<String>) -> HandlerResult {
    let player = get_player_service(data.store.as_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(DataResponse::success(player)))
}

#[put("/players/{id}")]
async fn update_player_handler(
    data: Data<AppState>,
    id: Path<String>,
    body: Json<PlayerSchema>,
) -> HandlerResult {
    let player = update_player_service(data.store.as_ref(), &id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DataResponse::success(player)))
}

#[delete("/players/{id}")]
async fn delete_player_handler(data: Data<AppState>, id: Path<String>) -> HandlerResult {
    delete_player_service(data.store.as_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(Response::success("Player deleted")))
}

#[get("/stats/players")]
async fn player_stats_handler(data: Data<AppState>, query: Query<LeaderboardQuery>) -> HandlerResult {
    let limit = query.limit.unwrap_or(data.config.leaderboard_limit);
    let boards = leaderboards_service(data.store.as_ref(), limit).await?;
    Ok(HttpResponse::Ok().json(DataResponse::success(boards)))
}

#[get("/standings")]
async fn standings_handler(data: Data<AppState>) -> HandlerResult {
    let table = standings_service(data.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(DataResponse::success(table)))
}

#[post("/standings/recalculate")]
async fn recalculate_standings_handler(data: Data<AppState>) -> HandlerResult {
    let report = recalculate_standings_service(data.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(DataResponse::success(report)))
}

#[get("/summary")]
async fn summary_handler(data: Data<AppState>) -> HandlerResult {
    let summary = summary_service(data.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(DataResponse::success(summary)))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(Response::failed(message)),
        )
        .into()
    })
}

pub fn config(conf: &mut web::ServiceConfig) {
    // Fixed paths go before their `{id}` siblings.
    let scope = web::scope("/api/v1")
        .app_data(json_config())
        .service(list_teams_handler)
        .service(create_team_handler)
        .service(get_team_handler)
        .service(update_team_handler)
        .service(delete_team_handler)
        .service(list_fixtures_handler)
        .service(schedule_handler)
        .service(create_fixture_handler)
        .service(get_fixture_handler)
        .service(update_fixture_handler)
        .service(delete_fixture_handler)
        .service(list_players_handler)
        .service(create_player_handler)
        .service(get_player_handler)
        .service(update_player_handler)
        .service(delete_player_handler)
        .service(player_stats_handler)
        .service(standings_handler)
        .service(recalculate_standings_handler)
        .service(summary_handler);

    conf.service(scope);
}
