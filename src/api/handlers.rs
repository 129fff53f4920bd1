use super::request::PlayRequest;
use super::response::ChoiceResponse;
use super::response::GameResponse;
use super::response::PlayResponse;
use super::response::PlayerResponse;
use crate::arcade::Arcade;
use crate::game::Choice;
use crate::game::Submission;
use crate::game::Token;
use crate::oracle::ChoiceSource;
use crate::store::PgErr;
use crate::util::ID;
use crate::util::SCOREBOARD_LIMIT;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

type Source = Box<dyn ChoiceSource>;

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Game not found" }))
}

fn crashed(e: PgErr) -> HttpResponse {
    log::error!("store failure: {}", e);
    HttpResponse::InternalServerError().finish()
}

pub async fn health(arcade: web::Data<Arcade>) -> impl Responder {
    match arcade
        .ping()
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(()) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

/// GET /choices — every valid move with its wire id.
pub async fn choices() -> impl Responder {
    let all = Choice::all().map(ChoiceResponse::from);
    HttpResponse::Ok().json(all)
}

/// GET /choice — one randomly drawn move.
pub async fn choice(source: web::Data<Source>) -> impl Responder {
    HttpResponse::Ok().json(ChoiceResponse::from(source.next().await))
}

/// POST /play — one solo round against the computer.
pub async fn play(
    arcade: web::Data<Arcade>,
    source: web::Data<Source>,
    body: web::Json<PlayRequest>,
) -> impl Responder {
    let Ok(player) = Choice::try_from(body.player) else {
        return HttpResponse::BadRequest().finish();
    };
    let computer = source.next().await;
    match arcade.solo(player, computer).await {
        Ok(outcome) => HttpResponse::Ok().json(PlayResponse::from(&outcome)),
        Err(e) => crashed(e),
    }
}

/// GET /scoreboard — the 10 most recent outcomes.
pub async fn scoreboard(arcade: web::Data<Arcade>) -> impl Responder {
    match arcade.recent(SCOREBOARD_LIMIT).await {
        Ok(outcomes) => {
            HttpResponse::Ok().json(outcomes.iter().map(PlayResponse::from).collect::<Vec<_>>())
        }
        Err(e) => crashed(e),
    }
}

/// DELETE /scoreboard — restart the scoreboard by deleting all outcomes.
pub async fn restart(arcade: web::Data<Arcade>) -> impl Responder {
    match arcade.clear().await {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => crashed(e),
    }
}

/// POST /game — pair the caller into a session; 201 with their token
/// whether they opened the session or filled its second seat.
pub async fn pair(arcade: web::Data<Arcade>) -> impl Responder {
    match arcade.pair().await {
        Ok(token) => HttpResponse::Created().json(PlayerResponse {
            player_uuid: token.inner(),
        }),
        Err(e) => crashed(e),
    }
}

/// GET /game/{player_uuid} — session projection with full history,
/// identical for either of the session's two tokens.
pub async fn game(arcade: web::Data<Arcade>, path: web::Path<uuid::Uuid>) -> impl Responder {
    let token: Token = ID::from(path.into_inner());
    match arcade.session(token).await {
        Ok(Some(view)) => HttpResponse::Ok().json(GameResponse::from(&view)),
        Ok(None) => not_found(),
        Err(e) => crashed(e),
    }
}

/// POST /game/{player_uuid} — submit a move for the current round.
pub async fn submit(
    arcade: web::Data<Arcade>,
    path: web::Path<uuid::Uuid>,
    body: web::Json<PlayRequest>,
) -> impl Responder {
    let Ok(choice) = Choice::try_from(body.player) else {
        return HttpResponse::BadRequest().finish();
    };
    let token: Token = ID::from(path.into_inner());
    match arcade.submit(token, choice).await {
        Ok(Submission::Resolved(_)) => HttpResponse::Created().finish(),
        Ok(Submission::Accepted) => HttpResponse::Accepted().finish(),
        Ok(Submission::Rejected) => HttpResponse::MethodNotAllowed().finish(),
        Ok(Submission::NotFound) => not_found(),
        Err(e) => crashed(e),
    }
}
