use actix_web::{post, web, HttpResponse};
use log::{error, info, warn};

use crate::errors::PuzzleError;
use crate::models::{AppState, GuessRequest};

#[post("/api/check")]
pub async fn check_guess(
    data: web::Data<AppState>,
    body: web::Json<GuessRequest>,
) -> Result<HttpResponse, PuzzleError> {
    let guess = body.into_inner().guess;
    let today = data.clock.today();

    let result = data.puzzle.check(today, &guess).map_err(|e| {
        if e.is_client_error() {
            warn!("Rejected guess {}: {}", guess.to_uppercase(), e);
        } else {
            error!("Cannot score guess for {}: {}", today, e);
        }
        e
    })?;

    info!(
        "Scored guess {} for {} (solved: {})",
        guess.to_uppercase(),
        today,
        result.solved
    );

    Ok(HttpResponse::Ok().json(result))
}
