use actix_web::{get, web, HttpResponse};
use log::{error, info};

use crate::errors::PuzzleError;
use crate::models::AppState;

#[get("/api/config")]
pub async fn get_config(data: web::Data<AppState>) -> Result<HttpResponse, PuzzleError> {
    let today = data.clock.today();
    let info = data.puzzle.info(today).map_err(|e| {
        error!("Cannot build puzzle info for {}: {}", today, e);
        e
    })?;

    info!(
        "Served puzzle info for {}: {} letters, topic '{}'",
        today, info.word_length, info.topic
    );

    Ok(HttpResponse::Ok().json(info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{state, state_with_words};
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_get_config_returns_length_and_topic() {
        let app = test::init_service(App::new().app_data(state()).service(get_config)).await;
        let req = test::TestRequest::get().uri("/api/config").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "wordLength": 6, "topic": "Space" }));
    }

    #[actix_web::test]
    async fn test_get_config_without_words_is_server_error() {
        let app =
            test::init_service(App::new().app_data(state_with_words(&[])).service(get_config)).await;
        let req = test::TestRequest::get().uri("/api/config").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "detail": "no words in the word list" }));
    }
}
