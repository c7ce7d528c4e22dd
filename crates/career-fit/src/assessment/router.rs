use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::catalog::{QuestionCatalog, QuestionView};
use super::import::AnswerSheetImporter;
use super::report::ResultsSummary;
use super::scoring::{score, AssessmentResults};
use crate::error::AppError;

/// `answers` stays raw JSON so malformed entries are reported by the
/// importer instead of the extractor.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default = "empty_answers")]
    pub answers: Value,
}

fn empty_answers() -> Value {
    Value::Object(serde_json::Map::new())
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub answered: usize,
    pub complete: bool,
    pub results: AssessmentResults,
    pub summary: ResultsSummary,
}

/// Router builder exposing the catalog and the scorer over HTTP.
pub fn assessment_router(catalog: Arc<QuestionCatalog>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/score", post(score_handler))
        .with_state(catalog)
}

pub(crate) async fn questions_handler(
    State(catalog): State<Arc<QuestionCatalog>>,
) -> Json<Vec<QuestionView>> {
    Json(catalog.view())
}

pub(crate) async fn score_handler(
    State(catalog): State<Arc<QuestionCatalog>>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let answers = AnswerSheetImporter::from_json_value(&catalog, &request.answers)?;
    let results = score(&answers);

    Ok(Json(ScoreResponse {
        answered: answers.len(),
        complete: answers.is_complete(&catalog),
        summary: results.summary(),
        results,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::json;
    use tower::ServiceExt;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn router() -> Router {
        assessment_router(Arc::new(QuestionCatalog::standard()))
    }

    #[tokio::test]
    async fn questions_endpoint_lists_catalog() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/assessment/questions")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let questions = body.as_array().expect("array body");
        assert_eq!(questions.len(), 15);
        assert_eq!(questions[0]["id"], "interest_analytics");
        assert_eq!(questions[8]["range"]["max"], 10);
    }

    async fn post_score(payload: Value) -> Response {
        router()
            .oneshot(
                Request::post("/api/v1/assessment/score")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds")
    }

    async fn error_message(response: Response) -> String {
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        body["error"].as_str().expect("error message").to_string()
    }

    #[tokio::test]
    async fn score_endpoint_returns_summary_for_partial_answers() {
        let response = post_score(json!({
            "answers": {
                "interest_analytics": "Strongly Agree",
                "tools_familiarity": 4
            }
        }))
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["answered"], 2);
        assert_eq!(body["complete"], false);
        assert_eq!(body["results"]["technical_score"], 10);
        assert_eq!(body["summary"]["recommendation"], "negative");
        assert_eq!(body["summary"]["recommendation_label"], "No");
    }

    #[tokio::test]
    async fn score_endpoint_treats_missing_answers_as_empty() {
        let response = post_score(json!({})).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["answered"], 0);
        assert_eq!(body["results"]["overall_score"], 3);
    }

    #[tokio::test]
    async fn score_endpoint_rejects_out_of_range_values() {
        let message =
            error_message(post_score(json!({ "answers": { "tools_familiarity": 42 } })).await)
                .await;
        assert!(message.contains("tools_familiarity"));
    }

    #[tokio::test]
    async fn score_endpoint_rejects_fractional_and_null_answers_as_bad_request() {
        let message =
            error_message(post_score(json!({ "answers": { "tools_familiarity": 2.5 } })).await)
                .await;
        assert!(message.contains("'tools_familiarity' must be a string or an integer"));

        let message =
            error_message(post_score(json!({ "answers": { "math_roi": null } })).await).await;
        assert!(message.contains("'math_roi' must be a string or an integer"));

        let message = error_message(post_score(json!({ "answers": ["Agree"] })).await).await;
        assert!(message.contains("must be a JSON object"));
    }
}
