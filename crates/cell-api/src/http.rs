use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::Serialize;

use cell_core::{ConfigError, SolveError, TwoDiodeModel};

use crate::schema::{
    CharacteristicsRequest, CharacteristicsResponse, IvPoint, IvRequest, IvResponse,
};

pub struct HttpServerConfig {
    pub bind_addr: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    details: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

pub async fn run(config: HttpServerConfig) -> Result<(), String> {
    let app = build_router();
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|err| format!("bind {} failed: {}", config.bind_addr, err))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))
}

// Solves are pure functions of the request body, so the router carries no
// state and every request is independently parallel.
fn build_router() -> Router {
    Router::new()
        .route("/v1/solve/characteristics", post(solve_characteristics))
        .route("/v1/solve/iv", post(solve_iv))
}

async fn solve_characteristics(
    Json(payload): Json<CharacteristicsRequest>,
) -> impl IntoResponse {
    let model = match TwoDiodeModel::new(payload.parameters.into(), payload.effects.into()) {
        Ok(model) => model,
        Err(err) => return config_error(err),
    };
    let ch = match model.characteristics() {
        Ok(ch) => ch,
        Err(err) => return solve_error(err),
    };
    Json(CharacteristicsResponse::new(ch, model.scaling_law())).into_response()
}

async fn solve_iv(Json(payload): Json<IvRequest>) -> impl IntoResponse {
    let model = match TwoDiodeModel::new(payload.parameters.into(), payload.effects.into()) {
        Ok(model) => model,
        Err(err) => return config_error(err),
    };
    let mut points = Vec::with_capacity(payload.voltages.len());
    for voltage in payload.voltages {
        let current = match model.current_density(voltage) {
            Ok(current) => current,
            Err(err) => return solve_error(err),
        };
        points.push(IvPoint {
            voltage,
            current,
            power: voltage * current,
        });
    }
    Json(IvResponse {
        scaling_law: format!("{:?}", model.scaling_law()),
        points,
    })
    .into_response()
}

fn config_error(err: ConfigError) -> axum::response::Response {
    api_error(
        StatusCode::BAD_REQUEST,
        "CONFIG_ERROR",
        &err.to_string(),
        None,
    )
}

fn solve_error(err: SolveError) -> axum::response::Response {
    api_error(
        StatusCode::UNPROCESSABLE_ENTITY,
        "SOLVE_ERROR",
        &err.to_string(),
        None,
    )
}

fn api_error(
    status: StatusCode,
    code: &str,
    message: &str,
    details: Option<Vec<String>>,
) -> axum::response::Response {
    let body = ErrorResponse {
        error: ErrorBody {
            code: code.to_string(),
            message: message.to_string(),
            details,
        },
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn call(router: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn characteristics_solve_round_trip() {
        let body = serde_json::json!({
            "parameters": { "j_ph": -100.0, "t_sim": 298.15 }
        });
        let (status, json) = call(build_router(), "/v1/solve/characteristics", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["scaling_law"], "Identity");
        let u_oc = json["u_oc"].as_f64().unwrap();
        assert!(u_oc > 0.55 && u_oc < 0.70);
    }

    #[tokio::test]
    async fn iv_solve_preserves_point_order() {
        let body = serde_json::json!({
            "parameters": { "j_ph": -100.0, "t_sim": 298.15 },
            "voltages": [0.5, 0.0, 0.25]
        });
        let (status, json) = call(build_router(), "/v1/solve/iv", body).await;
        assert_eq!(status, StatusCode::OK);
        let points = json["points"].as_array().unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0]["voltage"].as_f64().unwrap(), 0.5);
        assert_eq!(points[1]["voltage"].as_f64().unwrap(), 0.0);
    }

    #[tokio::test]
    async fn conflicting_fit_flags_map_to_config_error() {
        let body = serde_json::json!({
            "effects": { "fit_saturation": true, "fit_lifetime": true }
        });
        let (status, json) = call(build_router(), "/v1/solve/characteristics", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "CONFIG_ERROR");
    }
}
