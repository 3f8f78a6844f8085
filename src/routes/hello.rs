// src/routes/hello.rs

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
    pub status: &'static str,
}

pub async fn hello() -> Json<GreetingResponse> {
    Json(GreetingResponse { message: "Hola Mundo", status: "success" })
}
