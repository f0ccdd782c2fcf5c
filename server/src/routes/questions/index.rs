use actix_web::{
    web::{block, Data, Json},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, SqlitePool};
use errors::Error;

use crate::clock::Clock;

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexResponse {
    pub latest_questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn index(
    pool: Data<SqlitePool>,
    clock: Data<dyn Clock>,
) -> Result<Json<IndexResponse>, Error> {
    let now = clock.now();

    let res = block(move || {
        let mut conn = get_conn(&pool)?;
        Question::published(&mut conn, now)
    })
    .await?;

    let latest_questions = res?;
    let message = if latest_questions.is_empty() {
        Some("No polls are available.".to_string())
    } else {
        None
    };

    Ok(Json(IndexResponse {
        latest_questions,
        message,
    }))
}
