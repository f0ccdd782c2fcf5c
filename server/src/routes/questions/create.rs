use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::{get_conn, models::Question, SqlitePool};
use errors::Error;

use crate::clock::Clock;
use crate::validate::validate;

#[derive(Clone, Deserialize, Serialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "question_text is required"))]
    question_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub_date: Option<DateTime<Utc>>,
}

pub async fn create(
    pool: Data<SqlitePool>,
    clock: Data<dyn Clock>,
    params: Json<CreateQuestionRequest>,
) -> Result<Json<Question>, Error> {
    validate(&params)?;

    // pub_date defaults to the moment of creation
    let pub_date = params.pub_date.unwrap_or_else(|| clock.now());
    let question_text = params.question_text.clone();

    let res = block(move || {
        let mut conn = get_conn(&pool)?;
        Question::create(&mut conn, question_text, pub_date)
    })
    .await?;

    Ok(Json(res?))
}
