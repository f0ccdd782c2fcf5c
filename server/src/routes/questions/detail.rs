use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};

use db::{get_conn, models::Question, SqlitePool};
use errors::Error;

use crate::clock::Clock;

pub async fn detail(
    pool: Data<SqlitePool>,
    clock: Data<dyn Clock>,
    id: Path<i32>,
) -> Result<Json<Question>, Error> {
    let question_id = id.into_inner();
    let now = clock.now();

    let res = block(move || {
        let mut conn = get_conn(&pool)?;
        Question::find_published(&mut conn, question_id, now)
    })
    .await?;

    Ok(Json(res?))
}
