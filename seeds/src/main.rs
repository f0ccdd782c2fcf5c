use std::env;

use chrono::{Duration, Utc};
use dotenv::dotenv;

use db::{get_conn, models::Question, new_pool};

fn main() {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = new_pool(&database_url);
    let mut conn = get_conn(&pool).unwrap();

    for (question_text, days) in &[
        ("What's new?", 0),
        ("What's up?", -1),
        ("How was last month?", -30),
        ("What does tomorrow hold?", 1),
    ] {
        Question::create(
            &mut conn,
            question_text.to_string(),
            Utc::now() + Duration::days(*days),
        )
        .unwrap();
    }
}
