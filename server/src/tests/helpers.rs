#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use actix_web::{test, web::Data, App};
    use chrono::{Duration, Utc};
    use serde::{de::DeserializeOwned, Serialize};

    use db::{get_conn, models::Question, SqlitePool};

    use crate::clock::{system_clock, Clock};
    use crate::routes::routes;

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(pool: &SqlitePool, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        test_get_with_clock(pool, route, system_clock()).await
    }

    pub async fn test_get_with_clock<R>(
        pool: &SqlitePool,
        route: &str,
        clock: Arc<dyn Clock>,
    ) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .app_data(Data::from(clock))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get().uri(route);
        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T, R>(pool: &SqlitePool, route: &str, params: T) -> (u16, R)
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .app_data(Data::from(system_clock()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post().set_json(&params).uri(route);
        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Persists a question with a pub_date offset `days` from the current
    /// time, mirroring how questions are set up throughout the route tests.
    pub fn create_question(pool: &SqlitePool, question_text: &str, days: i64) -> Question {
        let mut conn = get_conn(pool).unwrap();

        Question::create(
            &mut conn,
            question_text.to_string(),
            Utc::now() + Duration::days(days),
        )
        .unwrap()
    }
}
