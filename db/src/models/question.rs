use chrono::{DateTime, Duration, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions;

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn create(
        conn: &mut SqliteConnection,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .get_result(conn)?;

        Ok(question)
    }

    /// Questions visible in a list context: everything with a `pub_date` on
    /// or before `now`, newest first. Future-dated questions never appear.
    pub fn published(
        conn: &mut SqliteConnection,
        now: DateTime<Utc>,
    ) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{pub_date, questions};

        let visible = questions
            .filter(pub_date.le(now))
            .order(pub_date.desc())
            .load::<Question>(conn)?;

        Ok(visible)
    }

    /// Single-question lookup gated by the same visibility rule as the
    /// listing. A future-dated question and a missing id both come back as
    /// the not-found error, so callers cannot tell them apart.
    pub fn find_published(
        conn: &mut SqliteConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use crate::schema::questions::dsl::{id, pub_date, questions};

        let question = questions
            .filter(id.eq(question_id))
            .filter(pub_date.le(now))
            .first(conn)?;

        Ok(question)
    }

    /// Whether `pub_date` falls within the trailing 24 hour window ending
    /// at `now`.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        self.pub_date > now - Duration::hours(24) && self.pub_date <= now
    }
}
