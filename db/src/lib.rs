#[macro_use]
extern crate log;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use r2d2::Error;

pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;
pub type Connection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub mod models;
pub mod schema;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn get_conn(pool: &SqlitePool) -> Result<Connection, Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err
    })
}

/// Builds a pool against `database_url` and brings the schema up to date.
/// An in-memory url gets a single-connection pool, since each sqlite
/// `:memory:` connection is its own database.
pub fn new_pool(database_url: &str) -> SqlitePool {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let builder = if database_url == ":memory:" {
        Pool::builder().max_size(1)
    } else {
        Pool::builder()
    };

    let pool = builder.build(manager).expect("failed to create db pool");

    let mut conn = pool
        .get()
        .expect("failed to get connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("failed to run migrations");

    pool
}
