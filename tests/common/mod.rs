#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sqlx::Error as SqlxError;
use thing_inserts::thing::thing_repository::{DELETE_ALL_THINGS, INSERT_THING, SELECT_THING_BY_NAME};
use thing_inserts::{Handle, Thing, ThingError};
use tokio::time::Instant;
use tracing::subscriber::DefaultGuard;

/// A statement the in-memory table saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    DeleteAll,
    Insert(String),
    Select(String),
}

/// In-memory stand-in for the `thing` table. Ids increase monotonically and
/// are never reused, like a SERIAL column.
#[derive(Default)]
pub struct MemoryHandle {
    pub rows: Vec<Thing>,
    pub statements: Vec<(Statement, Instant)>,
    next_id: i32,
    failing: Vec<Statement>,
}

impl MemoryHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the given statement fail every time it is executed.
    pub fn fail_on(mut self, statement: Statement) -> Self {
        self.failing.push(statement);
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|thing| thing.name.as_str()).collect()
    }

    pub fn executed(&self) -> Vec<Statement> {
        self.statements.iter().map(|(s, _)| s.clone()).collect()
    }

    fn record(&mut self, statement: Statement) -> Result<(), ThingError> {
        self.statements.push((statement.clone(), Instant::now()));
        if self.failing.contains(&statement) {
            return Err(ThingError::Database(SqlxError::Protocol(format!(
                "injected failure for {statement:?}"
            ))));
        }
        Ok(())
    }
}

fn first_param(params: &[&str]) -> String {
    params.first().copied().unwrap_or_default().to_string()
}

#[async_trait]
impl Handle for MemoryHandle {
    async fn run(&mut self, sql: &str, params: &[&str]) -> Result<u64, ThingError> {
        match sql {
            DELETE_ALL_THINGS => {
                self.record(Statement::DeleteAll)?;
                let deleted = self.rows.len() as u64;
                self.rows.clear();
                Ok(deleted)
            }
            INSERT_THING => {
                let name = first_param(params);
                self.record(Statement::Insert(name.clone()))?;
                self.next_id += 1;
                self.rows.push(Thing {
                    id: self.next_id,
                    name,
                });
                Ok(1)
            }
            other => panic!("unexpected statement: {other}"),
        }
    }

    async fn one(&mut self, sql: &str, params: &[&str]) -> Result<Thing, ThingError> {
        assert_eq!(sql, SELECT_THING_BY_NAME);
        let name = first_param(params);
        self.record(Statement::Select(name.clone()))?;

        let matching: Vec<&Thing> = self.rows.iter().filter(|t| t.name == name).collect();
        match matching.as_slice() {
            [] => Err(ThingError::NotFound { name }),
            [thing] => Ok((*thing).clone()),
            _ => Err(ThingError::TooManyRows {
                name,
                count: matching.len(),
            }),
        }
    }
}

/// Shared buffer the capturing subscriber writes formatted events into.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Index of the first line containing `needle`.
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.lines().iter().position(|line| line.contains(needle))
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Captures log output on the current thread until the guard is dropped.
pub fn capture_logs() -> (LogBuffer, DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(buffer.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
