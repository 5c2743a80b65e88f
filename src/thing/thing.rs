/// A row of the `thing` table. The `id` is assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Thing {
    pub id: i32,
    pub name: String,
}

impl Thing {
    /// Name of the `n`th thing of a workflow run.
    pub fn name_for(n: u32) -> String {
        format!("thing-{n}")
    }
}
