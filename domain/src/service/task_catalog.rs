use crate::model::entity::TaskEntry;

#[async_trait::async_trait]
pub trait TaskCatalog {
    /// Enabled entries, in declaration order
    async fn enabled_tasks(&self) -> anyhow::Result<Vec<TaskEntry>>;
}
